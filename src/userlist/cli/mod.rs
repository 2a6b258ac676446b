//! # CLI Behavior
//!
//! One possible UI client for userlist. It is the only place that knows about
//! terminal I/O, exit codes and logging setup.
//!
//! ## Flags
//!
//! Flags accept both a single dash and a double dash:
//!
//! ```text
//! userlist -operation add -item '{"id":"1","email":"a@x.com","age":30}' -fileName users.json
//! userlist --operation=list --fileName=users.json
//! ```
//!
//! The CLI does not decide which flags an operation needs. It folds whatever was
//! given into an [`Arguments`](userlist::api::Arguments) map and lets the
//! dispatcher validate it, so the error for a missing flag is the same no
//! matter which client calls the library.
//!
//! ## Module Structure
//!
//! - `commands`: Top-level `run`, wiring config, logging and dispatch
//! - `logging`: `tracing` subscriber setup
//! - `setup`: Argument parsing via clap, single-dash normalization

mod commands;
mod logging;
pub mod setup;

pub use commands::{report_error, run};
