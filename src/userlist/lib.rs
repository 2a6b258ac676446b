//! # Userlist Architecture
//!
//! Userlist keeps user records (`id`, `email`, `age`) in a single file holding a
//! JSON array. It is a library with a thin CLI on top; everything below the CLI
//! takes Rust values and returns Rust types.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses flags into an argument map, sets up logging       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Dispatcher (api.rs)                                        │
//! │  - Validates required arguments before any file I/O        │
//! │  - Picks the command, renders its result to a writer        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / list / find / remove over a Collection             │
//! │  - "already exists" and "not found" become messages         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore trait                                        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Limitations
//!
//! Each invocation reads the file once and writes it at most once. There is
//! no locking: two processes writing the same file race and one update is
//! lost. Saving truncates and rewrites in place, so a crash mid-write can
//! leave the file empty or partial.
//!
//! ## Module Overview
//!
//! - [`api`]: Argument validation and dispatch
//! - [`commands`]: Business logic for each operation
//! - [`collection`]: The in-memory record list
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The [`model::Record`] type
//! - [`config`]: Optional settings file
//! - [`error`]: Error types

pub mod api;
pub mod collection;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;

#[cfg(test)]
pub mod test_utils;
