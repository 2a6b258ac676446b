//! # Userlist CLI
//!
//! The binary is intentionally thin: argument parsing, logging setup and
//! dispatch live in `cli/`, while this file only invokes `cli::run()` and
//! handles process termination.
//!
//! stdout carries exactly what the dispatcher writes, so `list` and
//! `findById` output can be piped straight into other JSON tools. Logs and
//! errors go to stderr.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        cli::report_error(&e);
        std::process::exit(1);
    }
}
