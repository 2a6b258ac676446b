//! # Command Layer
//!
//! The business logic of userlist. Each operation lives in its own submodule
//! and exposes a `run` function generic over
//! [`RecordStore`](crate::store::RecordStore).
//!
//! ## Role and Responsibilities
//!
//! - Load the collection, apply one operation, save it back when it changed
//! - Turn the domain conditions "already exists" and "not found" into
//!   messages on a successful [`CmdResult`]
//! - Propagate everything else (I/O, malformed data) as errors
//!
//! Commands never write to stdout or stderr and know nothing about flags.
//! Rendering a [`CmdResult`] is the dispatcher's job.
//!
//! ## Testing Strategy
//!
//! Command tests use [`InMemoryStore`](crate::store::memory::InMemoryStore),
//! which counts saves, so "did not write the file" is directly assertable.
//!
//! ## Command Modules
//!
//! - [`add`]: Insert a record unless its id is taken
//! - [`list`]: Return every record
//! - [`find`]: Look a record up by id
//! - [`remove`]: Swap-remove a record by id

use crate::model::Record;

pub mod add;
pub mod find;
pub mod list;
pub mod remove;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Diagnostic only, never part of the command output.
    Info,
    /// A user-facing notice that is part of the command output.
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records written or removed by the command.
    pub affected_records: Vec<Record>,
    /// Records the command reports back to the caller.
    pub listed_records: Vec<Record>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn warnings(&self) -> impl Iterator<Item = &CmdMessage> {
        self.messages
            .iter()
            .filter(|m| m.level == MessageLevel::Warning)
    }
}
