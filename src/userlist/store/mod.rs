//! # Storage Layer
//!
//! The [`RecordStore`] trait hides where a [`Collection`] lives. Commands only
//! ever load the whole collection, work on it in memory and hand it back.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one JSON array per file
//!   - A missing file is created empty on first load
//!   - Saving truncates the file and rewrites it from offset 0
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Counts saves so tests can assert that nothing was written
//!
//! ## Storage Format
//!
//! ```text
//! [{"id":"1","email":"a@x.com","age":30},{"id":"2","email":"b@x.com","age":41}]
//! ```
//!
//! An empty file is a valid, empty collection.

use crate::collection::Collection;
use crate::error::Result;

pub mod fs;
pub mod memory;

/// Whole-collection persistence.
pub trait RecordStore {
    /// Read the full collection.
    fn load(&self) -> Result<Collection>;

    /// Replace the persisted collection with `collection`.
    fn save(&mut self, collection: &Collection) -> Result<()>;
}
