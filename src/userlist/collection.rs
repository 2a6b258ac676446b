//! # Collection
//!
//! The in-memory list of [`Record`]s backing one file. Lookups are linear scans;
//! the lists this tool manages are small enough that an index would only add
//! bookkeeping.
//!
//! Removal is a swap-remove: the last record moves into the freed slot. The
//! on-disk order after a removal therefore differs from insertion order. This is
//! observable and intentional; callers must not rely on record order.

use crate::error::{Result, UserlistError};
use crate::model::Record;
use crate::store::fs::FileStore;
use crate::store::RecordStore;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    records: Vec<Record>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Load the collection stored at `path`, creating an empty file if absent.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        FileStore::new(path).load()
    }

    /// Replace the contents of `path` with this collection.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut store = FileStore::new(path);
        store.save(self)
    }

    /// Decode a JSON array. Empty input is an empty collection.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Ok(Self::new());
        }
        let records: Vec<Record> =
            serde_json::from_slice(bytes).map_err(UserlistError::ParseCollection)?;
        Ok(Self { records })
    }

    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(&self.records).map_err(UserlistError::Serialize)
    }

    pub fn add(&mut self, record: Record) -> Result<()> {
        if self.records.iter().any(|r| r.same_id(&record)) {
            return Err(UserlistError::AlreadyExists(record.id));
        }
        self.records.push(record);
        Ok(())
    }

    pub fn get_by_id(&self, id: &str) -> Result<&Record> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| UserlistError::NotFound(id.to_string()))
    }

    pub fn remove_by_id(&mut self, id: &str) -> Result<Record> {
        let position = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| UserlistError::NotFound(id.to_string()))?;
        Ok(self.records.swap_remove(position))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl From<Vec<Record>> for Collection {
    fn from(records: Vec<Record>) -> Self {
        Self::from_records(records)
    }
}
