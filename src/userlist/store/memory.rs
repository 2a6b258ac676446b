use super::RecordStore;
use crate::collection::Collection;
use crate::error::Result;

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    collection: Collection,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(collection: Collection) -> Self {
        Self {
            collection,
            saves: 0,
        }
    }

    /// Number of times `save` has been called.
    pub fn saves(&self) -> usize {
        self.saves
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }
}

impl RecordStore for InMemoryStore {
    fn load(&self) -> Result<Collection> {
        Ok(self.collection.clone())
    }

    fn save(&mut self, collection: &Collection) -> Result<()> {
        self.collection = collection.clone();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Record;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds records with ids "1".."=count".
        pub fn with_records(mut self, count: usize) -> Self {
            let mut collection = self.store.collection.clone();
            for i in 1..=count {
                let record = Record::new(
                    i.to_string(),
                    format!("user{}@example.com", i),
                    20 + i as u64,
                );
                collection.add(record).expect("fixture ids are unique");
            }
            self.store.collection = collection;
            self
        }

        pub fn with_record(mut self, id: &str, email: &str, age: u64) -> Self {
            let mut collection = self.store.collection.clone();
            collection
                .add(Record::new(id, email, age))
                .expect("fixture ids are unique");
            self.store.collection = collection;
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
