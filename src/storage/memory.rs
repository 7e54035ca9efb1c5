/// In-memory implementation of the document store
///
/// Backs the unit tests and makes it possible to run the stores without a
/// database file. Nothing survives the process.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::storage::{DocumentStore, StorageError};

/// Volatile document store over a plain map
#[derive(Debug, Default)]
pub struct MemoryStore {
    docs: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load a document, e.g. to simulate previously persisted state
    pub fn seed(&self, key: &str, value: &str) {
        self.docs
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.docs.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.docs
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
