/// Storage layer for persisting application state
///
/// The application keeps its whole state in a handful of JSON documents
/// stored under string keys. This module defines that key-value contract
/// and its SQLite-backed and in-memory implementations.

pub mod memory;
pub mod migrations;
pub mod sqlite;

// Re-export the main storage types
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use std::rc::Rc;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Migration error: {0}")]
    Migration(String),
}

/// Durable key-value store for UTF-8 JSON documents
///
/// The contract the stores build on is deliberately small: load a document
/// once at startup, write the whole document back on every mutation. This
/// trait lets tests swap the SQLite file for an in-memory map.
pub trait DocumentStore {
    /// Read the document stored under `key`, if any
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous document
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

// Both stores share one SQLite handle in the application, so the trait is
// also implemented for Rc-wrapped stores.
impl<S: DocumentStore> DocumentStore for Rc<S> {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).save(key, value)
    }
}
