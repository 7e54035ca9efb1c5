/// SQLite implementation of the document store
///
/// Documents live in a single `documents` table, one row per key. Writes
/// replace the whole row; reads return the stored JSON text verbatim.

use std::path::PathBuf;
use rusqlite::{params, Connection, OptionalExtension};
use chrono::Utc;

use crate::storage::{migrations, DocumentStore, StorageError};

/// SQLite-backed document store
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database file and run pending migrations
    pub fn new(db_path: PathBuf) -> Result<Self, StorageError> {
        let conn = Connection::open(&db_path)
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        migrations::initialize_database(&conn)?;

        tracing::info!("SQLite document store initialized at: {:?}", db_path);

        Ok(Self { conn })
    }

    /// Open an in-memory database, mainly useful for tests
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;
        migrations::initialize_database(&conn)?;
        Ok(Self { conn })
    }
}

impl DocumentStore for SqliteStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM documents WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(value)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO documents (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![key, value, Utc::now().to_rfc3339()],
        )?;

        tracing::debug!("Saved document: {} ({} bytes)", key, value.len());
        Ok(())
    }
}
