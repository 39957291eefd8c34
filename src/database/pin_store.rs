//! Durable key/value storage for serialized pin sets.
//!
//! A store only moves bytes. Parsing and the empty-set fallback live in the
//! pin registry.

use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::params;

use super::connection::Database;
use crate::types::errors::StoreError;

/// Whole-value reads and writes under a single key.
pub trait PinStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;
    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<(), StoreError>;
}

/// Pin store backed by the `kv_store` table.
pub struct SqlitePinStore {
    db: Database,
}

impl SqlitePinStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl PinStore for SqlitePinStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let result = self.db.connection().query_row(
            "SELECT value FROM kv_store WHERE key = ?1",
            params![key],
            |row| row.get::<_, Vec<u8>>(0),
        );
        match result {
            Ok(bytes) => Ok(Some(bytes)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StoreError::DatabaseError(e.to_string())),
        }
    }

    /// Replaces the value under `key` in one statement.
    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64;
        self.db
            .connection()
            .execute(
                "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3) \
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, bytes, now],
            )
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}

/// In-process store, used by tests and embedders that persist elsewhere.
#[derive(Debug, Default, Clone)]
pub struct MemoryPinStore {
    values: HashMap<String, Vec<u8>>,
}

impl MemoryPinStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates `key`, e.g. with bytes exported from the browser.
    pub fn with_value(key: &str, bytes: &[u8]) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), bytes.to_vec());
        store
    }
}

impl PinStore for MemoryPinStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
