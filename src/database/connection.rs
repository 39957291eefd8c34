//! SQLite connection management for the pin database.
//!
//! [`Database`] wraps a `rusqlite::Connection` and brings the schema up to
//! date on open, so stores never see a half-initialized file.

use std::fs;
use std::path::Path;

use log::debug;
use rusqlite::Connection;

use super::migrations;
use crate::types::errors::StoreError;

/// Owned SQLite connection with migrations applied.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (or creates) the database at `path`, creating parent
    /// directories first.
    ///
    /// # Errors
    /// `StoreError::Unavailable` when the file cannot be created or opened,
    /// `StoreError::DatabaseError` when migrations fail.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                StoreError::Unavailable(format!("{}: {}", parent.display(), e))
            })?;
        }
        let conn = Connection::open(path)
            .map_err(|e| StoreError::Unavailable(format!("{}: {}", path.display(), e)))?;
        debug!("opened pin database at {}", path.display());
        Self::migrated(conn)
    }

    /// Opens a throwaway in-memory database.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Self::migrated(conn)
    }

    fn migrated(conn: Connection) -> Result<Self, StoreError> {
        migrations::run_all(&conn).map_err(|e| StoreError::DatabaseError(e.to_string()))?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
