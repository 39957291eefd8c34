//! Pin persistence layer.
//!
//! Provides SQLite connection management, schema migrations and the
//! [`PinStore`] implementations the pin registry persists through.
//!
//! # Usage
//!
//! ```no_run
//! use notion_recents::database::{Database, PinStore, SqlitePinStore};
//!
//! let db = Database::open("pins.db").expect("failed to open database");
//! let mut store = SqlitePinStore::new(db);
//! store.write("notionPinnedFiles", b"[]").expect("write failed");
//! ```

pub mod connection;
pub mod migrations;
pub mod pin_store;

pub use connection::Database;
pub use pin_store::{MemoryPinStore, PinStore, SqlitePinStore};
