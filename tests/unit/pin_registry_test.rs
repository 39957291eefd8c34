//! Unit tests for the PinRegistry over memory and SQLite pin stores.
//!
//! The SQLite cases use a temporary on-disk database so that persistence
//! across a reopen is exercised for real.

use tempfile::TempDir;

use notion_recents::database::{Database, MemoryPinStore, PinStore, SqlitePinStore};
use notion_recents::managers::pin_registry::{PinRegistry, PinRegistryTrait};
use notion_recents::types::errors::StoreError;
use notion_recents::types::pin::PinEntry;

const KEY: &str = "notionPinnedFiles";

/// A store that can be read but rejects every write.
struct ReadOnlyStore;

impl PinStore for ReadOnlyStore {
    fn read(&self, _key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(None)
    }

    fn write(&mut self, _key: &str, _bytes: &[u8]) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("read-only".to_string()))
    }
}

#[test]
fn test_toggle_pins_then_unpins() {
    let mut registry = PinRegistry::new(MemoryPinStore::new(), KEY);
    let url = "https://www.notion.so/roadmap";

    assert!(registry.toggle(url, "Roadmap").unwrap());
    assert!(registry.is_pinned(url));
    assert!(!registry.toggle(url, "Roadmap").unwrap());
    assert!(!registry.is_pinned(url));
    assert!(registry.pins().is_empty());
}

#[test]
fn test_pins_match_exact_url_only() {
    let mut registry = PinRegistry::new(MemoryPinStore::new(), KEY);
    registry.pin("https://www.notion.so/a?v=1", "A").unwrap();
    assert!(registry.is_pinned("https://www.notion.so/a?v=1"));
    assert!(!registry.is_pinned("https://www.notion.so/a"));
}

#[test]
fn test_pin_is_idempotent() {
    let mut registry = PinRegistry::new(MemoryPinStore::new(), KEY);
    registry.pin("https://www.notion.so/a", "A").unwrap();
    registry.pin("https://www.notion.so/a", "A again").unwrap();
    assert_eq!(registry.pins().len(), 1);
    assert_eq!(registry.pins()[0].title, "A");
}

#[test]
fn test_every_mutation_writes_whole_set() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("pins.db");
    {
        let db = Database::open(&path).unwrap();
        let mut registry = PinRegistry::new(SqlitePinStore::new(db), KEY);
        registry.pin("https://www.notion.so/a", "A").unwrap();
        registry.pin("https://www.notion.so/b", "B").unwrap();
        registry.unpin("https://www.notion.so/a").unwrap();
    }

    let store = SqlitePinStore::new(Database::open(&path).unwrap());
    let bytes = store.read(KEY).unwrap().unwrap();
    let stored: Vec<PinEntry> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].url, "https://www.notion.so/b");
}

#[test]
fn test_loads_extension_written_pins() {
    let raw = br#"[{"url":"https://www.notion.so/a","title":"A","pinnedAt":1700000000000}]"#;
    let registry = PinRegistry::new(MemoryPinStore::with_value(KEY, raw), KEY);
    assert!(registry.is_pinned("https://www.notion.so/a"));
    assert_eq!(registry.pins()[0].pinned_at, 1_700_000_000_000);
}

#[test]
fn test_corrupt_pins_load_as_empty_set() {
    let registry = PinRegistry::new(MemoryPinStore::with_value(KEY, b"{not json"), KEY);
    assert!(registry.pins().is_empty());
}

#[test]
fn test_duplicate_stored_urls_collapse_on_load() {
    let raw = br#"[
        {"url":"https://www.notion.so/a","title":"First","pinnedAt":1},
        {"url":"https://www.notion.so/a","title":"Second","pinnedAt":2}
    ]"#;
    let registry = PinRegistry::new(MemoryPinStore::with_value(KEY, raw), KEY);
    assert_eq!(registry.pins().len(), 1);
    assert_eq!(registry.pins()[0].title, "First");
}

#[test]
fn test_failed_write_is_reported() {
    let mut registry = PinRegistry::new(ReadOnlyStore, KEY);
    let err = registry.toggle("https://www.notion.so/a", "A").unwrap_err();
    assert_eq!(err, StoreError::Unavailable("read-only".to_string()));
}

#[test]
fn test_sqlite_pins_survive_reopen() {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let db_path = tmp.path().join("pins.db");

    {
        let db = Database::open(&db_path).unwrap();
        let mut registry = PinRegistry::new(SqlitePinStore::new(db), KEY);
        registry.toggle("https://www.notion.so/a", "A").unwrap();
        registry.toggle("https://www.notion.so/b", "B").unwrap();
        registry.toggle("https://www.notion.so/a", "A").unwrap();
    }

    let db = Database::open(&db_path).unwrap();
    let registry = PinRegistry::new(SqlitePinStore::new(db), KEY);
    assert!(!registry.is_pinned("https://www.notion.so/a"));
    assert!(registry.is_pinned("https://www.notion.so/b"));
    assert_eq!(registry.pins().len(), 1);
}

#[test]
fn test_sqlite_store_keys_are_independent() {
    let db = Database::open_in_memory().unwrap();
    let mut store = SqlitePinStore::new(db);
    store.write("one", b"[]").unwrap();
    assert_eq!(store.read("one").unwrap(), Some(b"[]".to_vec()));
    assert_eq!(store.read("two").unwrap(), None);
}
