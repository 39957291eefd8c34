//! Pin Registry.
//!
//! Implements `PinRegistryTrait`: the in-memory pin set, loaded wholesale
//! from a [`PinStore`] and written back wholesale after every mutation.
//! Once loaded, memory is the source of truth; the store is never merged.

use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, warn};

use crate::database::pin_store::PinStore;
use crate::types::errors::StoreError;
use crate::types::pin::{PinEntry, PinLookup};

/// Trait defining pin registry operations.
pub trait PinRegistryTrait {
    /// Flips the pin state of `url` and persists. Returns the new state.
    fn toggle(&mut self, url: &str, title: &str) -> Result<bool, StoreError>;
    fn pin(&mut self, url: &str, title: &str) -> Result<(), StoreError>;
    fn unpin(&mut self, url: &str) -> Result<(), StoreError>;
    fn load_all(&mut self);
    fn persist_all(&mut self) -> Result<(), StoreError>;
    fn pins(&self) -> &[PinEntry];
}

/// Pin registry persisting through any [`PinStore`].
pub struct PinRegistry<S: PinStore> {
    store: S,
    key: String,
    pins: Vec<PinEntry>,
}

impl<S: PinStore> PinRegistry<S> {
    /// Creates a registry and loads the stored pin set.
    pub fn new(store: S, key: &str) -> Self {
        let mut registry = Self {
            store,
            key: key.to_string(),
            pins: Vec::new(),
        };
        registry.load_all();
        registry
    }

    /// Exact-match membership test; no URL canonicalization.
    pub fn is_pinned(&self, url: &str) -> bool {
        self.pins.is_pinned(url)
    }

    /// Returns the current UNIX timestamp in milliseconds.
    fn now_millis() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }

    fn read_pins(&self) -> Result<Vec<PinEntry>, StoreError> {
        let bytes = match self.store.read(&self.key)? {
            Some(bytes) => bytes,
            None => return Ok(Vec::new()),
        };
        let entries: Vec<PinEntry> =
            serde_json::from_slice(&bytes).map_err(|e| StoreError::Corrupt(e.to_string()))?;

        // Keep the first entry for each URL.
        let mut unique: Vec<PinEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            if !unique.iter().any(|p| p.url == entry.url) {
                unique.push(entry);
            }
        }
        Ok(unique)
    }
}

impl<S: PinStore> PinRegistryTrait for PinRegistry<S> {
    fn toggle(&mut self, url: &str, title: &str) -> Result<bool, StoreError> {
        if self.is_pinned(url) {
            self.unpin(url)?;
            Ok(false)
        } else {
            self.pin(url, title)?;
            Ok(true)
        }
    }

    /// No-op when `url` is already pinned.
    fn pin(&mut self, url: &str, title: &str) -> Result<(), StoreError> {
        if self.is_pinned(url) {
            return Ok(());
        }
        self.pins.push(PinEntry {
            url: url.to_string(),
            title: title.to_string(),
            pinned_at: Self::now_millis(),
        });
        self.persist_all()
    }

    fn unpin(&mut self, url: &str) -> Result<(), StoreError> {
        let before = self.pins.len();
        self.pins.retain(|p| p.url != url);
        if self.pins.len() == before {
            return Ok(());
        }
        self.persist_all()
    }

    /// Replaces the in-memory set with the stored one.
    ///
    /// An unreachable store or unparsable contents leave the set empty.
    fn load_all(&mut self) {
        self.pins = match self.read_pins() {
            Ok(pins) => {
                debug!("loaded {} pins", pins.len());
                pins
            }
            Err(e) => {
                warn!("starting with no pins: {}", e);
                Vec::new()
            }
        };
    }

    /// Writes the whole set, replacing whatever was stored.
    fn persist_all(&mut self) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(&self.pins)
            .map_err(|e| StoreError::SerializationError(e.to_string()))?;
        self.store.write(&self.key, &bytes).map_err(|e| {
            warn!("failed to persist {} pins: {}", self.pins.len(), e);
            e
        })
    }

    fn pins(&self) -> &[PinEntry] {
        &self.pins
    }
}

impl<S: PinStore> PinLookup for PinRegistry<S> {
    fn is_pinned(&self, url: &str) -> bool {
        self.pins.is_pinned(url)
    }
}
