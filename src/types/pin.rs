use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A user-pinned resource, keyed by the exact URL that was pinned.
///
/// Serialized with camelCase keys so pin sets written by the browser
/// extension (`[{"url":…,"title":…,"pinnedAt":…}]`) load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinEntry {
    pub url: String,
    pub title: String,
    /// Milliseconds since the Unix epoch.
    pub pinned_at: i64,
}

/// Exact-URL pin membership, as used by the filter and sort stages.
pub trait PinLookup {
    fn is_pinned(&self, url: &str) -> bool;
}

impl PinLookup for [PinEntry] {
    fn is_pinned(&self, url: &str) -> bool {
        self.iter().any(|p| p.url == url)
    }
}

impl PinLookup for Vec<PinEntry> {
    fn is_pinned(&self, url: &str) -> bool {
        self.as_slice().is_pinned(url)
    }
}

impl PinLookup for HashSet<String> {
    fn is_pinned(&self, url: &str) -> bool {
        self.contains(url)
    }
}
