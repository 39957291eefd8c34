//! Type, pin and free-text filtering over the cached resource collection.
//!
//! Output order is whatever the input order was; ordering belongs to the
//! sort engine.

use crate::types::history::{ResourceKind, ResourceRecord};
use crate::types::pin::PinLookup;
use crate::types::query::{QueryState, TypeFilter};

/// Applies the type stage then the search stage.
pub fn filter<P>(records: &[ResourceRecord], query: &QueryState, pins: &P) -> Vec<ResourceRecord>
where
    P: PinLookup + ?Sized,
{
    let typed: Vec<&ResourceRecord> = records
        .iter()
        .filter(|r| matches_type(r, query.type_filter, pins))
        .collect();
    if typed.is_empty() {
        return Vec::new();
    }

    let needle = query.search_text.trim().to_lowercase();
    if needle.is_empty() {
        return typed.into_iter().cloned().collect();
    }

    typed
        .into_iter()
        .filter(|r| matches_search(r, &needle))
        .cloned()
        .collect()
}

/// Favorites looks only at pins and ignores kind. Pins match the exact URL.
fn matches_type<P>(record: &ResourceRecord, type_filter: TypeFilter, pins: &P) -> bool
where
    P: PinLookup + ?Sized,
{
    match type_filter {
        TypeFilter::All => true,
        TypeFilter::Page => record.kind == ResourceKind::Page,
        TypeFilter::Database => record.kind == ResourceKind::Database,
        TypeFilter::Favorites => pins.is_pinned(&record.url),
    }
}

/// `needle` must already be lowercased.
fn matches_search(record: &ResourceRecord, needle: &str) -> bool {
    record.title.to_lowercase().contains(needle) || record.url.to_lowercase().contains(needle)
}
