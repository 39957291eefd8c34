//! Ordering of filtered resources.
//!
//! All orderings use a stable sort over a copy, so equal keys keep their
//! incoming order and the caller's collection is never reordered.

use std::cmp::Ordering;

use icu_collator::options::CollatorOptions;
use icu_collator::Collator;
use log::warn;

use super::title_cleaner::TitleCleaner;
use crate::types::history::ResourceRecord;
use crate::types::pin::PinLookup;
use crate::types::query::SortKey;

/// Returns `records` ordered by `key`.
pub fn sort<P>(
    records: &[ResourceRecord],
    key: SortKey,
    pins: &P,
    cleaner: &TitleCleaner,
) -> Vec<ResourceRecord>
where
    P: PinLookup + ?Sized,
{
    let mut sorted = records.to_vec();
    match key {
        SortKey::Recent => sorted.sort_by(by_recency),
        SortKey::Frequent => sorted.sort_by(|a, b| b.visit_count.cmp(&a.visit_count)),
        SortKey::Alphabetical => {
            // Clean each title once rather than on every comparison.
            let mut keyed: Vec<(String, ResourceRecord)> = sorted
                .into_iter()
                .map(|r| (cleaner.clean(&r.title).into_owned(), r))
                .collect();
            match Collator::try_new(Default::default(), CollatorOptions::default()) {
                Ok(collator) => keyed.sort_by(|(a, _), (b, _)| {
                    collator.compare(a, b).then_with(|| a.cmp(b))
                }),
                Err(e) => {
                    warn!("collation data unavailable ({}), sorting by folded title", e);
                    keyed.sort_by(|(a, _), (b, _)| {
                        a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
                    });
                }
            }
            sorted = keyed.into_iter().map(|(_, r)| r).collect();
        }
        SortKey::Pinned => sorted.sort_by(|a, b| {
            let a_pinned = pins.is_pinned(&a.url);
            let b_pinned = pins.is_pinned(&b.url);
            b_pinned.cmp(&a_pinned).then_with(|| by_recency(a, b))
        }),
    }
    sorted
}

/// Descending last visit time.
fn by_recency(a: &ResourceRecord, b: &ResourceRecord) -> Ordering {
    b.last_visit_time.cmp(&a.last_visit_time)
}
