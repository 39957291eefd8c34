//! "Frequently visited" badge, relative to the current working set.

use crate::types::history::ResourceRecord;

/// Below this many records nothing is considered frequent.
pub const MIN_RECORDS_FOR_FREQUENT: usize = 4;

/// Threshold returned for small sets; no visit count can exceed it.
pub const NEVER_FREQUENT: u32 = u32::MAX;

/// Returns the 4th-highest visit count of `records`, or [`NEVER_FREQUENT`]
/// when there are fewer than four records.
pub fn frequency_threshold(records: &[ResourceRecord]) -> u32 {
    if records.len() < MIN_RECORDS_FOR_FREQUENT {
        return NEVER_FREQUENT;
    }
    let mut counts: Vec<u32> = records.iter().map(|r| r.visit_count).collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));
    counts[MIN_RECORDS_FOR_FREQUENT - 1]
}

/// Strictly greater than the threshold.
pub fn is_frequent(record: &ResourceRecord, threshold: u32) -> bool {
    record.visit_count > threshold
}
