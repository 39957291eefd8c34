//! Provider over a fixed list of visit records.
//!
//! Applies the same term/start-time/limit semantics as the browser's history
//! search so code driven by it behaves like it would against real history.

use crate::types::errors::ProviderError;
use crate::types::history::{HistoryQuery, VisitRecord};

use super::HistoryProvider;

#[derive(Debug, Clone, Default)]
pub struct MemoryHistoryProvider {
    records: Vec<VisitRecord>,
    failure: Option<ProviderError>,
}

impl MemoryHistoryProvider {
    pub fn new(records: Vec<VisitRecord>) -> Self {
        Self {
            records,
            failure: None,
        }
    }

    /// A provider whose every query fails with `error`.
    pub fn failing(error: ProviderError) -> Self {
        Self {
            records: Vec::new(),
            failure: Some(error),
        }
    }

    fn matches(record: &VisitRecord, query: &HistoryQuery) -> bool {
        let term = query.term.to_lowercase();
        let in_text = term.is_empty()
            || record.url.to_lowercase().contains(&term)
            || record
                .title
                .as_deref()
                .is_some_and(|t| t.to_lowercase().contains(&term));
        let in_window = record
            .last_visit_time
            .map_or(true, |t| t >= query.start_time as f64);
        in_text && in_window
    }
}

impl HistoryProvider for MemoryHistoryProvider {
    async fn search(&self, query: &HistoryQuery) -> Result<Vec<VisitRecord>, ProviderError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        let mut hits: Vec<VisitRecord> = self
            .records
            .iter()
            .filter(|r| Self::matches(r, query))
            .cloned()
            .collect();
        // Stable, so records sharing a timestamp keep their given order.
        hits.sort_by(|a, b| {
            let a_time = a.last_visit_time.unwrap_or(f64::MIN);
            let b_time = b.last_visit_time.unwrap_or(f64::MIN);
            b_time.total_cmp(&a_time)
        });
        hits.truncate(query.max_results);
        Ok(hits)
    }
}
