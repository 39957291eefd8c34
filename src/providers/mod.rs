//! History providers.
//!
//! A provider answers one [`HistoryQuery`] with raw [`VisitRecord`]s ordered
//! by descending last visit time. Providers never deduplicate or classify.

pub mod chrome_history;
pub mod memory;

use std::future::Future;

use crate::types::errors::ProviderError;
use crate::types::history::{HistoryQuery, VisitRecord};

pub use chrome_history::ChromeHistoryProvider;
pub use memory::MemoryHistoryProvider;

/// Asynchronous source of raw visit records.
pub trait HistoryProvider {
    fn search(
        &self,
        query: &HistoryQuery,
    ) -> impl Future<Output = Result<Vec<VisitRecord>, ProviderError>> + Send;
}
