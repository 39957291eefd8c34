// Pipeline services
// Stateless stages of the history pipeline plus configuration loading.

pub mod classifier;
pub mod deduplicator;
pub mod favicon;
pub mod filter_engine;
pub mod frequency_scorer;
pub mod pipeline;
pub mod settings_engine;
pub mod sort_engine;
pub mod title_cleaner;
