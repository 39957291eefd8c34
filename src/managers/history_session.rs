//! History Session.
//!
//! Owns everything one open popup needs: the cached resource collection,
//! the user's query state, the load state and the pin registry. Created when
//! the UI opens and dropped when it closes.
//!
//! History queries are sequenced. Each call to [`HistorySession::begin_query`]
//! issues a ticket with a new sequence number, and a response is applied only
//! if it answers the most recent ticket. A slow response to an older tab
//! switch therefore cannot overwrite the results of a newer one.

use log::{debug, info, warn};

use super::pin_registry::{PinRegistry, PinRegistryTrait};
use crate::database::pin_store::PinStore;
use crate::providers::HistoryProvider;
use crate::services::deduplicator::Deduplicator;
use crate::services::favicon::FaviconResolver;
use crate::services::pipeline::{self, ViewContext};
use crate::services::title_cleaner::TitleCleaner;
use crate::types::errors::{ProviderError, StoreError};
use crate::types::history::{HistoryQuery, ResourceRecord, VisitRecord};
use crate::types::query::{
    LoadState, QueryOutcome, QueryState, QueryTicket, RecentsView, SortKey, TypeFilter,
};
use crate::types::settings::RecentsConfig;

pub struct HistorySession<S: PinStore> {
    config: RecentsConfig,
    deduplicator: Deduplicator,
    view_ctx: ViewContext,
    pins: PinRegistry<S>,
    records: Vec<ResourceRecord>,
    query: QueryState,
    load_state: LoadState,
    latest_seq: u64,
    awaiting: bool,
}

impl<S: PinStore> HistorySession<S> {
    /// Opens a session, loading pins from `store`.
    pub fn open(config: RecentsConfig, store: S) -> Self {
        let pins = PinRegistry::new(store, &config.pins.storage_key);
        let view_ctx = ViewContext {
            cleaner: TitleCleaner::new(&config.app.app_name),
            favicons: FaviconResolver::new(
                config.app.extension_origin.as_deref(),
                &config.app.origin,
            ),
        };
        info!(
            "session opened for {} with {} pins",
            config.app.origin,
            pins.pins().len()
        );
        Self {
            deduplicator: Deduplicator::new(&config),
            view_ctx,
            pins,
            records: Vec::new(),
            query: QueryState::default(),
            load_state: LoadState::Idle,
            latest_seq: 0,
            awaiting: false,
            config,
        }
    }

    pub fn config(&self) -> &RecentsConfig {
        &self.config
    }

    pub fn query_state(&self) -> &QueryState {
        &self.query
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn records(&self) -> &[ResourceRecord] {
        &self.records
    }

    pub fn pins(&self) -> &PinRegistry<S> {
        &self.pins
    }

    /// The provider query this session issues; the same for every tab.
    pub fn history_query(&self) -> HistoryQuery {
        HistoryQuery {
            term: self.config.history.search_term.clone(),
            start_time: self.config.history.start_time,
            max_results: self.config.history.max_results,
        }
    }

    /// Issues a new ticket, superseding any outstanding one.
    pub fn begin_query(&mut self) -> QueryTicket {
        self.latest_seq += 1;
        self.awaiting = true;
        self.load_state = LoadState::Loading;
        debug!("issued history query #{}", self.latest_seq);
        QueryTicket {
            seq: self.latest_seq,
            query: self.history_query(),
        }
    }

    /// Applies a provider response if `ticket` is still the latest.
    ///
    /// A successful response replaces the cached collection wholesale. A
    /// failed one keeps the previous collection and records the message.
    pub fn complete_query(
        &mut self,
        ticket: &QueryTicket,
        result: Result<Vec<VisitRecord>, ProviderError>,
    ) -> QueryOutcome {
        if ticket.seq != self.latest_seq || !self.awaiting {
            debug!(
                "discarding response to query #{} (latest #{})",
                ticket.seq, self.latest_seq
            );
            return QueryOutcome::Stale;
        }
        self.awaiting = false;

        match result {
            Ok(visits) => {
                self.records = self.deduplicator.dedupe(&visits);
                self.load_state = LoadState::Ready;
                QueryOutcome::Applied(self.records.len())
            }
            Err(e) => {
                warn!("history query #{} failed: {}", ticket.seq, e);
                let message = e.to_string();
                self.load_state = LoadState::Failed(message.clone());
                QueryOutcome::Failed(message)
            }
        }
    }

    /// Runs one full query round trip against `provider`.
    pub async fn refresh<H: HistoryProvider>(&mut self, provider: &H) -> QueryOutcome {
        let ticket = self.begin_query();
        let result = provider.search(&ticket.query).await;
        self.complete_query(&ticket, result)
    }

    /// Switches tabs. Returns the ticket to fulfil when the switch needs
    /// fresh history; Favorites re-filters the cached collection instead.
    pub fn set_type_filter(&mut self, type_filter: TypeFilter) -> Option<QueryTicket> {
        self.query.type_filter = type_filter;
        match type_filter {
            TypeFilter::Favorites => None,
            _ => Some(self.begin_query()),
        }
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.query.sort_key = sort_key;
    }

    pub fn set_search_text(&mut self, text: &str) {
        self.query.search_text = text.trim().to_string();
    }

    /// Toggles the pin for `url` and persists the whole pin set.
    pub fn toggle_pin(&mut self, url: &str, title: &str) -> Result<bool, StoreError> {
        self.pins.toggle(url, title)
    }

    /// Runs the filter/sort/annotate pass for the current state.
    pub fn view(&self) -> RecentsView {
        pipeline::build_view(&self.records, &self.pins, &self.query, &self.view_ctx)
    }
}
