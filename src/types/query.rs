use serde::{Deserialize, Serialize};

use super::history::{HistoryQuery, ResourceRecord};

/// Which tab the user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Page,
    Database,
    Favorites,
}

/// Ordering selected in the sort dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Recent,
    Frequent,
    Alphabetical,
    Pinned,
}

/// The user's current view parameters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryState {
    pub type_filter: TypeFilter,
    pub sort_key: SortKey,
    pub search_text: String,
}

/// A record annotated with everything the renderer needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRow {
    pub record: ResourceRecord,
    pub display_title: String,
    pub frequently_visited: bool,
    pub pinned: bool,
    pub favicon_url: String,
}

/// Ordered rows plus the message to show when there are none.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentsView {
    pub rows: Vec<RenderRow>,
    pub empty_message: Option<String>,
}

/// Where the session is in its fetch cycle.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "lowercase")]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Handle for one outstanding history query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryTicket {
    pub seq: u64,
    pub query: HistoryQuery,
}

/// What happened to a completed query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// The response replaced the cached collection; holds the new record count.
    Applied(usize),
    /// A newer query was issued after this one; the response was dropped.
    Stale,
    /// The provider failed; previous results were kept.
    Failed(String),
}
