use serde::{Deserialize, Serialize};

/// A raw visit record as reported by the host browser's history.
///
/// Optional fields mirror what browsers actually hand back; a record missing
/// `last_visit_time` or `visit_count` is treated as malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitRecord {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub last_visit_time: Option<f64>,
    #[serde(default)]
    pub visit_count: Option<u32>,
}

impl VisitRecord {
    /// Convenience constructor for a fully populated record.
    pub fn new(url: &str, title: &str, last_visit_time: i64, visit_count: u32) -> Self {
        Self {
            url: url.to_string(),
            title: Some(title.to_string()),
            last_visit_time: Some(last_visit_time as f64),
            visit_count: Some(visit_count),
        }
    }
}

/// Page or database view classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Page,
    Database,
}

/// One deduplicated resource, produced per query and dropped on the next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecord {
    /// The URL exactly as visited. Pins are matched against this.
    pub url: String,
    /// Origin + path; unique within one collection.
    pub canonical_url: String,
    pub title: String,
    /// Milliseconds since the Unix epoch.
    pub last_visit_time: i64,
    pub visit_count: u32,
    pub kind: ResourceKind,
}

/// Parameters for a single history provider round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    pub term: String,
    /// Milliseconds since the Unix epoch; visits older than this are skipped.
    pub start_time: i64,
    pub max_results: usize,
}
