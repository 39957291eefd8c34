//! Provider reading a Chromium `History` database.
//!
//! Each query runs on a blocking task against a snapshot copy of the file,
//! since a running browser keeps its `History` database exclusively locked.
//! Chromium stores times as microseconds since 1601-01-01 (the WebKit epoch); records
//! handed out use milliseconds since the Unix epoch like the extension API.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use rusqlite::{params, Connection, OpenFlags};

use super::HistoryProvider;
use crate::types::errors::ProviderError;
use crate::types::history::{HistoryQuery, VisitRecord};

/// Milliseconds between 1601-01-01 and 1970-01-01.
const WEBKIT_EPOCH_OFFSET_MS: i64 = 11_644_473_600_000;

/// Converts a WebKit timestamp (µs since 1601) to Unix milliseconds.
pub fn webkit_to_unix_millis(webkit_micros: i64) -> i64 {
    webkit_micros / 1000 - WEBKIT_EPOCH_OFFSET_MS
}

/// Converts Unix milliseconds to a WebKit timestamp (µs since 1601).
pub fn unix_millis_to_webkit(unix_millis: i64) -> i64 {
    unix_millis.saturating_add(WEBKIT_EPOCH_OFFSET_MS).saturating_mul(1000)
}

#[derive(Debug, Clone)]
pub struct ChromeHistoryProvider {
    path: PathBuf,
}

impl ChromeHistoryProvider {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl HistoryProvider for ChromeHistoryProvider {
    async fn search(&self, query: &HistoryQuery) -> Result<Vec<VisitRecord>, ProviderError> {
        let path = self.path.clone();
        let query = query.clone();
        tokio::task::spawn_blocking(move || read_history(&path, &query))
            .await
            .map_err(|e| ProviderError::QueryFailed(format!("history task failed: {}", e)))?
    }
}

/// Escapes `%`, `_` and the escape character itself for a LIKE pattern.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

fn read_history(path: &Path, query: &HistoryQuery) -> Result<Vec<VisitRecord>, ProviderError> {
    if !path.exists() {
        return Err(ProviderError::Unavailable(format!(
            "{} does not exist",
            path.display()
        )));
    }
    // Dropped after `conn`, which removes the copy.
    let snapshot = tempfile::Builder::new()
        .prefix("notion-recents-history")
        .tempfile()
        .map_err(|e| ProviderError::Unavailable(format!("snapshot: {}", e)))?;
    fs::copy(path, snapshot.path())
        .map_err(|e| ProviderError::Unavailable(format!("{}: {}", path.display(), e)))?;

    let conn = Connection::open_with_flags(
        snapshot.path(),
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|e| ProviderError::Unavailable(format!("{}: {}", path.display(), e)))?;

    let mut stmt = conn
        .prepare(
            "SELECT url, title, visit_count, last_visit_time FROM urls \
             WHERE (url LIKE ?1 ESCAPE '\\' OR title LIKE ?1 ESCAPE '\\') \
               AND last_visit_time >= ?2 AND hidden = 0 \
             ORDER BY last_visit_time DESC LIMIT ?3",
        )
        .map_err(|e| ProviderError::QueryFailed(e.to_string()))?;

    let limit = i64::try_from(query.max_results).unwrap_or(i64::MAX);
    let rows = stmt
        .query_map(
            params![
                like_pattern(&query.term),
                unix_millis_to_webkit(query.start_time),
                limit
            ],
            |row| {
                let url: String = row.get(0)?;
                let title: Option<String> = row.get(1)?;
                let visit_count: Option<i64> = row.get(2)?;
                let last_visit_time: Option<i64> = row.get(3)?;
                Ok(VisitRecord {
                    url,
                    title,
                    last_visit_time: last_visit_time.map(|t| webkit_to_unix_millis(t) as f64),
                    visit_count: visit_count.and_then(|c| u32::try_from(c).ok()),
                })
            },
        )
        .map_err(|e| ProviderError::QueryFailed(e.to_string()))?;

    let mut records = Vec::new();
    for row in rows {
        records.push(row.map_err(|e| ProviderError::QueryFailed(e.to_string()))?);
    }
    debug!(
        "read {} visits matching '{}' from {}",
        records.len(),
        query.term,
        path.display()
    );
    Ok(records)
}
