//! Collapses raw visit records into one resource per canonical URL.
//!
//! Records from other origins, placeholder titles (empty, or the bare
//! application name of a tab that has not finished loading) and malformed
//! records are dropped before deduplication.

use std::collections::HashMap;

use log::debug;
use url::Url;

use super::classifier::{Classifier, ClassifierTrait};
use crate::types::errors::RecordError;
use crate::types::history::{ResourceRecord, VisitRecord};
use crate::types::settings::{DedupePolicy, RecentsConfig};

/// Returns origin + path of `url`, dropping query string and fragment.
pub fn canonical_url(url: &str) -> Result<String, RecordError> {
    let parsed = Url::parse(url).map_err(|_| RecordError::InvalidUrl(url.to_string()))?;
    Ok(canonical_key(&parsed))
}

fn canonical_key(parsed: &Url) -> String {
    format!("{}{}", parsed.origin().ascii_serialization(), parsed.path())
}

/// Serializes a configured origin the way `Url::origin` does, so default
/// ports, letter case and a trailing slash do not matter.
fn normalize_origin(origin: &str) -> String {
    Url::parse(origin)
        .map(|u| u.origin().ascii_serialization())
        .unwrap_or_else(|_| origin.trim_end_matches('/').to_string())
}

/// Deduplicator bound to one target application.
pub struct Deduplicator {
    origin: String,
    app_name: String,
    policy: DedupePolicy,
    classifier: Classifier,
}

impl Deduplicator {
    pub fn new(config: &RecentsConfig) -> Self {
        Self {
            origin: normalize_origin(&config.app.origin),
            app_name: config.app.app_name.clone(),
            policy: config.history.dedupe_policy,
            classifier: Classifier::new(&config.classifier),
        }
    }

    /// Turns one visit into a resource.
    ///
    /// `Ok(None)` means the record is well-formed but not one we keep.
    fn admit(&self, record: &VisitRecord) -> Result<Option<ResourceRecord>, RecordError> {
        let parsed =
            Url::parse(&record.url).map_err(|_| RecordError::InvalidUrl(record.url.clone()))?;
        if parsed.origin().ascii_serialization() != self.origin {
            return Ok(None);
        }

        let title = match record.title.as_deref() {
            Some(t) if !t.trim().is_empty() && t.trim() != self.app_name => t,
            _ => return Ok(None),
        };

        let last_visit_time = record
            .last_visit_time
            .ok_or_else(|| RecordError::MissingField("lastVisitTime".to_string()))?;
        let visit_count = record
            .visit_count
            .ok_or_else(|| RecordError::MissingField("visitCount".to_string()))?;

        Ok(Some(ResourceRecord {
            url: record.url.clone(),
            canonical_url: canonical_key(&parsed),
            title: title.to_string(),
            last_visit_time: last_visit_time.round() as i64,
            visit_count,
            kind: self.classifier.classify(&record.url, title),
        }))
    }

    /// Produces one record per canonical URL, in first-seen order.
    pub fn dedupe(&self, records: &[VisitRecord]) -> Vec<ResourceRecord> {
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut resources: Vec<ResourceRecord> = Vec::new();

        for record in records {
            let resource = match self.admit(record) {
                Ok(Some(resource)) => resource,
                Ok(None) => continue,
                Err(e) => {
                    debug!("dropping visit record: {}", e);
                    continue;
                }
            };

            match positions.get(&resource.canonical_url) {
                Some(&pos) => {
                    if self.policy == DedupePolicy::MostRecent
                        && resource.last_visit_time > resources[pos].last_visit_time
                    {
                        resources[pos] = resource;
                    }
                }
                None => {
                    positions.insert(resource.canonical_url.clone(), resources.len());
                    resources.push(resource);
                }
            }
        }

        debug!(
            "deduplicated {} visit records into {} resources",
            records.len(),
            resources.len()
        );
        resources
    }
}
