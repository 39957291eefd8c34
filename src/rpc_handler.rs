//! RPC method handler for the Notion Recents JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! The `handle_method` function dispatches JSON-RPC method calls to the
//! history session held by the `App` struct.

use log::debug;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::app::App;
use crate::managers::pin_registry::PinRegistryTrait;
use crate::providers::HistoryProvider;
use crate::types::errors::ProviderError;
use crate::types::history::VisitRecord;
use crate::types::query::{QueryOutcome, QueryTicket, SortKey, TypeFilter};

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub async fn handle_method(app: &mut App, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true, "version": env!("CARGO_PKG_VERSION")})),

        // ─── View ───
        "view.get" => Ok(snapshot(app)),
        "view.set_filter" => {
            let filter: TypeFilter = param(params, "filter")?;
            let ticket = app.session.set_type_filter(filter);
            let pending = match (ticket, &app.provider) {
                (Some(ticket), Some(provider)) => {
                    let result = provider.search(&ticket.query).await;
                    app.session.complete_query(&ticket, result);
                    None
                }
                (ticket, _) => ticket,
            };
            let mut snap = snapshot(app);
            snap["ticket"] = pending.map_or(Value::Null, |t| json!(t));
            Ok(snap)
        }
        "view.set_sort" => {
            let sort: SortKey = param(params, "sort")?;
            app.session.set_sort_key(sort);
            Ok(snapshot(app))
        }
        "view.set_search" => {
            let text = params
                .get("text")
                .and_then(|v| v.as_str())
                .ok_or("missing text")?;
            app.session.set_search_text(text);
            Ok(snapshot(app))
        }

        // ─── History ───
        "history.begin_query" => Ok(json!(app.session.begin_query())),
        "history.complete_query" => {
            let seq = params
                .get("seq")
                .and_then(|v| v.as_u64())
                .ok_or("missing seq")?;
            let result = match params.get("error").and_then(|v| v.as_str()) {
                Some(message) => Err(ProviderError::QueryFailed(message.to_string())),
                None => Ok(parse_visits(params.get("records").ok_or("missing records")?)?),
            };
            let ticket = QueryTicket {
                seq,
                query: app.session.history_query(),
            };
            let outcome = app.session.complete_query(&ticket, result);
            let mut snap = snapshot(app);
            snap["outcome"] = outcome_json(&outcome);
            Ok(snap)
        }
        "history.refresh" => {
            let provider = app
                .provider
                .as_ref()
                .ok_or("no history provider configured")?;
            let outcome = app.session.refresh(provider).await;
            let mut snap = snapshot(app);
            snap["outcome"] = outcome_json(&outcome);
            Ok(snap)
        }

        // ─── Pins ───
        "pin.toggle" => {
            let url = params
                .get("url")
                .and_then(|v| v.as_str())
                .ok_or("missing url")?;
            let title = params.get("title").and_then(|v| v.as_str()).unwrap_or("");
            let pinned = app
                .session
                .toggle_pin(url, title)
                .map_err(|e| e.to_string())?;
            let mut snap = snapshot(app);
            snap["pinned"] = json!(pinned);
            Ok(snap)
        }
        "pin.list" => Ok(json!(app.session.pins().pins())),

        _ => Err(format!("unknown method: {}", method)),
    }
}

fn param<T: DeserializeOwned>(params: &Value, name: &str) -> Result<T, String> {
    let value = params
        .get(name)
        .ok_or_else(|| format!("missing {}", name))?;
    serde_json::from_value(value.clone()).map_err(|e| format!("invalid {}: {}", name, e))
}

/// Parses host-supplied visits one by one; entries that do not even have the
/// record shape are skipped like any other malformed record.
fn parse_visits(records: &Value) -> Result<Vec<VisitRecord>, String> {
    let items = records.as_array().ok_or("records must be an array")?;
    let mut visits = Vec::with_capacity(items.len());
    for item in items {
        match serde_json::from_value::<VisitRecord>(item.clone()) {
            Ok(visit) => visits.push(visit),
            Err(e) => debug!("skipping unparsable visit record: {}", e),
        }
    }
    Ok(visits)
}

fn snapshot(app: &App) -> Value {
    json!({
        "query": app.session.query_state(),
        "loadState": app.session.load_state(),
        "view": app.session.view(),
    })
}

fn outcome_json(outcome: &QueryOutcome) -> Value {
    match outcome {
        QueryOutcome::Applied(count) => json!({"status": "applied", "count": count}),
        QueryOutcome::Stale => json!({"status": "stale"}),
        QueryOutcome::Failed(message) => json!({"status": "failed", "message": message}),
    }
}
