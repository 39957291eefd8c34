//! Unit tests for the RPC handler, covering all JSON-RPC methods dispatched by `handle_method`.
//!
//! These tests exercise every RPC method through the same code path used by the
//! real `notion-recents-rpc` binary, using temporary on-disk databases.

use rusqlite::{params, Connection};
use serde_json::json;
use tempfile::TempDir;

use notion_recents::app::App;
use notion_recents::providers::chrome_history::unix_millis_to_webkit;
use notion_recents::rpc_handler::handle_method;
use notion_recents::types::settings::RecentsConfig;

fn config_in(tmp: &TempDir) -> RecentsConfig {
    let mut config = RecentsConfig::default();
    config.pins.db_path = Some(tmp.path().join("pins.db").to_string_lossy().to_string());
    config.history.chrome_history_path =
        Some(tmp.path().join("History").to_string_lossy().to_string());
    config
}

/// App with no history file: the host supplies records.
fn setup() -> (App, TempDir) {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let app = App::new(config_in(&tmp)).expect("Failed to init App");
    (app, tmp)
}

/// App reading a fixture Chromium history file.
fn setup_with_history() -> (App, TempDir) {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let conn = Connection::open(tmp.path().join("History")).unwrap();
    conn.execute_batch(
        "CREATE TABLE urls (id INTEGER PRIMARY KEY, url TEXT, title TEXT,
         visit_count INTEGER NOT NULL DEFAULT 0, typed_count INTEGER NOT NULL DEFAULT 0,
         last_visit_time INTEGER NOT NULL, hidden INTEGER NOT NULL DEFAULT 0);",
    )
    .unwrap();
    for (url, title, unix_ms) in [
        ("https://www.notion.so/ws/Roadmap-1", "Roadmap", 3_000),
        ("https://www.notion.so/ws/Tasks-2?v=1", "Tasks", 2_000),
        ("https://www.notion.so/ws/Wiki-3", "Wiki | Notion", 1_000),
    ] {
        conn.execute(
            "INSERT INTO urls (url, title, visit_count, last_visit_time) VALUES (?1, ?2, 1, ?3)",
            params![url, title, unix_millis_to_webkit(unix_ms)],
        )
        .unwrap();
    }
    drop(conn);

    let app = App::new(config_in(&tmp)).expect("Failed to init App");
    (app, tmp)
}

fn host_records() -> serde_json::Value {
    json!([
        {"url": "https://www.notion.so/ws/Roadmap-1", "title": "Roadmap", "lastVisitTime": 300.0, "visitCount": 4},
        {"url": "https://www.notion.so/ws/Tasks-2?v=1", "title": "Tasks", "lastVisitTime": 200.0, "visitCount": 2},
        {"url": "https://www.notion.so/ws/Roadmap-1#b", "title": "Roadmap", "lastVisitTime": 100.0, "visitCount": 4},
        {"title": "no url"},
        {"url": "https://www.notion.so/ws/Draft", "title": "Draft"}
    ])
}

// ─── Ping ───

#[tokio::test]
async fn test_ping() {
    let (mut app, _tmp) = setup();
    let res = handle_method(&mut app, "ping", &json!({})).await.unwrap();
    assert_eq!(res["pong"], json!(true));
}

// ─── Unknown method ───

#[tokio::test]
async fn test_unknown_method_returns_error() {
    let (mut app, _tmp) = setup();
    let res = handle_method(&mut app, "nonexistent.method", &json!({})).await;
    assert!(res.unwrap_err().contains("unknown method"));
}

// ─── View ───

#[tokio::test]
async fn test_view_get_starts_idle_and_empty() {
    let (mut app, _tmp) = setup();
    let res = handle_method(&mut app, "view.get", &json!({})).await.unwrap();
    assert_eq!(res["loadState"], json!({"state": "idle"}));
    assert_eq!(res["query"]["typeFilter"], json!("all"));
    assert_eq!(res["view"]["rows"], json!([]));
    assert_eq!(res["view"]["emptyMessage"], json!("No files found"));
}

#[tokio::test]
async fn test_set_filter_without_provider_returns_ticket() {
    let (mut app, _tmp) = setup();
    let res = handle_method(&mut app, "view.set_filter", &json!({"filter": "page"}))
        .await
        .unwrap();
    assert_eq!(res["ticket"]["seq"], json!(1));
    assert_eq!(res["ticket"]["query"]["term"], json!("notion.so"));
    assert_eq!(res["loadState"], json!({"state": "loading"}));
}

#[tokio::test]
async fn test_set_filter_favorites_needs_no_ticket() {
    let (mut app, _tmp) = setup();
    let res = handle_method(&mut app, "view.set_filter", &json!({"filter": "favorites"}))
        .await
        .unwrap();
    assert!(res["ticket"].is_null());
    assert_eq!(res["view"]["emptyMessage"], json!("No favorite pages found"));
}

#[tokio::test]
async fn test_set_filter_rejects_unknown_tab() {
    let (mut app, _tmp) = setup();
    let err = handle_method(&mut app, "view.set_filter", &json!({"filter": "trash"}))
        .await
        .unwrap_err();
    assert!(err.contains("invalid filter"));
    let err = handle_method(&mut app, "view.set_filter", &json!({}))
        .await
        .unwrap_err();
    assert!(err.contains("missing filter"));
}

// ─── History ───

#[tokio::test]
async fn test_host_fulfils_query() {
    let (mut app, _tmp) = setup();
    let ticket = handle_method(&mut app, "history.begin_query", &json!({}))
        .await
        .unwrap();
    let seq = ticket["seq"].as_u64().unwrap();

    let res = handle_method(
        &mut app,
        "history.complete_query",
        &json!({"seq": seq, "records": host_records()}),
    )
    .await
    .unwrap();
    assert_eq!(res["outcome"], json!({"status": "applied", "count": 2}));
    assert_eq!(res["loadState"], json!({"state": "ready"}));
    let rows = res["view"]["rows"].as_array().unwrap();
    assert_eq!(rows[0]["displayTitle"], json!("Roadmap"));
    assert_eq!(rows[1]["record"]["kind"], json!("database"));
}

#[tokio::test]
async fn test_stale_completion_is_reported() {
    let (mut app, _tmp) = setup();
    handle_method(&mut app, "history.begin_query", &json!({})).await.unwrap();
    handle_method(&mut app, "history.begin_query", &json!({})).await.unwrap();

    let res = handle_method(
        &mut app,
        "history.complete_query",
        &json!({"seq": 1, "records": host_records()}),
    )
    .await
    .unwrap();
    assert_eq!(res["outcome"], json!({"status": "stale"}));
    assert_eq!(res["view"]["rows"], json!([]));
}

#[tokio::test]
async fn test_host_reported_failure() {
    let (mut app, _tmp) = setup();
    handle_method(&mut app, "history.begin_query", &json!({})).await.unwrap();
    let res = handle_method(
        &mut app,
        "history.complete_query",
        &json!({"seq": 1, "error": "permission denied"}),
    )
    .await
    .unwrap();
    assert_eq!(res["outcome"]["status"], json!("failed"));
    assert_eq!(
        res["loadState"],
        json!({"state": "failed", "message": "History query failed: permission denied"})
    );
}

#[tokio::test]
async fn test_refresh_without_provider_is_an_error() {
    let (mut app, _tmp) = setup();
    let err = handle_method(&mut app, "history.refresh", &json!({}))
        .await
        .unwrap_err();
    assert!(err.contains("no history provider"));
}

#[tokio::test]
async fn test_refresh_reads_history_file() {
    let (mut app, _tmp) = setup_with_history();
    let res = handle_method(&mut app, "history.refresh", &json!({})).await.unwrap();
    assert_eq!(res["outcome"], json!({"status": "applied", "count": 3}));
    let titles: Vec<&str> = res["view"]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["displayTitle"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Roadmap", "Tasks", "Wiki"]);
}

#[tokio::test]
async fn test_set_filter_with_provider_fetches_immediately() {
    let (mut app, _tmp) = setup_with_history();
    let res = handle_method(&mut app, "view.set_filter", &json!({"filter": "database"}))
        .await
        .unwrap();
    assert!(res["ticket"].is_null());
    assert_eq!(res["loadState"], json!({"state": "ready"}));
    let rows = res["view"]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["displayTitle"], json!("Tasks"));
}

// ─── Sort & search ───

#[tokio::test]
async fn test_sort_and_search() {
    let (mut app, _tmp) = setup_with_history();
    handle_method(&mut app, "history.refresh", &json!({})).await.unwrap();

    let res = handle_method(&mut app, "view.set_sort", &json!({"sort": "alphabetical"}))
        .await
        .unwrap();
    assert_eq!(res["view"]["rows"][0]["displayTitle"], json!("Roadmap"));
    assert_eq!(res["view"]["rows"][2]["displayTitle"], json!("Wiki"));

    let res = handle_method(&mut app, "view.set_search", &json!({"text": " WIKI "}))
        .await
        .unwrap();
    assert_eq!(res["query"]["searchText"], json!("WIKI"));
    assert_eq!(res["view"]["rows"].as_array().unwrap().len(), 1);
}

// ─── Pins ───

#[tokio::test]
async fn test_pin_toggle_and_list() {
    let (mut app, _tmp) = setup_with_history();
    handle_method(&mut app, "history.refresh", &json!({})).await.unwrap();

    let url = "https://www.notion.so/ws/Wiki-3";
    let res = handle_method(&mut app, "pin.toggle", &json!({"url": url, "title": "Wiki"}))
        .await
        .unwrap();
    assert_eq!(res["pinned"], json!(true));

    let list = handle_method(&mut app, "pin.list", &json!({})).await.unwrap();
    assert_eq!(list[0]["url"], json!(url));
    assert!(list[0]["pinnedAt"].as_i64().is_some());

    let res = handle_method(&mut app, "view.set_sort", &json!({"sort": "pinned"}))
        .await
        .unwrap();
    assert_eq!(res["view"]["rows"][0]["pinned"], json!(true));

    let res = handle_method(&mut app, "pin.toggle", &json!({"url": url}))
        .await
        .unwrap();
    assert_eq!(res["pinned"], json!(false));
}

#[tokio::test]
async fn test_pins_persist_across_apps() {
    let tmp = TempDir::new().unwrap();
    {
        let mut app = App::new(config_in(&tmp)).unwrap();
        handle_method(
            &mut app,
            "pin.toggle",
            &json!({"url": "https://www.notion.so/a", "title": "A"}),
        )
        .await
        .unwrap();
    }
    let mut app = App::new(config_in(&tmp)).unwrap();
    let list = handle_method(&mut app, "pin.list", &json!({})).await.unwrap();
    assert_eq!(list.as_array().unwrap().len(), 1);
}
