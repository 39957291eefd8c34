//! Unit tests for type, favorites and search filtering.

use std::collections::HashSet;

use notion_recents::services::filter_engine::filter;
use notion_recents::types::history::{ResourceKind, ResourceRecord};
use notion_recents::types::pin::PinEntry;
use notion_recents::types::query::{QueryState, TypeFilter};

fn record(path: &str, title: &str, kind: ResourceKind) -> ResourceRecord {
    let url = format!("https://www.notion.so/{}", path);
    ResourceRecord {
        canonical_url: url.clone(),
        url,
        title: title.to_string(),
        last_visit_time: 0,
        visit_count: 1,
        kind,
    }
}

fn sample() -> Vec<ResourceRecord> {
    vec![
        record("roadmap", "Roadmap", ResourceKind::Page),
        record("tasks?v=1", "Tasks", ResourceKind::Database),
        record("notes", "Meeting Notes", ResourceKind::Page),
        record("crm?v=2", "Customers", ResourceKind::Database),
    ]
}

fn query(type_filter: TypeFilter, search: &str) -> QueryState {
    QueryState {
        type_filter,
        search_text: search.to_string(),
        ..QueryState::default()
    }
}

fn no_pins() -> HashSet<String> {
    HashSet::new()
}

fn titles(records: &[ResourceRecord]) -> Vec<&str> {
    records.iter().map(|r| r.title.as_str()).collect()
}

#[test]
fn test_all_keeps_everything_in_order() {
    let out = filter(&sample(), &query(TypeFilter::All, ""), &no_pins());
    assert_eq!(titles(&out), vec!["Roadmap", "Tasks", "Meeting Notes", "Customers"]);
}

#[test]
fn test_page_and_database_tabs_split_by_kind() {
    let records = sample();
    let pages = filter(&records, &query(TypeFilter::Page, ""), &no_pins());
    let databases = filter(&records, &query(TypeFilter::Database, ""), &no_pins());

    assert!(pages.iter().all(|r| r.kind == ResourceKind::Page));
    assert!(databases.iter().all(|r| r.kind == ResourceKind::Database));
    assert_eq!(pages.len() + databases.len(), records.len());
}

#[test]
fn test_favorites_with_no_pins_is_empty() {
    let pins: Vec<PinEntry> = Vec::new();
    let out = filter(&sample(), &query(TypeFilter::Favorites, ""), &pins);
    assert!(out.is_empty());
}

#[test]
fn test_favorites_match_exact_url_regardless_of_kind() {
    let pins: HashSet<String> = [
        "https://www.notion.so/tasks?v=1".to_string(),
        "https://www.notion.so/notes".to_string(),
        // Same canonical URL as tasks, different raw URL.
        "https://www.notion.so/crm".to_string(),
    ]
    .into_iter()
    .collect();

    let out = filter(&sample(), &query(TypeFilter::Favorites, ""), &pins);
    assert_eq!(titles(&out), vec!["Tasks", "Meeting Notes"]);
}

#[test]
fn test_search_is_case_insensitive_over_title_and_url() {
    let records = sample();
    let by_title = filter(&records, &query(TypeFilter::All, "MEETING"), &no_pins());
    assert_eq!(titles(&by_title), vec!["Meeting Notes"]);

    let by_url = filter(&records, &query(TypeFilter::All, "crm"), &no_pins());
    assert_eq!(titles(&by_url), vec!["Customers"]);
}

#[test]
fn test_search_is_trimmed_and_blank_matches_all() {
    let records = sample();
    let trimmed = filter(&records, &query(TypeFilter::All, "  tasks  "), &no_pins());
    assert_eq!(titles(&trimmed), vec!["Tasks"]);

    let blank = filter(&records, &query(TypeFilter::All, "   "), &no_pins());
    assert_eq!(blank.len(), records.len());
}

#[test]
fn test_search_applies_after_type_filter() {
    let out = filter(&sample(), &query(TypeFilter::Page, "tasks"), &no_pins());
    assert!(out.is_empty());
}
