//! Notion Recents: console listing of recent Notion pages and databases.
//!
//! Reads the configured Chromium history file and prints the All, Page and
//! Database tabs as the popup would render them. Pass a sort key (`recent`,
//! `frequent`, `alphabetical`, `pinned`) as the first argument.

use notion_recents::app::App;
use notion_recents::logging::init_logging;
use notion_recents::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use notion_recents::types::query::{RecentsView, SortKey, TypeFilter};
use notion_recents::types::settings::RecentsConfig;

fn main() {
    let _logger = init_logging("warn").ok();

    let sort_key = match std::env::args().nth(1) {
        Some(arg) => match serde_json::from_value::<SortKey>(serde_json::Value::String(arg.clone())) {
            Ok(key) => key,
            Err(_) => {
                eprintln!("unknown sort key '{}'", arg);
                std::process::exit(2);
            }
        },
        None => SortKey::Recent,
    };

    let settings = SettingsEngine::new(None);
    let config = settings.load().unwrap_or_else(|e| {
        eprintln!("{}; using defaults", e);
        RecentsConfig::default()
    });

    let mut app = match App::new(config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("failed to initialize: {}", e);
            std::process::exit(1);
        }
    };
    let Some(provider) = app.provider.clone() else {
        eprintln!("no Chromium history file found; set history.chrome_history_path in config.json");
        std::process::exit(1);
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("failed to start runtime: {}", e);
            std::process::exit(1);
        }
    };

    app.session.set_sort_key(sort_key);
    for tab in [TypeFilter::All, TypeFilter::Page, TypeFilter::Database] {
        app.session.set_type_filter(tab);
        let outcome = runtime.block_on(app.session.refresh(&provider));
        section(&format!("{:?} ({:?})", tab, outcome));
        print_view(&app.session.view());
    }
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn print_view(view: &RecentsView) {
    if let Some(message) = &view.empty_message {
        println!("  {}", message);
        return;
    }
    for row in &view.rows {
        let marks = format!(
            "{}{}",
            if row.pinned { "★" } else { " " },
            if row.frequently_visited { "🔥" } else { "  " }
        );
        println!(
            "  {} {:<48} {:>4} visits  {}",
            marks, row.display_title, row.record.visit_count, row.record.url
        );
    }
}
