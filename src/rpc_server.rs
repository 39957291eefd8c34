//! Notion Recents RPC Server: JSON-RPC over stdin/stdout for a host shell.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"view.set_filter", "params":{"filter":"page"}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//!
//! Logs go to stderr. `NOTION_RECENTS_CONFIG` overrides the config path and
//! `NOTION_RECENTS_LOG` the log level.

use std::io::{self, BufRead, Write};

use log::{error, info, warn};
use serde_json::{json, Value};

use notion_recents::app::App;
use notion_recents::logging::init_logging;
use notion_recents::rpc_handler::handle_method;
use notion_recents::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use notion_recents::types::settings::RecentsConfig;

fn main() {
    let level = std::env::var("NOTION_RECENTS_LOG").unwrap_or_else(|_| "info".to_string());
    let _logger = match init_logging(&level) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("logging disabled: {}", e);
            None
        }
    };

    let settings = SettingsEngine::new(std::env::var("NOTION_RECENTS_CONFIG").ok());
    let config = match settings.load() {
        Ok(config) => config,
        Err(e) => {
            warn!(
                "{} ({}), falling back to defaults",
                e,
                settings.get_config_path()
            );
            RecentsConfig::default()
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            error!("failed to start runtime: {}", e);
            std::process::exit(1);
        }
    };

    let mut app = match App::new(config) {
        Ok(app) => app,
        Err(e) => {
            error!("failed to initialize: {}", e);
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let ready = json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")});
    if writeln!(out, "{}", ready).and_then(|_| out.flush()).is_err() {
        return;
    }
    info!("rpc server ready");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Value>(&line) {
            Ok(req) => {
                let id = req.get("id").cloned().unwrap_or(Value::Null);
                let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
                let params = req.get("params").cloned().unwrap_or(json!({}));

                match runtime.block_on(handle_method(&mut app, method, &params)) {
                    Ok(val) => json!({"id": id, "result": val}),
                    Err(err) => {
                        warn!("{} failed: {}", method, err);
                        json!({"id": id, "error": err})
                    }
                }
            }
            Err(e) => json!({"id": null, "error": format!("parse error: {}", e)}),
        };

        if writeln!(out, "{}", response).and_then(|_| out.flush()).is_err() {
            break;
        }
    }
    info!("stdin closed, shutting down");
}
