//! App Core for Notion Recents.
//!
//! Central struct holding the history session and the configured history
//! provider for the lifetime of one host connection.

use std::path::PathBuf;

use log::{info, warn};

use crate::database::connection::Database;
use crate::database::pin_store::SqlitePinStore;
use crate::managers::history_session::HistorySession;
use crate::platform;
use crate::providers::ChromeHistoryProvider;
use crate::types::settings::RecentsConfig;

/// Central application struct.
///
/// `provider` is `None` when no Chromium history file is available; the host
/// then fulfils query tickets itself through `history.complete_query`.
pub struct App {
    pub session: HistorySession<SqlitePinStore>,
    pub provider: Option<ChromeHistoryProvider>,
}

impl App {
    /// Creates a new App from a loaded config.
    ///
    /// The pin database lives at `pins.db_path`, or `pins.db` in the platform
    /// data dir. If it cannot be opened the session keeps pins in memory for
    /// this run only.
    pub fn new(config: RecentsConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let db_path = config
            .pins
            .db_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| platform::get_data_dir().join("pins.db"));

        let db = match Database::open(&db_path) {
            Ok(db) => db,
            Err(e) => {
                warn!(
                    "cannot open pin database {}: {}; pins will not persist",
                    db_path.display(),
                    e
                );
                Database::open_in_memory()?
            }
        };

        let history_path = config
            .history
            .chrome_history_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(platform::default_chrome_history_path);
        let provider = if history_path.exists() {
            info!("using history file {}", history_path.display());
            Some(ChromeHistoryProvider::new(&history_path))
        } else {
            info!(
                "no history file at {}; waiting for host-provided records",
                history_path.display()
            );
            None
        };

        Ok(Self {
            session: HistorySession::open(config, SqlitePinStore::new(db)),
            provider,
        })
    }
}
