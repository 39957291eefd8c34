use serde::{Deserialize, Serialize};

/// Top-level configuration container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct RecentsConfig {
    pub app: AppSettings,
    pub history: HistorySettings,
    pub classifier: ClassifierSettings,
    pub pins: PinSettings,
}

/// Identifies the target web application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    /// Only visits on this exact origin are kept.
    pub origin: String,
    /// Bare title of a not-yet-loaded tab; also the suffix stripped from titles.
    pub app_name: String,
    /// Origin of the hosting extension, used for browser-native favicons.
    pub extension_origin: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            origin: "https://www.notion.so".to_string(),
            app_name: "Notion".to_string(),
            extension_origin: None,
        }
    }
}

/// Which record wins when several visits share a canonical URL.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DedupePolicy {
    /// Earliest position in the provider's response.
    #[default]
    FirstSeen,
    /// Greatest `last_visit_time`.
    MostRecent,
}

/// History query parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HistorySettings {
    pub search_term: String,
    pub start_time: i64,
    pub max_results: usize,
    pub dedupe_policy: DedupePolicy,
    /// Chromium `History` SQLite file backing `history.refresh`.
    pub chrome_history_path: Option<String>,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            search_term: "notion.so".to_string(),
            start_time: 0,
            max_results: 200,
            dedupe_policy: DedupePolicy::FirstSeen,
            chrome_history_path: None,
        }
    }
}

/// Title vocabulary used to spot database views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClassifierSettings {
    pub database_keywords: Vec<String>,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            database_keywords: Self::default_keywords(),
        }
    }
}

impl ClassifierSettings {
    /// Returns the built-in English and Japanese database-view words.
    pub fn default_keywords() -> Vec<String> {
        [
            "database",
            "データベース",
            "DB",
            "table",
            "テーブル",
            "list",
            "リスト",
            "board",
            "ボード",
            "calendar",
            "カレンダー",
            "gallery",
            "ギャラリー",
            "timeline",
            "タイムライン",
        ]
        .iter()
        .map(|k| k.to_string())
        .collect()
    }
}

/// Pin persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PinSettings {
    /// Key under which the whole pin set is stored.
    pub storage_key: String,
    /// SQLite file holding pins; the platform data dir is used when unset.
    pub db_path: Option<String>,
}

impl Default for PinSettings {
    fn default() -> Self {
        Self {
            storage_key: "notionPinnedFiles".to_string(),
            db_path: None,
        }
    }
}
