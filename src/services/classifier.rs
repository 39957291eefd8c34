//! Page/database classification for visited URLs.
//!
//! The rules are heuristics. A wrong answer only moves a row to the other
//! tab, so no error path exists here.

use url::Url;

use crate::types::history::ResourceKind;
use crate::types::settings::ClassifierSettings;

/// Query parameter carrying a database view identifier.
const VIEW_PARAM: &str = "v";
const DATABASE_SEGMENT: &str = "/database/";

/// Trait defining the classification interface.
pub trait ClassifierTrait {
    fn classify(&self, url: &str, title: &str) -> ResourceKind;
}

/// Classifier driven by URL markers and a title vocabulary.
pub struct Classifier {
    /// Lowercased once at construction.
    keywords: Vec<String>,
}

impl Classifier {
    pub fn new(settings: &ClassifierSettings) -> Self {
        Self::with_keywords(&settings.database_keywords)
    }

    pub fn with_keywords<S: AsRef<str>>(keywords: &[S]) -> Self {
        Self {
            keywords: keywords
                .iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    /// Returns true when the URL itself says "database view".
    fn has_database_marker(url: &str) -> bool {
        match Url::parse(url) {
            Ok(parsed) => {
                parsed.query_pairs().any(|(key, _)| key == VIEW_PARAM)
                    || parsed.path().contains(DATABASE_SEGMENT)
            }
            Err(_) => url.contains("?v=") || url.contains(DATABASE_SEGMENT),
        }
    }

    fn title_matches(&self, title: &str) -> bool {
        let lower = title.to_lowercase();
        self.keywords.iter().any(|k| lower.contains(k.as_str()))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&ClassifierSettings::default())
    }
}

impl ClassifierTrait for Classifier {
    fn classify(&self, url: &str, title: &str) -> ResourceKind {
        if Self::has_database_marker(url) || self.title_matches(title) {
            ResourceKind::Database
        } else {
            ResourceKind::Page
        }
    }
}
