//! Display-title cleaning.
//!
//! Browser tab titles end in " - Notion" or " | Notion". The suffix is
//! noise in a list that only ever shows Notion pages, so it is stripped for
//! display and for alphabetical ordering. Stored titles are never touched.

use std::borrow::Cow;

use regex::Regex;

/// Strips one trailing `<sep> <app name>` suffix from titles.
#[derive(Debug, Clone)]
pub struct TitleCleaner {
    suffix: Option<Regex>,
}

impl TitleCleaner {
    pub fn new(app_name: &str) -> Self {
        let pattern = format!(r"(?i)\s+[|-]\s+{}$", regex::escape(app_name.trim()));
        Self {
            suffix: Regex::new(&pattern).ok(),
        }
    }

    /// Returns the trimmed display form of `title`, or `title` itself when
    /// stripping would leave nothing.
    pub fn clean<'a>(&self, title: &'a str) -> Cow<'a, str> {
        let stripped = match &self.suffix {
            Some(suffix) => suffix.replace(title, ""),
            None => Cow::Borrowed(title),
        };
        let trimmed = stripped.trim();
        if trimmed.is_empty() {
            Cow::Borrowed(title)
        } else {
            Cow::Owned(trimmed.to_string())
        }
    }
}

impl Default for TitleCleaner {
    fn default() -> Self {
        Self::new("Notion")
    }
}
