//! Favicon URL resolution for rendered rows.
//!
//! Prefers the browser's own favicon cache (the `_favicon` endpoint exposed
//! to extensions) so icons match the browser's history page, then a public
//! favicon service keyed by host, then the application's static icon.

use url::Url;

const FAVICON_SIZE: &str = "16";
const PUBLIC_FAVICON_SERVICE: &str = "https://www.google.com/s2/favicons";
const APP_FAVICON_PATH: &str = "/images/favicon.ico";

/// Resolves favicon URLs for one application.
#[derive(Debug, Clone)]
pub struct FaviconResolver {
    extension_origin: Option<String>,
    app_origin: String,
}

impl FaviconResolver {
    pub fn new(extension_origin: Option<&str>, app_origin: &str) -> Self {
        Self {
            extension_origin: extension_origin.map(|o| o.trim_end_matches('/').to_string()),
            app_origin: app_origin.trim_end_matches('/').to_string(),
        }
    }

    pub fn resolve(&self, page_url: &str) -> String {
        self.native(page_url)
            .or_else(|| Self::public(page_url))
            .unwrap_or_else(|| format!("{}{}", self.app_origin, APP_FAVICON_PATH))
    }

    fn native(&self, page_url: &str) -> Option<String> {
        let origin = self.extension_origin.as_ref()?;
        let mut url = Url::parse(&format!("{}/_favicon/", origin)).ok()?;
        url.query_pairs_mut()
            .append_pair("pageUrl", page_url)
            .append_pair("size", FAVICON_SIZE);
        Some(url.to_string())
    }

    fn public(page_url: &str) -> Option<String> {
        let page = Url::parse(page_url).ok()?;
        let host = page.host_str()?;
        let mut url = Url::parse(PUBLIC_FAVICON_SERVICE).ok()?;
        url.query_pairs_mut()
            .append_pair("domain", host)
            .append_pair("sz", FAVICON_SIZE);
        Some(url.to_string())
    }
}
