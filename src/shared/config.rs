//! Application configuration. Feed location, paging limits, boundary policy.

use crate::adapters::json::PaginationPolicy;
use serde::Deserialize;

/// Default number of pages the reader follows before stopping.
pub const DEFAULT_MAX_PAGES: usize = 10;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Directory holding `feed.json` and `{cursor}.json` pages. Read from HYGGE_FEED_FEED_DIR.
    #[serde(default)]
    pub feed_dir: Option<String>,

    /// Max pages to follow per run. Read from HYGGE_FEED_MAX_PAGES.
    #[serde(default)]
    pub max_pages: Option<usize>,

    /// `tolerate` or `strict` handling of has_more/next_cursor disagreement.
    /// Read from HYGGE_FEED_PAGINATION_POLICY.
    #[serde(default)]
    pub pagination_policy: Option<PaginationPolicy>,

    /// If set, extracted articles are written here as CSV. Read from HYGGE_FEED_EXPORT_CSV.
    #[serde(default)]
    pub export_csv: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("HYGGE_FEED").try_parsing(true));
        if let Ok(path) = std::env::var("HYGGE_FEED_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the feed directory. Defaults to "./feed".
    pub fn feed_dir_or_default(&self) -> String {
        self.feed_dir.clone().unwrap_or_else(|| "./feed".to_string())
    }

    /// Returns the page limit. Defaults to DEFAULT_MAX_PAGES.
    pub fn max_pages_or_default(&self) -> usize {
        self.max_pages.unwrap_or(DEFAULT_MAX_PAGES)
    }

    pub fn pagination_policy_or_default(&self) -> PaginationPolicy {
        self.pagination_policy.unwrap_or_default()
    }
}
