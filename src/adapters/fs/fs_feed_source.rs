//! Implements FeedSourcePort over a directory of exported feed pages.
//!
//! First page: `{dir}/feed.json`. Continuation pages: `{dir}/{cursor}.json`.

use crate::adapters::json::{PaginationPolicy, decode_feed};
use crate::domain::{DomainError, UserFeed};
use crate::ports::FeedSourcePort;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

const FIRST_PAGE: &str = "feed";

/// Directory-backed feed source. Each page is one JSON document.
pub struct FsFeedSource {
    base_dir: PathBuf,
    policy: PaginationPolicy,
}

impl FsFeedSource {
    pub fn new(base_dir: impl AsRef<Path>, policy: PaginationPolicy) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            policy,
        }
    }

    fn page_path(&self, cursor: Option<&str>) -> Result<PathBuf, DomainError> {
        let name = match cursor {
            None => FIRST_PAGE,
            Some(c) => {
                // Cursors are opaque tokens, never paths.
                if c.is_empty() || c.contains(['/', '\\']) || c == "." || c == ".." {
                    return Err(DomainError::Source(format!("invalid cursor: {:?}", c)));
                }
                c
            }
        };
        Ok(self.base_dir.join(format!("{}.json", name)))
    }
}

#[async_trait::async_trait]
impl FeedSourcePort for FsFeedSource {
    async fn fetch_page(&self, cursor: Option<&str>) -> Result<UserFeed, DomainError> {
        let path = self.page_path(cursor)?;
        let json = match fs::read_to_string(&path).await {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(DomainError::Source(format!(
                    "page not found: {}",
                    path.display()
                )));
            }
            Err(e) => return Err(DomainError::Source(format!("{}: {}", path.display(), e))),
        };
        let feed = decode_feed(&json, self.policy)?;
        info!(
            path = %path.display(),
            sections = feed.sections.len(),
            has_more = feed.has_more,
            "loaded feed page"
        );
        Ok(feed)
    }
}
