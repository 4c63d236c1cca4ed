//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, UserFeed};

/// Feed assembly service. Serves one page of a user's feed per call.
#[async_trait::async_trait]
pub trait FeedSourcePort: Send + Sync {
    /// Fetch a page of the feed.
    ///
    /// - `cursor`: `None` = first page; `Some(c)` = the page `c` continues to,
    ///   as handed out in a previous page's `next_cursor`.
    async fn fetch_page(&self, cursor: Option<&str>) -> Result<UserFeed, DomainError>;
}
