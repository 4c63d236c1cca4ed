//! Feed reader use case: follow cursors across pages and collect typed content.
//!
//! Continuation is the caller's job; the extraction utilities only ever see one
//! materialized page. This service is that caller.

use crate::domain::{
    ArticleContentItem, DomainError, MediaType, count_by_media_type, get_all_articles_from_feed,
};
use crate::ports::FeedSourcePort;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use tracing::{info, warn};

/// What a bounded walk over the feed produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedDigest {
    pub pages_read: usize,
    /// Articles in page order, then section order, then item order.
    pub articles: Vec<ArticleContentItem>,
    pub media_type_counts: BTreeMap<MediaType, usize>,
    /// Cursor of the first page not read, if the walk stopped early.
    pub next_cursor: Option<String>,
}

impl FeedDigest {
    pub fn total_items(&self) -> usize {
        self.media_type_counts.values().sum()
    }

    pub fn article_refs(&self) -> Vec<&ArticleContentItem> {
        self.articles.iter().collect()
    }
}

/// Reads up to `max_pages` pages from a feed source.
pub struct FeedReaderService {
    source: Arc<dyn FeedSourcePort>,
    max_pages: usize,
}

impl FeedReaderService {
    pub fn new(source: Arc<dyn FeedSourcePort>, max_pages: usize) -> Self {
        Self { source, max_pages }
    }

    /// Walk the feed from the first page until the cursor runs out or `max_pages` is hit.
    /// A cursor seen twice ends the walk; the page it names has already been read.
    pub async fn read(&self) -> Result<FeedDigest, DomainError> {
        let mut digest = FeedDigest::default();
        let mut cursor: Option<String> = None;
        let mut seen: HashSet<String> = HashSet::new();

        while digest.pages_read < self.max_pages {
            let page = self.source.fetch_page(cursor.as_deref()).await?;
            digest.pages_read += 1;

            digest
                .articles
                .extend(get_all_articles_from_feed(&page).into_iter().cloned());
            for (media_type, n) in count_by_media_type(page.content_items()) {
                *digest.media_type_counts.entry(media_type).or_insert(0) += n;
            }

            cursor = match page.next_cursor {
                Some(next) if !seen.insert(next.clone()) => {
                    warn!(cursor = %next, "feed cursor repeated; stopping");
                    None
                }
                next => next,
            };
            if cursor.is_none() {
                break;
            }
        }

        digest.next_cursor = cursor;
        info!(
            pages = digest.pages_read,
            articles = digest.articles.len(),
            items = digest.total_items(),
            more = digest.next_cursor.is_some(),
            "feed read complete"
        );
        Ok(digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserFeed;
    use crate::domain::fixtures::{article, event, feed, movie, section};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory source keyed by cursor ("" = first page). Records requested cursors.
    struct MockFeedSource {
        pages: HashMap<String, UserFeed>,
        requests: Mutex<Vec<Option<String>>>,
    }

    impl MockFeedSource {
        fn new(pages: Vec<(&str, UserFeed)>) -> Self {
            Self {
                pages: pages.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl FeedSourcePort for MockFeedSource {
        async fn fetch_page(&self, cursor: Option<&str>) -> Result<UserFeed, DomainError> {
            self.requests.lock().unwrap().push(cursor.map(String::from));
            self.pages
                .get(cursor.unwrap_or(""))
                .cloned()
                .ok_or_else(|| DomainError::Source(format!("no page {:?}", cursor)))
        }
    }

    fn page(items: Vec<crate::domain::ContentItem>, next: Option<&str>) -> UserFeed {
        let mut f = feed(vec![section("s", items)]);
        f.next_cursor = next.map(String::from);
        f.has_more = next.is_some();
        f
    }

    #[tokio::test]
    async fn test_reads_all_pages_in_order() {
        let source = Arc::new(MockFeedSource::new(vec![
            ("", page(vec![article("a1"), movie("m1")], Some("c2"))),
            ("c2", page(vec![event("e1"), article("a2")], Some("c3"))),
            ("c3", page(vec![article("a3")], None)),
        ]));
        let reader = FeedReaderService::new(source.clone(), 10);

        let digest = reader.read().await.unwrap();
        assert_eq!(digest.pages_read, 3);
        let ids: Vec<&str> = digest.articles.iter().map(|a| a.base.id.as_str()).collect();
        assert_eq!(ids, ["a1", "a2", "a3"]);
        assert_eq!(digest.media_type_counts.get(&MediaType::Article), Some(&3));
        assert_eq!(digest.total_items(), 5);
        assert_eq!(digest.next_cursor, None);
        assert_eq!(
            *source.requests.lock().unwrap(),
            [None, Some("c2".to_string()), Some("c3".to_string())]
        );
    }

    #[tokio::test]
    async fn test_stops_at_max_pages() {
        let source = Arc::new(MockFeedSource::new(vec![
            ("", page(vec![article("a1")], Some("c2"))),
            ("c2", page(vec![article("a2")], Some("c3"))),
        ]));
        let digest = FeedReaderService::new(source, 1).read().await.unwrap();
        assert_eq!(digest.pages_read, 1);
        assert_eq!(digest.articles.len(), 1);
        assert_eq!(digest.next_cursor.as_deref(), Some("c2"));
    }

    #[tokio::test]
    async fn test_repeated_cursor_ends_walk() {
        let source = Arc::new(MockFeedSource::new(vec![
            ("", page(vec![article("a1")], Some("loop"))),
            ("loop", page(vec![article("a2")], Some("loop"))),
        ]));
        let digest = FeedReaderService::new(source, 10).read().await.unwrap();
        assert_eq!(digest.pages_read, 2);
        assert_eq!(digest.next_cursor, None);
    }

    #[tokio::test]
    async fn test_source_error_propagates() {
        let source = Arc::new(MockFeedSource::new(vec![(
            "",
            page(vec![article("a1")], Some("missing")),
        )]));
        let err = FeedReaderService::new(source, 10).read().await.unwrap_err();
        assert!(matches!(err, DomainError::Source(_)));
    }

    #[tokio::test]
    async fn test_zero_max_pages_reads_nothing() {
        let source = Arc::new(MockFeedSource::new(vec![]));
        let digest = FeedReaderService::new(source, 0).read().await.unwrap();
        assert_eq!(digest, FeedDigest::default());
    }
}
