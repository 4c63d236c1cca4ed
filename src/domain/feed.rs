//! Feed structure: sections of content items plus cursor pagination state.

use crate::domain::content::ContentItem;
use serde::{Deserialize, Serialize};

/// Schema version of the content/feed shapes in this crate.
///
/// * 1: articles without `news_source`
/// * 2: `news_source` on articles
/// * 3: `jigsaw_layout` on every item, movie items
pub const CURRENT_SCHEMA_VERSION: SchemaVersion = SchemaVersion(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaVersion(pub u32);

impl Default for SchemaVersion {
    fn default() -> Self {
        CURRENT_SCHEMA_VERSION
    }
}

/// Named, colored grouping of content items. Item order is render order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedSection {
    pub id: String,
    pub title: Option<String>,
    pub section_title_color: String,
    #[serde(rename = "contentItems")]
    pub content_items: Vec<ContentItem>,
}

/// One page of a user's feed.
///
/// `has_more` is expected to agree with `next_cursor` being present; the
/// assembler owns that invariant and nothing here enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserFeed {
    pub sections: Vec<FeedSection>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

impl UserFeed {
    /// All items, section-major then item-minor.
    pub fn content_items(&self) -> impl Iterator<Item = &ContentItem> {
        self.sections.iter().flat_map(|s| s.content_items.iter())
    }

    pub fn pagination_consistent(&self) -> bool {
        self.has_more == self.next_cursor.is_some()
    }

    /// True when the page reports nothing further to fetch.
    pub fn is_last_page(&self) -> bool {
        self.next_cursor.is_none()
    }
}

/// Versioned envelope for a feed page at the serialization boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedDocument {
    #[serde(default)]
    pub schema_version: SchemaVersion,
    #[serde(flatten)]
    pub feed: UserFeed,
}

impl From<UserFeed> for FeedDocument {
    fn from(feed: UserFeed) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            feed,
        }
    }
}

/// Content item as held by the cache layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedisContentItem {
    pub id: String,
    pub metadata: ContentItem,
}

impl From<ContentItem> for RedisContentItem {
    fn from(item: ContentItem) -> Self {
        Self {
            id: item.id().to_string(),
            metadata: item,
        }
    }
}
