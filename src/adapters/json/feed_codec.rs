//! Decode/encode feed documents, interactions and single content items.
//!
//! This is where malformed producer input is rejected: the extraction
//! utilities assume well-formed values and do not re-check them.

use crate::domain::{
    CURRENT_SCHEMA_VERSION, ContentItem, DomainError, FeedDocument, Interaction, SchemaVersion,
    UserFeed,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// What to do with a page whose `has_more` disagrees with `next_cursor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaginationPolicy {
    /// Accept the page and log a warning. Continuation follows `next_cursor`.
    #[default]
    Tolerate,
    /// Reject the page with `DomainError::Pagination`.
    Strict,
}

#[derive(Serialize)]
struct FeedDocumentRef<'a> {
    schema_version: SchemaVersion,
    #[serde(flatten)]
    feed: &'a UserFeed,
}

/// Decode a feed page. Accepts a bare `UserFeed` or one carrying `schema_version`.
pub fn decode_feed(json: &str, policy: PaginationPolicy) -> Result<UserFeed, DomainError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| DomainError::Decode(format!("feed: {}", e)))?;

    // Version first, so an old document fails on its version and not on a missing field.
    let version = match value.get("schema_version") {
        Some(v) => SchemaVersion::deserialize(v)
            .map_err(|e| DomainError::Decode(format!("schema_version: {}", e)))?,
        None => CURRENT_SCHEMA_VERSION,
    };
    if version != CURRENT_SCHEMA_VERSION {
        return Err(DomainError::UnsupportedSchema {
            found: version.0,
            supported: CURRENT_SCHEMA_VERSION.0,
        });
    }

    let doc: FeedDocument =
        serde_json::from_value(value).map_err(|e| DomainError::Decode(format!("feed: {}", e)))?;
    let feed = doc.feed;
    check_pagination(&feed, policy)?;

    debug!(
        sections = feed.sections.len(),
        items = feed.content_items().count(),
        has_more = feed.has_more,
        "decoded feed page"
    );
    Ok(feed)
}

/// Encode a feed page tagged with the current schema version.
pub fn encode_feed(feed: &UserFeed) -> Result<String, DomainError> {
    let doc = FeedDocumentRef {
        schema_version: CURRENT_SCHEMA_VERSION,
        feed,
    };
    serde_json::to_string_pretty(&doc).map_err(encode_error)
}

fn encode_error(e: serde_json::Error) -> DomainError {
    DomainError::Encode(format!("feed: {}", e))
}

pub fn decode_interaction(json: &str) -> Result<Interaction, DomainError> {
    serde_json::from_str(json).map_err(|e| DomainError::Decode(format!("interaction: {}", e)))
}

pub fn decode_content_item(json: &str) -> Result<ContentItem, DomainError> {
    serde_json::from_str(json).map_err(|e| DomainError::Decode(format!("content item: {}", e)))
}

fn check_pagination(feed: &UserFeed, policy: PaginationPolicy) -> Result<(), DomainError> {
    if feed.pagination_consistent() {
        return Ok(());
    }
    let cursor_present = feed.next_cursor.is_some();
    match policy {
        PaginationPolicy::Tolerate => {
            warn!(
                has_more = feed.has_more,
                cursor_present, "feed page pagination state is inconsistent; following next_cursor"
            );
            Ok(())
        }
        PaginationPolicy::Strict => Err(DomainError::Pagination {
            has_more: feed.has_more,
            cursor_present,
        }),
    }
}
