//! Core domain layer. No external I/O dependencies.
//!
//! Content taxonomy, feed structure, interaction weights and the pure
//! extraction rules over them. Dependencies flow inward.

pub mod cluster;
pub mod content;
pub mod enrichment;
pub mod errors;
pub mod extraction;
pub mod feed;
pub mod interaction;

#[cfg(test)]
pub(crate) mod fixtures;

pub use cluster::{ArticleCluster, FeedCluster};
pub use content::{
    AdditionalData, ArticleContentItem, BaseOnlyItem, CastMember, ContentBase, ContentItem,
    ContentVariant, CrewMember, EventContentItem, JigsawLayout, MediaType, MovieColors,
    MovieContentItem, NewsSource, UnknownTag, is_article_content_item, is_event_content_item,
    is_movie_content_item,
};
pub use enrichment::{
    Category, ConversationMessage, PostProcessedArticleData, PreprocessedArticleData, Role,
};
pub use errors::DomainError;
pub use extraction::{
    count_by_media_type, get_all_articles_from_feed, get_content_items_by_type, items_of,
};
pub use feed::{
    CURRENT_SCHEMA_VERSION, FeedDocument, FeedSection, RedisContentItem, SchemaVersion, UserFeed,
};
pub use interaction::{Interaction, InteractionType, WeightMap, weight_of, weight_of_raw};
