//! JSON boundary. Validates producer documents before they reach the core.

pub mod feed_codec;

pub use feed_codec::{
    PaginationPolicy, decode_content_item, decode_feed, decode_interaction, encode_feed,
};
