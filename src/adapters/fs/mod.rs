//! Filesystem adapters.

pub mod fs_feed_source;

pub use fs_feed_source::FsFeedSource;
