//! Application use cases. Orchestrate domain logic via ports.

pub mod feed_reader;

pub use feed_reader::{FeedDigest, FeedReaderService};
