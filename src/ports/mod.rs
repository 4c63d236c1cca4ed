//! Port traits. API boundaries for the hexagon.
//!
//! - Outbound: Called by the application into infrastructure (feed assembly)

pub mod outbound;

pub use outbound::FeedSourcePort;
