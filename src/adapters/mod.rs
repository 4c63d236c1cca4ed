//! Infrastructure adapters. Implement outbound ports and the serialization boundary.
//!
//! JSON codec, filesystem feed source, CSV export. Map errors to DomainError.

pub mod export;
pub mod fs;
pub mod json;
