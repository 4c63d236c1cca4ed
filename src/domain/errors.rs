//! Domain errors. Used by ports, adapters and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Weight lookup for a value outside the closed interaction enumeration.
    /// Never defaulted: a fabricated weight would corrupt downstream scores.
    #[error("Unknown interaction type: {0}")]
    UnknownInteractionType(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Encode error: {0}")]
    Encode(String),

    /// A base-only item was built with a tag that has its own variant.
    #[error("media_type {0} requires its dedicated variant")]
    VariantRequired(String),

    #[error("Unsupported schema version {found} (supported: {supported})")]
    UnsupportedSchema { found: u32, supported: u32 },

    /// `has_more` disagrees with `next_cursor`. Only raised under the strict policy.
    #[error("Pagination state inconsistent: has_more={has_more}, next_cursor present={cursor_present}")]
    Pagination { has_more: bool, cursor_present: bool },

    #[error("Feed source error: {0}")]
    Source(String),

    #[error("Export failed: {0}")]
    Export(String),
}
