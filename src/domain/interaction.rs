//! User interactions and the canonical interaction weights.
//!
//! The weight table is a published contract consumed by the scoring system:
//! changing a value changes scoring system-wide.

use crate::domain::content::{AdditionalData, ContentItem};
use crate::domain::errors::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionType {
    View,
    Like,
    Share,
    Comment,
    Follow,
    Purchase,
    Save,
}

impl InteractionType {
    /// Every interaction type, in ascending weight order.
    pub const ALL: [InteractionType; 7] = [
        InteractionType::View,
        InteractionType::Like,
        InteractionType::Share,
        InteractionType::Comment,
        InteractionType::Save,
        InteractionType::Follow,
        InteractionType::Purchase,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InteractionType::View => "view",
            InteractionType::Like => "like",
            InteractionType::Share => "share",
            InteractionType::Comment => "comment",
            InteractionType::Follow => "follow",
            InteractionType::Purchase => "purchase",
            InteractionType::Save => "save",
        }
    }
}

impl FromStr for InteractionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InteractionType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::UnknownInteractionType(s.to_string()))
    }
}

impl fmt::Display for InteractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A recorded user action. Immutable once created by the tracking system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub interaction_id: String,
    pub user_id: String,
    pub interaction_type: InteractionType,
    pub content_id: String,
    /// Snapshot of the item at interaction time.
    pub content_details: ContentItem,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_in_seconds: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction_data: Option<AdditionalData>,
}

impl Interaction {
    pub fn weight(&self) -> f64 {
        weight_of(self.interaction_type)
    }
}

/// Weight per interaction type. One field per type, so the map is total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightMap {
    pub view: f64,
    pub like: f64,
    pub share: f64,
    pub comment: f64,
    pub follow: f64,
    pub purchase: f64,
    pub save: f64,
}

impl WeightMap {
    pub const CANONICAL: WeightMap = WeightMap {
        view: 1.0,
        like: 2.0,
        share: 3.0,
        comment: 4.0,
        save: 5.0,
        follow: 6.0,
        purchase: 7.0,
    };

    pub fn weight(&self, interaction_type: InteractionType) -> f64 {
        match interaction_type {
            InteractionType::View => self.view,
            InteractionType::Like => self.like,
            InteractionType::Share => self.share,
            InteractionType::Comment => self.comment,
            InteractionType::Follow => self.follow,
            InteractionType::Purchase => self.purchase,
            InteractionType::Save => self.save,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (InteractionType, f64)> + '_ {
        InteractionType::ALL.into_iter().map(|t| (t, self.weight(t)))
    }
}

impl Default for WeightMap {
    fn default() -> Self {
        Self::CANONICAL
    }
}

pub fn weight_of(interaction_type: InteractionType) -> f64 {
    WeightMap::CANONICAL.weight(interaction_type)
}

/// Weight lookup for untyped input (deserialized or user-supplied strings).
pub fn weight_of_raw(interaction_type: &str) -> Result<f64, DomainError> {
    interaction_type.parse::<InteractionType>().map(weight_of)
}
