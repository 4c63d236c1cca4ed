//! Shapes exchanged with categorization and the ML enrichment service.

use crate::domain::content::ArticleContentItem;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub category_id: String,
    pub icon_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscribed: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    System,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub role: Role,
    pub content: String,
}

/// Trimmed article sent out for scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreprocessedArticleData {
    pub id: String,
    pub title: String,
    pub description: String,
    pub word_count: Option<u32>,
    pub authors: Option<Vec<String>>,
}

/// Scoring result returned for a preprocessed article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostProcessedArticleData {
    #[serde(flatten)]
    pub article: PreprocessedArticleData,
    pub tags: Vec<String>,
    pub reason: String,
    pub improved_description: String,
    pub hygge_score: f64,
    pub original_description: String,
    pub eta_to_read: f64,
}

impl From<&ArticleContentItem> for PreprocessedArticleData {
    fn from(article: &ArticleContentItem) -> Self {
        Self {
            id: article.base.id.clone(),
            title: article.base.title.clone(),
            description: article.base.description.clone(),
            word_count: article.word_count,
            authors: article.authors.clone(),
        }
    }
}
