//! Clusters of related content produced by the external clustering job.
//! Read-only aggregates; statistics arrive precomputed.

use crate::domain::content::{ArticleContentItem, ContentItem};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleCluster {
    pub cluster_title: String,
    pub cluster_uuid: String,
    pub cluster_id: String,
    pub article_uuids: Vec<String>,
    pub articles_data: Vec<ArticleContentItem>,
    pub average_hygge_score: f64,
    pub news_categories: Vec<String>,
    pub score_for_user: Option<f64>,
    /// category_id -> number of member articles
    pub category_counts: BTreeMap<String, u32>,
}

/// Cluster over mixed content variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedCluster {
    pub cluster_title: String,
    pub cluster_uuid: String,
    pub cluster_id: String,
    pub content_ids: Vec<String>,
    pub content_items: Vec<ContentItem>,
    pub average_hygge_score: f64,
    pub news_categories: Vec<String>,
    pub score_for_user: Option<f64>,
    pub category_counts: BTreeMap<String, u32>,
}

impl ArticleCluster {
    pub fn len(&self) -> usize {
        self.articles_data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles_data.is_empty()
    }

    /// Category with the most members; ties resolve to the smallest id.
    pub fn dominant_category(&self) -> Option<&str> {
        dominant(&self.category_counts)
    }
}

impl FeedCluster {
    pub fn len(&self) -> usize {
        self.content_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content_items.is_empty()
    }

    pub fn dominant_category(&self) -> Option<&str> {
        dominant(&self.category_counts)
    }
}

impl From<ArticleCluster> for FeedCluster {
    fn from(cluster: ArticleCluster) -> Self {
        Self {
            cluster_title: cluster.cluster_title,
            cluster_uuid: cluster.cluster_uuid,
            cluster_id: cluster.cluster_id,
            content_ids: cluster.article_uuids,
            content_items: cluster
                .articles_data
                .into_iter()
                .map(ContentItem::from)
                .collect(),
            average_hygge_score: cluster.average_hygge_score,
            news_categories: cluster.news_categories,
            score_for_user: cluster.score_for_user,
            category_counts: cluster.category_counts,
        }
    }
}

fn dominant(counts: &BTreeMap<String, u32>) -> Option<&str> {
    counts
        .iter()
        .fold(None, |best: Option<(&String, u32)>, (id, &n)| match best {
            Some((_, top)) if top >= n => best,
            _ => Some((id, n)),
        })
        .map(|(id, _)| id.as_str())
}
