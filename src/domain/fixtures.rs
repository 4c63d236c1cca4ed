//! Test builders shared by unit tests across the crate.

use crate::domain::content::{
    ArticleContentItem, BaseOnlyItem, ContentBase, ContentItem, EventContentItem, MediaType,
    MovieContentItem, NewsSource,
};
use crate::domain::feed::{FeedSection, UserFeed};
use chrono::{TimeZone, Utc};

pub fn base(id: &str) -> ContentBase {
    ContentBase {
        id: id.to_string(),
        title: format!("Title {}", id),
        description: format!("Description {}", id),
        timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
        tags: None,
        additional_data: None,
        jigsaw_layout: None,
    }
}

pub fn news_source() -> NewsSource {
    NewsSource {
        link: "https://slow.example".to_string(),
        category_id: "lifestyle".to_string(),
        source_id: "slow".to_string(),
        name: "Slow News".to_string(),
        logo_url: "https://slow.example/logo.png".to_string(),
        color_hex: "#ffcc00".to_string(),
    }
}

pub fn article_item(id: &str) -> ArticleContentItem {
    ArticleContentItem {
        base: base(id),
        url: format!("https://slow.example/{}", id),
        ingested_date: "2024-03-01".to_string(),
        image_url: None,
        thumbnail_image_url: None,
        authors: Some(vec!["A. Writer".to_string()]),
        raw_tags: vec!["calm".to_string()],
        date_published: Some("2024-02-29".to_string()),
        word_count: Some(800),
        domain: Some("slow.example".to_string()),
        excerpt: None,
        news_source: news_source(),
        hygge_description: None,
        hygge_score: Some(7.5),
        reason_for_score: None,
        eta_to_read: Some(4.0),
        personal_score: None,
        final_score: Some(6.0),
    }
}

/// Item for a tag without a dedicated variant. Panics on article/movie/event.
pub fn base_only(id: &str, media_type: MediaType) -> ContentItem {
    ContentItem::from(BaseOnlyItem::new(media_type, base(id)).unwrap())
}

pub fn article(id: &str) -> ContentItem {
    ContentItem::from(article_item(id))
}

pub fn movie(id: &str) -> ContentItem {
    ContentItem::from(MovieContentItem {
        base: base(id),
        cast: vec![],
        crew: vec![],
        vote_average: Some(7.5),
        vote_count: Some(1200),
        popularity: Some(33.25),
        poster_url: None,
        backdrop_url: None,
        colors: None,
    })
}

pub fn event(id: &str) -> ContentItem {
    ContentItem::from(EventContentItem {
        base: base(id),
        location: "Copenhagen".to_string(),
        start_date: Utc.with_ymd_and_hms(2024, 12, 1, 18, 0, 0).unwrap(),
        end_date: Utc.with_ymd_and_hms(2024, 12, 1, 21, 0, 0).unwrap(),
    })
}

pub fn section(id: &str, items: Vec<ContentItem>) -> FeedSection {
    FeedSection {
        id: id.to_string(),
        title: Some(format!("Section {}", id)),
        section_title_color: "#334455".to_string(),
        content_items: items,
    }
}

pub fn feed(sections: Vec<FeedSection>) -> UserFeed {
    UserFeed {
        sections,
        next_cursor: None,
        has_more: false,
    }
}
