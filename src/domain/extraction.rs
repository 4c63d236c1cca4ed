//! Typed selection of content variants out of feeds and item sequences.
//!
//! Pure and order-preserving. Only the materialized sections are read;
//! `next_cursor`/`has_more` are never consulted.

use crate::domain::content::{ArticleContentItem, ContentItem, ContentVariant, MediaType};
use crate::domain::feed::UserFeed;
use std::collections::BTreeMap;

/// Keep the items `narrow` accepts, as the narrowed type, in input order.
pub fn get_content_items_by_type<'a, T, I, F>(items: I, narrow: F) -> Vec<&'a T>
where
    I: IntoIterator<Item = &'a ContentItem>,
    F: FnMut(&'a ContentItem) -> Option<&'a T>,
    T: 'a,
{
    items.into_iter().filter_map(narrow).collect()
}

/// `get_content_items_by_type` with the variant's own narrowing.
pub fn items_of<'a, T, I>(items: I) -> Vec<&'a T>
where
    I: IntoIterator<Item = &'a ContentItem>,
    T: ContentVariant + 'a,
{
    get_content_items_by_type(items, T::narrow)
}

/// Every article in the feed: sections in order, items in order within each section.
pub fn get_all_articles_from_feed(feed: &UserFeed) -> Vec<&ArticleContentItem> {
    get_content_items_by_type(feed.content_items(), ContentItem::as_article)
}

/// Item count per media type.
pub fn count_by_media_type<'a, I>(items: I) -> BTreeMap<MediaType, usize>
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(item.media_type().clone()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::{EventContentItem, MovieContentItem, is_article_content_item};
    use crate::domain::fixtures::{article, base, base_only, event, feed, movie, section};
    use crate::domain::content::BaseOnlyItem;
    use serde_json::json;

    fn ids<T: ContentVariant>(items: &[&T]) -> Vec<String> {
        items.iter().map(|i| i.base().id.clone()).collect()
    }

    #[test]
    fn test_articles_across_sections_in_order() {
        let f = feed(vec![
            section("A", vec![article("articleX"), movie("movieY")]),
            section("B", vec![article("articleZ")]),
        ]);
        let articles = get_all_articles_from_feed(&f);
        assert_eq!(ids(&articles), ["articleX", "articleZ"]);
    }

    #[test]
    fn test_empty_feed_yields_nothing() {
        assert!(get_all_articles_from_feed(&feed(vec![])).is_empty());
        let empty_sections = feed(vec![section("A", vec![]), section("B", vec![])]);
        assert!(get_all_articles_from_feed(&empty_sections).is_empty());
    }

    #[test]
    fn test_by_type_preserves_order_and_bounds_length() {
        let items = vec![
            event("e1"),
            movie("m1"),
            article("a1"),
            event("e2"),
            base_only("w1", MediaType::Weather),
        ];
        let events: Vec<&EventContentItem> =
            get_content_items_by_type(&items, ContentItem::as_event);
        assert_eq!(ids(&events), ["e1", "e2"]);
        assert!(events.len() <= items.len());

        let movies = items_of::<MovieContentItem, _>(&items);
        assert_eq!(ids(&movies), ["m1"]);
    }

    #[test]
    fn test_by_type_with_no_matches_or_no_input() {
        let items = vec![movie("m1"), event("e1")];
        assert!(get_content_items_by_type(&items, ContentItem::as_article).is_empty());
        let none: Vec<ContentItem> = Vec::new();
        assert!(items_of::<ArticleContentItem, _>(&none).is_empty());
    }

    #[test]
    fn test_feed_extraction_matches_flatten_then_filter() {
        let f = feed(vec![
            section("s1", vec![movie("m1"), article("a1"), article("a2")]),
            section("s2", vec![event("e1")]),
            section("s3", vec![article("a3"), movie("m2")]),
        ]);
        let flattened: Vec<&ContentItem> =
            f.sections.iter().flat_map(|s| &s.content_items).collect();
        let expected: Vec<&str> = flattened
            .iter()
            .filter(|i| is_article_content_item(i))
            .map(|i| i.id())
            .collect();

        let got = get_all_articles_from_feed(&f);
        assert_eq!(ids(&got), expected);
        assert_eq!(got, get_all_articles_from_feed(&f));
    }

    #[test]
    fn test_extraction_agrees_with_predicate_on_every_tag() {
        let decoded: ContentItem = serde_json::from_value(json!({
            "id": "p1",
            "title": "Episode",
            "description": "",
            "timestamp": "2024-03-01T08:00:00Z",
            "media_type": "podcast"
        }))
        .unwrap();
        let f = feed(vec![
            section("s1", vec![base_only("v1", MediaType::Video), article("a1")]),
            section("s2", vec![decoded, base_only("w1", MediaType::Weather)]),
            section("s3", vec![event("e1"), article("a2"), movie("m1")]),
        ]);

        let by_predicate: Vec<&str> = f
            .content_items()
            .filter(|i| is_article_content_item(i))
            .map(|i| i.id())
            .collect();
        assert_eq!(ids(&get_all_articles_from_feed(&f)), by_predicate);
        assert_eq!(by_predicate, ["a1", "a2"]);

        // An article tag cannot be paired with a base-only shape.
        assert!(BaseOnlyItem::new(MediaType::Article, base("x")).is_err());
        assert!(BaseOnlyItem::new(MediaType::from("article".to_string()), base("x")).is_err());
    }

    #[test]
    fn test_pagination_state_is_ignored() {
        let mut f = feed(vec![section("s1", vec![article("a1")])]);
        f.has_more = true;
        f.next_cursor = Some("page-2".into());
        assert_eq!(get_all_articles_from_feed(&f).len(), 1);
    }

    #[test]
    fn test_count_by_media_type() {
        let f = feed(vec![
            section("s1", vec![article("a1"), movie("m1")]),
            section("s2", vec![article("a2")]),
        ]);
        let counts = count_by_media_type(f.content_items());
        assert_eq!(counts.get(&MediaType::Article), Some(&2));
        assert_eq!(counts.get(&MediaType::Movie), Some(&1));
        assert_eq!(counts.get(&MediaType::Event), None);
    }
}
