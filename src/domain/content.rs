//! Content taxonomy. Every feed unit shares `ContentBase`; `media_type` selects
//! which variant-only fields apply.
//!
//! The tag is the `ContentItem` variant itself, so it cannot disagree with the
//! shape. Unknown tags never fail: they decode as `ContentItem::Other` and keep
//! the original tag string so re-encoding is lossless.

use crate::domain::errors::DomainError;
use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Discriminant of a content item. Wire strings are lowercase and must never be repurposed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MediaType {
    Article,
    Video,
    Audio,
    Post,
    Business,
    Event,
    Update,
    Weather,
    Movie,
    /// Tag introduced by a newer producer. Treated as base-only.
    Other(UnknownTag),
}

/// A tag string outside the known set. Only built by `MediaType::from`,
/// so it never holds a known tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnknownTag(String);

impl UnknownTag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl MediaType {
    pub fn as_str(&self) -> &str {
        match self {
            MediaType::Article => "article",
            MediaType::Video => "video",
            MediaType::Audio => "audio",
            MediaType::Post => "post",
            MediaType::Business => "business",
            MediaType::Event => "event",
            MediaType::Update => "update",
            MediaType::Weather => "weather",
            MediaType::Movie => "movie",
            MediaType::Other(tag) => tag.as_str(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, MediaType::Other(_))
    }

    /// Tags with their own `ContentItem` variant. Extend alongside the enum.
    pub fn has_variant(&self) -> bool {
        matches!(self, MediaType::Article | MediaType::Movie | MediaType::Event)
    }

    fn known(tag: &str) -> Option<MediaType> {
        Some(match tag {
            "article" => MediaType::Article,
            "video" => MediaType::Video,
            "audio" => MediaType::Audio,
            "post" => MediaType::Post,
            "business" => MediaType::Business,
            "event" => MediaType::Event,
            "update" => MediaType::Update,
            "weather" => MediaType::Weather,
            "movie" => MediaType::Movie,
            _ => return None,
        })
    }
}

impl From<&str> for MediaType {
    fn from(tag: &str) -> Self {
        MediaType::known(tag).unwrap_or_else(|| MediaType::Other(UnknownTag(tag.to_string())))
    }
}

impl From<String> for MediaType {
    fn from(tag: String) -> Self {
        MediaType::known(&tag).unwrap_or(MediaType::Other(UnknownTag(tag)))
    }
}

impl From<MediaType> for String {
    fn from(media_type: MediaType) -> Self {
        match media_type {
            MediaType::Other(UnknownTag(tag)) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Layout hint for the jigsaw grid renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JigsawLayout {
    Prominent,
    Average,
    Minor,
}

/// Open-ended metadata bag. Keys are producer-defined; values are carried untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdditionalData(BTreeMap<String, serde_json::Value>);

impl AdditionalData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &serde_json::Value)> {
        self.0.iter()
    }
}

/// Fields shared by every content item. The `media_type` tag is not stored
/// here: it is the `ContentItem` variant, or `BaseOnlyItem::media_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBase {
    pub id: String,
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<AdditionalData>,
    #[serde(default)]
    pub jigsaw_layout: Option<JigsawLayout>,
}

/// Attribution record for an article. Owned by ingestion; read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsSource {
    pub link: String,
    pub category_id: String,
    pub source_id: String,
    pub name: String,
    pub logo_url: String,
    pub color_hex: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleContentItem {
    #[serde(flatten)]
    pub base: ContentBase,
    pub url: String,
    pub ingested_date: String,
    pub image_url: Option<String>,
    pub thumbnail_image_url: Option<String>,
    pub authors: Option<Vec<String>>,
    pub raw_tags: Vec<String>,
    pub date_published: Option<String>,
    pub word_count: Option<u32>,
    pub domain: Option<String>,
    pub excerpt: Option<String>,
    pub news_source: NewsSource,
    pub hygge_description: Option<String>,
    pub hygge_score: Option<f64>,
    pub reason_for_score: Option<String>,
    /// Estimated read time in minutes.
    pub eta_to_read: Option<f64>,
    pub personal_score: Option<f64>,
    pub final_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub profile_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    pub name: String,
    pub job: String,
    #[serde(default)]
    pub department: Option<String>,
}

/// Palette extracted from the poster, used to theme the movie card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieColors {
    pub primary_hex: String,
    pub secondary_hex: String,
    pub text_hex: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieContentItem {
    #[serde(flatten)]
    pub base: ContentBase,
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<u32>,
    pub popularity: Option<f64>,
    pub poster_url: Option<String>,
    pub backdrop_url: Option<String>,
    pub colors: Option<MovieColors>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventContentItem {
    #[serde(flatten)]
    pub base: ContentBase,
    pub location: String,
    #[serde(rename = "startDate")]
    pub start_date: DateTime<Utc>,
    #[serde(rename = "endDate")]
    pub end_date: DateTime<Utc>,
}

/// An item whose tag has no dedicated variant (video, weather, unknown tags, ...).
///
/// Construction rejects tags that do have a variant, so an `article` can only
/// ever be a `ContentItem::Article`.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseOnlyItem {
    media_type: MediaType,
    base: ContentBase,
}

impl BaseOnlyItem {
    pub fn new(media_type: MediaType, base: ContentBase) -> Result<Self, DomainError> {
        if media_type.has_variant() {
            return Err(DomainError::VariantRequired(media_type.to_string()));
        }
        Ok(Self { media_type, base })
    }

    pub fn media_type(&self) -> &MediaType {
        &self.media_type
    }

    pub fn base(&self) -> &ContentBase {
        &self.base
    }

    pub fn into_base(self) -> ContentBase {
        self.base
    }
}

/// A content item of any variant.
///
/// Encodes flat: `media_type` and the variant fields sit next to the base
/// fields, as on the wire. Decoding dispatches on `media_type`; tags without a
/// dedicated variant land in `Other`.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentItem {
    Article(ArticleContentItem),
    Movie(MovieContentItem),
    Event(EventContentItem),
    Other(BaseOnlyItem),
}

static ARTICLE: MediaType = MediaType::Article;
static MOVIE: MediaType = MediaType::Movie;
static EVENT: MediaType = MediaType::Event;

#[derive(Serialize)]
struct Tagged<'a, T> {
    media_type: &'a MediaType,
    #[serde(flatten)]
    fields: &'a T,
}

impl Serialize for ContentItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let media_type = self.media_type();
        match self {
            ContentItem::Article(a) => Tagged { media_type, fields: a }.serialize(serializer),
            ContentItem::Movie(m) => Tagged { media_type, fields: m }.serialize(serializer),
            ContentItem::Event(e) => Tagged { media_type, fields: e }.serialize(serializer),
            ContentItem::Other(o) => Tagged {
                media_type,
                fields: &o.base,
            }
            .serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ContentItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let media_type = match value.get("media_type") {
            Some(serde_json::Value::String(tag)) => MediaType::from(tag.as_str()),
            Some(_) => return Err(de::Error::custom("media_type must be a string")),
            None => return Err(de::Error::missing_field("media_type")),
        };
        let item = match media_type {
            MediaType::Article => serde_json::from_value(value).map(ContentItem::Article),
            MediaType::Movie => serde_json::from_value(value).map(ContentItem::Movie),
            MediaType::Event => serde_json::from_value(value).map(ContentItem::Event),
            ref other => {
                let base: ContentBase = serde_json::from_value(value)
                    .map_err(|e| de::Error::custom(format!("{} item: {}", other, e)))?;
                return BaseOnlyItem::new(other.clone(), base)
                    .map(ContentItem::Other)
                    .map_err(de::Error::custom);
            }
        };
        item.map_err(|e| de::Error::custom(format!("{} item: {}", media_type, e)))
    }
}

impl ContentItem {
    pub fn base(&self) -> &ContentBase {
        match self {
            ContentItem::Article(a) => &a.base,
            ContentItem::Movie(m) => &m.base,
            ContentItem::Event(e) => &e.base,
            ContentItem::Other(o) => o.base(),
        }
    }

    pub fn media_type(&self) -> &MediaType {
        match self {
            ContentItem::Article(_) => &ARTICLE,
            ContentItem::Movie(_) => &MOVIE,
            ContentItem::Event(_) => &EVENT,
            ContentItem::Other(o) => o.media_type(),
        }
    }

    pub fn id(&self) -> &str {
        &self.base().id
    }

    pub fn title(&self) -> &str {
        &self.base().title
    }

    pub fn as_article(&self) -> Option<&ArticleContentItem> {
        ArticleContentItem::narrow(self)
    }

    pub fn as_movie(&self) -> Option<&MovieContentItem> {
        MovieContentItem::narrow(self)
    }

    pub fn as_event(&self) -> Option<&EventContentItem> {
        EventContentItem::narrow(self)
    }
}

/// A concrete variant that can be recovered from a `ContentItem` by its tag.
///
/// New variants add a tag, a shape and an impl of this trait; existing impls are untouched.
pub trait ContentVariant: Sized {
    const MEDIA_TYPE: MediaType;

    /// Returns the variant iff the item's tag is `MEDIA_TYPE`.
    fn narrow(item: &ContentItem) -> Option<&Self>;

    fn base(&self) -> &ContentBase;
}

impl ContentVariant for ArticleContentItem {
    const MEDIA_TYPE: MediaType = MediaType::Article;

    fn narrow(item: &ContentItem) -> Option<&Self> {
        match item {
            ContentItem::Article(a) => Some(a),
            _ => None,
        }
    }

    fn base(&self) -> &ContentBase {
        &self.base
    }
}

impl ContentVariant for MovieContentItem {
    const MEDIA_TYPE: MediaType = MediaType::Movie;

    fn narrow(item: &ContentItem) -> Option<&Self> {
        match item {
            ContentItem::Movie(m) => Some(m),
            _ => None,
        }
    }

    fn base(&self) -> &ContentBase {
        &self.base
    }
}

impl ContentVariant for EventContentItem {
    const MEDIA_TYPE: MediaType = MediaType::Event;

    fn narrow(item: &ContentItem) -> Option<&Self> {
        match item {
            ContentItem::Event(e) => Some(e),
            _ => None,
        }
    }

    fn base(&self) -> &ContentBase {
        &self.base
    }
}

impl From<ArticleContentItem> for ContentItem {
    fn from(article: ArticleContentItem) -> Self {
        ContentItem::Article(article)
    }
}

impl From<MovieContentItem> for ContentItem {
    fn from(movie: MovieContentItem) -> Self {
        ContentItem::Movie(movie)
    }
}

impl From<EventContentItem> for ContentItem {
    fn from(event: EventContentItem) -> Self {
        ContentItem::Event(event)
    }
}

impl From<BaseOnlyItem> for ContentItem {
    fn from(item: BaseOnlyItem) -> Self {
        ContentItem::Other(item)
    }
}

/// True iff the item's tag is `article`. Total; never fails on unknown tags.
pub fn is_article_content_item(item: &ContentItem) -> bool {
    *item.media_type() == MediaType::Article
}

pub fn is_movie_content_item(item: &ContentItem) -> bool {
    *item.media_type() == MediaType::Movie
}

pub fn is_event_content_item(item: &ContentItem) -> bool {
    *item.media_type() == MediaType::Event
}
