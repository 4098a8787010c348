//! Campus museum shapes: tags, events and the content blocks that make up
//! an event page.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

// =============================================================================
// TAGS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub sort_order: i32,
    /// `1` enabled, `0` disabled.
    pub status: i32,
    #[serde(default)]
    pub event_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagRequest {
    pub name: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

// =============================================================================
// EVENTS
// =============================================================================

/// `0` draft, `1` published, `2` unpublished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum EventStatus {
    Draft,
    Published,
    Unpublished,
}

impl TryFrom<i32> for EventStatus {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Draft),
            1 => Ok(Self::Published),
            2 => Ok(Self::Unpublished),
            other => Err(format!("unknown event status: {other}")),
        }
    }
}

impl From<EventStatus> for i32 {
    fn from(status: EventStatus) -> Self {
        match status {
            EventStatus::Draft => 0,
            EventStatus::Published => 1,
            EventStatus::Unpublished => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTag {
    pub id: i64,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub cover_url: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub location: String,
    pub status: EventStatus,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub view_count: u32,
    #[serde(default)]
    pub moment_count: u32,
    #[serde(default)]
    pub comment_count: u32,
    #[serde(default)]
    pub tags: Vec<EventTag>,
    #[serde(default)]
    pub creator_name: String,
    #[serde(default)]
    pub published_at: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    #[serde(flatten)]
    pub event: Event,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub creator_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSort {
    StartDate,
    CreatedAt,
    ViewCount,
}

impl EventSort {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StartDate => "startDate",
            Self::CreatedAt => "createdAt",
            Self::ViewCount => "viewCount",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub status: Option<EventStatus>,
    pub tag_id: Option<i64>,
    pub keyword: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_featured: Option<bool>,
    pub sort: Option<(EventSort, SortOrder)>,
}

/// Create/update body. `title` and `start_date` are required on create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventBatchAction {
    Publish,
    Unpublish,
    Feature,
    Unfeature,
    Delete,
}

// =============================================================================
// BLOCKS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Text,
    Gallery,
    Video,
    File,
    Timeline,
    Link,
}

/// One section of an event page. `content` is shaped by `block_type`;
/// [`Block::typed_content`] decodes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub id: i64,
    pub block_type: BlockType,
    #[serde(default)]
    pub title: Option<String>,
    pub content: Value,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub file_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachedFile {
    pub file_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub time: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockLink {
    pub url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Decoded block content, one variant per [`BlockType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockContent {
    Text {
        text: String,
    },
    Gallery {
        images: Vec<GalleryImage>,
    },
    Video {
        #[serde(rename = "fileId")]
        file_id: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cover: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    Files {
        files: Vec<AttachedFile>,
    },
    Timeline {
        items: Vec<TimelineEntry>,
    },
    Links {
        links: Vec<BlockLink>,
    },
}

impl BlockContent {
    #[must_use]
    pub fn block_type(&self) -> BlockType {
        match self {
            Self::Text { .. } => BlockType::Text,
            Self::Gallery { .. } => BlockType::Gallery,
            Self::Video { .. } => BlockType::Video,
            Self::Files { .. } => BlockType::File,
            Self::Timeline { .. } => BlockType::Timeline,
            Self::Links { .. } => BlockType::Link,
        }
    }
}

#[derive(Deserialize)]
struct TextContent {
    text: String,
}

#[derive(Deserialize)]
struct GalleryContent {
    images: Vec<GalleryImage>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoContent {
    file_id: i64,
    #[serde(default)]
    cover: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

#[derive(Deserialize)]
struct FilesContent {
    files: Vec<AttachedFile>,
}

#[derive(Deserialize)]
struct TimelineContent {
    items: Vec<TimelineEntry>,
}

#[derive(Deserialize)]
struct LinksContent {
    links: Vec<BlockLink>,
}

fn content_as<T: DeserializeOwned>(content: &Value) -> Result<T, serde_json::Error> {
    T::deserialize(content)
}

impl Block {
    /// Decode `content` according to `block_type`.
    ///
    /// # Errors
    ///
    /// Returns the decode error when `content` does not match the shape
    /// its `block_type` calls for.
    pub fn typed_content(&self) -> Result<BlockContent, serde_json::Error> {
        let content = &self.content;
        Ok(match self.block_type {
            BlockType::Text => {
                let TextContent { text } = content_as(content)?;
                BlockContent::Text { text }
            }
            BlockType::Gallery => {
                let GalleryContent { images } = content_as(content)?;
                BlockContent::Gallery { images }
            }
            BlockType::Video => {
                let VideoContent { file_id, cover, title } = content_as(content)?;
                BlockContent::Video { file_id, cover, title }
            }
            BlockType::File => {
                let FilesContent { files } = content_as(content)?;
                BlockContent::Files { files }
            }
            BlockType::Timeline => {
                let TimelineContent { items } = content_as(content)?;
                BlockContent::Timeline { items }
            }
            BlockType::Link => {
                let LinksContent { links } = content_as(content)?;
                BlockContent::Links { links }
            }
        })
    }
}

/// Create/update body for a block; the type is derived from `content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockRequest {
    pub block_type: BlockType,
    pub title: Option<String>,
    pub content: BlockContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

impl BlockRequest {
    #[must_use]
    pub fn new(title: Option<String>, content: BlockContent) -> Self {
        Self { block_type: content.block_type(), title, content, sort_order: None }
    }
}
