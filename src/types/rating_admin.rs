//! Rating community shapes (admin side).
//!
//! Every managed entity carries a `status` (`1` enabled, `0` disabled) and a
//! `sortOrder`. One request type serves both create and update; unset
//! fields are left out of the body so an update only touches what it names.

use serde::{Deserialize, Serialize};

// =============================================================================
// ENTITIES
// =============================================================================

/// Managed entities whose status, image and deletion endpoints share a
/// path layout under `/admin/rating-community/{segment}/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingEntity {
    School,
    MajorSection,
    MinorSection,
    Category,
    RatingItem,
    Collection,
}

impl RatingEntity {
    #[must_use]
    pub fn segment(self) -> &'static str {
        match self {
            Self::School => "schools",
            Self::MajorSection => "major-sections",
            Self::MinorSection => "minor-sections",
            Self::Category => "categories",
            Self::RatingItem => "rating-items",
            Self::Collection => "collections",
        }
    }

    /// Schools have no cover image.
    #[must_use]
    pub fn has_image(self) -> bool {
        !matches!(self, Self::School)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSchool {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub major_section_count: u32,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminMajorSection {
    pub id: i64,
    pub school_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminMinorSection {
    pub id: i64,
    pub major_section_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCategory {
    pub id: i64,
    pub school_id: i64,
    #[serde(default)]
    pub parent_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub child_count: u32,
    #[serde(default)]
    pub item_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminRatingItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub minor_section_id: Option<i64>,
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub average_stars: f64,
    #[serde(default)]
    pub rating_count: u32,
    #[serde(default)]
    pub comment_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminComment {
    pub id: i64,
    pub rating_item_id: i64,
    #[serde(default)]
    pub rating_item_name: Option<String>,
    pub user_id: i64,
    #[serde(default)]
    pub nickname: Option<String>,
    pub comment_text: String,
    #[serde(default)]
    pub like_count: u32,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserRating {
    pub id: i64,
    pub rating_item_id: i64,
    #[serde(default)]
    pub rating_item_name: Option<String>,
    pub user_id: i64,
    #[serde(default)]
    pub nickname: Option<String>,
    pub stars: u8,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCollection {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub item_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCollectionItem {
    pub rating_item_id: i64,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub average_stars: f64,
}

// =============================================================================
// STATISTICS
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RatingStatistics {
    pub school_count: u64,
    pub rating_item_count: u64,
    pub rating_count: u64,
    pub comment_count: u64,
    pub user_count: u64,
    pub pending_contribution_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRatingCount {
    pub date: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyRatingStatistics {
    pub start_date: String,
    pub end_date: String,
    pub daily: Vec<DailyRatingCount>,
}

/// Window for the daily rating chart: a named preset (`7d`, `30d`, ...)
/// or an explicit `YYYY-MM-DD` range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DailyRange {
    Preset(String),
    Between { start_date: String, end_date: String },
}

// =============================================================================
// FILTERS
// =============================================================================

/// Listing filter shared by schools, sections, comments and ratings.
/// `parent_id` is the school for major sections and the major section for
/// minor sections; `rating_item_id` and `user_id` apply to comments and
/// ratings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdminListFilter {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub status: Option<i32>,
    pub parent_id: Option<i64>,
    pub rating_item_id: Option<i64>,
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminCategoryFilter {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub school_id: Option<i64>,
    pub parent_id: Option<i64>,
    pub status: Option<i32>,
    pub keyword: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminRatingItemFilter {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub category_id: Option<i64>,
    pub minor_section_id: Option<i64>,
    pub status: Option<i32>,
    pub keyword: Option<String>,
}

// =============================================================================
// REQUESTS
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MajorSectionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinorSectionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_section_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingItemRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minor_section_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}
