//! Rating community endpoints, all under `/rating-community`.
//!
//! Navigation runs school → major section → minor section → rating item,
//! or school → category tree → rating item. Every write (rating, comment,
//! like) needs a session token.

#![allow(clippy::missing_errors_doc)]

use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError, ApiResponse, MessageAck, Query};
use crate::types::rating::{
    Category, CategoryDetail, Collection, CollectionDetail, Comment, CreateCommentRequest, MajorSection, MinorSection,
    RandomRatingItem, RatingItem, RatingItemDetail, School, SearchResults,
};

const BASE: &str = "/rating-community";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RateBody {
    rating_item_id: i64,
    stars: u8,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LikeBody {
    comment_id: i64,
}

/// `{ stars }` payload of the my-rating lookup. `0` means not rated yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct MyRating {
    #[serde(default)]
    pub stars: u8,
}

/// Result of toggling a like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeState {
    pub liked: bool,
    #[serde(default)]
    pub like_count: u32,
}

impl ApiClient {
    // ----- navigation -----

    pub async fn schools(&self) -> Result<ApiResponse<Vec<School>>, ApiError> {
        self.get(&format!("{BASE}/schools"), Query::new()).await
    }

    pub async fn major_sections(&self, school_id: i64) -> Result<ApiResponse<Vec<MajorSection>>, ApiError> {
        self.get(&format!("{BASE}/schools/{school_id}/major-sections"), Query::new())
            .await
    }

    pub async fn minor_sections(&self, major_id: i64) -> Result<ApiResponse<Vec<MinorSection>>, ApiError> {
        self.get(&format!("{BASE}/major-sections/{major_id}/minor-sections"), Query::new())
            .await
    }

    pub async fn minor_section_items(&self, minor_id: i64) -> Result<ApiResponse<Vec<RatingItem>>, ApiError> {
        self.get(&format!("{BASE}/minor-sections/{minor_id}/rating-items"), Query::new())
            .await
    }

    /// Top-level categories of a school.
    pub async fn categories(&self, school_id: i64) -> Result<ApiResponse<Vec<Category>>, ApiError> {
        self.get(&format!("{BASE}/schools/{school_id}/categories"), Query::new())
            .await
    }

    pub async fn category_children(&self, category_id: i64) -> Result<ApiResponse<Vec<Category>>, ApiError> {
        self.get(&format!("{BASE}/categories/{category_id}/children"), Query::new())
            .await
    }

    pub async fn category(&self, category_id: i64) -> Result<ApiResponse<CategoryDetail>, ApiError> {
        self.get(&format!("{BASE}/categories/{category_id}"), Query::new())
            .await
    }

    pub async fn category_items(&self, category_id: i64) -> Result<ApiResponse<Vec<RatingItem>>, ApiError> {
        self.get(&format!("{BASE}/categories/{category_id}/rating-items"), Query::new())
            .await
    }

    pub async fn rating_item(&self, item_id: i64) -> Result<ApiResponse<RatingItemDetail>, ApiError> {
        self.get(&format!("{BASE}/rating-items/{item_id}"), Query::new())
            .await
    }

    // ----- ratings -----

    /// Rate an item 1..=5. Out-of-range values are rejected locally
    /// without a request.
    pub async fn rate_item(&self, item_id: i64, stars: u8) -> Result<ApiResponse<MessageAck>, ApiError> {
        if !(1..=5).contains(&stars) {
            return Err(ApiError::Encode(format!("stars must be between 1 and 5, got {stars}")));
        }
        self.post(&format!("{BASE}/ratings"), &RateBody { rating_item_id: item_id, stars })
            .await
    }

    pub async fn my_rating(&self, item_id: i64) -> Result<ApiResponse<MyRating>, ApiError> {
        self.get(&format!("{BASE}/rating-items/{item_id}/my-rating"), Query::new())
            .await
    }

    // ----- comments -----

    pub async fn create_comment(&self, req: &CreateCommentRequest) -> Result<ApiResponse<Comment>, ApiError> {
        self.post(&format!("{BASE}/comments"), req).await
    }

    pub async fn delete_comment(&self, comment_id: i64) -> Result<ApiResponse<MessageAck>, ApiError> {
        self.delete(&format!("{BASE}/comments/{comment_id}")).await
    }

    pub async fn my_comments(&self) -> Result<ApiResponse<Vec<Comment>>, ApiError> {
        self.get(&format!("{BASE}/my-comments"), Query::new()).await
    }

    /// Toggle the caller's like on a comment.
    pub async fn like_comment(&self, comment_id: i64) -> Result<ApiResponse<LikeState>, ApiError> {
        self.post(&format!("{BASE}/likes"), &LikeBody { comment_id })
            .await
    }

    // ----- discovery -----

    pub async fn random_items(&self, school_id: Option<i64>, count: u32) -> Result<ApiResponse<Vec<RandomRatingItem>>, ApiError> {
        let query = Query::new()
            .with_opt("schoolId", school_id)
            .with("count", count);
        self.get(&format!("{BASE}/random-items"), query).await
    }

    pub async fn hot_items(&self, count: u32) -> Result<ApiResponse<Vec<RatingItem>>, ApiError> {
        self.get(&format!("{BASE}/hot-items"), Query::new().with("count", count))
            .await
    }

    pub async fn search_items(&self, keyword: &str) -> Result<ApiResponse<SearchResults>, ApiError> {
        self.get(&format!("{BASE}/search"), Query::new().with("keyword", keyword))
            .await
    }

    pub async fn collections(&self) -> Result<ApiResponse<Vec<Collection>>, ApiError> {
        self.get(&format!("{BASE}/collections"), Query::new()).await
    }

    pub async fn collection(&self, collection_id: i64) -> Result<ApiResponse<CollectionDetail>, ApiError> {
        self.get(&format!("{BASE}/collections/{collection_id}"), Query::new())
            .await
    }
}

#[cfg(test)]
#[path = "rating_test.rs"]
mod tests;
