//! Rating community management, all under `/admin/rating-community`.
//!
//! Listing, detail, create and update are typed per entity. Status,
//! image removal and deletion share one path layout and take a
//! [`RatingEntity`]. Image uploads are multipart and not covered here.

#![allow(clippy::missing_errors_doc)]

use serde::Serialize;

use super::{ApiClient, ApiError, ApiResponse, Ignored, Query};
use crate::types::rating_admin::{
    AdminCategory, AdminCategoryFilter, AdminCollection, AdminCollectionItem, AdminComment, AdminListFilter,
    AdminMajorSection, AdminMinorSection, AdminRatingItem, AdminRatingItemFilter, AdminSchool, AdminUserRating,
    CategoryRequest, CollectionRequest, DailyRange, DailyRatingStatistics, MajorSectionRequest, MinorSectionRequest,
    RatingEntity, RatingItemRequest, RatingStatistics, SchoolRequest,
};
use crate::types::{PageRequest, Paged};

const BASE: &str = "/admin/rating-community";

pub const DEFAULT_ADMIN_PAGE_SIZE: u32 = 20;

#[derive(Serialize)]
struct StatusBody {
    status: i32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MoveCategoryBody {
    /// `null` moves the category to the top level.
    parent_id: Option<i64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MoveRatingItemBody {
    category_id: i64,
}

#[derive(Serialize)]
struct IdsBody<'a> {
    ids: &'a [i64],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CollectionItemBody {
    rating_item_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_order: Option<i32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SortBody {
    sort_order: i32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CollectionItemsBody<'a> {
    rating_item_ids: &'a [i64],
}

fn paging(page: Option<u32>, size: Option<u32>) -> Query {
    Query::new()
        .with("page", page.unwrap_or(1))
        .with("size", size.unwrap_or(DEFAULT_ADMIN_PAGE_SIZE))
}

fn entity_path(entity: RatingEntity, id: i64) -> String {
    format!("{BASE}/{}/{id}", entity.segment())
}

impl ApiClient {
    // ----- statistics -----

    pub async fn rating_statistics(&self) -> Result<ApiResponse<RatingStatistics>, ApiError> {
        self.get(&format!("{BASE}/statistics/overview"), Query::new())
            .await
    }

    /// Daily rating counts. `None` lets the server pick its default window.
    pub async fn daily_rating_statistics(&self, range: Option<&DailyRange>) -> Result<ApiResponse<DailyRatingStatistics>, ApiError> {
        let query = match range {
            None => Query::new(),
            Some(DailyRange::Preset(preset)) => Query::new().with("preset", preset),
            Some(DailyRange::Between { start_date, end_date }) => Query::new()
                .with("startDate", start_date)
                .with("endDate", end_date),
        };
        self.get(&format!("{BASE}/statistics/daily-ratings"), query)
            .await
    }

    // ----- shared entity operations -----

    /// Enable (`1`) or disable (`0`) any managed entity.
    pub async fn set_rating_entity_status(&self, entity: RatingEntity, id: i64, status: i32) -> Result<ApiResponse<Ignored>, ApiError> {
        self.put(&format!("{}/status", entity_path(entity, id)), &StatusBody { status })
            .await
    }

    pub async fn delete_rating_entity(&self, entity: RatingEntity, id: i64) -> Result<ApiResponse<Ignored>, ApiError> {
        self.delete(&entity_path(entity, id)).await
    }

    /// Remove an entity's cover image. Schools carry none, so asking for
    /// one fails locally.
    pub async fn delete_rating_entity_image(&self, entity: RatingEntity, id: i64) -> Result<ApiResponse<Ignored>, ApiError> {
        if !entity.has_image() {
            return Err(ApiError::Encode(format!("{} have no image", entity.segment())));
        }
        self.delete(&format!("{}/image", entity_path(entity, id)))
            .await
    }

    // ----- schools -----

    pub async fn admin_schools(&self, filter: AdminListFilter) -> Result<ApiResponse<Paged<AdminSchool>>, ApiError> {
        let query = paging(filter.page, filter.size).with_opt("status", filter.status);
        self.get(&format!("{BASE}/schools"), query).await
    }

    pub async fn admin_school(&self, id: i64) -> Result<ApiResponse<AdminSchool>, ApiError> {
        self.get(&entity_path(RatingEntity::School, id), Query::new())
            .await
    }

    pub async fn create_school(&self, req: &SchoolRequest) -> Result<ApiResponse<AdminSchool>, ApiError> {
        self.post(&format!("{BASE}/schools"), req).await
    }

    pub async fn update_school(&self, id: i64, req: &SchoolRequest) -> Result<ApiResponse<AdminSchool>, ApiError> {
        self.put(&entity_path(RatingEntity::School, id), req).await
    }

    // ----- sections -----

    /// `parent_id` filters by school.
    pub async fn admin_major_sections(&self, filter: AdminListFilter) -> Result<ApiResponse<Paged<AdminMajorSection>>, ApiError> {
        let query = paging(filter.page, filter.size)
            .with_opt("schoolId", filter.parent_id)
            .with_opt("status", filter.status);
        self.get(&format!("{BASE}/major-sections"), query).await
    }

    pub async fn admin_major_section(&self, id: i64) -> Result<ApiResponse<AdminMajorSection>, ApiError> {
        self.get(&entity_path(RatingEntity::MajorSection, id), Query::new())
            .await
    }

    pub async fn create_major_section(&self, req: &MajorSectionRequest) -> Result<ApiResponse<AdminMajorSection>, ApiError> {
        self.post(&format!("{BASE}/major-sections"), req).await
    }

    pub async fn update_major_section(&self, id: i64, req: &MajorSectionRequest) -> Result<ApiResponse<AdminMajorSection>, ApiError> {
        self.put(&entity_path(RatingEntity::MajorSection, id), req)
            .await
    }

    /// `parent_id` filters by major section.
    pub async fn admin_minor_sections(&self, filter: AdminListFilter) -> Result<ApiResponse<Paged<AdminMinorSection>>, ApiError> {
        let query = paging(filter.page, filter.size)
            .with_opt("majorSectionId", filter.parent_id)
            .with_opt("status", filter.status);
        self.get(&format!("{BASE}/minor-sections"), query).await
    }

    pub async fn admin_minor_section(&self, id: i64) -> Result<ApiResponse<AdminMinorSection>, ApiError> {
        self.get(&entity_path(RatingEntity::MinorSection, id), Query::new())
            .await
    }

    pub async fn create_minor_section(&self, req: &MinorSectionRequest) -> Result<ApiResponse<AdminMinorSection>, ApiError> {
        self.post(&format!("{BASE}/minor-sections"), req).await
    }

    pub async fn update_minor_section(&self, id: i64, req: &MinorSectionRequest) -> Result<ApiResponse<AdminMinorSection>, ApiError> {
        self.put(&entity_path(RatingEntity::MinorSection, id), req)
            .await
    }

    // ----- categories -----

    pub async fn admin_categories(&self, filter: &AdminCategoryFilter) -> Result<ApiResponse<Paged<AdminCategory>>, ApiError> {
        let query = paging(filter.page, filter.size)
            .with_opt("schoolId", filter.school_id)
            .with_opt("parentId", filter.parent_id)
            .with_opt("status", filter.status)
            .with_opt("keyword", filter.keyword.as_deref());
        self.get(&format!("{BASE}/categories"), query).await
    }

    pub async fn admin_category(&self, id: i64) -> Result<ApiResponse<AdminCategory>, ApiError> {
        self.get(&entity_path(RatingEntity::Category, id), Query::new())
            .await
    }

    pub async fn create_category(&self, req: &CategoryRequest) -> Result<ApiResponse<AdminCategory>, ApiError> {
        self.post(&format!("{BASE}/categories"), req).await
    }

    pub async fn update_category(&self, id: i64, req: &CategoryRequest) -> Result<ApiResponse<AdminCategory>, ApiError> {
        self.put(&entity_path(RatingEntity::Category, id), req).await
    }

    /// Re-parent a category; `None` makes it top-level.
    pub async fn move_category(&self, id: i64, parent_id: Option<i64>) -> Result<ApiResponse<AdminCategory>, ApiError> {
        let path = format!("{}/move", entity_path(RatingEntity::Category, id));
        self.put(&path, &MoveCategoryBody { parent_id }).await
    }

    // ----- rating items -----

    pub async fn admin_rating_items(&self, filter: &AdminRatingItemFilter) -> Result<ApiResponse<Paged<AdminRatingItem>>, ApiError> {
        let query = paging(filter.page, filter.size)
            .with_opt("categoryId", filter.category_id)
            .with_opt("minorSectionId", filter.minor_section_id)
            .with_opt("status", filter.status)
            .with_opt("keyword", filter.keyword.as_deref());
        self.get(&format!("{BASE}/rating-items"), query).await
    }

    pub async fn admin_rating_item(&self, id: i64) -> Result<ApiResponse<AdminRatingItem>, ApiError> {
        self.get(&entity_path(RatingEntity::RatingItem, id), Query::new())
            .await
    }

    pub async fn create_rating_item(&self, req: &RatingItemRequest) -> Result<ApiResponse<AdminRatingItem>, ApiError> {
        self.post(&format!("{BASE}/rating-items"), req).await
    }

    pub async fn update_rating_item(&self, id: i64, req: &RatingItemRequest) -> Result<ApiResponse<AdminRatingItem>, ApiError> {
        self.put(&entity_path(RatingEntity::RatingItem, id), req)
            .await
    }

    pub async fn move_rating_item(&self, id: i64, category_id: i64) -> Result<ApiResponse<AdminRatingItem>, ApiError> {
        let path = format!("{}/move", entity_path(RatingEntity::RatingItem, id));
        self.put(&path, &MoveRatingItemBody { category_id }).await
    }

    // ----- comments and ratings -----

    pub async fn admin_comments(&self, filter: AdminListFilter) -> Result<ApiResponse<Paged<AdminComment>>, ApiError> {
        let query = paging(filter.page, filter.size)
            .with_opt("ratingItemId", filter.rating_item_id)
            .with_opt("userId", filter.user_id);
        self.get(&format!("{BASE}/comments"), query).await
    }

    pub async fn admin_comment(&self, id: i64) -> Result<ApiResponse<AdminComment>, ApiError> {
        self.get(&format!("{BASE}/comments/{id}"), Query::new()).await
    }

    pub async fn admin_delete_comment(&self, id: i64) -> Result<ApiResponse<Ignored>, ApiError> {
        self.delete(&format!("{BASE}/comments/{id}")).await
    }

    pub async fn admin_delete_comments(&self, ids: &[i64]) -> Result<ApiResponse<Ignored>, ApiError> {
        self.delete_with_body(&format!("{BASE}/comments/batch"), &IdsBody { ids })
            .await
    }

    pub async fn admin_ratings(&self, filter: AdminListFilter) -> Result<ApiResponse<Paged<AdminUserRating>>, ApiError> {
        let query = paging(filter.page, filter.size)
            .with_opt("ratingItemId", filter.rating_item_id)
            .with_opt("userId", filter.user_id);
        self.get(&format!("{BASE}/ratings"), query).await
    }

    pub async fn admin_delete_rating(&self, id: i64) -> Result<ApiResponse<Ignored>, ApiError> {
        self.delete(&format!("{BASE}/ratings/{id}")).await
    }

    pub async fn admin_delete_ratings(&self, ids: &[i64]) -> Result<ApiResponse<Ignored>, ApiError> {
        self.delete_with_body(&format!("{BASE}/ratings/batch"), &IdsBody { ids })
            .await
    }

    // ----- collections -----

    pub async fn admin_collections(&self, filter: AdminListFilter) -> Result<ApiResponse<Paged<AdminCollection>>, ApiError> {
        let query = paging(filter.page, filter.size).with_opt("status", filter.status);
        self.get(&format!("{BASE}/collections"), query).await
    }

    pub async fn admin_collection(&self, id: i64) -> Result<ApiResponse<AdminCollection>, ApiError> {
        self.get(&entity_path(RatingEntity::Collection, id), Query::new())
            .await
    }

    pub async fn create_collection(&self, req: &CollectionRequest) -> Result<ApiResponse<AdminCollection>, ApiError> {
        self.post(&format!("{BASE}/collections"), req).await
    }

    pub async fn update_collection(&self, id: i64, req: &CollectionRequest) -> Result<ApiResponse<AdminCollection>, ApiError> {
        self.put(&entity_path(RatingEntity::Collection, id), req)
            .await
    }

    pub async fn admin_collection_items(
        &self,
        collection_id: i64,
        page: PageRequest,
    ) -> Result<ApiResponse<Paged<AdminCollectionItem>>, ApiError> {
        let path = format!("{}/items", entity_path(RatingEntity::Collection, collection_id));
        self.get(&path, paging(page.page, page.size)).await
    }

    pub async fn add_collection_item(
        &self,
        collection_id: i64,
        rating_item_id: i64,
        sort_order: Option<i32>,
    ) -> Result<ApiResponse<AdminCollectionItem>, ApiError> {
        let path = format!("{}/items", entity_path(RatingEntity::Collection, collection_id));
        self.post(&path, &CollectionItemBody { rating_item_id, sort_order })
            .await
    }

    pub async fn add_collection_items(&self, collection_id: i64, rating_item_ids: &[i64]) -> Result<ApiResponse<Ignored>, ApiError> {
        let path = format!("{}/items/batch", entity_path(RatingEntity::Collection, collection_id));
        self.post(&path, &CollectionItemsBody { rating_item_ids })
            .await
    }

    pub async fn remove_collection_item(&self, collection_id: i64, rating_item_id: i64) -> Result<ApiResponse<Ignored>, ApiError> {
        let path = format!("{}/items/{rating_item_id}", entity_path(RatingEntity::Collection, collection_id));
        self.delete(&path).await
    }

    pub async fn sort_collection_item(
        &self,
        collection_id: i64,
        rating_item_id: i64,
        sort_order: i32,
    ) -> Result<ApiResponse<Ignored>, ApiError> {
        let path = format!(
            "{}/items/{rating_item_id}/sort",
            entity_path(RatingEntity::Collection, collection_id)
        );
        self.put(&path, &SortBody { sort_order }).await
    }
}

#[cfg(test)]
#[path = "rating_admin_test.rs"]
mod tests;
