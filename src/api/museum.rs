//! Museum administration under `/admin/museum`: tags, events and event
//! content blocks. Media uploads are multipart and not covered here.

#![allow(clippy::missing_errors_doc)]

use serde::Serialize;

use super::{ApiClient, ApiError, ApiResponse, Ignored, Query};
use crate::types::Paged;
use crate::types::museum::{
    Block, BlockRequest, Event, EventBatchAction, EventDetail, EventFilter, EventRequest, Tag, TagRequest,
};

const BASE: &str = "/admin/museum";

pub const DEFAULT_EVENT_PAGE_SIZE: u32 = 20;

#[derive(Serialize)]
struct IdsBody<'a> {
    ids: &'a [i64],
}

#[derive(Serialize)]
struct BatchBody<'a> {
    ids: &'a [i64],
    action: EventBatchAction,
}

impl ApiClient {
    // ----- tags -----

    /// `status` of `Some(1)` lists enabled tags only.
    pub async fn museum_tags(&self, status: Option<i32>) -> Result<ApiResponse<Vec<Tag>>, ApiError> {
        self.get(&format!("{BASE}/tags"), Query::new().with_opt("status", status))
            .await
    }

    pub async fn create_museum_tag(&self, req: &TagRequest) -> Result<ApiResponse<Tag>, ApiError> {
        self.post(&format!("{BASE}/tags"), req).await
    }

    pub async fn update_museum_tag(&self, id: i64, req: &TagRequest) -> Result<ApiResponse<Tag>, ApiError> {
        self.put(&format!("{BASE}/tags/{id}"), req).await
    }

    pub async fn delete_museum_tag(&self, id: i64) -> Result<ApiResponse<Ignored>, ApiError> {
        self.delete(&format!("{BASE}/tags/{id}")).await
    }

    pub async fn toggle_museum_tag(&self, id: i64) -> Result<ApiResponse<Tag>, ApiError> {
        self.post_empty(&format!("{BASE}/tags/{id}/toggle-status"))
            .await
    }

    /// Persist a new tag order; `ids` lists every tag in display order.
    pub async fn sort_museum_tags(&self, ids: &[i64]) -> Result<ApiResponse<Ignored>, ApiError> {
        self.post(&format!("{BASE}/tags/sort"), &IdsBody { ids }).await
    }

    // ----- events -----

    pub async fn museum_events(&self, filter: &EventFilter) -> Result<ApiResponse<Paged<Event>>, ApiError> {
        let query = Query::new()
            .with("page", filter.page.unwrap_or(1))
            .with("size", filter.size.unwrap_or(DEFAULT_EVENT_PAGE_SIZE))
            .with_opt("status", filter.status.map(i32::from))
            .with_opt("tagId", filter.tag_id)
            .with_opt("keyword", filter.keyword.as_deref())
            .with_opt("startDate", filter.start_date.as_deref())
            .with_opt("endDate", filter.end_date.as_deref())
            .with_opt("isFeatured", filter.is_featured)
            .with_opt("sortBy", filter.sort.map(|(by, _)| by.as_str()))
            .with_opt("sortOrder", filter.sort.map(|(_, order)| order.as_str()));
        self.get(&format!("{BASE}/events"), query).await
    }

    pub async fn museum_event(&self, id: i64) -> Result<ApiResponse<EventDetail>, ApiError> {
        self.get(&format!("{BASE}/events/{id}"), Query::new()).await
    }

    /// Create a draft event. Title and start date are checked locally.
    pub async fn create_museum_event(&self, req: &EventRequest) -> Result<ApiResponse<Event>, ApiError> {
        if req.title.as_deref().is_none_or(str::is_empty) || req.start_date.is_none() {
            return Err(ApiError::Encode("an event needs a title and a start date".into()));
        }
        self.post(&format!("{BASE}/events"), req).await
    }

    pub async fn update_museum_event(&self, id: i64, req: &EventRequest) -> Result<ApiResponse<Event>, ApiError> {
        self.put(&format!("{BASE}/events/{id}"), req).await
    }

    pub async fn delete_museum_event(&self, id: i64) -> Result<ApiResponse<Ignored>, ApiError> {
        self.delete(&format!("{BASE}/events/{id}")).await
    }

    /// Publish or unpublish one event.
    pub async fn set_museum_event_published(&self, id: i64, published: bool) -> Result<ApiResponse<Ignored>, ApiError> {
        let verb = if published { "publish" } else { "unpublish" };
        self.post_empty(&format!("{BASE}/events/{id}/{verb}")).await
    }

    pub async fn set_museum_event_featured(&self, id: i64, featured: bool) -> Result<ApiResponse<Ignored>, ApiError> {
        let verb = if featured { "feature" } else { "unfeature" };
        self.post_empty(&format!("{BASE}/events/{id}/{verb}")).await
    }

    pub async fn batch_museum_events(&self, ids: &[i64], action: EventBatchAction) -> Result<ApiResponse<Ignored>, ApiError> {
        self.post(&format!("{BASE}/events/batch"), &BatchBody { ids, action })
            .await
    }

    // ----- blocks -----

    pub async fn event_blocks(&self, event_id: i64) -> Result<ApiResponse<Vec<Block>>, ApiError> {
        self.get(&format!("{BASE}/events/{event_id}/blocks"), Query::new())
            .await
    }

    pub async fn create_event_block(&self, event_id: i64, req: &BlockRequest) -> Result<ApiResponse<Block>, ApiError> {
        self.post(&format!("{BASE}/events/{event_id}/blocks"), req)
            .await
    }

    pub async fn update_event_block(&self, event_id: i64, block_id: i64, req: &BlockRequest) -> Result<ApiResponse<Block>, ApiError> {
        self.put(&format!("{BASE}/events/{event_id}/blocks/{block_id}"), req)
            .await
    }

    pub async fn delete_event_block(&self, event_id: i64, block_id: i64) -> Result<ApiResponse<Ignored>, ApiError> {
        self.delete(&format!("{BASE}/events/{event_id}/blocks/{block_id}"))
            .await
    }

    pub async fn sort_event_blocks(&self, event_id: i64, ids: &[i64]) -> Result<ApiResponse<Ignored>, ApiError> {
        self.post(&format!("{BASE}/events/{event_id}/blocks/sort"), &IdsBody { ids })
            .await
    }
}

#[cfg(test)]
#[path = "museum_test.rs"]
mod tests;
