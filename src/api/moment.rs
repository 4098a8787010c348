//! Moment moderation under `/admin/museum/moments`.

#![allow(clippy::missing_errors_doc)]

use serde::Serialize;

use super::{ApiClient, ApiError, ApiResponse, Ignored, Query};
use crate::types::Paged;
use crate::types::moment::{Moment, MomentBatchAction, MomentFilter};

const BASE: &str = "/admin/museum/moments";

pub const DEFAULT_MOMENT_PAGE_SIZE: u32 = 20;

#[derive(Serialize)]
struct ReasonBody<'a> {
    reason: &'a str,
}

#[derive(Serialize)]
struct BatchBody<'a> {
    ids: &'a [i64],
    action: MomentBatchAction,
}

impl ApiClient {
    pub async fn moments(&self, filter: &MomentFilter) -> Result<ApiResponse<Paged<Moment>>, ApiError> {
        let query = Query::new()
            .with("page", filter.page.unwrap_or(1))
            .with("size", filter.size.unwrap_or(DEFAULT_MOMENT_PAGE_SIZE))
            .with_opt("status", filter.status.map(i32::from))
            .with_opt("eventId", filter.event_id)
            .with_opt("userId", filter.user_id)
            .with_opt("keyword", filter.keyword.as_deref())
            .with_opt("isAnonymous", filter.is_anonymous)
            .with_opt("startTime", filter.start_time.as_deref())
            .with_opt("endTime", filter.end_time.as_deref())
            .with_opt("sortBy", filter.sort.map(|(by, _)| by.as_str()))
            .with_opt("sortOrder", filter.sort.map(|(_, order)| order.as_str()));
        self.get(BASE, query).await
    }

    pub async fn moment(&self, id: i64) -> Result<ApiResponse<Moment>, ApiError> {
        self.get(&format!("{BASE}/{id}"), Query::new()).await
    }

    pub async fn approve_moment(&self, id: i64) -> Result<ApiResponse<Ignored>, ApiError> {
        self.post_empty(&format!("{BASE}/{id}/approve")).await
    }

    /// Reject a pending moment; the reason is shown to its author.
    pub async fn reject_moment(&self, id: i64, reason: &str) -> Result<ApiResponse<Ignored>, ApiError> {
        self.post(&format!("{BASE}/{id}/reject"), &ReasonBody { reason })
            .await
    }

    /// Remove a published moment from view.
    pub async fn take_down_moment(&self, id: i64, reason: &str) -> Result<ApiResponse<Ignored>, ApiError> {
        self.post(&format!("{BASE}/{id}/takedown"), &ReasonBody { reason })
            .await
    }

    pub async fn delete_moment(&self, id: i64) -> Result<ApiResponse<Ignored>, ApiError> {
        self.delete(&format!("{BASE}/{id}")).await
    }

    pub async fn batch_moments(&self, ids: &[i64], action: MomentBatchAction) -> Result<ApiResponse<Ignored>, ApiError> {
        self.post(&format!("{BASE}/batch"), &BatchBody { ids, action })
            .await
    }
}

#[cfg(test)]
#[path = "moment_test.rs"]
mod tests;
