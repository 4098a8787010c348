//! Contribution endpoints: submission and history under
//! `/rating-community/contributions`, review under
//! `/admin/rating-community/contributions`.

#![allow(clippy::missing_errors_doc)]

use super::{ApiClient, ApiError, ApiResponse, Query};
use crate::types::Paged;
use crate::types::contribution::{
    BatchSubmitRatingItemsRequest, BatchSubmitRatingItemsResponse, Contribution, ContributionFilter,
    ContributionHistoryItem, ContributionStatus, ContributionTarget, ReviewContributionRequest,
    SubmitContributionRequest,
};

const USER_BASE: &str = "/rating-community/contributions";
const ADMIN_BASE: &str = "/admin/rating-community/contributions";

pub const DEFAULT_CONTRIBUTION_PAGE_SIZE: u32 = 20;

fn status_code(status: ContributionStatus) -> i32 {
    status.into()
}

impl ApiClient {
    pub async fn submit_contribution(&self, req: &SubmitContributionRequest) -> Result<ApiResponse<Contribution>, ApiError> {
        self.post(USER_BASE, req).await
    }

    /// Propose several rating items for one category in a single request.
    pub async fn submit_rating_items(
        &self,
        req: &BatchSubmitRatingItemsRequest,
    ) -> Result<ApiResponse<BatchSubmitRatingItemsResponse>, ApiError> {
        self.post(&format!("{USER_BASE}/batch-rating-items"), req)
            .await
    }

    /// The caller's own contributions, newest first.
    pub async fn my_contributions(
        &self,
        page: u32,
        size: u32,
        status: Option<ContributionStatus>,
    ) -> Result<ApiResponse<Paged<Contribution>>, ApiError> {
        let query = Query::new()
            .with("page", page)
            .with("size", size)
            .with_opt("status", status.map(status_code));
        self.get(&format!("{USER_BASE}/my"), query).await
    }

    pub async fn contribution(&self, id: i64) -> Result<ApiResponse<Contribution>, ApiError> {
        self.get(&format!("{USER_BASE}/{id}"), Query::new()).await
    }

    /// Applied changes to one entity.
    pub async fn contribution_history(
        &self,
        target: ContributionTarget,
        target_id: i64,
    ) -> Result<ApiResponse<Vec<ContributionHistoryItem>>, ApiError> {
        let query = Query::new()
            .with("targetType", target.as_str())
            .with("targetId", target_id);
        self.get(&format!("{USER_BASE}/history"), query).await
    }

    // ----- review -----

    pub async fn admin_contributions(&self, filter: ContributionFilter) -> Result<ApiResponse<Paged<Contribution>>, ApiError> {
        let query = Query::new()
            .with("page", filter.page.unwrap_or(1))
            .with("size", filter.size.unwrap_or(DEFAULT_CONTRIBUTION_PAGE_SIZE))
            .with_opt("status", filter.status.map(status_code))
            .with_opt("targetType", filter.target_type.map(ContributionTarget::as_str))
            .with_opt("userId", filter.user_id);
        self.get(ADMIN_BASE, query).await
    }

    /// Number of contributions waiting for review; the payload is a bare number.
    pub async fn pending_contribution_count(&self) -> Result<ApiResponse<u64>, ApiError> {
        self.get(&format!("{ADMIN_BASE}/pending-count"), Query::new())
            .await
    }

    pub async fn admin_contribution(&self, id: i64) -> Result<ApiResponse<Contribution>, ApiError> {
        self.get(&format!("{ADMIN_BASE}/{id}"), Query::new()).await
    }

    pub async fn review_contribution(
        &self,
        id: i64,
        req: &ReviewContributionRequest,
    ) -> Result<ApiResponse<Contribution>, ApiError> {
        self.post(&format!("{ADMIN_BASE}/{id}/review"), req).await
    }
}

#[cfg(test)]
#[path = "contribution_test.rs"]
mod tests;
