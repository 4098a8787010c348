//! Ringtone campaign endpoints, including moderation and vote results.

#![allow(clippy::missing_errors_doc)]

use serde::Serialize;

use super::{ApiClient, ApiError, ApiResponse, Ignored, Query};
use crate::types::campaign::{
    Campaign, CreateCampaignRequest, ReviewSubmissionRequest, StageOperation, SubmissionGroup,
    UpdateCampaignRequest, VotingResults,
};

#[derive(Serialize)]
struct StageOperationBody {
    operation: StageOperation,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionIdsBody<'a> {
    submission_ids: &'a [i64],
}

impl ApiClient {
    /// `GET /campaigns`
    pub async fn campaigns(&self) -> Result<ApiResponse<Vec<Campaign>>, ApiError> {
        self.get("/campaigns", Query::new()).await
    }

    /// `GET /campaigns/{id}`
    pub async fn campaign(&self, id: i64) -> Result<ApiResponse<Campaign>, ApiError> {
        self.get(&format!("/campaigns/{id}"), Query::new()).await
    }

    pub async fn admin_campaigns(&self) -> Result<ApiResponse<Vec<Campaign>>, ApiError> {
        self.get("/admin/campaigns", Query::new()).await
    }

    pub async fn admin_campaign(&self, id: i64) -> Result<ApiResponse<Campaign>, ApiError> {
        self.get(&format!("/admin/campaigns/{id}"), Query::new())
            .await
    }

    pub async fn create_campaign(&self, req: &CreateCampaignRequest) -> Result<ApiResponse<Campaign>, ApiError> {
        self.post("/admin/campaigns", req).await
    }

    pub async fn update_campaign(&self, id: i64, req: &UpdateCampaignRequest) -> Result<ApiResponse<Campaign>, ApiError> {
        self.put(&format!("/admin/campaigns/{id}"), req).await
    }

    pub async fn delete_campaign(&self, id: i64) -> Result<ApiResponse<Ignored>, ApiError> {
        self.delete(&format!("/admin/campaigns/{id}")).await
    }

    /// Ask the server to start, end or advance the campaign stage. The
    /// transition rules are the server's; the updated campaign comes back.
    pub async fn campaign_stage_operation(
        &self,
        id: i64,
        operation: StageOperation,
    ) -> Result<ApiResponse<Campaign>, ApiError> {
        self.post(&format!("/admin/campaigns/{id}/stage-operation"), &StageOperationBody { operation })
            .await
    }

    /// Pending submissions grouped by song.
    pub async fn review_submissions(&self, campaign_id: i64) -> Result<ApiResponse<Vec<SubmissionGroup>>, ApiError> {
        self.get(&format!("/admin/review/campaigns/{campaign_id}/submissions"), Query::new())
            .await
    }

    pub async fn moderate_submissions(&self, req: &ReviewSubmissionRequest) -> Result<ApiResponse<Ignored>, ApiError> {
        self.post("/admin/review/submissions", req).await
    }

    pub async fn delete_submissions(&self, submission_ids: &[i64]) -> Result<ApiResponse<Ignored>, ApiError> {
        self.delete_with_body("/admin/review/submissions", &SubmissionIdsBody { submission_ids })
            .await
    }

    pub async fn voting_results(&self, campaign_id: i64) -> Result<ApiResponse<VotingResults>, ApiError> {
        self.get(&format!("/admin/voting/campaigns/{campaign_id}/results"), Query::new())
            .await
    }
}

#[cfg(test)]
#[path = "campaign_test.rs"]
mod tests;
