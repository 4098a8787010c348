//! User contributions to the rating community and their review.
//!
//! A contribution proposes creating or editing one entity of the rating
//! tree. Admins approve or reject it; approval applies the change.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Entity a contribution targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionTarget {
    School,
    MajorSection,
    MinorSection,
    Category,
    RatingItem,
}

impl ContributionTarget {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::School => "school",
            Self::MajorSection => "major_section",
            Self::MinorSection => "minor_section",
            Self::Category => "category",
            Self::RatingItem => "rating_item",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionAction {
    Create,
    Update,
}

/// Review state, `0`/`1`/`2` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum ContributionStatus {
    Pending,
    Approved,
    Rejected,
}

impl TryFrom<i32> for ContributionStatus {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Pending),
            1 => Ok(Self::Approved),
            2 => Ok(Self::Rejected),
            other => Err(format!("unknown contribution status: {other}")),
        }
    }
}

impl From<ContributionStatus> for i32 {
    fn from(status: ContributionStatus) -> Self {
        match status {
            ContributionStatus::Pending => 0,
            ContributionStatus::Approved => 1,
            ContributionStatus::Rejected => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub id: i64,
    pub target_type: ContributionTarget,
    #[serde(default)]
    pub target_id: Option<i64>,
    pub action: ContributionAction,
    /// Proposed field values, shaped like the target entity.
    #[serde(default)]
    pub payload: Value,
    pub status: ContributionStatus,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub review_comment: Option<String>,
    #[serde(default)]
    pub reviewed_at: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitContributionRequest {
    pub target_type: ContributionTarget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<i64>,
    pub action: ContributionAction,
    pub payload: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// One rating item inside a batch proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposedRatingItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSubmitRatingItemsRequest {
    pub category_id: i64,
    pub items: Vec<ProposedRatingItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSubmitRatingItemsResponse {
    #[serde(default)]
    pub contribution_ids: Vec<i64>,
    #[serde(default)]
    pub submitted: u32,
}

/// One applied change in an entity's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionHistoryItem {
    pub id: i64,
    pub action: ContributionAction,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub payload: Value,
    #[serde(default)]
    pub reviewed_at: Option<String>,
    pub created_at: String,
}

/// Admin listing filter. Unset page/size default to 1 and 20.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContributionFilter {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub status: Option<ContributionStatus>,
    pub target_type: Option<ContributionTarget>,
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    Approve,
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewContributionRequest {
    pub decision: ReviewDecision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}
