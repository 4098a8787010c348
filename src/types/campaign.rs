//! Dormitory ringtone campaign shapes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageKind {
    Submission,
    Review,
    Voting,
    Result,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrentStage {
    Idle,
    Submission,
    Review,
    Voting,
    Result,
    Ended,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignStage {
    #[serde(rename = "type")]
    pub kind: StageKind,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalConfig {
    /// Votes per person per day.
    pub vote_limit: u32,
    /// Submissions per person.
    pub submission_limit: u32,
    pub require_review: bool,
    pub anonymous_voting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    pub current_stage: CurrentStage,
    #[serde(default)]
    pub stages: Vec<CampaignStage>,
    pub global_config: GlobalConfig,
    /// 1 enabled, 0 disabled.
    pub status: i32,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicInfo {
    pub id: i64,
    pub name: String,
    pub artist: String,
    pub source: String,
    pub source_id: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    /// Seconds.
    pub duration: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionUser {
    pub id: i64,
    pub nickname: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: i64,
    pub user: SubmissionUser,
    pub music: MusicInfo,
    #[serde(default)]
    pub message: Option<String>,
    pub review_status: ReviewStatus,
    #[serde(default)]
    pub review_note: Option<String>,
    pub created_at: String,
}

/// Submissions grouped by the song they propose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionGroup {
    pub music: MusicInfo,
    pub submissions: Vec<Submission>,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VotingResultItem {
    pub rank: u32,
    pub music: MusicInfo,
    pub vote_count: u32,
    pub submission_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VotingResultStats {
    pub total_votes: u32,
    pub total_voters: u32,
    pub valid_submissions: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSummary {
    pub id: i64,
    pub name: String,
    pub current_stage: CurrentStage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingResults {
    pub campaign: CampaignSummary,
    pub results: Vec<VotingResultItem>,
    pub stats: VotingResultStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignRequest {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub stages: Vec<CampaignStage>,
    pub global_config: GlobalConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCampaignRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stages: Option<Vec<CampaignStage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_config: Option<GlobalConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageOperation {
    Start,
    End,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionVerdict {
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSubmissionRequest {
    pub submission_ids: Vec<i64>,
    pub action: SubmissionVerdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
