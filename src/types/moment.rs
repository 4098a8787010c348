//! User-posted museum moments and their moderation.

use serde::{Deserialize, Serialize};

use super::museum::SortOrder;

/// `0` pending, `1` published, `2` rejected, `3` taken down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum MomentStatus {
    Pending,
    Published,
    Rejected,
    TakenDown,
}

impl TryFrom<i32> for MomentStatus {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Pending),
            1 => Ok(Self::Published),
            2 => Ok(Self::Rejected),
            3 => Ok(Self::TakenDown),
            other => Err(format!("unknown moment status: {other}")),
        }
    }
}

impl From<MomentStatus> for i32 {
    fn from(status: MomentStatus) -> Self {
        match status {
            MomentStatus::Pending => 0,
            MomentStatus::Published => 1,
            MomentStatus::Rejected => 2,
            MomentStatus::TakenDown => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Moment {
    pub id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub nickname: String,
    pub content: String,
    pub moment_time: String,
    #[serde(default)]
    pub event_id: Option<i64>,
    #[serde(default)]
    pub event_title: Option<String>,
    #[serde(default)]
    pub is_anonymous: bool,
    pub status: MomentStatus,
    #[serde(default)]
    pub like_count: u32,
    #[serde(default)]
    pub comment_count: u32,
    #[serde(default)]
    pub images: Vec<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MomentSort {
    MomentTime,
    CreatedAt,
    LikeCount,
}

impl MomentSort {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MomentTime => "momentTime",
            Self::CreatedAt => "createdAt",
            Self::LikeCount => "likeCount",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MomentFilter {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub status: Option<MomentStatus>,
    pub event_id: Option<i64>,
    pub user_id: Option<i64>,
    pub keyword: Option<String>,
    pub is_anonymous: Option<bool>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub sort: Option<(MomentSort, SortOrder)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MomentBatchAction {
    Approve,
    Reject,
    Takedown,
    Delete,
}
