//! Inbox message shapes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Ticket,
    Rating,
    Contribution,
    System,
}

impl MessageType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ticket => "ticket",
            Self::Rating => "rating",
            Self::Contribution => "contribution",
            Self::System => "system",
        }
    }
}

impl std::str::FromStr for MessageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ticket" => Ok(Self::Ticket),
            "rating" => Ok(Self::Rating),
            "contribution" => Ok(Self::Contribution),
            "system" => Ok(Self::System),
            other => Err(format!("unknown message type: {other}")),
        }
    }
}

/// What a message links to. The server sends `""` for no target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageTargetType {
    Ticket,
    Activity,
    Comment,
    Contribution,
    #[serde(rename = "")]
    None,
}

impl MessageTargetType {
    /// Wire name; `""` for [`MessageTargetType::None`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ticket => "ticket",
            Self::Activity => "activity",
            Self::Comment => "comment",
            Self::Contribution => "contribution",
            Self::None => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: MessageType,
    pub title: String,
    pub content: String,
    pub target_type: MessageTargetType,
    #[serde(default)]
    pub target_id: Option<i64>,
    pub is_read: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePage {
    pub records: Vec<Message>,
    pub total: u64,
    pub size: u32,
    pub current: u32,
    pub pages: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnreadCounts {
    pub total: u32,
    pub ticket: u32,
    pub rating: u32,
    pub contribution: u32,
    pub system: u32,
}

/// Inbox filter. Unset page/size default to 1 and 20.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageFilter {
    pub kind: Option<MessageType>,
    pub is_read: Option<bool>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

// =============================================================================
// ADMIN
// =============================================================================

/// Message as seen by an admin: the inbox entry plus its recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminMessage {
    #[serde(flatten)]
    pub message: Message,
    pub user_id: i64,
    #[serde(default)]
    pub username: Option<String>,
}

/// Reusable message text with `{name}` placeholders, addressed by `code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageTemplate {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: MessageType,
    pub title_template: String,
    pub content_template: String,
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Create/update body; unset fields are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<MessageType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

/// Where a sent message links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageTarget {
    pub target_type: MessageTargetType,
    pub target_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub user_ids: Vec<i64>,
    #[serde(rename = "type")]
    pub kind: MessageType,
    pub title: String,
    pub content: String,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub target: Option<MessageTarget>,
}

/// Message sent to every user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastMessageRequest {
    #[serde(rename = "type")]
    pub kind: MessageType,
    pub title: String,
    pub content: String,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub target: Option<MessageTarget>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageStats {
    pub total_count: u64,
    pub unread_count: u64,
    pub today_count: u64,
    /// Message count per type name.
    pub by_type: std::collections::BTreeMap<String, u64>,
}

/// Admin listing filter. Unset page/size default to 1 and 20.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminMessageFilter {
    pub user_id: Option<i64>,
    pub kind: Option<MessageType>,
    pub is_read: Option<bool>,
    pub keyword: Option<String>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}
