//! Event ticketing shapes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Waiting,
    Active,
    Ended,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Draft,
    Published,
    Active,
    Ended,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Pending,
    Confirmed,
    Used,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtraFieldKind {
    Text,
    Number,
    Email,
    Phone,
    Textarea,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraInfoField {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: ExtraFieldKind,
    pub required: bool,
}

/// Per-activity rules. Wire names are snake case here, unlike the rest of the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityConfig {
    pub require_campus_binding: bool,
    pub require_extra_info: bool,
    #[serde(default)]
    pub extra_info_fields: Vec<ExtraInfoField>,
    pub require_approval: bool,
    pub max_tickets_per_user: u32,
    pub auto_confirm_tickets: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySession {
    pub id: i64,
    pub activity_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_time: String,
    pub end_time: String,
    pub total_tickets: u32,
    pub available_tickets: u32,
    pub status: SessionStatus,
    pub is_active: bool,
    pub can_grab: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketActivityListItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub config: Option<ActivityConfig>,
    pub status: ActivityStatus,
    pub session_count: u32,
    pub total_tickets: u32,
    pub sold_tickets: u32,
    pub created_by: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketActivityDetail {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub config: ActivityConfig,
    pub status: ActivityStatus,
    pub session_count: u32,
    #[serde(default)]
    pub total_tickets: Option<u32>,
    #[serde(default)]
    pub sold_tickets: Option<u32>,
    #[serde(default)]
    pub sessions: Vec<ActivitySession>,
    #[serde(default)]
    pub created_by: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

/// Paged activity list; used by both the public and the admin listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketActivityPage {
    pub activities: Vec<TicketActivityListItem>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: i64,
    pub activity_id: i64,
    pub activity_name: String,
    pub session_id: i64,
    pub session_name: String,
    pub ticket_code: String,
    pub status: TicketStatus,
    #[serde(default)]
    pub user_info: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub admin_note: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub confirmed_by: Option<i64>,
    #[serde(default)]
    pub confirmed_at: Option<String>,
    #[serde(default)]
    pub used_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MyTickets {
    pub tickets: Vec<Ticket>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrabTicketRequest {
    pub session_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_info: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrabTicketResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub ticket_code: Option<String>,
    #[serde(default)]
    pub ticket_id: Option<i64>,
}

// =============================================================================
// ADMIN
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivityRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<ActivityConfig>,
}

/// Partial activity update. `config` is sent as a partial JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateActivityRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ActivityStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_time: String,
    pub end_time: String,
    pub total_tickets: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSessionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tickets: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SessionStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminTicket {
    #[serde(flatten)]
    pub ticket: Ticket,
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub nickname: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityStats {
    pub activity_id: i64,
    pub total_sessions: u32,
    pub total_tickets: u32,
    pub grabbed_tickets: u32,
    pub pending_tickets: u32,
    pub confirmed_tickets: u32,
    pub used_tickets: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewTicketPage {
    pub tickets: Vec<AdminTicket>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewAction {
    Approve,
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewTicketRequest {
    pub action: ReviewAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReviewRequest {
    pub ticket_ids: Vec<i64>,
    pub action: ReviewAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReviewResponse {
    pub success_count: u32,
    pub failed_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedTicket {
    pub id: i64,
    pub activity_id: i64,
    pub activity_name: String,
    pub session_id: i64,
    pub session_name: String,
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub nickname: Option<String>,
    pub ticket_code: String,
    pub status: TicketStatus,
    #[serde(default)]
    pub user_info: Option<BTreeMap<String, String>>,
    pub created_at: String,
    #[serde(default)]
    pub confirmed_at: Option<String>,
    #[serde(default)]
    pub used_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseTicketResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub ticket_id: Option<i64>,
    #[serde(default)]
    pub activity_name: Option<String>,
    #[serde(default)]
    pub session_name: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub used_at: Option<String>,
}
