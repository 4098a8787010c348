//! Message administration: templates, per-user and broadcast sending,
//! listing and statistics under `/admin/messages`.

#![allow(clippy::missing_errors_doc)]

use std::collections::BTreeMap;

use super::message::DEFAULT_MESSAGE_PAGE_SIZE;
use super::{ApiClient, ApiError, ApiResponse, Ignored, Query};
use crate::types::Paged;
use crate::types::message::{
    AdminMessage, AdminMessageFilter, BroadcastMessageRequest, MessageStats, MessageTarget, MessageTemplate,
    MessageType, SendMessageRequest, TemplateRequest,
};

const BASE: &str = "/admin/messages";

impl ApiClient {
    // ----- templates -----

    pub async fn message_templates(
        &self,
        kind: Option<MessageType>,
        status: Option<i32>,
    ) -> Result<ApiResponse<Vec<MessageTemplate>>, ApiError> {
        let query = Query::new()
            .with_opt("type", kind.map(MessageType::as_str))
            .with_opt("status", status);
        self.get(&format!("{BASE}/templates"), query).await
    }

    pub async fn message_template(&self, id: i64) -> Result<ApiResponse<MessageTemplate>, ApiError> {
        self.get(&format!("{BASE}/templates/{id}"), Query::new())
            .await
    }

    pub async fn message_template_by_code(&self, code: &str) -> Result<ApiResponse<MessageTemplate>, ApiError> {
        self.get(&format!("{BASE}/templates/code/{code}"), Query::new())
            .await
    }

    pub async fn create_message_template(&self, req: &TemplateRequest) -> Result<ApiResponse<MessageTemplate>, ApiError> {
        self.post(&format!("{BASE}/templates"), req).await
    }

    pub async fn update_message_template(&self, id: i64, req: &TemplateRequest) -> Result<ApiResponse<MessageTemplate>, ApiError> {
        self.put(&format!("{BASE}/templates/{id}"), req).await
    }

    pub async fn delete_message_template(&self, id: i64) -> Result<ApiResponse<Ignored>, ApiError> {
        self.delete(&format!("{BASE}/templates/{id}")).await
    }

    // ----- messages -----

    /// `GET /admin/messages`; page and size default to 1 and 20.
    pub async fn admin_messages(&self, filter: &AdminMessageFilter) -> Result<ApiResponse<Paged<AdminMessage>>, ApiError> {
        let query = Query::new()
            .with_opt("userId", filter.user_id)
            .with_opt("type", filter.kind.map(MessageType::as_str))
            .with_opt("isRead", filter.is_read)
            .with_opt("keyword", filter.keyword.as_deref())
            .with("page", filter.page.unwrap_or(1))
            .with("size", filter.size.unwrap_or(DEFAULT_MESSAGE_PAGE_SIZE));
        self.get(BASE, query).await
    }

    pub async fn admin_message(&self, id: i64) -> Result<ApiResponse<AdminMessage>, ApiError> {
        self.get(&format!("{BASE}/{id}"), Query::new()).await
    }

    /// Returns the server's confirmation text.
    pub async fn send_message(&self, req: &SendMessageRequest) -> Result<ApiResponse<String>, ApiError> {
        self.post(&format!("{BASE}/send"), req).await
    }

    pub async fn broadcast_message(&self, req: &BroadcastMessageRequest) -> Result<ApiResponse<String>, ApiError> {
        self.post(&format!("{BASE}/broadcast"), req).await
    }

    /// Render template `code` with `variables` for each of `user_ids`.
    /// The variables travel as the body, everything else in the query.
    pub async fn send_message_by_template(
        &self,
        code: &str,
        user_ids: &[i64],
        variables: &BTreeMap<String, String>,
        target: Option<MessageTarget>,
    ) -> Result<ApiResponse<String>, ApiError> {
        let ids = user_ids
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let query = Query::new()
            .with("templateCode", code)
            .with("userIds", ids)
            .with_opt("targetType", target.map(|t| t.target_type.as_str()))
            .with_opt("targetId", target.map(|t| t.target_id));
        self.post_query(&format!("{BASE}/send-by-template"), query, variables)
            .await
    }

    pub async fn admin_delete_message(&self, id: i64) -> Result<ApiResponse<Ignored>, ApiError> {
        self.delete(&format!("{BASE}/{id}")).await
    }

    /// The body is the bare id array.
    pub async fn admin_delete_messages(&self, ids: &[i64]) -> Result<ApiResponse<String>, ApiError> {
        self.delete_with_body(&format!("{BASE}/batch"), ids).await
    }

    pub async fn message_stats(&self) -> Result<ApiResponse<MessageStats>, ApiError> {
        self.get(&format!("{BASE}/stats"), Query::new()).await
    }
}

#[cfg(test)]
#[path = "admin_message_test.rs"]
mod tests;
