//! Inbox endpoints.

#![allow(clippy::missing_errors_doc)]

use super::{ApiClient, ApiError, ApiResponse, Ignored, MessageAck, Query};
use crate::types::message::{Message, MessageFilter, MessagePage, MessageType, UnreadCounts};

pub const DEFAULT_MESSAGE_PAGE_SIZE: u32 = 20;

impl ApiClient {
    /// `GET /messages?type=&isRead=&page=&size=`
    pub async fn messages(&self, filter: MessageFilter) -> Result<ApiResponse<MessagePage>, ApiError> {
        let query = Query::new()
            .with_opt("type", filter.kind.map(MessageType::as_str))
            .with_opt("isRead", filter.is_read)
            .with("page", filter.page.unwrap_or(1))
            .with("size", filter.size.unwrap_or(DEFAULT_MESSAGE_PAGE_SIZE));
        self.get("/messages", query).await
    }

    /// `GET /messages/unread-count`
    pub async fn unread_counts(&self) -> Result<ApiResponse<UnreadCounts>, ApiError> {
        self.get("/messages/unread-count", Query::new()).await
    }

    /// `GET /messages/{id}`
    pub async fn message(&self, id: i64) -> Result<ApiResponse<Message>, ApiError> {
        self.get(&format!("/messages/{id}"), Query::new()).await
    }

    /// `PUT /messages/{id}/read`
    pub async fn mark_message_read(&self, id: i64) -> Result<ApiResponse<Ignored>, ApiError> {
        self.put_query(&format!("/messages/{id}/read"), Query::new())
            .await
    }

    /// `PUT /messages/read-all`, optionally scoped to one message type.
    pub async fn mark_all_messages_read(&self, kind: Option<MessageType>) -> Result<ApiResponse<MessageAck>, ApiError> {
        let query = Query::new().with_opt("type", kind.map(MessageType::as_str));
        self.put_query("/messages/read-all", query).await
    }

    /// `DELETE /messages/{id}`
    pub async fn delete_message(&self, id: i64) -> Result<ApiResponse<Ignored>, ApiError> {
        self.delete(&format!("/messages/{id}")).await
    }
}

#[cfg(test)]
#[path = "message_test.rs"]
mod tests;
