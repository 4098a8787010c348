//! Event ticketing endpoints. Admin routes live under `/admin/ticket`.
//!
//! Grabbing is a single POST; seat accounting and per-user limits are
//! enforced server-side and surface here only as envelope codes.

#![allow(clippy::missing_errors_doc)]

use serde::Serialize;

use super::{ApiClient, ApiError, ApiResponse, MessageAck, Query};
use crate::types::ticket::{
    ActivitySession, ActivityStats, BatchReviewRequest, BatchReviewResponse, CreateActivityRequest,
    CreateSessionRequest, GrabTicketRequest, GrabTicketResponse, MyTickets, ReviewTicketPage, ReviewTicketRequest,
    TicketActivityDetail, TicketActivityPage, UpdateActivityRequest, UpdateSessionRequest, UseTicketResponse,
    VerifiedTicket,
};

const ADMIN_BASE: &str = "/admin/ticket";

pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UseTicketBody<'a> {
    ticket_code: &'a str,
}

impl ApiClient {
    // ----- public -----

    /// `GET /ticket-activities?page=&pageSize=`
    pub async fn ticket_activities(&self, page: u32, page_size: u32) -> Result<ApiResponse<TicketActivityPage>, ApiError> {
        let query = Query::new().with("page", page).with("pageSize", page_size);
        self.get("/ticket-activities", query).await
    }

    /// `GET /ticket-activities/{id}`
    pub async fn ticket_activity(&self, id: i64) -> Result<ApiResponse<TicketActivityDetail>, ApiError> {
        self.get(&format!("/ticket-activities/{id}"), Query::new())
            .await
    }

    /// `POST /tickets/grab`
    pub async fn grab_ticket(&self, req: &GrabTicketRequest) -> Result<ApiResponse<GrabTicketResponse>, ApiError> {
        self.post("/tickets/grab", req).await
    }

    /// `GET /tickets/my`
    pub async fn my_tickets(&self) -> Result<ApiResponse<MyTickets>, ApiError> {
        self.get("/tickets/my", Query::new()).await
    }

    /// `GET /tickets/my/activity/{activity_id}`
    pub async fn my_tickets_for_activity(&self, activity_id: i64) -> Result<ApiResponse<MyTickets>, ApiError> {
        self.get(&format!("/tickets/my/activity/{activity_id}"), Query::new())
            .await
    }

    // ----- admin: activities -----

    pub async fn admin_ticket_activities(
        &self,
        page: u32,
        page_size: u32,
        status: Option<&str>,
    ) -> Result<ApiResponse<TicketActivityPage>, ApiError> {
        let query = Query::new()
            .with("page", page)
            .with("pageSize", page_size)
            .with_opt("status", status);
        self.get(&format!("{ADMIN_BASE}/activities"), query).await
    }

    pub async fn admin_ticket_activity(&self, id: i64) -> Result<ApiResponse<TicketActivityDetail>, ApiError> {
        self.get(&format!("{ADMIN_BASE}/activities/{id}"), Query::new())
            .await
    }

    pub async fn create_ticket_activity(
        &self,
        req: &CreateActivityRequest,
    ) -> Result<ApiResponse<TicketActivityDetail>, ApiError> {
        self.post(&format!("{ADMIN_BASE}/activities"), req).await
    }

    pub async fn update_ticket_activity(
        &self,
        id: i64,
        req: &UpdateActivityRequest,
    ) -> Result<ApiResponse<TicketActivityDetail>, ApiError> {
        self.put(&format!("{ADMIN_BASE}/activities/{id}"), req).await
    }

    pub async fn delete_ticket_activity(&self, id: i64) -> Result<ApiResponse<MessageAck>, ApiError> {
        self.delete(&format!("{ADMIN_BASE}/activities/{id}")).await
    }

    pub async fn ticket_activity_stats(&self, id: i64) -> Result<ApiResponse<ActivityStats>, ApiError> {
        self.get(&format!("{ADMIN_BASE}/activities/{id}/stats"), Query::new())
            .await
    }

    // ----- admin: sessions -----

    pub async fn create_activity_session(
        &self,
        activity_id: i64,
        req: &CreateSessionRequest,
    ) -> Result<ApiResponse<ActivitySession>, ApiError> {
        self.post(&format!("{ADMIN_BASE}/activities/{activity_id}/sessions"), req)
            .await
    }

    pub async fn update_activity_session(
        &self,
        id: i64,
        req: &UpdateSessionRequest,
    ) -> Result<ApiResponse<ActivitySession>, ApiError> {
        self.put(&format!("{ADMIN_BASE}/sessions/{id}"), req).await
    }

    pub async fn delete_activity_session(&self, id: i64) -> Result<ApiResponse<MessageAck>, ApiError> {
        self.delete(&format!("{ADMIN_BASE}/sessions/{id}")).await
    }

    // ----- admin: review -----

    pub async fn review_tickets(
        &self,
        activity_id: i64,
        page: u32,
        page_size: u32,
        status: Option<&str>,
    ) -> Result<ApiResponse<ReviewTicketPage>, ApiError> {
        let query = Query::new()
            .with("page", page)
            .with("pageSize", page_size)
            .with_opt("status", status);
        self.get(&format!("{ADMIN_BASE}/activities/{activity_id}/review"), query)
            .await
    }

    pub async fn review_ticket(&self, ticket_id: i64, req: &ReviewTicketRequest) -> Result<ApiResponse<MessageAck>, ApiError> {
        self.post(&format!("{ADMIN_BASE}/tickets/{ticket_id}/review"), req)
            .await
    }

    pub async fn batch_review_tickets(&self, req: &BatchReviewRequest) -> Result<ApiResponse<BatchReviewResponse>, ApiError> {
        self.post(&format!("{ADMIN_BASE}/tickets/batch-review"), req)
            .await
    }

    // ----- admin: gate check -----

    /// `GET /admin/ticket/verify?code=`
    pub async fn verify_ticket(&self, code: &str) -> Result<ApiResponse<VerifiedTicket>, ApiError> {
        self.get(&format!("{ADMIN_BASE}/verify"), Query::new().with("code", code))
            .await
    }

    /// `POST /admin/ticket/verify/use`: marks the ticket used.
    pub async fn use_ticket(&self, ticket_code: &str) -> Result<ApiResponse<UseTicketResponse>, ApiError> {
        self.post(&format!("{ADMIN_BASE}/verify/use"), &UseTicketBody { ticket_code })
            .await
    }
}

#[cfg(test)]
#[path = "ticket_test.rs"]
mod tests;
