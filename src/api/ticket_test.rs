use std::sync::Arc;

use reqwest::Method;
use serde_json::json;

use crate::api::mock::{self, MockTransport};
use crate::types::ticket::{BatchReviewRequest, GrabTicketRequest, ReviewAction};

fn query(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

#[tokio::test]
async fn activity_list_is_paged() {
    let transport = Arc::new(MockTransport::new());
    transport.envelope(
        Method::GET,
        "/ticket-activities",
        200,
        json!({ "activities": [], "total": 0, "page": 2, "page_size": 10 }),
    );
    let client = mock::client(&transport);

    let page = client
        .ticket_activities(2, super::DEFAULT_PAGE_SIZE)
        .await
        .unwrap()
        .data
        .unwrap();

    assert_eq!(page.page, 2);
    assert_eq!(transport.last().query, query(&[("page", "2"), ("pageSize", "10")]));
}

#[tokio::test]
async fn grab_rejection_keeps_server_message() {
    let transport = Arc::new(MockTransport::new());
    transport.reply(
        Method::POST,
        "/tickets/grab",
        200,
        json!({ "code": 409, "message": "sold out", "data": null }),
    );
    let client = mock::client(&transport);

    let resp = client
        .grab_ticket(&GrabTicketRequest { session_id: 3, user_info: None })
        .await
        .unwrap();

    assert!(!resp.is_success());
    assert_eq!(resp.message, "sold out");
    assert_eq!(transport.last().body.unwrap(), json!({ "sessionId": 3 }));
}

#[tokio::test]
async fn admin_listing_passes_optional_status() {
    let transport = Arc::new(MockTransport::new());
    let client = mock::client(&transport);

    let _ = client.admin_ticket_activities(1, 20, Some("draft")).await;
    assert_eq!(transport.last().path, "/admin/ticket/activities");
    assert_eq!(
        transport.last().query,
        query(&[("page", "1"), ("pageSize", "20"), ("status", "draft")])
    );

    let _ = client.review_tickets(9, 1, 10, None).await;
    assert_eq!(transport.last().path, "/admin/ticket/activities/9/review");
    assert_eq!(transport.last().query, query(&[("page", "1"), ("pageSize", "10")]));
}

#[tokio::test]
async fn batch_review_and_gate_check_paths() {
    let transport = Arc::new(MockTransport::new());
    transport.envelope(
        Method::POST,
        "/admin/ticket/tickets/batch-review",
        200,
        json!({ "success_count": 2, "failed_count": 0 }),
    );
    let client = mock::client(&transport);

    let resp = client
        .batch_review_tickets(&BatchReviewRequest {
            ticket_ids: vec![1, 2],
            action: ReviewAction::Approve,
            admin_note: None,
        })
        .await
        .unwrap();
    assert_eq!(resp.data.unwrap().success_count, 2);

    let _ = client.verify_ticket("ABC123").await;
    assert_eq!(transport.last().path, "/admin/ticket/verify");
    assert_eq!(transport.last().query, query(&[("code", "ABC123")]));

    let _ = client.use_ticket("ABC123").await;
    assert_eq!(transport.last().method, Method::POST);
    assert_eq!(transport.last().body.unwrap(), json!({ "ticketCode": "ABC123" }));
}
