use std::sync::Arc;

use reqwest::Method;
use serde_json::json;

use crate::api::mock::{self, MockTransport};
use crate::types::contribution::{
    ContributionAction, ContributionFilter, ContributionStatus, ContributionTarget, ReviewContributionRequest,
    ReviewDecision, SubmitContributionRequest,
};

fn pairs(query: &[(String, String)]) -> Vec<(&str, &str)> {
    query.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
}

fn contribution_json(status: i32) -> serde_json::Value {
    json!({
        "id": 9,
        "targetType": "rating_item",
        "targetId": 42,
        "action": "update",
        "payload": { "name": "North Canteen" },
        "status": status,
        "createdAt": "2024-03-01 10:00:00",
    })
}

#[tokio::test]
async fn submission_names_target_and_action() {
    let transport = Arc::new(MockTransport::new());
    transport.envelope(Method::POST, "/rating-community/contributions", 200, contribution_json(0));
    let client = mock::client(&transport);

    let req = SubmitContributionRequest {
        target_type: ContributionTarget::RatingItem,
        target_id: Some(42),
        action: ContributionAction::Update,
        payload: json!({ "name": "North Canteen" }),
        reason: None,
    };
    let created = client.submit_contribution(&req).await.unwrap().data.unwrap();

    assert_eq!(created.status, ContributionStatus::Pending);
    assert_eq!(
        transport.last().body.unwrap(),
        json!({
            "targetType": "rating_item",
            "targetId": 42,
            "action": "update",
            "payload": { "name": "North Canteen" },
        })
    );
}

#[tokio::test]
async fn history_queries_by_target() {
    let transport = Arc::new(MockTransport::new());
    transport.envelope(Method::GET, "/rating-community/contributions/history", 200, json!([]));
    let client = mock::client(&transport);

    let history = client
        .contribution_history(ContributionTarget::MajorSection, 3)
        .await
        .unwrap()
        .data
        .unwrap();

    assert!(history.is_empty());
    assert_eq!(pairs(&transport.last().query), vec![("targetType", "major_section"), ("targetId", "3")]);
}

#[tokio::test]
async fn my_contributions_filter_by_numeric_status() {
    let transport = Arc::new(MockTransport::new());
    transport.envelope(
        Method::GET,
        "/rating-community/contributions/my",
        200,
        json!({ "records": [contribution_json(2)], "total": 1, "current": 1, "size": 10, "pages": 1 }),
    );
    let client = mock::client(&transport);

    let page = client
        .my_contributions(1, 10, Some(ContributionStatus::Rejected))
        .await
        .unwrap()
        .data
        .unwrap();

    assert_eq!(page.records[0].status, ContributionStatus::Rejected);
    assert_eq!(pairs(&transport.last().query), vec![("page", "1"), ("size", "10"), ("status", "2")]);
}

#[tokio::test]
async fn unknown_status_code_is_a_decode_error() {
    let transport = Arc::new(MockTransport::new());
    transport.envelope(Method::GET, "/rating-community/contributions/9", 200, contribution_json(7));
    let client = mock::client(&transport);

    assert!(client.contribution(9).await.is_err());
}

#[tokio::test]
async fn admin_listing_defaults_paging() {
    let transport = Arc::new(MockTransport::new());
    let client = mock::client(&transport);

    let filter = ContributionFilter { status: Some(ContributionStatus::Pending), ..ContributionFilter::default() };
    let _ = client.admin_contributions(filter).await;

    let request = transport.last();
    assert_eq!(request.path, "/admin/rating-community/contributions");
    assert_eq!(pairs(&request.query), vec![("page", "1"), ("size", "20"), ("status", "0")]);
}

#[tokio::test]
async fn pending_count_is_a_bare_number() {
    let transport = Arc::new(MockTransport::new());
    transport.envelope(Method::GET, "/admin/rating-community/contributions/pending-count", 200, json!(5));
    let client = mock::client(&transport);

    assert_eq!(client.pending_contribution_count().await.unwrap().data, Some(5));
}

#[tokio::test]
async fn review_posts_decision() {
    let transport = Arc::new(MockTransport::new());
    transport.envelope(
        Method::POST,
        "/admin/rating-community/contributions/9/review",
        200,
        contribution_json(1),
    );
    let client = mock::client(&transport);

    let req = ReviewContributionRequest { decision: ReviewDecision::Approve, comment: None };
    let reviewed = client.review_contribution(9, &req).await.unwrap().data.unwrap();

    assert_eq!(reviewed.status, ContributionStatus::Approved);
    assert_eq!(transport.last().body.unwrap(), json!({ "decision": "approve" }));
}
