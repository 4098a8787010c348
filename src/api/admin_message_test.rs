use std::collections::BTreeMap;
use std::sync::Arc;

use reqwest::Method;
use serde_json::json;

use crate::api::mock::{self, MockTransport};
use crate::types::message::{
    AdminMessageFilter, MessageTarget, MessageTargetType, MessageType, SendMessageRequest, TemplateRequest,
};

fn pairs(query: &[(String, String)]) -> Vec<(&str, &str)> {
    query.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
}

#[tokio::test]
async fn template_listing_filters_by_type() {
    let transport = Arc::new(MockTransport::new());
    transport.envelope(
        Method::GET,
        "/admin/messages/templates",
        200,
        json!([{
            "id": 1,
            "code": "TICKET_OK",
            "name": "Ticket granted",
            "type": "ticket",
            "titleTemplate": "Your ticket for {activity}",
            "contentTemplate": "Seat {seat}",
            "status": 1,
        }]),
    );
    let client = mock::client(&transport);

    let templates = client
        .message_templates(Some(MessageType::Ticket), None)
        .await
        .unwrap()
        .data
        .unwrap();

    assert_eq!(templates[0].code, "TICKET_OK");
    assert_eq!(templates[0].kind, MessageType::Ticket);
    assert_eq!(pairs(&transport.last().query), vec![("type", "ticket")]);
}

#[tokio::test]
async fn template_update_sends_only_named_fields() {
    let transport = Arc::new(MockTransport::new());
    let client = mock::client(&transport);

    let req = TemplateRequest { status: Some(0), ..TemplateRequest::default() };
    let _ = client.update_message_template(1, &req).await;

    assert_eq!(transport.last().path, "/admin/messages/templates/1");
    assert_eq!(transport.last().body.unwrap(), json!({ "status": 0 }));
}

#[tokio::test]
async fn listing_defaults_page_and_size_after_filters() {
    let transport = Arc::new(MockTransport::new());
    transport.envelope(
        Method::GET,
        "/admin/messages",
        200,
        json!({
            "records": [{
                "id": 4,
                "type": "system",
                "title": "Maintenance",
                "content": "Tonight",
                "targetType": "",
                "isRead": false,
                "createdAt": "2024-03-01 10:00:00",
                "userId": 7,
                "username": "lin",
            }],
            "total": 1,
            "size": 20,
            "current": 1,
            "pages": 1,
        }),
    );
    let client = mock::client(&transport);

    let filter = AdminMessageFilter { user_id: Some(7), is_read: Some(false), ..AdminMessageFilter::default() };
    let page = client.admin_messages(&filter).await.unwrap().data.unwrap();

    assert_eq!(page.records[0].user_id, 7);
    assert_eq!(page.records[0].message.target_type, MessageTargetType::None);
    assert_eq!(
        pairs(&transport.last().query),
        vec![("userId", "7"), ("isRead", "false"), ("page", "1"), ("size", "20")]
    );
}

#[tokio::test]
async fn direct_send_flattens_the_target() {
    let transport = Arc::new(MockTransport::new());
    transport.envelope(Method::POST, "/admin/messages/send", 200, json!("sent to 2 users"));
    let client = mock::client(&transport);

    let req = SendMessageRequest {
        user_ids: vec![7, 8],
        kind: MessageType::Ticket,
        title: "Seat changed".into(),
        content: "Row 3".into(),
        target: Some(MessageTarget { target_type: MessageTargetType::Activity, target_id: 12 }),
    };
    let sent = client.send_message(&req).await.unwrap().data.unwrap();

    assert_eq!(sent, "sent to 2 users");
    assert_eq!(
        transport.last().body.unwrap(),
        json!({
            "userIds": [7, 8],
            "type": "ticket",
            "title": "Seat changed",
            "content": "Row 3",
            "targetType": "activity",
            "targetId": 12,
        })
    );
}

#[tokio::test]
async fn template_send_puts_variables_in_body_and_ids_in_query() {
    let transport = Arc::new(MockTransport::new());
    let client = mock::client(&transport);

    let variables = BTreeMap::from([("activity".to_owned(), "Gala".to_owned())]);
    let _ = client
        .send_message_by_template("TICKET_OK", &[7, 8, 9], &variables, None)
        .await;

    let request = transport.last();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/admin/messages/send-by-template");
    assert_eq!(pairs(&request.query), vec![("templateCode", "TICKET_OK"), ("userIds", "7,8,9")]);
    assert_eq!(request.body.unwrap(), json!({ "activity": "Gala" }));
}

#[tokio::test]
async fn batch_delete_sends_bare_id_array() {
    let transport = Arc::new(MockTransport::new());
    let client = mock::client(&transport);

    let _ = client.admin_delete_messages(&[4, 5]).await;

    assert_eq!(transport.last().method, Method::DELETE);
    assert_eq!(transport.last().body.unwrap(), json!([4, 5]));
}

#[tokio::test]
async fn stats_tolerate_missing_counters() {
    let transport = Arc::new(MockTransport::new());
    transport.envelope(Method::GET, "/admin/messages/stats", 200, json!({ "totalCount": 12, "byType": { "ticket": 5 } }));
    let client = mock::client(&transport);

    let stats = client.message_stats().await.unwrap().data.unwrap();

    assert_eq!(stats.total_count, 12);
    assert_eq!(stats.unread_count, 0);
    assert_eq!(stats.by_type.get("ticket"), Some(&5));
}
