use std::sync::Arc;

use reqwest::Method;
use serde_json::json;

use crate::api::ApiError;
use crate::api::mock::{self, MockTransport};
use crate::types::museum::{
    Block, BlockContent, BlockRequest, BlockType, EventBatchAction, EventFilter, EventRequest, EventSort, EventStatus,
    SortOrder, TimelineEntry,
};

fn pairs(query: &[(String, String)]) -> Vec<(&str, &str)> {
    query.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
}

fn event_json(status: i32) -> serde_json::Value {
    json!({
        "id": 3,
        "title": "Founders Day",
        "startDate": "2024-05-01",
        "status": status,
        "isFeatured": true,
        "tags": [{ "id": 1, "name": "history", "color": "#aa0000" }],
        "publishedAt": null,
        "createdAt": "2024-04-01 09:00:00",
    })
}

#[tokio::test]
async fn event_listing_decodes_list_shaped_page() {
    let transport = Arc::new(MockTransport::new());
    transport.envelope(
        Method::GET,
        "/admin/museum/events",
        200,
        json!({ "total": 1, "page": 2, "size": 10, "pages": 1, "list": [event_json(1)] }),
    );
    let client = mock::client(&transport);

    let filter = EventFilter {
        page: Some(2),
        size: Some(10),
        status: Some(EventStatus::Published),
        sort: Some((EventSort::StartDate, SortOrder::Desc)),
        ..EventFilter::default()
    };
    let page = client.museum_events(&filter).await.unwrap().data.unwrap();

    assert_eq!(page.current, 2);
    assert_eq!(page.records[0].status, EventStatus::Published);
    assert_eq!(page.records[0].tags[0].name, "history");
    assert_eq!(
        pairs(&transport.last().query),
        vec![("page", "2"), ("size", "10"), ("status", "1"), ("sortBy", "startDate"), ("sortOrder", "desc")]
    );
}

#[tokio::test]
async fn event_detail_decodes_blocks_by_type() {
    let transport = Arc::new(MockTransport::new());
    let mut detail = event_json(0);
    detail["description"] = json!("The first campus gathering");
    detail["blocks"] = json!([
        { "id": 1, "blockType": "text", "title": null, "content": { "text": "Opening" }, "sortOrder": 0 },
        {
            "id": 2,
            "blockType": "timeline",
            "title": "Schedule",
            "content": { "items": [{ "time": "09:00", "title": "Gates open" }] },
            "sortOrder": 1,
        },
    ]);
    transport.envelope(Method::GET, "/admin/museum/events/3", 200, detail);
    let client = mock::client(&transport);

    let event = client.museum_event(3).await.unwrap().data.unwrap();

    assert_eq!(event.event.status, EventStatus::Draft);
    assert_eq!(event.blocks[0].typed_content().unwrap(), BlockContent::Text { text: "Opening".into() });
    let BlockContent::Timeline { items } = event.blocks[1].typed_content().unwrap() else {
        panic!("expected timeline content");
    };
    assert_eq!(items[0].title, "Gates open");
}

#[test]
fn mismatched_block_content_is_an_error() {
    let block: Block = serde_json::from_value(json!({
        "id": 1,
        "blockType": "video",
        "content": { "text": "not a video" },
    }))
    .unwrap();

    assert!(block.typed_content().is_err());
}

#[tokio::test]
async fn event_creation_requires_title_and_start_date() {
    let transport = Arc::new(MockTransport::new());
    let client = mock::client(&transport);

    let untitled = EventRequest { start_date: Some("2024-05-01".into()), ..EventRequest::default() };
    assert!(matches!(client.create_museum_event(&untitled).await, Err(ApiError::Encode(_))));
    assert!(transport.requests().is_empty());

    let req = EventRequest {
        title: Some("Founders Day".into()),
        start_date: Some("2024-05-01".into()),
        tag_ids: Some(vec![1]),
        ..EventRequest::default()
    };
    let _ = client.create_museum_event(&req).await;
    assert_eq!(
        transport.last().body.unwrap(),
        json!({ "title": "Founders Day", "startDate": "2024-05-01", "tagIds": [1] })
    );
}

#[tokio::test]
async fn publish_and_feature_toggles_pick_the_verb() {
    let transport = Arc::new(MockTransport::new());
    let client = mock::client(&transport);

    let _ = client.set_museum_event_published(3, false).await;
    assert_eq!(transport.last().path, "/admin/museum/events/3/unpublish");
    let _ = client.set_museum_event_featured(3, true).await;
    assert_eq!(transport.last().path, "/admin/museum/events/3/feature");
    assert_eq!(transport.last().body, None);
}

#[tokio::test]
async fn batch_event_action_is_lowercase() {
    let transport = Arc::new(MockTransport::new());
    let client = mock::client(&transport);

    let _ = client.batch_museum_events(&[3, 4], EventBatchAction::Unfeature).await;

    assert_eq!(transport.last().body.unwrap(), json!({ "ids": [3, 4], "action": "unfeature" }));
}

#[tokio::test]
async fn block_request_derives_type_from_content() {
    let transport = Arc::new(MockTransport::new());
    let client = mock::client(&transport);

    let content = BlockContent::Timeline {
        items: vec![TimelineEntry { time: "09:00".into(), title: "Gates open".into(), description: None }],
    };
    let req = BlockRequest::new(Some("Schedule".into()), content);
    assert_eq!(req.block_type, BlockType::Timeline);
    let _ = client.update_event_block(3, 2, &req).await;

    let request = transport.last();
    assert_eq!(request.path, "/admin/museum/events/3/blocks/2");
    assert_eq!(
        request.body.unwrap(),
        json!({
            "blockType": "timeline",
            "title": "Schedule",
            "content": { "items": [{ "time": "09:00", "title": "Gates open" }] },
        })
    );
}

#[tokio::test]
async fn tag_sort_posts_ids_in_order() {
    let transport = Arc::new(MockTransport::new());
    transport.envelope(Method::POST, "/admin/museum/tags/sort", 200, json!(null));
    let client = mock::client(&transport);

    assert!(client.sort_museum_tags(&[2, 1]).await.unwrap().is_success());
    assert_eq!(transport.last().body.unwrap(), json!({ "ids": [2, 1] }));
}
