//! End-to-end checks of the reqwest transport against an in-process server.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::Json;
use campus_client::api::http::ReqwestTransport;
use campus_client::api::{ApiClient, ApiError};
use campus_client::config::{ClientConfig, Timeouts};
use campus_client::events::{AuthEvent, AuthEvents};
use campus_client::session::SessionStore;
use campus_client::storage::{FileStore, KeyValueStore, TOKEN_KEY};
use serde_json::{Value, json};

const TOKEN: &str = "tok-1";

#[derive(Clone, Default)]
struct Seen {
    banner_queries: Arc<Mutex<Vec<String>>>,
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"))
}

async fn login() -> Json<Value> {
    Json(json!({
        "code": 200,
        "message": "ok",
        "data": {
            "token": TOKEN,
            "user": { "id": 7, "username": "amy" },
            "expiresAt": 4_102_444_800_i64,
        },
    }))
}

async fn permissions(headers: HeaderMap) -> Result<Json<Value>, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(Json(json!({
        "code": 200,
        "message": "ok",
        "data": { "permissions": ["ticket.manage"] },
    })))
}

async fn profile() -> StatusCode {
    StatusCode::UNAUTHORIZED
}

async fn banners(State(seen): State<Seen>, RawQuery(query): RawQuery) -> Json<Value> {
    seen.banner_queries
        .lock()
        .unwrap()
        .push(query.unwrap_or_default());
    Json(json!({ "code": 200, "message": "ok", "data": [] }))
}

async fn spawn_server() -> (String, Seen) {
    let seen = Seen::default();
    let app = Router::new()
        .route("/api/v2/auth/login", post(login))
        .route("/api/v2/permissions/my", get(permissions))
        .route("/api/v2/user/profile", get(profile))
        .route("/api/v2/banners", get(banners))
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/api/v2/"), seen)
}

fn session_at(base_url: &str, store: Arc<FileStore>) -> SessionStore {
    let config = ClientConfig::new(base_url, Timeouts::default()).unwrap();
    let transport = Arc::new(ReqwestTransport::new(&config).unwrap());
    SessionStore::new(ApiClient::new(transport, store, AuthEvents::new()))
}

#[tokio::test]
async fn login_sends_bearer_and_persists_across_restarts() {
    let (base_url, _) = spawn_server().await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let session = session_at(&base_url, Arc::new(FileStore::open(&path).unwrap()));
    let response = session.login("amy", "secret").await.unwrap();
    assert!(response.is_success());
    session.wait_for_permissions().await;
    assert!(session.can_manage_tickets());

    let restarted = session_at(&base_url, Arc::new(FileStore::open(&path).unwrap()));
    assert!(restarted.restore_session().is_none());
    assert!(restarted.is_logged_in());
    assert_eq!(restarted.user().map(|u| u.username).as_deref(), Some("amy"));
    assert_eq!(restarted.permissions(), vec!["ticket.manage".to_owned()]);
}

#[tokio::test]
async fn unauthorized_status_clears_token_and_notifies() {
    let (base_url, _) = spawn_server().await;
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::open(dir.path().join("session.json")).unwrap());

    let session = session_at(&base_url, store.clone());
    session.login("amy", "secret").await.unwrap();
    session.wait_for_permissions().await;
    let mut events = session.api().events().subscribe();

    let err = session.fetch_profile().await.unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized));
    assert_eq!(session.token(), None);
    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(events.recv().await.unwrap(), AuthEvent::TokenExpired);
}

#[tokio::test]
async fn query_parameters_reach_the_server() {
    let (base_url, seen) = spawn_server().await;
    let dir = tempfile::tempdir().unwrap();
    let session = session_at(&base_url, Arc::new(FileStore::open(dir.path().join("s.json")).unwrap()));

    let shown = session.api().banners(Some("ticket")).await.unwrap();
    session.api().banners(None).await.unwrap();

    assert!(shown.is_empty());
    let queries = seen.banner_queries.lock().unwrap().clone();
    assert_eq!(queries, vec!["position=ticket".to_owned(), "position=home".to_owned()]);
}

#[tokio::test]
async fn missing_route_is_a_status_error() {
    let (base_url, _) = spawn_server().await;
    let dir = tempfile::tempdir().unwrap();
    let session = session_at(&base_url, Arc::new(FileStore::open(dir.path().join("s.json")).unwrap()));

    let err = session.api().unread_counts().await.unwrap_err();

    assert!(matches!(err, ApiError::Status { status: 404, .. }));
}
