use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use reqwest::Method;
use serde_json::{Value, json};

use super::*;
use crate::api::mock::MockTransport;
use crate::events::AuthEvents;
use crate::storage::MemoryStore;

const EXPIRES_SECS: i64 = 1_700_000_000;
const EXPIRES_MS: i64 = 1_700_000_000_000;
const BEFORE_EXPIRY: i64 = 1_600_000_000_000;

struct ManualClock(AtomicI64);

impl ManualClock {
    fn at(now_ms: i64) -> Arc<Self> {
        Arc::new(Self(AtomicI64::new(now_ms)))
    }

    fn set(&self, now_ms: i64) {
        self.0.store(now_ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

struct Harness {
    transport: Arc<MockTransport>,
    storage: Arc<MemoryStore>,
    clock: Arc<ManualClock>,
    store: SessionStore,
}

fn harness() -> Harness {
    harness_with_storage(Arc::new(MemoryStore::new()))
}

fn harness_with_storage(storage: Arc<MemoryStore>) -> Harness {
    let transport = Arc::new(MockTransport::new());
    let clock = ManualClock::at(BEFORE_EXPIRY);
    let api = ApiClient::new(transport.clone(), storage.clone(), AuthEvents::new());
    let store = SessionStore::with_clock(api, clock.clone());
    Harness { transport, storage, clock, store }
}

fn login_payload() -> Value {
    json!({
        "token": "tok-1",
        "user": { "id": 7, "username": "alice", "nickname": "Al" },
        "expiresAt": EXPIRES_SECS,
        "campusInfo": { "name": "Alice", "classAlias": "G2-3", "studentId": "2023001" }
    })
}

fn seed_session(storage: &MemoryStore, expires_at_ms: i64, permissions: Option<&[&str]>) {
    storage.set(TOKEN_KEY, "tok-saved").unwrap();
    storage
        .set(USER_KEY, &json!({ "id": 1, "username": "bob" }).to_string())
        .unwrap();
    storage
        .set(EXPIRES_KEY, &expires_at_ms.to_string())
        .unwrap();
    storage
        .set(CAMPUS_INFO_KEY, &json!({ "name": "Bob", "classAlias": "G1-1", "studentId": "1" }).to_string())
        .unwrap();
    if let Some(list) = permissions {
        storage
            .set(PERMISSIONS_KEY, &serde_json::to_string(list).unwrap())
            .unwrap();
    }
}

// =============================================================
// Login
// =============================================================

#[tokio::test]
async fn login_stores_expiry_in_milliseconds_and_persists() {
    let h = harness();
    h.transport
        .envelope(Method::POST, "/auth/login", 200, login_payload());
    h.transport.envelope(
        Method::GET,
        "/permissions/my",
        200,
        json!({ "permissions": ["ticket.manage"] }),
    );

    let resp = h.store.login("alice", "pw").await.unwrap();
    h.store.wait_for_permissions().await;

    assert!(resp.is_success());
    assert!(h.store.is_logged_in());
    assert_eq!(h.store.token().as_deref(), Some("tok-1"));
    assert_eq!(h.store.expires_at_ms(), Some(EXPIRES_MS));
    assert_eq!(h.store.campus_info().unwrap().class_alias, "G2-3");
    assert!(h.store.can_manage_tickets());
    assert!(!h.store.can_manage_banners());

    assert_eq!(h.storage.get(TOKEN_KEY).as_deref(), Some("tok-1"));
    assert_eq!(h.storage.get(EXPIRES_KEY).as_deref(), Some("1700000000000"));
    assert!(h.storage.get(USER_KEY).is_some());
    assert!(h.storage.get(CAMPUS_INFO_KEY).is_some());
    assert_eq!(h.storage.get(PERMISSIONS_KEY).as_deref(), Some(r#"["ticket.manage"]"#));
}

#[tokio::test]
async fn rejected_login_leaves_state_untouched() {
    let h = harness();
    h.transport
        .envelope(Method::POST, "/auth/login", 401, json!(null));

    let resp = h.store.login("alice", "wrong").await.unwrap();

    assert_eq!(resp.code, 401);
    assert!(!h.store.is_logged_in());
    assert!(h.store.user().is_none());
    assert!(h.storage.keys().is_empty());
    assert_eq!(h.transport.count(&Method::GET, "/permissions/my"), 0);
}

#[tokio::test]
async fn login_transport_error_propagates() {
    let h = harness();
    h.transport
        .fail(Method::POST, "/auth/login", "connection reset");

    let err = h.store.login("alice", "pw").await.unwrap_err();
    assert!(matches!(err, ApiError::Request(_)));
    assert!(!h.store.is_logged_in());
}

#[tokio::test]
async fn sms_login_logs_in_with_flattened_payload() {
    let h = harness();
    let mut payload = login_payload();
    payload["isNewUser"] = json!(true);
    h.transport
        .envelope(Method::POST, "/sms/login", 200, payload);

    let resp = h.store.sms_login("13800000000", "123456").await.unwrap();
    h.store.wait_for_permissions().await;

    assert!(resp.data.unwrap().is_new_user);
    assert!(h.store.is_logged_in());
    assert_eq!(h.store.user().unwrap().username, "alice");
}

#[tokio::test]
async fn qq_login_binding_prompt_does_not_log_in() {
    let h = harness();
    h.transport.envelope(
        Method::POST,
        "/auth/qq-login",
        200,
        json!({ "needBinding": true, "openid": "OPEN" }),
    );

    let resp = h.store.qq_login("code", "state").await.unwrap();

    assert!(matches!(resp.data, Some(QqLoginOutcome::NeedsBinding(_))));
    assert!(!h.store.is_logged_in());
    assert!(h.storage.get(TOKEN_KEY).is_none());
}

fn assert_logged_in_as_alice(h: &Harness) {
    assert!(h.store.is_logged_in());
    assert_eq!(h.store.token().as_deref(), Some("tok-1"));
    assert_eq!(h.store.user().unwrap().username, "alice");
    assert_eq!(h.store.expires_at_ms(), Some(EXPIRES_MS));
    assert_eq!(h.storage.get(TOKEN_KEY).as_deref(), Some("tok-1"));
    assert_eq!(h.storage.get(EXPIRES_KEY).as_deref(), Some("1700000000000"));
    assert_eq!(h.transport.count(&Method::GET, "/permissions/my"), 1);
}

fn qq_identity() -> QqData {
    QqData { openid: "OPEN".into(), unionid: None, nickname: Some("qq-nick".into()), avatar: None }
}

#[tokio::test]
async fn register_logs_in_and_fetches_permissions() {
    let h = harness();
    h.transport
        .envelope(Method::POST, "/auth/register", 200, login_payload());

    h.store.register("alice", "pw").await.unwrap();
    h.store.wait_for_permissions().await;

    assert_logged_in_as_alice(&h);
}

#[tokio::test]
async fn campus_login_logs_in_with_campus_identity() {
    let h = harness();
    h.transport
        .envelope(Method::POST, "/auth/login", 200, login_payload());

    h.store
        .login_by_campus("2023001", "pw", "abcd", "JSESSION")
        .await
        .unwrap();
    h.store.wait_for_permissions().await;

    assert_logged_in_as_alice(&h);
    assert_eq!(h.store.campus_info().unwrap().student_id, "2023001");
    assert!(h.storage.get(CAMPUS_INFO_KEY).is_some());
}

#[tokio::test]
async fn qq_bind_logs_in_to_the_linked_account() {
    let h = harness();
    h.transport
        .envelope(Method::POST, "/auth/qq-bind", 200, login_payload());

    h.store
        .qq_bind("alice", "pw", &qq_identity())
        .await
        .unwrap();
    h.store.wait_for_permissions().await;

    assert_logged_in_as_alice(&h);
}

#[tokio::test]
async fn qq_register_logs_in_to_the_new_account() {
    let h = harness();
    h.transport
        .envelope(Method::POST, "/auth/qq-register", 200, login_payload());

    h.store
        .qq_register("alice", "pw", &qq_identity())
        .await
        .unwrap();
    h.store.wait_for_permissions().await;

    assert_logged_in_as_alice(&h);
}

#[tokio::test]
async fn sms_register_logs_in() {
    let h = harness();
    let mut payload = login_payload();
    payload["isNewUser"] = json!(true);
    h.transport
        .envelope(Method::POST, "/sms/register", 200, payload);

    let resp = h
        .store
        .sms_register("13800000000", "123456", Some("alice"), None)
        .await
        .unwrap();
    h.store.wait_for_permissions().await;

    assert!(resp.data.unwrap().is_new_user);
    assert_logged_in_as_alice(&h);
}

#[tokio::test]
async fn expiry_is_checked_against_the_clock() {
    let h = harness();
    h.transport
        .envelope(Method::POST, "/auth/login", 200, login_payload());
    h.store.login("alice", "pw").await.unwrap();
    h.store.wait_for_permissions().await;
    assert!(h.store.is_logged_in());

    h.clock.set(EXPIRES_MS);
    assert!(!h.store.is_logged_in());
}

// =============================================================
// Restore / logout
// =============================================================

#[tokio::test]
async fn restore_with_cached_permissions_makes_no_request() {
    let h = harness();
    seed_session(&h.storage, EXPIRES_MS, Some(&["campaign.manage"]));

    let handle = h.store.restore_session();

    assert!(handle.is_none());
    assert!(h.store.is_logged_in());
    assert_eq!(h.store.token().as_deref(), Some("tok-saved"));
    assert_eq!(h.store.user().unwrap().username, "bob");
    assert!(h.store.permissions_fetched());
    assert!(h.store.can_manage_campaigns());
    assert!(h.transport.requests().is_empty());
}

#[tokio::test]
async fn restore_without_permissions_fetches_in_background() {
    let h = harness();
    seed_session(&h.storage, EXPIRES_MS, None);
    h.transport.envelope(
        Method::GET,
        "/permissions/my",
        200,
        json!({ "permissions": ["rating.manage", "banner.manage"] }),
    );

    let handle = h.store.restore_session().expect("fetch spawned");
    handle.await.unwrap();

    assert_eq!(h.store.permissions(), vec!["banner.manage", "rating.manage"]);
    assert_eq!(h.transport.last().bearer.as_deref(), Some("tok-saved"));
    assert_eq!(
        h.storage.get(PERMISSIONS_KEY).as_deref(),
        Some(r#"["banner.manage","rating.manage"]"#)
    );
}

#[tokio::test]
async fn restore_with_past_expiry_wipes_every_key() {
    let h = harness();
    seed_session(&h.storage, BEFORE_EXPIRY - 1, Some(&["ticket.manage"]));

    assert!(h.store.restore_session().is_none());

    assert!(!h.store.is_logged_in());
    assert!(h.store.user().is_none());
    for key in SESSION_KEYS {
        assert!(h.storage.get(key).is_none(), "{key} should be removed");
    }
}

#[tokio::test]
async fn restore_with_partial_keys_stays_logged_out() {
    let h = harness();
    h.storage.set(TOKEN_KEY, "orphan").unwrap();

    assert!(h.store.restore_session().is_none());
    assert!(!h.store.is_logged_in());
    assert_eq!(h.storage.get(TOKEN_KEY).as_deref(), Some("orphan"));
}

#[tokio::test]
async fn logout_then_restore_stays_logged_out() {
    let h = harness();
    seed_session(&h.storage, EXPIRES_MS, Some(&["ticket.manage"]));
    h.store.restore_session();
    assert!(h.store.is_logged_in());

    h.store.logout();
    h.store.logout();
    let handle = h.store.restore_session();

    assert!(handle.is_none());
    assert!(!h.store.is_logged_in());
    assert!(h.store.permissions().is_empty());
    assert!(!h.store.permissions_fetched());
    assert!(h.storage.keys().is_empty());
}

#[tokio::test]
async fn restored_session_survives_a_fresh_store() {
    let storage = Arc::new(MemoryStore::new());
    let first = harness_with_storage(storage.clone());
    first
        .transport
        .envelope(Method::POST, "/auth/login", 200, login_payload());
    first.store.login("alice", "pw").await.unwrap();
    first.store.wait_for_permissions().await;

    let second = harness_with_storage(storage);
    let handle = second.store.restore_session();
    if let Some(handle) = handle {
        handle.await.unwrap();
    }

    assert!(second.store.is_logged_in());
    assert_eq!(second.store.user().unwrap().nickname, "Al");
    assert_eq!(second.store.expires_at_ms(), Some(EXPIRES_MS));
}

// =============================================================
// Permissions
// =============================================================

#[tokio::test]
async fn sequential_permission_fetches_hit_the_server_once() {
    let h = harness();
    seed_session(&h.storage, EXPIRES_MS, None);
    h.transport.envelope(
        Method::GET,
        "/permissions/my",
        200,
        json!({ "permissions": ["user.manage"] }),
    );
    let handle = h.store.restore_session().unwrap();
    handle.await.unwrap();

    h.store.fetch_permissions().await;
    h.store.fetch_permissions().await;

    assert_eq!(h.transport.count(&Method::GET, "/permissions/my"), 1);
    assert!(h.store.can_manage_users());
}

#[tokio::test]
async fn permission_fetch_without_token_is_skipped() {
    let h = harness();
    h.store.fetch_permissions().await;
    assert!(h.transport.requests().is_empty());
}

#[tokio::test]
async fn failed_permission_fetch_can_be_retried() {
    let h = harness();
    seed_session(&h.storage, EXPIRES_MS, None);
    h.transport
        .fail(Method::GET, "/permissions/my", "timeout");
    h.transport.envelope(
        Method::GET,
        "/permissions/my",
        200,
        json!({ "permissions": ["message.manage"] }),
    );

    let handle = h.store.restore_session().unwrap();
    handle.await.unwrap();
    assert!(!h.store.permissions_fetched());
    assert!(h.storage.get(PERMISSIONS_KEY).is_none());

    h.store.fetch_permissions().await;
    assert!(h.store.can_manage_messages());
    assert_eq!(h.transport.count(&Method::GET, "/permissions/my"), 2);
}

#[tokio::test]
async fn login_after_expired_token_starts_fresh_permissions() {
    let h = harness();
    seed_session(&h.storage, EXPIRES_MS, Some(&["user.manage"]));
    h.store.restore_session();
    assert!(h.store.can_manage_users());
    h.transport
        .reply(Method::GET, "/user/profile", 401, json!({ "code": 401 }));
    h.store.fetch_profile().await.unwrap_err();
    h.transport
        .envelope(Method::POST, "/auth/login", 200, login_payload());
    h.transport
        .envelope(Method::GET, "/permissions/my", 200, json!({ "permissions": [] }));

    h.store.login("alice", "pw").await.unwrap();
    h.store.wait_for_permissions().await;

    assert_eq!(h.transport.count(&Method::GET, "/permissions/my"), 1);
    assert!(!h.store.can_manage_users());
    assert!(h.store.permissions_fetched());
    assert_eq!(h.storage.get(PERMISSIONS_KEY).as_deref(), Some("[]"));
}

#[tokio::test]
async fn login_over_restored_session_drops_cached_permissions() {
    let h = harness();
    seed_session(&h.storage, EXPIRES_MS, Some(&["banner.manage"]));
    h.store.restore_session();
    h.transport
        .envelope(Method::POST, "/auth/login", 200, login_payload());
    h.transport
        .fail(Method::GET, "/permissions/my", "timeout");

    h.store.login("alice", "pw").await.unwrap();
    h.store.wait_for_permissions().await;

    assert!(!h.store.can_manage_banners());
    assert!(!h.store.permissions_fetched());
    assert!(h.storage.get(PERMISSIONS_KEY).is_none());

    let restarted = harness_with_storage(h.storage.clone());
    restarted
        .transport
        .envelope(Method::GET, "/permissions/my", 200, json!({ "permissions": [] }));
    let handle = restarted.store.restore_session().expect("fetch spawned");
    handle.await.unwrap();
    assert!(!restarted.store.can_manage_banners());
}

#[tokio::test]
async fn logout_during_permission_fetch_discards_the_result() {
    let h = harness();
    seed_session(&h.storage, EXPIRES_MS, None);
    h.transport.envelope(
        Method::GET,
        "/permissions/my",
        200,
        json!({ "permissions": ["user.manage"] }),
    );
    if let Some(background) = h.store.restore_session() {
        background.abort();
    }

    tokio::join!(h.store.fetch_permissions(), async { h.store.logout() });

    assert_eq!(h.transport.count(&Method::GET, "/permissions/my"), 1);
    assert!(!h.store.can_manage_users());
    assert!(!h.store.permissions_fetched());
    assert!(h.storage.get(PERMISSIONS_KEY).is_none());
}

#[tokio::test]
async fn logout_aborts_the_pending_login_fetch() {
    let h = harness();
    h.transport
        .envelope(Method::POST, "/auth/login", 200, login_payload());
    h.transport.envelope(
        Method::GET,
        "/permissions/my",
        200,
        json!({ "permissions": ["user.manage"] }),
    );

    h.store.login("alice", "pw").await.unwrap();
    h.store.logout();
    h.store.wait_for_permissions().await;
    tokio::task::yield_now().await;

    assert_eq!(h.transport.count(&Method::GET, "/permissions/my"), 0);
    assert!(h.store.permissions().is_empty());
    assert!(h.storage.keys().is_empty());
}

// =============================================================
// 401 handling
// =============================================================

#[tokio::test]
async fn unauthorized_response_clears_observable_token() {
    let h = harness();
    seed_session(&h.storage, EXPIRES_MS, Some(&[]));
    h.store.restore_session();
    h.transport.reply(
        Method::GET,
        "/user/profile",
        401,
        json!({ "code": 401, "message": "token expired" }),
    );
    let mut events = h.store.api().events().subscribe();

    let err = h.store.fetch_profile().await.unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized));
    assert!(h.store.token().is_none());
    assert!(!h.store.is_logged_in());
    assert!(h.storage.get(TOKEN_KEY).is_none());
    assert_eq!(events.try_recv().unwrap(), crate::events::AuthEvent::TokenExpired);
}

// =============================================================
// Profile and bindings
// =============================================================

#[tokio::test]
async fn profile_update_merges_into_cached_user() {
    let h = harness();
    seed_session(&h.storage, EXPIRES_MS, Some(&[]));
    h.store.restore_session();
    h.transport.envelope(
        Method::PUT,
        "/user/profile",
        200,
        json!({ "id": 1, "username": "bob", "nickname": "Bobby", "signature": "hi" }),
    );

    let req = UpdateProfileRequest {
        nickname: Some("Bobby".into()),
        signature: Some("hi".into()),
        ..UpdateProfileRequest::default()
    };
    h.store.update_profile(&req).await.unwrap();

    assert_eq!(h.store.profile().unwrap().nickname, "Bobby");
    let user = h.store.user().unwrap();
    assert_eq!(user.nickname, "Bobby");
    assert_eq!(user.signature, "hi");
    let persisted: UserInfo = load_json(h.storage.as_ref(), USER_KEY).unwrap();
    assert_eq!(persisted.nickname, "Bobby");
}

#[tokio::test]
async fn unbind_campus_drops_campus_identity() {
    let h = harness();
    seed_session(&h.storage, EXPIRES_MS, Some(&[]));
    h.store.restore_session();
    h.transport.envelope(
        Method::DELETE,
        "/user/unbind-campus",
        200,
        json!({ "message": "unbound" }),
    );

    h.store.unbind_campus().await.unwrap();

    assert_eq!(h.store.campus_binding(), Some(CampusBindingInfo::unbound()));
    assert!(h.store.campus_info().is_none());
    assert!(h.storage.get(CAMPUS_INFO_KEY).is_none());
    assert!(h.storage.get(TOKEN_KEY).is_some());
}

#[tokio::test]
async fn bind_phone_refetches_binding() {
    let h = harness();
    seed_session(&h.storage, EXPIRES_MS, Some(&[]));
    h.store.restore_session();
    h.transport
        .envelope(Method::POST, "/sms/bind", 200, json!(null));
    h.transport.envelope(
        Method::GET,
        "/sms/binding",
        200,
        json!({ "bound": true, "phoneNumber": "138****0000" }),
    );

    h.store.bind_phone("13800000000", "123456").await.unwrap();

    assert_eq!(h.transport.count(&Method::GET, "/sms/binding"), 1);
    let binding = h.store.phone_binding().unwrap();
    assert!(binding.bound);
    assert_eq!(binding.phone_number.as_deref(), Some("138****0000"));
}

#[tokio::test]
async fn unbind_phone_writes_unbound_snapshot() {
    let h = harness();
    seed_session(&h.storage, EXPIRES_MS, Some(&[]));
    h.store.restore_session();
    h.transport.envelope(
        Method::GET,
        "/sms/binding",
        200,
        json!({ "bound": true, "phoneNumber": "138****0000" }),
    );
    h.transport
        .envelope(Method::DELETE, "/sms/unbind", 200, json!(null));

    h.store.fetch_phone_binding().await.unwrap();
    h.store.unbind_phone().await.unwrap();

    assert_eq!(h.store.phone_binding(), Some(SmsBindingInfo::unbound()));
    assert_eq!(h.transport.count(&Method::GET, "/sms/binding"), 1);
}

#[tokio::test]
async fn rejected_bind_keeps_previous_snapshot() {
    let h = harness();
    h.transport.envelope(
        Method::GET,
        "/user/qq-binding",
        200,
        json!({ "isBound": true, "nickname": "qq" }),
    );
    h.transport
        .envelope(Method::POST, "/user/bind-qq", 400, json!(null));
    h.transport
        .envelope(Method::DELETE, "/user/unbind-qq", 200, json!({ "message": "ok" }));

    h.store.fetch_qq_binding().await.unwrap();
    let resp = h.store.bind_qq("code", "state").await.unwrap();
    assert!(!resp.is_success());
    assert_eq!(h.store.qq_binding().unwrap().nickname.as_deref(), Some("qq"));

    h.store.unbind_qq().await.unwrap();
    assert_eq!(h.store.qq_binding(), Some(QqBindingInfo::unbound()));
}

// =============================================================
// Modal and redirect
// =============================================================

#[test]
fn redirect_is_consumed_once() {
    let h = harness();
    h.store.set_redirect_route(Some("/tickets/3?tab=mine"));

    assert_eq!(h.store.consume_redirect_route().as_deref(), Some("/tickets/3?tab=mine"));
    assert_eq!(h.store.consume_redirect_route(), None);
}

#[test]
fn login_modal_opens_with_message_and_closes_clean() {
    let h = harness();
    h.store.open_login_modal(Some("please log in"));
    assert_eq!(
        h.store.login_modal(),
        LoginModal { visible: true, message: Some("please log in".into()) }
    );

    h.store.close_login_modal();
    assert_eq!(h.store.login_modal(), LoginModal::default());
}
