//! Client-side session store.
//!
//! DESIGN
//! ======
//! [`SessionStore`] is a cheap `Clone` handle over shared state. The bearer
//! token lives in the [`ApiClient`] so the HTTP layer can clear it on a 401;
//! everything else (user, expiry, campus identity, permissions, bindings,
//! login modal, redirect mailbox) lives behind one `std::sync::Mutex` that
//! is never held across an `.await`.
//!
//! Logged in means: a token is held AND the injected [`Clock`] reads
//! earlier than the expiry. Expiry is checked lazily; persisted keys are
//! only wiped on the next [`SessionStore::restore_session`].
//!
//! PERSISTENCE
//! ===========
//! The five session keys in [`crate::storage::SESSION_KEYS`] are written as
//! a group after every auth action and removed as a group on logout or
//! expiry. Write failures are logged and never fail the auth action.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::task::JoinHandle;

use crate::api::{ApiClient, ApiError, ApiResponse, Ignored, MessageAck};
use crate::storage::{
    CAMPUS_INFO_KEY, EXPIRES_KEY, KeyValueStore, PERMISSIONS_KEY, SESSION_KEYS, TOKEN_KEY, USER_KEY, load_json,
    save_json,
};
use crate::types::user::{
    BindCampusRequest, BindQqRequest, CampusBindingInfo, CampusInfo, LoginResponse, ProfileInfo, QqAuthorizeUrl,
    QqBindingInfo, QqData, QqLoginOutcome, SmsBindingInfo, SmsLoginResponse, UpdateProfileRequest, UserInfo,
};

pub const PERM_TICKET_MANAGE: &str = "ticket.manage";
pub const PERM_CAMPAIGN_MANAGE: &str = "campaign.manage";
pub const PERM_RATING_MANAGE: &str = "rating.manage";
pub const PERM_MESSAGE_MANAGE: &str = "message.manage";
pub const PERM_USER_MANAGE: &str = "user.manage";
pub const PERM_BANNER_MANAGE: &str = "banner.manage";
pub const PERM_MUSEUM_MANAGE: &str = "museum.manage";

// =============================================================================
// CLOCK
// =============================================================================

/// Wall-clock source for expiry checks, in epoch milliseconds.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
    }
}

// =============================================================================
// STATE
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginModal {
    pub visible: bool,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum PermissionFetch {
    #[default]
    Idle,
    InFlight,
    Done,
}

#[derive(Debug, Default)]
struct SessionState {
    user: Option<UserInfo>,
    expires_at_ms: Option<i64>,
    campus_info: Option<CampusInfo>,
    permissions: HashSet<String>,
    permission_fetch: PermissionFetch,
    /// Bumped on logout so a fetch started before it cannot repopulate
    /// permissions afterwards.
    epoch: u64,
    pending_fetch: Option<JoinHandle<()>>,
    profile: Option<ProfileInfo>,
    campus_binding: Option<CampusBindingInfo>,
    qq_binding: Option<QqBindingInfo>,
    phone_binding: Option<SmsBindingInfo>,
    login_modal: LoginModal,
    redirect_route: Option<String>,
}

// =============================================================================
// STORE
// =============================================================================

#[derive(Clone)]
pub struct SessionStore {
    api: ApiClient,
    storage: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    state: Arc<Mutex<SessionState>>,
}

impl SessionStore {
    /// Store over `api`, persisting through the client's storage and
    /// reading the system clock.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self::with_clock(api, Arc::new(SystemClock))
    }

    #[must_use]
    pub fn with_clock(api: ApiClient, clock: Arc<dyn Clock>) -> Self {
        let storage = api.storage().clone();
        Self { api, storage, clock, state: Arc::new(Mutex::new(SessionState::default())) }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    // ----- accessors -----

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.api.token()
    }

    #[must_use]
    pub fn user(&self) -> Option<UserInfo> {
        self.lock().user.clone()
    }

    #[must_use]
    pub fn expires_at_ms(&self) -> Option<i64> {
        self.lock().expires_at_ms
    }

    #[must_use]
    pub fn campus_info(&self) -> Option<CampusInfo> {
        self.lock().campus_info.clone()
    }

    #[must_use]
    pub fn profile(&self) -> Option<ProfileInfo> {
        self.lock().profile.clone()
    }

    #[must_use]
    pub fn campus_binding(&self) -> Option<CampusBindingInfo> {
        self.lock().campus_binding.clone()
    }

    #[must_use]
    pub fn qq_binding(&self) -> Option<QqBindingInfo> {
        self.lock().qq_binding.clone()
    }

    #[must_use]
    pub fn phone_binding(&self) -> Option<SmsBindingInfo> {
        self.lock().phone_binding.clone()
    }

    #[must_use]
    pub fn login_modal(&self) -> LoginModal {
        self.lock().login_modal.clone()
    }

    /// Held permissions, sorted.
    #[must_use]
    pub fn permissions(&self) -> Vec<String> {
        let mut list: Vec<String> = self.lock().permissions.iter().cloned().collect();
        list.sort();
        list
    }

    #[must_use]
    pub fn permissions_fetched(&self) -> bool {
        self.lock().permission_fetch == PermissionFetch::Done
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        let Some(expires_at_ms) = self.lock().expires_at_ms else {
            return false;
        };
        self.api.token().is_some() && self.clock.now_ms() < expires_at_ms
    }

    #[must_use]
    pub fn has_permission(&self, name: &str) -> bool {
        self.lock().permissions.contains(name)
    }

    #[must_use]
    pub fn can_manage_tickets(&self) -> bool {
        self.has_permission(PERM_TICKET_MANAGE)
    }

    #[must_use]
    pub fn can_manage_campaigns(&self) -> bool {
        self.has_permission(PERM_CAMPAIGN_MANAGE)
    }

    #[must_use]
    pub fn can_manage_rating(&self) -> bool {
        self.has_permission(PERM_RATING_MANAGE)
    }

    #[must_use]
    pub fn can_manage_messages(&self) -> bool {
        self.has_permission(PERM_MESSAGE_MANAGE)
    }

    #[must_use]
    pub fn can_manage_users(&self) -> bool {
        self.has_permission(PERM_USER_MANAGE)
    }

    #[must_use]
    pub fn can_manage_banners(&self) -> bool {
        self.has_permission(PERM_BANNER_MANAGE)
    }

    #[must_use]
    pub fn can_manage_museum(&self) -> bool {
        self.has_permission(PERM_MUSEUM_MANAGE)
    }

    // =========================================================================
    // RESTORE / LOGOUT
    // =========================================================================

    /// Hydrate from storage. Needs token, user and expiry all present and
    /// the expiry in the future; an expired session wipes every session key.
    ///
    /// When no permission list was cached, a background fetch is spawned and
    /// its handle returned without awaiting it.
    pub fn restore_session(&self) -> Option<JoinHandle<()>> {
        let storage = self.storage.as_ref();
        let token = storage.get(TOKEN_KEY);
        let user: Option<UserInfo> = load_json(storage, USER_KEY);
        let expires = storage
            .get(EXPIRES_KEY)
            .and_then(|raw| raw.trim().parse::<i64>().ok());

        let (Some(token), Some(user), Some(expires_at_ms)) = (token, user, expires) else {
            tracing::debug!("no persisted session");
            return None;
        };

        if self.clock.now_ms() >= expires_at_ms {
            tracing::info!(expires_at_ms, "persisted session expired; clearing storage");
            self.clear_storage();
            return None;
        }

        let campus_info: Option<CampusInfo> = load_json(storage, CAMPUS_INFO_KEY);
        let cached_permissions: Option<Vec<String>> = load_json(storage, PERMISSIONS_KEY);

        let fetched = {
            let mut state = self.lock();
            self.api.set_token(Some(token));
            tracing::info!(user_id = user.id, username = %user.username, "session restored");
            state.user = Some(user);
            state.expires_at_ms = Some(expires_at_ms);
            state.campus_info = campus_info;
            if let Some(list) = cached_permissions {
                state.permissions = list.into_iter().collect();
                state.permission_fetch = PermissionFetch::Done;
            }
            state.permission_fetch == PermissionFetch::Done
        };

        if fetched { None } else { self.spawn_permission_fetch() }
    }

    /// Forget everything, in memory and in storage. Idempotent.
    pub fn logout(&self) {
        let pending = {
            let mut state = self.lock();
            self.api.set_token(None);
            let epoch = state.epoch.wrapping_add(1);
            let pending = state.pending_fetch.take();
            *state = SessionState { epoch, ..SessionState::default() };
            pending
        };
        if let Some(handle) = pending {
            handle.abort();
        }
        self.clear_storage();
        tracing::info!("logged out");
    }

    fn clear_storage(&self) {
        for key in SESSION_KEYS {
            if let Err(e) = self.storage.remove(key) {
                tracing::warn!(key, error = %e, "failed to remove session key");
            }
        }
    }

    fn persist(&self) {
        let (user, expires_at_ms, campus_info, permissions) = {
            let state = self.lock();
            let permissions = (state.permission_fetch == PermissionFetch::Done).then(|| {
                let mut list: Vec<String> = state.permissions.iter().cloned().collect();
                list.sort();
                list
            });
            (state.user.clone(), state.expires_at_ms, state.campus_info.clone(), permissions)
        };
        let storage = self.storage.as_ref();

        let mut results = Vec::with_capacity(SESSION_KEYS.len());
        if let Some(token) = self.api.token() {
            results.push((TOKEN_KEY, storage.set(TOKEN_KEY, &token)));
        }
        if let Some(user) = &user {
            results.push((USER_KEY, save_json(storage, USER_KEY, user)));
        }
        if let Some(expires_at_ms) = expires_at_ms {
            results.push((EXPIRES_KEY, storage.set(EXPIRES_KEY, &expires_at_ms.to_string())));
        }
        match &campus_info {
            Some(info) => results.push((CAMPUS_INFO_KEY, save_json(storage, CAMPUS_INFO_KEY, info))),
            None => results.push((CAMPUS_INFO_KEY, storage.remove(CAMPUS_INFO_KEY))),
        }
        if let Some(list) = &permissions {
            results.push((PERMISSIONS_KEY, save_json(storage, PERMISSIONS_KEY, list)));
        }

        for (key, result) in results {
            if let Err(e) = result {
                tracing::warn!(key, error = %e, "failed to persist session key");
            }
        }
    }

    // =========================================================================
    // AUTH ACTIONS
    // =========================================================================

    /// Start a new session lifetime: the previous permission set, its fetch
    /// state and its persisted copy belong to whoever was logged in before.
    fn apply_login(&self, login: &LoginResponse) {
        let stale_fetch = {
            let mut state = self.lock();
            self.api.set_token(Some(login.token.clone()));
            state.user = Some(login.user.clone());
            state.expires_at_ms = Some(login.expires_at.saturating_mul(1000));
            state.campus_info.clone_from(&login.campus_info);
            state.permissions.clear();
            state.permission_fetch = PermissionFetch::Idle;
            state.epoch = state.epoch.wrapping_add(1);
            state.pending_fetch.take()
        };
        if let Some(handle) = stale_fetch {
            handle.abort();
        }
        if let Err(e) = self.storage.remove(PERMISSIONS_KEY) {
            tracing::warn!(error = %e, "failed to remove stale permissions");
        }
        self.persist();
        tracing::info!(user_id = login.user.id, username = %login.user.username, "logged in");

        let handle = self.spawn_permission_fetch();
        self.lock().pending_fetch = handle;
    }

    fn finish_login(&self, resp: ApiResponse<LoginResponse>) -> ApiResponse<LoginResponse> {
        if let Some(login) = resp.data.as_ref().filter(|_| resp.is_success()) {
            self.apply_login(login);
        }
        resp
    }

    fn finish_sms_login(&self, resp: ApiResponse<SmsLoginResponse>) -> ApiResponse<SmsLoginResponse> {
        if let Some(sms) = resp.data.as_ref().filter(|_| resp.is_success()) {
            self.apply_login(&sms.login);
        }
        resp
    }

    /// # Errors
    ///
    /// Transport-level [`ApiError`]s; business rejections come back as `Ok`.
    pub async fn login(&self, username: &str, password: &str) -> Result<ApiResponse<LoginResponse>, ApiError> {
        let resp = self.api.login(username, password).await?;
        Ok(self.finish_login(resp))
    }

    /// # Errors
    ///
    /// Transport-level [`ApiError`]s.
    pub async fn register(&self, username: &str, password: &str) -> Result<ApiResponse<LoginResponse>, ApiError> {
        let resp = self.api.register(username, password).await?;
        Ok(self.finish_login(resp))
    }

    /// # Errors
    ///
    /// Transport-level [`ApiError`]s.
    pub async fn login_by_campus(
        &self,
        campus_account: &str,
        campus_password: &str,
        captcha_code: &str,
        jsession_id: &str,
    ) -> Result<ApiResponse<LoginResponse>, ApiError> {
        let resp = self
            .api
            .login_by_campus(campus_account, campus_password, captcha_code, jsession_id)
            .await?;
        Ok(self.finish_login(resp))
    }

    /// Exchange a QQ OAuth code. Only a session payload logs in; a
    /// "needs binding" payload is returned untouched for the caller to
    /// follow up with [`Self::qq_bind`] or [`Self::qq_register`].
    ///
    /// # Errors
    ///
    /// Transport-level [`ApiError`]s.
    pub async fn qq_login(&self, code: &str, state: &str) -> Result<ApiResponse<QqLoginOutcome>, ApiError> {
        let resp = self.api.qq_login(code, state).await?;
        if let Some(QqLoginOutcome::LoggedIn(login)) = resp.data.as_ref().filter(|_| resp.is_success()) {
            self.apply_login(login);
        }
        Ok(resp)
    }

    /// # Errors
    ///
    /// Transport-level [`ApiError`]s.
    pub async fn qq_bind(
        &self,
        username: &str,
        password: &str,
        qq_data: &QqData,
    ) -> Result<ApiResponse<LoginResponse>, ApiError> {
        let resp = self.api.qq_bind(username, password, qq_data).await?;
        Ok(self.finish_login(resp))
    }

    /// # Errors
    ///
    /// Transport-level [`ApiError`]s.
    pub async fn qq_register(
        &self,
        username: &str,
        password: &str,
        qq_data: &QqData,
    ) -> Result<ApiResponse<LoginResponse>, ApiError> {
        let resp = self.api.qq_register(username, password, qq_data).await?;
        Ok(self.finish_login(resp))
    }

    /// # Errors
    ///
    /// Transport-level [`ApiError`]s.
    pub async fn sms_login(&self, phone_number: &str, code: &str) -> Result<ApiResponse<SmsLoginResponse>, ApiError> {
        let resp = self.api.sms_login(phone_number, code).await?;
        Ok(self.finish_sms_login(resp))
    }

    /// # Errors
    ///
    /// Transport-level [`ApiError`]s.
    pub async fn sms_register(
        &self,
        phone_number: &str,
        code: &str,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<ApiResponse<SmsLoginResponse>, ApiError> {
        let resp = self
            .api
            .sms_register(phone_number, code, username, password)
            .await?;
        Ok(self.finish_sms_login(resp))
    }

    // =========================================================================
    // PERMISSIONS
    // =========================================================================

    fn spawn_permission_fetch(&self) -> Option<JoinHandle<()>> {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("no async runtime; permission fetch skipped");
            return None;
        };
        let store = self.clone();
        Some(runtime.spawn(async move { store.fetch_permissions().await }))
    }

    /// Wait for the permission fetch spawned by the last login, if any.
    pub async fn wait_for_permissions(&self) {
        let pending = self.lock().pending_fetch.take();
        let Some(handle) = pending else {
            return;
        };
        match handle.await {
            Err(e) if !e.is_cancelled() => tracing::warn!(error = %e, "permission fetch task failed"),
            _ => {}
        }
    }

    /// Load the caller's permission list once per session. Skipped when
    /// already fetched, already in flight, or logged out. Failures are
    /// logged and leave the store ready to try again.
    pub async fn fetch_permissions(&self) {
        if self.api.token().is_none() {
            return;
        }
        let epoch = {
            let mut state = self.lock();
            if state.permission_fetch != PermissionFetch::Idle {
                return;
            }
            state.permission_fetch = PermissionFetch::InFlight;
            state.epoch
        };

        let result = self.api.my_permissions().await;

        let fetched = {
            let mut state = self.lock();
            if state.epoch != epoch {
                tracing::debug!("session changed during permission fetch; discarding result");
                return;
            }
            match result {
                Ok(resp) if resp.is_success() => {
                    let list = resp.data.map(|d| d.permissions).unwrap_or_default();
                    tracing::debug!(count = list.len(), "permissions loaded");
                    state.permissions = list.into_iter().collect();
                    state.permission_fetch = PermissionFetch::Done;
                    true
                }
                Ok(resp) => {
                    tracing::warn!(code = resp.code, message = %resp.message, "permission fetch rejected");
                    state.permission_fetch = PermissionFetch::Idle;
                    false
                }
                Err(e) => {
                    tracing::warn!(error = %e, "permission fetch failed");
                    state.permission_fetch = PermissionFetch::Idle;
                    false
                }
            }
        };

        if fetched {
            let list = self.permissions();
            if let Err(e) = save_json(self.storage.as_ref(), PERMISSIONS_KEY, &list) {
                tracing::warn!(error = %e, "failed to persist permissions");
            }
        }
    }

    // =========================================================================
    // PROFILE
    // =========================================================================

    /// # Errors
    ///
    /// Transport-level [`ApiError`]s.
    pub async fn fetch_profile(&self) -> Result<ApiResponse<ProfileInfo>, ApiError> {
        let resp = self.api.profile().await?;
        if let Some(profile) = resp.data.as_ref().filter(|_| resp.is_success()) {
            self.lock().profile = Some(profile.clone());
        }
        Ok(resp)
    }

    /// Update the profile, then mirror the changed fields onto the cached
    /// user and re-persist.
    ///
    /// # Errors
    ///
    /// Transport-level [`ApiError`]s.
    pub async fn update_profile(&self, req: &UpdateProfileRequest) -> Result<ApiResponse<ProfileInfo>, ApiError> {
        let resp = self.api.update_profile(req).await?;
        if !resp.is_success() {
            return Ok(resp);
        }
        let user_changed = {
            let mut state = self.lock();
            state.profile.clone_from(&resp.data);
            match state.user.as_mut() {
                Some(user) => {
                    req.apply_to(user);
                    true
                }
                None => false,
            }
        };
        if user_changed {
            self.persist();
        }
        Ok(resp)
    }

    // =========================================================================
    // BINDINGS
    // =========================================================================

    /// # Errors
    ///
    /// Transport-level [`ApiError`]s.
    pub async fn fetch_campus_binding(&self) -> Result<ApiResponse<CampusBindingInfo>, ApiError> {
        let resp = self.api.campus_binding().await?;
        self.store_campus_binding(&resp);
        Ok(resp)
    }

    /// # Errors
    ///
    /// Transport-level [`ApiError`]s.
    pub async fn bind_campus(&self, req: &BindCampusRequest) -> Result<ApiResponse<CampusBindingInfo>, ApiError> {
        let resp = self.api.bind_campus(req).await?;
        self.store_campus_binding(&resp);
        Ok(resp)
    }

    /// Re-bind to refresh class placement.
    ///
    /// # Errors
    ///
    /// Transport-level [`ApiError`]s.
    pub async fn rebind_campus(&self, req: &BindCampusRequest) -> Result<ApiResponse<CampusBindingInfo>, ApiError> {
        let resp = self.api.rebind_campus(req).await?;
        self.store_campus_binding(&resp);
        Ok(resp)
    }

    fn store_campus_binding(&self, resp: &ApiResponse<CampusBindingInfo>) {
        if resp.is_success() {
            self.lock().campus_binding.clone_from(&resp.data);
        }
    }

    /// Unbind the campus account. Also drops the cached campus identity.
    ///
    /// # Errors
    ///
    /// Transport-level [`ApiError`]s.
    pub async fn unbind_campus(&self) -> Result<ApiResponse<MessageAck>, ApiError> {
        let resp = self.api.unbind_campus().await?;
        if resp.is_success() {
            {
                let mut state = self.lock();
                state.campus_binding = Some(CampusBindingInfo::unbound());
                state.campus_info = None;
            }
            self.persist();
        }
        Ok(resp)
    }

    /// # Errors
    ///
    /// Transport-level [`ApiError`]s.
    pub async fn fetch_qq_binding(&self) -> Result<ApiResponse<QqBindingInfo>, ApiError> {
        let resp = self.api.qq_binding().await?;
        if resp.is_success() {
            self.lock().qq_binding.clone_from(&resp.data);
        }
        Ok(resp)
    }

    /// Authorize URL for linking QQ to the current account. No state change.
    ///
    /// # Errors
    ///
    /// Transport-level [`ApiError`]s.
    pub async fn qq_bind_authorize_url(&self) -> Result<ApiResponse<QqAuthorizeUrl>, ApiError> {
        self.api.qq_bind_authorize_url().await
    }

    /// # Errors
    ///
    /// Transport-level [`ApiError`]s.
    pub async fn bind_qq(&self, code: &str, state: &str) -> Result<ApiResponse<QqBindingInfo>, ApiError> {
        let req = BindQqRequest { code: code.to_owned(), state: state.to_owned() };
        let resp = self.api.bind_qq(&req).await?;
        if resp.is_success() {
            self.lock().qq_binding.clone_from(&resp.data);
        }
        Ok(resp)
    }

    /// # Errors
    ///
    /// Transport-level [`ApiError`]s.
    pub async fn unbind_qq(&self) -> Result<ApiResponse<MessageAck>, ApiError> {
        let resp = self.api.unbind_qq().await?;
        if resp.is_success() {
            self.lock().qq_binding = Some(QqBindingInfo::unbound());
        }
        Ok(resp)
    }

    /// # Errors
    ///
    /// Transport-level [`ApiError`]s.
    pub async fn fetch_phone_binding(&self) -> Result<ApiResponse<SmsBindingInfo>, ApiError> {
        let resp = self.api.phone_binding().await?;
        if resp.is_success() {
            self.lock().phone_binding.clone_from(&resp.data);
        }
        Ok(resp)
    }

    /// Bind a phone number. The server answers without binding data, so a
    /// success is followed by a fresh [`Self::fetch_phone_binding`].
    ///
    /// # Errors
    ///
    /// Transport-level [`ApiError`]s from either request.
    pub async fn bind_phone(&self, phone_number: &str, code: &str) -> Result<ApiResponse<Ignored>, ApiError> {
        let resp = self.api.bind_phone(phone_number, code).await?;
        if resp.is_success() {
            self.fetch_phone_binding().await?;
        }
        Ok(resp)
    }

    /// # Errors
    ///
    /// Transport-level [`ApiError`]s.
    pub async fn unbind_phone(&self) -> Result<ApiResponse<Ignored>, ApiError> {
        let resp = self.api.unbind_phone().await?;
        if resp.is_success() {
            self.lock().phone_binding = Some(SmsBindingInfo::unbound());
        }
        Ok(resp)
    }

    // =========================================================================
    // LOGIN MODAL / REDIRECT
    // =========================================================================

    pub fn open_login_modal(&self, message: Option<&str>) {
        self.lock().login_modal = LoginModal { visible: true, message: message.map(str::to_owned) };
    }

    pub fn close_login_modal(&self) {
        self.lock().login_modal = LoginModal::default();
    }

    /// Remember where to go after login. `None` clears the mailbox.
    pub fn set_redirect_route(&self, path: Option<&str>) {
        self.lock().redirect_route = path.map(str::to_owned);
    }

    /// Take the pending redirect; a second call returns `None`.
    pub fn consume_redirect_route(&self) -> Option<String> {
        self.lock().redirect_route.take()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
