//! REST API client for the campus platform.
//!
//! ARCHITECTURE
//! ============
//! [`ApiClient`] owns the bearer token and a [`Transport`]. Endpoint
//! families (`auth`, `ticket`, `rating`, ...) add thin `impl ApiClient`
//! blocks that only marshal parameters; every call funnels through
//! [`ApiClient::request`], which plays the role of the request/response
//! interceptor pair.
//!
//! ERROR HANDLING
//! ==============
//! Two disjoint channels. Transport failures, non-2xx statuses and
//! undecodable success payloads are `Err(ApiError)`. Business rejections
//! travel inside the envelope (`code != 200`) and come back as `Ok`.
//! HTTP 401 is the one automatic correction: the token is cleared,
//! [`AuthEvent::TokenExpired`] is published, and the call fails without
//! a retry.

pub mod admin_message;
pub mod admin_user;
pub mod auth;
pub mod banner;
pub mod campaign;
pub mod contribution;
pub mod dorm;
pub mod grade;
pub mod http;
pub mod message;
pub mod moment;
pub mod museum;
pub mod rating;
pub mod rating_admin;
pub mod sms;
pub mod ticket;
pub mod user;

use std::sync::{Arc, RwLock};

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::events::{AuthEvent, AuthEvents};
use crate::storage::{KeyValueStore, TOKEN_KEY};

/// Application code signalling success inside the envelope.
pub const SUCCESS_CODE: i32 = 200;

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The server rejected the bearer token (HTTP 401).
    #[error("unauthorized: session token rejected")]
    Unauthorized,

    /// The server returned a non-success HTTP status other than 401.
    #[error("API response error: status {status}")]
    Status { status: u16, body: String },

    /// A success envelope carried a payload that does not match the expected type.
    #[error("API response parse failed: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("request body encode failed: {0}")]
    Encode(String),

    /// The bearer token contains bytes not allowed in a header value.
    #[error("invalid header value: {0}")]
    InvalidHeader(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// ENVELOPE
// =============================================================================

/// The `{ code, message, data }` wrapper every endpoint answers with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    #[serde(default)]
    pub message: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

#[derive(Deserialize)]
struct RawEnvelope {
    code: i32,
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: Value,
}

impl<T> ApiResponse<T> {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// The payload of a success envelope, `None` for rejections.
    #[must_use]
    pub fn success_data(self) -> Option<T> {
        if self.is_success() { self.data } else { None }
    }

    /// Transform the payload while keeping `code` and `message`.
    #[must_use]
    pub fn map_data<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse { code: self.code, message: self.message, data: self.data.map(f) }
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decode an envelope body. `data` is only interpreted as `T` when the
    /// envelope reports success; rejections keep `data = None`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body is not an envelope or a
    /// success payload does not match `T`.
    pub fn decode(body: &str) -> Result<Self, ApiError> {
        let raw: RawEnvelope = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let data = if raw.code == SUCCESS_CODE {
            serde_json::from_value::<Option<T>>(raw.data).map_err(|e| ApiError::Decode(e.to_string()))?
        } else {
            None
        };
        Ok(Self { code: raw.code, message: raw.message, data })
    }
}

/// `{ "message": "..." }` payload returned by many delete/unbind endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageAck {
    pub message: String,
}

/// Payload type for endpoints whose `data` carries nothing the caller reads.
/// Accepts `null`, objects and scalars alike.
pub type Ignored = serde::de::IgnoredAny;

// =============================================================================
// TRANSPORT
// =============================================================================

/// One outgoing HTTP request, relative to the API base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub bearer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Sends raw HTTP exchanges. Implemented by [`http::ReqwestTransport`] and
/// by scripted fakes in tests.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] when no HTTP response was obtained.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Builder for query strings; `None` values are skipped.
#[derive(Debug, Default)]
pub struct Query(Vec<(String, String)>);

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.0.push((key.to_owned(), value.to_string()));
        self
    }

    #[must_use]
    pub fn with_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }
}

// =============================================================================
// CLIENT
// =============================================================================

/// Cheap-to-clone API handle. Clones share the token, storage and event bus.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    token: Arc<RwLock<Option<String>>>,
    storage: Arc<dyn KeyValueStore>,
    events: AuthEvents,
}

impl ApiClient {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, storage: Arc<dyn KeyValueStore>, events: AuthEvents) -> Self {
        Self { transport, token: Arc::new(RwLock::new(None)), storage, events }
    }

    /// Current bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Replace the bearer token held in memory. Persistence is the caller's job.
    pub fn set_token(&self, token: Option<String>) {
        *self
            .token
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = token;
    }

    #[must_use]
    pub fn events(&self) -> &AuthEvents {
        &self.events
    }

    #[must_use]
    pub fn storage(&self) -> &Arc<dyn KeyValueStore> {
        &self.storage
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str, query: Query) -> Result<ApiResponse<T>, ApiError> {
        self.request(Method::GET, path, query, None).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = encode_body(body)?;
        self.request(Method::POST, path, Query::new(), Some(body)).await
    }

    pub(crate) async fn post_query<T, B>(&self, path: &str, query: Query, body: &B) -> Result<ApiResponse<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = encode_body(body)?;
        self.request(Method::POST, path, query, Some(body)).await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, ApiError> {
        self.request(Method::POST, path, Query::new(), None).await
    }

    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = encode_body(body)?;
        self.request(Method::PUT, path, Query::new(), Some(body)).await
    }

    pub(crate) async fn put_query<T: DeserializeOwned>(&self, path: &str, query: Query) -> Result<ApiResponse<T>, ApiError> {
        self.request(Method::PUT, path, query, None).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, ApiError> {
        self.request(Method::DELETE, path, Query::new(), None).await
    }

    pub(crate) async fn delete_with_body<T, B>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = encode_body(body)?;
        self.request(Method::DELETE, path, Query::new(), Some(body)).await
    }

    /// Send one request with the bearer token attached and decode the envelope.
    ///
    /// # Errors
    ///
    /// See the module docs: transport failures, 401, other non-2xx statuses
    /// and undecodable success payloads.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Query,
        body: Option<Value>,
    ) -> Result<ApiResponse<T>, ApiError> {
        tracing::debug!(%method, path, "api request");
        let request = HttpRequest { method, path: path.to_owned(), query: query.0, body, bearer: self.token() };
        let response = self.transport.send(request).await?;

        if response.status == 401 {
            self.handle_unauthorized();
            return Err(ApiError::Unauthorized);
        }
        if !(200..300).contains(&response.status) {
            return Err(ApiError::Status { status: response.status, body: response.body });
        }

        ApiResponse::decode(&response.body)
    }

    fn handle_unauthorized(&self) {
        tracing::warn!("server rejected session token; clearing it");
        self.set_token(None);
        if let Err(e) = self.storage.remove(TOKEN_KEY) {
            tracing::warn!(error = %e, "failed to remove persisted token");
        }
        self.events.publish(AuthEvent::TokenExpired);
    }
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

#[cfg(test)]
pub(crate) mod mock;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
