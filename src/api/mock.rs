//! Scripted transport for unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use reqwest::Method;
use serde_json::{Value, json};

use super::{ApiClient, ApiError, HttpRequest, HttpResponse, Transport};
use crate::events::AuthEvents;
use crate::storage::MemoryStore;

type Reply = Result<HttpResponse, String>;

/// Replays canned replies per `METHOD path` and records every request.
/// The last reply for a route repeats once the queue is drained.
#[derive(Default)]
pub(crate) struct MockTransport {
    replies: Mutex<HashMap<String, VecDeque<Reply>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

/// An [`ApiClient`] over `transport` with throwaway storage and events.
pub(crate) fn client(transport: &Arc<MockTransport>) -> ApiClient {
    ApiClient::new(transport.clone(), Arc::new(MemoryStore::new()), AuthEvents::new())
}

fn route_key(method: &Method, path: &str) -> String {
    format!("{method} {path}")
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(&self, method: Method, path: &str, status: u16, body: Value) -> &Self {
        self.push(method, path, Ok(HttpResponse { status, body: body.to_string() }))
    }

    /// Reply with a `{ code, message, data }` envelope over HTTP 200.
    pub(crate) fn envelope(&self, method: Method, path: &str, code: i32, data: Value) -> &Self {
        let message = if code == 200 { "success" } else { "rejected" };
        self.reply(method, path, 200, json!({ "code": code, "message": message, "data": data }))
    }

    pub(crate) fn fail(&self, method: Method, path: &str, error: &str) -> &Self {
        self.push(method, path, Err(error.to_owned()))
    }

    fn push(&self, method: Method, path: &str, reply: Reply) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .entry(route_key(&method, path))
            .or_default()
            .push_back(reply);
        self
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn count(&self, method: &Method, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| &r.method == method && r.path == path)
            .count()
    }

    pub(crate) fn last(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request recorded")
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        // Suspend once, like a real round trip, so callers can interleave.
        tokio::task::yield_now().await;
        let key = route_key(&request.method, &request.path);
        self.requests.lock().unwrap().push(request);

        let reply = {
            let mut replies = self.replies.lock().unwrap();
            let queue = replies.get_mut(&key);
            match queue {
                Some(queue) if queue.len() > 1 => queue.pop_front(),
                Some(queue) => queue.front().cloned(),
                None => None,
            }
        };

        match reply {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(ApiError::Request(message)),
            None => Ok(HttpResponse {
                status: 404,
                body: format!("no mock reply for {key}"),
            }),
        }
    }
}
