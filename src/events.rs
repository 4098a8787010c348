//! Auth event bus.
//!
//! The HTTP layer publishes here when the server rejects the bearer token;
//! the presentation layer subscribes and prompts for a fresh login.

use tokio::sync::broadcast;

const EVENT_CHANNEL_CAPACITY: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    /// The server answered HTTP 401; the held token has been cleared.
    TokenExpired,
}

/// Cloneable publisher handle. Subscribers only see events sent after they
/// subscribe.
#[derive(Debug, Clone)]
pub struct AuthEvents {
    tx: broadcast::Sender<AuthEvent>,
}

impl AuthEvents {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { tx }
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.tx.subscribe()
    }

    /// Publish an event. Having no subscribers is not an error.
    pub fn publish(&self, event: AuthEvent) {
        let receivers = self.tx.send(event).unwrap_or(0);
        tracing::debug!(?event, receivers, "auth event published");
    }
}

impl Default for AuthEvents {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "events_test.rs"]
mod tests;
