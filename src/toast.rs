//! Transient notification queue.
//!
//! Toasts expire lazily: nothing runs on a timer, [`ToastQueue::visible`]
//! drops whatever has outlived its duration at the instant it is asked,
//! and [`ToastQueue::show`] prunes the same way before queueing.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);
/// Upper bound on a toast's lifetime.
pub const MAX_TOAST_DURATION: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Warning,
    Error,
    #[default]
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub expires_at: Instant,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    toasts: VecDeque<Toast>,
}

#[derive(Debug, Default)]
pub struct ToastQueue {
    inner: Mutex<Inner>,
}

impl ToastQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue a toast and return its id. Ids start at 1 and only grow.
    /// Durations too large to represent are capped at [`MAX_TOAST_DURATION`].
    pub fn show(&self, message: impl Into<String>, kind: ToastKind, duration: Duration) -> u64 {
        let now = Instant::now();
        let expires_at = now
            .checked_add(duration.min(MAX_TOAST_DURATION))
            .unwrap_or(now);
        let mut inner = self.lock();
        inner.toasts.retain(|t| t.expires_at > now);
        inner.next_id += 1;
        let id = inner.next_id;
        inner.toasts.push_back(Toast { id, message: message.into(), kind, expires_at });
        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.show(message, ToastKind::Success, DEFAULT_TOAST_DURATION)
    }

    pub fn warning(&self, message: impl Into<String>) -> u64 {
        self.show(message, ToastKind::Warning, DEFAULT_TOAST_DURATION)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.show(message, ToastKind::Error, DEFAULT_TOAST_DURATION)
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.show(message, ToastKind::Info, DEFAULT_TOAST_DURATION)
    }

    /// Remove one toast. Unknown ids are ignored.
    pub fn close(&self, id: u64) {
        self.lock().toasts.retain(|t| t.id != id);
    }

    /// Toasts still live at `now`, oldest first.
    pub fn visible(&self, now: Instant) -> Vec<Toast> {
        let mut inner = self.lock();
        inner.toasts.retain(|t| t.expires_at > now);
        inner.toasts.iter().cloned().collect()
    }
}

#[cfg(test)]
#[path = "toast_test.rs"]
mod tests;
