//! Client core for the campus services platform.
//!
//! ARCHITECTURE
//! ============
//! `api` wraps every REST endpoint behind one [`api::ApiClient`] that owns
//! the bearer token and reports expiry through [`events::AuthEvents`].
//! `session` layers login state, permissions and account bindings on top,
//! persisting through a [`storage::KeyValueStore`]. `router` decides which
//! screens a session may open. `toast` and `tour` hold small pieces of UI
//! state that outlive a single screen.

pub mod api;
pub mod config;
pub mod events;
pub mod router;
pub mod session;
pub mod storage;
pub mod toast;
pub mod tour;
pub mod types;
