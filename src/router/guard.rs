//! Navigation guard run before every route change.

use std::sync::Arc;

use super::RouteTable;
use crate::session::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    Allow,
    /// Login required. The target is queued as the post-login redirect and
    /// the login modal is open.
    Deny,
    /// Logged in but missing the route's permission.
    Forbidden,
    NotFound,
}

#[derive(Clone)]
pub struct NavigationGuard {
    routes: Arc<RouteTable>,
    session: SessionStore,
}

impl NavigationGuard {
    #[must_use]
    pub fn new(routes: Arc<RouteTable>, session: SessionStore) -> Self {
        Self { routes, session }
    }

    #[must_use]
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Decide whether navigation to `full_path` (query included) may proceed.
    pub fn before_each(&self, full_path: &str) -> NavigationDecision {
        let Some(target) = self.routes.resolve(full_path) else {
            tracing::debug!(path = full_path, "no route matches");
            return NavigationDecision::NotFound;
        };
        let route = target.route;

        if route.requires_auth && !self.session.is_logged_in() {
            tracing::debug!(route = %route.name, "login required; deferring navigation");
            self.session.set_redirect_route(Some(full_path));
            self.session.open_login_modal(None);
            return NavigationDecision::Deny;
        }

        if let Some(permission) = route.permission.as_deref() {
            if !self.session.has_permission(permission) {
                tracing::debug!(route = %route.name, permission, "permission missing");
                return NavigationDecision::Forbidden;
            }
        }

        NavigationDecision::Allow
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
