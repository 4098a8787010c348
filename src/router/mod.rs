//! Declarative route table.
//!
//! DESIGN
//! ======
//! Routes are plain metadata: a path pattern (`/tickets/:id`), a unique
//! name, a display title, whether a session is required, an optional
//! permission and an optional parent route name. Breadcrumbs are derived by
//! walking parent links; nothing is rendered here.
//!
//! Matching is segment-wise. When several patterns match, the one with the
//! most literal segments wins, so `/tickets/my` beats `/tickets/:id`.

pub mod guard;

use std::collections::{BTreeMap, HashSet};

pub use guard::{NavigationDecision, NavigationGuard};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("duplicate route name: {0}")]
    DuplicateName(String),

    #[error("route {route} names unknown parent {parent}")]
    UnknownParent { route: String, parent: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].split('/').filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    pub name: String,
    pub title: String,
    pub requires_auth: bool,
    pub permission: Option<String>,
    pub parent: Option<String>,
    segments: Vec<Segment>,
}

impl Route {
    #[must_use]
    pub fn new(path: &str, name: &str, title: &str) -> Self {
        let segments = split_path(path)
            .map(|s| match s.strip_prefix(':') {
                Some(param) => Segment::Param(param.to_owned()),
                None => Segment::Literal(s.to_owned()),
            })
            .collect();
        Self {
            path: path.to_owned(),
            name: name.to_owned(),
            title: title.to_owned(),
            requires_auth: false,
            permission: None,
            parent: None,
            segments,
        }
    }

    #[must_use]
    pub fn requires_auth(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    /// Require a permission. Implies [`Self::requires_auth`].
    #[must_use]
    pub fn permission(mut self, permission: &str) -> Self {
        self.requires_auth = true;
        self.permission = Some(permission.to_owned());
        self
    }

    #[must_use]
    pub fn parent(mut self, parent: &str) -> Self {
        self.parent = Some(parent.to_owned());
        self
    }

    fn literal_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Literal(_)))
            .count()
    }

    fn match_path(&self, parts: &[&str]) -> Option<BTreeMap<String, String>> {
        if parts.len() != self.segments.len() {
            return None;
        }
        let mut params = BTreeMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), (*part).to_owned());
                }
            }
        }
        Some(params)
    }
}

/// A resolved navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    pub params: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// # Errors
    ///
    /// Returns [`RouteError`] on duplicate names or a parent that names no route.
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteError> {
        let mut names = HashSet::new();
        for route in &routes {
            if !names.insert(route.name.as_str()) {
                return Err(RouteError::DuplicateName(route.name.clone()));
            }
        }
        let orphan = routes
            .iter()
            .find(|r| r.parent.as_deref().is_some_and(|p| !names.contains(p)));
        if let Some(route) = orphan {
            return Err(RouteError::UnknownParent {
                route: route.name.clone(),
                parent: route.parent.clone().unwrap_or_default(),
            });
        }
        Ok(Self { routes })
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// Match a full path (query and fragment ignored).
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        let parts: Vec<&str> = split_path(path).collect();
        let mut best: Option<RouteMatch<'_>> = None;
        for route in &self.routes {
            let Some(params) = route.match_path(&parts) else {
                continue;
            };
            let better = best
                .as_ref()
                .is_none_or(|b| route.literal_count() > b.route.literal_count());
            if better {
                best = Some(RouteMatch { route, params });
            }
        }
        best
    }

    /// Routes from the root down to `name`. Empty for an unknown name.
    #[must_use]
    pub fn breadcrumbs(&self, name: &str) -> Vec<&Route> {
        let mut trail = Vec::new();
        let mut current = self.by_name(name);
        while let Some(route) = current {
            if trail.len() > self.routes.len() {
                tracing::warn!(route = name, "parent cycle in route table");
                break;
            }
            trail.push(route);
            current = route.parent.as_deref().and_then(|p| self.by_name(p));
        }
        trail.reverse();
        trail
    }

    /// Representative screen list: one entry per API family, admin screens
    /// gated on the matching `*.manage` permission.
    #[must_use]
    pub fn campus() -> Self {
        use crate::session::{
            PERM_BANNER_MANAGE, PERM_CAMPAIGN_MANAGE, PERM_MESSAGE_MANAGE, PERM_MUSEUM_MANAGE, PERM_RATING_MANAGE,
            PERM_TICKET_MANAGE, PERM_USER_MANAGE,
        };

        let routes = vec![
            Route::new("/", "home", "Home"),
            Route::new("/design-system", "design-system", "Design system").parent("home"),
            // tickets
            Route::new("/tickets", "tickets", "Tickets").parent("home"),
            Route::new("/tickets/my", "my-tickets", "My tickets")
                .requires_auth()
                .parent("tickets"),
            Route::new("/tickets/:id", "ticket-detail", "Activity").parent("tickets"),
            // ringtone campaigns
            Route::new("/ringtone", "ringtone", "Dorm ringtones").parent("home"),
            Route::new("/ringtone/:id", "ringtone-detail", "Campaign").parent("ringtone"),
            // rating community
            Route::new("/rating", "rating", "Ratings").parent("home"),
            Route::new("/rating/schools/:schoolId", "rating-school", "School").parent("rating"),
            Route::new("/rating/categories/:id", "rating-category", "Category").parent("rating"),
            Route::new("/rating/items/:id", "rating-item", "Item").parent("rating"),
            Route::new("/rating/search", "rating-search", "Search").parent("rating"),
            Route::new("/rating/collections/:id", "rating-collection", "Collection").parent("rating"),
            Route::new("/rating/my-comments", "rating-my-comments", "My comments")
                .requires_auth()
                .parent("rating"),
            // account
            Route::new("/grade", "grade", "Grades")
                .requires_auth()
                .parent("home"),
            Route::new("/grade/exams/:examId", "grade-exam", "Exam")
                .requires_auth()
                .parent("grade"),
            Route::new("/messages", "messages", "Messages")
                .requires_auth()
                .parent("home"),
            Route::new("/profile", "profile", "Profile")
                .requires_auth()
                .parent("home"),
            Route::new("/profile/bindings", "profile-bindings", "Account bindings")
                .requires_auth()
                .parent("profile"),
            // admin
            Route::new("/admin", "admin", "Admin")
                .requires_auth()
                .parent("home"),
            Route::new("/admin/tickets", "admin-tickets", "Ticket activities")
                .permission(PERM_TICKET_MANAGE)
                .parent("admin"),
            Route::new("/admin/tickets/:id", "admin-ticket-detail", "Activity")
                .permission(PERM_TICKET_MANAGE)
                .parent("admin-tickets"),
            Route::new("/admin/tickets/:id/review", "admin-ticket-review", "Review")
                .permission(PERM_TICKET_MANAGE)
                .parent("admin-ticket-detail"),
            Route::new("/admin/tickets/verify", "admin-ticket-verify", "Gate check")
                .permission(PERM_TICKET_MANAGE)
                .parent("admin-tickets"),
            Route::new("/admin/campaigns", "admin-campaigns", "Campaigns")
                .permission(PERM_CAMPAIGN_MANAGE)
                .parent("admin"),
            Route::new("/admin/campaigns/:id", "admin-campaign-detail", "Campaign")
                .permission(PERM_CAMPAIGN_MANAGE)
                .parent("admin-campaigns"),
            Route::new("/admin/dorms", "admin-dorms", "Campuses and buildings")
                .permission(PERM_CAMPAIGN_MANAGE)
                .parent("admin"),
            Route::new("/admin/rating", "admin-rating", "Rating community")
                .permission(PERM_RATING_MANAGE)
                .parent("admin"),
            Route::new("/admin/messages", "admin-messages", "Messages")
                .permission(PERM_MESSAGE_MANAGE)
                .parent("admin"),
            Route::new("/admin/users", "admin-users", "Users")
                .permission(PERM_USER_MANAGE)
                .parent("admin"),
            Route::new("/admin/banners", "admin-banners", "Banners")
                .permission(PERM_BANNER_MANAGE)
                .parent("admin"),
            Route::new("/admin/museum", "admin-museum", "Museum")
                .permission(PERM_MUSEUM_MANAGE)
                .parent("admin"),
        ];

        Self { routes }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
