//! Admin user search under `/admin/users/search`. Every search answers with
//! the matching users and their campus binding; name and account matches
//! are fuzzy on the server.

#![allow(clippy::missing_errors_doc)]

use super::{ApiClient, ApiError, ApiResponse, Query};
use crate::types::admin_user::{AdminUserCampusBinding, UserLookup};

const BASE: &str = "/admin/users/search";

impl ApiClient {
    /// Search by the real name recorded in the campus system.
    pub async fn search_users_by_campus_name(&self, name: &str) -> Result<ApiResponse<Vec<AdminUserCampusBinding>>, ApiError> {
        self.get(&format!("{BASE}/by-campus-name"), Query::new().with("name", name))
            .await
    }

    pub async fn search_users_by_campus_account(
        &self,
        campus_account: &str,
    ) -> Result<ApiResponse<Vec<AdminUserCampusBinding>>, ApiError> {
        let query = Query::new().with("campusAccount", campus_account);
        self.get(&format!("{BASE}/by-campus-account"), query).await
    }

    /// Search by local account fields. An empty lookup is rejected locally.
    pub async fn search_users(&self, lookup: &UserLookup) -> Result<ApiResponse<Vec<AdminUserCampusBinding>>, ApiError> {
        if lookup.is_empty() {
            return Err(ApiError::Encode("user search needs an id, username or nickname".into()));
        }
        let query = Query::new()
            .with_opt("userId", lookup.user_id)
            .with_opt("username", lookup.username.as_deref())
            .with_opt("nickname", lookup.nickname.as_deref());
        self.get(&format!("{BASE}/by-user"), query).await
    }
}

#[cfg(test)]
#[path = "admin_user_test.rs"]
mod tests;
