//! Admin lookup of users together with their campus account binding.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserCampusBinding {
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub is_bound: bool,
    #[serde(default)]
    pub campus_account: Option<String>,
    /// Real name recorded by the campus system.
    #[serde(default)]
    pub campus_name: Option<String>,
    #[serde(default)]
    pub class_alias: Option<String>,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub bind_time: Option<String>,
}

/// Search by local account fields. At least one must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserLookup {
    pub user_id: Option<i64>,
    pub username: Option<String>,
    pub nickname: Option<String>,
}

impl UserLookup {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.username.is_none() && self.nickname.is_none()
    }
}
