//! Request/response shapes for the campus REST API.
//!
//! DESIGN
//! ======
//! One module per endpoint family. Wire names are camelCase unless a
//! type says otherwise. Where the API went through several shapes for the
//! same resource, only the current one is modeled.

pub mod admin_user;
pub mod banner;
pub mod campaign;
pub mod contribution;
pub mod dorm;
pub mod grade;
pub mod message;
pub mod moment;
pub mod museum;
pub mod rating;
pub mod rating_admin;
pub mod ticket;
pub mod user;

use serde::{Deserialize, Serialize};

/// Page of an admin listing. The rating and message back-ends answer
/// `{ records, current }`, the museum back-end `{ list, page }`; both decode
/// into this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paged<T> {
    #[serde(alias = "list")]
    pub records: Vec<T>,
    pub total: u64,
    #[serde(default, alias = "page")]
    pub current: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub pages: u32,
}

/// Page and size pair for admin listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
