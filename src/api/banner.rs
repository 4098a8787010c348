use super::{ApiClient, ApiError, Query};
use crate::types::banner::Banner;

pub const DEFAULT_BANNER_POSITION: &str = "home";

impl ApiClient {
    /// `GET /banners?position=`, unwrapped. A rejected envelope yields an
    /// empty carousel rather than an error.
    ///
    /// # Errors
    ///
    /// Transport-level failures only.
    pub async fn banners(&self, position: Option<&str>) -> Result<Vec<Banner>, ApiError> {
        let position = position
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_BANNER_POSITION);
        let resp = self
            .get::<Vec<Banner>>("/banners", Query::new().with("position", position))
            .await?;
        Ok(resp.success_data().unwrap_or_default())
    }
}

#[cfg(test)]
#[path = "banner_test.rs"]
mod tests;
