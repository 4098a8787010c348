//! Campus, dormitory building and ringtone time-period endpoints.

#![allow(clippy::missing_errors_doc)]

use super::{ApiClient, ApiError, ApiResponse, Ignored, Query};
use crate::types::campaign::Campaign;
use crate::types::dorm::{
    Building, BuildingTimePeriodLink, Campus, CreateBuildingRequest, CreateCampusRequest, CreateTimePeriodRequest,
    TimePeriod, UpdateBuildingRequest, UpdateCampusRequest, UpdateTimePeriodRequest,
};

impl ApiClient {
    // ----- campuses -----

    pub async fn campuses(&self) -> Result<ApiResponse<Vec<Campus>>, ApiError> {
        self.get("/campuses", Query::new()).await
    }

    pub async fn campus(&self, id: i64) -> Result<ApiResponse<Campus>, ApiError> {
        self.get(&format!("/campuses/{id}"), Query::new()).await
    }

    pub async fn campus_buildings(&self, id: i64) -> Result<ApiResponse<Vec<Building>>, ApiError> {
        self.get(&format!("/campuses/{id}/buildings"), Query::new())
            .await
    }

    pub async fn campus_campaigns(&self, id: i64) -> Result<ApiResponse<Vec<Campaign>>, ApiError> {
        self.get(&format!("/campuses/{id}/campaigns"), Query::new())
            .await
    }

    // ----- buildings -----

    /// `GET /buildings`, optionally filtered to one campus.
    pub async fn buildings(&self, campus_id: Option<i64>) -> Result<ApiResponse<Vec<Building>>, ApiError> {
        self.get("/buildings", Query::new().with_opt("campusId", campus_id))
            .await
    }

    pub async fn building(&self, id: i64) -> Result<ApiResponse<Building>, ApiError> {
        self.get(&format!("/buildings/{id}"), Query::new()).await
    }

    pub async fn building_time_periods(&self, id: i64) -> Result<ApiResponse<Vec<TimePeriod>>, ApiError> {
        self.get(&format!("/buildings/{id}/time-periods"), Query::new())
            .await
    }

    // ----- time periods -----

    pub async fn time_periods(&self) -> Result<ApiResponse<Vec<TimePeriod>>, ApiError> {
        self.get("/time-periods", Query::new()).await
    }

    pub async fn time_period(&self, id: i64) -> Result<ApiResponse<TimePeriod>, ApiError> {
        self.get(&format!("/time-periods/{id}"), Query::new()).await
    }

    // ----- admin -----

    pub async fn create_campus(&self, req: &CreateCampusRequest) -> Result<ApiResponse<Campus>, ApiError> {
        self.post("/admin/campuses", req).await
    }

    pub async fn update_campus(&self, id: i64, req: &UpdateCampusRequest) -> Result<ApiResponse<Campus>, ApiError> {
        self.put(&format!("/admin/campuses/{id}"), req).await
    }

    pub async fn delete_campus(&self, id: i64) -> Result<ApiResponse<Ignored>, ApiError> {
        self.delete(&format!("/admin/campuses/{id}")).await
    }

    pub async fn create_building(&self, req: &CreateBuildingRequest) -> Result<ApiResponse<Building>, ApiError> {
        self.post("/admin/buildings", req).await
    }

    pub async fn update_building(&self, id: i64, req: &UpdateBuildingRequest) -> Result<ApiResponse<Building>, ApiError> {
        self.put(&format!("/admin/buildings/{id}"), req).await
    }

    pub async fn delete_building(&self, id: i64) -> Result<ApiResponse<Ignored>, ApiError> {
        self.delete(&format!("/admin/buildings/{id}")).await
    }

    pub async fn add_building_time_period(&self, link: BuildingTimePeriodLink) -> Result<ApiResponse<Ignored>, ApiError> {
        self.post("/admin/buildings/time-periods", &link).await
    }

    pub async fn remove_building_time_period(&self, link: BuildingTimePeriodLink) -> Result<ApiResponse<Ignored>, ApiError> {
        self.delete_with_body("/admin/buildings/time-periods", &link)
            .await
    }

    pub async fn create_time_period(&self, req: &CreateTimePeriodRequest) -> Result<ApiResponse<TimePeriod>, ApiError> {
        self.post("/admin/time-periods", req).await
    }

    pub async fn update_time_period(
        &self,
        id: i64,
        req: &UpdateTimePeriodRequest,
    ) -> Result<ApiResponse<TimePeriod>, ApiError> {
        self.put(&format!("/admin/time-periods/{id}"), req).await
    }

    pub async fn delete_time_period(&self, id: i64) -> Result<ApiResponse<Ignored>, ApiError> {
        self.delete(&format!("/admin/time-periods/{id}")).await
    }
}
