//! Account endpoints: permissions, profile, bindings, password and avatar.

#![allow(clippy::missing_errors_doc)]

use super::{ApiClient, ApiError, ApiResponse, MessageAck, Query};
use crate::types::user::{
    AvatarInfo, BindCampusRequest, BindQqRequest, CampusBindingInfo, CampusCaptcha, ChangePasswordRequest,
    PermissionList, ProfileInfo, QqAuthorizeUrl, QqBindingInfo, UpdateProfileRequest,
};

impl ApiClient {
    /// `GET /permissions/my`
    pub async fn my_permissions(&self) -> Result<ApiResponse<PermissionList>, ApiError> {
        self.get("/permissions/my", Query::new()).await
    }

    /// `GET /user/profile`
    pub async fn profile(&self) -> Result<ApiResponse<ProfileInfo>, ApiError> {
        self.get("/user/profile", Query::new()).await
    }

    /// `PUT /user/profile`
    pub async fn update_profile(&self, req: &UpdateProfileRequest) -> Result<ApiResponse<ProfileInfo>, ApiError> {
        self.put("/user/profile", req).await
    }

    // ----- campus network binding -----

    /// `GET /campus/captcha`, the same captcha used by campus login.
    pub async fn binding_captcha(&self) -> Result<ApiResponse<CampusCaptcha>, ApiError> {
        self.campus_captcha().await
    }

    /// `GET /user/campus-binding`
    pub async fn campus_binding(&self) -> Result<ApiResponse<CampusBindingInfo>, ApiError> {
        self.get("/user/campus-binding", Query::new()).await
    }

    /// `POST /user/bind-campus`
    pub async fn bind_campus(&self, req: &BindCampusRequest) -> Result<ApiResponse<CampusBindingInfo>, ApiError> {
        self.post("/user/bind-campus", req).await
    }

    /// `POST /user/rebind-campus`: refreshes class placement for an
    /// already-bound account.
    pub async fn rebind_campus(&self, req: &BindCampusRequest) -> Result<ApiResponse<CampusBindingInfo>, ApiError> {
        self.post("/user/rebind-campus", req).await
    }

    /// `DELETE /user/unbind-campus`
    pub async fn unbind_campus(&self) -> Result<ApiResponse<MessageAck>, ApiError> {
        self.delete("/user/unbind-campus").await
    }

    // ----- QQ binding -----

    /// `GET /user/qq-binding`
    pub async fn qq_binding(&self) -> Result<ApiResponse<QqBindingInfo>, ApiError> {
        self.get("/user/qq-binding", Query::new()).await
    }

    /// `GET /user/qq/authorize-url`
    pub async fn qq_bind_authorize_url(&self) -> Result<ApiResponse<QqAuthorizeUrl>, ApiError> {
        self.get("/user/qq/authorize-url", Query::new()).await
    }

    /// `POST /user/bind-qq`
    pub async fn bind_qq(&self, req: &BindQqRequest) -> Result<ApiResponse<QqBindingInfo>, ApiError> {
        self.post("/user/bind-qq", req).await
    }

    /// `DELETE /user/unbind-qq`
    pub async fn unbind_qq(&self) -> Result<ApiResponse<MessageAck>, ApiError> {
        self.delete("/user/unbind-qq").await
    }

    // ----- password & avatar -----

    /// `GET /user/has-password`
    pub async fn has_password(&self) -> Result<ApiResponse<bool>, ApiError> {
        self.get("/user/has-password", Query::new()).await
    }

    /// `PUT /user/password`. `old_password` may be omitted when none is set yet.
    pub async fn change_password(&self, req: &ChangePasswordRequest) -> Result<ApiResponse<MessageAck>, ApiError> {
        self.put("/user/password", req).await
    }

    /// `DELETE /user/avatar`
    pub async fn delete_avatar(&self) -> Result<ApiResponse<MessageAck>, ApiError> {
        self.delete("/user/avatar").await
    }

    /// `GET /user/users/{id}/avatar` (public)
    pub async fn user_avatar(&self, user_id: i64) -> Result<ApiResponse<AvatarInfo>, ApiError> {
        self.get(&format!("/user/users/{user_id}/avatar"), Query::new())
            .await
    }
}
