//! Authentication endpoints: password, campus network and QQ OAuth.
//!
//! Every method here returns the raw envelope; the session store decides
//! what a success means for local state.

#![allow(clippy::missing_errors_doc)]

use serde::Serialize;

use super::{ApiClient, ApiError, ApiResponse, Query};
use crate::types::user::{CampusCaptcha, LoginResponse, QqAuthorizeUrl, QqData, QqLoginOutcome};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CredentialsBody<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(tag = "loginType", rename_all = "lowercase")]
enum LoginBody<'a> {
    Normal {
        username: &'a str,
        password: &'a str,
    },
    Campus {
        #[serde(rename = "campusAccount")]
        campus_account: &'a str,
        #[serde(rename = "campusPassword")]
        campus_password: &'a str,
        #[serde(rename = "captchaCode")]
        captcha_code: &'a str,
        #[serde(rename = "jsessionId")]
        jsession_id: &'a str,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QqAccountBody<'a> {
    username: &'a str,
    password: &'a str,
    qq_data: &'a QqData,
}

#[derive(Serialize)]
struct OAuthCodeBody<'a> {
    code: &'a str,
    state: &'a str,
}

impl ApiClient {
    /// `POST /auth/register`
    pub async fn register(&self, username: &str, password: &str) -> Result<ApiResponse<LoginResponse>, ApiError> {
        self.post("/auth/register", &CredentialsBody { username, password })
            .await
    }

    /// `POST /auth/login` with `loginType = normal`.
    pub async fn login(&self, username: &str, password: &str) -> Result<ApiResponse<LoginResponse>, ApiError> {
        self.post("/auth/login", &LoginBody::Normal { username, password })
            .await
    }

    /// `GET /campus/captcha`: captcha image plus the campus-side session id
    /// that must accompany the answer.
    pub async fn campus_captcha(&self) -> Result<ApiResponse<CampusCaptcha>, ApiError> {
        self.get("/campus/captcha", Query::new()).await
    }

    /// `POST /auth/login` with `loginType = campus`.
    pub async fn login_by_campus(
        &self,
        campus_account: &str,
        campus_password: &str,
        captcha_code: &str,
        jsession_id: &str,
    ) -> Result<ApiResponse<LoginResponse>, ApiError> {
        let body = LoginBody::Campus { campus_account, campus_password, captcha_code, jsession_id };
        self.post("/auth/login", &body).await
    }

    /// `GET /auth/qq/authorize-url`
    pub async fn qq_authorize_url(&self) -> Result<ApiResponse<QqAuthorizeUrl>, ApiError> {
        self.get("/auth/qq/authorize-url", Query::new()).await
    }

    /// `POST /auth/qq-login`: exchanges the OAuth code for a session or a
    /// binding prompt.
    pub async fn qq_login(&self, code: &str, state: &str) -> Result<ApiResponse<QqLoginOutcome>, ApiError> {
        self.post("/auth/qq-login", &OAuthCodeBody { code, state })
            .await
    }

    /// `POST /auth/qq-bind`: link the QQ identity to an existing account.
    pub async fn qq_bind(
        &self,
        username: &str,
        password: &str,
        qq_data: &QqData,
    ) -> Result<ApiResponse<LoginResponse>, ApiError> {
        self.post("/auth/qq-bind", &QqAccountBody { username, password, qq_data })
            .await
    }

    /// `POST /auth/qq-register`: create an account for the QQ identity.
    pub async fn qq_register(
        &self,
        username: &str,
        password: &str,
        qq_data: &QqData,
    ) -> Result<ApiResponse<LoginResponse>, ApiError> {
        self.post("/auth/qq-register", &QqAccountBody { username, password, qq_data })
            .await
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
