//! SMS verification, phone login and phone binding endpoints.

#![allow(clippy::missing_errors_doc)]

use serde::Serialize;

use super::{ApiClient, ApiError, ApiResponse, Ignored, Query};
use crate::types::user::{SmsBindingInfo, SmsCheckResponse, SmsLoginResponse, SmsPurpose, SmsSendResponse};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SendCodeBody<'a> {
    phone_number: &'a str,
    purpose: SmsPurpose,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyCodeBody<'a> {
    phone_number: &'a str,
    code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    purpose: Option<SmsPurpose>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SmsRegisterBody<'a> {
    phone_number: &'a str,
    code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<&'a str>,
}

impl ApiClient {
    /// `POST /sms/send`
    pub async fn send_sms_code(
        &self,
        phone_number: &str,
        purpose: SmsPurpose,
    ) -> Result<ApiResponse<SmsSendResponse>, ApiError> {
        self.post("/sms/send", &SendCodeBody { phone_number, purpose })
            .await
    }

    /// `POST /sms/verify`. `purpose` must match the one used to send.
    pub async fn verify_sms_code(
        &self,
        phone_number: &str,
        code: &str,
        purpose: SmsPurpose,
    ) -> Result<ApiResponse<Ignored>, ApiError> {
        let body = VerifyCodeBody { phone_number, code, purpose: Some(purpose) };
        self.post("/sms/verify", &body).await
    }

    /// `POST /sms/login`. Unknown numbers get a fresh account server-side.
    pub async fn sms_login(&self, phone_number: &str, code: &str) -> Result<ApiResponse<SmsLoginResponse>, ApiError> {
        let body = VerifyCodeBody { phone_number, code, purpose: None };
        self.post("/sms/login", &body).await
    }

    /// `POST /sms/register` with optional chosen credentials.
    pub async fn sms_register(
        &self,
        phone_number: &str,
        code: &str,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<ApiResponse<SmsLoginResponse>, ApiError> {
        let body = SmsRegisterBody { phone_number, code, username, password };
        self.post("/sms/register", &body).await
    }

    /// `POST /sms/bind`
    pub async fn bind_phone(&self, phone_number: &str, code: &str) -> Result<ApiResponse<Ignored>, ApiError> {
        let body = VerifyCodeBody { phone_number, code, purpose: None };
        self.post("/sms/bind", &body).await
    }

    /// `DELETE /sms/unbind`
    pub async fn unbind_phone(&self) -> Result<ApiResponse<Ignored>, ApiError> {
        self.delete("/sms/unbind").await
    }

    /// `GET /sms/binding`
    pub async fn phone_binding(&self) -> Result<ApiResponse<SmsBindingInfo>, ApiError> {
        self.get("/sms/binding", Query::new()).await
    }

    /// `GET /sms/check?phoneNumber=`
    pub async fn check_phone_bound(&self, phone_number: &str) -> Result<ApiResponse<SmsCheckResponse>, ApiError> {
        self.get("/sms/check", Query::new().with("phoneNumber", phone_number))
            .await
    }
}
