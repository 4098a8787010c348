//! Account, login and binding shapes.

use serde::{Deserialize, Serialize};

/// Cached profile snapshot returned with every login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub gender: i32,
    #[serde(default)]
    pub signature: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
}

/// Extra identity attached to accounts that logged in through the campus network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusInfo {
    pub name: String,
    pub class_alias: String,
    pub student_id: String,
}

/// QQ identity returned by the OAuth exchange when no account is linked yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QqData {
    pub openid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unionid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
    /// Server expiry as epoch seconds.
    pub expires_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campus_info: Option<CampusInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QqNeedBinding {
    pub need_binding: bool,
    pub openid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unionid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl QqNeedBinding {
    /// The QQ identity to submit with `qq_bind`/`qq_register`.
    #[must_use]
    pub fn qq_data(&self) -> QqData {
        QqData {
            openid: self.openid.clone(),
            unionid: self.unionid.clone(),
            nickname: self.nickname.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

/// `POST /auth/qq-login` answers with either a session or a binding prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QqLoginOutcome {
    LoggedIn(LoginResponse),
    NeedsBinding(QqNeedBinding),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusCaptcha {
    /// Base64 data URL of the captcha image.
    pub captcha_image: String,
    #[serde(rename = "jsessionId")]
    pub jsession_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QqAuthorizeUrl {
    pub authorize_url: String,
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionList {
    pub permissions: Vec<String>,
}

// =============================================================================
// PROFILE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInfo {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub gender: i32,
    #[serde(default)]
    pub signature: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub birthdate: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
}

impl UpdateProfileRequest {
    /// Copy the fields this request changes onto a cached user.
    pub fn apply_to(&self, user: &mut UserInfo) {
        if let Some(nickname) = &self.nickname {
            user.nickname.clone_from(nickname);
        }
        if let Some(gender) = self.gender {
            user.gender = gender;
        }
        if let Some(signature) = &self.signature {
            user.signature.clone_from(signature);
        }
        if let Some(birthdate) = &self.birthdate {
            user.birthdate = Some(birthdate.clone());
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_password: Option<String>,
    pub new_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarInfo {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

// =============================================================================
// BINDINGS
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusBindingInfo {
    pub is_bound: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campus_account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind_time: Option<String>,
}

impl CampusBindingInfo {
    #[must_use]
    pub fn unbound() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindCampusRequest {
    pub campus_account: String,
    pub campus_password: String,
    pub captcha_code: String,
    #[serde(rename = "jsessionId")]
    pub jsession_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QqBindingInfo {
    pub is_bound: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind_time: Option<String>,
}

impl QqBindingInfo {
    #[must_use]
    pub fn unbound() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindQqRequest {
    pub code: String,
    pub state: String,
}

// =============================================================================
// SMS
// =============================================================================

/// Purpose tag sent with SMS verification codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmsPurpose {
    Login,
    Register,
    BindPhone,
    ResetPassword,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsSendResponse {
    #[serde(default)]
    pub expire_seconds: Option<u32>,
    #[serde(default)]
    pub cooldown_seconds: Option<u32>,
}

/// SMS login/register payload: a regular session plus a new-account flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsLoginResponse {
    #[serde(flatten)]
    pub login: LoginResponse,
    #[serde(default)]
    pub is_new_user: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsBindingInfo {
    pub bound: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind_time: Option<String>,
}

impl SmsBindingInfo {
    #[must_use]
    pub fn unbound() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsCheckResponse {
    pub bound: bool,
}
