//! Client configuration parsed from environment variables.

pub const DEFAULT_BASE_URL: &str = "https://api.xmyzstudent.com/api/v2";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while building a [`ClientConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The API base URL was set but empty.
    #[error("CAMPUS_API_BASE_URL must not be empty")]
    EmptyBaseUrl,

    /// The API base URL does not use an HTTP scheme.
    #[error("unsupported base URL scheme: {0}")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root including the version prefix, without a trailing slash.
    pub base_url: String,
    pub timeouts: Timeouts,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_owned(), timeouts: Timeouts::default() }
    }
}

impl Timeouts {
    /// Read `CAMPUS_API_TIMEOUT_SECS` and `CAMPUS_API_CONNECT_TIMEOUT_SECS`,
    /// falling back to the defaults for unset or unparsable values.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            request_secs: env_parse("CAMPUS_API_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse("CAMPUS_API_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `CAMPUS_API_BASE_URL`: default `https://api.xmyzstudent.com/api/v2`
    /// - `CAMPUS_API_TIMEOUT_SECS`: default 15
    /// - `CAMPUS_API_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the base URL is empty or not HTTP(S).
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var("CAMPUS_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        Self::new(&base_url, Timeouts::from_env())
    }

    /// Validate and normalize an explicit base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the base URL is empty or not HTTP(S).
    pub fn new(base_url: &str, timeouts: Timeouts) -> Result<Self, ConfigError> {
        let base_url = normalize_base_url(base_url)?;
        Ok(Self { base_url, timeouts })
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyBaseUrl);
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::UnsupportedScheme(trimmed.to_owned()));
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
