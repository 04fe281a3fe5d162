//! Admin login for the mock backend.
//!
//! There is exactly one hardcoded account. This is a stand-in until the real
//! admin API exists, not an authentication scheme.
use serde::{Deserialize, Serialize};
use thiserror::Error;

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin123";
const MOCK_TOKEN: &str = "mock-jwt-token";

/// Key under which the web client persists the session.
pub const SESSION_STORAGE_KEY: &str = "admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Vui lòng nhập tên đăng nhập và mật khẩu")]
    EmptyField,
    #[error("Tên đăng nhập hoặc mật khẩu không chính xác")]
    InvalidCredentials,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// A logged-in admin, as stored by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSession {
    pub username: String,
    pub role: String,
    pub token: String,
}

impl AdminSession {
    /// # Errors
    ///
    /// Returns an error if `json` is not a serialized session.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// # Errors
    ///
    /// Returns an error if the session cannot be serialized.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Check `credentials` against the mock admin account.
///
/// # Errors
///
/// [`AuthError::EmptyField`] when either field is blank, otherwise
/// [`AuthError::InvalidCredentials`] on mismatch.
pub fn authenticate(credentials: &Credentials) -> Result<AdminSession, AuthError> {
    let username = credentials.username.trim();
    if username.is_empty() || credentials.password.is_empty() {
        return Err(AuthError::EmptyField);
    }
    if username != ADMIN_USERNAME || credentials.password != ADMIN_PASSWORD {
        log::warn!("rejected admin login for {username:?}");
        return Err(AuthError::InvalidCredentials);
    }
    Ok(AdminSession {
        username: username.to_string(),
        role: "admin".to_string(),
        token: MOCK_TOKEN.to_string(),
    })
}
