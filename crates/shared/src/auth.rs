//! Authentication claims and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// JWT claims carried by access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the authenticated username).
    pub sub: String,
    /// Token issuer.
    pub iss: String,
    /// Token audience.
    pub aud: String,
    /// Issued-at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a username.
    #[must_use]
    pub fn new(username: &str, issuer: &str, audience: &str, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: username.to_string(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            iat: Utc::now().timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the authenticated username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.sub
    }
}

/// Login request payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login username.
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    /// Login password.
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Token bundle returned after a successful login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// The signed bearer token.
    pub access_token: String,
    /// Token type, always `Bearer`.
    pub token_type: &'static str,
    /// Expiry instant in UTC.
    pub expires_at_utc: DateTime<Utc>,
}
