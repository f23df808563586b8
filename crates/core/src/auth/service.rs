//! Auth service: credential validation and token issuance.

use std::sync::Arc;

use librarium_shared::auth::LoginResponse;
use librarium_shared::config::AuthConfig;
use librarium_shared::jwt::{JwtError, JwtService};

/// Authentication service over a single statically configured identity.
///
/// There is no user store: submitted credentials are compared against the
/// configured expected username and password, and a successful match yields
/// a signed, time-boxed bearer token.
#[derive(Debug, Clone)]
pub struct AuthService {
    expected: AuthConfig,
    jwt: Arc<JwtService>,
}

impl AuthService {
    /// Creates a new auth service from the expected credentials and a JWT
    /// service for signing.
    #[must_use]
    pub const fn new(expected: AuthConfig, jwt: Arc<JwtService>) -> Self {
        Self { expected, jwt }
    }

    /// Compares the submitted credentials against the configured ones.
    ///
    /// Exact byte-for-byte equality: no case folding, no trimming, no
    /// normalization of any kind.
    #[must_use]
    pub fn validate_credentials(&self, username: &str, password: &str) -> bool {
        username == self.expected.username && password == self.expected.password
    }

    /// Authenticates and issues a token bundle.
    ///
    /// Returns `None` when the credentials do not match; the caller maps
    /// that to an unauthorized response.
    ///
    /// # Errors
    ///
    /// Returns `JwtError` if token signing fails.
    pub fn login(&self, username: &str, password: &str) -> Result<Option<LoginResponse>, JwtError> {
        if !self.validate_credentials(username, password) {
            return Ok(None);
        }

        let issued = self.jwt.issue(username)?;

        Ok(Some(LoginResponse {
            access_token: issued.token,
            token_type: "Bearer",
            expires_at_utc: issued.expires_at,
        }))
    }
}
