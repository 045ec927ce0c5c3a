//! Access tokens and their expiry.

use chrono::{DateTime, Duration, Utc};

use crate::oauth::TokenResponse;

/// An access token held by the [`Authenticator`](crate::Authenticator).
///
/// The token is considered expired strictly after `expires_at`, using the
/// wall clock at the moment of the check.
#[derive(Clone)]
pub struct AccessToken {
    access_token: String,
    token_type: String,
    expires_at: DateTime<Utc>,
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

impl AccessToken {
    /// Create a token that expires at the given instant.
    pub fn new(
        access_token: impl Into<String>,
        token_type: impl Into<String>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: token_type.into(),
            expires_at,
        }
    }

    /// Build a token from an endpoint response, valid for `lifetime` from `issued`.
    pub fn from_response(response: TokenResponse, issued: DateTime<Utc>, lifetime: Duration) -> Self {
        let token_type = response
            .token_type
            .unwrap_or_else(|| crate::DEFAULT_TOKEN_TYPE.to_string());
        let expires_at = issued
            .checked_add_signed(lifetime)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self::new(response.access_token, token_type, expires_at)
    }

    /// Returns true once the current time is past `expires_at`.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Expiry check against an explicit instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// The value of the `Authorization` header, `<token_type> <access_token>`.
    pub fn authorization(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }

    /// The raw access token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Token type reported by the endpoint, usually `Bearer`.
    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// Expiry instant.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}
