//! OAuth 2.0 username-password flow.
//!
//! The exchange is sent through a [`Transport`] so that the same HTTP stack
//! (and the same mocks in tests) serve both the token endpoint and the
//! resources it protects.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use forcelink_client::{Request, RequestMethod, Response, Transport};

use crate::credentials::PasswordCredentials;
use crate::error::{Error, ErrorKind, Result};

/// Exchanges [`PasswordCredentials`] for tokens at `<host>/services/oauth2/token`.
#[derive(Debug, Clone)]
pub struct PasswordGrant {
    credentials: PasswordCredentials,
}

impl PasswordGrant {
    /// Create a grant for the given credentials.
    pub fn new(credentials: PasswordCredentials) -> Self {
        Self { credentials }
    }

    /// The credentials this grant presents.
    pub fn credentials(&self) -> &PasswordCredentials {
        &self.credentials
    }

    /// Build the form-encoded token request.
    pub fn token_request(&self) -> Request {
        Request::new(RequestMethod::Post, self.credentials.token_url())
            .form(self.credentials.grant_form())
    }

    /// Request a new token.
    ///
    /// Credentials are not logged.
    #[instrument(skip(self, transport), fields(username = %self.credentials.username()))]
    pub async fn request_token<T: Transport>(&self, transport: &T) -> Result<TokenResponse> {
        let response = transport.send(self.token_request()).await?;
        debug!(status = response.status(), "Token endpoint answered");
        handle_token_response(&response)
    }
}

/// Interpret the token endpoint's answer.
///
/// Anything other than 200 is a failure; the OAuth error document is
/// surfaced when the body carries one.
fn handle_token_response(response: &Response) -> Result<TokenResponse> {
    let status = response.status();
    if status != 200 {
        return Err(match response.json::<OAuthErrorResponse>() {
            Ok(error) => Error::new(ErrorKind::OAuth {
                status,
                error: error.error,
                description: error.error_description,
            }),
            Err(_) => Error::new(ErrorKind::UnexpectedStatus(status)),
        });
    }

    let token: TokenResponse = serde_json::from_slice(response.body())?;
    Ok(token)
}

/// Token response from OAuth.
///
/// Sensitive fields are redacted in Debug output.
#[derive(Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    /// Access token.
    pub access_token: String,
    /// Token type (usually "Bearer").
    #[serde(default)]
    pub token_type: Option<String>,
    /// Signature for verification.
    #[serde(default)]
    pub signature: Option<String>,
    /// Instance URL.
    #[serde(default)]
    pub instance_url: Option<String>,
    /// User ID URL.
    #[serde(default)]
    pub id: Option<String>,
    /// Issued at timestamp.
    #[serde(default)]
    pub issued_at: Option<String>,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("signature", &self.signature.as_ref().map(|_| "[REDACTED]"))
            .field("instance_url", &self.instance_url)
            .field("id", &self.id)
            .field("issued_at", &self.issued_at)
            .finish()
    }
}

/// OAuth error response.
#[derive(Debug, Deserialize)]
struct OAuthErrorResponse {
    error: String,
    #[serde(default)]
    error_description: String,
}
