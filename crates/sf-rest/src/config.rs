//! Client configuration.

use serde::Deserialize;

use forcelink_auth::PasswordCredentials;

use crate::context::MAX_API_VERSION;
use crate::error::{Error, ErrorKind, Result};

/// Token lifetime used when none (or a non-positive one) is configured.
pub const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 3600;

/// Everything a [`RestClient`](crate::RestClient) needs to reach an org.
///
/// Deserializes from a flat document:
///
/// ```json
/// {
///   "host": "https://na1.salesforce.com",
///   "client_id": "...",
///   "client_secret": "...",
///   "username": "...",
///   "password": "...",
///   "expires_in": 3600,
///   "api_version": 37
/// }
/// ```
///
/// A document without `expires_in` or `api_version` gets
/// [`DEFAULT_TOKEN_LIFETIME_SECS`] and the newest supported version (37)
/// without a warning. Explicit values are taken as given here; the client
/// normalizes them once at construction and warns about the ones it replaces.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    credentials: PasswordCredentials,
    #[serde(default = "default_expires_in")]
    expires_in: i64,
    #[serde(default = "default_api_version")]
    api_version: i64,
}

fn default_expires_in() -> i64 {
    DEFAULT_TOKEN_LIFETIME_SECS
}

fn default_api_version() -> i64 {
    i64::from(MAX_API_VERSION)
}

impl Config {
    /// Configuration with the default token lifetime and API version.
    pub fn new(credentials: PasswordCredentials) -> Self {
        Self {
            credentials,
            expires_in: default_expires_in(),
            api_version: default_api_version(),
        }
    }

    /// Load from environment variables.
    ///
    /// Credentials come from [`PasswordCredentials::from_env`]; the optional
    /// `SF_TOKEN_LIFETIME` (seconds) and `SF_API_VERSION` override the
    /// defaults.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new(PasswordCredentials::from_env()?);
        if let Some(secs) = optional_env_i64("SF_TOKEN_LIFETIME")? {
            config.expires_in = secs;
        }
        if let Some(version) = optional_env_i64("SF_API_VERSION")? {
            config.api_version = version;
        }
        Ok(config)
    }

    /// Set the token lifetime in seconds.
    pub fn with_expires_in(mut self, secs: i64) -> Self {
        self.expires_in = secs;
        self
    }

    /// Set the target API version.
    pub fn with_api_version(mut self, version: i64) -> Self {
        self.api_version = version;
        self
    }

    /// Credentials for the token exchange.
    pub fn credentials(&self) -> &PasswordCredentials {
        &self.credentials
    }

    /// Instance host.
    pub fn host(&self) -> &str {
        self.credentials.host()
    }

    /// Configured token lifetime in seconds, before normalization.
    pub fn expires_in(&self) -> i64 {
        self.expires_in
    }

    /// Configured API version, before normalization.
    pub fn api_version(&self) -> i64 {
        self.api_version
    }
}

fn optional_env_i64(name: &str) -> Result<Option<i64>> {
    match std::env::var(name) {
        Ok(value) => value.trim().parse().map(Some).map_err(|e| {
            Error::with_source(
                ErrorKind::Config(format!("{name} must be an integer, got {value:?}")),
                e,
            )
        }),
        Err(_) => Ok(None),
    }
}
