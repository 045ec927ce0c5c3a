//! Username/password credentials for the OAuth password grant.
//!
//! Debug output redacts the secret and the password.

use serde::Deserialize;

use crate::error::{Error, ErrorKind, Result};

/// Connected-app and user credentials used to obtain access tokens.
#[derive(Clone, Deserialize)]
pub struct PasswordCredentials {
    host: String,
    client_id: String,
    client_secret: String,
    username: String,
    password: String,
}

impl std::fmt::Debug for PasswordCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordCredentials")
            .field("host", &self.host)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl PasswordCredentials {
    /// Create credentials from their parts.
    pub fn new(
        host: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Load credentials from environment variables.
    ///
    /// Required environment variables (the `SALESFORCE_` spelling is accepted
    /// as a fallback for each):
    /// - `SF_INSTANCE_URL`
    /// - `SF_CLIENT_ID`
    /// - `SF_CLIENT_SECRET`
    /// - `SF_USERNAME`
    /// - `SF_PASSWORD`
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(
            env_var("SF_INSTANCE_URL", "SALESFORCE_INSTANCE_URL")?,
            env_var("SF_CLIENT_ID", "SALESFORCE_CLIENT_ID")?,
            env_var("SF_CLIENT_SECRET", "SALESFORCE_CLIENT_SECRET")?,
            env_var("SF_USERNAME", "SALESFORCE_USERNAME")?,
            env_var("SF_PASSWORD", "SALESFORCE_PASSWORD")?,
        ))
    }

    /// Instance host without a trailing slash, e.g. `https://na1.salesforce.com`.
    pub fn host(&self) -> &str {
        self.host.trim_end_matches('/')
    }

    /// Connected-app consumer key.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Login username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// URL of the OAuth token endpoint on this host.
    pub fn token_url(&self) -> String {
        format!("{}{}", self.host(), crate::TOKEN_PATH)
    }

    /// Form fields for the `password` grant.
    pub(crate) fn grant_form(&self) -> [(&'static str, &str); 5] {
        [
            ("grant_type", "password"),
            ("client_id", &self.client_id),
            ("client_secret", &self.client_secret),
            ("username", &self.username),
            ("password", &self.password),
        ]
    }

    /// Returns an error naming the first empty field.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("host", &self.host),
            ("client_id", &self.client_id),
            ("username", &self.username),
        ];
        match fields.iter().find(|(_, value)| value.is_empty()) {
            Some((name, _)) => Err(Error::new(ErrorKind::InvalidCredentials(format!(
                "{name} is empty"
            )))),
            None => Ok(()),
        }
    }
}

fn env_var(primary: &str, fallback: &str) -> Result<String> {
    std::env::var(primary)
        .or_else(|_| std::env::var(fallback))
        .map_err(|_| Error::new(ErrorKind::EnvVar(primary.to_string())))
}
