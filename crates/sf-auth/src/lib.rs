//! # forcelink-auth
//!
//! Bearer-token authentication for the forcelink object-service client.
//!
//! ## Security
//!
//! - Tokens, secrets and passwords are redacted in Debug output
//! - Tracing skips credential parameters
//! - Error messages sanitize any credential data
//!
//! ## Flow
//!
//! [`Authenticator`] is itself a [`Transport`](forcelink_client::Transport):
//! it wraps the transport that reaches the service, runs the OAuth 2.0
//! username-password grant against `<host>/services/oauth2/token` when no
//! valid token is cached, and adds `Authorization: <token_type> <token>` to
//! every request it forwards.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use forcelink_auth::{Authenticator, PasswordCredentials};
//! use forcelink_client::HttpClient;
//!
//! let creds = PasswordCredentials::from_env()?;
//! let auth = Authenticator::new(creds, Duration::from_secs(3600), HttpClient::default_client()?);
//! ```

mod authenticator;
mod credentials;
mod error;
mod oauth;
mod token;

pub use authenticator::Authenticator;
pub use credentials::PasswordCredentials;
pub use error::{Error, ErrorKind, Result};
pub use oauth::{PasswordGrant, TokenResponse};
pub use token::AccessToken;

/// Path of the OAuth token endpoint, relative to the instance host.
pub const TOKEN_PATH: &str = "/services/oauth2/token";

/// Token type assumed when the endpoint does not report one.
pub const DEFAULT_TOKEN_TYPE: &str = "Bearer";
