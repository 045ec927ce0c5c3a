//! Error types for forcelink-rest.

use crate::error_response::ErrorResponse;

/// Result type alias for forcelink-rest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for forcelink-rest operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Shorthand for [`ErrorKind::MissingField`].
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingField(field.into()))
    }

    /// The service-reported errors, if the call failed with a non-2xx response.
    pub fn service_response(&self) -> Option<&ErrorResponse> {
        match &self.kind {
            ErrorKind::Service(response) => Some(response),
            _ => None,
        }
    }

    /// Returns true if the token exchange failed.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.kind, ErrorKind::AuthenticationFailed(_))
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// A required operation field was empty; nothing was sent.
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// The token endpoint rejected the credentials or answered with an
    /// undecodable body; the target request was not sent.
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The response status did not match the operation's success code.
    #[error("Unexpected status {observed}, expected {expected}")]
    UnexpectedStatus { observed: u16, expected: u16 },

    /// The service answered with a non-2xx status and an error document.
    #[error("{0}")]
    Service(ErrorResponse),

    /// A request or response body could not be encoded or decoded.
    #[error("Malformed JSON: {0}")]
    Malformed(String),

    /// Failure reported by the transport itself.
    #[error("Transport failure: {0}")]
    Transport(String),

    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<forcelink_client::Error> for Error {
    fn from(err: forcelink_client::Error) -> Self {
        use forcelink_client::ErrorKind as ClientErrorKind;

        let kind = match &err.kind {
            ClientErrorKind::Authentication(msg) => ErrorKind::AuthenticationFailed(msg.clone()),
            ClientErrorKind::Json(msg) | ClientErrorKind::Serialization(msg) => {
                ErrorKind::Malformed(msg.clone())
            }
            ClientErrorKind::Config(msg) => ErrorKind::Config(msg.clone()),
            _ => ErrorKind::Transport(err.to_string()),
        };
        Error::with_source(kind, err)
    }
}

impl From<forcelink_auth::Error> for Error {
    fn from(err: forcelink_auth::Error) -> Self {
        use forcelink_auth::ErrorKind as AuthErrorKind;

        let kind = match &err.kind {
            AuthErrorKind::EnvVar(_) | AuthErrorKind::InvalidCredentials(_) => {
                ErrorKind::Config(err.to_string())
            }
            _ => ErrorKind::AuthenticationFailed(err.to_string()),
        };
        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Malformed(err.to_string()), err)
    }
}
