//! Structured error document returned for non-2xx responses.

use std::fmt;

use serde::{Deserialize, Serialize};

use forcelink_client::Response;

use crate::error::{Error, ErrorKind, Result};

/// A single error reported by the service.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServiceError {
    pub message: String,
    #[serde(rename = "errorCode")]
    pub error_code: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_code, self.message)
    }
}

/// The decoded error payload of a failed call, with the status it came with.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub status: u16,
    pub status_text: String,
    pub errors: Vec<ServiceError>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope {
    Many(Vec<ServiceError>),
    One(ServiceError),
}

impl ErrorResponse {
    /// Decode the error document from a non-2xx response.
    ///
    /// The service normally answers with an array; a lone error object is
    /// accepted as a one-element list.
    pub fn from_response(response: &Response) -> Result<Self> {
        if response.is_success() {
            return Err(Error::new(ErrorKind::Malformed(format!(
                "status {} is not an error response",
                response.status()
            ))));
        }

        let envelope = serde_json::from_slice(response.body()).map_err(|e| {
            Error::with_source(
                ErrorKind::Malformed(format!(
                    "HTTP {} {}: undecodable error body: {e}",
                    response.status(),
                    response.status_text()
                )),
                e,
            )
        })?;
        let errors = match envelope {
            Envelope::Many(errors) => errors,
            Envelope::One(error) => vec![error],
        };

        Ok(Self {
            status: response.status(),
            status_text: response.status_text().to_string(),
            errors,
        })
    }

    /// Returns true if any reported error carries `code`.
    pub fn has_error_code(&self, code: &str) -> bool {
        self.errors.iter().any(|e| e.error_code == code)
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error response ({} {}) with {} error(s)",
            self.status,
            self.status_text,
            self.errors.len()
        )?;
        for (i, error) in self.errors.iter().enumerate() {
            write!(f, "{}{i}: {error}", if i == 0 { ": " } else { "; " })?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorResponse {}
