//! Buffered HTTP response.

use std::collections::HashMap;

use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::error::{Error, ErrorKind, Result};

/// A fully received HTTP response.
///
/// The body is read eagerly by the transport so that response handlers can
/// inspect the status before deciding whether to decode anything.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    headers: HashMap<String, String>,
    body: Bytes,
}

impl Response {
    /// Create a response from its parts.
    pub fn new(
        status: u16,
        headers: impl IntoIterator<Item = (String, String)>,
        body: impl Into<Bytes>,
    ) -> Self {
        // Normalize header names to lowercase for case-insensitive lookups
        let headers = headers
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();

        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Shorthand for a response with a JSON body.
    pub fn with_json(status: u16, body: &serde_json::Value) -> Self {
        Self::new(
            status,
            [("content-type".to_string(), "application/json".to_string())],
            body.to_string(),
        )
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Canonical reason phrase for the status code, e.g. `Not Found`.
    pub fn status_text(&self) -> &'static str {
        reqwest::StatusCode::from_u16(self.status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("")
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(|s| s.as_str())
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Raw body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String> {
        String::from_utf8(self.body.to_vec()).map_err(|e| {
            Error::with_source(
                ErrorKind::Transport("Failed to decode response as UTF-8".to_string()),
                e,
            )
        })
    }

    /// Deserialize the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let resp = Response::new(
            200,
            [("Content-Type".to_string(), "application/json".to_string())],
            "{}",
        );
        assert_eq!(resp.content_type(), Some("application/json"));
        assert_eq!(resp.header("CONTENT-TYPE"), Some("application/json"));
        assert_eq!(resp.header("etag"), None);
    }

    #[test]
    fn test_success_range() {
        assert!(Response::new(200, [], "").is_success());
        assert!(Response::new(204, [], "").is_success());
        assert!(!Response::new(304, [], "").is_success());
        assert!(!Response::new(404, [], "").is_success());
    }

    #[test]
    fn test_status_text() {
        assert_eq!(Response::new(404, [], "").status_text(), "Not Found");
        assert_eq!(Response::new(201, [], "").status_text(), "Created");
        assert_eq!(Response::new(599, [], "").status_text(), "");
    }

    #[test]
    fn test_json_decoding() {
        let resp = Response::with_json(200, &serde_json::json!({"id": "001"}));
        let value: serde_json::Value = resp.json().unwrap();
        assert_eq!(value["id"], "001");

        let bad = Response::new(200, [], "not json");
        let err = bad.json::<serde_json::Value>().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Json(_)));
    }

    #[test]
    fn test_text() {
        let resp = Response::new(200, [], "hello");
        assert_eq!(resp.text().unwrap(), "hello");

        let invalid = Response::new(200, [], vec![0xff, 0xfe]);
        assert!(invalid.text().is_err());
    }
}
