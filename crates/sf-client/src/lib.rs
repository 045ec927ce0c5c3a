//! # forcelink-client
//!
//! Transport layer for the forcelink object-service client.
//!
//! This crate provides the request/response vocabulary shared by the upper
//! layers and the [`Transport`] capability they send through:
//! - [`Request`] with method, URL, headers and an optional JSON or form body
//! - [`Response`], fully buffered so handlers can branch on status first
//! - [`HttpClient`], the `reqwest` implementation of [`Transport`]
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    forcelink-rest                           │
//! │  (RestClient, Operation, QueryBuilder, RequestContext)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    forcelink-auth                           │
//! │  Authenticator<T: Transport>: token exchange + header       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    HttpClient (this crate)                  │
//! │  - Raw HTTP via reqwest, timeouts, compression              │
//! │  - Request/response tracing                                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use forcelink_client::{HttpClient, Request, RequestMethod, Transport};
//!
//! let http = HttpClient::default_client()?;
//! let response = http
//!     .send(Request::new(RequestMethod::Get, "https://na1.salesforce.com/services/data"))
//!     .await?;
//! assert!(response.is_success());
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;
mod transport;

pub use client::HttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use request::{Request, RequestBody, RequestMethod};
pub use response::Response;
pub use transport::Transport;

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("forcelink/", env!("CARGO_PKG_VERSION"));
