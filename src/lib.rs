//! # forcelink
//!
//! Typed client for the Salesforce object service.
//!
//! ## Security
//!
//! - Sensitive data (tokens, secrets, passwords) is redacted in Debug output
//! - Tracing skips credential parameters
//! - Error messages sanitize any credential data
//!
//! ## Crates
//!
//! - **forcelink-client** - Transport layer: requests, buffered responses, reqwest backend
//! - **forcelink-auth** - OAuth 2.0 password grant and the lazily refreshing `Authenticator`
//! - **forcelink-rest** - Operations, SOQL query builder, `RestClient`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use forcelink::{Config, QueryBuilder, QueryResult, RestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RestClient::new(Config::from_env()?)?;
//!
//!     let accounts: QueryResult<serde_json::Value> = client
//!         .query_objects(QueryBuilder::new().select(["Id", "Name"]).from("Account").limit(10))
//!         .await?;
//!
//!     for account in accounts.records {
//!         println!("{}", account["Name"]);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "auth")]
pub use forcelink_auth as auth;
#[cfg(feature = "client")]
pub use forcelink_client as client;
#[cfg(feature = "rest")]
pub use forcelink_rest as rest;

// Re-export commonly used types at the top level
#[cfg(feature = "auth")]
pub use forcelink_auth::{Authenticator, PasswordCredentials};
#[cfg(feature = "client")]
pub use forcelink_client::{ClientConfig, HttpClient, Transport};
#[cfg(feature = "rest")]
pub use forcelink_rest::{
    Config, Error, ErrorKind, Operation, Outcome, QueryBuilder, QueryResult, RequestContext,
    RestClient,
};
