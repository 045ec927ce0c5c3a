//! # forcelink-rest
//!
//! Typed client for the object service REST API.
//!
//! ## Features
//!
//! - **Operations** - create, update, delete, get and query as one enum
//!   that builds its own request and interprets its own response
//! - **Query builder** - SOQL statements with ordering, null priority and limits
//! - **Authentication** - lazy bearer-token refresh through
//!   [`forcelink_auth::Authenticator`]
//! - **Discovery** - API versions, resources and the global describe
//!
//! ## Example
//!
//! ```rust,ignore
//! use forcelink_rest::{Config, QueryBuilder, QueryResult, RestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), forcelink_rest::Error> {
//!     let client = RestClient::new(Config::from_env()?)?;
//!
//!     let id = client
//!         .create_object("Account", &serde_json::json!({"Name": "New Account"}))
//!         .await?;
//!
//!     let accounts: QueryResult<serde_json::Value> = client
//!         .query_objects(QueryBuilder::new().select(["Id", "Name"]).from("Account").limit(10))
//!         .await?;
//!
//!     client.delete_object("Account", &id).await?;
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod context;
mod error;
mod error_response;
mod operation;
mod query;
mod query_builder;
mod sobject;

pub use client::{RestClient, RestClientBuilder};
pub use config::{Config, DEFAULT_TOKEN_LIFETIME_SECS};
pub use context::{RequestContext, MAX_API_VERSION, MIN_API_VERSION};
pub use error::{Error, ErrorKind, Result};
pub use error_response::{ErrorResponse, ServiceError};
pub use operation::{Operation, Outcome};
pub use query::QueryResult;
pub use query_builder::{Direction, NullPriority, QueryBuilder, QueryState};
pub use sobject::{ApiVersion, CreateResult};

// Re-export lower-layer types that users might need
pub use forcelink_auth::{Authenticator, PasswordCredentials};
pub use forcelink_client::{ClientConfig, ClientConfigBuilder, HttpClient, Transport};
