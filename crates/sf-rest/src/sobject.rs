//! Response envelopes for object and discovery calls.

use serde::{Deserialize, Serialize};

/// Result of a create operation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateResult {
    pub id: String,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// API version information.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiVersion {
    pub version: String,
    pub label: String,
    pub url: String,
}
