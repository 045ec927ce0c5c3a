//! SOQL query result envelope.

use serde::{Deserialize, Serialize};

/// One page of query results.
///
/// Pass it as the target type of
/// [`RestClient::query_objects`](crate::RestClient::query_objects) to get
/// typed records.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult<T> {
    pub total_size: u64,
    pub done: bool,
    pub records: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_records_url: Option<String>,
}
