use serde::de::DeserializeOwned;
use serde::Serialize;

use forcelink_client::Transport;

use crate::error::Result;
use crate::operation::{Operation, Outcome};
use crate::query_builder::QueryBuilder;

impl<T: Transport> super::RestClient<T> {
    /// Create a record and return its new id.
    pub async fn create_object<P: Serialize + ?Sized>(
        &self,
        object: &str,
        payload: &P,
    ) -> Result<String> {
        match self.execute(Operation::create(object, payload)?).await? {
            Outcome::Created(result) => Ok(result.id),
            other => Err(super::unexpected_outcome("create", &other)),
        }
    }

    /// Patch fields of an existing record.
    pub async fn update_object<P: Serialize + ?Sized>(
        &self,
        object: &str,
        id: &str,
        payload: &P,
    ) -> Result<()> {
        match self.execute(Operation::update(object, id, payload)?).await? {
            Outcome::Updated => Ok(()),
            other => Err(super::unexpected_outcome("update", &other)),
        }
    }

    /// Delete a record.
    pub async fn delete_object(&self, object: &str, id: &str) -> Result<()> {
        match self.execute(Operation::delete(object, id)).await? {
            Outcome::Deleted => Ok(()),
            other => Err(super::unexpected_outcome("delete", &other)),
        }
    }

    /// Fetch a record and decode it into `R`.
    pub async fn get_object<R: DeserializeOwned>(&self, object: &str, id: &str) -> Result<R> {
        match self.execute(Operation::get(object, id)).await? {
            Outcome::Record(value) => Ok(serde_json::from_value(value)?),
            other => Err(super::unexpected_outcome("get", &other)),
        }
    }

    /// Run a query and decode the response into `R`, typically
    /// [`QueryResult`](crate::QueryResult).
    pub async fn query_objects<R: DeserializeOwned>(&self, query: QueryBuilder) -> Result<R> {
        match self.execute(Operation::query(query)).await? {
            Outcome::Records(value) => Ok(serde_json::from_value(value)?),
            other => Err(super::unexpected_outcome("query", &other)),
        }
    }
}
