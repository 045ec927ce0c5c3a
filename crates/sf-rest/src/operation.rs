//! Operations: one high-level intent turned into one HTTP exchange.
//!
//! An [`Operation`] knows how to [`make`](Operation::make) its request against
//! a [`RequestContext`] and how to [`handle`](Operation::handle) the matching
//! successful response. Non-2xx responses never reach `handle`; the client
//! turns them into [`ErrorResponse`](crate::ErrorResponse) first.

use serde::Serialize;
use serde_json::Value;

use forcelink_client::{Request, RequestMethod, Response};

use crate::context::RequestContext;
use crate::error::{Error, ErrorKind, Result};
use crate::query_builder::{QueryBuilder, QueryState};
use crate::sobject::CreateResult;

/// A create, update, delete, get or query intent.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Create {
        object: String,
        payload: Value,
    },
    Update {
        object: String,
        id: String,
        payload: Value,
    },
    Delete {
        object: String,
        id: String,
    },
    Get {
        object: String,
        id: String,
    },
    Query(QueryState),
}

/// What a successfully handled operation produced.
#[derive(Debug, Clone)]
pub enum Outcome {
    Created(CreateResult),
    Updated,
    Deleted,
    Record(Value),
    Records(Value),
}

impl Operation {
    /// Create a new record of type `object`.
    pub fn create<P: Serialize + ?Sized>(object: impl Into<String>, payload: &P) -> Result<Self> {
        Ok(Operation::Create {
            object: object.into(),
            payload: serde_json::to_value(payload)?,
        })
    }

    /// Patch the record `id` of type `object`.
    pub fn update<P: Serialize + ?Sized>(
        object: impl Into<String>,
        id: impl Into<String>,
        payload: &P,
    ) -> Result<Self> {
        Ok(Operation::Update {
            object: object.into(),
            id: id.into(),
            payload: serde_json::to_value(payload)?,
        })
    }

    /// Delete the record `id` of type `object`.
    pub fn delete(object: impl Into<String>, id: impl Into<String>) -> Self {
        Operation::Delete {
            object: object.into(),
            id: id.into(),
        }
    }

    /// Fetch the record `id` of type `object`.
    pub fn get(object: impl Into<String>, id: impl Into<String>) -> Self {
        Operation::Get {
            object: object.into(),
            id: id.into(),
        }
    }

    /// Run the statement described by `builder`.
    pub fn query(builder: QueryBuilder) -> Self {
        Operation::Query(builder.finish())
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Create { .. } => "create",
            Operation::Update { .. } => "update",
            Operation::Delete { .. } => "delete",
            Operation::Get { .. } => "get",
            Operation::Query(_) => "query",
        }
    }

    /// The object type this operation targets.
    pub fn object_name(&self) -> &str {
        match self {
            Operation::Create { object, .. }
            | Operation::Update { object, .. }
            | Operation::Delete { object, .. }
            | Operation::Get { object, .. } => object,
            Operation::Query(state) => state.object_name(),
        }
    }

    /// The status code a successful response carries.
    pub fn success_status(&self) -> u16 {
        match self {
            Operation::Create { .. } => 201,
            Operation::Delete { .. } => 204,
            Operation::Update { .. } | Operation::Get { .. } | Operation::Query(_) => 200,
        }
    }

    /// Build the request for this operation.
    ///
    /// Fails with [`ErrorKind::MissingField`] naming the first empty required
    /// field: the object name, then the id, then the payload (or the select
    /// list for queries). A JSON `null` payload counts as missing.
    pub fn make(&self, ctx: &RequestContext) -> Result<Request> {
        self.validate()?;

        let request = match self {
            Operation::Create { object, payload } => {
                Request::new(RequestMethod::Post, ctx.object_collection_url(object))
                    .json_value(payload.clone())
            }
            Operation::Update {
                object,
                id,
                payload,
            } => Request::new(RequestMethod::Patch, ctx.object_url(object, id))
                .json_value(payload.clone()),
            Operation::Delete { object, id } => {
                Request::new(RequestMethod::Delete, ctx.object_url(object, id))
            }
            Operation::Get { object, id } => {
                Request::new(RequestMethod::Get, ctx.object_url(object, id))
            }
            Operation::Query(state) => {
                Request::new(RequestMethod::Get, ctx.query_url(&state.statement()))
            }
        };
        Ok(request)
    }

    /// Interpret a 2xx response.
    ///
    /// A status other than [`success_status`](Operation::success_status) fails
    /// with [`ErrorKind::UnexpectedStatus`] before the body is looked at.
    pub fn handle(&self, response: &Response) -> Result<Outcome> {
        let expected = self.success_status();
        if response.status() != expected {
            return Err(Error::new(ErrorKind::UnexpectedStatus {
                observed: response.status(),
                expected,
            }));
        }

        let outcome = match self {
            Operation::Create { .. } => Outcome::Created(serde_json::from_slice(response.body())?),
            Operation::Update { .. } => Outcome::Updated,
            Operation::Delete { .. } => Outcome::Deleted,
            Operation::Get { .. } => Outcome::Record(serde_json::from_slice(response.body())?),
            Operation::Query(_) => Outcome::Records(serde_json::from_slice(response.body())?),
        };
        Ok(outcome)
    }

    fn validate(&self) -> Result<()> {
        if self.object_name().is_empty() {
            return Err(Error::missing_field("object name"));
        }

        match self {
            Operation::Update { id, .. } | Operation::Delete { id, .. } | Operation::Get { id, .. }
                if id.is_empty() =>
            {
                Err(Error::missing_field("object id"))
            }
            Operation::Create { payload, .. } | Operation::Update { payload, .. }
                if payload.is_null() =>
            {
                Err(Error::missing_field("payload"))
            }
            Operation::Query(state) if state.select_fields().is_empty() => {
                Err(Error::missing_field("select fields"))
            }
            _ => Ok(()),
        }
    }
}
