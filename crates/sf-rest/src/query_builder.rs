//! SOQL statement builder.
//!
//! [`QueryBuilder`] is a by-value fluent builder; [`QueryBuilder::finish`]
//! freezes it into an immutable [`QueryState`] that renders the statement.
//!
//! # Example
//!
//! ```rust,ignore
//! use forcelink_rest::QueryBuilder;
//!
//! let state = QueryBuilder::new()
//!     .select(["Id", "Name"])
//!     .from("Account")
//!     .where_eq("Industry", "Energy")
//!     .order_desc("CreatedDate")
//!     .order_null_last()
//!     .limit(10)
//!     .finish();
//!
//! assert_eq!(
//!     state.statement(),
//!     "SELECT Id,Name FROM Account WHERE Industry='Energy' ORDER BY CreatedDate DESC NULL LAST LIMIT 10"
//! );
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;
use tracing::warn;

/// Sort direction of the `ORDER BY` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        })
    }
}

/// Where null values sort relative to the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NullPriority {
    #[default]
    First,
    Last,
}

impl fmt::Display for NullPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NullPriority::First => "NULL FIRST",
            NullPriority::Last => "NULL LAST",
        })
    }
}

/// Builder for a single-object SOQL statement.
///
/// Only one order key is supported; setting a new one overwrites the old.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    state: QueryState,
}

impl QueryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append fields to the select list. Repeated calls accumulate and
    /// duplicates are kept.
    pub fn select<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state
            .select_fields
            .extend(fields.into_iter().map(Into::into));
        self
    }

    /// Set the object to query.
    pub fn from(mut self, object_name: impl Into<String>) -> Self {
        self.state.object_name = object_name.into();
        self
    }

    /// Add a `<field>=<condition>` filter.
    ///
    /// Only numbers, booleans and strings render; any other condition is
    /// dropped with a warning when the statement is built. A later clause on
    /// the same field replaces an earlier one.
    ///
    /// Strings are rendered as quoted, escaped literals, so pass the raw
    /// value: `where_eq("Name", "O'Brien")` renders `Name='O\'Brien'`.
    pub fn where_eq(mut self, field: impl Into<String>, condition: impl Into<Value>) -> Self {
        self.state
            .where_clauses
            .push((field.into(), condition.into()));
        self
    }

    /// Sort ascending by `field`.
    pub fn order_asc(mut self, field: impl Into<String>) -> Self {
        self.state.order = Some((field.into(), Direction::Asc));
        self
    }

    /// Sort descending by `field`.
    pub fn order_desc(mut self, field: impl Into<String>) -> Self {
        self.state.order = Some((field.into(), Direction::Desc));
        self
    }

    /// Drop the order key and the null priority.
    pub fn order_reset(mut self) -> Self {
        self.state.order = None;
        self.state.null_priority = None;
        self
    }

    /// Sort nulls first. This is also the default once an order is set.
    pub fn order_null_first(mut self) -> Self {
        self.state.null_priority = Some(NullPriority::First);
        self
    }

    /// Sort nulls last.
    pub fn order_null_last(mut self) -> Self {
        self.state.null_priority = Some(NullPriority::Last);
        self
    }

    /// Cap the number of records. `n <= 0` removes the cap.
    pub fn limit(mut self, n: i64) -> Self {
        self.state.limit = u64::try_from(n).ok().filter(|n| *n > 0);
        self
    }

    /// Freeze the builder.
    pub fn finish(self) -> QueryState {
        self.state
    }
}

/// Immutable query description produced by [`QueryBuilder::finish`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryState {
    object_name: String,
    select_fields: Vec<String>,
    where_clauses: Vec<(String, Value)>,
    order: Option<(String, Direction)>,
    null_priority: Option<NullPriority>,
    limit: Option<u64>,
}

impl QueryState {
    /// Target object name.
    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    /// Selected fields in insertion order.
    pub fn select_fields(&self) -> &[String] {
        &self.select_fields
    }

    /// Record cap, if any.
    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    /// Render the SOQL statement.
    ///
    /// Clauses appear in the order SELECT, FROM, WHERE, ORDER BY, LIMIT,
    /// separated by single spaces; clauses with nothing to say are omitted.
    pub fn statement(&self) -> String {
        if self.select_fields.is_empty() {
            warn!(object = %self.object_name, "Query has no select fields");
        }

        let mut clauses = vec![format!(
            "SELECT {} FROM {}",
            self.select_fields.join(","),
            self.object_name
        )];
        clauses.extend(self.where_statement());
        clauses.extend(self.order_statement());
        clauses.extend(self.limit.map(|n| format!("LIMIT {n}")));
        clauses.join(" ")
    }

    fn where_statement(&self) -> Option<String> {
        // Grouping by field keeps the last condition per field and renders
        // fields in ascending name order.
        let mut filters = BTreeMap::new();
        for (field, condition) in &self.where_clauses {
            match soql_literal(condition) {
                Some(literal) => {
                    filters.insert(field.as_str(), literal);
                }
                None => warn!(
                    object = %self.object_name,
                    field = %field,
                    condition = json_type(condition),
                    "Dropping where clause: condition must be a number, boolean or string"
                ),
            }
        }

        if filters.is_empty() {
            return None;
        }

        let filters: Vec<String> = filters
            .into_iter()
            .map(|(field, literal)| format!("{field}={literal}"))
            .collect();
        Some(format!("WHERE {}", filters.join(",")))
    }

    fn order_statement(&self) -> Option<String> {
        let (field, direction) = self.order.as_ref()?;
        let null_priority = self.null_priority.unwrap_or_default();
        Some(format!("ORDER BY {field} {direction} {null_priority}"))
    }
}

impl fmt::Display for QueryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.statement())
    }
}

/// Render a condition as a SOQL literal; `None` for unsupported JSON types.
fn soql_literal(condition: &Value) -> Option<String> {
    match condition {
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::String(s) => Some(format!("'{}'", escape_string(s))),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Escape backslashes and single quotes inside a string literal.
fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '\'') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
