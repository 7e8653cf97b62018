//! Parameter types for Todoist MCP tools
//!
//! Each tool takes one of these structs as its input schema. The structs
//! also own the translation into a remote request: `to_body()` produces the
//! minimal JSON body for a mutation and `to_query()` the query pairs for a
//! filtered list. Both reject insufficient input with a validation error
//! before anything goes over the wire.

mod comment;
mod label;
mod project;
mod section;
mod task;

pub use comment::*;
pub use label::*;
pub use project::*;
pub use section::*;
pub use task::*;

use serde_json::{Map, Value};

use crate::todoist::{TodoistError, TodoistResult};

/// JSON body sent with a create or update call
pub type RequestBody = Map<String, Value>;

/// Query pairs sent with a filtered list call
pub type QueryPairs = Vec<(&'static str, String)>;

/// Accumulates only the fields a caller actually supplied
#[derive(Debug, Default)]
pub(crate) struct BodyBuilder {
    body: RequestBody,
}

impl BodyBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert a mandatory string field, rejecting blank values
    pub(crate) fn required(mut self, key: &'static str, value: &str) -> TodoistResult<Self> {
        if value.trim().is_empty() {
            return Err(TodoistError::validation(format!("{key} is required")));
        }
        self.body.insert(key.to_string(), Value::from(value));
        Ok(self)
    }

    /// Insert a field only when it was supplied
    pub(crate) fn optional<T>(mut self, key: &'static str, value: &Option<T>) -> Self
    where
        T: Clone + Into<Value>,
    {
        if let Some(v) = value {
            self.body.insert(key.to_string(), v.clone().into());
        }
        self
    }

    pub(crate) fn build(self) -> RequestBody {
        self.body
    }

    /// Finish an update-style body, which must change at least one field
    pub(crate) fn build_update(self) -> TodoistResult<RequestBody> {
        if self.body.is_empty() {
            return Err(TodoistError::validation("No update data provided"));
        }
        Ok(self.body)
    }
}

/// Reject a blank path identifier such as `task_id`
pub(crate) fn require_id<'a>(key: &'static str, value: &'a str) -> TodoistResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TodoistError::validation(format!("{key} is required")));
    }
    Ok(trimmed)
}

/// Priority must be one of Todoist's four levels
pub(crate) fn check_priority(priority: Option<u8>) -> TodoistResult<()> {
    match priority {
        Some(p) if !(1..=4).contains(&p) => Err(TodoistError::validation(format!(
            "priority must be between 1 (normal) and 4 (urgent), got {p}"
        ))),
        _ => Ok(()),
    }
}

/// Push a query pair when the value is present and non-empty
pub(crate) fn push_filter(pairs: &mut QueryPairs, key: &'static str, value: &Option<String>) {
    if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
        pairs.push((key, v.to_string()));
    }
}
