//! Error types for Todoist operations

use thiserror::Error;

/// Errors that can occur while adapting a Todoist operation
#[derive(Error, Debug)]
pub enum TodoistError {
    /// Caller input was rejected before any remote call was made
    #[error("{0}")]
    Validation(String),

    /// The remote call failed (network, auth, non-2xx status)
    #[error("{0}")]
    Remote(String),

    /// A remote response lacked a mandatory identifying field
    #[error("{entity} response is missing required field `{field}`")]
    Normalization {
        /// Entity kind being normalized (task, project, ...)
        entity: &'static str,
        /// The missing field
        field: &'static str,
    },

    /// A logical operation failed; wraps the underlying cause
    #[error("Failed to {operation}: {source}")]
    Operation {
        /// Human-readable operation name, e.g. "create Todoist task"
        operation: &'static str,
        /// The underlying failure
        source: Box<TodoistError>,
    },
}

impl TodoistError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote(message.into())
    }

    /// Wrap this error as the cause of a failed operation
    pub fn during(self, operation: &'static str) -> Self {
        Self::Operation {
            operation,
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping any operation wrappers
    pub fn root(&self) -> &TodoistError {
        match self {
            Self::Operation { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self.root(), Self::Validation(_))
    }

    pub fn is_remote(&self) -> bool {
        matches!(self.root(), Self::Remote(_))
    }

    pub fn is_normalization(&self) -> bool {
        matches!(self.root(), Self::Normalization { .. })
    }
}

impl From<reqwest::Error> for TodoistError {
    fn from(e: reqwest::Error) -> Self {
        Self::Remote(e.to_string())
    }
}

/// Result type alias for Todoist operations
pub type TodoistResult<T> = Result<T, TodoistError>;
