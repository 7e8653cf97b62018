//! Handler implementations for Todoist MCP tools
//!
//! Organized by domain: task, project, section, label, comment, collaborator.
//! Each handler runs one adapter operation and serializes the normalized
//! record as the tool result.

mod collaborator;
mod comment;
mod label;
mod project;
mod section;
mod task;

pub use collaborator::*;
pub use comment::*;
pub use label::*;
pub use project::*;
pub use section::*;
pub use task::*;

use mcp_common::{internal_error, invalid_params, McpError};

use crate::todoist::TodoistError;

/// Convert a TodoistError to an MCP error
///
/// Rejected input maps to `invalid_params`; everything else is an internal error.
pub fn todoist_to_mcp_error(e: TodoistError) -> McpError {
    if e.is_validation() {
        invalid_params(e.to_string())
    } else {
        internal_error(e.to_string())
    }
}
