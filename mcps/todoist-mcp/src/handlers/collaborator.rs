//! Collaborator handler implementations

use mcp_common::{json_success, CallToolResult, McpError};

use crate::adapter::TodoistAdapter;
use crate::params::ProjectIdParams;

use super::todoist_to_mcp_error;

/// List the people a project is shared with
pub async fn get_collaborators(
    adapter: &TodoistAdapter,
    params: ProjectIdParams,
) -> Result<CallToolResult, McpError> {
    let collaborators = adapter
        .get_collaborators(params)
        .await
        .map_err(todoist_to_mcp_error)?;
    json_success(&collaborators)
}
