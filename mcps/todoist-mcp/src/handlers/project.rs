//! Project handler implementations

use mcp_common::{json_success, CallToolResult, McpError};

use crate::adapter::TodoistAdapter;
use crate::params::{AddProjectParams, ProjectIdParams, UpdateProjectParams};

use super::todoist_to_mcp_error;

pub async fn get_projects(adapter: &TodoistAdapter) -> Result<CallToolResult, McpError> {
    let projects = adapter.get_projects().await.map_err(todoist_to_mcp_error)?;
    json_success(&projects)
}

pub async fn get_project(
    adapter: &TodoistAdapter,
    params: ProjectIdParams,
) -> Result<CallToolResult, McpError> {
    let project = adapter
        .get_project(params)
        .await
        .map_err(todoist_to_mcp_error)?;
    json_success(&project)
}

pub async fn add_project(
    adapter: &TodoistAdapter,
    params: AddProjectParams,
) -> Result<CallToolResult, McpError> {
    let project = adapter
        .add_project(params)
        .await
        .map_err(todoist_to_mcp_error)?;
    json_success(&project)
}

pub async fn update_project(
    adapter: &TodoistAdapter,
    params: UpdateProjectParams,
) -> Result<CallToolResult, McpError> {
    let project = adapter
        .update_project(params)
        .await
        .map_err(todoist_to_mcp_error)?;
    json_success(&project)
}

/// Delete a project and everything in it
pub async fn delete_project(
    adapter: &TodoistAdapter,
    params: ProjectIdParams,
) -> Result<CallToolResult, McpError> {
    let status = adapter
        .delete_project(params)
        .await
        .map_err(todoist_to_mcp_error)?;
    json_success(&status)
}

pub async fn archive_project(
    adapter: &TodoistAdapter,
    params: ProjectIdParams,
) -> Result<CallToolResult, McpError> {
    let status = adapter
        .archive_project(params)
        .await
        .map_err(todoist_to_mcp_error)?;
    json_success(&status)
}

pub async fn unarchive_project(
    adapter: &TodoistAdapter,
    params: ProjectIdParams,
) -> Result<CallToolResult, McpError> {
    let status = adapter
        .unarchive_project(params)
        .await
        .map_err(todoist_to_mcp_error)?;
    json_success(&status)
}
