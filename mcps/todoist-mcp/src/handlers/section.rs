//! Section handler implementations

use mcp_common::{json_success, CallToolResult, McpError};

use crate::adapter::TodoistAdapter;
use crate::params::{AddSectionParams, GetSectionsParams, SectionIdParams, UpdateSectionParams};

use super::todoist_to_mcp_error;

/// List sections, optionally for one project
pub async fn get_sections(
    adapter: &TodoistAdapter,
    params: GetSectionsParams,
) -> Result<CallToolResult, McpError> {
    let sections = adapter
        .get_sections(params)
        .await
        .map_err(todoist_to_mcp_error)?;
    json_success(&sections)
}

pub async fn get_section(
    adapter: &TodoistAdapter,
    params: SectionIdParams,
) -> Result<CallToolResult, McpError> {
    let section = adapter
        .get_section(params)
        .await
        .map_err(todoist_to_mcp_error)?;
    json_success(&section)
}

pub async fn add_section(
    adapter: &TodoistAdapter,
    params: AddSectionParams,
) -> Result<CallToolResult, McpError> {
    let section = adapter
        .add_section(params)
        .await
        .map_err(todoist_to_mcp_error)?;
    json_success(&section)
}

pub async fn update_section(
    adapter: &TodoistAdapter,
    params: UpdateSectionParams,
) -> Result<CallToolResult, McpError> {
    let section = adapter
        .update_section(params)
        .await
        .map_err(todoist_to_mcp_error)?;
    json_success(&section)
}

pub async fn delete_section(
    adapter: &TodoistAdapter,
    params: SectionIdParams,
) -> Result<CallToolResult, McpError> {
    let status = adapter
        .delete_section(params)
        .await
        .map_err(todoist_to_mcp_error)?;
    json_success(&status)
}
