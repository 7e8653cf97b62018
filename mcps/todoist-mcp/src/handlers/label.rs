//! Label handler implementations

use mcp_common::{json_success, CallToolResult, McpError};

use crate::adapter::TodoistAdapter;
use crate::params::{AddLabelParams, LabelIdParams, UpdateLabelParams};

use super::todoist_to_mcp_error;

pub async fn get_labels(adapter: &TodoistAdapter) -> Result<CallToolResult, McpError> {
    let labels = adapter.get_labels().await.map_err(todoist_to_mcp_error)?;
    json_success(&labels)
}

pub async fn get_label(
    adapter: &TodoistAdapter,
    params: LabelIdParams,
) -> Result<CallToolResult, McpError> {
    let label = adapter.get_label(params).await.map_err(todoist_to_mcp_error)?;
    json_success(&label)
}

pub async fn add_label(
    adapter: &TodoistAdapter,
    params: AddLabelParams,
) -> Result<CallToolResult, McpError> {
    let label = adapter.add_label(params).await.map_err(todoist_to_mcp_error)?;
    json_success(&label)
}

pub async fn update_label(
    adapter: &TodoistAdapter,
    params: UpdateLabelParams,
) -> Result<CallToolResult, McpError> {
    let label = adapter
        .update_label(params)
        .await
        .map_err(todoist_to_mcp_error)?;
    json_success(&label)
}

pub async fn delete_label(
    adapter: &TodoistAdapter,
    params: LabelIdParams,
) -> Result<CallToolResult, McpError> {
    let status = adapter
        .delete_label(params)
        .await
        .map_err(todoist_to_mcp_error)?;
    json_success(&status)
}
