//! Task handler implementations

use mcp_common::{json_success, CallToolResult, McpError};

use crate::adapter::TodoistAdapter;
use crate::params::{CreateTaskParams, GetTasksParams, TaskIdParams, UpdateTaskParams};

use super::todoist_to_mcp_error;

/// Create a task (with the direct-request fallback)
pub async fn create_task(
    adapter: &TodoistAdapter,
    params: CreateTaskParams,
) -> Result<CallToolResult, McpError> {
    let task = adapter
        .create_task(params)
        .await
        .map_err(todoist_to_mcp_error)?;
    json_success(&task)
}

/// List active tasks with an optional filter
pub async fn get_tasks(
    adapter: &TodoistAdapter,
    params: GetTasksParams,
) -> Result<CallToolResult, McpError> {
    let tasks = adapter.get_tasks(params).await.map_err(todoist_to_mcp_error)?;
    json_success(&tasks)
}

pub async fn get_task(
    adapter: &TodoistAdapter,
    params: TaskIdParams,
) -> Result<CallToolResult, McpError> {
    let task = adapter.get_task(params).await.map_err(todoist_to_mcp_error)?;
    json_success(&task)
}

pub async fn update_task(
    adapter: &TodoistAdapter,
    params: UpdateTaskParams,
) -> Result<CallToolResult, McpError> {
    let task = adapter
        .update_task(params)
        .await
        .map_err(todoist_to_mcp_error)?;
    json_success(&task)
}

pub async fn complete_task(
    adapter: &TodoistAdapter,
    params: TaskIdParams,
) -> Result<CallToolResult, McpError> {
    let status = adapter
        .complete_task(params)
        .await
        .map_err(todoist_to_mcp_error)?;
    json_success(&status)
}

/// Reopen a completed task
pub async fn uncomplete_task(
    adapter: &TodoistAdapter,
    params: TaskIdParams,
) -> Result<CallToolResult, McpError> {
    let status = adapter
        .uncomplete_task(params)
        .await
        .map_err(todoist_to_mcp_error)?;
    json_success(&status)
}

pub async fn delete_task(
    adapter: &TodoistAdapter,
    params: TaskIdParams,
) -> Result<CallToolResult, McpError> {
    let status = adapter
        .delete_task(params)
        .await
        .map_err(todoist_to_mcp_error)?;
    json_success(&status)
}
