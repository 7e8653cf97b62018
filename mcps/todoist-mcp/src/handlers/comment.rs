//! Comment handler implementations

use mcp_common::{json_success, CallToolResult, McpError};

use crate::adapter::TodoistAdapter;
use crate::params::{AddCommentParams, CommentIdParams, GetCommentsParams, UpdateCommentParams};

use super::todoist_to_mcp_error;

/// List comments on a task or a project
pub async fn get_comments(
    adapter: &TodoistAdapter,
    params: GetCommentsParams,
) -> Result<CallToolResult, McpError> {
    let comments = adapter
        .get_comments(params)
        .await
        .map_err(todoist_to_mcp_error)?;
    json_success(&comments)
}

pub async fn get_comment(
    adapter: &TodoistAdapter,
    params: CommentIdParams,
) -> Result<CallToolResult, McpError> {
    let comment = adapter
        .get_comment(params)
        .await
        .map_err(todoist_to_mcp_error)?;
    json_success(&comment)
}

pub async fn add_comment(
    adapter: &TodoistAdapter,
    params: AddCommentParams,
) -> Result<CallToolResult, McpError> {
    let comment = adapter
        .add_comment(params)
        .await
        .map_err(todoist_to_mcp_error)?;
    json_success(&comment)
}

pub async fn update_comment(
    adapter: &TodoistAdapter,
    params: UpdateCommentParams,
) -> Result<CallToolResult, McpError> {
    let comment = adapter
        .update_comment(params)
        .await
        .map_err(todoist_to_mcp_error)?;
    json_success(&comment)
}

pub async fn delete_comment(
    adapter: &TodoistAdapter,
    params: CommentIdParams,
) -> Result<CallToolResult, McpError> {
    let status = adapter
        .delete_comment(params)
        .await
        .map_err(todoist_to_mcp_error)?;
    json_success(&status)
}
