//! Builders for tool results and resource contents

use rmcp::{
    model::{CallToolResult, Content, ReadResourceResult, ResourceContents},
    ErrorData as McpError,
};
use serde::Serialize;

use crate::error::internal_error;

/// Pretty-printed JSON tool result for any serializable record
///
/// ```rust,ignore
/// let projects = adapter.get_projects().await.map_err(todoist_to_mcp_error)?;
/// json_success(&projects)
/// ```
pub fn json_success<T: Serialize>(data: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(data).map_err(|e| internal_error(e.to_string()))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// A single text document answering a `resources/read` request
pub fn text_resource(uri: &str, mime_type: &str, text: impl Into<String>) -> ReadResourceResult {
    ReadResourceResult {
        contents: vec![ResourceContents::TextResourceContents {
            uri: uri.to_string(),
            mime_type: Some(mime_type.to_string()),
            text: text.into(),
            meta: None,
        }],
    }
}
