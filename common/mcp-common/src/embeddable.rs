//! Embeddable MCP trait for in-process execution
//!
//! This module provides the [`EmbeddableMcp`] trait that allows MCP servers
//! to be executed directly in-process without subprocess spawning or IPC.
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::EmbeddableMcp;
//! use todoist_mcp::TodoistMcpServer;
//!
//! let server = TodoistMcpServer::from_env()?;
//!
//! let tools = server.list_tools();
//! let result = server
//!     .call_tool("get_tasks", serde_json::json!({ "filter_query": "today" }))
//!     .await?;
//! ```

use async_trait::async_trait;
use rmcp::model::{CallToolResult, ErrorCode, Tool};
use serde_json::Value;

/// Error type for embeddable MCP operations
#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    /// Tool was not found in the server
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// The tool rejected its arguments
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// Arguments did not match the tool's parameter type
    #[error("serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    /// Any other MCP error raised by the tool
    #[error("mcp error: {0}")]
    McpError(String),
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        if err.code == ErrorCode::INVALID_PARAMS {
            EmbeddableError::InvalidParams(err.message.to_string())
        } else {
            EmbeddableError::McpError(err.message.to_string())
        }
    }
}

/// Result type for embeddable MCP operations
pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// An MCP server that can be driven in-process
///
/// Tool calls go straight to the server's handlers, skipping the stdio
/// transport. Servers built on `#[tool_router]` list tools through the
/// router and dispatch calls by matching on the tool name:
///
/// ```rust,ignore
/// async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
///     let result = match name {
///         "get_task" => handlers::get_task(&self.adapter, serde_json::from_value(params)?).await,
///         "get_projects" => handlers::get_projects(&self.adapter).await,
///         _ => return Err(EmbeddableError::ToolNotFound(name.to_string())),
///     };
///     result.map_err(Into::into)
/// }
/// ```
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Short identifier, matching the name used in MCP client configuration
    fn server_name(&self) -> &str;

    fn list_tools(&self) -> Vec<Tool>;

    /// Run a tool by name. `params` is the JSON object of tool arguments.
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    fn server_description(&self) -> Option<&str> {
        None
    }

    fn server_version(&self) -> Option<&str> {
        None
    }
}
