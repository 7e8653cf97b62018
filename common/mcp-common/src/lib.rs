//! MCP Common - Shared plumbing for MCP servers
//!
//! - **Initialization**: [`init_tracing`] and the `serve_stdio!` macro
//! - **Results**: builders for tool results and resource contents
//! - **Errors**: MCP error constructors
//! - **Embeddable**: [`EmbeddableMcp`] trait for in-process execution
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::{json_success, serve_stdio};
//!
//! // main.rs, for a server whose constructor can fail
//! serve_stdio!(TodoistMcpServer, "todoist_mcp", from_env);
//!
//! // in a tool handler
//! let task = adapter.get_task(params).await.map_err(todoist_to_mcp_error)?;
//! json_success(&task)
//! ```

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

// Re-export commonly used items at crate root
pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::{internal_error, invalid_params, resource_not_found};
pub use init::init_tracing;
pub use result::{json_success, text_resource};

// Re-export rmcp types that are commonly needed
pub use rmcp::{
    model::{CallToolResult, Content, ReadResourceResult, Tool},
    ErrorData as McpError,
};

// Re-export async_trait for implementing EmbeddableMcp
pub use async_trait::async_trait;
