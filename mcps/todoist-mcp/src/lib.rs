//! Todoist MCP Library
//!
//! MCP tools, resources, and prompts for Todoist via its REST API.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use mcp_common::EmbeddableMcp;
//! use todoist_mcp::TodoistMcpServer;
//!
//! let server = TodoistMcpServer::from_env()?;
//! let result = server
//!     .call_tool("create_task", serde_json::json!({ "content": "Buy milk" }))
//!     .await?;
//! ```
//!
//! # Features
//! - Tasks: create (with a direct-request fallback), list, get, update, complete, reopen, delete
//! - Projects: list, get, add, update, delete, archive, unarchive, collaborators
//! - Sections, labels, comments: list, get, add, update, delete
//! - Resources: markdown tables under `todoist://`
//! - Prompts: create a task, show tasks, complete a task
//!
//! # Requirements
//! - A Todoist API token in `TODOIST_API_TOKEN` or `~/.binks/todoist.toml`

pub mod adapter;
pub mod config;
pub mod handlers;
pub mod markdown;
pub mod params;
pub mod prompts;
pub mod records;
pub mod resources;
pub mod server;
pub mod todoist;

// Re-export main server type
pub use server::TodoistMcpServer;

pub use adapter::{OperationHooks, TodoistAdapter, TracingHooks};
pub use config::Config;

// Re-export parameter types for direct API usage
pub use params::*;
