//! Todoist MCP Server
//!
//! Exposes Todoist tasks, projects, sections, labels, and comments to MCP
//! clients over stdio.
//!
//! # Requirements
//! - `TODOIST_API_TOKEN` set, or `api_token` under `[todoist]` in
//!   `~/.binks/todoist.toml` (override the path with `TODOIST_MCP_CONFIG_PATH`)

use todoist_mcp::TodoistMcpServer;

mcp_common::serve_stdio!(TodoistMcpServer, "todoist_mcp", from_env);
