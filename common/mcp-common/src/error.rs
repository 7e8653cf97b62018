//! Error helpers for MCP servers

use rmcp::ErrorData as McpError;

/// Internal error: the tool ran but failed (remote errors, bad responses)
pub fn internal_error(message: impl Into<String>) -> McpError {
    McpError::internal_error(message.into(), None)
}

/// Invalid params: the caller's input was rejected before doing any work
pub fn invalid_params(message: impl Into<String>) -> McpError {
    McpError::invalid_params(message.into(), None)
}

/// Resource not found: the requested URI does not name a known resource
pub fn resource_not_found(message: impl Into<String>) -> McpError {
    McpError::resource_not_found(message.into(), None)
}
