//! Todoist REST API wrapper
//!
//! HTTP transport, remote resource schemas, and error types.

pub mod client;
pub mod error;
pub mod models;

pub use client::{ApiRequest, TodoistApi, TodoistClient, DEFAULT_BASE_URL};
pub use error::{TodoistError, TodoistResult};
