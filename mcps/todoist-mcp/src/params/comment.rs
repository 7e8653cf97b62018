//! Comment-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{push_filter, BodyBuilder, QueryPairs, RequestBody};
use crate::todoist::{TodoistError, TodoistResult};

fn has_target(task_id: &Option<String>, project_id: &Option<String>) -> bool {
    let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
    present(task_id) || present(project_id)
}

fn missing_target() -> TodoistError {
    TodoistError::validation("Either task_id or project_id must be provided")
}

/// Parameters for listing comments
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetCommentsParams {
    #[schemars(description = "ID of the task to get comments for")]
    pub task_id: Option<String>,

    #[schemars(description = "ID of the project to get comments for")]
    pub project_id: Option<String>,
}

impl GetCommentsParams {
    pub fn to_query(&self) -> TodoistResult<QueryPairs> {
        if !has_target(&self.task_id, &self.project_id) {
            return Err(missing_target());
        }
        let mut pairs = QueryPairs::new();
        push_filter(&mut pairs, "task_id", &self.task_id);
        push_filter(&mut pairs, "project_id", &self.project_id);
        Ok(pairs)
    }
}

/// Parameters for tools addressing a single comment
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CommentIdParams {
    #[schemars(description = "ID of the comment")]
    pub comment_id: String,
}

/// Parameters for adding a comment
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AddCommentParams {
    #[schemars(description = "Content of the comment (markdown supported)")]
    pub content: String,

    #[schemars(description = "ID of the task to comment on")]
    pub task_id: Option<String>,

    #[schemars(description = "ID of the project to comment on")]
    pub project_id: Option<String>,
}

impl AddCommentParams {
    pub fn to_body(&self) -> TodoistResult<RequestBody> {
        if !has_target(&self.task_id, &self.project_id) {
            return Err(missing_target());
        }
        let non_empty = |v: &Option<String>| v.clone().filter(|s| !s.trim().is_empty());
        Ok(BodyBuilder::new()
            .required("content", &self.content)?
            .optional("task_id", &non_empty(&self.task_id))
            .optional("project_id", &non_empty(&self.project_id))
            .build())
    }
}

/// Parameters for editing a comment
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateCommentParams {
    #[schemars(description = "ID of the comment to update")]
    pub comment_id: String,

    #[schemars(description = "New content for the comment")]
    pub content: String,
}

impl UpdateCommentParams {
    pub fn to_body(&self) -> TodoistResult<RequestBody> {
        Ok(BodyBuilder::new().required("content", &self.content)?.build())
    }
}
