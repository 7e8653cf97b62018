//! Normalized output records
//!
//! Stable, schema-conforming shapes returned by every tool. Each record is
//! built from the matching remote schema in [`crate::todoist::models`] by a
//! `TryFrom` impl that only fails when the remote object has no `id`.
//! Every other missing attribute becomes `null` (or a documented default)
//! so the serialized field set never depends on what the API sent.

use serde::{Deserialize, Serialize};

use crate::todoist::models::{
    RemoteCollaborator, RemoteComment, RemoteDue, RemoteLabel, RemoteProject, RemoteSection,
    RemoteTask,
};
use crate::todoist::TodoistError;

fn require_id(id: Option<String>, entity: &'static str) -> Result<String, TodoistError> {
    id.ok_or(TodoistError::Normalization { entity, field: "id" })
}

// ============================================================================
// Task
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub content: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub created_at: Option<String>,
    pub priority: Option<u8>,
    pub project_id: Option<String>,
    pub section_id: Option<String>,
    pub parent_id: Option<String>,
    pub labels: Vec<String>,
    pub due: Option<DueRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DueRecord {
    pub date: Option<String>,
    pub string: Option<String>,
    pub is_recurring: Option<bool>,
    pub datetime: Option<String>,
    pub timezone: Option<String>,
}

impl From<RemoteDue> for DueRecord {
    fn from(due: RemoteDue) -> Self {
        Self {
            date: due.date,
            string: due.string,
            is_recurring: due.is_recurring,
            datetime: due.datetime,
            timezone: due.timezone,
        }
    }
}

impl TryFrom<RemoteTask> for TaskRecord {
    type Error = TodoistError;

    fn try_from(task: RemoteTask) -> Result<Self, Self::Error> {
        let labels = match (task.labels, task.label_ids) {
            (Some(labels), _) => labels,
            (None, Some(ids)) => ids
                .into_iter()
                .map(|id| match id {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                })
                .collect(),
            (None, None) => Vec::new(),
        };

        Ok(Self {
            id: require_id(task.id, "task")?,
            content: task.content,
            description: task.description,
            url: task.url,
            created_at: task.created_at,
            priority: task.priority,
            project_id: task.project_id,
            section_id: task.section_id,
            parent_id: task.parent_id,
            labels,
            due: task.due.map(DueRecord::from),
        })
    }
}

// ============================================================================
// Project
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub name: Option<String>,
    pub color: Option<String>,
    pub is_favorite: bool,
    pub is_inbox_project: bool,
    pub order: Option<i64>,
    pub parent_id: Option<String>,
    pub url: Option<String>,
    pub view_style: Option<String>,
}

impl TryFrom<RemoteProject> for ProjectRecord {
    type Error = TodoistError;

    fn try_from(project: RemoteProject) -> Result<Self, Self::Error> {
        Ok(Self {
            id: require_id(project.id, "project")?,
            name: project.name,
            color: project.color,
            is_favorite: project.is_favorite.unwrap_or(false),
            is_inbox_project: project.is_inbox_project.unwrap_or(false),
            order: project.order,
            parent_id: project.parent_id,
            url: project.url,
            view_style: project.view_style,
        })
    }
}

// ============================================================================
// Section
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRecord {
    pub id: String,
    pub name: Option<String>,
    pub order: Option<i64>,
    pub project_id: Option<String>,
}

impl TryFrom<RemoteSection> for SectionRecord {
    type Error = TodoistError;

    fn try_from(section: RemoteSection) -> Result<Self, Self::Error> {
        Ok(Self {
            id: require_id(section.id, "section")?,
            name: section.name,
            order: section.order,
            project_id: section.project_id,
        })
    }
}

// ============================================================================
// Label
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelRecord {
    pub id: String,
    pub name: Option<String>,
    pub color: Option<String>,
    pub order: Option<i64>,
    pub favorite: bool,
}

impl TryFrom<RemoteLabel> for LabelRecord {
    type Error = TodoistError;

    fn try_from(label: RemoteLabel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: require_id(label.id, "label")?,
            name: label.name,
            color: label.color,
            order: label.order,
            favorite: label.is_favorite.unwrap_or(false),
        })
    }
}

// ============================================================================
// Comment
// ============================================================================

/// A comment belongs to either a task or a project, never both
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentRecord {
    pub id: String,
    pub content: Option<String>,
    pub posted_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl TryFrom<RemoteComment> for CommentRecord {
    type Error = TodoistError;

    fn try_from(comment: RemoteComment) -> Result<Self, Self::Error> {
        let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());
        Ok(Self {
            id: require_id(comment.id, "comment")?,
            content: comment.content,
            posted_at: comment.posted_at,
            task_id: non_empty(comment.task_id),
            project_id: non_empty(comment.project_id),
        })
    }
}

// ============================================================================
// Collaborator
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollaboratorRecord {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl TryFrom<RemoteCollaborator> for CollaboratorRecord {
    type Error = TodoistError;

    fn try_from(collaborator: RemoteCollaborator) -> Result<Self, Self::Error> {
        Ok(Self {
            id: require_id(collaborator.id, "collaborator")?,
            name: collaborator.name,
            email: collaborator.email,
        })
    }
}

// ============================================================================
// Status
// ============================================================================

/// Result of a mutation that returns no resource (complete, delete, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusRecord {
    pub status: String,
    pub message: String,
}

impl StatusRecord {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }
}

/// Normalize every element of a remote list, failing on the first bad one
pub fn normalize_all<R, T>(items: Vec<R>) -> Result<Vec<T>, TodoistError>
where
    T: TryFrom<R, Error = TodoistError>,
{
    items.into_iter().map(T::try_from).collect()
}
