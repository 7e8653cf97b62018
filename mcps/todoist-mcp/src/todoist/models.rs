//! Remote resource schemas
//!
//! Structs mirroring the JSON returned by the Todoist REST API. Every field
//! is optional so that a sparse or older payload still deserializes; the
//! normalizer in [`crate::records`] decides what is mandatory.

use serde::{Deserialize, Deserializer};

/// Todoist ids are strings today but older payloads used integers
fn flexible_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(Option::<Id>::deserialize(deserializer)?.map(|id| match id {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    }))
}

/// A task as returned by `GET /tasks` and friends
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteTask {
    #[serde(default, deserialize_with = "flexible_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub priority: Option<u8>,
    #[serde(default, deserialize_with = "flexible_id")]
    pub project_id: Option<String>,
    #[serde(default, deserialize_with = "flexible_id")]
    pub section_id: Option<String>,
    #[serde(default, deserialize_with = "flexible_id")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    /// Pre-v2 payloads carried label ids instead of names
    #[serde(default)]
    pub label_ids: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub due: Option<RemoteDue>,
}

/// Due date block of a task
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteDue {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub string: Option<String>,
    #[serde(default)]
    pub is_recurring: Option<bool>,
    #[serde(default)]
    pub datetime: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteProject {
    #[serde(default, deserialize_with = "flexible_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub is_favorite: Option<bool>,
    #[serde(default, alias = "inbox_project")]
    pub is_inbox_project: Option<bool>,
    #[serde(default, alias = "child_order")]
    pub order: Option<i64>,
    #[serde(default, deserialize_with = "flexible_id")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub view_style: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteSection {
    #[serde(default, deserialize_with = "flexible_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "section_order")]
    pub order: Option<i64>,
    #[serde(default, deserialize_with = "flexible_id")]
    pub project_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteLabel {
    #[serde(default, deserialize_with = "flexible_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, alias = "item_order")]
    pub order: Option<i64>,
    #[serde(default, alias = "favorite")]
    pub is_favorite: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteComment {
    #[serde(default, deserialize_with = "flexible_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub posted_at: Option<String>,
    #[serde(default, deserialize_with = "flexible_id")]
    pub task_id: Option<String>,
    #[serde(default, deserialize_with = "flexible_id")]
    pub project_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteCollaborator {
    #[serde(default, deserialize_with = "flexible_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
