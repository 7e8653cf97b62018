//! Project-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{BodyBuilder, RequestBody};
use crate::todoist::TodoistResult;

/// Parameters for tools addressing a single project
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ProjectIdParams {
    #[schemars(description = "ID of the project")]
    pub project_id: String,
}

/// Parameters for creating a project
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AddProjectParams {
    #[schemars(description = "Name of the project")]
    pub name: String,

    #[schemars(description = "ID of the parent project, for nested projects")]
    pub parent_id: Option<String>,

    #[schemars(description = "Color name for the project (e.g. 'berry_red')")]
    pub color: Option<String>,

    #[schemars(description = "Whether the project is a favorite")]
    pub is_favorite: Option<bool>,

    #[schemars(description = "Project view style ('list' or 'board')")]
    pub view_style: Option<String>,
}

impl AddProjectParams {
    pub fn to_body(&self) -> TodoistResult<RequestBody> {
        Ok(BodyBuilder::new()
            .required("name", &self.name)?
            .optional("parent_id", &self.parent_id)
            .optional("color", &self.color)
            .optional("is_favorite", &self.is_favorite)
            .optional("view_style", &self.view_style)
            .build())
    }
}

/// Parameters for updating a project
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateProjectParams {
    #[schemars(description = "ID of the project to update")]
    pub project_id: String,

    #[schemars(description = "New name for the project")]
    pub name: Option<String>,

    #[schemars(description = "New color for the project")]
    pub color: Option<String>,

    #[schemars(description = "Whether the project is a favorite")]
    pub is_favorite: Option<bool>,

    #[schemars(description = "New view style ('list' or 'board')")]
    pub view_style: Option<String>,
}

impl UpdateProjectParams {
    pub fn to_body(&self) -> TodoistResult<RequestBody> {
        BodyBuilder::new()
            .optional("name", &self.name)
            .optional("color", &self.color)
            .optional("is_favorite", &self.is_favorite)
            .optional("view_style", &self.view_style)
            .build_update()
    }
}
