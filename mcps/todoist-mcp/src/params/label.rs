//! Label-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{BodyBuilder, RequestBody};
use crate::todoist::TodoistResult;

/// Parameters for tools addressing a single label
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LabelIdParams {
    #[schemars(description = "ID of the label")]
    pub label_id: String,
}

/// Parameters for creating a personal label
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AddLabelParams {
    #[schemars(description = "Name of the label")]
    pub name: String,

    #[schemars(description = "Color name for the label")]
    pub color: Option<String>,

    #[schemars(description = "Position of the label in the label list")]
    pub order: Option<i64>,

    #[serde(alias = "favorite")]
    #[schemars(description = "Whether the label is a favorite")]
    pub is_favorite: Option<bool>,
}

impl AddLabelParams {
    pub fn to_body(&self) -> TodoistResult<RequestBody> {
        Ok(BodyBuilder::new()
            .required("name", &self.name)?
            .optional("color", &self.color)
            .optional("order", &self.order)
            .optional("is_favorite", &self.is_favorite)
            .build())
    }
}

/// Parameters for updating a label
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateLabelParams {
    #[schemars(description = "ID of the label to update")]
    pub label_id: String,

    #[schemars(description = "New name for the label")]
    pub name: Option<String>,

    #[schemars(description = "New color for the label")]
    pub color: Option<String>,

    #[schemars(description = "New position in the label list")]
    pub order: Option<i64>,

    #[serde(alias = "favorite")]
    #[schemars(description = "Whether the label is a favorite")]
    pub is_favorite: Option<bool>,
}

impl UpdateLabelParams {
    pub fn to_body(&self) -> TodoistResult<RequestBody> {
        BodyBuilder::new()
            .optional("name", &self.name)
            .optional("color", &self.color)
            .optional("order", &self.order)
            .optional("is_favorite", &self.is_favorite)
            .build_update()
    }
}
