//! Section-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{push_filter, BodyBuilder, QueryPairs, RequestBody};
use crate::todoist::TodoistResult;

/// Parameters for listing sections
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetSectionsParams {
    #[schemars(description = "Only list sections of this project")]
    pub project_id: Option<String>,
}

impl GetSectionsParams {
    pub fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_filter(&mut pairs, "project_id", &self.project_id);
        pairs
    }
}

/// Parameters for tools addressing a single section
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SectionIdParams {
    #[schemars(description = "ID of the section")]
    pub section_id: String,
}

/// Parameters for creating a section
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AddSectionParams {
    #[schemars(description = "Name of the section")]
    pub name: String,

    #[schemars(description = "ID of the project to add the section to")]
    pub project_id: String,

    #[schemars(description = "Order of the section within the project")]
    pub order: Option<i64>,
}

impl AddSectionParams {
    pub fn to_body(&self) -> TodoistResult<RequestBody> {
        Ok(BodyBuilder::new()
            .required("name", &self.name)?
            .required("project_id", &self.project_id)?
            .optional("order", &self.order)
            .build())
    }
}

/// Parameters for renaming a section
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateSectionParams {
    #[schemars(description = "ID of the section to update")]
    pub section_id: String,

    #[schemars(description = "New name for the section")]
    pub name: String,
}

impl UpdateSectionParams {
    pub fn to_body(&self) -> TodoistResult<RequestBody> {
        Ok(BodyBuilder::new().required("name", &self.name)?.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_section_requires_project() {
        let params = AddSectionParams {
            name: "Groceries".to_string(),
            ..Default::default()
        };
        let err = params.to_body().unwrap_err();
        assert_eq!(err.to_string(), "project_id is required");
    }

    #[test]
    fn test_add_section_with_order() {
        let params = AddSectionParams {
            name: "Groceries".to_string(),
            project_id: "p1".to_string(),
            order: Some(2),
        };
        let body = params.to_body().unwrap();
        assert_eq!(body.len(), 3);
        assert_eq!(body["order"], 2);
    }

    #[test]
    fn test_update_section_requires_name() {
        let params = UpdateSectionParams {
            section_id: "s1".to_string(),
            name: String::new(),
        };
        assert!(params.to_body().unwrap_err().is_validation());
    }

    #[test]
    fn test_sections_query() {
        assert!(GetSectionsParams::default().to_query().is_empty());
        let params = GetSectionsParams {
            project_id: Some("p1".to_string()),
        };
        assert_eq!(params.to_query(), vec![("project_id", "p1".to_string())]);
    }
}
