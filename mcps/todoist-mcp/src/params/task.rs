//! Task-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{check_priority, push_filter, BodyBuilder, QueryPairs, RequestBody};
use crate::todoist::TodoistResult;

/// Parameters for creating a task
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateTaskParams {
    #[schemars(description = "The content/title of the task")]
    pub content: String,

    #[schemars(description = "Detailed description of the task")]
    pub description: Option<String>,

    #[schemars(description = "Natural language due date like 'tomorrow' or 'next Monday'")]
    pub due_string: Option<String>,

    #[schemars(description = "Due date in YYYY-MM-DD format")]
    pub due_date: Option<String>,

    #[schemars(description = "Due date with time in RFC3339 format")]
    pub due_datetime: Option<String>,

    #[schemars(description = "Language for parsing due_string, e.g. 'en' or 'fr'")]
    pub due_lang: Option<String>,

    #[schemars(description = "Task priority from 1 (normal) to 4 (urgent)")]
    pub priority: Option<u8>,

    #[schemars(description = "ID of the project to add the task to")]
    pub project_id: Option<String>,

    #[schemars(description = "ID of the section to add the task to")]
    pub section_id: Option<String>,

    #[schemars(description = "Label names to apply to the task")]
    pub labels: Option<Vec<String>>,

    #[schemars(description = "ID of the parent task, for subtasks")]
    pub parent_id: Option<String>,

    #[schemars(description = "User ID to whom the task is assigned")]
    pub assignee_id: Option<String>,

    #[schemars(description = "Task order in the Today or Next 7 days view")]
    pub day_order: Option<i64>,
}

impl CreateTaskParams {
    pub fn to_body(&self) -> TodoistResult<RequestBody> {
        check_priority(self.priority)?;
        Ok(BodyBuilder::new()
            .required("content", &self.content)?
            .optional("description", &self.description)
            .optional("due_string", &self.due_string)
            .optional("due_date", &self.due_date)
            .optional("due_datetime", &self.due_datetime)
            .optional("due_lang", &self.due_lang)
            .optional("priority", &self.priority)
            .optional("project_id", &self.project_id)
            .optional("section_id", &self.section_id)
            .optional("labels", &self.labels)
            .optional("parent_id", &self.parent_id)
            .optional("assignee_id", &self.assignee_id)
            .optional("day_order", &self.day_order)
            .build())
    }
}

/// Parameters for listing tasks
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetTasksParams {
    #[schemars(description = "Filter tasks by project ID")]
    pub project_id: Option<String>,

    #[schemars(description = "Filter tasks by section ID")]
    pub section_id: Option<String>,

    #[schemars(description = "Filter tasks by label name")]
    pub label: Option<String>,

    #[schemars(
        description = "Filter using Todoist's filter language (e.g. 'today | overdue'). Takes precedence over the other filters"
    )]
    pub filter_query: Option<String>,
}

impl GetTasksParams {
    /// A filter query wins outright; otherwise every non-empty attribute
    /// filter is forwarded and the API decides how they combine.
    pub fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_filter(&mut pairs, "filter", &self.filter_query);
        if !pairs.is_empty() {
            return pairs;
        }
        push_filter(&mut pairs, "project_id", &self.project_id);
        push_filter(&mut pairs, "section_id", &self.section_id);
        push_filter(&mut pairs, "label", &self.label);
        pairs
    }
}

/// Parameters for tools addressing a single task
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TaskIdParams {
    #[schemars(description = "ID of the task")]
    pub task_id: String,
}

/// Parameters for updating a task
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTaskParams {
    #[schemars(description = "ID of the task to update")]
    pub task_id: String,

    #[schemars(description = "New task content/title")]
    pub content: Option<String>,

    #[schemars(description = "New task description")]
    pub description: Option<String>,

    #[schemars(description = "New due date in natural language")]
    pub due_string: Option<String>,

    #[schemars(description = "New due date in YYYY-MM-DD format")]
    pub due_date: Option<String>,

    #[schemars(description = "New due date with time in RFC3339 format")]
    pub due_datetime: Option<String>,

    #[schemars(description = "Language for parsing due_string, e.g. 'en' or 'fr'")]
    pub due_lang: Option<String>,

    #[schemars(description = "New priority from 1 (normal) to 4 (urgent)")]
    pub priority: Option<u8>,

    #[schemars(description = "Label names to apply to the task (replaces existing)")]
    pub labels: Option<Vec<String>>,

    #[schemars(description = "User ID to whom the task is assigned")]
    pub assignee_id: Option<String>,

    #[schemars(description = "Task order in the Today or Next 7 days view")]
    pub day_order: Option<i64>,
}

impl UpdateTaskParams {
    pub fn to_body(&self) -> TodoistResult<RequestBody> {
        check_priority(self.priority)?;
        BodyBuilder::new()
            .optional("content", &self.content)
            .optional("description", &self.description)
            .optional("due_string", &self.due_string)
            .optional("due_date", &self.due_date)
            .optional("due_datetime", &self.due_datetime)
            .optional("due_lang", &self.due_lang)
            .optional("priority", &self.priority)
            .optional("labels", &self.labels)
            .optional("assignee_id", &self.assignee_id)
            .optional("day_order", &self.day_order)
            .build_update()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn keys(body: &RequestBody) -> Vec<&str> {
        let mut keys: Vec<&str> = body.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn test_create_body_has_content_and_supplied_keys_only() {
        let params = CreateTaskParams {
            content: "Buy milk".to_string(),
            due_string: Some("tomorrow".to_string()),
            priority: Some(2),
            ..Default::default()
        };

        let body = params.to_body().unwrap();
        assert_eq!(
            serde_json::Value::Object(body),
            json!({ "content": "Buy milk", "due_string": "tomorrow", "priority": 2 })
        );
    }

    #[test]
    fn test_create_body_every_optional_key() {
        let params = CreateTaskParams {
            content: "Plan trip".to_string(),
            description: Some("Book flights".to_string()),
            due_string: Some("next Monday".to_string()),
            due_date: Some("2025-03-01".to_string()),
            due_datetime: Some("2025-03-01T09:00:00Z".to_string()),
            due_lang: Some("en".to_string()),
            priority: Some(4),
            project_id: Some("p1".to_string()),
            section_id: Some("s1".to_string()),
            labels: Some(vec!["travel".to_string()]),
            parent_id: Some("t0".to_string()),
            assignee_id: Some("u1".to_string()),
            day_order: Some(3),
        };

        let body = params.to_body().unwrap();
        assert_eq!(
            keys(&body),
            vec![
                "assignee_id",
                "content",
                "day_order",
                "description",
                "due_date",
                "due_datetime",
                "due_lang",
                "due_string",
                "labels",
                "parent_id",
                "priority",
                "project_id",
                "section_id",
            ]
        );
        assert_eq!(body["labels"], json!(["travel"]));
    }

    #[test]
    fn test_create_requires_content() {
        let err = CreateTaskParams::default().to_body().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_create_rejects_out_of_range_priority() {
        let params = CreateTaskParams {
            content: "x".to_string(),
            priority: Some(7),
            ..Default::default()
        };
        assert!(params.to_body().unwrap_err().is_validation());
    }

    #[test]
    fn test_update_requires_a_field() {
        let params = UpdateTaskParams {
            task_id: "1".to_string(),
            ..Default::default()
        };
        let err = params.to_body().unwrap_err();
        assert_eq!(err.to_string(), "No update data provided");
    }

    #[test]
    fn test_update_with_one_field() {
        let params = UpdateTaskParams {
            task_id: "1".to_string(),
            description: Some(String::new()),
            ..Default::default()
        };
        let body = params.to_body().unwrap();
        assert_eq!(keys(&body), vec!["description"]);
    }

    #[test]
    fn test_filter_query_takes_precedence() {
        let params = GetTasksParams {
            project_id: Some("p1".to_string()),
            label: Some("home".to_string()),
            filter_query: Some("today | overdue".to_string()),
            ..Default::default()
        };
        assert_eq!(
            params.to_query(),
            vec![("filter", "today | overdue".to_string())]
        );
    }

    #[test]
    fn test_attribute_filters_are_combined() {
        let params = GetTasksParams {
            project_id: Some("p1".to_string()),
            section_id: Some(String::new()),
            label: Some("home".to_string()),
            filter_query: None,
        };
        assert_eq!(
            params.to_query(),
            vec![
                ("project_id", "p1".to_string()),
                ("label", "home".to_string())
            ]
        );
    }

    #[test]
    fn test_no_filters_yields_empty_query() {
        assert!(GetTasksParams::default().to_query().is_empty());
    }
}
