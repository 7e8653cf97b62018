//! Markdown rendering for resource documents
//!
//! Every list resource is rendered as a table of the salient columns,
//! followed by the complete normalized list as pretty JSON inside a
//! collapsible `<details>` block. Rendering never fails: an empty list or
//! an upstream error becomes a short plain-text document instead.

use serde::Serialize;

use crate::records::{LabelRecord, ProjectRecord, SectionRecord, TaskRecord};
use crate::todoist::TodoistResult;

pub const MARKDOWN_MIME: &str = "text/markdown";
pub const PLAIN_MIME: &str = "text/plain";

/// A rendered resource body and its MIME type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub text: String,
    pub mime_type: &'static str,
}

impl Document {
    fn markdown(text: String) -> Self {
        Self {
            text,
            mime_type: MARKDOWN_MIME,
        }
    }

    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mime_type: PLAIN_MIME,
        }
    }
}

/// Human label for a Todoist priority level
pub fn priority_label(priority: Option<u8>) -> &'static str {
    match priority {
        Some(2) => "Medium",
        Some(3) => "High",
        Some(4) => "Urgent",
        _ => "Normal",
    }
}

/// Table cell text; pipes would split the column and newlines the row
fn cell(value: Option<&str>) -> String {
    value
        .unwrap_or("None")
        .replace('|', "\\|")
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
}

fn flag(set: bool, mark: &str) -> &str {
    if set {
        mark
    } else {
        ""
    }
}

/// Append the raw data block shared by every table document
fn push_raw_data<T: Serialize>(out: &mut String, records: &[T]) {
    let json = serde_json::to_string_pretty(records).unwrap_or_else(|e| e.to_string());
    out.push_str("\n\n<details>\n<summary>Raw Data (Click to expand)</summary>\n\n```json\n");
    out.push_str(&json);
    out.push_str("\n```\n</details>\n");
}

/// Shared shape: error text, empty message, or header + rows + raw data
fn render<T, F>(
    result: TodoistResult<Vec<T>>,
    entities: &str,
    empty: String,
    header: String,
    row: F,
) -> Document
where
    T: Serialize,
    F: Fn(&T) -> String,
{
    let records = match result {
        Ok(records) => records,
        Err(e) => return Document::plain(format!("Error accessing Todoist {entities}: {e}")),
    };
    if records.is_empty() {
        return Document::plain(empty);
    }

    let mut out = header;
    for record in &records {
        out.push_str(&row(record));
        out.push('\n');
    }
    push_raw_data(&mut out, &records);
    Document::markdown(out)
}

pub fn tasks_document(result: TodoistResult<Vec<TaskRecord>>) -> Document {
    render(
        result,
        "tasks",
        "No tasks found.".to_string(),
        "# Todoist Tasks\n\n| ID | Task | Due | Priority |\n|:---|:-----|:----|:--------|\n"
            .to_string(),
        |task| {
            let due = task.due.as_ref().and_then(|d| d.date.as_deref());
            format!(
                "| {} | {} | {} | {} |",
                task.id,
                cell(task.content.as_deref()),
                cell(due),
                priority_label(task.priority)
            )
        },
    )
}

pub fn projects_document(result: TodoistResult<Vec<ProjectRecord>>) -> Document {
    render(
        result,
        "projects",
        "No projects found.".to_string(),
        "# Todoist Projects\n\n| ID | Project Name | Is Favorite | Is Inbox |\n\
         |:---|:------------|:------------|:--------|\n"
            .to_string(),
        |project| {
            format!(
                "| {} | {} | {} | {} |",
                project.id,
                cell(project.name.as_deref()),
                flag(project.is_favorite, "★"),
                flag(project.is_inbox_project, "✓")
            )
        },
    )
}

pub fn sections_document(
    project_id: &str,
    result: TodoistResult<Vec<SectionRecord>>,
) -> Document {
    let header = format!(
        "# Sections for Project {project_id}\n\n| ID | Section Name | Order |\n|:---|:------------|:-----|\n"
    );
    render(
        result,
        "sections",
        format!("No sections found for project {project_id}."),
        header,
        |section| {
            let order = section.order.map(|o| o.to_string());
            format!(
                "| {} | {} | {} |",
                section.id,
                cell(section.name.as_deref()),
                cell(order.as_deref())
            )
        },
    )
}

pub fn labels_document(result: TodoistResult<Vec<LabelRecord>>) -> Document {
    render(
        result,
        "labels",
        "No labels found.".to_string(),
        "# Todoist Labels\n\n| ID | Label Name | Color | Is Favorite |\n\
         |:---|:-----------|:------|:-----------|\n"
            .to_string(),
        |label| {
            format!(
                "| {} | {} | {} | {} |",
                label.id,
                cell(label.name.as_deref()),
                cell(label.color.as_deref()),
                flag(label.favorite, "★")
            )
        },
    )
}
