//! Canned prompts for common Todoist requests

use std::collections::HashMap;

use crate::todoist::{TodoistError, TodoistResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptArgument {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub arguments: &'static [PromptArgument],
}

pub const PROMPTS: &[PromptTemplate] = &[
    PromptTemplate {
        name: "create_task_prompt",
        description: "Prompt to create a new task",
        arguments: &[
            PromptArgument {
                name: "content",
                description: "Task content/title",
                required: true,
            },
            PromptArgument {
                name: "due_date",
                description: "Optional due date in natural language",
                required: false,
            },
        ],
    },
    PromptTemplate {
        name: "show_tasks_prompt",
        description: "Prompt to show all tasks",
        arguments: &[],
    },
    PromptTemplate {
        name: "complete_task_prompt",
        description: "Prompt to complete a task by name",
        arguments: &[PromptArgument {
            name: "task_name",
            description: "Name of the task to complete",
            required: true,
        }],
    },
];

pub fn find(name: &str) -> Option<&'static PromptTemplate> {
    PROMPTS.iter().find(|p| p.name == name)
}

fn argument<'a>(args: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    args.get(name).map(String::as_str).filter(|v| !v.trim().is_empty())
}

fn required<'a>(args: &'a HashMap<String, String>, name: &str) -> TodoistResult<&'a str> {
    argument(args, name)
        .ok_or_else(|| TodoistError::validation(format!("Missing required argument: {name}")))
}

/// Render a prompt's user message from its arguments
pub fn render(name: &str, args: &HashMap<String, String>) -> TodoistResult<String> {
    match name {
        "create_task_prompt" => {
            let content = required(args, "content")?;
            let mut text = format!("Please create a new task titled '{content}'");
            if let Some(due) = argument(args, "due_date") {
                text.push_str(&format!(" due {due}"));
            }
            text.push('.');
            Ok(text)
        }
        "show_tasks_prompt" => Ok("Please show me my current tasks in Todoist.".to_string()),
        "complete_task_prompt" => {
            let task_name = required(args, "task_name")?;
            Ok(format!("Please mark the task '{task_name}' as complete."))
        }
        other => Err(TodoistError::validation(format!("Unknown prompt: {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_create_task_prompt() {
        assert_eq!(
            render("create_task_prompt", &args(&[("content", "Buy milk")])).unwrap(),
            "Please create a new task titled 'Buy milk'."
        );
        assert_eq!(
            render(
                "create_task_prompt",
                &args(&[("content", "Buy milk"), ("due_date", "tomorrow")])
            )
            .unwrap(),
            "Please create a new task titled 'Buy milk' due tomorrow."
        );
    }

    #[test]
    fn test_complete_task_prompt_requires_name() {
        let err = render("complete_task_prompt", &HashMap::new()).unwrap_err();
        assert_eq!(err.to_string(), "Missing required argument: task_name");
        assert_eq!(
            render("complete_task_prompt", &args(&[("task_name", "Pay rent")])).unwrap(),
            "Please mark the task 'Pay rent' as complete."
        );
    }

    #[test]
    fn test_every_listed_prompt_renders() {
        let full = args(&[("content", "x"), ("task_name", "y")]);
        for prompt in PROMPTS {
            assert!(render(prompt.name, &full).is_ok(), "{}", prompt.name);
            assert_eq!(find(prompt.name), Some(prompt));
        }
        assert!(render("nope", &full).unwrap_err().is_validation());
    }
}
