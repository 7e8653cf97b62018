//! Integration tests for todoist-mcp
//!
//! Drive `TodoistMcpServer` through `EmbeddableMcp::call_tool` and
//! `read_document` against a local wiremock server standing in for the
//! Todoist REST API. No network access or real token is needed.

use mcp_common::{CallToolResult, EmbeddableError, EmbeddableMcp};
use serde_json::{json, Value};
use todoist_mcp::{Config, TodoistMcpServer};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn server_for(mock: &MockServer) -> TodoistMcpServer {
    let base_url = format!("{}/rest/v2", mock.uri());
    let config = Config::load_with(None, |key: &str| match key {
        "TODOIST_API_TOKEN" => Some("test-token".to_string()),
        "TODOIST_API_URL" => Some(base_url.clone()),
        _ => None,
    })
    .unwrap();
    TodoistMcpServer::new(&config).unwrap()
}

fn json_of(result: &CallToolResult) -> Value {
    let text = &result.content[0].as_text().unwrap().text;
    serde_json::from_str(text).unwrap()
}

fn milk() -> Value {
    json!({
        "id": "2995104339",
        "content": "Buy milk",
        "description": "",
        "priority": 2,
        "project_id": "2203306141",
        "section_id": null,
        "parent_id": null,
        "labels": [],
        "url": "https://todoist.com/showTask?id=2995104339",
        "created_at": "2019-12-11T22:36:50.000000Z",
        "due": {
            "date": "2025-01-02",
            "string": "tomorrow",
            "is_recurring": false
        }
    })
}

// ============================================================================
// Tasks
// ============================================================================

#[tokio::test]
async fn create_task_sends_only_supplied_fields() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v2/tasks"))
        .and(header("Authorization", "Bearer test-token"))
        .and(body_json(json!({
            "content": "Buy milk",
            "due_string": "tomorrow",
            "priority": 2
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(milk()))
        .expect(1)
        .mount(&mock)
        .await;

    let server = server_for(&mock);
    let result = server
        .call_tool(
            "create_task",
            json!({ "content": "Buy milk", "due_string": "tomorrow", "priority": 2 }),
        )
        .await
        .unwrap();

    let task = json_of(&result);
    assert_eq!(task["id"], "2995104339");
    assert_eq!(task["priority"], 2);
    assert_eq!(task["labels"], json!([]));
    assert_eq!(task["due"]["string"], "tomorrow");
    assert!(task["due"]["timezone"].is_null());
}

#[tokio::test]
async fn create_task_falls_back_to_direct_request() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v2/tasks"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/v2/tasks"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(milk()))
        .expect(1)
        .mount(&mock)
        .await;

    let server = server_for(&mock);
    let result = server
        .call_tool("create_task", json!({ "content": "Buy milk" }))
        .await
        .unwrap();

    assert_eq!(json_of(&result)["content"], "Buy milk");
}

#[tokio::test]
async fn create_task_reports_both_failures() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v2/tasks"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .expect(2)
        .mount(&mock)
        .await;

    let server = server_for(&mock);
    let err = server
        .call_tool("create_task", json!({ "content": "Buy milk" }))
        .await
        .unwrap_err();

    match err {
        EmbeddableError::McpError(message) => {
            assert_eq!(
                message,
                "Failed to create Todoist task: API error: 403 - Forbidden. \
                 Direct API error: API error: 403 - Forbidden"
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn get_tasks_with_filter_query() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v2/tasks"))
        .and(query_param("filter", "today | overdue"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([milk()])))
        .expect(1)
        .mount(&mock)
        .await;

    let server = server_for(&mock);
    let result = server
        .call_tool("get_tasks", json!({ "filter_query": "today | overdue" }))
        .await
        .unwrap();

    let tasks = json_of(&result);
    assert_eq!(tasks.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn complete_task_returns_status() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v2/tasks/2995104339/close"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock)
        .await;

    let server = server_for(&mock);
    let result = server
        .call_tool("complete_task", json!({ "task_id": "2995104339" }))
        .await
        .unwrap();

    assert_eq!(
        json_of(&result),
        json!({ "status": "success", "message": "Task 2995104339 completed successfully" })
    );
}

#[tokio::test]
async fn update_task_without_changes_is_rejected_locally() {
    let mock = MockServer::start().await;

    let server = server_for(&mock);
    let err = server
        .call_tool("update_task", json!({ "task_id": "2995104339" }))
        .await
        .unwrap_err();

    assert!(matches!(err, EmbeddableError::InvalidParams(m) if m.contains("No update data provided")));
    assert!(mock.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Projects, labels, comments
// ============================================================================

#[tokio::test]
async fn get_projects_defaults_flags() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v2/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "220474322", "name": "Inbox", "is_inbox_project": true },
            { "id": "220474323", "name": "Shopping" }
        ])))
        .mount(&mock)
        .await;

    let server = server_for(&mock);
    let projects = json_of(&server.call_tool("get_projects", json!({})).await.unwrap());

    assert_eq!(projects[0]["is_inbox_project"], true);
    assert_eq!(projects[1]["is_inbox_project"], false);
    assert_eq!(projects[1]["is_favorite"], false);
    assert!(projects[1]["view_style"].is_null());
}

#[tokio::test]
async fn archive_project_hits_archive_endpoint() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v2/projects/220474323/archive"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "220474323" })))
        .expect(1)
        .mount(&mock)
        .await;

    let server = server_for(&mock);
    let result = server
        .call_tool("archive_project", json!({ "project_id": "220474323" }))
        .await
        .unwrap();
    assert_eq!(json_of(&result)["message"], "Project 220474323 archived");
}

#[tokio::test]
async fn get_labels_reads_paginated_envelope() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v2/labels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "id": "2156154810", "name": "Food", "color": "charcoal" }],
            "next_cursor": "abc"
        })))
        .mount(&mock)
        .await;

    let server = server_for(&mock);
    let labels = json_of(&server.call_tool("get_labels", json!({})).await.unwrap());
    assert_eq!(labels[0]["name"], "Food");
    assert_eq!(labels[0]["favorite"], false);
}

#[tokio::test]
async fn get_comments_requires_a_target() {
    let mock = MockServer::start().await;

    let server = server_for(&mock);
    let err = server.call_tool("get_comments", json!({})).await.unwrap_err();

    assert!(matches!(err, EmbeddableError::InvalidParams(_)));
    assert!(mock.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn add_comment_to_task() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v2/comments"))
        .and(body_json(json!({ "content": "Need one bottle", "task_id": "2995104339" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "2992679862",
            "content": "Need one bottle",
            "posted_at": "2016-09-22T07:00:00.000000Z",
            "task_id": "2995104339",
            "project_id": null
        })))
        .expect(1)
        .mount(&mock)
        .await;

    let server = server_for(&mock);
    let comment = json_of(
        &server
            .call_tool(
                "add_comment",
                json!({ "content": "Need one bottle", "task_id": "2995104339" }),
            )
            .await
            .unwrap(),
    );
    assert_eq!(comment["task_id"], "2995104339");
    assert!(comment.get("project_id").is_none());
}

// ============================================================================
// Resources
// ============================================================================

#[tokio::test]
async fn project_tasks_resource_renders_markdown() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v2/tasks"))
        .and(query_param("project_id", "2203306141"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([milk()])))
        .expect(1)
        .mount(&mock)
        .await;

    let server = server_for(&mock);
    let doc = server
        .read_document("todoist://tasks/project/2203306141")
        .await
        .unwrap();

    assert_eq!(doc.mime_type, "text/markdown");
    assert!(doc.text.contains("| 2995104339 | Buy milk | 2025-01-02 | Medium |"));
    assert!(doc.text.contains("```json"));
}

#[tokio::test]
async fn label_resource_decodes_template_value() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v2/tasks"))
        .and(query_param("label", "Home Chores"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([milk()])))
        .expect(1)
        .mount(&mock)
        .await;

    let server = server_for(&mock);
    let doc = server
        .read_document("todoist://tasks/label/Home%20Chores")
        .await
        .unwrap();

    assert_eq!(doc.mime_type, "text/markdown");
    assert!(doc.text.contains("| 2995104339 | Buy milk |"));
}

#[tokio::test]
async fn resource_error_becomes_plain_text() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v2/labels"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock)
        .await;

    let server = server_for(&mock);
    let doc = server.read_document("todoist://labels").await.unwrap();

    assert_eq!(doc.mime_type, "text/plain");
    assert_eq!(
        doc.text,
        "Error accessing Todoist labels: Failed to get Todoist labels: API error: 401 - Unauthorized"
    );
}

#[tokio::test]
async fn empty_sections_resource() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v2/sections"))
        .and(query_param("project_id", "p9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock)
        .await;

    let server = server_for(&mock);
    let doc = server.read_document("todoist://sections/p9").await.unwrap();
    assert_eq!(doc.text, "No sections found for project p9.");
}
