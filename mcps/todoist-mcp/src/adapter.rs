//! Todoist adaptation layer
//!
//! [`TodoistAdapter`] implements every logical operation the server exposes.
//! Each one follows the same shape:
//!
//! 1. report entry through the host hooks
//! 2. build the request from the typed parameters (validation happens here)
//! 3. perform exactly one remote call
//! 4. normalize the response into a record from [`crate::records`]
//!
//! Any failure is reported through the hooks and returned wrapped in
//! [`TodoistError::Operation`], naming the operation. Task creation is the
//! single exception to "exactly one call": when the primary call fails it is
//! retried once through [`TodoistApi::create_task_direct`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::params::*;
use crate::records::{
    normalize_all, CollaboratorRecord, CommentRecord, LabelRecord, ProjectRecord, SectionRecord,
    StatusRecord, TaskRecord,
};
use crate::todoist::models::{
    RemoteCollaborator, RemoteComment, RemoteLabel, RemoteProject, RemoteSection, RemoteTask,
};
use crate::todoist::{ApiRequest, TodoistApi, TodoistError, TodoistResult};

/// Logging hooks supplied by the invoking host
///
/// Called at entry and on failure of every operation. Calls are
/// fire-and-forget; implementations must not block.
pub trait OperationHooks: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Hooks that forward to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingHooks;

impl OperationHooks for TracingHooks {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Decode a remote payload into one of the resource schemas
fn decode<T: DeserializeOwned>(value: Value) -> TodoistResult<T> {
    serde_json::from_value(value)
        .map_err(|e| TodoistError::remote(format!("unexpected response shape: {e}")))
}

/// List endpoints answer with a bare array, or with `{ "results": [...] }`
/// on the paginated API. Only the first page is read.
fn decode_list<T: DeserializeOwned>(value: Value) -> TodoistResult<Vec<T>> {
    match value {
        Value::Object(mut map) if map.contains_key("results") => {
            decode(map.remove("results").unwrap_or(Value::Null))
        }
        Value::Null => Ok(Vec::new()),
        other => decode(other),
    }
}

fn one<R, T>(value: Value) -> TodoistResult<T>
where
    R: DeserializeOwned,
    T: TryFrom<R, Error = TodoistError>,
{
    T::try_from(decode::<R>(value)?)
}

fn many<R, T>(value: Value) -> TodoistResult<Vec<T>>
where
    R: DeserializeOwned,
    T: TryFrom<R, Error = TodoistError>,
{
    normalize_all(decode_list::<R>(value)?)
}

/// Adapter over the Todoist API
pub struct TodoistAdapter {
    api: Arc<dyn TodoistApi>,
    hooks: Option<Arc<dyn OperationHooks>>,
}

impl TodoistAdapter {
    pub fn new(api: Arc<dyn TodoistApi>, hooks: Option<Arc<dyn OperationHooks>>) -> Self {
        Self { api, hooks }
    }

    fn info(&self, message: impl AsRef<str>) {
        if let Some(hooks) = &self.hooks {
            hooks.info(message.as_ref());
        }
    }

    /// Report a failure and wrap it with the operation name
    fn fail(&self, operation: &'static str, err: TodoistError) -> TodoistError {
        let err = err.during(operation);
        if let Some(hooks) = &self.hooks {
            hooks.error(&err.to_string());
        }
        err
    }

    async fn run<T, F>(&self, operation: &'static str, fut: F) -> TodoistResult<T>
    where
        F: std::future::Future<Output = TodoistResult<T>>,
    {
        fut.await.map_err(|e| self.fail(operation, e))
    }

    async fn call(&self, request: ApiRequest) -> TodoistResult<Value> {
        self.api.execute(&request).await
    }

    /// Perform a mutation that returns no resource and report success
    async fn act(&self, request: ApiRequest, message: String) -> TodoistResult<StatusRecord> {
        self.call(request).await?;
        Ok(StatusRecord::success(message))
    }

    // ========================================================================
    // Tasks
    // ========================================================================

    pub async fn create_task(&self, params: CreateTaskParams) -> TodoistResult<TaskRecord> {
        self.info(format!("Creating Todoist task: {}", params.content));
        self.run("create Todoist task", async {
            let body = params.to_body()?;

            let value = match self.call(ApiRequest::post("tasks", Some(body.clone()))).await {
                Ok(value) => value,
                Err(primary) => {
                    if let Some(hooks) = &self.hooks {
                        hooks.error(&format!("Primary task creation failed: {primary}"));
                    }
                    self.info("Retrying task creation with a direct API request");
                    self.api.create_task_direct(&body).await.map_err(|direct| {
                        TodoistError::remote(format!("{primary}. Direct API error: {direct}"))
                    })?
                }
            };

            let task: TaskRecord = one::<RemoteTask, _>(value)?;
            self.info(format!("Task created successfully: {}", task.id));
            Ok::<_, TodoistError>(task)
        })
        .await
    }

    pub async fn get_tasks(&self, params: GetTasksParams) -> TodoistResult<Vec<TaskRecord>> {
        self.info("Fetching Todoist tasks");
        self.run("get Todoist tasks", async {
            let value = self
                .call(ApiRequest::get("tasks").with_query(params.to_query()))
                .await?;
            many::<RemoteTask, _>(value)
        })
        .await
    }

    pub async fn get_task(&self, params: TaskIdParams) -> TodoistResult<TaskRecord> {
        self.info(format!("Fetching Todoist task: {}", params.task_id));
        self.run("get Todoist task", async {
            let id = require_id("task_id", &params.task_id)?;
            one::<RemoteTask, _>(self.call(ApiRequest::get(format!("tasks/{id}"))).await?)
        })
        .await
    }

    pub async fn update_task(&self, params: UpdateTaskParams) -> TodoistResult<TaskRecord> {
        self.info(format!("Updating Todoist task: {}", params.task_id));
        self.run("update Todoist task", async {
            let id = require_id("task_id", &params.task_id)?;
            let body = params.to_body()?;
            let value = self
                .call(ApiRequest::post(format!("tasks/{id}"), Some(body)))
                .await?;
            one::<RemoteTask, _>(value)
        })
        .await
    }

    pub async fn complete_task(&self, params: TaskIdParams) -> TodoistResult<StatusRecord> {
        self.info(format!("Completing Todoist task: {}", params.task_id));
        self.run("complete Todoist task", async {
            let id = require_id("task_id", &params.task_id)?;
            self.act(
                ApiRequest::post(format!("tasks/{id}/close"), None),
                format!("Task {id} completed successfully"),
            )
            .await
        })
        .await
    }

    pub async fn uncomplete_task(&self, params: TaskIdParams) -> TodoistResult<StatusRecord> {
        self.info(format!("Reopening Todoist task: {}", params.task_id));
        self.run("reopen Todoist task", async {
            let id = require_id("task_id", &params.task_id)?;
            self.act(
                ApiRequest::post(format!("tasks/{id}/reopen"), None),
                format!("Task {id} reopened successfully"),
            )
            .await
        })
        .await
    }

    pub async fn delete_task(&self, params: TaskIdParams) -> TodoistResult<StatusRecord> {
        self.info(format!("Deleting Todoist task: {}", params.task_id));
        self.run("delete Todoist task", async {
            let id = require_id("task_id", &params.task_id)?;
            self.act(
                ApiRequest::delete(format!("tasks/{id}")),
                format!("Task {id} deleted successfully"),
            )
            .await
        })
        .await
    }

    // ========================================================================
    // Projects
    // ========================================================================

    pub async fn get_projects(&self) -> TodoistResult<Vec<ProjectRecord>> {
        self.info("Fetching Todoist projects");
        self.run("get Todoist projects", async {
            many::<RemoteProject, _>(self.call(ApiRequest::get("projects")).await?)
        })
        .await
    }

    pub async fn get_project(&self, params: ProjectIdParams) -> TodoistResult<ProjectRecord> {
        self.info(format!("Fetching Todoist project: {}", params.project_id));
        self.run("get Todoist project", async {
            let id = require_id("project_id", &params.project_id)?;
            one::<RemoteProject, _>(self.call(ApiRequest::get(format!("projects/{id}"))).await?)
        })
        .await
    }

    pub async fn add_project(&self, params: AddProjectParams) -> TodoistResult<ProjectRecord> {
        self.info(format!("Creating Todoist project: {}", params.name));
        self.run("create Todoist project", async {
            let body = params.to_body()?;
            one::<RemoteProject, _>(self.call(ApiRequest::post("projects", Some(body))).await?)
        })
        .await
    }

    pub async fn update_project(
        &self,
        params: UpdateProjectParams,
    ) -> TodoistResult<ProjectRecord> {
        self.info(format!("Updating Todoist project: {}", params.project_id));
        self.run("update Todoist project", async {
            let id = require_id("project_id", &params.project_id)?;
            let body = params.to_body()?;
            let value = self
                .call(ApiRequest::post(format!("projects/{id}"), Some(body)))
                .await?;
            one::<RemoteProject, _>(value)
        })
        .await
    }

    pub async fn delete_project(&self, params: ProjectIdParams) -> TodoistResult<StatusRecord> {
        self.info(format!("Deleting Todoist project: {}", params.project_id));
        self.run("delete Todoist project", async {
            let id = require_id("project_id", &params.project_id)?;
            self.act(
                ApiRequest::delete(format!("projects/{id}")),
                format!("Project {id} deleted"),
            )
            .await
        })
        .await
    }

    pub async fn archive_project(&self, params: ProjectIdParams) -> TodoistResult<StatusRecord> {
        self.info(format!("Archiving Todoist project: {}", params.project_id));
        self.run("archive Todoist project", async {
            let id = require_id("project_id", &params.project_id)?;
            self.act(
                ApiRequest::post(format!("projects/{id}/archive"), None),
                format!("Project {id} archived"),
            )
            .await
        })
        .await
    }

    pub async fn unarchive_project(
        &self,
        params: ProjectIdParams,
    ) -> TodoistResult<StatusRecord> {
        self.info(format!("Unarchiving Todoist project: {}", params.project_id));
        self.run("unarchive Todoist project", async {
            let id = require_id("project_id", &params.project_id)?;
            self.act(
                ApiRequest::post(format!("projects/{id}/unarchive"), None),
                format!("Project {id} unarchived"),
            )
            .await
        })
        .await
    }

    pub async fn get_collaborators(
        &self,
        params: ProjectIdParams,
    ) -> TodoistResult<Vec<CollaboratorRecord>> {
        self.info(format!(
            "Fetching collaborators for project: {}",
            params.project_id
        ));
        self.run("get project collaborators", async {
            let id = require_id("project_id", &params.project_id)?;
            let value = self
                .call(ApiRequest::get(format!("projects/{id}/collaborators")))
                .await?;
            many::<RemoteCollaborator, _>(value)
        })
        .await
    }

    // ========================================================================
    // Sections
    // ========================================================================

    pub async fn get_sections(
        &self,
        params: GetSectionsParams,
    ) -> TodoistResult<Vec<SectionRecord>> {
        self.info("Fetching Todoist sections");
        self.run("get Todoist sections", async {
            let value = self
                .call(ApiRequest::get("sections").with_query(params.to_query()))
                .await?;
            many::<RemoteSection, _>(value)
        })
        .await
    }

    pub async fn get_section(&self, params: SectionIdParams) -> TodoistResult<SectionRecord> {
        self.info(format!("Fetching Todoist section: {}", params.section_id));
        self.run("get Todoist section", async {
            let id = require_id("section_id", &params.section_id)?;
            one::<RemoteSection, _>(self.call(ApiRequest::get(format!("sections/{id}"))).await?)
        })
        .await
    }

    pub async fn add_section(&self, params: AddSectionParams) -> TodoistResult<SectionRecord> {
        self.info(format!("Creating Todoist section: {}", params.name));
        self.run("create Todoist section", async {
            let body = params.to_body()?;
            one::<RemoteSection, _>(self.call(ApiRequest::post("sections", Some(body))).await?)
        })
        .await
    }

    pub async fn update_section(
        &self,
        params: UpdateSectionParams,
    ) -> TodoistResult<SectionRecord> {
        self.info(format!("Updating Todoist section: {}", params.section_id));
        self.run("update Todoist section", async {
            let id = require_id("section_id", &params.section_id)?;
            let body = params.to_body()?;
            let value = self
                .call(ApiRequest::post(format!("sections/{id}"), Some(body)))
                .await?;
            one::<RemoteSection, _>(value)
        })
        .await
    }

    pub async fn delete_section(&self, params: SectionIdParams) -> TodoistResult<StatusRecord> {
        self.info(format!("Deleting Todoist section: {}", params.section_id));
        self.run("delete Todoist section", async {
            let id = require_id("section_id", &params.section_id)?;
            self.act(
                ApiRequest::delete(format!("sections/{id}")),
                format!("Section {id} deleted"),
            )
            .await
        })
        .await
    }

    // ========================================================================
    // Labels
    // ========================================================================

    pub async fn get_labels(&self) -> TodoistResult<Vec<LabelRecord>> {
        self.info("Fetching Todoist labels");
        self.run("get Todoist labels", async {
            many::<RemoteLabel, _>(self.call(ApiRequest::get("labels")).await?)
        })
        .await
    }

    pub async fn get_label(&self, params: LabelIdParams) -> TodoistResult<LabelRecord> {
        self.info(format!("Fetching Todoist label: {}", params.label_id));
        self.run("get Todoist label", async {
            let id = require_id("label_id", &params.label_id)?;
            one::<RemoteLabel, _>(self.call(ApiRequest::get(format!("labels/{id}"))).await?)
        })
        .await
    }

    pub async fn add_label(&self, params: AddLabelParams) -> TodoistResult<LabelRecord> {
        self.info(format!("Creating Todoist label: {}", params.name));
        self.run("create Todoist label", async {
            let body = params.to_body()?;
            one::<RemoteLabel, _>(self.call(ApiRequest::post("labels", Some(body))).await?)
        })
        .await
    }

    pub async fn update_label(&self, params: UpdateLabelParams) -> TodoistResult<LabelRecord> {
        self.info(format!("Updating Todoist label: {}", params.label_id));
        self.run("update Todoist label", async {
            let id = require_id("label_id", &params.label_id)?;
            let body = params.to_body()?;
            let value = self
                .call(ApiRequest::post(format!("labels/{id}"), Some(body)))
                .await?;
            one::<RemoteLabel, _>(value)
        })
        .await
    }

    pub async fn delete_label(&self, params: LabelIdParams) -> TodoistResult<StatusRecord> {
        self.info(format!("Deleting Todoist label: {}", params.label_id));
        self.run("delete Todoist label", async {
            let id = require_id("label_id", &params.label_id)?;
            self.act(
                ApiRequest::delete(format!("labels/{id}")),
                format!("Label {id} deleted"),
            )
            .await
        })
        .await
    }

    // ========================================================================
    // Comments
    // ========================================================================

    pub async fn get_comments(
        &self,
        params: GetCommentsParams,
    ) -> TodoistResult<Vec<CommentRecord>> {
        self.info("Fetching Todoist comments");
        self.run("get Todoist comments", async {
            let query = params.to_query()?;
            let value = self
                .call(ApiRequest::get("comments").with_query(query))
                .await?;
            many::<RemoteComment, _>(value)
        })
        .await
    }

    pub async fn get_comment(&self, params: CommentIdParams) -> TodoistResult<CommentRecord> {
        self.info(format!("Fetching Todoist comment: {}", params.comment_id));
        self.run("get Todoist comment", async {
            let id = require_id("comment_id", &params.comment_id)?;
            one::<RemoteComment, _>(self.call(ApiRequest::get(format!("comments/{id}"))).await?)
        })
        .await
    }

    pub async fn add_comment(&self, params: AddCommentParams) -> TodoistResult<CommentRecord> {
        self.info("Adding Todoist comment");
        self.run("add Todoist comment", async {
            let body = params.to_body()?;
            one::<RemoteComment, _>(self.call(ApiRequest::post("comments", Some(body))).await?)
        })
        .await
    }

    pub async fn update_comment(
        &self,
        params: UpdateCommentParams,
    ) -> TodoistResult<CommentRecord> {
        self.info(format!("Updating Todoist comment: {}", params.comment_id));
        self.run("update Todoist comment", async {
            let id = require_id("comment_id", &params.comment_id)?;
            let body = params.to_body()?;
            let value = self
                .call(ApiRequest::post(format!("comments/{id}"), Some(body)))
                .await?;
            one::<RemoteComment, _>(value)
        })
        .await
    }

    pub async fn delete_comment(&self, params: CommentIdParams) -> TodoistResult<StatusRecord> {
        self.info(format!("Deleting Todoist comment: {}", params.comment_id));
        self.run("delete Todoist comment", async {
            let id = require_id("comment_id", &params.comment_id)?;
            self.act(
                ApiRequest::delete(format!("comments/{id}")),
                format!("Comment {id} deleted"),
            )
            .await
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use reqwest::Method;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Scripted transport that records every request it receives
    #[derive(Default)]
    struct FakeApi {
        responses: Mutex<VecDeque<TodoistResult<Value>>>,
        direct_responses: Mutex<VecDeque<TodoistResult<Value>>>,
        requests: Mutex<Vec<ApiRequest>>,
        direct_bodies: Mutex<Vec<RequestBody>>,
    }

    impl FakeApi {
        fn respond(self, response: TodoistResult<Value>) -> Self {
            self.responses.lock().unwrap().push_back(response);
            self
        }

        fn respond_direct(self, response: TodoistResult<Value>) -> Self {
            self.direct_responses.lock().unwrap().push_back(response);
            self
        }

        fn requests(&self) -> Vec<ApiRequest> {
            self.requests.lock().unwrap().clone()
        }

        fn direct_bodies(&self) -> Vec<RequestBody> {
            self.direct_bodies.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TodoistApi for FakeApi {
        async fn execute(&self, request: &ApiRequest) -> TodoistResult<Value> {
            self.requests.lock().unwrap().push(request.clone());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Ok(Value::Null))
        }

        async fn create_task_direct(&self, body: &RequestBody) -> TodoistResult<Value> {
            self.direct_bodies.lock().unwrap().push(body.clone());
            self.direct_responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Ok(Value::Null))
        }
    }

    /// Hooks that keep every message for inspection
    #[derive(Default)]
    struct RecordingHooks {
        infos: Mutex<Vec<String>>,
        errors: Mutex<Vec<String>>,
    }

    impl OperationHooks for RecordingHooks {
        fn info(&self, message: &str) {
            self.infos.lock().unwrap().push(message.to_string());
        }

        fn error(&self, message: &str) {
            self.errors.lock().unwrap().push(message.to_string());
        }
    }

    fn adapter(api: &Arc<FakeApi>) -> TodoistAdapter {
        TodoistAdapter::new(api.clone(), None)
    }

    fn milk_task() -> Value {
        json!({
            "id": "8",
            "content": "Buy milk",
            "priority": 2,
            "project_id": "inbox",
            "due": { "date": "2025-01-02", "string": "tomorrow", "is_recurring": false }
        })
    }

    fn buy_milk() -> CreateTaskParams {
        CreateTaskParams {
            content: "Buy milk".to_string(),
            due_string: Some("tomorrow".to_string()),
            priority: Some(2),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_task_end_to_end() {
        let api = Arc::new(FakeApi::default().respond(Ok(milk_task())));
        let task = adapter(&api).create_task(buy_milk()).await.unwrap();

        let requests = api.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[0].path, "tasks");
        assert_eq!(
            Value::Object(requests[0].body.clone().unwrap()),
            json!({ "content": "Buy milk", "due_string": "tomorrow", "priority": 2 })
        );
        assert!(api.direct_bodies().is_empty());

        assert_eq!(task.content.as_deref(), Some("Buy milk"));
        assert_eq!(task.priority, Some(2));
        assert!(task.labels.is_empty());
        assert_eq!(task.due.unwrap().string.as_deref(), Some("tomorrow"));
    }

    #[tokio::test]
    async fn test_create_task_fallback_matches_primary_result() {
        let primary = Arc::new(FakeApi::default().respond(Ok(milk_task())));
        let expected = adapter(&primary).create_task(buy_milk()).await.unwrap();

        let api = Arc::new(
            FakeApi::default()
                .respond(Err(TodoistError::remote("API error: 404 - Not Found")))
                .respond_direct(Ok(milk_task())),
        );
        let task = adapter(&api).create_task(buy_milk()).await.unwrap();

        assert_eq!(task, expected);
        assert_eq!(api.requests().len(), 1);
        assert_eq!(api.direct_bodies().len(), 1);
        assert_eq!(
            Value::Object(api.direct_bodies()[0].clone()),
            Value::Object(api.requests()[0].body.clone().unwrap())
        );
    }

    #[tokio::test]
    async fn test_create_task_both_paths_fail() {
        let api = Arc::new(
            FakeApi::default()
                .respond(Err(TodoistError::remote("API error: 500 - primary down")))
                .respond_direct(Err(TodoistError::remote("API error: 401 - Forbidden"))),
        );
        let err = adapter(&api).create_task(buy_milk()).await.unwrap_err();

        assert!(err.is_remote());
        assert_eq!(
            err.to_string(),
            "Failed to create Todoist task: API error: 500 - primary down. \
             Direct API error: API error: 401 - Forbidden"
        );
    }

    #[tokio::test]
    async fn test_create_task_validation_skips_remote() {
        let api = Arc::new(FakeApi::default());
        let err = adapter(&api)
            .create_task(CreateTaskParams::default())
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert!(api.requests().is_empty());
        assert!(api.direct_bodies().is_empty());
    }

    #[tokio::test]
    async fn test_get_comments_without_target_never_calls_remote() {
        let api = Arc::new(FakeApi::default());
        let err = adapter(&api)
            .get_comments(GetCommentsParams::default())
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Failed to get Todoist comments: Either task_id or project_id must be provided"
        );
        assert!(api.requests().is_empty());
    }

    #[tokio::test]
    async fn test_update_without_fields_never_calls_remote() {
        let api = Arc::new(FakeApi::default());
        let adapter = adapter(&api);

        let task = adapter
            .update_task(UpdateTaskParams {
                task_id: "1".to_string(),
                ..Default::default()
            })
            .await;
        let project = adapter
            .update_project(UpdateProjectParams {
                project_id: "1".to_string(),
                ..Default::default()
            })
            .await;
        let label = adapter
            .update_label(UpdateLabelParams {
                label_id: "1".to_string(),
                ..Default::default()
            })
            .await;

        assert!(task.unwrap_err().is_validation());
        assert!(project.unwrap_err().is_validation());
        assert!(label.unwrap_err().is_validation());
        assert!(api.requests().is_empty());
    }

    #[tokio::test]
    async fn test_get_tasks_uses_filter_query() {
        let api = Arc::new(FakeApi::default().respond(Ok(json!([milk_task()]))));
        let tasks = adapter(&api)
            .get_tasks(GetTasksParams {
                project_id: Some("inbox".to_string()),
                filter_query: Some("today".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(tasks.len(), 1);
        let requests = api.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].query, vec![("filter", "today".to_string())]);
    }

    #[tokio::test]
    async fn test_list_accepts_paginated_envelope() {
        let api = Arc::new(FakeApi::default().respond(Ok(json!({
            "results": [{ "id": "1", "name": "Food" }],
            "next_cursor": null
        }))));
        let labels = adapter(&api).get_labels().await.unwrap();
        assert_eq!(labels.len(), 1);
        assert!(!labels[0].favorite);
    }

    #[tokio::test]
    async fn test_missing_id_is_normalization_error() {
        let api = Arc::new(FakeApi::default().respond(Ok(json!({ "name": "Nameless" }))));
        let err = adapter(&api)
            .get_project(ProjectIdParams {
                project_id: "p".to_string(),
            })
            .await
            .unwrap_err();
        assert!(err.is_normalization());
    }

    #[tokio::test]
    async fn test_complete_task_maps_to_close_endpoint() {
        let api = Arc::new(FakeApi::default());
        let status = adapter(&api)
            .complete_task(TaskIdParams {
                task_id: "42".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(status, StatusRecord::success("Task 42 completed successfully"));
        let requests = api.requests();
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[0].path, "tasks/42/close");
        assert!(requests[0].body.is_none());
    }

    #[tokio::test]
    async fn test_delete_failure_is_remote_error() {
        let api = Arc::new(
            FakeApi::default().respond(Err(TodoistError::remote("API error: 404 - gone"))),
        );
        let err = adapter(&api)
            .delete_label(LabelIdParams {
                label_id: "9".to_string(),
            })
            .await
            .unwrap_err();
        assert!(err.is_remote());
        assert_eq!(err.to_string(), "Failed to delete Todoist label: API error: 404 - gone");
    }

    #[tokio::test]
    async fn test_hooks_see_entry_and_failure() {
        let api = Arc::new(
            FakeApi::default().respond(Err(TodoistError::remote("API error: 503 - busy"))),
        );
        let hooks = Arc::new(RecordingHooks::default());
        let adapter = TodoistAdapter::new(api, Some(hooks.clone() as Arc<dyn OperationHooks>));

        let _ = adapter
            .get_section(SectionIdParams {
                section_id: "s1".to_string(),
            })
            .await;

        assert_eq!(
            hooks.infos.lock().unwrap().as_slice(),
            ["Fetching Todoist section: s1"]
        );
        assert_eq!(
            hooks.errors.lock().unwrap().as_slice(),
            ["Failed to get Todoist section: API error: 503 - busy"]
        );
    }

    #[tokio::test]
    async fn test_collaborators_are_normalized() {
        let api = Arc::new(FakeApi::default().respond(Ok(json!([
            { "id": "2671362", "name": "Alex", "email": "alex@example.com" },
            { "id": "2671366", "name": "Sam" }
        ]))));
        let collaborators = adapter(&api)
            .get_collaborators(ProjectIdParams {
                project_id: "p1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(api.requests()[0].path, "projects/p1/collaborators");
        assert_eq!(collaborators[1].email, None);
    }
}
