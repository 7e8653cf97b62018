//! HTTP client for the Todoist REST API
//!
//! [`TodoistApi`] is the seam between the adapter and the network: one
//! generic authenticated call plus the hand-built request used only when
//! task creation fails on the primary path. [`TodoistClient`] implements it
//! with `reqwest`.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use tracing::{debug, error, instrument};

use super::error::{TodoistError, TodoistResult};
use crate::params::{QueryPairs, RequestBody};

pub const DEFAULT_BASE_URL: &str = "https://api.todoist.com/rest/v2";

const USER_AGENT: &str = concat!("todoist-mcp/", env!("CARGO_PKG_VERSION"));

/// One call against the remote API, relative to the base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: QueryPairs,
    pub body: Option<RequestBody>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            query: QueryPairs::new(),
            body: None,
        }
    }

    /// POST with an optional JSON body (`None` for action endpoints like `/close`)
    pub fn post(path: impl Into<String>, body: Option<RequestBody>) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            query: QueryPairs::new(),
            body,
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::DELETE,
            path: path.into(),
            query: QueryPairs::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, query: QueryPairs) -> Self {
        self.query = query;
        self
    }
}

/// Transport used by [`crate::adapter::TodoistAdapter`]
#[async_trait]
pub trait TodoistApi: Send + Sync {
    /// Perform one authenticated call and return the decoded JSON body.
    /// Empty responses (204 No Content) decode to `Value::Null`.
    async fn execute(&self, request: &ApiRequest) -> TodoistResult<Value>;

    /// Create a task through a freshly built, manually authenticated request.
    /// Only used as the fallback when [`TodoistApi::execute`] fails for task creation.
    async fn create_task_direct(&self, body: &RequestBody) -> TodoistResult<Value>;
}

/// reqwest-backed Todoist client
#[derive(Clone)]
pub struct TodoistClient {
    client: Client,
    token: String,
    base_url: String,
}

impl std::fmt::Debug for TodoistClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoistClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl TodoistClient {
    pub fn new(token: impl Into<String>) -> TodoistResult<Self> {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(
        token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> TodoistResult<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            token: token.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Turn a non-success response into a remote error carrying status and body
async fn api_error(response: reqwest::Response) -> TodoistError {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    error!(status = status.as_u16(), body = %text, "todoist request failed");
    TodoistError::remote(format!("API error: {} - {}", status.as_u16(), text))
}

fn decode(bytes: &[u8]) -> TodoistResult<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(bytes)
        .map_err(|e| TodoistError::remote(format!("invalid JSON in response: {e}")))
}

#[async_trait]
impl TodoistApi for TodoistClient {
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    async fn execute(&self, request: &ApiRequest) -> TodoistResult<Value> {
        let url = self.url(&request.path);
        debug!("{} {}", request.method, url);

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .bearer_auth(&self.token);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }

        let bytes = response.bytes().await?;
        decode(&bytes)
    }

    #[instrument(skip(self, body))]
    async fn create_task_direct(&self, body: &RequestBody) -> TodoistResult<Value> {
        let url = self.url("tasks");
        debug!("direct POST {}", url);

        let payload = serde_json::to_vec(body)
            .map_err(|e| TodoistError::remote(format!("failed to encode task: {e}")))?;

        let response = Client::builder()
            .user_agent(USER_AGENT)
            .build()?
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(api_error(response).await);
        }

        let bytes = response.bytes().await?;
        decode(&bytes)
    }
}
