//! MCP Server implementation
//!
//! This module defines the main MCP server that exposes the Todoist REST
//! API as tools, markdown resources, and canned prompts. Tool logic lives
//! in the handlers/ module; resource and prompt content in resources.rs
//! and prompts.rs.

use std::collections::HashMap;
use std::sync::Arc;

use mcp_common::{
    async_trait, invalid_params, resource_not_found, text_resource, EmbeddableError,
    EmbeddableMcp, EmbeddableResult, McpError,
};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        AnnotateAble, CallToolResult, GetPromptRequestParam, GetPromptResult, Implementation,
        ListPromptsResult, ListResourceTemplatesResult, ListResourcesResult,
        PaginatedRequestParam, Prompt, PromptArgument, PromptMessage, PromptMessageRole,
        RawResource, RawResourceTemplate, ReadResourceRequestParam, ReadResourceResult, Resource, ResourceTemplate,
        ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, RoleServer,
};
use serde_json::Value;

use crate::adapter::{TodoistAdapter, TracingHooks};
use crate::config::Config;
use crate::handlers;
use crate::markdown::{Document, MARKDOWN_MIME};
use crate::params::*;
use crate::prompts;
use crate::resources::{ResourceUri, RESOURCES, TEMPLATES};
use crate::todoist::TodoistClient;

const INSTRUCTIONS: &str = "Todoist MCP Server - manage Todoist tasks, projects, sections, \
     labels, and comments. Resources under todoist:// render task, project, section, and \
     label lists as markdown tables.";

/// The main Todoist MCP Server
#[derive(Clone)]
pub struct TodoistMcpServer {
    adapter: Arc<TodoistAdapter>,
    server_name: String,
    tool_router: ToolRouter<Self>,
}

impl TodoistMcpServer {
    /// Build a server talking to the configured Todoist API
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = TodoistClient::with_base_url(
            config.todoist.api_token.clone(),
            config.todoist.base_url.clone(),
        )?;
        tracing::info!("Using Todoist API at {}", client.base_url());

        let adapter = TodoistAdapter::new(Arc::new(client), Some(Arc::new(TracingHooks)));
        Ok(Self::with_adapter(adapter, config.server_name.clone()))
    }

    /// Load configuration from the environment and build the server
    pub fn from_env() -> anyhow::Result<Self> {
        Self::new(&Config::load()?)
    }

    pub fn with_adapter(adapter: TodoistAdapter, server_name: impl Into<String>) -> Self {
        Self {
            adapter: Arc::new(adapter),
            server_name: server_name.into(),
            tool_router: Self::tool_router(),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.server_name
    }

    /// Render the document behind a `todoist://` URI, `None` if the URI is unknown
    pub async fn read_document(&self, uri: &str) -> Option<Document> {
        let resource = ResourceUri::parse(uri)?;
        Some(resource.read(&self.adapter).await)
    }

    pub fn resources(&self) -> Vec<Resource> {
        RESOURCES
            .iter()
            .map(|d| {
                let mut raw = RawResource::new(d.uri, d.name);
                raw.description = Some(d.description.to_string());
                raw.mime_type = Some(MARKDOWN_MIME.to_string());
                raw.no_annotation()
            })
            .collect()
    }

    pub fn resource_templates(&self) -> Vec<ResourceTemplate> {
        TEMPLATES
            .iter()
            .map(|d| {
                RawResourceTemplate {
                    uri_template: d.uri.to_string(),
                    name: d.name.to_string(),
                    title: None,
                    description: Some(d.description.to_string()),
                    mime_type: Some(MARKDOWN_MIME.to_string()),
                    icons: None,
                }
                .no_annotation()
            })
            .collect()
    }

    pub fn prompts(&self) -> Vec<Prompt> {
        prompts::PROMPTS
            .iter()
            .map(|p| {
                let arguments: Vec<PromptArgument> = p
                    .arguments
                    .iter()
                    .map(|a| PromptArgument {
                        name: a.name.to_string(),
                        title: None,
                        description: Some(a.description.to_string()),
                        required: Some(a.required),
                    })
                    .collect();
                Prompt::new(p.name, Some(p.description), Some(arguments))
            })
            .collect()
    }
}

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router]
impl TodoistMcpServer {
    // ---- Tasks ----

    #[tool(
        description = "Create a new Todoist task. Only content is required; due dates accept natural language via due_string"
    )]
    async fn create_task(
        &self,
        Parameters(params): Parameters<CreateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::create_task(&self.adapter, params).await
    }

    #[tool(
        description = "Get active Todoist tasks, optionally filtered by project, section, label, or a Todoist filter query"
    )]
    async fn get_tasks(
        &self,
        Parameters(params): Parameters<GetTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_tasks(&self.adapter, params).await
    }

    #[tool(description = "Get a specific Todoist task by ID")]
    async fn get_task(
        &self,
        Parameters(params): Parameters<TaskIdParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_task(&self.adapter, params).await
    }

    #[tool(description = "Update an existing Todoist task. At least one field besides task_id is required")]
    async fn update_task(
        &self,
        Parameters(params): Parameters<UpdateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::update_task(&self.adapter, params).await
    }

    #[tool(description = "Mark a Todoist task as completed")]
    async fn complete_task(
        &self,
        Parameters(params): Parameters<TaskIdParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::complete_task(&self.adapter, params).await
    }

    #[tool(description = "Reopen a completed Todoist task")]
    async fn uncomplete_task(
        &self,
        Parameters(params): Parameters<TaskIdParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::uncomplete_task(&self.adapter, params).await
    }

    #[tool(description = "Delete a Todoist task")]
    async fn delete_task(
        &self,
        Parameters(params): Parameters<TaskIdParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::delete_task(&self.adapter, params).await
    }

    // ---- Projects ----

    #[tool(description = "Get all Todoist projects")]
    async fn get_projects(&self) -> Result<CallToolResult, McpError> {
        handlers::get_projects(&self.adapter).await
    }

    #[tool(description = "Get a specific Todoist project by ID")]
    async fn get_project(
        &self,
        Parameters(params): Parameters<ProjectIdParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_project(&self.adapter, params).await
    }

    #[tool(description = "Create a new Todoist project")]
    async fn add_project(
        &self,
        Parameters(params): Parameters<AddProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::add_project(&self.adapter, params).await
    }

    #[tool(description = "Update a Todoist project's name, color, favorite flag, or view style")]
    async fn update_project(
        &self,
        Parameters(params): Parameters<UpdateProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::update_project(&self.adapter, params).await
    }

    #[tool(description = "Delete a Todoist project along with its sections and tasks")]
    async fn delete_project(
        &self,
        Parameters(params): Parameters<ProjectIdParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::delete_project(&self.adapter, params).await
    }

    #[tool(description = "Archive a Todoist project")]
    async fn archive_project(
        &self,
        Parameters(params): Parameters<ProjectIdParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::archive_project(&self.adapter, params).await
    }

    #[tool(description = "Unarchive a Todoist project")]
    async fn unarchive_project(
        &self,
        Parameters(params): Parameters<ProjectIdParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::unarchive_project(&self.adapter, params).await
    }

    #[tool(description = "Get the collaborators of a shared Todoist project")]
    async fn get_collaborators(
        &self,
        Parameters(params): Parameters<ProjectIdParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_collaborators(&self.adapter, params).await
    }

    // ---- Sections ----

    #[tool(description = "Get Todoist sections, optionally for a single project")]
    async fn get_sections(
        &self,
        Parameters(params): Parameters<GetSectionsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_sections(&self.adapter, params).await
    }

    #[tool(description = "Get a specific Todoist section by ID")]
    async fn get_section(
        &self,
        Parameters(params): Parameters<SectionIdParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_section(&self.adapter, params).await
    }

    #[tool(description = "Create a new section in a Todoist project")]
    async fn add_section(
        &self,
        Parameters(params): Parameters<AddSectionParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::add_section(&self.adapter, params).await
    }

    #[tool(description = "Rename a Todoist section")]
    async fn update_section(
        &self,
        Parameters(params): Parameters<UpdateSectionParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::update_section(&self.adapter, params).await
    }

    #[tool(description = "Delete a Todoist section and its tasks")]
    async fn delete_section(
        &self,
        Parameters(params): Parameters<SectionIdParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::delete_section(&self.adapter, params).await
    }

    // ---- Labels ----

    #[tool(description = "Get all personal Todoist labels")]
    async fn get_labels(&self) -> Result<CallToolResult, McpError> {
        handlers::get_labels(&self.adapter).await
    }

    #[tool(description = "Get a specific Todoist label by ID")]
    async fn get_label(
        &self,
        Parameters(params): Parameters<LabelIdParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_label(&self.adapter, params).await
    }

    #[tool(description = "Create a new personal Todoist label")]
    async fn add_label(
        &self,
        Parameters(params): Parameters<AddLabelParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::add_label(&self.adapter, params).await
    }

    #[tool(description = "Update a personal Todoist label")]
    async fn update_label(
        &self,
        Parameters(params): Parameters<UpdateLabelParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::update_label(&self.adapter, params).await
    }

    #[tool(description = "Delete a personal Todoist label")]
    async fn delete_label(
        &self,
        Parameters(params): Parameters<LabelIdParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::delete_label(&self.adapter, params).await
    }

    // ---- Comments ----

    #[tool(description = "Get comments on a Todoist task or project. One of task_id or project_id is required")]
    async fn get_comments(
        &self,
        Parameters(params): Parameters<GetCommentsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_comments(&self.adapter, params).await
    }

    #[tool(description = "Get a specific Todoist comment by ID")]
    async fn get_comment(
        &self,
        Parameters(params): Parameters<CommentIdParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_comment(&self.adapter, params).await
    }

    #[tool(description = "Add a comment to a Todoist task or project")]
    async fn add_comment(
        &self,
        Parameters(params): Parameters<AddCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::add_comment(&self.adapter, params).await
    }

    #[tool(description = "Edit the content of a Todoist comment")]
    async fn update_comment(
        &self,
        Parameters(params): Parameters<UpdateCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::update_comment(&self.adapter, params).await
    }

    #[tool(description = "Delete a Todoist comment")]
    async fn delete_comment(
        &self,
        Parameters(params): Parameters<CommentIdParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::delete_comment(&self.adapter, params).await
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for TodoistMcpServer {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::from_build_env();
        server_info.name = self.server_name.clone();
        server_info.version = env!("CARGO_PKG_VERSION").to_string();

        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            server_info,
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult::with_all_items(self.resources()))
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        Ok(ListResourceTemplatesResult::with_all_items(
            self.resource_templates(),
        ))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        let document = self
            .read_document(&request.uri)
            .await
            .ok_or_else(|| resource_not_found(format!("Unknown resource: {}", request.uri)))?;
        Ok(text_resource(&request.uri, document.mime_type, document.text))
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        Ok(ListPromptsResult::with_all_items(self.prompts()))
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        let template = prompts::find(&request.name)
            .ok_or_else(|| invalid_params(format!("Unknown prompt: {}", request.name)))?;

        let arguments: HashMap<String, String> = request
            .arguments
            .unwrap_or_default()
            .into_iter()
            .map(|(k, v)| match v {
                Value::String(s) => (k, s),
                other => (k, other.to_string()),
            })
            .collect();
        let text = prompts::render(template.name, &arguments)
            .map_err(|e| invalid_params(e.to_string()))?;

        Ok(GetPromptResult {
            description: Some(template.description.to_string()),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
        })
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for TodoistMcpServer {
    fn server_name(&self) -> &str {
        "todoist"
    }

    fn server_description(&self) -> Option<&str> {
        Some(INSTRUCTIONS)
    }

    fn server_version(&self) -> Option<&str> {
        Some(env!("CARGO_PKG_VERSION"))
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        let adapter = &self.adapter;
        let result = match name {
            // Tasks
            "create_task" => handlers::create_task(adapter, serde_json::from_value(params)?).await,
            "get_tasks" => handlers::get_tasks(adapter, serde_json::from_value(params)?).await,
            "get_task" => handlers::get_task(adapter, serde_json::from_value(params)?).await,
            "update_task" => handlers::update_task(adapter, serde_json::from_value(params)?).await,
            "complete_task" => {
                handlers::complete_task(adapter, serde_json::from_value(params)?).await
            }
            "uncomplete_task" => {
                handlers::uncomplete_task(adapter, serde_json::from_value(params)?).await
            }
            "delete_task" => handlers::delete_task(adapter, serde_json::from_value(params)?).await,

            // Projects
            "get_projects" => handlers::get_projects(adapter).await,
            "get_project" => handlers::get_project(adapter, serde_json::from_value(params)?).await,
            "add_project" => handlers::add_project(adapter, serde_json::from_value(params)?).await,
            "update_project" => {
                handlers::update_project(adapter, serde_json::from_value(params)?).await
            }
            "delete_project" => {
                handlers::delete_project(adapter, serde_json::from_value(params)?).await
            }
            "archive_project" => {
                handlers::archive_project(adapter, serde_json::from_value(params)?).await
            }
            "unarchive_project" => {
                handlers::unarchive_project(adapter, serde_json::from_value(params)?).await
            }
            "get_collaborators" => {
                handlers::get_collaborators(adapter, serde_json::from_value(params)?).await
            }

            // Sections
            "get_sections" => {
                handlers::get_sections(adapter, serde_json::from_value(params)?).await
            }
            "get_section" => handlers::get_section(adapter, serde_json::from_value(params)?).await,
            "add_section" => handlers::add_section(adapter, serde_json::from_value(params)?).await,
            "update_section" => {
                handlers::update_section(adapter, serde_json::from_value(params)?).await
            }
            "delete_section" => {
                handlers::delete_section(adapter, serde_json::from_value(params)?).await
            }

            // Labels
            "get_labels" => handlers::get_labels(adapter).await,
            "get_label" => handlers::get_label(adapter, serde_json::from_value(params)?).await,
            "add_label" => handlers::add_label(adapter, serde_json::from_value(params)?).await,
            "update_label" => {
                handlers::update_label(adapter, serde_json::from_value(params)?).await
            }
            "delete_label" => {
                handlers::delete_label(adapter, serde_json::from_value(params)?).await
            }

            // Comments
            "get_comments" => {
                handlers::get_comments(adapter, serde_json::from_value(params)?).await
            }
            "get_comment" => handlers::get_comment(adapter, serde_json::from_value(params)?).await,
            "add_comment" => handlers::add_comment(adapter, serde_json::from_value(params)?).await,
            "update_comment" => {
                handlers::update_comment(adapter, serde_json::from_value(params)?).await
            }
            "delete_comment" => {
                handlers::delete_comment(adapter, serde_json::from_value(params)?).await
            }

            _ => return Err(EmbeddableError::ToolNotFound(name.to_string())),
        };
        result.map_err(Into::into)
    }
}
