//! Configuration loading for todoist-mcp
//!
//! Configuration is loaded from:
//! 1. Environment variables TODOIST_API_TOKEN, TODOIST_API_URL, MCP_SERVER_NAME
//! 2. A `.env` file in the working directory or a parent (process env wins)
//! 3. Environment variable TODOIST_MCP_CONFIG_PATH
//! 4. ~/.binks/todoist.toml
//! 5. Default values
//!
//! The API token has no default; startup fails without one.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::todoist::DEFAULT_BASE_URL;

/// Main configuration structure
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Name reported to MCP clients
    #[serde(default = "default_server_name")]
    pub server_name: String,
    /// Todoist API settings
    #[serde(default)]
    pub todoist: TodoistConfig,
}

/// Todoist API configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct TodoistConfig {
    /// Personal API token
    #[serde(default)]
    pub api_token: String,
    /// REST API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_server_name() -> String {
    "Todoist MCP".to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_name: default_server_name(),
            todoist: TodoistConfig::default(),
        }
    }
}

impl Default for TodoistConfig {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            base_url: default_base_url(),
        }
    }
}

// The token never shows up in logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("server_name", &self.server_name)
            .field("todoist", &self.todoist)
            .finish()
    }
}

impl std::fmt::Debug for TodoistConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoistConfig")
            .field("api_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment and any `.env` file
    pub fn load() -> Result<Self> {
        let dotenv = match dotenvy::dotenv_iter() {
            Ok(iter) => collect_dotenv(iter)?,
            Err(e) if e.not_found() => HashMap::new(),
            Err(e) => return Err(e).context("failed to read .env file"),
        };
        let env = layered_env(|key: &str| std::env::var(key).ok(), dotenv);
        Self::load_with(Self::find_config_path(&env).as_deref(), env)
    }

    /// Load from an optional file, then apply overrides from `env`
    pub fn load_with<F>(path: Option<&Path>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) if path.exists() => {
                tracing::info!("Loading config from: {}", path.display());
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                toml::from_str(&content)
                    .with_context(|| format!("invalid config file {}", path.display()))?
            }
            Some(_) => {
                tracing::info!("Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        if let Some(token) = env("TODOIST_API_TOKEN") {
            config.todoist.api_token = token;
        }
        if let Some(url) = env("TODOIST_API_URL") {
            config.todoist.base_url = url;
        }
        if let Some(name) = env("MCP_SERVER_NAME") {
            config.server_name = name;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.todoist.api_token.trim().is_empty() {
            bail!(
                "Todoist API token not found. Set the TODOIST_API_TOKEN environment \
                 variable or add api_token under [todoist] in the config file."
            );
        }
        Ok(())
    }

    /// Find the configuration file path
    fn find_config_path(env: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
        if let Some(path) = env("TODOIST_MCP_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        env("HOME").map(|home| PathBuf::from(home).join(".binks").join("todoist.toml"))
    }
}

fn collect_dotenv<R: std::io::Read>(iter: dotenvy::Iter<R>) -> Result<HashMap<String, String>> {
    iter.collect::<Result<HashMap<_, _>, _>>()
        .context("invalid .env file")
}

/// Lookup that prefers `primary` and falls back to `.env` values
fn layered_env(
    primary: impl Fn(&str) -> Option<String>,
    dotenv: HashMap<String, String>,
) -> impl Fn(&str) -> Option<String> {
    move |key: &str| primary(key).or_else(|| dotenv.get(key).cloned())
}
