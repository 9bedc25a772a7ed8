//! Server settings
//!
//! Layered configuration: `config/default` file (any supported format),
//! then an optional environment-specific file, then `SAHAYAK__`-prefixed
//! environment variables. The Groq API key may also come from the plain
//! `GROQ_API_KEY` variable, which is how the original deployment supplies
//! it.

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Missing required setting: {0}")]
    Missing(&'static str),
}

impl From<ConfigError> for sahayak_core::Error {
    fn from(err: ConfigError) -> Self {
        sahayak_core::Error::Configuration(err.to_string())
    }
}

/// Main application settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LlmSettings,
    #[serde(default)]
    pub knowledge: KnowledgeSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// Groq API key; falls back to the GROQ_API_KEY environment variable.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_model() -> String {
    "llama-3.1-8b-instant".to_string()
}

fn default_endpoint() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl LlmSettings {
    /// Resolve the API key from settings or the environment.
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        if let Some(key) = self.api_key.as_deref().filter(|k| !k.is_empty()) {
            return Ok(key.to_string());
        }
        std::env::var("GROQ_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::Missing("llm.api_key (or GROQ_API_KEY)"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeSettings {
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,
}

fn default_dataset_path() -> String {
    "data/social_welfare_dataset.json".to_string()
}

impl Default for KnowledgeSettings {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
        }
    }
}

/// Load settings with env-var overrides layered on top of config files.
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name("config/default").required(false));

    if let Some(env_name) = env {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("SAHAYAK")
            .separator("__")
            .try_parsing(true),
    );

    let settings: Settings = builder.build()?.try_deserialize()?;
    Ok(settings)
}
