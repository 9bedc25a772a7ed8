//! Groq backend
//!
//! Talks to Groq's OpenAI-compatible `/chat/completions` endpoint. Requests
//! carry a hard timeout; expiry surfaces as [`LlmError::Timeout`] so callers
//! degrade the same way they do for any other provider failure.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::backend::{GenerationParams, LlmBackend};
use crate::LlmError;

/// Configuration for the Groq backend.
#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// API key (from GROQ_API_KEY or settings).
    pub api_key: String,
    /// Model to use.
    pub model: String,
    /// API base endpoint.
    pub endpoint: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("GROQ_API_KEY").unwrap_or_default(),
            model: "llama-3.1-8b-instant".to_string(),
            endpoint: "https://api.groq.com/openai/v1".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl GroqConfig {
    /// Create config with an explicit API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: usize,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Groq chat-completions backend.
pub struct GroqBackend {
    client: Client,
    config: GroqConfig,
}

impl GroqBackend {
    pub fn new(config: GroqConfig) -> Result<Self, LlmError> {
        if config.api_key.is_empty() {
            return Err(LlmError::Configuration(
                "GROQ_API_KEY not found in settings or environment".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::Configuration(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl LlmBackend for GroqBackend {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        params: GenerationParams,
    ) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        };

        let url = format!("{}/chat/completions", self.config.endpoint);
        tracing::debug!(model = %self.config.model, %url, "Sending generation request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api(format!("HTTP {}: {}", status, body)));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("empty choices".to_string()))
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
