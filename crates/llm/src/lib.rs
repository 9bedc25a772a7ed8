//! LLM integration
//!
//! Treats text generation as an opaque capability behind the [`LlmBackend`]
//! trait: `(system prompt, user prompt, params) -> text`. The only shipped
//! backend talks to Groq's OpenAI-compatible chat-completions API, which is
//! what the welfare assistant runs against in production.

pub mod backend;
pub mod groq;

pub use backend::{GenerationParams, LlmBackend};
pub use groq::{GroqBackend, GroqConfig};

use thiserror::Error;

/// Generation failures from the external provider.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Timeout
        } else {
            LlmError::Network(err.to_string())
        }
    }
}

impl From<LlmError> for sahayak_core::Error {
    fn from(err: LlmError) -> Self {
        sahayak_core::Error::Llm(err.to_string())
    }
}
