//! LLM backend trait
//!
//! Persona handlers own their generation parameters (temperature and output
//! budget differ per persona), so the params travel with each call rather
//! than living in the backend.

use async_trait::async_trait;

use crate::LlmError;

/// Per-call sampling and output parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum tokens to generate.
    pub max_tokens: usize,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 500,
        }
    }
}

/// An opaque text-generation capability.
///
/// Implementations must be safe to share across concurrent chat turns.
#[async_trait]
pub trait LlmBackend: Send + Sync {
    /// Generate a completion for a system/user prompt pair.
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        params: GenerationParams,
    ) -> Result<String, LlmError>;

    /// Model identifier, for logging.
    fn model_name(&self) -> &str;
}
