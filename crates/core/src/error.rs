//! Shared error type
//!
//! Most of the pipeline is total: classifiers always return a value and
//! retrieval degrades to empty results. The variants here cover the few
//! places that can genuinely fail (startup loading, configuration, and the
//! external model call before handlers convert it to degraded text).

use thiserror::Error;

/// Top-level error for the Sahayak crates.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Knowledge base error: {0}")]
    Knowledge(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result alias using the shared error type.
pub type Result<T> = std::result::Result<T, Error>;
