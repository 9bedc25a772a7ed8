//! Knowledge retrieval
//!
//! Read-only filtered views over the welfare dataset, plus the JSON loader
//! that parses it at startup. Retrieval never fails: unknown identifiers
//! degrade to empty results.

pub mod loader;
pub mod retriever;

pub use loader::load_knowledge_base;
pub use retriever::KnowledgeRetriever;

use thiserror::Error;

/// Knowledge-base loading failures. Only possible at startup; the loaded
/// dataset is immutable afterwards.
#[derive(Error, Debug)]
pub enum KnowledgeError {
    #[error("Knowledge base not found at {path}: {source}")]
    NotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in knowledge base: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<KnowledgeError> for sahayak_core::Error {
    fn from(err: KnowledgeError) -> Self {
        sahayak_core::Error::Knowledge(err.to_string())
    }
}
