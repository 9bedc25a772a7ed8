//! Application state
//!
//! The chatbot is constructed exactly once at startup and shared across all
//! requests via `Arc`; the knowledge base inside it is read-only, so no
//! locking is needed. This replaces the lazily-initialized global singleton
//! pattern with construction-once state owned by the router.

use std::sync::Arc;

use sahayak_chat::Chatbot;

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub chatbot: Arc<Chatbot>,
}

impl AppState {
    pub fn new(chatbot: Arc<Chatbot>) -> Self {
        Self { chatbot }
    }
}
