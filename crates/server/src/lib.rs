//! HTTP server for the Sahayak welfare assistant
//!
//! Thin JSON API over the chat orchestrator, mirroring the envelope shape
//! the municipal frontend expects (`success` flag plus payload fields).

pub mod http;
pub mod settings;
pub mod state;

pub use http::create_router;
pub use settings::{load_settings, ConfigError, Settings};
pub use state::AppState;
