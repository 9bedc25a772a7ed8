//! Chat orchestration
//!
//! Wires classification, retrieval and generation into a single `chat`
//! entry point:
//! - Persona handlers with per-persona prompts and generation parameters
//! - Exhaustive persona dispatch
//! - In-memory per-session conversation log
//! - Greeting and language-selection shortcuts
//!
//! Every failure inside a chat turn degrades to response text. A broken
//! model call never crashes a turn.

pub mod chatbot;
pub mod handlers;
pub mod prompts;
pub mod session;

pub use chatbot::{ChatOutcome, Chatbot};
pub use handlers::{CitizenHandler, EmployeeHandler, HandlerRegistry, LeaderHandler, PersonaHandler};
pub use session::{SessionLog, Turn};
