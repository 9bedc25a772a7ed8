//! Core types for the Sahayak welfare assistant
//!
//! This crate provides the types shared across all other crates:
//! - Language, persona and intent enums (closed sets)
//! - The per-message classification record
//! - The knowledge-base data model
//! - Error types

pub mod classification;
pub mod error;
pub mod knowledge;
pub mod language;

pub use classification::{ClassificationRecord, Intent, Persona};
pub use error::{Error, Result};
pub use knowledge::{KbStats, KnowledgeBase, SchemeRecord, WardRecord};
pub use language::Language;
