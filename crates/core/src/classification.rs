//! Message classification types
//!
//! One `ClassificationRecord` is built per inbound message and never
//! mutated afterwards. Persona and intent are closed enums so handler
//! dispatch can be checked exhaustively at compile time.

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// User persona detected from a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    /// Default persona for ordinary users (the majority case).
    #[default]
    Citizen,
    /// Municipal staff asking operational/workflow questions.
    Employee,
    /// Leadership asking for reports, KPIs and ward comparisons.
    Leader,
}

impl Persona {
    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Citizen => "citizen",
            Persona::Employee => "employee",
            Persona::Leader => "leader",
        }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detected query intent.
///
/// `LanguageChange` is produced only by the orchestrator's "1"/"2"/"3"
/// shortcut path, never by the intent classifier itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    CheckStatus,
    ApplyScheme,
    Grievance,
    Metrics,
    SchemeInfo,
    #[default]
    GeneralQuery,
    LanguageChange,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::CheckStatus => "check_status",
            Intent::ApplyScheme => "apply_scheme",
            Intent::Grievance => "grievance",
            Intent::Metrics => "metrics",
            Intent::SchemeInfo => "scheme_info",
            Intent::GeneralQuery => "general_query",
            Intent::LanguageChange => "language_change",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable classification of a single inbound message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    /// The raw query text as received.
    pub original_query: String,
    pub language: Language,
    pub persona: Persona,
    pub intent: Intent,
}
