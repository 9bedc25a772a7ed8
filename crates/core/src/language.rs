//! Supported languages
//!
//! Three fixed target languages. The set is closed: the detector and all
//! lookup helpers always resolve to one of these values.

use serde::{Deserialize, Serialize};

/// A supported response language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Marathi,
}

impl Language {
    /// Resolve a numeric menu selection ("1"/"2"/"3") to a language.
    pub fn from_selector(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Language::English),
            "2" => Some(Language::Hindi),
            "3" => Some(Language::Marathi),
            _ => None,
        }
    }

    /// Resolve a language name, ISO-style code or menu digit, case-insensitively.
    ///
    /// Unrecognized input defaults to English rather than failing.
    pub fn from_name(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "1" | "en" | "english" => Language::English,
            "2" | "hi" | "hindi" => Language::Hindi,
            "3" | "mr" | "marathi" => Language::Marathi,
            _ => Language::English,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Marathi => "Marathi",
        }
    }

    /// The language's own name in its native script.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिंदी",
            Language::Marathi => "मराठी",
        }
    }

    /// Numeric menu code used by the language-selection shortcut.
    pub fn selector(&self) -> &'static str {
        match self {
            Language::English => "1",
            Language::Hindi => "2",
            Language::Marathi => "3",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
