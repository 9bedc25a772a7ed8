//! Context analysis
//!
//! Composes the three classifiers into one immutable record per message.
//! Pure: output depends only on the input text, the optional override and
//! the static lexicons.

use sahayak_core::{ClassificationRecord, Language};

use crate::{detect_intent, detect_language, detect_persona};

/// Runs language, persona and intent detection over a message.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextAnalyzer;

impl ContextAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Classify a message. An explicit language override wins over the
    /// detector's result.
    pub fn analyze(
        &self,
        text: &str,
        language_override: Option<Language>,
    ) -> ClassificationRecord {
        let language = language_override.unwrap_or_else(|| detect_language(text));

        let record = ClassificationRecord {
            original_query: text.to_string(),
            language,
            persona: detect_persona(text),
            intent: detect_intent(text),
        };

        tracing::debug!(
            language = %record.language,
            persona = %record.persona,
            intent = %record.intent,
            "Classified message"
        );

        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sahayak_core::{Intent, Persona};

    #[test]
    fn test_hindi_citizen_status_query() {
        let record = ContextAnalyzer::new().analyze("मेरी पेंशन की स्थिति क्या है", None);
        assert_eq!(record.language, Language::Hindi);
        assert_eq!(record.persona, Persona::Citizen);
        assert_eq!(record.intent, Intent::CheckStatus);
        assert_eq!(record.original_query, "मेरी पेंशन की स्थिति क्या है");
    }

    #[test]
    fn test_leader_metrics_query() {
        let record =
            ContextAnalyzer::new().analyze("Show ward performance comparison report", None);
        assert_eq!(record.language, Language::English);
        assert_eq!(record.persona, Persona::Leader);
        assert_eq!(record.intent, Intent::Metrics);
    }

    #[test]
    fn test_language_override_wins() {
        let record =
            ContextAnalyzer::new().analyze("how do I apply", Some(Language::Marathi));
        assert_eq!(record.language, Language::Marathi);
        // persona/intent still classified from the text itself
        assert_eq!(record.intent, Intent::ApplyScheme);
    }

    #[test]
    fn test_no_override_uses_detector() {
        let record = ContextAnalyzer::new().analyze("hello", None);
        assert_eq!(record.language, Language::English);
    }
}
