//! Chatbot orchestrator
//!
//! The single entry point that wires the context analyzer, handler registry
//! and session log together. Construct one instance per process and share
//! it behind an `Arc`; the knowledge base inside is read-only, so no
//! locking is needed across concurrent chat turns.

use std::sync::Arc;

use serde::Serialize;

use sahayak_core::{ClassificationRecord, Intent, KbStats, KnowledgeBase, Language, Persona};
use sahayak_llm::LlmBackend;
use sahayak_nlu::ContextAnalyzer;
use sahayak_retrieval::KnowledgeRetriever;

use crate::handlers::{CitizenHandler, EmployeeHandler, HandlerRegistry, LeaderHandler};
use crate::session::{SessionLog, Turn};

const GREETING_ENGLISH: &str = "\
👋 Welcome to Thane Social Welfare Assistant!

I can help you with:
• ✅ Check Eligibility for Schemes
• 📝 Guided Application Process
• 📊 Track Application Status
• 🔍 View Your Benefits
• 📢 Lodge & Track Grievances
• 📈 View Ward Performance
• 💬 Ask Questions in Natural Language";

const GREETING_HINDI: &str = "\
👋 ठाणे सामाजिक कल्याण सहायक में आपका स्वागत है!

मैं आपकी मदद कर सकता हूं:
• ✅ योजनाओं के लिए पात्रता जांचें
• 📝 निर्देशित आवेदन प्रक्रिया
• 📊 आवेदन स्थिति ट्रैक करें
• 🔍 अपने लाभ देखें
• 📢 शिकायत दर्ज करें और ट्रैक करें
• 📈 वार्ड प्रदर्शन देखें
• 💬 स्वाभाविक भाषा में प्रश्न पूछें";

const GREETING_MARATHI: &str = "\
👋 ठाणे सामाजिक कल्याण सहाय्यकामध्ये आपले स्वागत आहे!

मी तुम्हाला मदत करू शकतो:
• ✅ योजनांसाठी पात्रता तपासा
• 📝 मार्गदर्शित अर्ज प्रक्रिया
• 📊 अर्ज स्थिती ट्रॅक करा
• 🔍 तुमचे लाभ पहा
• 📢 तक्रार नोंदवा आणि ट्रॅक करा
• 📈 प्रभाग कामगिरी पहा
• 💬 नैसर्गिक भाषेत प्रश्न विचारा";

/// Greeting text for a language.
pub fn greeting(language: Language) -> &'static str {
    match language {
        Language::English => GREETING_ENGLISH,
        Language::Hindi => GREETING_HINDI,
        Language::Marathi => GREETING_MARATHI,
    }
}

/// Result of one chat turn.
#[derive(Debug, Clone, Serialize)]
pub struct ChatOutcome {
    pub response: String,
    pub language: Language,
    /// None on the language-selection shortcut path, where no handler runs.
    pub persona: Option<Persona>,
    pub intent: Intent,
    pub language_changed: bool,
}

/// The Sahayak chatbot.
pub struct Chatbot {
    analyzer: ContextAnalyzer,
    registry: HandlerRegistry,
    sessions: SessionLog,
    retriever: Arc<KnowledgeRetriever>,
}

impl Chatbot {
    /// Build the full pipeline over a loaded knowledge base and an LLM
    /// backend.
    pub fn new(kb: Arc<KnowledgeBase>, backend: Arc<dyn LlmBackend>) -> Self {
        let retriever = Arc::new(KnowledgeRetriever::new(kb));

        let registry = HandlerRegistry::new(
            CitizenHandler::new(Arc::clone(&retriever), Arc::clone(&backend)),
            EmployeeHandler::new(Arc::clone(&retriever), Arc::clone(&backend)),
            LeaderHandler::new(Arc::clone(&retriever), Arc::clone(&backend)),
        );

        Self {
            analyzer: ContextAnalyzer::new(),
            registry,
            sessions: SessionLog::new(),
            retriever,
        }
    }

    /// Process one chat message.
    ///
    /// A trimmed message of exactly "1", "2" or "3" is a language-selection
    /// command: it returns the selected language's greeting without running
    /// classification or any handler, and is not recorded in the session
    /// log.
    pub async fn chat(
        &self,
        message: &str,
        session_id: &str,
        language_override: Option<Language>,
    ) -> ChatOutcome {
        if let Some(language) = Language::from_selector(message) {
            tracing::info!(%session_id, %language, "Language selection");
            return ChatOutcome {
                response: greeting(language).to_string(),
                language,
                persona: None,
                intent: Intent::LanguageChange,
                language_changed: true,
            };
        }

        let record = self.analyzer.analyze(message, language_override);
        let response = self.registry.route(&record).await;

        self.sessions
            .append(session_id, message, response.clone(), record.clone());

        tracing::info!(
            %session_id,
            language = %record.language,
            persona = %record.persona,
            intent = %record.intent,
            "Chat turn completed"
        );

        ChatOutcome {
            response,
            language: record.language,
            persona: Some(record.persona),
            intent: record.intent,
            language_changed: false,
        }
    }

    /// Greeting for a language name, code or menu digit; unrecognized names
    /// default to English.
    pub fn greeting_for(&self, language_name: &str) -> &'static str {
        greeting(Language::from_name(language_name))
    }

    /// Normalize a language selection input to a language.
    pub fn set_language(&self, input: &str) -> Language {
        Language::from_name(input)
    }

    /// Live knowledge-base counts.
    pub fn stats(&self) -> KbStats {
        self.retriever.get_stats()
    }

    /// Conversation history for a session; empty for unknown sessions.
    pub fn history(&self, session_id: &str) -> Vec<Turn> {
        self.sessions.get(session_id)
    }

    /// Drop a session's history. No-op for unknown sessions.
    pub fn clear_history(&self, session_id: &str) {
        self.sessions.clear(session_id);
    }

    /// Classify without responding. Exposed for diagnostics.
    pub fn classify(&self, message: &str) -> ClassificationRecord {
        self.analyzer.analyze(message, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sahayak_llm::{GenerationParams, LlmError};

    /// Echoes the prompts back so tests can assert on composition.
    struct EchoBackend;

    #[async_trait]
    impl LlmBackend for EchoBackend {
        async fn generate(
            &self,
            system_prompt: &str,
            user_prompt: &str,
            _params: GenerationParams,
        ) -> Result<String, LlmError> {
            let head: String = system_prompt.chars().take(20).collect();
            Ok(format!("[{head}] {user_prompt}"))
        }

        fn model_name(&self) -> &str {
            "echo"
        }
    }

    /// Always fails, simulating a broken provider.
    struct FailingBackend;

    #[async_trait]
    impl LlmBackend for FailingBackend {
        async fn generate(
            &self,
            _system_prompt: &str,
            _user_prompt: &str,
            _params: GenerationParams,
        ) -> Result<String, LlmError> {
            Err(LlmError::Api("HTTP 429: rate limited".to_string()))
        }

        fn model_name(&self) -> &str {
            "failing"
        }
    }

    fn test_kb() -> Arc<KnowledgeBase> {
        Arc::new(
            serde_json::from_value(serde_json::json!({
                "schemes": [{"scheme_id": "PEN001", "name": "Old Age Pension"}],
                "scheme_performance": [{"scheme_id": "PEN001", "approval_rate": 0.8}],
                "grievances_summary": [{"scheme_id": "PEN001", "open": 2}],
                "wards": [{"ward_id": "W01", "name": "Naupada"}],
                "citizens": [{"id": 1}],
                "meta": {"city": "Thane"}
            }))
            .unwrap(),
        )
    }

    fn chatbot(backend: Arc<dyn LlmBackend>) -> Chatbot {
        Chatbot::new(test_kb(), backend)
    }

    #[tokio::test]
    async fn test_language_selection_shortcut() {
        let bot = chatbot(Arc::new(EchoBackend));
        let outcome = bot.chat("1", "s1", None).await;
        assert_eq!(outcome.language, Language::English);
        assert_eq!(outcome.intent, Intent::LanguageChange);
        assert!(outcome.language_changed);
        assert!(outcome.persona.is_none());
        assert!(outcome.response.contains("Welcome to Thane Social Welfare Assistant"));
        // shortcut turns are not logged
        assert!(bot.history("s1").is_empty());
    }

    #[tokio::test]
    async fn test_hindi_citizen_status_turn() {
        let bot = chatbot(Arc::new(EchoBackend));
        let outcome = bot.chat("मेरी पेंशन की स्थिति क्या है", "s1", None).await;
        assert_eq!(outcome.language, Language::Hindi);
        assert_eq!(outcome.persona, Some(Persona::Citizen));
        assert_eq!(outcome.intent, Intent::CheckStatus);
        assert!(!outcome.language_changed);
        // the citizen handler feeds scheme data into the prompt
        assert!(outcome.response.contains("Old Age Pension"));

        let history = bot.history("s1");
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].user, "मेरी पेंशन की स्थिति क्या है");
    }

    #[tokio::test]
    async fn test_leader_metrics_turn() {
        let bot = chatbot(Arc::new(EchoBackend));
        let outcome = bot
            .chat("Show ward performance comparison report", "s1", None)
            .await;
        assert_eq!(outcome.persona, Some(Persona::Leader));
        assert_eq!(outcome.intent, Intent::Metrics);
        // leader prompt carries live stats
        assert!(outcome.response.contains("total_schemes"));
    }

    #[tokio::test]
    async fn test_employee_general_query_turn() {
        let bot = chatbot(Arc::new(EchoBackend));
        let outcome = bot
            .chat("pending applications for verification", "s1", None)
            .await;
        assert_eq!(outcome.persona, Some(Persona::Employee));
        assert_eq!(outcome.intent, Intent::GeneralQuery);
    }

    #[tokio::test]
    async fn test_every_persona_degrades_on_provider_failure() {
        let bot = chatbot(Arc::new(FailingBackend));

        let citizen = bot.chat("how do I get my pension", "s1", None).await;
        assert!(citizen.response.contains("I apologize"));
        assert!(citizen.response.contains("rate limited"));

        let employee = bot.chat("approve pending files", "s1", None).await;
        assert!(employee.response.starts_with("Error processing request"));

        let leader = bot.chat("ward performance report", "s1", None).await;
        assert!(leader.response.starts_with("Error generating analytics"));

        // failed generations are still logged as turns
        assert_eq!(bot.history("s1").len(), 3);
    }

    #[tokio::test]
    async fn test_failed_citizen_turn_apologizes_in_hindi() {
        let bot = chatbot(Arc::new(FailingBackend));
        let outcome = bot.chat("मेरी पेंशन की स्थिति क्या है", "s1", None).await;
        assert!(outcome.response.contains("क्षमा करें"));
    }

    #[tokio::test]
    async fn test_language_override_is_honored() {
        let bot = chatbot(Arc::new(EchoBackend));
        let outcome = bot
            .chat("how do I apply", "s1", Some(Language::Marathi))
            .await;
        assert_eq!(outcome.language, Language::Marathi);
    }

    #[test]
    fn test_greeting_lookup_defaults_to_english() {
        let bot = chatbot(Arc::new(EchoBackend));
        assert!(bot.greeting_for("marathi").contains("स्वागत आहे"));
        assert!(bot.greeting_for("HINDI").contains("स्वागत है"));
        assert!(bot.greeting_for("klingon").contains("Welcome"));
    }

    #[test]
    fn test_stats_passthrough() {
        let bot = chatbot(Arc::new(EchoBackend));
        let stats = bot.stats();
        assert_eq!(stats.total_schemes, 1);
        assert_eq!(stats.total_wards, 1);
        assert_eq!(stats.total_citizens, 1);
    }

    #[tokio::test]
    async fn test_clear_history() {
        let bot = chatbot(Arc::new(EchoBackend));
        bot.chat("hello", "s1", None).await;
        assert_eq!(bot.history("s1").len(), 1);
        bot.clear_history("s1");
        assert!(bot.history("s1").is_empty());
        // clearing again is a no-op
        bot.clear_history("s1");
    }
}
