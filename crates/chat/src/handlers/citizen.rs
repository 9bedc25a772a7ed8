//! Citizen handler
//!
//! Simple, friendly responses about available schemes. The instruction
//! template follows the message's language; scheme data is capped at the
//! first 10 records and a 2000-character serialized budget.

use std::sync::Arc;

use async_trait::async_trait;

use sahayak_core::{ClassificationRecord, Language};
use sahayak_llm::{GenerationParams, LlmBackend};
use sahayak_retrieval::KnowledgeRetriever;

use crate::handlers::{serialize_bounded, PersonaHandler};
use crate::prompts::citizen_system_prompt;

const MAX_SCHEMES: usize = 10;
const DATA_CHAR_BUDGET: usize = 2000;

const PARAMS: GenerationParams = GenerationParams {
    temperature: 0.7,
    max_tokens: 500,
};

pub struct CitizenHandler {
    retriever: Arc<KnowledgeRetriever>,
    backend: Arc<dyn LlmBackend>,
}

impl CitizenHandler {
    pub fn new(retriever: Arc<KnowledgeRetriever>, backend: Arc<dyn LlmBackend>) -> Self {
        Self { retriever, backend }
    }
}

/// Apology shown when generation fails, in the citizen's language.
fn apology(language: Language, detail: &str) -> String {
    match language {
        Language::English => format!(
            "I apologize, but I'm having trouble processing your request. \
             Please try again. Error: {detail}"
        ),
        Language::Hindi => format!(
            "क्षमा करें, आपके अनुरोध को संसाधित करने में समस्या हो रही है। \
             कृपया फिर से प्रयास करें। Error: {detail}"
        ),
        Language::Marathi => format!(
            "क्षमस्व, तुमच्या विनंतीवर प्रक्रिया करताना अडचण येत आहे. \
             कृपया पुन्हा प्रयत्न करा. Error: {detail}"
        ),
    }
}

#[async_trait]
impl PersonaHandler for CitizenHandler {
    async fn handle(&self, record: &ClassificationRecord) -> String {
        let schemes = self.retriever.get_schemes(None);
        let slice: Vec<_> = schemes.into_iter().take(MAX_SCHEMES).collect();
        let data_summary = serialize_bounded(&slice, DATA_CHAR_BUDGET);

        let user_prompt = format!(
            "Available Schemes: {data_summary}\n\nCitizen Question: {}",
            record.original_query
        );

        match self
            .backend
            .generate(citizen_system_prompt(record.language), &user_prompt, PARAMS)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, language = %record.language, "Citizen generation failed");
                apology(record.language, &e.to_string())
            }
        }
    }
}
