//! Employee handler
//!
//! Concise operational answers over performance and grievance data. The
//! template is English-only; municipal staff work the backoffice systems in
//! English regardless of the query language.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use sahayak_core::ClassificationRecord;
use sahayak_llm::{GenerationParams, LlmBackend};
use sahayak_retrieval::KnowledgeRetriever;

use crate::handlers::{serialize_bounded, PersonaHandler};
use crate::prompts::EMPLOYEE_SYSTEM_PROMPT;

const MAX_RECORDS: usize = 20;
const DATA_CHAR_BUDGET: usize = 3000;

const PARAMS: GenerationParams = GenerationParams {
    temperature: 0.3,
    max_tokens: 400,
};

pub struct EmployeeHandler {
    retriever: Arc<KnowledgeRetriever>,
    backend: Arc<dyn LlmBackend>,
}

impl EmployeeHandler {
    pub fn new(retriever: Arc<KnowledgeRetriever>, backend: Arc<dyn LlmBackend>) -> Self {
        Self { retriever, backend }
    }
}

#[async_trait]
impl PersonaHandler for EmployeeHandler {
    async fn handle(&self, record: &ClassificationRecord) -> String {
        let performance: Vec<_> = self
            .retriever
            .get_performance(None)
            .into_iter()
            .take(MAX_RECORDS)
            .collect();
        let grievances: Vec<_> = self
            .retriever
            .get_grievances(None)
            .into_iter()
            .take(MAX_RECORDS)
            .collect();

        let data = json!({
            "performance": performance,
            "grievances": grievances,
        });
        let data_summary = serialize_bounded(&data, DATA_CHAR_BUDGET);

        let user_prompt = format!(
            "Operational Data: {data_summary}\n\nEmployee Query: {}",
            record.original_query
        );

        match self
            .backend
            .generate(EMPLOYEE_SYSTEM_PROMPT, &user_prompt, PARAMS)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "Employee generation failed");
                format!("Error processing request: {e}")
            }
        }
    }
}
