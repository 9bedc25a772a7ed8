//! Leader handler
//!
//! Analytical, KPI-focused answers over the widest data slice: stats,
//! metadata and 15 records each from the ward-level and scheme-level
//! collections. The `stats` field is included verbatim so count questions
//! ("how many schemes") are answered from real collection sizes rather
//! than whatever survived truncation.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use sahayak_core::ClassificationRecord;
use sahayak_llm::{GenerationParams, LlmBackend};
use sahayak_retrieval::KnowledgeRetriever;

use crate::handlers::{serialize_bounded, PersonaHandler};
use crate::prompts::LEADER_SYSTEM_PROMPT;

const MAX_RECORDS: usize = 15;
const DATA_CHAR_BUDGET: usize = 4000;

const PARAMS: GenerationParams = GenerationParams {
    temperature: 0.2,
    max_tokens: 600,
};

pub struct LeaderHandler {
    retriever: Arc<KnowledgeRetriever>,
    backend: Arc<dyn LlmBackend>,
}

impl LeaderHandler {
    pub fn new(retriever: Arc<KnowledgeRetriever>, backend: Arc<dyn LlmBackend>) -> Self {
        Self { retriever, backend }
    }
}

#[async_trait]
impl PersonaHandler for LeaderHandler {
    async fn handle(&self, record: &ClassificationRecord) -> String {
        fn take(records: Vec<&sahayak_core::WardRecord>) -> Vec<&sahayak_core::WardRecord> {
            records.into_iter().take(MAX_RECORDS).collect()
        }
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
            "stats": self.retriever.get_stats(),
            "meta": self.retriever.get_meta(),
            "wards": take(self.retriever.get_wards(None)),
            "performance": performance,
            "coverage": take(self.retriever.get_coverage(None)),
            "vulnerability": take(self.retriever.get_vulnerability(None)),
            "grievances": grievances,
        });
        let data_summary = serialize_bounded(&data, DATA_CHAR_BUDGET);

        let user_prompt = format!(
            "Analytics Data: {data_summary}\n\nLeadership Query: {}",
            record.original_query
        );

        match self
            .backend
            .generate(LEADER_SYSTEM_PROMPT, &user_prompt, PARAMS)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "Leader generation failed");
                format!("Error generating analytics: {e}")
            }
        }
    }
}
