//! Knowledge retriever
//!
//! Filtered read views over the shared, read-only [`KnowledgeBase`].
//! Identifier filters are case-insensitive: both sides are normalized to
//! uppercase before comparison. An unknown identifier yields an empty
//! result, never an error. No mutation capability is exposed.

use std::sync::Arc;

use sahayak_core::{KbStats, KnowledgeBase, SchemeRecord, WardRecord};
use serde_json::{Map, Value};

/// Read views over the welfare dataset.
#[derive(Debug, Clone)]
pub struct KnowledgeRetriever {
    kb: Arc<KnowledgeBase>,
}

fn id_matches(record_id: Option<&str>, filter_upper: &str) -> bool {
    record_id.is_some_and(|id| id.to_uppercase() == filter_upper)
}

fn filter_by_scheme<'a>(
    records: &'a [SchemeRecord],
    scheme_id: Option<&str>,
) -> Vec<&'a SchemeRecord> {
    match scheme_id {
        Some(id) => {
            let id_upper = id.to_uppercase();
            records
                .iter()
                .filter(|r| id_matches(r.scheme_id.as_deref(), &id_upper))
                .collect()
        }
        None => records.iter().collect(),
    }
}

fn filter_by_ward<'a>(records: &'a [WardRecord], ward_id: Option<&str>) -> Vec<&'a WardRecord> {
    match ward_id {
        Some(id) => {
            let id_upper = id.to_uppercase();
            records
                .iter()
                .filter(|r| id_matches(r.ward_id.as_deref(), &id_upper))
                .collect()
        }
        None => records.iter().collect(),
    }
}

impl KnowledgeRetriever {
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self { kb }
    }

    /// Schemes, optionally filtered by scheme id.
    pub fn get_schemes(&self, scheme_id: Option<&str>) -> Vec<&SchemeRecord> {
        filter_by_scheme(&self.kb.schemes, scheme_id)
    }

    /// Schemes whose category matches, case-insensitively.
    pub fn get_schemes_by_category(&self, category: &str) -> Vec<&SchemeRecord> {
        let category_lower = category.to_lowercase();
        self.kb
            .schemes
            .iter()
            .filter(|s| {
                s.category
                    .as_deref()
                    .is_some_and(|c| c.to_lowercase() == category_lower)
            })
            .collect()
    }

    /// Scheme performance rows, optionally filtered by scheme id.
    pub fn get_performance(&self, scheme_id: Option<&str>) -> Vec<&SchemeRecord> {
        filter_by_scheme(&self.kb.scheme_performance, scheme_id)
    }

    /// Grievance summaries, optionally filtered by scheme id.
    pub fn get_grievances(&self, scheme_id: Option<&str>) -> Vec<&SchemeRecord> {
        filter_by_scheme(&self.kb.grievances_summary, scheme_id)
    }

    /// Beneficiary coverage rows, optionally filtered by ward id.
    pub fn get_coverage(&self, ward_id: Option<&str>) -> Vec<&WardRecord> {
        filter_by_ward(&self.kb.beneficiary_coverage, ward_id)
    }

    /// Vulnerability scores, optionally filtered by ward id.
    pub fn get_vulnerability(&self, ward_id: Option<&str>) -> Vec<&WardRecord> {
        filter_by_ward(&self.kb.vulnerability_scores, ward_id)
    }

    /// Ward records, optionally filtered by ward id.
    pub fn get_wards(&self, ward_id: Option<&str>) -> Vec<&WardRecord> {
        filter_by_ward(&self.kb.wards, ward_id)
    }

    /// Summary counts, computed from live collection lengths on every call.
    pub fn get_stats(&self) -> KbStats {
        KbStats {
            total_schemes: self.kb.schemes.len(),
            total_wards: self.kb.wards.len(),
            total_citizens: self.kb.citizens.len(),
        }
    }

    /// Dataset metadata; empty map when the dataset carries none.
    pub fn get_meta(&self) -> &Map<String, Value> {
        &self.kb.meta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_kb() -> Arc<KnowledgeBase> {
        let kb: KnowledgeBase = serde_json::from_value(serde_json::json!({
            "schemes": [
                {"scheme_id": "PEN001", "category": "Pension", "name": "Old Age Pension"},
                {"scheme_id": "EDU002", "category": "Education", "name": "Scholarship"},
                {"name": "unlabelled"}
            ],
            "scheme_performance": [
                {"scheme_id": "PEN001", "approval_rate": 0.82}
            ],
            "grievances_summary": [
                {"scheme_id": "EDU002", "open": 4}
            ],
            "wards": [
                {"ward_id": "W01", "name": "Naupada"},
                {"ward_id": "W02", "name": "Kalwa"}
            ],
            "beneficiary_coverage": [
                {"ward_id": "W01", "covered_pct": 61.5}
            ],
            "vulnerability_scores": [
                {"ward_id": "W02", "score": 0.7}
            ],
            "citizens": [{"id": 1}, {"id": 2}, {"id": 3}],
            "meta": {"city": "Thane", "version": "1.0"}
        }))
        .unwrap();
        Arc::new(kb)
    }

    #[test]
    fn test_unfiltered_returns_full_collection() {
        let retriever = KnowledgeRetriever::new(test_kb());
        assert_eq!(retriever.get_schemes(None).len(), 3);
        assert_eq!(retriever.get_wards(None).len(), 2);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let retriever = KnowledgeRetriever::new(test_kb());
        let upper = retriever.get_schemes(Some("PEN001"));
        let lower = retriever.get_schemes(Some("pen001"));
        let mixed = retriever.get_schemes(Some("Pen001"));
        assert_eq!(upper.len(), 1);
        assert_eq!(upper, lower);
        assert_eq!(upper, mixed);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let retriever = KnowledgeRetriever::new(test_kb());
        let first = retriever.get_schemes(Some("EDU002"));
        let second = retriever.get_schemes(Some("EDU002"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_id_yields_empty() {
        let retriever = KnowledgeRetriever::new(test_kb());
        assert!(retriever.get_schemes(Some("NOPE")).is_empty());
        assert!(retriever.get_wards(Some("W99")).is_empty());
        assert!(retriever.get_coverage(Some("W99")).is_empty());
    }

    #[test]
    fn test_records_without_id_never_match_a_filter() {
        let retriever = KnowledgeRetriever::new(test_kb());
        let all = retriever.get_schemes(None);
        assert!(all.iter().any(|s| s.scheme_id.is_none()));
        // but the unlabelled record cannot be reached via a filter
        assert!(retriever.get_schemes(Some("")).is_empty());
    }

    #[test]
    fn test_category_filter() {
        let retriever = KnowledgeRetriever::new(test_kb());
        let pensions = retriever.get_schemes_by_category("pension");
        assert_eq!(pensions.len(), 1);
        assert_eq!(pensions[0].scheme_id.as_deref(), Some("PEN001"));
    }

    #[test]
    fn test_stats_reflect_collection_lengths() {
        let retriever = KnowledgeRetriever::new(test_kb());
        let stats = retriever.get_stats();
        assert_eq!(stats.total_schemes, 3);
        assert_eq!(stats.total_wards, 2);
        assert_eq!(stats.total_citizens, 3);
        // read-only KB, so repeated calls are stable
        assert_eq!(retriever.get_stats(), stats);
    }

    #[test]
    fn test_meta() {
        let retriever = KnowledgeRetriever::new(test_kb());
        assert_eq!(retriever.get_meta()["city"], "Thane");

        let empty = KnowledgeRetriever::new(Arc::new(KnowledgeBase::default()));
        assert!(empty.get_meta().is_empty());
    }
}
