//! Knowledge-base data model
//!
//! The social-welfare dataset is a single JSON document with named
//! collections. Records are open-ended: only the identifier fields used for
//! filtering are typed, everything else rides along in a flattened map so
//! the dataset can evolve without code changes. The document is loaded once
//! and treated as read-only for the lifetime of the process.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A record keyed by scheme: scheme definitions, performance rows and
/// grievance summaries all carry `scheme_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// A record keyed by ward: ward info, coverage and vulnerability rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WardRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ward_id: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// The full welfare dataset. Every collection defaults to empty so a
/// partial dataset still deserializes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeBase {
    #[serde(default)]
    pub schemes: Vec<SchemeRecord>,
    #[serde(default)]
    pub scheme_performance: Vec<SchemeRecord>,
    #[serde(default)]
    pub grievances_summary: Vec<SchemeRecord>,
    #[serde(default)]
    pub beneficiary_coverage: Vec<WardRecord>,
    #[serde(default)]
    pub vulnerability_scores: Vec<WardRecord>,
    #[serde(default)]
    pub wards: Vec<WardRecord>,
    #[serde(default)]
    pub citizens: Vec<Value>,
    #[serde(default)]
    pub meta: Map<String, Value>,
}

/// Summary counts, computed live from collection lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KbStats {
    pub total_schemes: usize,
    pub total_wards: usize,
    pub total_citizens: usize,
}
