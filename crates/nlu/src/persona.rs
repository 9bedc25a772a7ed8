//! Persona classification
//!
//! Scores a message against two fixed bilingual lexicons. Leader keywords
//! take strict priority: a single leader match wins regardless of how many
//! employee keywords also match. No match at all means citizen, the default
//! persona for ordinary users.
//!
//! Matching is case-insensitive substring containment, so a keyword inside
//! an unrelated word still counts. Accepted heuristic imprecision.

use sahayak_core::Persona;

/// Reporting/analytics vocabulary (English, Hindi, Marathi).
const LEADER_KEYWORDS: &[&str] = &[
    "report",
    "kpi",
    "summary",
    "bottleneck",
    "ward",
    "performance",
    "metrics",
    "analysis",
    "coverage",
    "vulnerability",
    "compare",
    "रिपोर्ट",
    "अहवाल",
    "कामगिरी",
    "dashboard",
    "statistics",
    "stats",
];

/// Operational/workflow vocabulary (English, Hindi, Marathi).
const EMPLOYEE_KEYWORDS: &[&str] = &[
    "pending",
    "approve",
    "workflow",
    "verification",
    "process",
    "application",
    "grievance",
    "resolve",
    "audit",
    "review",
    "मंजूरी",
    "प्रक्रिया",
    "फाइल",
    "applications",
    "status update",
];

fn score(text_lower: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|kw| text_lower.contains(*kw)).count()
}

/// Detect the persona of a message.
pub fn detect_persona(text: &str) -> Persona {
    let text_lower = text.to_lowercase();

    let leader_score = score(&text_lower, LEADER_KEYWORDS);
    let employee_score = score(&text_lower, EMPLOYEE_KEYWORDS);

    if leader_score > 0 {
        Persona::Leader
    } else if employee_score > 0 {
        Persona::Employee
    } else {
        Persona::Citizen
    }
}
