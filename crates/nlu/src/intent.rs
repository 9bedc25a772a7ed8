//! Intent classification
//!
//! Ordered first-match-wins scan across five keyword groups. The order is a
//! precedence contract: "track my pension status" matches both the status
//! and scheme groups and must resolve to `CheckStatus` because the status
//! group is checked first. Do not reorder.

use sahayak_core::Intent;

const STATUS_KEYWORDS: &[&str] = &["status", "track", "where", "स्थिती", "स्थिति"];
const APPLY_KEYWORDS: &[&str] = &["apply", "how to", "eligibility", "अर्ज", "कसे", "आवेदन"];
const GRIEVANCE_KEYWORDS: &[&str] = &["complaint", "problem", "issue", "तक्रार", "शिकायत"];
const METRICS_KEYWORDS: &[&str] = &["performance", "report", "data", "कामगिरी", "रिपोर्ट"];
const SCHEME_KEYWORDS: &[&str] = &["scheme", "योजना", "pension", "पेंशन"];

/// Keyword groups in precedence order.
const INTENT_GROUPS: &[(&[&str], Intent)] = &[
    (STATUS_KEYWORDS, Intent::CheckStatus),
    (APPLY_KEYWORDS, Intent::ApplyScheme),
    (GRIEVANCE_KEYWORDS, Intent::Grievance),
    (METRICS_KEYWORDS, Intent::Metrics),
    (SCHEME_KEYWORDS, Intent::SchemeInfo),
];

/// Detect the intent of a message. Falls back to `GeneralQuery` when no
/// group matches.
pub fn detect_intent(text: &str) -> Intent {
    let text_lower = text.to_lowercase();

    for (keywords, intent) in INTENT_GROUPS {
        if keywords.iter().any(|kw| text_lower.contains(kw)) {
            return *intent;
        }
    }

    Intent::GeneralQuery
}
