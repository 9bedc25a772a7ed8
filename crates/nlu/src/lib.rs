//! Language, persona and intent classification
//!
//! Keyword-driven heuristics over fixed bilingual lexicons. All three
//! classifiers are total functions: every string input maps to a value from
//! a closed enum, there are no error paths. The matching is deliberately
//! plain substring containment — tokenizing or stemming would change
//! observable classification outcomes.

pub mod analyzer;
pub mod intent;
pub mod language;
pub mod persona;

pub use analyzer::ContextAnalyzer;
pub use intent::detect_intent;
pub use language::detect_language;
pub use persona::detect_persona;
