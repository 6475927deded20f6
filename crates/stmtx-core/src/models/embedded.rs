//! Embedded data for standalone distribution.
//!
//! The default debit/credit keyword list ships inside the binary so that a
//! conversion works without any configuration file.

/// Built-in keyword list (JSON, `{ "debit": [...], "credit": [...] }`).
pub static DEFAULT_KEYWORDS_JSON: &str = include_str!("../../data/default_keywords.json");
