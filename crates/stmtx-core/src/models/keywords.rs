//! Debit/credit keyword configuration.

use std::path::Path;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::embedded::DEFAULT_KEYWORDS_JSON;
use crate::error::{Result, StmtxError};

lazy_static! {
    static ref DEFAULT_KEYWORDS: KeywordConfig = KeywordConfig::from_json(DEFAULT_KEYWORDS_JSON)
        .expect("embedded keyword list is valid JSON");
}

/// Keyword lists used by the keyword step of the direction classifier.
///
/// Shape matches the host application's configuration document:
/// `{ "debit": [...], "credit": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordConfig {
    /// Keywords that mark money leaving the account.
    #[serde(default)]
    pub debit: Vec<String>,

    /// Keywords that mark money entering the account.
    #[serde(default)]
    pub credit: Vec<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        DEFAULT_KEYWORDS.clone()
    }
}

impl KeywordConfig {
    /// Create a keyword configuration from explicit lists.
    pub fn new<D, C>(debit: D, credit: C) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            debit: debit.into_iter().map(Into::into).collect(),
            credit: credit.into_iter().map(Into::into).collect(),
        }
        .normalized()
    }

    /// Parse a keyword document from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: KeywordConfig =
            serde_json::from_str(json).map_err(|e| StmtxError::Keywords(e.to_string()))?;
        Ok(config.normalized())
    }

    /// Load a keyword document from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        debug!(
            "Loaded {} debit and {} credit keywords from {}",
            config.debit.len(),
            config.credit.len(),
            path.display()
        );
        Ok(config)
    }

    /// Lowercase and trim every keyword, dropping blanks and duplicates.
    pub fn normalized(self) -> Self {
        Self {
            debit: normalize_list(self.debit),
            credit: normalize_list(self.credit),
        }
    }
}

fn normalize_list(list: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(list.len());
    for keyword in list {
        let keyword = keyword.trim().to_lowercase();
        if !keyword.is_empty() && !out.contains(&keyword) {
            out.push(keyword);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keywords_load() {
        let config = KeywordConfig::default();
        assert!(config.debit.iter().any(|k| k == "purchase"));
        assert!(config.credit.iter().any(|k| k == "deposit"));
    }

    #[test]
    fn test_from_json_normalizes() {
        let config =
            KeywordConfig::from_json(r#"{"debit": [" Rent ", "", "rent"], "credit": ["PAYROLL"]}"#)
                .unwrap();
        assert_eq!(config.debit, vec!["rent"]);
        assert_eq!(config.credit, vec!["payroll"]);
    }

    #[test]
    fn test_missing_list_is_empty() {
        let config = KeywordConfig::from_json(r#"{"credit": ["refund"]}"#).unwrap();
        assert!(config.debit.is_empty());
        assert_eq!(config.credit, vec!["refund"]);
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = KeywordConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, StmtxError::Keywords(_)));
    }
}
