//! Configuration structures for the conversion pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::keywords::KeywordConfig;
use crate::error::Result;

/// Main configuration for stmtx.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StmtxConfig {
    /// Line reconstruction configuration.
    pub segmenter: SegmenterConfig,

    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Conversion defaults.
    pub conversion: ConversionConfig,

    /// Optional keyword document replacing the built-in list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords_path: Option<PathBuf>,
}

/// Line reconstruction from positioned PDF text fragments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Fragments whose baselines differ by at most this many units share a line.
    pub y_tolerance: f32,

    /// A gap wider than this multiple of the preceding fragment's average
    /// glyph width becomes a space.
    pub gap_factor: f32,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            y_tolerance: 3.0,
            gap_factor: 0.3,
        }
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Maximum pages to read (0 = unlimited).
    pub max_pages: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self { max_pages: 0 }
    }
}

/// Defaults applied when the caller does not specify them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Statement format id used when none is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_format: Option<String>,

    /// Statement year used when none is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_year: Option<String>,

    /// Sort output rows by date instead of statement order.
    pub sort_by_date: bool,
}

impl StmtxConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Keyword lists from `keywords_path`, or the built-in defaults.
    pub fn keywords(&self) -> Result<KeywordConfig> {
        match &self.keywords_path {
            Some(path) => KeywordConfig::from_file(path),
            None => Ok(KeywordConfig::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: StmtxConfig =
            serde_json::from_str(r#"{"conversion": {"default_year": "2024"}}"#).unwrap();
        assert_eq!(config.conversion.default_year.as_deref(), Some("2024"));
        assert_eq!(config.segmenter, SegmenterConfig::default());
        assert!(!config.conversion.sort_by_date);
        assert!(config.keywords_path.is_none());
    }

    #[test]
    fn test_keywords_default_without_path() {
        let config = StmtxConfig::default();
        assert_eq!(config.keywords().unwrap(), KeywordConfig::default());
    }
}
