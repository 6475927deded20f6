//! Rule-based token extractors for statement text.

pub mod amounts;
pub mod dates;
pub mod keywords;
pub mod patterns;

pub use amounts::{Money, MoneyExtractor, SignMarker, format_money, parse_money};
pub use dates::{DateOrder, StatementYear, parse_statement_date};
pub use keywords::{KeywordMatch, longest_keyword, match_keywords};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A value extracted from text, with where it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte range in the source text.
    pub position: (usize, usize),
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, start: usize, end: usize, source: impl Into<String>) -> Self {
        Self {
            value,
            position: (start, end),
            source: source.into(),
        }
    }

    /// Start byte offset.
    pub fn start(&self) -> usize {
        self.position.0
    }

    /// End byte offset (exclusive).
    pub fn end(&self) -> usize {
        self.position.1
    }
}
