//! Error types for the stmtx-core library.

use thiserror::Error;

/// Main error type for the stmtx library.
///
/// Only infrastructure problems end up here. Malformed statement text is never
/// an error: blocks that cannot be parsed are dropped and counted instead.
#[derive(Error, Debug)]
pub enum StmtxError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// No statement format is registered under the requested id.
    #[error("unknown statement format: {0}")]
    UnknownFormat(String),

    /// The year parameter is not a 4-digit year.
    #[error("invalid statement year: {0:?} (expected 4 digits)")]
    InvalidYear(String),

    /// Keyword configuration could not be read.
    #[error("invalid keyword configuration: {0}")]
    Keywords(String),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),
}

/// Result type for the stmtx library.
pub type Result<T> = std::result::Result<T, StmtxError>;
