//! Core library for bank statement conversion.
//!
//! This crate provides:
//! - Line segmentation for pasted text and positioned PDF text fragments
//! - Transaction assembly, field extraction and debit/credit inference
//! - A registry of Canadian/US statement formats expressed as rule tables
//! - PDF text extraction (feature `pdf`)

pub mod error;
pub mod formats;
pub mod models;
#[cfg(feature = "pdf")]
pub mod pdf;
pub mod segment;
pub mod statement;

pub use error::{PdfError, Result, StmtxError};
pub use formats::{AccountKind, StatementFormat};
pub use models::config::StmtxConfig;
pub use models::keywords::KeywordConfig;
pub use models::row::{
    ClassificationPath, Conversion, ConversionStats, ConvertedRow, Direction, TransactionRow,
    to_grid,
};
#[cfg(feature = "pdf")]
pub use pdf::{PdfExtractor, PdfPage, PdfProcessor};
pub use segment::{TextFragment, reconstruct_lines, split_lines};
pub use statement::{StatementConverter, StatementParser};
