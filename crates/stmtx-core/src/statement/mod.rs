//! Statement conversion pipeline.
//!
//! Lines are grouped into transaction blocks by the [`assembler`], each
//! block is split into date, description and amounts by [`fields`], and the
//! [`classifier`] decides whether it is a debit or a credit.

pub mod assembler;
pub mod classifier;
mod converter;
pub mod fields;
pub mod rules;

pub use assembler::{Assembler, BalanceMarker, Block, MarkerKind, TransactionBlock};
pub use classifier::{Classification, Classifier, Rule, RunningBalance};
pub use converter::{NO_TRANSACTIONS, StatementConverter, StatementParser};
pub use fields::{DropReason, FieldParser, ParsedFields};
