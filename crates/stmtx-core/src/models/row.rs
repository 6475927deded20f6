//! Normalized transaction rows and conversion results.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Column headings of the rendered transaction table.
pub const TABLE_HEADER: [&str; 5] = ["Date", "Description", "Debit", "Credit", "Balance"];

/// Direction of a transaction relative to the account holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Money leaving the account (purchase, withdrawal, fee).
    Debit,
    /// Money entering the account (deposit, refund, payment to a card).
    Credit,
}

/// Which classification rule decided a row's direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationPath {
    /// Format-level keyword that outranks every other rule.
    SuperKeyword,
    /// Sign, parentheses or CR/DR suffix on the amount.
    ExplicitMarker,
    /// New balance minus old balance equals the amount.
    Reconciled,
    /// Reconciliation failed; the sign of the balance delta was used.
    BalanceDelta,
    /// Hardcoded keyword list of the statement format.
    FormatKeyword,
    /// Configured (or built-in default) keyword list.
    ConfiguredKeyword,
    /// Nothing matched; the format default applied.
    Fallback,
}

/// A single normalized transaction row.
///
/// Exactly one of `debit` and `credit` is non-empty. Amounts are fixed-point
/// strings with two decimals; `balance` is empty when the statement has no
/// balance for this row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRow {
    pub date: String,
    pub description: String,
    pub debit: String,
    pub credit: String,
    pub balance: String,
}

impl TransactionRow {
    /// The row as five cells in table order.
    pub fn cells(&self) -> [String; 5] {
        [
            self.date.clone(),
            self.description.clone(),
            self.debit.clone(),
            self.credit.clone(),
            self.balance.clone(),
        ]
    }

    /// Direction implied by which amount column is filled.
    pub fn direction(&self) -> Direction {
        if self.credit.is_empty() {
            Direction::Debit
        } else {
            Direction::Credit
        }
    }
}

/// A row together with how it was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertedRow {
    /// The normalized row.
    #[serde(flatten)]
    pub row: TransactionRow,

    /// Rule that decided the direction.
    pub path: ClassificationPath,

    /// Sortable date built from the statement year (or the current year).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_date: Option<NaiveDate>,
}

/// Counters collected during one conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Logical lines after segmentation.
    pub lines: usize,
    /// Transaction blocks produced by the assembler.
    pub blocks: usize,
    /// Balance marker lines consumed.
    pub balance_markers: usize,
    /// Blocks dropped because no date, amount or description could be extracted.
    pub dropped_blocks: usize,
}

/// Output of one conversion run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    /// Id of the statement format used.
    pub format_id: String,

    /// Rows in statement order.
    pub rows: Vec<ConvertedRow>,

    /// Run counters.
    pub stats: ConversionStats,

    /// User-facing warnings (e.g. no transactions found).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl Conversion {
    /// Check if no rows were produced.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Plain transaction rows, in order.
    pub fn transaction_rows(&self) -> Vec<TransactionRow> {
        self.rows.iter().map(|r| r.row.clone()).collect()
    }

    /// Stable sort of the rows by their sortable date; undated rows keep
    /// their relative position at the end.
    pub fn sort_by_date(&mut self) {
        self.rows.sort_by_key(|r| (r.sort_date.is_none(), r.sort_date));
    }

    /// Render as an array-of-arrays table with the header row first.
    pub fn to_grid(&self) -> Vec<Vec<String>> {
        to_grid(&self.transaction_rows())
    }
}

/// Render rows as an array-of-arrays table with the header row first.
pub fn to_grid(rows: &[TransactionRow]) -> Vec<Vec<String>> {
    let mut grid = Vec::with_capacity(rows.len() + 1);
    grid.push(TABLE_HEADER.iter().map(|h| h.to_string()).collect());
    grid.extend(rows.iter().map(|r| r.cells().to_vec()));
    grid
}
