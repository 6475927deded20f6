//! Transaction assembly: grouping logical lines into blocks.

use rust_decimal::Decimal;
use tracing::trace;

use super::rules::patterns::{CLOSING_MARKER, NOISE};
use super::rules::{ExtractionMatch, FieldExtractor, Money, MoneyExtractor};
use crate::formats::{AmountLayout, StatementFormat};
use crate::segment::collapse_whitespace;

/// Whether a balance marker opens or closes a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Opening,
    Closing,
}

/// A balance marker line ("Opening balance", "Balance forward", ...).
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceMarker {
    pub kind: MarkerKind,
    /// Trailing money value, signed as written.
    pub balance: Option<Decimal>,
    /// Date printed on the marker line, if any.
    pub date: Option<String>,
    /// The source line.
    pub line: String,
}

/// Consecutive lines that make up one transaction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionBlock {
    pub lines: Vec<String>,
    /// Date inherited from an earlier line, for blocks that print none.
    pub carried_date: Option<String>,
}

impl TransactionBlock {
    /// The block's lines joined with single spaces.
    pub fn text(&self) -> String {
        self.lines.join(" ")
    }
}

/// Output unit of the assembler.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Transaction(TransactionBlock),
    Marker(BalanceMarker),
}

/// What a following money-only line completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Awaiting {
    /// The last marker printed no balance.
    MarkerBalance,
    /// The last block closed on its amount without a balance.
    RowBalance,
}

/// Groups lines into [`Block`]s using a format's start-of-record predicate.
pub struct Assembler<'a> {
    format: &'a StatementFormat,
    money: MoneyExtractor,
}

impl<'a> Assembler<'a> {
    pub fn new(format: &'a StatementFormat) -> Self {
        Self {
            format,
            money: MoneyExtractor::new(),
        }
    }

    /// Partition lines into transaction blocks and balance markers, in
    /// statement order.
    pub fn assemble<S: AsRef<str>>(&self, lines: &[S]) -> Vec<Block> {
        let mut blocks = Vec::new();
        let mut buffer: Option<TransactionBlock> = None;
        let mut current_date: Option<String> = None;
        let mut awaiting: Option<Awaiting> = None;

        for line in lines.iter().map(AsRef::as_ref) {
            let tokens = self.money.extract_all(line);

            if tokens.is_empty() && self.is_noise(line) {
                trace!("Skipping noise line: {}", line);
                continue;
            }

            let awaited = awaiting.take();

            if buffer.is_none()
                && is_money_only(line, &tokens)
                && !self.format.starts_record(line)
                && !self.format.balance_markers.is_match(line)
            {
                self.attach_money_line(line, &tokens, awaited, &mut blocks);
                continue;
            }

            if self.format.balance_markers.is_match(line) {
                flush(&mut buffer, &mut blocks);

                let date = self.leading_date(line);
                if date.is_some() {
                    current_date = date.clone();
                }

                let kind = if CLOSING_MARKER.is_match(line) {
                    MarkerKind::Closing
                } else {
                    MarkerKind::Opening
                };

                let balance = tokens.last().map(|t| t.value.signed());
                if balance.is_none() {
                    awaiting = Some(Awaiting::MarkerBalance);
                }
                blocks.push(Block::Marker(BalanceMarker {
                    kind,
                    balance,
                    date,
                    line: line.to_string(),
                }));
                continue;
            }

            if self.format.starts_record(line) {
                flush(&mut buffer, &mut blocks);
                if let Some(date) = self.leading_date(line) {
                    current_date = Some(date);
                }
                buffer = Some(TransactionBlock {
                    lines: vec![line.to_string()],
                    carried_date: None,
                });
            } else if let Some(block) = buffer.as_mut() {
                block.lines.push(line.to_string());
            } else {
                let carried_date = if self.format.carry_date {
                    current_date.clone()
                } else {
                    None
                };
                buffer = Some(TransactionBlock {
                    lines: vec![line.to_string()],
                    carried_date,
                });
            }

            if self
                .format
                .complete_after
                .is_some_and(|n| tokens.len() >= n)
            {
                if self.lacks_balance(buffer.as_ref()) {
                    awaiting = Some(Awaiting::RowBalance);
                }
                flush(&mut buffer, &mut blocks);
            }
        }

        flush(&mut buffer, &mut blocks);
        blocks
    }

    /// Give a line holding only money to whatever is waiting for it, or
    /// drop it.
    fn attach_money_line(
        &self,
        line: &str,
        tokens: &[ExtractionMatch<Money>],
        awaited: Option<Awaiting>,
        blocks: &mut [Block],
    ) {
        match (awaited, blocks.last_mut()) {
            (Some(Awaiting::MarkerBalance), Some(Block::Marker(marker))) => {
                marker.balance = tokens.last().map(|t| t.value.signed());
            }
            (Some(Awaiting::RowBalance), Some(Block::Transaction(block))) => {
                block.lines.push(line.to_string());
            }
            _ => trace!("Skipping stray money line: {}", line),
        }
    }

    /// A closing block on a balance layout that carries no balance token.
    fn lacks_balance(&self, block: Option<&TransactionBlock>) -> bool {
        self.format.amounts == AmountLayout::AmountThenBalance
            && block.is_some_and(|b| self.money.extract_all(&b.text()).len() < 2)
    }

    fn is_noise(&self, line: &str) -> bool {
        NOISE.is_match(line) || self.format.noise.is_some_and(|re| re.is_match(line))
    }

    fn leading_date(&self, line: &str) -> Option<String> {
        self.format
            .date
            .pattern
            .captures(line)
            .and_then(|caps| caps.name("date"))
            .map(|m| collapse_whitespace(m.as_str()))
    }
}

/// Nothing but money tokens and whitespace.
fn is_money_only(line: &str, tokens: &[ExtractionMatch<Money>]) -> bool {
    if tokens.is_empty() {
        return false;
    }
    let mut cursor = 0;
    for token in tokens {
        let (start, end) = token.position;
        if start < cursor || !line[cursor..start].trim().is_empty() {
            return false;
        }
        cursor = end;
    }
    line[cursor..].trim().is_empty()
}

fn flush(buffer: &mut Option<TransactionBlock>, blocks: &mut Vec<Block>) {
    if let Some(block) = buffer.take() {
        if !block.lines.is_empty() {
            blocks.push(Block::Transaction(block));
        }
    }
}
