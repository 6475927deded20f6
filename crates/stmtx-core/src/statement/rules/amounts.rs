//! Money token extraction.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::MONEY;
use super::{ExtractionMatch, FieldExtractor};

/// Sign information carried by a money token itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignMarker {
    /// Leading or trailing minus, or enclosed in parentheses.
    Negative,
    /// `CR` suffix.
    Credit,
    /// `DR` suffix.
    Debit,
}

/// A parsed money token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money {
    /// Absolute value.
    pub amount: Decimal,
    /// Explicit sign or suffix, if the token had one.
    pub marker: Option<SignMarker>,
}

impl Money {
    pub fn new(amount: Decimal, marker: Option<SignMarker>) -> Self {
        Self {
            amount: amount.abs(),
            marker,
        }
    }

    /// Whether the token was written as a negative number.
    pub fn is_negative(&self) -> bool {
        self.marker == Some(SignMarker::Negative)
    }

    /// Amount with the written sign applied. Suffix markers do not change it.
    pub fn signed(&self) -> Decimal {
        if self.is_negative() {
            -self.amount
        } else {
            self.amount
        }
    }
}

/// Money token extractor.
pub struct MoneyExtractor;

impl MoneyExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MoneyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for MoneyExtractor {
    type Output = ExtractionMatch<Money>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for caps in MONEY.captures_iter(text) {
            let integer_part = caps["int"].replace(',', "");
            let Ok(amount) = Decimal::from_str(&format!("{}.{}", integer_part, &caps["cents"]))
            else {
                continue;
            };

            let lead_minus = caps.name("lead").is_some_and(|m| m.as_str().contains('-'));
            let parenthesized = caps.name("open").is_some() && caps.name("close").is_some();
            let negative = lead_minus || caps.name("trail").is_some() || parenthesized;

            let marker = match caps.name("mark").map(|m| m.as_str().to_ascii_uppercase()) {
                Some(m) if m == "CR" => Some(SignMarker::Credit),
                Some(m) if m == "DR" => Some(SignMarker::Debit),
                _ if negative => Some(SignMarker::Negative),
                _ => None,
            };

            // An unmatched parenthesis belongs to the surrounding text
            let mut start = caps.get(0).map_or(0, |m| m.start());
            let mut end = caps.get(0).map_or(0, |m| m.end());
            if !parenthesized {
                if let Some(open) = caps.name("open") {
                    start = open.end();
                }
                if let Some(close) = caps.name("close") {
                    end = close.start();
                }
            }

            results.push(ExtractionMatch::new(
                Money::new(amount, marker),
                start,
                end,
                &text[start..end],
            ));
        }

        results
    }
}

/// Parse the first money token in `s` (e.g. "$1,234.56", "12.34CR", "(5.00)").
pub fn parse_money(s: &str) -> Option<Money> {
    MoneyExtractor::new().extract(s).map(|m| m.value)
}

/// Format an amount as a fixed-point string with two decimals.
pub fn format_money(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}
