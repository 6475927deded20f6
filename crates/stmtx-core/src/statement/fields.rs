//! Field extraction: date, description, amount and balance of one block.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use super::assembler::TransactionBlock;
use super::rules::{
    ExtractionMatch, FieldExtractor, Money, MoneyExtractor, StatementYear, parse_statement_date,
};
use crate::formats::{AmountLayout, StatementFormat};
use crate::segment::collapse_whitespace;

/// Why a block produced no row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DropReason {
    #[error("no leading date")]
    NoDate,
    #[error("no money token")]
    NoAmount,
    #[error("no description on a carried-date line")]
    NoDescription,
}

/// Fields extracted from one transaction block.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFields {
    /// Date as displayed, with the statement year appended when given.
    pub date: String,
    /// Posting date on two-date layouts.
    pub posting_date: Option<String>,
    pub description: String,
    /// Transaction amount.
    pub amount: Money,
    /// Balance printed after the amount, signed as written.
    pub balance: Option<Decimal>,
    /// Sortable date.
    pub sort_date: Option<NaiveDate>,
}

/// Extracts [`ParsedFields`] from transaction blocks of one format.
pub struct FieldParser<'a> {
    format: &'a StatementFormat,
    year: Option<&'a StatementYear>,
    money: MoneyExtractor,
}

impl<'a> FieldParser<'a> {
    pub fn new(format: &'a StatementFormat, year: Option<&'a StatementYear>) -> Self {
        Self {
            format,
            year,
            money: MoneyExtractor::new(),
        }
    }

    /// Parse a block, or report why it has to be dropped.
    pub fn parse(&self, block: &TransactionBlock) -> Result<ParsedFields, DropReason> {
        let text = collapse_whitespace(&block.text());

        let (date, posting_date, rest) = match self.format.date.pattern.captures(&text) {
            Some(caps) => {
                let end = caps.get(0).map_or(0, |m| m.end());
                let date = caps
                    .name("date")
                    .map(|m| collapse_whitespace(m.as_str()))
                    .ok_or(DropReason::NoDate)?;
                let posting = caps.name("post").map(|m| collapse_whitespace(m.as_str()));
                (date, posting, &text[end..])
            }
            None => match &block.carried_date {
                Some(date) => (date.clone(), None, text.as_str()),
                None => return Err(DropReason::NoDate),
            },
        };

        let tokens = self.money.extract_all(rest);
        if tokens.is_empty() {
            return Err(DropReason::NoAmount);
        }

        let n = tokens.len();
        let (amount_idx, balance_idx) = match self.format.amounts {
            AmountLayout::AmountThenBalance if n >= 2 => (n - 2, Some(n - 1)),
            _ => (n - 1, None),
        };

        let consumed: Vec<&ExtractionMatch<Money>> = std::iter::once(&tokens[amount_idx])
            .chain(balance_idx.map(|i| &tokens[i]))
            .collect();
        let description = strip_spans(rest, &consumed);
        if description.is_empty() && block.carried_date.is_some() {
            return Err(DropReason::NoDescription);
        }

        let default_year = self
            .year
            .map(|y| y.value)
            .unwrap_or_else(StatementYear::current);
        let sort_date = parse_statement_date(&date, self.format.date.order, default_year);

        let with_year = |date: String| match self.year {
            Some(year) if !self.format.date.has_year => format!("{} {}", date, year.text),
            _ => date,
        };

        Ok(ParsedFields {
            date: with_year(date),
            posting_date: posting_date.map(with_year),
            description,
            amount: tokens[amount_idx].value,
            balance: balance_idx.map(|i| tokens[i].value.signed()),
            sort_date,
        })
    }
}

/// Remove the matched spans from `text` and collapse whitespace.
fn strip_spans<T>(text: &str, spans: &[&ExtractionMatch<T>]) -> String {
    let mut ranges: Vec<(usize, usize)> = spans.iter().map(|m| m.position).collect();
    ranges.sort_unstable();

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for (start, end) in ranges {
        if start >= cursor {
            out.push_str(&text[cursor..start]);
            out.push(' ');
            cursor = end;
        }
    }
    out.push_str(&text[cursor..]);

    collapse_whitespace(&out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats;
    use std::str::FromStr;

    fn block(lines: &[&str]) -> TransactionBlock {
        TransactionBlock {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            carried_date: None,
        }
    }

    fn parse(format_id: &str, lines: &[&str], year: Option<&str>) -> Result<ParsedFields, DropReason> {
        let format = formats::find(format_id).unwrap();
        let year = StatementYear::parse(year).unwrap();
        FieldParser::new(format, year.as_ref()).parse(&block(lines))
    }

    #[test]
    fn test_amount_then_balance() {
        let fields = parse("rbc-account", &["Jan 05 Payment received 100.00 600.00"], None).unwrap();

        assert_eq!(fields.date, "Jan 05");
        assert_eq!(fields.description, "Payment received");
        assert_eq!(fields.amount.amount, Decimal::from_str("100.00").unwrap());
        assert_eq!(fields.balance, Some(Decimal::from_str("600.00").unwrap()));
    }

    #[test]
    fn test_two_dates_and_year() {
        let fields = parse(
            "amex-card",
            &["Jul 01 Jul 02 COFFEE SHOP TORONTO ON 4.50"],
            Some("2024"),
        )
        .unwrap();

        assert_eq!(fields.date, "Jul 01 2024");
        assert_eq!(fields.posting_date.as_deref(), Some("Jul 02 2024"));
        assert_eq!(fields.description, "COFFEE SHOP TORONTO ON");
        assert_eq!(fields.balance, None);
        assert_eq!(fields.sort_date, NaiveDate::from_ymd_opt(2024, 7, 1));
    }

    #[test]
    fn test_year_not_appended_to_dated_layouts() {
        let fields = parse("eq-account", &["Jan 2, 2023 Interest 1.25 101.25"], Some("2024")).unwrap();
        assert_eq!(fields.date, "Jan 2, 2023");
        assert_eq!(fields.sort_date, NaiveDate::from_ymd_opt(2023, 1, 2));
    }

    #[test]
    fn test_description_keeps_interior_text() {
        let fields = parse(
            "td-account",
            &["Jan 05 SEND E-TFR", "JOHN SMITH", "50.00 450.00"],
            None,
        )
        .unwrap();
        assert_eq!(fields.description, "SEND E-TFR JOHN SMITH");
    }

    #[test]
    fn test_single_token_on_balance_layout_is_amount() {
        let fields = parse("td-account", &["Jan 05 ATM 20.00"], None).unwrap();
        assert_eq!(fields.amount.amount, Decimal::from_str("20.00").unwrap());
        assert_eq!(fields.balance, None);
    }

    #[test]
    fn test_carried_date() {
        let format = formats::find("rbc-account").unwrap();
        let block = TransactionBlock {
            lines: vec!["Grocery store 20.00".to_string()],
            carried_date: Some("Jan 05".to_string()),
        };
        let fields = FieldParser::new(format, None).parse(&block).unwrap();
        assert_eq!(fields.date, "Jan 05");
        assert_eq!(fields.description, "Grocery store");
    }

    #[test]
    fn test_posting_date_without_year() {
        let fields = parse("amex-card", &["Jul 01 Jul 02 COFFEE SHOP 4.50"], None).unwrap();
        assert_eq!(fields.date, "Jul 01");
        assert_eq!(fields.posting_date.as_deref(), Some("Jul 02"));
    }

    #[test]
    fn test_carried_date_money_only_is_dropped() {
        let format = formats::find("rbc-account").unwrap();
        let block = TransactionBlock {
            lines: vec!["600.00".to_string()],
            carried_date: Some("Jan 05".to_string()),
        };
        assert_eq!(
            FieldParser::new(format, None).parse(&block),
            Err(DropReason::NoDescription)
        );
    }

    #[test]
    fn test_drop_reasons() {
        assert_eq!(
            parse("rbc-account", &["Thank you for banking with us"], None),
            Err(DropReason::NoDate)
        );
        assert_eq!(
            parse("rbc-account", &["Jan 05 Interest rate changed"], None),
            Err(DropReason::NoAmount)
        );
    }
}
