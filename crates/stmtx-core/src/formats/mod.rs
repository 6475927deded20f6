//! Statement format registry.
//!
//! Each supported (bank, account type) pair is a [`StatementFormat`]: a
//! table of patterns and conventions consumed by the shared pipeline in
//! [`crate::statement`]. Bank-specific modules only build these tables.

mod amex;
mod bmo;
mod bofa;
mod capital_one;
mod chase;
mod cibc;
mod citi;
mod desjardins;
mod eq;
mod hsbc;
mod national;
mod rbc;
mod scotia;
mod tangerine;
mod td;
mod wells_fargo;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::error::{Result, StmtxError};
use crate::models::row::Direction;
use crate::statement::classifier::{DEFAULT_RULES, Rule};
use crate::statement::rules::DateOrder;
use crate::statement::rules::patterns::BALANCE_MARKER;

/// Kind of account a statement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    /// Chequing or savings account.
    Account,
    /// Credit card.
    Card,
}

impl std::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountKind::Account => write!(f, "account"),
            AccountKind::Card => write!(f, "card"),
        }
    }
}

/// Where the transaction date sits and how to read it.
#[derive(Debug, Clone, Copy)]
pub struct DateLayout {
    /// Anchored pattern with a `date` capture (and optional `post`).
    pub pattern: &'static Regex,
    /// Order of purely numeric dates.
    pub order: DateOrder,
    /// Whether printed dates already carry a year.
    pub has_year: bool,
}

impl DateLayout {
    pub fn new(pattern: &'static Regex, order: DateOrder) -> Self {
        Self {
            pattern,
            order,
            has_year: false,
        }
    }

    /// Mark the printed dates as carrying their own year.
    pub fn with_year(mut self) -> Self {
        self.has_year = true;
        self
    }
}

/// How trailing money tokens map to amount and balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountLayout {
    /// The last token is the amount.
    Single,
    /// The last two tokens are (amount, balance); a lone token is the amount.
    AmountThenBalance,
}

/// What a written sign means on this statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignConvention {
    /// Negative amounts are credits (payments and refunds on cards).
    NegativeIsCredit,
    /// Negative amounts are debits and positive amounts are credits.
    NegativeIsDebit,
}

/// Hardcoded keyword lists of a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordOverrides {
    pub debit: &'static [&'static str],
    pub credit: &'static [&'static str],
}

impl KeywordOverrides {
    pub const EMPTY: KeywordOverrides = KeywordOverrides {
        debit: &[],
        credit: &[],
    };
}

/// One supported statement layout.
#[derive(Debug, Clone)]
pub struct StatementFormat {
    /// Stable identifier, e.g. `rbc-account`.
    pub id: &'static str,
    /// Bank display name.
    pub bank: &'static str,
    /// Account kind.
    pub kind: AccountKind,
    /// Date pattern and conventions.
    pub date: DateLayout,
    /// Amount/balance token ordering.
    pub amounts: AmountLayout,
    /// Meaning of a written sign.
    pub sign: SignConvention,
    /// Balance marker lines.
    pub balance_markers: &'static Regex,
    /// Extra format-specific noise lines, in addition to the common ones.
    pub noise: Option<&'static Regex>,
    /// Dateless lines after a completed record inherit the last date seen.
    pub carry_date: bool,
    /// Close a block once a line holds at least this many money tokens.
    pub complete_after: Option<usize>,
    /// Track the balance as old ± amount when a row prints none.
    pub implied_balance: bool,
    /// Hardcoded keywords, consulted before the configured lists.
    pub overrides: KeywordOverrides,
    /// Classification rules in priority order.
    pub rules: &'static [Rule],
}

impl StatementFormat {
    /// Create a format with the common defaults: single amount, negative is credit,
    /// English balance markers and the default rule cascade.
    pub fn new(id: &'static str, bank: &'static str, kind: AccountKind, date: DateLayout) -> Self {
        Self {
            id,
            bank,
            kind,
            date,
            amounts: AmountLayout::Single,
            sign: SignConvention::NegativeIsCredit,
            balance_markers: &BALANCE_MARKER,
            noise: None,
            carry_date: false,
            complete_after: None,
            implied_balance: false,
            overrides: KeywordOverrides::EMPTY,
            rules: DEFAULT_RULES,
        }
    }

    /// Credit card defaults: negative amounts are credits and a record ends
    /// at its first money token.
    pub fn card(id: &'static str, bank: &'static str, date: DateLayout) -> Self {
        Self::new(id, bank, AccountKind::Card, date)
            .with_sign(SignConvention::NegativeIsCredit)
            .with_complete_after(1)
    }

    /// Deposit account defaults: amount then balance.
    pub fn account(id: &'static str, bank: &'static str, date: DateLayout) -> Self {
        Self::new(id, bank, AccountKind::Account, date)
            .with_amounts(AmountLayout::AmountThenBalance)
    }

    /// A record starts at a line opening with this format's date.
    pub fn starts_record(&self, line: &str) -> bool {
        self.date.pattern.is_match(line)
    }

    pub fn with_amounts(mut self, amounts: AmountLayout) -> Self {
        self.amounts = amounts;
        self
    }

    pub fn with_sign(mut self, sign: SignConvention) -> Self {
        self.sign = sign;
        self
    }

    pub fn with_balance_markers(mut self, markers: &'static Regex) -> Self {
        self.balance_markers = markers;
        self
    }

    pub fn with_noise(mut self, noise: &'static Regex) -> Self {
        self.noise = Some(noise);
        self
    }

    pub fn with_carry_date(mut self) -> Self {
        self.carry_date = true;
        self
    }

    pub fn with_complete_after(mut self, tokens: usize) -> Self {
        self.complete_after = Some(tokens);
        self
    }

    pub fn with_implied_balance(mut self) -> Self {
        self.implied_balance = true;
        self
    }

    pub fn with_overrides(mut self, overrides: KeywordOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn with_rules(mut self, rules: &'static [Rule]) -> Self {
        self.rules = rules;
        self
    }

    /// Look up a format by id.
    pub fn by_id(id: &str) -> Result<&'static StatementFormat> {
        find(id).ok_or_else(|| StmtxError::UnknownFormat(id.to_string()))
    }

    /// Direction used when no rule decides.
    pub fn fallback(&self) -> Direction {
        self.rules
            .iter()
            .find_map(|r| match r {
                Rule::Fallback(direction) => Some(*direction),
                _ => None,
            })
            .unwrap_or(Direction::Debit)
    }
}

/// Serializable summary of a format, for listings.
#[derive(Debug, Clone, Serialize)]
pub struct FormatInfo {
    pub id: &'static str,
    pub bank: &'static str,
    pub kind: AccountKind,
}

impl From<&StatementFormat> for FormatInfo {
    fn from(format: &StatementFormat) -> Self {
        Self {
            id: format.id,
            bank: format.bank,
            kind: format.kind,
        }
    }
}

lazy_static! {
    static ref REGISTRY: Vec<StatementFormat> = vec![
        rbc::account(),
        rbc::card(),
        td::account(),
        td::card(),
        cibc::account(),
        cibc::card(),
        bmo::account(),
        bmo::card(),
        scotia::account(),
        scotia::card(),
        amex::card(),
        national::account(),
        national::card(),
        tangerine::account(),
        tangerine::card(),
        desjardins::account(),
        hsbc::account(),
        eq::account(),
        wells_fargo::account(),
        chase::account(),
        chase::card(),
        bofa::account(),
        bofa::card(),
        capital_one::card(),
        citi::card(),
    ];
}

/// All registered formats, in listing order.
pub fn all() -> &'static [StatementFormat] {
    &REGISTRY
}

/// Find a format by id (case-insensitive).
pub fn find(id: &str) -> Option<&'static StatementFormat> {
    let id = id.trim();
    REGISTRY.iter().find(|f| f.id.eq_ignore_ascii_case(id))
}

/// All registered format ids.
pub fn ids() -> Vec<&'static str> {
    REGISTRY.iter().map(|f| f.id).collect()
}

/// Summaries of all registered formats.
pub fn infos() -> Vec<FormatInfo> {
    REGISTRY.iter().map(FormatInfo::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_ids_unique() {
        let ids = ids();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), 25);
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(find("RBC-Account").map(|f| f.id), Some("rbc-account"));
        assert!(find("nope-account").is_none());
    }

    #[test]
    fn test_by_id_unknown_format() {
        assert!(matches!(
            StatementFormat::by_id("nope"),
            Err(StmtxError::UnknownFormat(id)) if id == "nope"
        ));
    }

    #[test]
    fn test_kind_matches_id_suffix() {
        for format in all() {
            let expected = if format.id.ends_with("-card") {
                AccountKind::Card
            } else {
                AccountKind::Account
            };
            assert_eq!(format.kind, expected, "{}", format.id);
        }
    }

    #[test]
    fn test_every_format_ends_with_fallback() {
        for format in all() {
            assert!(
                matches!(format.rules.last(), Some(Rule::Fallback(_))),
                "{}",
                format.id
            );
        }
    }
}
