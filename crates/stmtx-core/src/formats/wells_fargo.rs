//! Wells Fargo.
//!
//! Transfers and Zelle payments are named unambiguously, so their keywords
//! outrank every other rule, including balance reconciliation.

use super::{DateLayout, KeywordOverrides, StatementFormat};
use crate::models::row::Direction;
use crate::statement::classifier::Rule;
use crate::statement::rules::DateOrder;
use crate::statement::rules::patterns::MM_DD;

const SUPER_KEYWORDS: KeywordOverrides = KeywordOverrides {
    debit: &[
        "zelle to",
        "online transfer to",
        "recurring transfer to",
        "purchase authorized on",
        "recurring payment authorized on",
        "atm withdrawal",
    ],
    credit: &[
        "zelle from",
        "online transfer from",
        "recurring transfer from",
        "edeposit",
        "mobile deposit",
        "atm check deposit",
        "purchase return authorized on",
    ],
};

const OVERRIDES: KeywordOverrides = KeywordOverrides {
    debit: &["monthly service fee", "bill pay", "check"],
    credit: &["payroll", "dir dep", "interest payment"],
};

const RULES: &[Rule] = &[
    Rule::SuperKeywords(SUPER_KEYWORDS),
    Rule::ExplicitMarker,
    Rule::BalanceReconciliation,
    Rule::Keywords,
    Rule::Fallback(Direction::Debit),
];

pub fn account() -> StatementFormat {
    StatementFormat::account(
        "wellsfargo-account",
        "Wells Fargo",
        DateLayout::new(&MM_DD, DateOrder::MonthDay),
    )
    .with_complete_after(2)
    .with_implied_balance()
    .with_overrides(OVERRIDES)
    .with_rules(RULES)
}
