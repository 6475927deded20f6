//! Tangerine.

use super::{DateLayout, KeywordOverrides, StatementFormat};
use crate::statement::rules::DateOrder;
use crate::statement::rules::patterns::DD_MON_YYYY;

const BANK: &str = "Tangerine";

const ACCOUNT_OVERRIDES: KeywordOverrides = KeywordOverrides {
    debit: &["internet withdrawal", "bill payment", "interac e-transfer to"],
    credit: &["interest paid", "internet deposit", "interac e-transfer from", "bonus interest"],
};

fn date_layout() -> DateLayout {
    DateLayout::new(&DD_MON_YYYY, DateOrder::DayMonth).with_year()
}

pub fn account() -> StatementFormat {
    StatementFormat::account("tangerine-account", BANK, date_layout())
        .with_complete_after(2)
        .with_implied_balance()
        .with_overrides(ACCOUNT_OVERRIDES)
}

pub fn card() -> StatementFormat {
    StatementFormat::card("tangerine-card", BANK, date_layout())
}
