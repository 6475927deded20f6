//! TD Canada Trust.

use super::{DateLayout, KeywordOverrides, StatementFormat};
use crate::statement::rules::DateOrder;
use crate::statement::rules::patterns::{MON_DD, MON_DD_MON_DD};

const BANK: &str = "TD Canada Trust";

const ACCOUNT_OVERRIDES: KeywordOverrides = KeywordOverrides {
    debit: &["send e-tfr", "tfr-to", "monthly account fee", "pos purchase", "atm w/d"],
    credit: &["e-tfr rcv", "tfr-fr", "payroll", "gst", "interest paid", "mobile deposit"],
};

const CARD_OVERRIDES: KeywordOverrides = KeywordOverrides {
    debit: &["annual fee", "interest"],
    credit: &["payment - thank you", "td points redemption"],
};

pub fn account() -> StatementFormat {
    StatementFormat::account("td-account", BANK, DateLayout::new(&MON_DD, DateOrder::MonthDay))
        .with_complete_after(2)
        .with_implied_balance()
        .with_overrides(ACCOUNT_OVERRIDES)
}

pub fn card() -> StatementFormat {
    StatementFormat::card(
        "td-card",
        BANK,
        DateLayout::new(&MON_DD_MON_DD, DateOrder::MonthDay),
    )
    .with_overrides(CARD_OVERRIDES)
}
