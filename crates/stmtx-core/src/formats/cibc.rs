//! CIBC.

use super::{DateLayout, KeywordOverrides, StatementFormat};
use crate::statement::rules::DateOrder;
use crate::statement::rules::patterns::{MON_DD, MON_DD_MON_DD};

const BANK: &str = "CIBC";

const ACCOUNT_OVERRIDES: KeywordOverrides = KeywordOverrides {
    debit: &["internet banking internet bill pay", "point of sale", "e-transfer sent", "service charge"],
    credit: &["e-transfer received", "payroll", "deposit", "internet banking transfer from"],
};

const CARD_OVERRIDES: KeywordOverrides = KeywordOverrides {
    debit: &["annual fee", "interest"],
    credit: &["payment thank you", "paiement merci", "credit voucher"],
};

pub fn account() -> StatementFormat {
    StatementFormat::account("cibc-account", BANK, DateLayout::new(&MON_DD, DateOrder::MonthDay))
        .with_carry_date()
        .with_complete_after(1)
        .with_implied_balance()
        .with_overrides(ACCOUNT_OVERRIDES)
}

pub fn card() -> StatementFormat {
    StatementFormat::card(
        "cibc-card",
        BANK,
        DateLayout::new(&MON_DD_MON_DD, DateOrder::MonthDay),
    )
    .with_overrides(CARD_OVERRIDES)
}
