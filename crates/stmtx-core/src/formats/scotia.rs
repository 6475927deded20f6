//! Scotiabank.
//!
//! Card transactions start with a three digit reference number followed by
//! the transaction and posting dates.

use super::{DateLayout, KeywordOverrides, StatementFormat};
use crate::statement::rules::DateOrder;
use crate::statement::rules::patterns::{MON_DD, REF_MON_DD_MON_DD};

const BANK: &str = "Scotiabank";

const ACCOUNT_OVERRIDES: KeywordOverrides = KeywordOverrides {
    debit: &["point of sale purchase", "bill payment", "service charge", "withdrawal"],
    credit: &["deposit", "payroll dep", "mb-transfer from", "interest paid"],
};

const CARD_OVERRIDES: KeywordOverrides = KeywordOverrides {
    debit: &["interest charges", "annual fee"],
    credit: &["payment from", "payment-thank you", "returns"],
};

pub fn account() -> StatementFormat {
    StatementFormat::account("scotia-account", BANK, DateLayout::new(&MON_DD, DateOrder::MonthDay))
        .with_complete_after(2)
        .with_overrides(ACCOUNT_OVERRIDES)
}

pub fn card() -> StatementFormat {
    StatementFormat::card(
        "scotia-card",
        BANK,
        DateLayout::new(&REF_MON_DD_MON_DD, DateOrder::MonthDay),
    )
    .with_overrides(CARD_OVERRIDES)
}
