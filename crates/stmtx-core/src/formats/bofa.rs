//! Bank of America.
//!
//! Account statements print one signed amount per row and no running
//! balance.

use super::{AmountLayout, DateLayout, KeywordOverrides, SignConvention, StatementFormat};
use crate::statement::rules::DateOrder;
use crate::statement::rules::patterns::{MM_DD_MM_DD, MM_DD_YY};

const BANK: &str = "Bank of America";

const CARD_OVERRIDES: KeywordOverrides = KeywordOverrides {
    debit: &["interest charged", "annual fee"],
    credit: &["payment - thank you", "online payment from"],
};

pub fn account() -> StatementFormat {
    StatementFormat::account(
        "bofa-account",
        BANK,
        DateLayout::new(&MM_DD_YY, DateOrder::MonthDay).with_year(),
    )
    .with_amounts(AmountLayout::Single)
    .with_sign(SignConvention::NegativeIsDebit)
    .with_complete_after(1)
}

pub fn card() -> StatementFormat {
    StatementFormat::card(
        "bofa-card",
        BANK,
        DateLayout::new(&MM_DD_MM_DD, DateOrder::MonthDay),
    )
    .with_overrides(CARD_OVERRIDES)
}
