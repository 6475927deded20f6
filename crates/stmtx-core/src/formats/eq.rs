//! EQ Bank.
//!
//! Withdrawals are printed as negative amounts.

use super::{DateLayout, SignConvention, StatementFormat};
use crate::statement::rules::DateOrder;
use crate::statement::rules::patterns::MON_DD_YYYY;

pub fn account() -> StatementFormat {
    StatementFormat::account(
        "eq-account",
        "EQ Bank",
        DateLayout::new(&MON_DD_YYYY, DateOrder::MonthDay).with_year(),
    )
    .with_sign(SignConvention::NegativeIsDebit)
    .with_complete_after(2)
}
