//! HSBC.

use super::{DateLayout, KeywordOverrides, StatementFormat};
use crate::statement::rules::DateOrder;
use crate::statement::rules::patterns::DD_MM_YYYY;

const OVERRIDES: KeywordOverrides = KeywordOverrides {
    debit: &["bill payment", "pre-authorized debit", "service charge"],
    credit: &["deposit", "credit interest", "payroll"],
};

pub fn account() -> StatementFormat {
    StatementFormat::account(
        "hsbc-account",
        "HSBC",
        DateLayout::new(&DD_MM_YYYY, DateOrder::DayMonth).with_year(),
    )
    .with_complete_after(2)
    .with_overrides(OVERRIDES)
}
