//! Citi.

use super::{DateLayout, KeywordOverrides, StatementFormat};
use crate::statement::rules::DateOrder;
use crate::statement::rules::patterns::MM_DD_MM_DD;

const OVERRIDES: KeywordOverrides = KeywordOverrides {
    debit: &["interest charged on purchases", "late fee"],
    credit: &["payment, thank you", "autopay", "statement credit"],
};

pub fn card() -> StatementFormat {
    StatementFormat::card(
        "citi-card",
        "Citi",
        DateLayout::new(&MM_DD_MM_DD, DateOrder::MonthDay),
    )
    .with_overrides(OVERRIDES)
}
