//! Capital One.

use super::{DateLayout, KeywordOverrides, StatementFormat};
use crate::statement::rules::DateOrder;
use crate::statement::rules::patterns::MON_DD_MON_DD;

const OVERRIDES: KeywordOverrides = KeywordOverrides {
    debit: &["interest charge", "past due fee"],
    credit: &["capital one mobile pymt", "capital one online pymt", "credit-cash back reward"],
};

pub fn card() -> StatementFormat {
    StatementFormat::card(
        "capitalone-card",
        "Capital One",
        DateLayout::new(&MON_DD_MON_DD, DateOrder::MonthDay),
    )
    .with_overrides(OVERRIDES)
}
