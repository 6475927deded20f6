//! American Express.

use super::{DateLayout, KeywordOverrides, StatementFormat};
use crate::statement::rules::DateOrder;
use crate::statement::rules::patterns::MON_DD_MON_DD;

const OVERRIDES: KeywordOverrides = KeywordOverrides {
    debit: &["membership fee", "interest charges"],
    credit: &["payment received - thank you", "payment received", "credit adjustment"],
};

pub fn card() -> StatementFormat {
    StatementFormat::card(
        "amex-card",
        "American Express",
        DateLayout::new(&MON_DD_MON_DD, DateOrder::MonthDay),
    )
    .with_overrides(OVERRIDES)
}
