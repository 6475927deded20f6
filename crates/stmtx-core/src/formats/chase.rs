//! Chase.

use super::{DateLayout, KeywordOverrides, SignConvention, StatementFormat};
use crate::statement::rules::DateOrder;
use crate::statement::rules::patterns::MM_DD;

const BANK: &str = "Chase";

const CARD_OVERRIDES: KeywordOverrides = KeywordOverrides {
    debit: &["purchase interest charge", "annual membership fee"],
    credit: &["payment thank you", "automatic payment - thank you"],
};

pub fn account() -> StatementFormat {
    StatementFormat::account("chase-account", BANK, DateLayout::new(&MM_DD, DateOrder::MonthDay))
        .with_sign(SignConvention::NegativeIsDebit)
        .with_complete_after(2)
}

pub fn card() -> StatementFormat {
    StatementFormat::card("chase-card", BANK, DateLayout::new(&MM_DD, DateOrder::MonthDay))
        .with_overrides(CARD_OVERRIDES)
}
