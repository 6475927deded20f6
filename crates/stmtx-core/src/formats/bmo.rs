//! BMO Bank of Montreal.
//!
//! Card statements print credits with a trailing `CR`.

use super::{DateLayout, KeywordOverrides, StatementFormat};
use crate::statement::rules::DateOrder;
use crate::statement::rules::patterns::{MON_DD, MON_DD_MON_DD};

const BANK: &str = "BMO";

const ACCOUNT_OVERRIDES: KeywordOverrides = KeywordOverrides {
    debit: &["debit card purchase", "online bill payment", "plan fee", "interac e-transfer sent"],
    credit: &["direct deposit", "interac e-transfer received", "transfer from"],
};

pub fn account() -> StatementFormat {
    StatementFormat::account("bmo-account", BANK, DateLayout::new(&MON_DD, DateOrder::MonthDay))
        .with_complete_after(2)
        .with_overrides(ACCOUNT_OVERRIDES)
}

pub fn card() -> StatementFormat {
    StatementFormat::card(
        "bmo-card",
        BANK,
        DateLayout::new(&MON_DD_MON_DD, DateOrder::MonthDay),
    )
}
