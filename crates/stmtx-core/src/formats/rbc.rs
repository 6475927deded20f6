//! RBC Royal Bank.
//!
//! Chequing statements print the date only on the first transaction of a
//! day and the balance only on the last one.

use super::{DateLayout, KeywordOverrides, StatementFormat};
use crate::statement::rules::DateOrder;
use crate::statement::rules::patterns::{MON_DD, MON_DD_MON_DD};

const BANK: &str = "RBC Royal Bank";

const ACCOUNT_OVERRIDES: KeywordOverrides = KeywordOverrides {
    debit: &[
        "e-transfer sent",
        "online banking payment",
        "online banking transfer",
        "monthly fee",
        "atm withdrawal",
        "contactless interac purchase",
        "interac purchase",
        "nsf",
    ],
    credit: &[
        "e-transfer received",
        "e-transfer - autodeposit",
        "payroll deposit",
        "deposit interest",
        "mobile cheque deposit",
        "atm deposit",
        "branch deposit",
    ],
};

const CARD_OVERRIDES: KeywordOverrides = KeywordOverrides {
    debit: &["annual fee", "interest charge", "cash advance"],
    credit: &["payment - thank you", "payment thank you", "paiement merci"],
};

pub fn account() -> StatementFormat {
    StatementFormat::account("rbc-account", BANK, DateLayout::new(&MON_DD, DateOrder::MonthDay))
        .with_carry_date()
        .with_complete_after(1)
        .with_implied_balance()
        .with_overrides(ACCOUNT_OVERRIDES)
}

pub fn card() -> StatementFormat {
    StatementFormat::card(
        "rbc-card",
        BANK,
        DateLayout::new(&MON_DD_MON_DD, DateOrder::MonthDay),
    )
    .with_overrides(CARD_OVERRIDES)
}
