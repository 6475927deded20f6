//! National Bank.

use super::{DateLayout, KeywordOverrides, StatementFormat};
use crate::statement::rules::DateOrder;
use crate::statement::rules::patterns::{ISO_DATE, MON_DD_MON_DD};

const BANK: &str = "National Bank";

const ACCOUNT_OVERRIDES: KeywordOverrides = KeywordOverrides {
    debit: &["retrait", "achat", "frais", "paiement facture"],
    credit: &["dépôt", "depot", "virement reçu", "salaire"],
};

pub fn account() -> StatementFormat {
    StatementFormat::account(
        "national-account",
        BANK,
        DateLayout::new(&ISO_DATE, DateOrder::YearMonthDay).with_year(),
    )
    .with_complete_after(2)
    .with_overrides(ACCOUNT_OVERRIDES)
}

pub fn card() -> StatementFormat {
    StatementFormat::card(
        "national-card",
        BANK,
        DateLayout::new(&MON_DD_MON_DD, DateOrder::MonthDay),
    )
}
