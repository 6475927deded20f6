//! Desjardins.
//!
//! French-language statements: "02 JANV" dates, "Solde précédent" markers
//! and French keyword lists.

use lazy_static::lazy_static;
use regex::Regex;

use super::{DateLayout, KeywordOverrides, StatementFormat};
use crate::statement::rules::DateOrder;
use crate::statement::rules::patterns::DD_MON;

lazy_static! {
    static ref MARKERS: Regex = Regex::new(concat!(
        r"(?i)\bsolde\s+(?:pr[ée]c[ée]dent|d'ouverture|report[ée]|de\s+cl[oô]ture|final)\b",
        r"|\bnouveau\s+solde\b",
        r"|\b(?:opening|closing|previous)\s+balance\b|\bbalance\s+forward\b"
    ))
    .unwrap();

    static ref NOISE: Regex = Regex::new(concat!(
        r"(?i)^(?:.*\bdate\b.*\b(?:retraits?|d[ée]p[oô]ts?|solde)\b.*",
        r"|page\s+\d+\s+de\s+\d+|.*\bsuite\b.*)$"
    ))
    .unwrap();
}

const OVERRIDES: KeywordOverrides = KeywordOverrides {
    debit: &[
        "retrait",
        "paiement",
        "achat",
        "frais",
        "virement envoyé",
        "prélèvement",
    ],
    credit: &[
        "dépôt",
        "virement reçu",
        "dépôt de paie",
        "intérêts",
        "remboursement",
        "virement interac reçu",
    ],
};

pub fn account() -> StatementFormat {
    StatementFormat::account(
        "desjardins-account",
        "Desjardins",
        DateLayout::new(&DD_MON, DateOrder::DayMonth),
    )
    .with_balance_markers(&MARKERS)
    .with_noise(&NOISE)
    .with_carry_date()
    .with_complete_after(1)
    .with_implied_balance()
    .with_overrides(OVERRIDES)
}
