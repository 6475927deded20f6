//! Direction classification: debit or credit.
//!
//! Each format carries an ordered list of [`Rule`]s. The first rule that
//! reaches a verdict decides; the list ends with a [`Rule::Fallback`].

use rust_decimal::Decimal;
use tracing::trace;

use super::fields::ParsedFields;
use super::rules::{Money, SignMarker, match_keywords};
use crate::formats::{KeywordOverrides, SignConvention, StatementFormat};
use crate::models::keywords::KeywordConfig;
use crate::models::row::{ClassificationPath, Direction};

/// Balances within this distance are considered equal.
const TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// A classification rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Format keywords that outrank every other rule.
    SuperKeywords(KeywordOverrides),
    /// Sign, parentheses or CR/DR suffix, read with the format's sign convention.
    ExplicitMarker,
    /// Compare the balance change with the amount.
    BalanceReconciliation,
    /// Format overrides, then the configured keyword lists.
    Keywords,
    /// Fixed verdict.
    Fallback(Direction),
}

/// Cascade used by most formats.
pub const DEFAULT_RULES: &[Rule] = &[
    Rule::ExplicitMarker,
    Rule::BalanceReconciliation,
    Rule::Keywords,
    Rule::Fallback(Direction::Debit),
];

/// Verdict of the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub direction: Direction,
    pub path: ClassificationPath,
    /// Keyword that decided, for keyword paths.
    pub keyword: Option<String>,
}

impl Classification {
    pub fn new(direction: Direction, path: ClassificationPath) -> Self {
        Self {
            direction,
            path,
            keyword: None,
        }
    }

    fn with_keyword(mut self, keyword: String) -> Self {
        self.keyword = Some(keyword);
        self
    }
}

/// Last known account balance within one conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunningBalance {
    value: Option<Decimal>,
}

impl RunningBalance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> Option<Decimal> {
        self.value
    }

    /// Set the balance from a balance marker.
    pub fn seed(&mut self, balance: Decimal) {
        self.value = Some(balance);
    }

    /// Update after a classified row: take the printed balance, or derive
    /// it from the amount when `implied` is set.
    pub fn advance(&mut self, fields: &ParsedFields, direction: Direction, implied: bool) {
        self.value = match (fields.balance, self.value) {
            (Some(balance), _) => Some(balance),
            (None, Some(old)) if implied => Some(match direction {
                Direction::Credit => old + fields.amount.amount,
                Direction::Debit => old - fields.amount.amount,
            }),
            (None, old) => old,
        };
    }
}

/// Applies a format's rule cascade.
pub struct Classifier<'a> {
    format: &'a StatementFormat,
    keywords: &'a KeywordConfig,
}

impl<'a> Classifier<'a> {
    pub fn new(format: &'a StatementFormat, keywords: &'a KeywordConfig) -> Self {
        Self { format, keywords }
    }

    /// Classify one row given the balance before it.
    pub fn classify(&self, fields: &ParsedFields, previous: Option<Decimal>) -> Classification {
        for rule in self.format.rules {
            if let Some(verdict) = self.apply(rule, fields, previous) {
                trace!(
                    "{:?} -> {:?} via {:?}",
                    fields.description, verdict.direction, verdict.path
                );
                return verdict;
            }
        }

        Classification::new(self.format.fallback(), ClassificationPath::Fallback)
    }

    fn apply(
        &self,
        rule: &Rule,
        fields: &ParsedFields,
        previous: Option<Decimal>,
    ) -> Option<Classification> {
        match rule {
            Rule::SuperKeywords(words) => {
                match_keywords(&fields.description, words.debit, words.credit).map(|m| {
                    Classification::new(m.direction, ClassificationPath::SuperKeyword)
                        .with_keyword(m.keyword)
                })
            }
            Rule::ExplicitMarker => explicit_direction(&fields.amount, self.format.sign)
                .map(|d| Classification::new(d, ClassificationPath::ExplicitMarker)),
            Rule::BalanceReconciliation => {
                let (old, new) = (previous?, fields.balance?);
                reconcile(old, new, fields.amount.amount).map(|(d, path)| Classification::new(d, path))
            }
            Rule::Keywords => {
                let overrides = self.format.overrides;
                if let Some(m) = match_keywords(&fields.description, overrides.debit, overrides.credit) {
                    return Some(
                        Classification::new(m.direction, ClassificationPath::FormatKeyword)
                            .with_keyword(m.keyword),
                    );
                }
                match_keywords(&fields.description, &self.keywords.debit, &self.keywords.credit).map(
                    |m| {
                        Classification::new(m.direction, ClassificationPath::ConfiguredKeyword)
                            .with_keyword(m.keyword)
                    },
                )
            }
            Rule::Fallback(direction) => {
                Some(Classification::new(*direction, ClassificationPath::Fallback))
            }
        }
    }
}

/// Direction stated by the token itself under a sign convention.
pub fn explicit_direction(money: &Money, sign: SignConvention) -> Option<Direction> {
    match (money.marker, sign) {
        (Some(SignMarker::Credit), _) => Some(Direction::Credit),
        (Some(SignMarker::Debit), _) => Some(Direction::Debit),
        (Some(SignMarker::Negative), SignConvention::NegativeIsDebit) => Some(Direction::Debit),
        (Some(SignMarker::Negative), _) => Some(Direction::Credit),
        (None, SignConvention::NegativeIsDebit) => Some(Direction::Credit),
        (None, _) => None,
    }
}

/// Reconcile a balance change with an amount.
///
/// Returns [`ClassificationPath::Reconciled`] when the change equals the
/// amount (credit) or its negation (debit), otherwise the sign of the change
/// with [`ClassificationPath::BalanceDelta`]. An unchanged balance decides
/// nothing.
pub fn reconcile(
    previous: Decimal,
    new: Decimal,
    amount: Decimal,
) -> Option<(Direction, ClassificationPath)> {
    let delta = new - previous;

    if (delta - amount).abs() < TOLERANCE {
        Some((Direction::Credit, ClassificationPath::Reconciled))
    } else if (delta + amount).abs() < TOLERANCE {
        Some((Direction::Debit, ClassificationPath::Reconciled))
    } else if delta.is_zero() {
        None
    } else if delta.is_sign_negative() {
        Some((Direction::Debit, ClassificationPath::BalanceDelta))
    } else {
        Some((Direction::Credit, ClassificationPath::BalanceDelta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats;
    use crate::statement::rules::parse_money;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn fields(description: &str, amount: &str, balance: Option<&str>) -> ParsedFields {
        ParsedFields {
            date: "Jan 05".to_string(),
            posting_date: None,
            description: description.to_string(),
            amount: parse_money(amount).unwrap(),
            balance: balance.map(d),
            sort_date: None,
        }
    }

    fn classify(format_id: &str, f: &ParsedFields, previous: Option<&str>) -> Classification {
        let format = formats::find(format_id).unwrap();
        let keywords = KeywordConfig::default();
        Classifier::new(format, &keywords).classify(f, previous.map(d))
    }

    #[test]
    fn test_reconcile() {
        assert_eq!(
            reconcile(d("500.00"), d("600.00"), d("100.00")),
            Some((Direction::Credit, ClassificationPath::Reconciled))
        );
        assert_eq!(
            reconcile(d("500.00"), d("400.00"), d("100.00")),
            Some((Direction::Debit, ClassificationPath::Reconciled))
        );
        assert_eq!(
            reconcile(d("500.00"), d("450.00"), d("100.00")),
            Some((Direction::Debit, ClassificationPath::BalanceDelta))
        );
        assert_eq!(reconcile(d("500.00"), d("500.00"), d("100.00")), None);
    }

    #[test]
    fn test_explicit_direction_follows_sign_convention() {
        let negative = parse_money("-5.00").unwrap();
        let plain = parse_money("5.00").unwrap();

        assert_eq!(
            explicit_direction(&negative, SignConvention::NegativeIsCredit),
            Some(Direction::Credit)
        );
        assert_eq!(
            explicit_direction(&negative, SignConvention::NegativeIsDebit),
            Some(Direction::Debit)
        );
        assert_eq!(
            explicit_direction(&plain, SignConvention::NegativeIsDebit),
            Some(Direction::Credit)
        );
        assert_eq!(explicit_direction(&plain, SignConvention::NegativeIsCredit), None);
    }

    #[test]
    fn test_cr_suffix_is_credit() {
        let c = classify("bmo-card", &fields("PAYMENT", "12.34CR", None), None);
        assert_eq!(c.direction, Direction::Credit);
        assert_eq!(c.path, ClassificationPath::ExplicitMarker);
    }

    #[test]
    fn test_minus_is_credit_on_cards_by_default() {
        for id in ["bmo-card", "national-card", "amex-card"] {
            let c = classify(id, &fields("STORE ADJUSTMENT", "-12.34", None), None);
            assert_eq!(c.direction, Direction::Credit, "{}", id);
            assert_eq!(c.path, ClassificationPath::ExplicitMarker, "{}", id);
        }
    }

    #[test]
    fn test_reconciliation_beats_keywords() {
        // "refund" is a credit keyword but the balance went down
        let c = classify(
            "td-account",
            &fields("REFUND FEE", "10.00", Some("490.00")),
            Some("500.00"),
        );
        assert_eq!(c.direction, Direction::Debit);
        assert_eq!(c.path, ClassificationPath::Reconciled);
    }

    #[test]
    fn test_format_keywords_before_configured() {
        let c = classify("rbc-account", &fields("e-Transfer sent JOHN", "50.00", None), None);
        assert_eq!(c.direction, Direction::Debit);
        assert_eq!(c.path, ClassificationPath::FormatKeyword);
        assert_eq!(c.keyword.as_deref(), Some("e-transfer sent"));
    }

    #[test]
    fn test_configured_keywords() {
        let c = classify("amex-card", &fields("AMAZON REFUND", "25.00", None), None);
        assert_eq!(c.direction, Direction::Credit);
        assert_eq!(c.path, ClassificationPath::ConfiguredKeyword);
    }

    #[test]
    fn test_fallback_is_debit() {
        let c = classify("rbc-account", &fields("MISC VENDOR", "25.00", None), None);
        assert_eq!(c.direction, Direction::Debit);
        assert_eq!(c.path, ClassificationPath::Fallback);
    }

    #[test]
    fn test_super_keywords_outrank_reconciliation() {
        let c = classify(
            "wellsfargo-account",
            &fields("ZELLE FROM JANE DOE", "40.00", Some("460.00")),
            Some("500.00"),
        );
        assert_eq!(c.direction, Direction::Credit);
        assert_eq!(c.path, ClassificationPath::SuperKeyword);
    }

    #[test]
    fn test_running_balance() {
        let mut balance = RunningBalance::new();
        balance.seed(d("500.00"));

        balance.advance(&fields("x", "20.00", None), Direction::Debit, true);
        assert_eq!(balance.value(), Some(d("480.00")));

        balance.advance(&fields("x", "20.00", None), Direction::Debit, false);
        assert_eq!(balance.value(), Some(d("480.00")));

        balance.advance(&fields("x", "5.00", Some("999.00")), Direction::Credit, false);
        assert_eq!(balance.value(), Some(d("999.00")));
    }
}
