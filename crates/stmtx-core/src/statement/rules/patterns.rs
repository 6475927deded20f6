//! Common regex patterns for statement text.
//!
//! Date patterns are anchored at the start of a line and expose a `date`
//! capture (and `post` for the posting date on two-date layouts).

use lazy_static::lazy_static;
use regex::Regex;

/// English and French month names and abbreviations, optional trailing dot.
const MONTH: &str = concat!(
    r"(?:jan(?:uary|vier|v)?|feb(?:ruary)?|f[eé]vr?(?:ier)?|mar(?:ch|s)?|apr(?:il)?|avr(?:il)?",
    r"|may|mai|june?|juin|july?|juil(?:let)?|aug(?:ust)?|ao[uû]t",
    r"|sep(?:t(?:ember|embre)?)?|oct(?:ober|obre)?|nov(?:ember|embre)?|d[eé]c(?:ember|embre)?)\.?"
);

lazy_static! {
    // Money amounts: 1,234.56 / 1234.56 with optional $, minus, parentheses,
    // trailing minus or CR/DR suffix
    pub static ref MONEY: Regex = Regex::new(concat!(
        r"(?P<open>\()?(?P<lead>-\$\s?|\$\s?-|-|\$\s?)?",
        r"\b(?P<int>\d{1,3}(?:,\d{3})+|\d+)\.(?P<cents>\d{2})",
        r"(?:\s?(?P<mark>(?i:CR|DR)))?\b(?P<trail>-)?(?P<close>\))?"
    )).unwrap();

    // "Jan 05", "JAN5", "Jan. 5"
    pub static ref MON_DD: Regex = Regex::new(
        &format!(r"(?i)^(?P<date>{MONTH}\s*\d{{1,2}})\b")
    ).unwrap();

    // "Jul 01 Jul 02" (transaction date, posting date)
    pub static ref MON_DD_MON_DD: Regex = Regex::new(
        &format!(r"(?i)^(?P<date>{MONTH}\s*\d{{1,2}})\s+(?P<post>{MONTH}\s*\d{{1,2}})\b")
    ).unwrap();

    // "001 Jul 01 Jul 02" (reference number, then both dates)
    pub static ref REF_MON_DD_MON_DD: Regex = Regex::new(
        &format!(r"(?i)^(?P<ref>\d{{3}})\s+(?P<date>{MONTH}\s*\d{{1,2}})\s+(?P<post>{MONTH}\s*\d{{1,2}})\b")
    ).unwrap();

    // "02 Jan 2024"
    pub static ref DD_MON_YYYY: Regex = Regex::new(
        &format!(r"(?i)^(?P<date>\d{{1,2}}\s+{MONTH}\s+\d{{4}})\b")
    ).unwrap();

    // "Jan 2, 2024"
    pub static ref MON_DD_YYYY: Regex = Regex::new(
        &format!(r"(?i)^(?P<date>{MONTH}\s+\d{{1,2}},?\s+\d{{4}})\b")
    ).unwrap();

    // "02 JANV"
    pub static ref DD_MON: Regex = Regex::new(
        &format!(r"(?i)^(?P<date>\d{{1,2}}\s+{MONTH})(?:\s|$)")
    ).unwrap();

    // "01/02"
    pub static ref MM_DD: Regex = Regex::new(
        r"^(?P<date>\d{1,2}/\d{1,2})(?:\s|$)"
    ).unwrap();

    // "01/02 01/03"
    pub static ref MM_DD_MM_DD: Regex = Regex::new(
        r"^(?P<date>\d{1,2}/\d{1,2})\s+(?P<post>\d{1,2}/\d{1,2})(?:\s|$)"
    ).unwrap();

    // "01/02/24"
    pub static ref MM_DD_YY: Regex = Regex::new(
        r"^(?P<date>\d{1,2}/\d{1,2}/\d{2})(?:\s|$)"
    ).unwrap();

    // "02/01/2024"
    pub static ref DD_MM_YYYY: Regex = Regex::new(
        r"^(?P<date>\d{1,2}/\d{1,2}/\d{4})(?:\s|$)"
    ).unwrap();

    // "2024-01-02"
    pub static ref ISO_DATE: Regex = Regex::new(
        r"^(?P<date>\d{4}-\d{2}-\d{2})(?:\s|$)"
    ).unwrap();

    // Opening/closing/forward balance lines
    pub static ref BALANCE_MARKER: Regex = Regex::new(concat!(
        r"(?i)\b(?:(?:opening|closing|previous|starting|beginning|ending|new)\s+balance",
        r"|balance\s+(?:forward|brought\s+forward|carried\s+forward))\b"
    )).unwrap();

    // Markers that close a period rather than open one
    pub static ref CLOSING_MARKER: Regex = Regex::new(concat!(
        r"(?i)\b(?:closing|ending|new)\s+balance\b|\bbalance\s+carried\s+forward\b",
        r"|\b(?:solde\s+(?:de\s+cl[oô]ture|final)|nouveau\s+solde)\b"
    )).unwrap();

    // Column headers, page counters and continuation banners
    pub static ref NOISE: Regex = Regex::new(concat!(
        r"(?i)^(?:page\s+\d+(?:\s+of\s+\d+)?",
        r"|.*\b(?:date|description)\b.*\b(?:balance|amount|withdrawals?|deposits?)\b.*",
        r"|.*\(continued\).*|continued\b.*)$"
    )).unwrap();

    pub static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mon_dd_variants() {
        for line in ["Jan 05 Coffee", "JAN5 Coffee", "Jan. 5 Coffee", "sept 30 x", "déc 1 x"] {
            assert!(MON_DD.is_match(line), "{line}");
        }
        assert!(!MON_DD.is_match("MARKET 12.00"));
        assert!(!MON_DD.is_match("Mar 2024 statement"));
        assert!(!MON_DD.is_match("DECATHLON 5"));
    }

    #[test]
    fn test_two_date_captures() {
        let caps = MON_DD_MON_DD.captures("Jul 01 Jul 02 COFFEE SHOP 4.50").unwrap();
        assert_eq!(&caps["date"], "Jul 01");
        assert_eq!(&caps["post"], "Jul 02");

        let caps = REF_MON_DD_MON_DD.captures("001 Jul 01 Jul 02 COFFEE 4.50").unwrap();
        assert_eq!(&caps["ref"], "001");
        assert_eq!(&caps["date"], "Jul 01");
    }

    #[test]
    fn test_numeric_dates_do_not_overlap() {
        assert!(MM_DD.is_match("01/02 PURCHASE"));
        assert!(!MM_DD.is_match("01/02/24 PURCHASE"));
        assert!(MM_DD_YY.is_match("01/02/24 PURCHASE"));
        assert!(!MM_DD_YY.is_match("01/02/2024 PURCHASE"));
        assert!(DD_MM_YYYY.is_match("02/01/2024 PURCHASE"));
    }

    #[test]
    fn test_balance_marker() {
        assert!(BALANCE_MARKER.is_match("Jan 02 Balance forward 500.00"));
        assert!(BALANCE_MARKER.is_match("Opening Balance $1,000.00"));
        assert!(BALANCE_MARKER.is_match("PREVIOUS BALANCE 12.00"));
        assert!(!BALANCE_MARKER.is_match("Jan 05 Payment received 100.00"));
    }

    #[test]
    fn test_noise() {
        assert!(NOISE.is_match("Page 2 of 4"));
        assert!(NOISE.is_match("Date Description Withdrawals ($) Deposits ($) Balance ($)"));
        assert!(!NOISE.is_match("Jan 05 Coffee"));
    }
}
