//! Statement date parsing.

use chrono::{Datelike, Local, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Result, StmtxError};

lazy_static! {
    static ref DATE_TOKEN: Regex = Regex::new(r"\p{L}+|\d+").unwrap();
}

/// How to read purely numeric dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    /// 01/02 is January 2nd.
    MonthDay,
    /// 01/02 is February 1st.
    DayMonth,
    /// 2024-01-02.
    YearMonthDay,
}

/// The statement year supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementYear {
    /// Numeric year, used for sortable dates.
    pub value: i32,
    /// The year as given, appended verbatim to displayed dates.
    pub text: String,
}

impl StatementYear {
    /// Parse a caller-supplied year. Empty input means "no year"; anything
    /// other than four digits is rejected.
    pub fn parse(input: Option<&str>) -> Result<Option<Self>> {
        let Some(raw) = input.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(None);
        };

        if raw.len() != 4 || !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(StmtxError::InvalidYear(raw.to_string()));
        }

        let value = raw
            .parse()
            .map_err(|_| StmtxError::InvalidYear(raw.to_string()))?;

        Ok(Some(Self {
            value,
            text: raw.to_string(),
        }))
    }

    /// Year used for sorting when the caller gave none.
    pub fn current() -> i32 {
        Local::now().year()
    }
}

/// Parse a date as printed on a statement.
///
/// Handles month names in English and French ("Jan 05", "02 JANV",
/// "Jan 2, 2024", "02 Jan 2024") and numeric forms ("01/02", "01/02/24",
/// "2024-01-02"). Dates without a year use `default_year`.
pub fn parse_statement_date(text: &str, order: DateOrder, default_year: i32) -> Option<NaiveDate> {
    let mut month_name = None;
    let mut numbers: Vec<&str> = Vec::new();

    for token in DATE_TOKEN.find_iter(text) {
        let token = token.as_str();
        if token.chars().all(|c| c.is_ascii_digit()) {
            numbers.push(token);
        } else if month_name.is_none() {
            month_name = Some(token);
        }
    }

    if let Some(name) = month_name {
        let month = month_number(name)?;
        let day: u32 = numbers.iter().find(|n| n.len() <= 2)?.parse().ok()?;
        let year = numbers
            .iter()
            .find(|n| n.len() == 4)
            .and_then(|n| n.parse().ok())
            .unwrap_or(default_year);
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    let first = *numbers.first()?;
    let (year, month, day) = if first.len() == 4 || order == DateOrder::YearMonthDay {
        (
            parse_year(numbers.first()?)?,
            numbers.get(1)?.parse().ok()?,
            numbers.get(2)?.parse().ok()?,
        )
    } else {
        let a: u32 = numbers.first()?.parse().ok()?;
        let b: u32 = numbers.get(1)?.parse().ok()?;
        let year = match numbers.get(2) {
            Some(y) => parse_year(y)?,
            None => default_year,
        };
        match order {
            DateOrder::DayMonth => (year, b, a),
            _ => (year, a, b),
        }
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_year(s: &str) -> Option<i32> {
    let year: i32 = s.parse().ok()?;
    if s.len() <= 2 { Some(2000 + year) } else { Some(year) }
}

/// Month number for an English or French month name or abbreviation.
pub fn month_number(name: &str) -> Option<u32> {
    let name = name.trim_end_matches('.').to_lowercase();
    let starts = |prefixes: &[&str]| prefixes.iter().any(|p| name.starts_with(p));

    let month = if starts(&["jan"]) {
        1
    } else if starts(&["feb", "fév", "fev"]) {
        2
    } else if starts(&["mar"]) {
        3
    } else if starts(&["apr", "avr"]) {
        4
    } else if starts(&["may", "mai"]) {
        5
    } else if starts(&["juin", "jun"]) {
        6
    } else if starts(&["juil", "jul"]) {
        7
    } else if starts(&["aug", "aoû", "aou"]) {
        8
    } else if starts(&["sep"]) {
        9
    } else if starts(&["oct"]) {
        10
    } else if starts(&["nov"]) {
        11
    } else if starts(&["dec", "déc"]) {
        12
    } else {
        return None;
    };

    Some(month)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_name_dates() {
        let order = DateOrder::MonthDay;
        assert_eq!(parse_statement_date("Jan 05", order, 2024), Some(ymd(2024, 1, 5)));
        assert_eq!(parse_statement_date("JAN5", order, 2024), Some(ymd(2024, 1, 5)));
        assert_eq!(parse_statement_date("Jan 2, 2023", order, 2024), Some(ymd(2023, 1, 2)));
        assert_eq!(parse_statement_date("02 Jan 2023", order, 2024), Some(ymd(2023, 1, 2)));
    }

    #[test]
    fn test_french_months() {
        let order = DateOrder::DayMonth;
        assert_eq!(parse_statement_date("02 JANV", order, 2024), Some(ymd(2024, 1, 2)));
        assert_eq!(parse_statement_date("15 févr.", order, 2024), Some(ymd(2024, 2, 15)));
        assert_eq!(parse_statement_date("01 juil", order, 2024), Some(ymd(2024, 7, 1)));
        assert_eq!(parse_statement_date("01 juin", order, 2024), Some(ymd(2024, 6, 1)));
        assert_eq!(parse_statement_date("3 août", order, 2024), Some(ymd(2024, 8, 3)));
        assert_eq!(parse_statement_date("9 déc", order, 2024), Some(ymd(2024, 12, 9)));
    }

    #[test]
    fn test_numeric_dates() {
        assert_eq!(
            parse_statement_date("01/02", DateOrder::MonthDay, 2024),
            Some(ymd(2024, 1, 2))
        );
        assert_eq!(
            parse_statement_date("01/02", DateOrder::DayMonth, 2024),
            Some(ymd(2024, 2, 1))
        );
        assert_eq!(
            parse_statement_date("01/02/23", DateOrder::MonthDay, 2024),
            Some(ymd(2023, 1, 2))
        );
        assert_eq!(
            parse_statement_date("2023-11-30", DateOrder::YearMonthDay, 2024),
            Some(ymd(2023, 11, 30))
        );
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(parse_statement_date("Foo 05", DateOrder::MonthDay, 2024), None);
        assert_eq!(parse_statement_date("Feb 30", DateOrder::MonthDay, 2024), None);
        assert_eq!(parse_statement_date("", DateOrder::MonthDay, 2024), None);
    }

    #[test]
    fn test_statement_year() {
        assert_eq!(StatementYear::parse(None).unwrap(), None);
        assert_eq!(StatementYear::parse(Some("  ")).unwrap(), None);

        let year = StatementYear::parse(Some("2024")).unwrap().unwrap();
        assert_eq!(year.value, 2024);
        assert_eq!(year.text, "2024");

        assert!(matches!(
            StatementYear::parse(Some("24")),
            Err(StmtxError::InvalidYear(_))
        ));
        assert!(StatementYear::parse(Some("20x4")).is_err());
    }
}
