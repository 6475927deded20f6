//! Keyword matching against transaction descriptions.

use crate::models::row::Direction;

/// A keyword hit that decided a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatch {
    pub direction: Direction,
    pub keyword: String,
}

/// Longest keyword from `keywords` contained in the lowercased description.
pub fn longest_keyword<'a, S: AsRef<str>>(description: &str, keywords: &'a [S]) -> Option<&'a str> {
    let haystack = description.to_lowercase();

    keywords
        .iter()
        .map(AsRef::as_ref)
        .filter(|k| !k.is_empty() && haystack.contains(&k.to_lowercase()))
        .max_by_key(|k| k.chars().count())
}

/// Match a description against debit and credit keyword lists.
///
/// When both lists hit, the longer keyword wins. Equal lengths are
/// ambiguous and produce no match.
pub fn match_keywords<S: AsRef<str>>(
    description: &str,
    debit: &[S],
    credit: &[S],
) -> Option<KeywordMatch> {
    let debit_hit = longest_keyword(description, debit);
    let credit_hit = longest_keyword(description, credit);

    let (direction, keyword) = match (debit_hit, credit_hit) {
        (Some(d), None) => (Direction::Debit, d),
        (None, Some(c)) => (Direction::Credit, c),
        (Some(d), Some(c)) => {
            let (dl, cl) = (d.chars().count(), c.chars().count());
            if dl > cl {
                (Direction::Debit, d)
            } else if cl > dl {
                (Direction::Credit, c)
            } else {
                return None;
            }
        }
        (None, None) => return None,
    };

    Some(KeywordMatch {
        direction,
        keyword: keyword.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_list_hit() {
        let m = match_keywords("PAYROLL DEPOSIT ACME", &["purchase"], &["payroll"]).unwrap();
        assert_eq!(m.direction, Direction::Credit);
        assert_eq!(m.keyword, "payroll");
    }

    #[test]
    fn test_longer_keyword_wins() {
        let m = match_keywords(
            "Online transfer to savings",
            &["transfer to"],
            &["transfer"],
        )
        .unwrap();
        assert_eq!(m.direction, Direction::Debit);
        assert_eq!(m.keyword, "transfer to");
    }

    #[test]
    fn test_tie_and_miss() {
        assert_eq!(match_keywords("fee refund", &["fee"], &["fun"]), None);
        assert_eq!(match_keywords("MISC VENDOR", &["purchase"], &["deposit"]), None);
    }

    #[test]
    fn test_longest_keyword_is_case_insensitive() {
        let keywords = vec!["Interac".to_string(), "interac e-transfer".to_string()];
        assert_eq!(
            longest_keyword("INTERAC E-TRANSFER TO BOB", &keywords),
            Some("interac e-transfer")
        );
    }
}
