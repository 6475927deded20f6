//! Line segmentation.
//!
//! Turns raw statement text into an ordered sequence of trimmed, non-empty
//! logical lines. PDF text layers that arrive as positioned fragments are
//! first rebuilt into lines by [`reconstruct_lines`].

mod fragments;

pub use fragments::{TextFragment, reconstruct_lines};

/// Split raw text into trimmed, non-empty lines with internal whitespace
/// collapsed to single spaces.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(collapse_whitespace)
        .filter(|l| !l.is_empty())
        .collect()
}

/// Collapse every run of whitespace to a single space and trim the ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_drops_blanks() {
        let text = "  Jan 02   Opening balance  500.00 \n\n\t\nJan 05 Coffee 4.50\r\n";
        assert_eq!(
            split_lines(text),
            vec!["Jan 02 Opening balance 500.00", "Jan 05 Coffee 4.50"]
        );
    }

    #[test]
    fn test_split_lines_empty_input() {
        assert!(split_lines("").is_empty());
        assert!(split_lines(" \n \n").is_empty());
    }
}
