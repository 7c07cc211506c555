//! Whitespace normalization for pattern-based tag scanning.
//!
//! Tags may be split across lines or padded with tabs; collapsing every run of
//! whitespace to a single space lets the tag patterns stay simple.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for any run of whitespace, newlines included
    static ref RE_WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Collapse every whitespace run to one space and trim both ends.
///
/// # Examples
///
/// ```
/// use fnt_oxide::extractors::whitespace::normalize_whitespace;
///
/// let input = "<char\n\tid=\"65\"\r\n  x=\"0\"/>\n";
/// assert_eq!(normalize_whitespace(input), "<char id=\"65\" x=\"0\"/>");
/// ```
pub fn normalize_whitespace(text: &str) -> String {
    RE_WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_mixed_runs() {
        assert_eq!(normalize_whitespace("a \t\n\r b"), "a b");
    }

    #[test]
    fn test_trims() {
        assert_eq!(normalize_whitespace("\n\n  <font/>  \n"), "<font/>");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace(" \n\t "), "");
    }

    #[test]
    fn test_unicode_whitespace() {
        // NO-BREAK SPACE counts as whitespace for \s
        assert_eq!(normalize_whitespace("a\u{00A0}\u{2003}b"), "a b");
    }
}
