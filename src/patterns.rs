//! Compiled regex patterns for tokenization and title matching.
//!
//! All patterns are compiled once at startup using `LazyLock` and reused for
//! the lifetime of the program.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Block statistics
// =============================================================================

/// A token counts as a word iff it contains at least one Unicode word
/// character (letter, digit, or connector).
pub static WORD_CHARACTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w").expect("WORD_CHARACTER regex"));

/// Splits a buffer into whitespace-separated tokens.
pub static MULTI_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("MULTI_SPACE regex"));

// =============================================================================
// Title matching
// =============================================================================

/// Separator classes used to break a document title into candidate parts,
/// ordered from the narrowest class to the widest. Typographic dashes
/// (U+2013, U+2014) are treated like ASCII hyphens.
pub static TITLE_SEPARATORS: LazyLock<[Regex; 6]> = LazyLock::new(|| {
    [
        Regex::new(r"[ ]*[\|»\-–—][ ]*").expect("TITLE_SEPARATORS regex 1"),
        Regex::new(r"[ ]*[\|»:][ ]*").expect("TITLE_SEPARATORS regex 2"),
        Regex::new(r"[ ]*[\|»:\(\)][ ]*").expect("TITLE_SEPARATORS regex 3"),
        Regex::new(r"[ ]*[\|»:\(\)\-–—][ ]*").expect("TITLE_SEPARATORS regex 4"),
        Regex::new(r"[ ]*[\|»,:\(\)\-–—][ ]*").expect("TITLE_SEPARATORS regex 5"),
        Regex::new(r"[ ]*[\|»,:\(\)\-–—\x{00a0}][ ]*").expect("TITLE_SEPARATORS regex 6"),
    ]
});

/// Splits a title on pipes surrounded by spaces.
pub static TITLE_PIPE_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ ]+\|[ ]+").expect("TITLE_PIPE_SPLIT regex"));

/// Splits a title on dashes surrounded by spaces.
pub static TITLE_DASH_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ ]+[\-–—][ ]+").expect("TITLE_DASH_SPLIT regex"));

/// Matches a trailing ` - Site Name` segment of a title.
pub static TITLE_TRAILING_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" [\-–—] [^\-–—]+$").expect("TITLE_TRAILING_SEGMENT regex"));

/// Matches a leading `Site Name - ` segment of a title.
pub static TITLE_LEADING_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\-–—]+ [\-–—] ").expect("TITLE_LEADING_SEGMENT regex"));

/// Punctuation stripped from a block before the second title-match attempt.
pub static TITLE_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\?\!\.\-\:]+").expect("TITLE_PUNCTUATION regex"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_character_matches_unicode() {
        assert!(WORD_CHARACTER.is_match("hello"));
        assert!(WORD_CHARACTER.is_match("héllo"));
        assert!(WORD_CHARACTER.is_match("日本語"));
        assert!(WORD_CHARACTER.is_match("42"));
        assert!(!WORD_CHARACTER.is_match("..."));
        assert!(!WORD_CHARACTER.is_match("$<"));
    }

    #[test]
    fn title_separator_splits_em_dash() {
        let parts: Vec<&str> = TITLE_SEPARATORS[0]
            .split("Breaking: Market Dives — Example Times")
            .collect();
        assert_eq!(parts, vec!["Breaking: Market Dives", "Example Times"]);
    }

    #[test]
    fn trailing_segment_strips_site_name() {
        let title = "breaking: market dives — example times";
        let stripped = TITLE_TRAILING_SEGMENT.replace(title, "");
        assert_eq!(stripped, "breaking: market dives");
    }
}
