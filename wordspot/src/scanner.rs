//! Delimiter detection
//!
//! Finds the next maximal run of non-word characters. A word character is an
//! ASCII letter, digit or underscore; everything else, including every
//! non-ASCII character, is a delimiter.

use crate::interface::{SearchError, SearchResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// Built-in delimiter definition. Written as an explicit ASCII class because
/// `\W` is Unicode-aware in the regex crate.
pub const DELIMITER_PATTERN: &str = r"[^0-9A-Za-z_]+";

/// Compiled once per process; cloning a `Regex` shares the compiled program.
static DELIMITER_REGEX: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(DELIMITER_PATTERN));

/// Locates delimiter runs for the tokenizer.
pub trait DelimiterScanner: Send + Sync {
    /// First delimiter run in `text[from..]`, as offsets into the whole of
    /// `text`. `Ok(None)` means the remainder holds no delimiter.
    fn find_next_delimiter_run(
        &self,
        text: &str,
        from: usize,
    ) -> SearchResult<Option<Range<usize>>>;
}

/// Regex-backed scanner
#[derive(Debug, Clone)]
pub struct RegexScanner {
    regex: Regex,
}

impl RegexScanner {
    /// Scanner for the built-in ASCII delimiter class.
    pub fn new() -> SearchResult<Self> {
        match &*DELIMITER_REGEX {
            Ok(regex) => Ok(Self { regex: regex.clone() }),
            Err(e) => Err(SearchError::PatternCompileFailure(e.clone())),
        }
    }

    /// Scanner for a caller-supplied delimiter pattern. The pattern must not
    /// match the empty string anywhere it is applied, otherwise scanning
    /// reports `ScannerFailure`.
    pub fn with_pattern(pattern: &str) -> SearchResult<Self> {
        let regex = Regex::new(pattern)?;
        Ok(Self { regex })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl DelimiterScanner for RegexScanner {
    fn find_next_delimiter_run(
        &self,
        text: &str,
        from: usize,
    ) -> SearchResult<Option<Range<usize>>> {
        if from > text.len() {
            return Err(SearchError::ScannerFailure {
                offset: from,
                reason: format!("offset past end of text ({} bytes)", text.len()),
            });
        }
        if !text.is_char_boundary(from) {
            return Err(SearchError::ScannerFailure {
                offset: from,
                reason: "offset is not on a char boundary".to_string(),
            });
        }
        match self.regex.find_at(text, from) {
            Some(m) if m.start() == m.end() => Err(SearchError::ScannerFailure {
                offset: m.start(),
                reason: format!("pattern `{}` matched the empty string", self.regex.as_str()),
            }),
            Some(m) => Ok(Some(m.start()..m.end())),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::ErrorKind;

    fn scanner() -> RegexScanner {
        RegexScanner::new().unwrap()
    }

    #[test]
    fn test_finds_single_space() {
        assert_eq!(scanner().find_next_delimiter_run("a b", 0).unwrap(), Some(1..2));
    }

    #[test]
    fn test_run_is_maximal() {
        assert_eq!(scanner().find_next_delimiter_run("care, and", 0).unwrap(), Some(4..6));
        assert_eq!(scanner().find_next_delimiter_run("a  b", 0).unwrap(), Some(1..3));
    }

    #[test]
    fn test_offsets_relative_to_whole_text() {
        let text = "one two three";
        assert_eq!(scanner().find_next_delimiter_run(text, 4).unwrap(), Some(7..8));
    }

    #[test]
    fn test_underscore_and_digits_are_word_chars() {
        assert_eq!(scanner().find_next_delimiter_run("icd_9", 0).unwrap(), None);
    }

    #[test]
    fn test_non_ascii_is_delimiter() {
        // "é" is two bytes in UTF-8
        assert_eq!(scanner().find_next_delimiter_run("caf\u{e9}s", 0).unwrap(), Some(3..5));
    }

    #[test]
    fn test_none_at_end() {
        assert_eq!(scanner().find_next_delimiter_run("word", 0).unwrap(), None);
        assert_eq!(scanner().find_next_delimiter_run("word", 4).unwrap(), None);
        assert_eq!(scanner().find_next_delimiter_run("", 0).unwrap(), None);
    }

    #[test]
    fn test_offset_past_end_is_fault() {
        let err = scanner().find_next_delimiter_run("abc", 4).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ScannerFailure);
    }

    #[test]
    fn test_offset_inside_char_is_fault() {
        let err = scanner().find_next_delimiter_run("\u{e9}a", 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ScannerFailure);
    }

    #[test]
    fn test_custom_pattern() {
        let s = RegexScanner::with_pattern(r"\s+").unwrap();
        assert_eq!(s.find_next_delimiter_run("well-established, org", 0).unwrap(), Some(17..18));
        assert_eq!(s.pattern(), r"\s+");
    }

    #[test]
    fn test_bad_pattern_fails_to_compile() {
        let err = RegexScanner::with_pattern("[unclosed").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PatternCompileFailure);
    }

    #[test]
    fn test_empty_match_is_fault() {
        let s = RegexScanner::with_pattern(r"\s*").unwrap();
        let err = s.find_next_delimiter_run("ab", 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ScannerFailure);
    }
}
