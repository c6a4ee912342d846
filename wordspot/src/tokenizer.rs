//! Word tokenization by delimiter runs.
//!
//! Every span sitting between two delimiter runs is emitted, so a text that
//! starts with a delimiter yields an empty span 0 and a text that ends with
//! one yields an empty final span. A run is maximal, so "a  b" is two words.

use crate::interface::{SearchError, SearchResult, WordSpan};
use crate::scanner::DelimiterScanner;

/// Lazy span iterator over one text.
///
/// Yields `Err` at most once (a scanner fault) and is fused afterwards.
pub struct Tokenizer<'t, 's, S: DelimiterScanner + ?Sized> {
    text: &'t str,
    scanner: &'s S,
    cursor: usize,
    ordinal: usize,
    done: bool,
}

impl<'t, 's, S: DelimiterScanner + ?Sized> Tokenizer<'t, 's, S> {
    pub fn new(text: &'t str, scanner: &'s S) -> Self {
        Self {
            text,
            scanner,
            cursor: 0,
            ordinal: 0,
            done: false,
        }
    }

    fn span(&self, start: usize, end: usize) -> WordSpan<'t> {
        WordSpan {
            ordinal: self.ordinal,
            start,
            end,
            text: &self.text[start..end],
        }
    }
}

impl<'t, S: DelimiterScanner + ?Sized> Iterator for Tokenizer<'t, '_, S> {
    type Item = SearchResult<WordSpan<'t>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.scanner.find_next_delimiter_run(self.text, self.cursor) {
            Ok(Some(delim))
                if delim.start < self.cursor
                    || delim.end <= delim.start
                    || self.text.get(delim.clone()).is_none() =>
            {
                self.done = true;
                Some(Err(SearchError::ScannerFailure {
                    offset: self.cursor,
                    reason: format!("scanner returned invalid delimiter run {:?}", delim),
                }))
            }
            Ok(Some(delim)) => {
                let span = self.span(self.cursor, delim.start);
                self.cursor = delim.end;
                self.ordinal += 1;
                Some(Ok(span))
            }
            Ok(None) => {
                self.done = true;
                Some(Ok(self.span(self.cursor, self.text.len())))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<S: DelimiterScanner + ?Sized> std::iter::FusedIterator for Tokenizer<'_, '_, S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::ErrorKind;
    use crate::scanner::RegexScanner;
    use std::ops::Range;

    fn words(text: &str) -> Vec<(usize, &str)> {
        let scanner = RegexScanner::new().unwrap();
        Tokenizer::new(text, &scanner)
            .map(|s| s.unwrap())
            .map(|s| (s.ordinal, s.text))
            .collect()
    }

    #[test]
    fn test_simple_sentence() {
        assert_eq!(words("Nurses are kind"), vec![(0, "Nurses"), (1, "are"), (2, "kind")]);
    }

    #[test]
    fn test_double_space_has_no_phantom_word() {
        assert_eq!(words("a  b"), vec![(0, "a"), (1, "b")]);
    }

    #[test]
    fn test_punctuation_run_is_one_delimiter() {
        assert_eq!(
            words("care; and, (ESRD)."),
            vec![(0, "care"), (1, "and"), (2, "ESRD"), (3, "")]
        );
    }

    #[test]
    fn test_leading_delimiter_yields_empty_first_span() {
        assert_eq!(words("  hello"), vec![(0, ""), (1, "hello")]);
    }

    #[test]
    fn test_trailing_delimiter_yields_empty_last_span() {
        assert_eq!(words("hello."), vec![(0, "hello"), (1, "")]);
    }

    #[test]
    fn test_empty_text_yields_one_empty_span() {
        assert_eq!(words(""), vec![(0, "")]);
    }

    #[test]
    fn test_delimiters_only() {
        assert_eq!(words(" - "), vec![(0, ""), (1, "")]);
    }

    #[test]
    fn test_span_offsets() {
        let scanner = RegexScanner::new().unwrap();
        let spans: Vec<_> = Tokenizer::new("RN, LVN", &scanner).map(|s| s.unwrap()).collect();
        assert_eq!(spans[0].range(), 0..2);
        assert_eq!(spans[1].range(), 4..7);
        assert!(!spans[1].is_empty());
    }

    #[test]
    fn test_non_ascii_splits_words() {
        assert_eq!(words("na\u{ef}ve"), vec![(0, "na"), (1, "ve")]);
    }

    struct FailingScanner {
        fail_from: usize,
    }

    impl DelimiterScanner for FailingScanner {
        fn find_next_delimiter_run(
            &self,
            text: &str,
            from: usize,
        ) -> SearchResult<Option<Range<usize>>> {
            if from >= self.fail_from {
                return Err(SearchError::ScannerFailure { offset: from, reason: "injected".into() });
            }
            RegexScanner::new()?.find_next_delimiter_run(text, from)
        }
    }

    #[test]
    fn test_scanner_fault_is_yielded_once_then_fused() {
        let scanner = FailingScanner { fail_from: 3 };
        let mut tok = Tokenizer::new("ab cd ef", &scanner);
        assert_eq!(tok.next().unwrap().unwrap().text, "ab");
        let err = tok.next().unwrap().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ScannerFailure);
        assert!(tok.next().is_none());
        assert!(tok.next().is_none());
    }

    struct StuckScanner;

    impl DelimiterScanner for StuckScanner {
        fn find_next_delimiter_run(
            &self,
            _text: &str,
            from: usize,
        ) -> SearchResult<Option<Range<usize>>> {
            Ok(Some(from..from))
        }
    }

    #[test]
    fn test_non_advancing_run_is_fault() {
        let mut tok = Tokenizer::new("abc", &StuckScanner);
        assert_eq!(tok.next().unwrap().unwrap_err().kind(), ErrorKind::ScannerFailure);
        assert!(tok.next().is_none());
    }

    #[test]
    fn test_works_with_trait_object() {
        let scanner: Box<dyn DelimiterScanner> = Box::new(RegexScanner::new().unwrap());
        let count = Tokenizer::new("x y z", &*scanner).count();
        assert_eq!(count, 3);
    }
}
