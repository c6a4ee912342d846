//! WordSpot Interface Definition
//!
//! Public types shared by the tokenizer, the search engine and the CLI.
//! It acts as the source of truth for spans, match lists and the error taxonomy.

use serde::{Deserialize, Serialize};
use std::collections::TryReserveError;
use std::ops::Range;
use thiserror::Error;

/// Hard upper bound on the number of matches a single search may return.
pub const MAX_MATCHES: usize = 4096;

/// Value written after the last match by `MatchList::to_sentinel_buffer`.
pub const MATCH_SENTINEL: i64 = -1;

// ═══════════════════════════════════════════════════════════════════════════════
// RECORDS (Structs)
// ═══════════════════════════════════════════════════════════════════════════════

/// A word carved out of the text by the tokenizer.
///
/// `start..end` is a byte range into the original text and always falls on
/// char boundaries. The span may be empty when the text starts or ends with a
/// delimiter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSpan<'t> {
    /// Zero-based position among all spans produced for one text
    pub ordinal: usize,
    pub start: usize,
    pub end: usize,
    pub text: &'t str,
}

impl WordSpan<'_> {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A word whose similarity to the target reached the cutoff
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WordMatch {
    pub ordinal: usize,
    pub start: usize,
    pub end: usize,
    pub score: f64,
}

impl WordMatch {
    pub(crate) fn from_span(span: &WordSpan<'_>, score: f64) -> Self {
        Self {
            ordinal: span.ordinal,
            start: span.start,
            end: span.end,
            score,
        }
    }
}

/// Ordered list of matches from one search.
///
/// Ordinals are strictly increasing and the list never holds more entries than
/// the capacity the search ran with. The length is explicit; the `-1`
/// terminated form is only produced on request via [`MatchList::to_sentinel_buffer`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchList {
    matches: Vec<WordMatch>,
}

impl MatchList {
    pub(crate) fn from_vec(matches: Vec<WordMatch>) -> Self {
        Self { matches }
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Word ordinals in ascending order
    pub fn ordinals(&self) -> Vec<usize> {
        self.matches.iter().map(|m| m.ordinal).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordMatch> {
        self.matches.iter()
    }

    pub fn as_slice(&self) -> &[WordMatch] {
        &self.matches
    }

    /// Matched words as they appear in `text` (the text the search ran on).
    pub fn words<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.matches
            .iter()
            .filter_map(|m| text.get(m.start..m.end))
            .collect()
    }

    /// Legacy fixed-size layout: `capacity` slots holding the ordinals,
    /// padded with [`MATCH_SENTINEL`]. Returns `None` when there is no room
    /// left for a terminating sentinel.
    pub fn to_sentinel_buffer(&self, capacity: usize) -> Option<Vec<i64>> {
        if self.matches.len() >= capacity {
            return None;
        }
        let mut buf = vec![MATCH_SENTINEL; capacity];
        for (slot, m) in buf.iter_mut().zip(&self.matches) {
            *slot = m.ordinal as i64;
        }
        Some(buf)
    }
}

impl<'a> IntoIterator for &'a MatchList {
    type Item = &'a WordMatch;
    type IntoIter = std::slice::Iter<'a, WordMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// ERRORS
// ═══════════════════════════════════════════════════════════════════════════════

/// Classification of a failed search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    AllocationFailure,
    PatternCompileFailure,
    ScannerFailure,
    MatchCapacityExceeded,
}

/// Error type for WordSpot operations. Every variant is terminal for the call.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Allocation failed: {0}")]
    AllocationFailure(#[from] TryReserveError),
    #[error("Delimiter pattern failed to compile: {0}")]
    PatternCompileFailure(#[from] regex::Error),
    #[error("Delimiter scan failed at byte {offset}: {reason}")]
    ScannerFailure { offset: usize, reason: String },
    #[error("More than {capacity} words matched")]
    MatchCapacityExceeded { capacity: usize },
}

impl SearchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SearchError::AllocationFailure(_) => ErrorKind::AllocationFailure,
            SearchError::PatternCompileFailure(_) => ErrorKind::PatternCompileFailure,
            SearchError::ScannerFailure { .. } => ErrorKind::ScannerFailure,
            SearchError::MatchCapacityExceeded { .. } => ErrorKind::MatchCapacityExceeded,
        }
    }
}

pub type SearchResult<T> = Result<T, SearchError>;
