//! Bounded match storage.
//!
//! Exceeding the capacity is an error, never a silent truncation: a partial
//! list would read as an exhaustive one.

use crate::interface::{MatchList, SearchError, SearchResult, WordMatch};

/// Entries reserved before the first append
const INITIAL_RESERVE: usize = 64;

#[derive(Debug)]
pub struct MatchAccumulator {
    matches: Vec<WordMatch>,
    capacity: usize,
}

impl MatchAccumulator {
    pub fn new(capacity: usize) -> SearchResult<Self> {
        let mut matches = Vec::new();
        matches.try_reserve_exact(capacity.min(INITIAL_RESERVE))?;
        Ok(Self { matches, capacity })
    }

    /// Append a match. Fails once `capacity` matches are already stored.
    pub fn try_append(&mut self, m: WordMatch) -> SearchResult<()> {
        if self.matches.len() >= self.capacity {
            return Err(SearchError::MatchCapacityExceeded { capacity: self.capacity });
        }
        debug_assert!(
            self.matches.last().map_or(true, |last| last.ordinal < m.ordinal),
            "ordinals must be appended in increasing order"
        );
        if self.matches.len() == self.matches.capacity() {
            self.matches.try_reserve(1)?;
        }
        self.matches.push(m);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn into_match_list(self) -> MatchList {
        MatchList::from_vec(self.matches)
    }
}
