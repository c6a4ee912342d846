//! Search Engine (delimiter tokenization + per-word similarity cutoff)
//!
//! Words stream out of the tokenizer one at a time; each is ASCII-lowercased,
//! scored against the pre-normalized target and appended to a bounded
//! accumulator when the score reaches the cutoff. Any error ends the search
//! and discards the partial result.

use crate::accumulator::MatchAccumulator;
use crate::config::SearchConfig;
use crate::interface::{MatchList, SearchResult, WordMatch};
use crate::normalize::{normalize, normalize_into};
use crate::scanner::{DelimiterScanner, RegexScanner};
use crate::scoring::SimilarityScorer;
use crate::tokenizer::Tokenizer;

/// One entry of a batch search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchRequest<'a> {
    pub text: &'a str,
    pub target: &'a str,
    pub cutoff: f64,
}

impl<'a> SearchRequest<'a> {
    pub fn new(text: &'a str, target: &'a str, cutoff: f64) -> Self {
        Self { text, target, cutoff }
    }
}

/// Owns the delimiter scanner and the scorer. Holds no per-search state, so a
/// single engine can serve concurrent searches.
pub struct SearchEngine {
    scanner: Box<dyn DelimiterScanner>,
    scorer: Box<dyn SimilarityScorer>,
    max_matches: usize,
}

impl SearchEngine {
    /// Engine with the default configuration.
    pub fn new() -> SearchResult<Self> {
        Self::with_config(&SearchConfig::default())
    }

    /// Compiles the delimiter pattern; `PatternCompileFailure` is reported
    /// here and never per search.
    pub fn with_config(config: &SearchConfig) -> SearchResult<Self> {
        let scanner = match &config.delimiter_pattern {
            Some(pattern) => RegexScanner::with_pattern(pattern)?,
            None => RegexScanner::new()?,
        };
        Ok(Self {
            scanner: Box::new(scanner),
            scorer: Box::new(config.metric),
            max_matches: config.max_matches,
        })
    }

    pub fn with_scorer(mut self, scorer: impl SimilarityScorer + 'static) -> Self {
        self.scorer = Box::new(scorer);
        self
    }

    pub fn with_scanner(mut self, scanner: impl DelimiterScanner + 'static) -> Self {
        self.scanner = Box::new(scanner);
        self
    }

    pub fn max_matches(&self) -> usize {
        self.max_matches
    }

    /// Word spans of `text`, as the search sees them.
    pub fn spans<'t>(&self, text: &'t str) -> Tokenizer<'t, '_, dyn DelimiterScanner> {
        Tokenizer::new(text, self.scanner.as_ref())
    }

    /// Ordinals of every word in `text` whose similarity to `target` is at
    /// least `cutoff`.
    ///
    /// A cutoff at or below 0 matches every word and one above 1 matches none;
    /// NaN matches none. Exceeding `max_matches` fails the whole search with
    /// `MatchCapacityExceeded`.
    pub fn search(&self, text: &str, target: &str, cutoff: f64) -> SearchResult<MatchList> {
        #[cfg(feature = "perf-log")]
        let t0 = std::time::Instant::now();

        let target = normalize(target)?;
        let mut accumulator = MatchAccumulator::new(self.max_matches)?;
        let mut word = String::new();
        let mut word_count = 0usize;

        for span in self.spans(text) {
            let span = match span {
                Ok(span) => span,
                Err(e) => {
                    tracing::debug!(error = %e, words = word_count, "scan failed");
                    return Err(e);
                }
            };
            word_count += 1;

            normalize_into(span.text, &mut word)?;
            let score = self.scorer.score(&word, &target);
            // false for NaN on either side
            let reached = score >= cutoff;
            if !reached {
                continue;
            }

            tracing::debug!(ordinal = span.ordinal, word = span.text, score, "word matched");
            if let Err(e) = accumulator.try_append(WordMatch::from_span(&span, score)) {
                tracing::warn!(
                    capacity = accumulator.capacity(),
                    ordinal = span.ordinal,
                    "too many matches, discarding result"
                );
                return Err(e);
            }
        }

        #[cfg(feature = "perf-log")]
        tracing::debug!(
            elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0,
            bytes = text.len(),
            "[perf] search"
        );
        tracing::debug!(words = word_count, matches = accumulator.len(), "search complete");

        Ok(accumulator.into_match_list())
    }

    /// Run independent searches in parallel. Results keep the input order.
    pub fn search_batch(&self, requests: &[SearchRequest<'_>]) -> Vec<SearchResult<MatchList>> {
        use rayon::prelude::*;
        requests
            .par_iter()
            .map(|r| self.search(r.text, r.target, r.cutoff))
            .collect()
    }
}

/// Search with a freshly built default engine.
pub fn search(text: &str, target: &str, cutoff: f64) -> SearchResult<MatchList> {
    SearchEngine::new()?.search(text, target, cutoff)
}
