//! Word similarity scoring.
//!
//! The search engine only relies on the `SimilarityScorer` contract: a
//! deterministic score in [0, 1], 1.0 for equal inputs. The metrics
//! themselves come from `strsim`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scores two already-normalized words. Higher = more similar.
///
/// Called exactly once per word with the word first and the target second;
/// implementations need not be symmetric.
pub trait SimilarityScorer: Send + Sync {
    fn score(&self, word: &str, target: &str) -> f64;
}

impl<F> SimilarityScorer for F
where
    F: Fn(&str, &str) -> f64 + Send + Sync,
{
    fn score(&self, word: &str, target: &str) -> f64 {
        self(word, target)
    }
}

/// Built-in metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    /// Mean of Jaro and Jaro-Winkler
    #[default]
    JaroAverage,
    Jaro,
    JaroWinkler,
    /// 1 - levenshtein / max_len
    Levenshtein,
    /// 1 - damerau_levenshtein / max_len
    DamerauLevenshtein,
    /// Bigram overlap
    SorensenDice,
    /// 1 - (mismatched positions + length difference) / max_len
    Hamming,
}

impl Metric {
    pub const ALL: [Metric; 7] = [
        Metric::JaroAverage,
        Metric::Jaro,
        Metric::JaroWinkler,
        Metric::Levenshtein,
        Metric::DamerauLevenshtein,
        Metric::SorensenDice,
        Metric::Hamming,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Metric::JaroAverage => "jaro-average",
            Metric::Jaro => "jaro",
            Metric::JaroWinkler => "jaro-winkler",
            Metric::Levenshtein => "levenshtein",
            Metric::DamerauLevenshtein => "damerau-levenshtein",
            Metric::SorensenDice => "sorensen-dice",
            Metric::Hamming => "hamming",
        }
    }
}

impl SimilarityScorer for Metric {
    fn score(&self, word: &str, target: &str) -> f64 {
        match self {
            Metric::JaroAverage => {
                (strsim::jaro(word, target) + strsim::jaro_winkler(word, target)) / 2.0
            }
            Metric::Jaro => strsim::jaro(word, target),
            Metric::JaroWinkler => strsim::jaro_winkler(word, target),
            Metric::Levenshtein => strsim::normalized_levenshtein(word, target),
            Metric::DamerauLevenshtein => strsim::normalized_damerau_levenshtein(word, target),
            Metric::SorensenDice => strsim::sorensen_dice(word, target),
            Metric::Hamming => normalized_hamming(word, target),
        }
    }
}

/// Hamming similarity that also accepts unequal lengths: every position past
/// the shorter word counts as a mismatch.
fn normalized_hamming(a: &str, b: &str) -> f64 {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let max_len = a_len.max(b_len);
    if max_len == 0 {
        return 1.0;
    }
    let distance = match strsim::hamming(a, b) {
        Ok(distance) => distance,
        Err(_) => {
            let mismatched = a.chars().zip(b.chars()).filter(|(x, y)| x != y).count();
            mismatched + a_len.abs_diff(b_len)
        }
    };
    1.0 - distance as f64 / max_len as f64
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Metric::ALL
            .iter()
            .copied()
            .find(|m| m.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Metric::ALL.iter().map(|m| m.name()).collect();
                format!("unknown metric `{}` (expected one of: {})", s, names.join(", "))
            })
    }
}
