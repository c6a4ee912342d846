//! WordSpot - approximate word search over free text
//!
//! Splits a passage into words on runs of non-word characters, scores every
//! word against a target with a string-similarity metric, and reports the
//! ordinals of the words whose score reaches a cutoff.
//!
//! ```
//! let matches = wordspot::search("Nurses are kind", "nurses", 1.0).unwrap();
//! assert_eq!(matches.ordinals(), vec![0]);
//! ```

mod accumulator;
pub mod config;
pub mod demo_data;
pub mod interface;
pub mod normalize;
pub mod scanner;
pub mod scoring;
pub mod search;
pub mod tokenizer;

pub use accumulator::MatchAccumulator;
pub use config::{ConfigError, SearchConfig};
pub use interface::*;
pub use scanner::{DelimiterScanner, RegexScanner};
pub use scoring::{Metric, SimilarityScorer};
pub use search::{search, SearchEngine, SearchRequest};
pub use tokenizer::Tokenizer;
