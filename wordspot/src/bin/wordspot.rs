//! Fuzzy keyword spotting from the command line.
//!
//! Usage:
//!     wordspot [TEXT] [--target nurses] [--cutoff 0.95]
//!     wordspot --file posting.txt --metric jaro-winkler --json
//!     cat posting.txt | wordspot --stdin --target nurse
//!
//! With no text source the built-in job posting is searched.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use wordspot::demo_data::{DEMO_CUTOFF, DEMO_TARGET, JOB_DESCRIPTION};
use wordspot::{ErrorKind, Metric, SearchConfig, SearchEngine};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to search (defaults to the built-in demo posting)
    text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, conflicts_with_all = ["text", "stdin"])]
    file: Option<PathBuf>,

    /// Read the text from standard input
    #[arg(long, conflicts_with = "text")]
    stdin: bool,

    /// Word to look for
    #[arg(short, long, default_value = DEMO_TARGET)]
    target: String,

    /// Minimum similarity score for a match
    #[arg(short, long, default_value_t = DEMO_CUTOFF)]
    cutoff: f64,

    /// JSON config file (max_matches, metric, delimiter_pattern)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Similarity metric (overrides the config file)
    #[arg(short, long)]
    metric: Option<Metric>,

    /// Maximum number of matches before the search fails (overrides the config file)
    #[arg(long)]
    max_matches: Option<usize>,

    /// Delimiter regex (overrides the config file)
    #[arg(long)]
    delimiter: Option<String>,

    /// Print the match list as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn search_config(&self) -> Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::from_json_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => SearchConfig::default(),
        };
        if let Some(metric) = self.metric {
            config = config.with_metric(metric);
        }
        if let Some(max) = self.max_matches {
            config = config.with_max_matches(max);
        }
        if let Some(pattern) = &self.delimiter {
            config = config.with_delimiter_pattern(pattern.clone());
        }
        Ok(config)
    }

    fn read_text(&self) -> Result<String> {
        if let Some(path) = &self.file {
            return std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()));
        }
        if self.stdin {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            return Ok(buf);
        }
        Ok(self.text.clone().unwrap_or_else(|| JOB_DESCRIPTION.to_string()))
    }
}

/// Used when `RUST_LOG` is unset or holds no valid directive
const DEFAULT_LOG_DIRECTIVE: &str = "wordspot=info";

fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}

/// What to tell the user for each failure kind
fn failure_message(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::PatternCompileFailure => "Error in the phrase-to-word delimiter pattern",
        ErrorKind::AllocationFailure => "Ran out of memory!",
        ErrorKind::MatchCapacityExceeded => {
            "Too many matches! Either the phrase is too long, the cutoff is too low, or the \
             target word is too short. Redo with a higher cutoff or a more specific target; \
             targets shorter than 4-5 letters are usually abbreviations and better suited to \
             regex-based matchers."
        }
        ErrorKind::ScannerFailure => {
            "Scanning the text failed. Make sure the input is legitimate text"
        }
    }
}

fn main() -> Result<ExitCode> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(rust_log.as_deref()))
        .init();

    let args = Args::parse();
    let config = args.search_config()?;
    let text = args.read_text()?;

    let engine = match SearchEngine::with_config(&config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("{}: {}", failure_message(e.kind()), e);
            return Ok(ExitCode::from(2));
        }
    };
    tracing::info!(
        target_word = %args.target,
        cutoff = args.cutoff,
        metric = %config.metric,
        bytes = text.len(),
        "searching"
    );

    let matches = match engine.search(&text, &args.target, args.cutoff) {
        Ok(matches) => matches,
        Err(e) => {
            eprintln!("{}", failure_message(e.kind()));
            tracing::debug!(error = %e, "search failed");
            return Ok(ExitCode::from(1));
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else {
        for (m, word) in matches.iter().zip(matches.words(&text)) {
            println!("Word {} [{}] matches with a score of {:.4}", word, m.ordinal, m.score);
        }
        println!("Total match count: {}", matches.len());
    }
    Ok(ExitCode::SUCCESS)
}
