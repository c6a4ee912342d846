//! Search configuration

use crate::interface::MAX_MATCHES;
use crate::scoring::Metric;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Engine settings. Missing fields in a config file take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Hard cap on matches per search
    pub max_matches: usize,
    pub metric: Metric,
    /// Replaces the built-in ASCII delimiter class when set
    pub delimiter_pattern: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_matches: MAX_MATCHES,
            metric: Metric::default(),
            delimiter_pattern: None,
        }
    }
}

impl SearchConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn with_max_matches(mut self, max_matches: usize) -> Self {
        self.max_matches = max_matches;
        self
    }

    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_delimiter_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.delimiter_pattern = Some(pattern.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.max_matches, 4096);
        assert_eq!(config.metric, Metric::JaroAverage);
        assert!(config.delimiter_pattern.is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SearchConfig::from_json_str(r#"{"metric": "jaro-winkler"}"#).unwrap();
        assert_eq!(config.metric, Metric::JaroWinkler);
        assert_eq!(config.max_matches, MAX_MATCHES);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(matches!(
            SearchConfig::from_json_str(r#"{"max_matches": "lots"}"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"max_matches": 10, "delimiter_pattern": "\\s+"}}"#).unwrap();
        let config = SearchConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.max_matches, 10);
        assert_eq!(config.delimiter_pattern.as_deref(), Some(r"\s+"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SearchConfig::from_json_file(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_builders() {
        let config = SearchConfig::default()
            .with_max_matches(5)
            .with_metric(Metric::Levenshtein)
            .with_delimiter_pattern(" ");
        assert_eq!(config.max_matches, 5);
        assert_eq!(config.metric, Metric::Levenshtein);
        assert_eq!(config.delimiter_pattern.as_deref(), Some(" "));
    }
}
