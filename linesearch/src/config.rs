//! Engine configuration.
//!
//! Configuration is usually read from a TOML file:
//!
//! ```toml
//! deduplicate_any = true
//! parallel_threshold = 4096
//! default_strategy = "ANY"
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};
use crate::index::DEFAULT_PARALLEL_THRESHOLD;
use crate::query::MatchStrategy;
use crate::search::MatchOptions;

/// Configuration for an [`Engine`](crate::Engine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Report each record at most once for ANY queries.
    pub deduplicate_any: bool,
    /// Record count at which the index is built in parallel.
    pub parallel_threshold: usize,
    /// Strategy used when a caller does not name one.
    pub default_strategy: MatchStrategy,
}

impl SearchConfig {
    pub fn new() -> Self {
        SearchConfig {
            deduplicate_any: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            default_strategy: MatchStrategy::Any,
        }
    }

    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::default()
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: SearchConfig =
            toml::from_str(s).map_err(|e| SearchError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => SearchError::not_found(path),
            _ => SearchError::Io(e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.parallel_threshold == 0 {
            return Err(SearchError::invalid_config(
                "parallel_threshold must be at least 1",
            ));
        }
        Ok(())
    }

    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            deduplicate_any: self.deduplicate_any,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
pub struct SearchConfigBuilder {
    deduplicate_any: Option<bool>,
    parallel_threshold: Option<usize>,
    default_strategy: Option<MatchStrategy>,
}

impl SearchConfigBuilder {
    pub fn deduplicate_any(mut self, deduplicate: bool) -> Self {
        self.deduplicate_any = Some(deduplicate);
        self
    }

    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = Some(threshold);
        self
    }

    pub fn default_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.default_strategy = Some(strategy);
        self
    }

    pub fn build(self) -> SearchConfig {
        let defaults = SearchConfig::new();
        SearchConfig {
            deduplicate_any: self.deduplicate_any.unwrap_or(defaults.deduplicate_any),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
            default_strategy: self.default_strategy.unwrap_or(defaults.default_strategy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert!(config.deduplicate_any);
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
        assert_eq!(config.default_strategy, MatchStrategy::Any);
        assert_eq!(SearchConfig::from_toml_str("").unwrap(), config);
    }

    #[test]
    fn test_from_toml() {
        let config = SearchConfig::from_toml_str(
            r#"
            deduplicate_any = false
            parallel_threshold = 16
            default_strategy = "NONE"
            "#,
        )
        .unwrap();

        assert!(!config.deduplicate_any);
        assert_eq!(config.parallel_threshold, 16);
        assert_eq!(config.default_strategy, MatchStrategy::None);
        assert!(!config.match_options().deduplicate_any);
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let err = SearchConfig::from_toml_str("ranking = true").unwrap_err();
        assert!(matches!(err, SearchError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_zero_threshold() {
        let err = SearchConfig::from_toml_str("parallel_threshold = 0").unwrap_err();
        assert!(matches!(err, SearchError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_unknown_strategy() {
        assert!(SearchConfig::from_toml_str(r#"default_strategy = "SOME""#).is_err());
    }

    #[test]
    fn test_builder() {
        let config = SearchConfig::builder()
            .deduplicate_any(false)
            .default_strategy(MatchStrategy::All)
            .build();
        assert!(!config.deduplicate_any);
        assert_eq!(config.default_strategy, MatchStrategy::All);
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SearchConfig::load(dir.path().join("linesearch.toml")).unwrap_err();
        assert!(err.is_not_found());
    }
}
