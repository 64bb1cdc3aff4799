//! Error types for the linesearch library.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias used throughout the library.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors produced while loading a dataset, reading configuration or
/// interpreting user input.
///
/// Matching itself never fails: a query that selects nothing yields an
/// empty [`MatchSet`](crate::MatchSet), not an error.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset source does not exist.
    #[error("dataset not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The strategy name is not one of ALL, ANY or NONE.
    #[error("invalid search strategy: '{0}'")]
    InvalidStrategy(String),

    /// The configuration could not be parsed or holds invalid values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SearchError {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        SearchError::NotFound { path: path.into() }
    }

    pub fn invalid_strategy(input: impl Into<String>) -> Self {
        SearchError::InvalidStrategy(input.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        SearchError::InvalidConfig(msg.into())
    }

    /// Whether this error means the dataset source is missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SearchError::NotFound { .. })
    }
}
