//! Queries and matching strategies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analysis::tokenize;
use crate::error::SearchError;

/// How the terms of a query combine to select records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchStrategy {
    /// The first term must be a token of the record and every other term a
    /// case-insensitive substring of it.
    All,
    /// At least one term must be a token of the record.
    Any,
    /// No term may be a token of the record.
    None,
}

impl MatchStrategy {
    /// All strategies in menu order.
    pub const VARIANTS: [MatchStrategy; 3] =
        [MatchStrategy::All, MatchStrategy::Any, MatchStrategy::None];

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStrategy::All => "ALL",
            MatchStrategy::Any => "ANY",
            MatchStrategy::None => "NONE",
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchStrategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ALL" => Ok(MatchStrategy::All),
            "ANY" => Ok(MatchStrategy::Any),
            "NONE" => Ok(MatchStrategy::None),
            _ => Err(SearchError::invalid_strategy(s.trim())),
        }
    }
}

/// A tokenized search query.
///
/// Terms are produced by the same analysis as indexed records and keep
/// their input order; repeated terms are not collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    terms: Vec<String>,
}

impl Query {
    /// Parse raw user input into a query.
    pub fn parse(input: &str) -> Self {
        Query {
            terms: tokenize(input).collect(),
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn first(&self) -> Option<&str> {
        self.terms.first().map(String::as_str)
    }

    /// Every term after the first.
    pub fn rest(&self) -> &[String] {
        self.terms.get(1..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.terms.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_parse_case_insensitive() {
        assert_eq!("all".parse::<MatchStrategy>().unwrap(), MatchStrategy::All);
        assert_eq!("Any".parse::<MatchStrategy>().unwrap(), MatchStrategy::Any);
        assert_eq!(" NONE \n".parse::<MatchStrategy>().unwrap(), MatchStrategy::None);
    }

    #[test]
    fn test_strategy_parse_invalid() {
        let err = "some".parse::<MatchStrategy>().unwrap_err();
        assert!(matches!(err, SearchError::InvalidStrategy(ref s) if s == "some"));
        assert!("".parse::<MatchStrategy>().is_err());
    }

    #[test]
    fn test_strategy_display_roundtrip() {
        for strategy in MatchStrategy::VARIANTS {
            assert_eq!(strategy.to_string().parse::<MatchStrategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn test_query_parse() {
        let query = Query::parse("  Ann   JONES ");
        assert_eq!(query.terms(), &["ann".to_string(), "jones".to_string()]);
        assert_eq!(query.first(), Some("ann"));
        assert_eq!(query.rest(), &["jones".to_string()]);
        assert_eq!(query.to_string(), "ann jones");
    }

    #[test]
    fn test_empty_query() {
        let query = Query::parse("   ");
        assert!(query.is_empty());
        assert_eq!(query.first(), None);
        assert!(query.rest().is_empty());
    }
}
