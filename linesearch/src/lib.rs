//! # linesearch
//!
//! A small search engine for line-oriented text datasets.
//!
//! Every line of the dataset is a record. Records are tokenized on
//! whitespace and lowercased into an inverted index, which is then queried
//! with one of three strategies:
//!
//! - `ALL`: records containing every query term
//! - `ANY`: records containing at least one query term
//! - `NONE`: records containing none of the query terms
//!
//! ```
//! use linesearch::{Dataset, Engine, MatchStrategy, SearchConfig};
//!
//! let dataset = Dataset::from_records(["Ann Smith ann@x.com", "Bob Ann Jones", "Carol White"]);
//! let engine = Engine::new(dataset, SearchConfig::default()).unwrap();
//!
//! let matches = engine.search_str(MatchStrategy::All, "ann jones");
//! assert_eq!(matches.texts(), vec!["Bob Ann Jones"]);
//! ```

pub mod analysis;
mod config;
mod dataset;
mod engine;
mod error;
pub mod index;
mod query;
pub mod search;

pub use config::{SearchConfig, SearchConfigBuilder};
pub use dataset::Dataset;
pub use engine::Engine;
pub use error::{Result, SearchError};
pub use index::{IndexBuilder, InvertedIndex, PostingList};
pub use query::{MatchStrategy, Query};
pub use search::{MatchOptions, MatchSet, Searcher};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
