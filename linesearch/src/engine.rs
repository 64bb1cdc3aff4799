//! The search engine: a dataset, its inverted index and configuration.

use std::path::Path;

use crate::config::SearchConfig;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::index::{IndexBuilder, InvertedIndex};
use crate::query::{MatchStrategy, Query};
use crate::search::{MatchSet, Searcher};

/// Owns a dataset and the index built from it.
///
/// Both are built once and never modified, so any number of queries can
/// run against the same engine.
#[derive(Debug, Clone)]
pub struct Engine {
    dataset: Dataset,
    index: InvertedIndex,
    config: SearchConfig,
}

impl Engine {
    /// Index `dataset` using `config`.
    pub fn new(dataset: Dataset, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        let index = IndexBuilder::new()
            .parallel_threshold(config.parallel_threshold)
            .build_dataset(&dataset);
        log::info!(
            "engine ready: {} records, {} terms",
            dataset.len(),
            index.term_count()
        );
        Ok(Engine {
            dataset,
            index,
            config,
        })
    }

    /// Load a dataset file and index it.
    pub fn open(path: impl AsRef<Path>, config: SearchConfig) -> Result<Self> {
        let dataset = Dataset::open(path)?;
        Self::new(dataset, config)
    }

    pub fn searcher(&self) -> Searcher<'_> {
        Searcher::new(&self.dataset, &self.index).with_options(self.config.match_options())
    }

    pub fn search(&self, strategy: MatchStrategy, query: &Query) -> MatchSet<'_> {
        self.searcher().search(strategy, query)
    }

    /// Parse `input` and run it with `strategy`.
    pub fn search_str(&self, strategy: MatchStrategy, input: &str) -> MatchSet<'_> {
        self.search(strategy, &Query::parse(input))
    }

    pub fn records(&self) -> &Dataset {
        &self.dataset
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
