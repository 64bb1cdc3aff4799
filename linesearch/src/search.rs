//! Query execution over a dataset and its inverted index.
//!
//! Three strategies are supported, selected per call with
//! [`MatchStrategy`]:
//!
//! - **ALL**: the first term is looked up in the index as a whole token;
//!   the remaining terms only need to appear somewhere in the record as
//!   case-insensitive substrings.
//! - **ANY**: union of the posting lists of every term.
//! - **NONE**: every record minus those listed under any term.
//!
//! Terms absent from the index contribute nothing and are never an error.
//!
//! An empty query matches nothing under ALL and ANY and every record under
//! NONE.

use crate::analysis::normalize;
use crate::dataset::Dataset;
use crate::index::InvertedIndex;
use crate::query::{MatchStrategy, Query};

/// Options that change how matches are collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Report each record at most once for ANY. When disabled, a record is
    /// reported once per query term that selects it, grouped by term in
    /// query order.
    pub deduplicate_any: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        MatchOptions {
            deduplicate_any: true,
        }
    }
}

/// Records selected by a query.
#[derive(Debug, Clone)]
pub struct MatchSet<'a> {
    dataset: &'a Dataset,
    positions: Vec<usize>,
}

impl<'a> MatchSet<'a> {
    pub fn new(dataset: &'a Dataset, positions: Vec<usize>) -> Self {
        MatchSet { dataset, positions }
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate over `(position, record)` pairs in result order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        self.positions
            .iter()
            .filter_map(|&p| self.dataset.get(p).map(|text| (p, text)))
    }

    /// Matched record texts in result order.
    pub fn texts(&self) -> Vec<&'a str> {
        self.iter().map(|(_, text)| text).collect()
    }

    pub fn into_positions(self) -> Vec<usize> {
        self.positions
    }
}

/// Executes queries against a dataset and the index built from it.
#[derive(Debug, Clone, Copy)]
pub struct Searcher<'a> {
    dataset: &'a Dataset,
    index: &'a InvertedIndex,
    options: MatchOptions,
}

impl<'a> Searcher<'a> {
    /// `index` must have been built from `dataset`.
    pub fn new(dataset: &'a Dataset, index: &'a InvertedIndex) -> Self {
        debug_assert_eq!(
            index.record_count(),
            dataset.len(),
            "index was built from a different dataset"
        );
        Searcher {
            dataset,
            index,
            options: MatchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    /// Run `query` with `strategy`.
    pub fn search(&self, strategy: MatchStrategy, query: &Query) -> MatchSet<'a> {
        let positions = match strategy {
            MatchStrategy::All => match_all(self.dataset, self.index, query),
            MatchStrategy::Any => match_any(self.index, query, self.options.deduplicate_any),
            MatchStrategy::None => match_none(self.dataset, self.index, query),
        };
        log::trace!(
            "{strategy} query '{query}' matched {} records",
            positions.len()
        );
        MatchSet::new(self.dataset, positions)
    }
}

/// Positions of records indexed under the first term that also contain
/// every other term as a case-insensitive substring, ascending.
pub fn match_all(dataset: &Dataset, index: &InvertedIndex, query: &Query) -> Vec<usize> {
    let Some(candidates) = query.first().and_then(|first| index.get(first)) else {
        return Vec::new();
    };

    let rest = query.rest();
    if rest.is_empty() {
        return candidates.positions().to_vec();
    }

    candidates
        .iter()
        .filter(|&position| {
            dataset.get(position).is_some_and(|text| {
                let text = normalize(text);
                rest.iter().all(|term| text.contains(term.as_str()))
            })
        })
        .collect()
}

/// Positions of records indexed under at least one term.
///
/// With `deduplicate` the result is ascending and duplicate-free; otherwise
/// it is the concatenation of each present term's posting list in query
/// order.
pub fn match_any(index: &InvertedIndex, query: &Query, deduplicate: bool) -> Vec<usize> {
    let mut positions: Vec<usize> = query
        .terms()
        .iter()
        .filter_map(|term| index.get(term))
        .flat_map(|list| list.iter())
        .collect();

    if deduplicate {
        positions.sort_unstable();
        positions.dedup();
    }
    positions
}

/// Positions of records indexed under none of the terms, in original order.
pub fn match_none(dataset: &Dataset, index: &InvertedIndex, query: &Query) -> Vec<usize> {
    let mut excluded = vec![false; dataset.len()];
    for list in query.terms().iter().filter_map(|term| index.get(term)) {
        for position in list.iter() {
            if let Some(slot) = excluded.get_mut(position) {
                *slot = true;
            }
        }
    }

    excluded
        .iter()
        .enumerate()
        .filter_map(|(position, &hit)| (!hit).then_some(position))
        .collect()
}
