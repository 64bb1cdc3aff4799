//! Inverted index construction.
//!
//! The index maps each token to the set of record positions whose text
//! contains that token as a whitespace-delimited word. Posting lists are
//! kept sorted and duplicate-free, so iteration order is always ascending
//! record position.
//!
//! Large datasets are indexed in parallel: records are split into
//! contiguous chunks, each chunk is indexed on its own, and the partial
//! indexes are merged in chunk order. Because chunk `k` only holds
//! positions smaller than chunk `k + 1`, appending keeps every posting
//! list sorted without a re-sort.

use ahash::AHashMap;
use rayon::prelude::*;

use crate::analysis::tokenize;
use crate::dataset::Dataset;

/// Default number of records at which [`IndexBuilder`] switches to a
/// parallel build.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Sorted, duplicate-free list of record positions for one token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingList {
    positions: Vec<usize>,
}

impl PostingList {
    /// Record `position`. Positions must be pushed in non-decreasing order;
    /// a repeat of the last position is ignored.
    fn push(&mut self, position: usize) {
        debug_assert!(self.positions.last().is_none_or(|&last| last <= position));
        if self.positions.last() != Some(&position) {
            self.positions.push(position);
        }
    }

    /// Append a list whose positions are all greater than ours.
    fn append(&mut self, mut other: PostingList) {
        debug_assert!(
            match (self.positions.last(), other.positions.first()) {
                (Some(last), Some(first)) => last < first,
                _ => true,
            }
        );
        self.positions.append(&mut other.positions);
    }

    pub fn contains(&self, position: usize) -> bool {
        self.positions.binary_search(&position).is_ok()
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.positions.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Token to record-position mapping.
///
/// Built once by [`IndexBuilder`] and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvertedIndex {
    postings: AHashMap<String, PostingList>,
    record_count: usize,
}

impl InvertedIndex {
    /// Build an index over `records` with the default builder settings.
    pub fn build(records: &[String]) -> Self {
        IndexBuilder::new().build(records)
    }

    /// Posting list for an already-normalized token.
    pub fn get(&self, token: &str) -> Option<&PostingList> {
        self.postings.get(token)
    }

    /// Whether the record at `position` contains `token`.
    pub fn contains(&self, token: &str, position: usize) -> bool {
        self.get(token).is_some_and(|p| p.contains(position))
    }

    /// Number of distinct tokens.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Number of records the index was built from, including records that
    /// contributed no tokens.
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Iterate over indexed tokens in no particular order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    /// Total number of (token, position) pairs.
    pub fn posting_count(&self) -> usize {
        self.postings.values().map(PostingList::len).sum()
    }

    /// Index `records`, numbering them from `offset`.
    fn index_chunk(records: &[String], offset: usize) -> Self {
        let mut postings: AHashMap<String, PostingList> = AHashMap::new();
        for (i, record) in records.iter().enumerate() {
            let position = offset + i;
            for token in tokenize(record) {
                postings.entry(token).or_default().push(position);
            }
        }
        InvertedIndex {
            postings,
            record_count: records.len(),
        }
    }

    /// Merge an index built over the records that directly follow ours.
    fn merge_following(&mut self, other: InvertedIndex) {
        for (token, list) in other.postings {
            match self.postings.get_mut(&token) {
                Some(existing) => existing.append(list),
                None => {
                    self.postings.insert(token, list);
                }
            }
        }
        self.record_count += other.record_count;
    }
}

/// Builds an [`InvertedIndex`] from an ordered sequence of records.
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    parallel_threshold: usize,
}

impl IndexBuilder {
    pub fn new() -> Self {
        IndexBuilder {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Set the record count at which indexing runs in parallel.
    ///
    /// `0` is treated as `1`.
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold.max(1);
        self
    }

    /// Build an index over `records`. Positions are slice indices.
    pub fn build(&self, records: &[String]) -> InvertedIndex {
        let index = if records.len() < self.parallel_threshold {
            InvertedIndex::index_chunk(records, 0)
        } else {
            self.build_parallel(records)
        };
        log::debug!(
            "indexed {} records: {} terms, {} postings",
            index.record_count(),
            index.term_count(),
            index.posting_count()
        );
        index
    }

    pub fn build_dataset(&self, dataset: &Dataset) -> InvertedIndex {
        self.build(dataset.as_slice())
    }

    fn build_parallel(&self, records: &[String]) -> InvertedIndex {
        let chunk_size = records
            .len()
            .div_ceil(rayon::current_num_threads())
            .max(1);

        let partials: Vec<InvertedIndex> = records
            .par_chunks(chunk_size)
            .enumerate()
            .map(|(i, chunk)| InvertedIndex::index_chunk(chunk, i * chunk_size))
            .collect();
        log::trace!(
            "merging {} partial indexes (chunk size {chunk_size})",
            partials.len()
        );

        let mut merged = InvertedIndex::default();
        for partial in partials {
            merged.merge_following(partial);
        }
        merged
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}
