//! Stable filtering of the dataset, memoized on (dataset identity, committed query).

use super::matcher::Query;
use super::record::{Dataset, EmojiRecord};

/// Indices of matching records, in dataset order.
pub fn filter_indices(dataset: &[EmojiRecord], raw_query: &str) -> Vec<usize> {
    let query = Query::parse(raw_query);
    if query.matches_everything() {
        return (0..dataset.len()).collect();
    }

    dataset
        .iter()
        .enumerate()
        .filter(|(_, record)| query.matches(record))
        .map(|(idx, _)| idx)
        .collect()
}

/// Matching records, in dataset order.
pub fn filter<'a>(dataset: &'a [EmojiRecord], raw_query: &str) -> Vec<&'a EmojiRecord> {
    filter_indices(dataset, raw_query)
        .into_iter()
        .map(|idx| &dataset[idx])
        .collect()
}

/// Holds the last computed view and recomputes only when an input changed.
#[derive(Debug, Default)]
pub struct FilterPipeline {
    dataset: Dataset,
    query: String,
    indices: Vec<usize>,
    computed: bool,
    recomputations: u64,
}

impl FilterPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the cached view up to date. Returns true if it was recomputed.
    pub fn refresh(&mut self, dataset: &Dataset, query: &str) -> bool {
        if self.computed && self.dataset.same_as(dataset) && self.query == query {
            return false;
        }

        self.indices = filter_indices(dataset, query);
        self.dataset = dataset.clone();
        self.query = query.to_string();
        self.computed = true;
        self.recomputations += 1;

        tracing::debug!(
            query = %self.query,
            matched = self.indices.len(),
            total = self.dataset.len(),
            "Recomputed visible emoji"
        );
        true
    }

    /// Refresh and hand back the view in one call.
    pub fn apply(&mut self, dataset: &Dataset, query: &str) -> Vec<&EmojiRecord> {
        self.refresh(dataset, query);
        self.records().collect()
    }

    /// Records of the cached view, in dataset order
    pub fn records(&self) -> impl Iterator<Item = &EmojiRecord> + '_ {
        self.indices.iter().map(move |&idx| &self.dataset[idx])
    }

    /// Dataset positions of the cached view
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn get(&self, position: usize) -> Option<&EmojiRecord> {
        self.indices.get(position).map(|&idx| &self.dataset[idx])
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of times the view was actually recomputed
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}
