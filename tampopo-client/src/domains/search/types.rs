//! Search domain types and state management

use tampopo_config::SearchConfig;
use tampopo_model::{ItemId, SearchCategory};

use super::service::SearchResults;

/// Ids of the matches shown under one category heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHits {
    pub category: SearchCategory,
    pub ids: Vec<ItemId>,
}

/// Main search domain state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    /// Query exactly as typed
    pub query: String,
    /// Folded query; empty means search mode is off
    pub normalized_query: String,
    /// Non-empty sections of the latest results, in display order
    pub sections: Vec<SectionHits>,
    /// Matches across all sections
    pub total: usize,
    /// Bumped each time search mode is entered so the results view can
    /// replay its entrance animation
    pub results_enter_key: u64,
    /// Per-category result cap
    pub result_cap: usize,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl SearchState {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            query: String::new(),
            normalized_query: String::new(),
            sections: Vec::new(),
            total: 0,
            results_enter_key: 0,
            result_cap: config.result_cap,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.normalized_query.is_empty()
    }

    /// Active query with nothing to show in any category.
    pub fn has_no_results(&self) -> bool {
        self.is_active() && self.total == 0
    }

    pub fn section(&self, category: SearchCategory) -> Option<&SectionHits> {
        self.sections
            .iter()
            .find(|section| section.category == category)
    }

    /// Drops the query and results. The enter key is kept so the next entry
    /// still produces a fresh value.
    pub fn clear(&mut self) {
        self.query.clear();
        self.normalized_query.clear();
        self.sections.clear();
        self.total = 0;
    }

    pub(crate) fn store_results(&mut self, results: &SearchResults<'_>) {
        self.sections = results
            .sections()
            .map(|section| SectionHits {
                category: section.category,
                ids: section.ids(),
            })
            .collect();
        self.total = results.total();
    }
}
