//! Search domain - categorized, accent-insensitive title search
//!
//! Titles and queries are folded by [`normalize()`], matched on title or word
//! prefixes by [`matcher`], then ordered and capped per category by
//! [`ranker`]. [`SearchDomain`] ties the catalog and the session state
//! together for the UI.

pub mod catalog;
pub mod error;
pub mod matcher;
pub mod messages;
pub mod normalize;
pub mod ranker;
pub mod service;
pub mod types;
pub mod update;

use tampopo_config::SearchConfig;

pub use self::catalog::{SearchCatalog, load_films_from_dir};
pub use self::error::SearchError;
pub use self::matcher::{matches, matches_normalized};
pub use self::messages::{SearchEvent, SearchMessage};
pub use self::normalize::{normalize, normalize_optional};
pub use self::ranker::{RankedResults, rank};
pub use self::service::{SearchOutcome, SearchResults, search_all};
pub use self::types::{SearchState, SectionHits};

/// Search domain state container
#[derive(Debug, Default)]
pub struct SearchDomain {
    /// Session state
    pub state: SearchState,
    /// Items searched this session
    pub catalog: SearchCatalog,
}

impl SearchDomain {
    pub fn new(catalog: SearchCatalog, config: SearchConfig) -> Self {
        Self {
            state: SearchState::new(config),
            catalog,
        }
    }

    pub fn handle(&mut self, message: SearchMessage) -> Vec<SearchEvent> {
        update::update(&mut self.state, &self.catalog, message)
    }

    /// Results for the current query, borrowing items from the catalog.
    pub fn results(&self) -> SearchResults<'_> {
        self.catalog.search_normalized(
            self.state.normalized_query.clone(),
            self.state.result_cap,
        )
    }
}
