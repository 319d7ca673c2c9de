//! Search domain messages

/// Search domain messages
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchMessage {
    /// The search field changed
    QueryChanged(String),
    /// Clear search and results
    Clear,
}

/// Events emitted by the search domain for other domains
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchEvent {
    /// The query went from blank to non-blank
    EnteredSearchMode { enter_key: u64 },
    /// Results were recomputed for a non-blank query
    ResultsUpdated { total: usize },
    /// The query went back to blank; regular content should be shown
    ExitedSearchMode,
}
