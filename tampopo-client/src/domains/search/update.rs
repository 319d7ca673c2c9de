//! Search domain update logic

use super::catalog::SearchCatalog;
use super::messages::{SearchEvent, SearchMessage};
use super::normalize::normalize;
use super::types::SearchState;

/// Applies `message` and recomputes results synchronously.
pub fn update(
    state: &mut SearchState,
    catalog: &SearchCatalog,
    message: SearchMessage,
) -> Vec<SearchEvent> {
    match message {
        SearchMessage::QueryChanged(query) => {
            apply_query(state, catalog, query)
        }
        SearchMessage::Clear => apply_query(state, catalog, String::new()),
    }
}

fn apply_query(
    state: &mut SearchState,
    catalog: &SearchCatalog,
    query: String,
) -> Vec<SearchEvent> {
    let was_active = state.is_active();
    let normalized = normalize(&query);

    if normalized.is_empty() {
        state.clear();
        state.query = query;
        return if was_active {
            log::debug!("Search mode exited");
            vec![SearchEvent::ExitedSearchMode]
        } else {
            Vec::new()
        };
    }

    let mut events = Vec::with_capacity(2);
    let results = catalog.search_normalized(normalized, state.result_cap);
    state.query = query;
    state.normalized_query = results.query.clone();
    state.store_results(&results);

    if !was_active {
        state.results_enter_key += 1;
        log::debug!(
            "Search mode entered (enter key {})",
            state.results_enter_key
        );
        events.push(SearchEvent::EnteredSearchMode {
            enter_key: state.results_enter_key,
        });
    }

    log::trace!(
        "Query '{}' matched {} items",
        state.normalized_query,
        state.total
    );
    events.push(SearchEvent::ResultsUpdated { total: state.total });
    events
}
