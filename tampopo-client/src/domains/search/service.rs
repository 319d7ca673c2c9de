//! Query execution across the three categories.

use tampopo_model::{SearchCategory, SearchableItem};

use super::normalize::normalize;
use super::ranker::{RankedResults, rank};

/// Ranked matches for every category of one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults<'a> {
    /// The folded query these results were computed for.
    pub query: String,
    pub films: RankedResults<'a>,
    pub recipes: RankedResults<'a>,
    pub ingredients: RankedResults<'a>,
}

/// What the results area should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<'r, 'a> {
    /// No active query; the regular page content is shown.
    Inactive,
    /// Active query without a single match in any category.
    NoResults { query: &'r str },
    /// Non-empty sections in display order.
    Sections(Vec<&'r RankedResults<'a>>),
}

impl<'a> SearchResults<'a> {
    pub fn inactive() -> Self {
        Self {
            query: String::new(),
            films: RankedResults::empty(SearchCategory::Film),
            recipes: RankedResults::empty(SearchCategory::Recipe),
            ingredients: RankedResults::empty(SearchCategory::Ingredient),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn get(&self, category: SearchCategory) -> &RankedResults<'a> {
        match category {
            SearchCategory::Film => &self.films,
            SearchCategory::Recipe => &self.recipes,
            SearchCategory::Ingredient => &self.ingredients,
        }
    }

    /// Non-empty categories, in display order.
    pub fn sections(&self) -> impl Iterator<Item = &RankedResults<'a>> {
        SearchCategory::ALL
            .into_iter()
            .map(|category| self.get(category))
            .filter(|section| !section.is_empty())
    }

    /// True when no category has a match.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn total(&self) -> usize {
        self.films.len() + self.recipes.len() + self.ingredients.len()
    }

    pub fn outcome(&self) -> SearchOutcome<'_, 'a> {
        if !self.is_active() {
            SearchOutcome::Inactive
        } else if self.is_empty() {
            SearchOutcome::NoResults { query: &self.query }
        } else {
            SearchOutcome::Sections(self.sections().collect())
        }
    }
}

/// Folds `raw_query` once and ranks each category independently.
pub fn search_all<'a>(
    films: &'a [SearchableItem],
    recipes: &'a [SearchableItem],
    ingredients: &'a [SearchableItem],
    raw_query: &str,
    cap: usize,
) -> SearchResults<'a> {
    let query = normalize(raw_query);

    SearchResults {
        films: rank(films, SearchCategory::Film, &query, cap),
        recipes: rank(recipes, SearchCategory::Recipe, &query, cap),
        ingredients: rank(ingredients, SearchCategory::Ingredient, &query, cap),
        query,
    }
}
