//! Filtering, ordering and capping of matches per category.

use std::cmp::Ordering;

use tampopo_model::{ItemId, SearchCategory, SearchableItem};

use super::matcher::matches_normalized;
use super::normalize::normalize;

/// Matches for one category, ordered and capped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedResults<'a> {
    pub category: SearchCategory,
    pub items: Vec<&'a SearchableItem>,
}

impl<'a> RankedResults<'a> {
    pub fn empty(category: SearchCategory) -> Self {
        Self {
            category,
            items: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a SearchableItem> + '_ {
        self.items.iter().copied()
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }

    pub fn titles(&self) -> Vec<&'a str> {
        self.items.iter().map(|item| item.title.as_str()).collect()
    }
}

/// Ranks `items` of `category` against an already folded query.
///
/// Items of other categories are skipped. Matches are sorted alphabetically
/// by title and at most `cap` are kept. An empty query yields no results.
pub fn rank<'a, I>(
    items: I,
    category: SearchCategory,
    normalized_query: &str,
    cap: usize,
) -> RankedResults<'a>
where
    I: IntoIterator<Item = &'a SearchableItem>,
{
    if normalized_query.is_empty() {
        return RankedResults::empty(category);
    }

    let folded: Vec<(String, &'a SearchableItem)> = items
        .into_iter()
        .filter(|item| item.category == category)
        .map(|item| (normalize(&item.title), item))
        .collect();

    rank_folded(
        folded.iter().map(|(key, item)| (key.as_str(), *item)),
        category,
        normalized_query,
        cap,
    )
}

/// Ranking over `(folded_title, item)` pairs whose titles were folded ahead
/// of time. Category filtering is the caller's job.
pub fn rank_folded<'k, 'a, I>(
    entries: I,
    category: SearchCategory,
    normalized_query: &str,
    cap: usize,
) -> RankedResults<'a>
where
    I: IntoIterator<Item = (&'k str, &'a SearchableItem)>,
{
    if normalized_query.is_empty() || cap == 0 {
        return RankedResults::empty(category);
    }

    let mut matched: Vec<(&'k str, &'a SearchableItem)> = entries
        .into_iter()
        .filter(|(key, _)| matches_normalized(key, normalized_query))
        .collect();

    matched.sort_by(|a, b| collation_order(*a, *b));
    matched.truncate(cap);

    RankedResults {
        category,
        items: matched.into_iter().map(|(_, item)| item).collect(),
    }
}

/// Alphabetical order approximating a case- and accent-insensitive locale
/// comparison: folded title first, then the raw title, then the id so the
/// order is total.
pub fn collation_order(
    (a_key, a): (&str, &SearchableItem),
    (b_key, b): (&str, &SearchableItem),
) -> Ordering {
    a_key
        .cmp(b_key)
        .then_with(|| a.title.cmp(&b.title))
        .then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn films(titles: &[&str]) -> Vec<SearchableItem> {
        titles
            .iter()
            .enumerate()
            .map(|(idx, title)| {
                SearchableItem::film(format!("film-{idx}"), *title).unwrap()
            })
            .collect()
    }

    #[test]
    fn orders_alphabetically_ignoring_case() {
        let items = films(&["dumplings", "Delicatessen", "Dersu Uzala"]);
        let ranked = rank(&items, SearchCategory::Film, "d", 12);
        assert_eq!(ranked.titles(), ["Delicatessen", "Dersu Uzala", "dumplings"]);
    }

    #[test]
    fn skips_other_categories() {
        let mut items = films(&["Dill Pickle Blues"]);
        items.push(SearchableItem::ingredient("dill", "Dill").unwrap());

        let ranked = rank(&items, SearchCategory::Ingredient, "dill", 12);
        assert_eq!(ranked.titles(), ["Dill"]);
        assert_eq!(ranked.category, SearchCategory::Ingredient);
    }

    #[test]
    fn cap_truncates_after_sorting() {
        let items = films(&["Sweet Bean", "Soul Kitchen", "Sideways", "Sushi"]);
        let ranked = rank(&items, SearchCategory::Film, "s", 2);
        assert_eq!(ranked.titles(), ["Sideways", "Soul Kitchen"]);
    }

    #[test]
    fn zero_cap_or_empty_query_is_empty() {
        let items = films(&["Tampopo"]);
        assert!(rank(&items, SearchCategory::Film, "t", 0).is_empty());
        assert!(rank(&items, SearchCategory::Film, "", 12).is_empty());
    }

    #[test]
    fn ties_break_on_id() {
        let items = vec![
            SearchableItem::film("b", "Chef").unwrap(),
            SearchableItem::film("a", "Chef").unwrap(),
        ];
        let ranked = rank(&items, SearchCategory::Film, "chef", 12);
        let ids: Vec<_> = ranked.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    proptest! {
        #[test]
        fn results_are_capped_sorted_and_matching(
            titles in prop::collection::vec("[A-Za-z]{1,6}( [A-Za-z]{1,6}){0,2}", 0..40),
            query in "[a-z]{1,2}",
            cap in 0usize..16
        ) {
            let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
            let items = films(&refs);
            let ranked = rank(&items, SearchCategory::Film, &query, cap);

            prop_assert!(ranked.len() <= cap);
            for item in ranked.iter() {
                prop_assert!(matches_normalized(&normalize(&item.title), &query));
            }
            let keys: Vec<String> =
                ranked.iter().map(|item| normalize(&item.title)).collect();
            prop_assert!(keys.windows(2).all(|pair| pair[0] <= pair[1]));
        }

        #[test]
        fn ranking_is_deterministic(
            titles in prop::collection::vec("[A-Za-z]{1,6}( [A-Za-z]{1,6}){0,2}", 0..40),
            query in "[a-z]{1,2}",
            cap in 0usize..16
        ) {
            let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
            let items = films(&refs);
            let first = rank(&items, SearchCategory::Film, &query, cap);
            let second = rank(&items, SearchCategory::Film, &query, cap);
            prop_assert_eq!(first.ids(), second.ids());

            // Input order does not leak into the result.
            let reversed: Vec<_> = items.iter().rev().cloned().collect();
            let third = rank(&reversed, SearchCategory::Film, &query, cap);
            prop_assert_eq!(first.ids(), third.ids());
        }
    }
}
