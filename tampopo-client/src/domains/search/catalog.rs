//! The searchable items of a session and where they come from.

use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::Deserialize;
use tampopo_model::{
    ItemId, ItemMetadata, ModelResult, SearchCategory, SearchableItem,
};

use super::error::SearchError;
use super::normalize::normalize;
use super::ranker::{RankedResults, rank_folded};
use super::service::SearchResults;

#[derive(Debug, Clone)]
struct CatalogEntry {
    folded_title: String,
    item: SearchableItem,
}

impl CatalogEntry {
    fn new(item: SearchableItem) -> Self {
        Self {
            folded_title: normalize(&item.title),
            item,
        }
    }
}

/// Items of all three categories with their folded titles cached, so a
/// keystroke only folds the query.
#[derive(Debug, Clone, Default)]
pub struct SearchCatalog {
    entries: Vec<CatalogEntry>,
}

impl SearchCatalog {
    pub fn new(items: impl IntoIterator<Item = SearchableItem>) -> Self {
        let mut catalog = Self::default();
        catalog.extend(items);
        catalog
    }

    pub fn push(&mut self, item: SearchableItem) {
        self.entries.push(CatalogEntry::new(item));
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = SearchableItem>) {
        self.entries.extend(items.into_iter().map(CatalogEntry::new));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = &SearchableItem> {
        self.entries.iter().map(|entry| &entry.item)
    }

    pub fn count(&self, category: SearchCategory) -> usize {
        self.items()
            .filter(|item| item.category == category)
            .count()
    }

    pub fn get(&self, id: &ItemId) -> Option<&SearchableItem> {
        self.items().find(|item| &item.id == id)
    }

    /// Folds `raw_query` and ranks every category.
    pub fn search(&self, raw_query: &str, cap: usize) -> SearchResults<'_> {
        self.search_normalized(normalize(raw_query), cap)
    }

    pub fn search_normalized(
        &self,
        normalized_query: String,
        cap: usize,
    ) -> SearchResults<'_> {
        SearchResults {
            films: self.rank(SearchCategory::Film, &normalized_query, cap),
            recipes: self.rank(SearchCategory::Recipe, &normalized_query, cap),
            ingredients: self.rank(
                SearchCategory::Ingredient,
                &normalized_query,
                cap,
            ),
            query: normalized_query,
        }
    }

    pub fn rank(
        &self,
        category: SearchCategory,
        normalized_query: &str,
        cap: usize,
    ) -> RankedResults<'_> {
        let entries = self
            .entries
            .iter()
            .filter(|entry| entry.item.category == category)
            .map(|entry| (entry.folded_title.as_str(), &entry.item));
        rank_folded(entries, category, normalized_query, cap)
    }

    /// Recipes and ingredients bundled with the app.
    pub fn builtin() -> ModelResult<Self> {
        Ok(Self::new([
            SearchableItem::recipe("devilled-eggs", "Devilled Eggs")?,
            SearchableItem::recipe("delicious", "Delicious")?,
            SearchableItem::ingredient("dill", "Dill")?,
            SearchableItem::ingredient("demerara-sugar", "Demerara Sugar")?,
        ]))
    }
}

/// On-disk film record. Every field is optional; the directory name fills in
/// for a missing id or title.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FilmRecord {
    id: Option<String>,
    title: Option<String>,
    director: Option<String>,
    year: Option<serde_json::Value>,
    country: Option<serde_json::Value>,
}

impl FilmRecord {
    fn into_item(self, dir_id: &str) -> Result<SearchableItem, SearchError> {
        let id = non_empty(self.id).unwrap_or_else(|| dir_id.to_string());
        let title = non_empty(self.title).unwrap_or_else(|| dir_id.to_string());
        let metadata = ItemMetadata {
            director: non_empty(self.director),
            year: self.year.as_ref().and_then(parse_year),
            unit_label: None,
            country: match self.country {
                Some(serde_json::Value::String(code)) => {
                    Some(code.to_lowercase())
                }
                _ => None,
            },
        };

        Ok(SearchableItem::film(id, title)?.with_metadata(metadata))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

fn parse_year(value: &serde_json::Value) -> Option<i32> {
    match value {
        serde_json::Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|year| year as i64))
            .and_then(|year| i32::try_from(year).ok()),
        serde_json::Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn read_json<T: serde::de::DeserializeOwned>(
    path: &Path,
) -> Result<T, SearchError> {
    let raw = fs::read_to_string(path).map_err(|source| SearchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SearchError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolves `dir_id` to a directory directly under `root`. Empty ids and
/// ids with separators or `.`/`..` are rejected.
fn film_dir(root: &Path, dir_id: &str) -> Result<PathBuf, SearchError> {
    let mut components = Path::new(dir_id).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) if name == dir_id => {
            Ok(root.join(name))
        }
        _ => Err(SearchError::InvalidFilmId {
            id: dir_id.to_string(),
        }),
    }
}

fn load_film(root: &Path, dir_id: &str) -> Result<SearchableItem, SearchError> {
    let record: FilmRecord =
        read_json(&film_dir(root, dir_id)?.join("film.json"))?;
    record.into_item(dir_id)
}

/// Loads films laid out as `root/index.json` (an array of ids) plus
/// `root/<id>/film.json` per id.
///
/// A missing or malformed index is an error. Individual films that cannot
/// be read or parsed, or whose id is not a plain directory name, are skipped
/// with a warning; the rest are returned in
/// index order.
pub fn load_films_from_dir(
    root: &Path,
) -> Result<Vec<SearchableItem>, SearchError> {
    let ids: Vec<String> = read_json(&root.join("index.json"))?;

    let mut films = Vec::with_capacity(ids.len());
    for dir_id in &ids {
        match load_film(root, dir_id) {
            Ok(film) => films.push(film),
            Err(err) => {
                log::warn!("Skipping film '{}': {}", dir_id, err);
            }
        }
    }

    log::debug!(
        "Loaded {} of {} films from {}",
        films.len(),
        ids.len(),
        root.display()
    );
    Ok(films)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_falls_back_to_directory_id() {
        let record: FilmRecord = serde_json::from_value(json!({
            "title": "",
            "country": "JP",
            "year": "1985",
            "director": "Jûzô Itami",
        }))
        .unwrap();
        let film = record.into_item("tampopo").unwrap();

        assert_eq!(film.id.as_str(), "tampopo");
        assert_eq!(film.title, "tampopo");
        assert_eq!(film.metadata.country.as_deref(), Some("jp"));
        assert_eq!(film.metadata.year, Some(1985));
    }

    #[test]
    fn non_string_country_is_dropped() {
        let record: FilmRecord =
            serde_json::from_value(json!({ "title": "Chef", "country": 7 }))
                .unwrap();
        let film = record.into_item("chef").unwrap();
        assert_eq!(film.metadata.country, None);
        assert_eq!(film.metadata.year, None);
    }

    #[test]
    fn film_ids_must_name_a_single_directory() {
        let root = Path::new("films");
        assert_eq!(film_dir(root, "tampopo").unwrap(), root.join("tampopo"));
        for bad in ["", ".", "..", "../secret", "a/b", "/etc", "tampopo/"] {
            assert!(
                matches!(
                    film_dir(root, bad),
                    Err(SearchError::InvalidFilmId { .. })
                ),
                "{bad:?} was accepted"
            );
        }
    }

    #[test]
    fn catalog_ranks_from_cached_titles() {
        let catalog = SearchCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.count(SearchCategory::Recipe), 2);

        let results = catalog.search("DE", 12);
        assert_eq!(results.recipes.titles(), ["Delicious", "Devilled Eggs"]);
        assert_eq!(results.ingredients.titles(), ["Demerara Sugar"]);
    }

    #[test]
    fn get_finds_by_id() {
        let catalog = SearchCatalog::builtin().unwrap();
        let id = ItemId::new("dill").unwrap();
        assert_eq!(catalog.get(&id).map(|item| item.title.as_str()), Some("Dill"));
    }
}
