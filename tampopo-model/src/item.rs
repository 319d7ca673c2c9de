use crate::category::SearchCategory;
use crate::error::ModelError;
use crate::ids::ItemId;

/// Optional descriptive fields carried alongside an item's title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemMetadata {
    pub director: Option<String>,
    pub year: Option<i32>,
    /// Measurement label for ingredients ("g", "bunch").
    pub unit_label: Option<String>,
    /// Lowercase ISO-ish country code used for flag lookup (`"jp"`).
    pub country: Option<String>,
}

/// A film, recipe or ingredient as seen by the search engine.
///
/// Owned by the external data source and read-only for the duration of a
/// search session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchableItem {
    pub id: ItemId,
    pub title: String,
    pub category: SearchCategory,
    #[cfg_attr(feature = "serde", serde(default))]
    pub metadata: ItemMetadata,
}

impl SearchableItem {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: SearchCategory,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            id: ItemId::new(id)?,
            title: title.into(),
            category,
            metadata: ItemMetadata::default(),
        })
    }

    pub fn film(
        id: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<Self, ModelError> {
        Self::new(id, title, SearchCategory::Film)
    }

    pub fn recipe(
        id: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<Self, ModelError> {
        Self::new(id, title, SearchCategory::Recipe)
    }

    pub fn ingredient(
        id: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<Self, ModelError> {
        Self::new(id, title, SearchCategory::Ingredient)
    }

    pub fn with_metadata(mut self, metadata: ItemMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Secondary line shown under the title, e.g. `"1985 • Jûzô Itami"`.
    pub fn subtitle(&self) -> Option<String> {
        let meta = &self.metadata;
        match (meta.year, meta.director.as_deref(), meta.unit_label.as_deref())
        {
            (Some(year), Some(director), _) => {
                Some(format!("{year} • {director}"))
            }
            (Some(year), None, _) => Some(year.to_string()),
            (None, Some(director), _) => Some(director.to_string()),
            (None, None, Some(unit)) => Some(unit.to_string()),
            (None, None, None) => None,
        }
    }
}
