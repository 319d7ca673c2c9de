use std::fmt::Display;
use std::fmt::Formatter;

/// Category a searchable item belongs to.
///
/// Ranked results never mix categories; each one renders as its own section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SearchCategory {
    Film = 0,
    Recipe = 1,
    Ingredient = 2,
}

impl SearchCategory {
    /// All categories in section display order.
    pub const ALL: [Self; 3] = [Self::Film, Self::Recipe, Self::Ingredient];

    /// Heading rendered above the category's result section.
    pub fn section_title(self) -> &'static str {
        match self {
            SearchCategory::Film => "Films",
            SearchCategory::Recipe => "Recipes",
            SearchCategory::Ingredient => "Ingredients",
        }
    }

    /// Asset key the presentation layer resolves to the category icon.
    pub fn icon_key(self) -> &'static str {
        match self {
            SearchCategory::Film => "icon-film",
            SearchCategory::Recipe => "icon-recipe",
            SearchCategory::Ingredient => "icon-ingredient",
        }
    }
}

impl Display for SearchCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCategory::Film => write!(f, "Film"),
            SearchCategory::Recipe => write!(f, "Recipe"),
            SearchCategory::Ingredient => write!(f, "Ingredient"),
        }
    }
}

impl TryFrom<u8> for SearchCategory {
    type Error = crate::error::ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SearchCategory::Film),
            1 => Ok(SearchCategory::Recipe),
            2 => Ok(SearchCategory::Ingredient),
            other => Err(crate::error::ModelError::InvalidItem(format!(
                "unknown category discriminant {other}"
            ))),
        }
    }
}
