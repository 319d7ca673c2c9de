//! Client focused snapshot of the types surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in tampopo-client or other presentation layers.

pub use super::category::SearchCategory;
pub use super::error::ModelError;
pub use super::ids::ItemId;
pub use super::item::{ItemMetadata, SearchableItem};
