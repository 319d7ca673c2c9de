//! Core data model definitions shared across Tampopo crates.
#![allow(missing_docs)]

pub mod category;
pub mod error;
pub mod ids;
pub mod item;
pub mod prelude;

// Intentionally curated re-exports for downstream consumers.
pub use category::SearchCategory;
pub use error::{ModelError, Result as ModelResult};
pub use ids::ItemId;
pub use item::{ItemMetadata, SearchableItem};
