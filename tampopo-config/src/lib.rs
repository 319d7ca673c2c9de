//! Shared configuration library for Tampopo.
//!
//! This crate centralizes the tuning constants of the interaction engine
//! (gesture dead zone, momentum friction, effect ranges, result caps), their
//! loading from files or the environment, and the guard rails that reject
//! values the engine cannot work with.

pub mod constants;
pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{
    ConfigLoad, ConfigLoader, InteractionConfigSource, error::ConfigLoadError,
};
pub use models::effects::ScrollEffectsConfig;
pub use models::gesture::GestureConfig;
pub use models::momentum::MomentumConfig;
pub use models::search::SearchConfig;
pub use models::InteractionConfig;
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
