//! Compiled defaults for every tunable of the interaction engine.
//!
//! These are the values the final page revision shipped with. Earlier
//! revisions used different friction and fade ranges; they are superseded.

/// Gesture recognition defaults
pub mod gesture {
    /// Displacement (px) on either axis before an axis is locked.
    pub const DEAD_ZONE_PX: f32 = 6.0;
    /// Weight kept from the previous smoothed velocity on each move sample.
    pub const VELOCITY_RETAIN: f32 = 0.8;
    /// Floor for the interval between two move samples (ms).
    pub const MIN_SAMPLE_INTERVAL_MS: f32 = 16.67;
}

/// Momentum (post-release glide) defaults
pub mod momentum {
    /// Velocity multiplier applied per reference frame.
    pub const FRICTION_PER_FRAME: f32 = 0.94;
    /// Frame duration the friction constant is calibrated against (ms).
    pub const REFERENCE_FRAME_MS: f32 = 16.67;
    /// Largest displacement a single step may apply (px).
    pub const MAX_STEP_PX: f32 = 72.0;
    /// Glide stops once |velocity| falls below this (px/ms).
    pub const MIN_VELOCITY_PX_PER_MS: f32 = 0.015;
    /// Floor for the interval between two steps (ms).
    pub const MIN_FRAME_INTERVAL_MS: f32 = 1.0;
}

/// Scroll-driven header effect defaults
pub mod effects {
    /// Offset (px) over which the header stroke ramps from 0 to 1.
    pub const STROKE_RANGE_PX: f32 = 12.0;
    /// Offset (px) over which the backdrop fade ramps from 0 to 1.
    pub const FADE_RANGE_PX: f32 = 24.0;
}

/// Search defaults
pub mod search {
    /// Maximum results rendered per category section.
    pub const RESULT_CAP: usize = 12;
}

/// Environment variable naming a TOML or JSON config file.
pub const CONFIG_PATH_ENV: &str = "TAMPOPO_INTERACTION_CONFIG_PATH";
/// Environment variable carrying inline JSON config.
pub const CONFIG_JSON_ENV: &str = "TAMPOPO_INTERACTION_CONFIG_JSON";

/// Files probed, in order, when no environment override is set.
pub const DEFAULT_CONFIG_CANDIDATES: &[&str] = &[
    "interaction.toml",
    "interaction.json",
    "config/interaction.toml",
    "config/interaction.json",
];
