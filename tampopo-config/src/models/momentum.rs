use serde::{Deserialize, Serialize};

use crate::constants::momentum as defaults;

/// Kinetic glide tuning applied after a vertical gesture is released.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MomentumConfig {
    /// Velocity multiplier per reference frame. Must be in (0, 1); values
    /// near 1 glide for a long time, lower values stop abruptly.
    pub friction_per_frame: f32,
    /// Frame duration (ms) the friction is calibrated against. Steps of other
    /// lengths decay by `friction ^ (dt / reference_frame_ms)`.
    pub reference_frame_ms: f32,
    /// Cap on the displacement a single step may apply, so a long frame stall
    /// does not produce a visible jump.
    pub max_step_px: f32,
    /// The glide ends once |velocity| drops below this (px/ms).
    pub min_velocity_px_per_ms: f32,
    /// Floor (ms) for the interval between steps, guarding against two frame
    /// callbacks carrying the same timestamp.
    pub min_frame_interval_ms: f32,
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self {
            friction_per_frame: defaults::FRICTION_PER_FRAME,
            reference_frame_ms: defaults::REFERENCE_FRAME_MS,
            max_step_px: defaults::MAX_STEP_PX,
            min_velocity_px_per_ms: defaults::MIN_VELOCITY_PX_PER_MS,
            min_frame_interval_ms: defaults::MIN_FRAME_INTERVAL_MS,
        }
    }
}
