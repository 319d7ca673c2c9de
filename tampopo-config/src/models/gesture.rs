use serde::{Deserialize, Serialize};

use crate::constants::gesture as defaults;

/// Touch gesture recognition tuning.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Pixels the pointer must travel on either axis before the gesture
    /// commits to vertical or horizontal. Smaller values feel more eager but
    /// misread taps with finger jitter as drags.
    pub dead_zone_px: f32,
    /// Share of the previous smoothed velocity kept on each move sample; the
    /// remainder comes from the instantaneous velocity. Higher values give a
    /// steadier fling estimate that reacts slower to direction changes.
    pub velocity_retain: f32,
    /// Lower bound (ms) for the interval between samples when estimating
    /// velocity. Keeps bursts of coalesced events from producing spikes.
    pub min_sample_interval_ms: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            dead_zone_px: defaults::DEAD_ZONE_PX,
            velocity_retain: defaults::VELOCITY_RETAIN,
            min_sample_interval_ms: defaults::MIN_SAMPLE_INTERVAL_MS,
        }
    }
}
