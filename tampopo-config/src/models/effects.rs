use serde::{Deserialize, Serialize};

use crate::constants::effects as defaults;

/// Ranges driving the scroll-linked header effects.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScrollEffectsConfig {
    /// Scroll offset (px) at which the header stroke reaches full opacity.
    pub stroke_range_px: f32,
    /// Scroll offset (px) at which the backdrop has fully faded. Must be
    /// larger than `stroke_range_px` so the stroke lands first.
    pub fade_range_px: f32,
}

impl Default for ScrollEffectsConfig {
    fn default() -> Self {
        Self {
            stroke_range_px: defaults::STROKE_RANGE_PX,
            fade_range_px: defaults::FADE_RANGE_PX,
        }
    }
}
