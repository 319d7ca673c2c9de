pub mod effects;
pub mod gesture;
pub mod momentum;
pub mod search;

use serde::{Deserialize, Serialize};

use effects::ScrollEffectsConfig;
use gesture::GestureConfig;
use momentum::MomentumConfig;
use search::SearchConfig;

/// Top-level tuning for the interaction engine. Every section is optional in
/// config files; missing fields fall back to the compiled defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct InteractionConfig {
    pub gesture: GestureConfig,
    pub momentum: MomentumConfig,
    pub effects: ScrollEffectsConfig,
    pub search: SearchConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_final_revision() {
        let cfg = InteractionConfig::default();
        assert_eq!(cfg.gesture.dead_zone_px, 6.0);
        assert_eq!(cfg.momentum.friction_per_frame, 0.94);
        assert_eq!(cfg.momentum.max_step_px, 72.0);
        assert_eq!(cfg.momentum.min_velocity_px_per_ms, 0.015);
        assert_eq!(cfg.effects.stroke_range_px, 12.0);
        assert_eq!(cfg.effects.fade_range_px, 24.0);
        assert_eq!(cfg.search.result_cap, 12);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg: InteractionConfig = toml::from_str(
            r#"
            [momentum]
            friction_per_frame = 0.9
            "#,
        )
        .unwrap();
        assert_eq!(cfg.momentum.friction_per_frame, 0.9);
        assert_eq!(cfg.momentum.max_step_px, 72.0);
        assert_eq!(cfg.gesture, GestureConfig::default());
    }
}
