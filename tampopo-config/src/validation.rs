use thiserror::Error;

use super::models::InteractionConfig;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigGuardRailError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("{field} {reason}")]
    OutOfRange { field: &'static str, reason: String },
    #[error(
        "effects.stroke_range_px ({stroke}) must be smaller than effects.fade_range_px ({fade})"
    )]
    EffectRangeOrder { stroke: f32, fade: f32 },
    #[error("search.result_cap must be at least 1")]
    EmptyResultCap,
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

pub fn apply_guard_rails(
    config: &InteractionConfig,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    let gesture = &config.gesture;
    finite("gesture.dead_zone_px", gesture.dead_zone_px)?;
    if gesture.dead_zone_px < 0.0 {
        return Err(ConfigGuardRailError::OutOfRange {
            field: "gesture.dead_zone_px",
            reason: "must not be negative".into(),
        });
    }
    if gesture.dead_zone_px == 0.0 {
        warnings.push_with_hint(
            "gesture.dead_zone_px is 0; any finger jitter will lock an axis",
            "A dead zone of 4-8 px is typical for touch screens",
        );
    }
    unit_interval(
        "gesture.velocity_retain",
        gesture.velocity_retain,
        Bounds::ClosedOpen,
    )?;
    positive(
        "gesture.min_sample_interval_ms",
        gesture.min_sample_interval_ms,
    )?;

    let momentum = &config.momentum;
    unit_interval(
        "momentum.friction_per_frame",
        momentum.friction_per_frame,
        Bounds::Open,
    )?;
    if momentum.friction_per_frame < 0.8 {
        warnings.push_with_hint(
            format!(
                "momentum.friction_per_frame is {}; glides will stop almost immediately",
                momentum.friction_per_frame
            ),
            "Values between 0.9 and 0.97 feel closest to native scrolling",
        );
    }
    positive("momentum.reference_frame_ms", momentum.reference_frame_ms)?;
    positive("momentum.max_step_px", momentum.max_step_px)?;
    positive(
        "momentum.min_velocity_px_per_ms",
        momentum.min_velocity_px_per_ms,
    )?;
    positive(
        "momentum.min_frame_interval_ms",
        momentum.min_frame_interval_ms,
    )?;

    let effects = &config.effects;
    positive("effects.stroke_range_px", effects.stroke_range_px)?;
    positive("effects.fade_range_px", effects.fade_range_px)?;
    if effects.stroke_range_px >= effects.fade_range_px {
        return Err(ConfigGuardRailError::EffectRangeOrder {
            stroke: effects.stroke_range_px,
            fade: effects.fade_range_px,
        });
    }

    if config.search.result_cap == 0 {
        return Err(ConfigGuardRailError::EmptyResultCap);
    }
    if config.search.result_cap > 100 {
        warnings.push(format!(
            "search.result_cap is {}; large sections re-render on every keystroke",
            config.search.result_cap
        ));
    }

    Ok(warnings)
}

enum Bounds {
    /// (0, 1)
    Open,
    /// [0, 1)
    ClosedOpen,
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigGuardRailError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigGuardRailError::NotFinite { field, value })
    }
}

fn positive(
    field: &'static str,
    value: f32,
) -> Result<(), ConfigGuardRailError> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(ConfigGuardRailError::OutOfRange {
            field,
            reason: format!("must be greater than 0, got {value}"),
        });
    }
    Ok(())
}

fn unit_interval(
    field: &'static str,
    value: f32,
    bounds: Bounds,
) -> Result<(), ConfigGuardRailError> {
    finite(field, value)?;
    let ok = match bounds {
        Bounds::Open => value > 0.0 && value < 1.0,
        Bounds::ClosedOpen => (0.0..1.0).contains(&value),
    };
    if ok {
        return Ok(());
    }
    let interval = match bounds {
        Bounds::Open => "(0, 1)",
        Bounds::ClosedOpen => "[0, 1)",
    };
    Err(ConfigGuardRailError::OutOfRange {
        field,
        reason: format!("must be within {interval}, got {value}"),
    })
}
