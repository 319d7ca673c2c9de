use tampopo_config::ScrollEffectsConfig;

use crate::infra::frame::{FrameHandle, FrameScheduler};

/// Header appearance derived from the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollEffects {
    /// Opacity of the header's bottom stroke, in [0, 1]
    pub stroke: f32,
    /// How far the hero backdrop has faded out, in [0, 1]
    pub background_fade: f32,
}

impl ScrollEffects {
    /// Resting state at the top of the page.
    pub const NONE: Self = Self {
        stroke: 0.0,
        background_fade: 0.0,
    };

    pub fn hero_opacity(&self) -> f32 {
        1.0 - self.background_fade
    }

    pub fn stroke_alpha(&self) -> f32 {
        self.stroke
    }
}

/// Linear ramp from 0 at offset 0 to 1 at `range`, clamped.
pub fn ramp(offset: f32, range: f32) -> f32 {
    if offset.is_nan() {
        return 0.0;
    }
    if range <= 0.0 {
        return if offset > 0.0 { 1.0 } else { 0.0 };
    }
    (offset / range).clamp(0.0, 1.0)
}

pub fn compute_effects(
    offset: f32,
    cfg: &ScrollEffectsConfig,
) -> ScrollEffects {
    ScrollEffects {
        stroke: ramp(offset, cfg.stroke_range_px),
        background_fade: ramp(offset, cfg.fade_range_px),
    }
}

/// Coalesces scroll notifications into at most one effect commit per frame.
///
/// Every scroll replaces the pending offset and re-requests the frame; only
/// the latest request commits.
#[derive(Debug, Default, Clone)]
pub struct ScrollEffectMapper {
    cfg: ScrollEffectsConfig,
    current: ScrollEffects,
    pending: Option<(FrameHandle, f32)>,
}

impl ScrollEffectMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with_config(cfg: ScrollEffectsConfig) -> Self {
        Self {
            cfg,
            ..Default::default()
        }
    }

    /// Last committed effects.
    pub fn current(&self) -> ScrollEffects {
        self.current
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn owns(&self, handle: FrameHandle) -> bool {
        matches!(self.pending, Some((pending, _)) if pending == handle)
    }

    pub fn on_scroll<S>(&mut self, offset: f32, scheduler: &mut S)
    where
        S: FrameScheduler + ?Sized,
    {
        if let Some((previous, _)) = self.pending.take() {
            scheduler.cancel_frame(previous);
        }
        let handle = scheduler.request_frame();
        self.pending = Some((handle, offset));
    }

    /// Commits the pending offset if `handle` is the latest request.
    pub fn on_frame(&mut self, handle: FrameHandle) -> Option<ScrollEffects> {
        match self.pending {
            Some((pending, offset)) if pending == handle => {
                self.pending = None;
                self.current = compute_effects(offset, &self.cfg);
                Some(self.current)
            }
            _ => None,
        }
    }

    /// Drops any pending commit.
    pub fn cancel<S>(&mut self, scheduler: &mut S)
    where
        S: FrameScheduler + ?Sized,
    {
        if let Some((handle, _)) = self.pending.take() {
            scheduler.cancel_frame(handle);
        }
    }
}
