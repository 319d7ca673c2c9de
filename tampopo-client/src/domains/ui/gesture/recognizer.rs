use std::time::Instant;

use tampopo_config::GestureConfig;

use super::messages::{
    Axis, GesturePhase, GestureResponse, PointerId, PointerSample,
};
use super::target::InteractiveTarget;

/// Per-gesture tracking data. Reset to default when a gesture ends.
#[derive(Debug, Default, Clone)]
pub struct GestureState {
    /// Whether a gesture is being tracked
    pub active: bool,
    /// Pointer that started the gesture; other pointers are ignored
    pub pointer: Option<PointerId>,
    pub start_x: f32,
    pub start_y: f32,
    /// Y of the last sample applied as a scroll
    pub last_y: f32,
    pub locked_axis: Option<Axis>,
    pub last_sample_at: Option<Instant>,
    /// Exponentially smoothed vertical velocity in px/ms (signed, finger
    /// direction)
    pub smoothed_velocity: f32,
}

/// Turns raw pointer samples into axis-locked vertical scroll deltas and a
/// release velocity.
#[derive(Debug, Default, Clone)]
pub struct GestureRecognizer {
    cfg: GestureConfig,
    state: GestureState,
}

impl GestureRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with_config(cfg: GestureConfig) -> Self {
        Self {
            cfg,
            state: GestureState::default(),
        }
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    pub fn phase(&self) -> GesturePhase {
        if self.state.active {
            GesturePhase::Tracking(self.state.locked_axis)
        } else {
            GesturePhase::Idle
        }
    }

    pub fn velocity(&self) -> f32 {
        self.state.smoothed_velocity
    }

    /// Starts tracking unless the pointer landed on an interactive control
    /// or a gesture is already in progress.
    pub fn begin<T>(
        &mut self,
        sample: PointerSample,
        target: &T,
    ) -> GestureResponse
    where
        T: InteractiveTarget + ?Sized,
    {
        if target.is_interactive() || self.state.active {
            return GestureResponse::Ignored;
        }

        self.state = GestureState {
            active: true,
            pointer: Some(sample.pointer),
            start_x: sample.x,
            start_y: sample.y,
            last_y: sample.y,
            locked_axis: None,
            last_sample_at: Some(sample.at),
            smoothed_velocity: 0.0,
        };
        GestureResponse::Started
    }

    pub fn update(&mut self, sample: PointerSample) -> GestureResponse {
        if !self.state.active || self.state.pointer != Some(sample.pointer) {
            return GestureResponse::Ignored;
        }

        let axis = match self.state.locked_axis {
            Some(axis) => axis,
            None => match self.try_lock(&sample) {
                Some(axis) => axis,
                None => return GestureResponse::Pending,
            },
        };

        match axis {
            Axis::Horizontal => GestureResponse::Passthrough,
            Axis::Vertical => self.track_vertical(&sample),
        }
    }

    /// Ends the gesture when `pointer` is the tracked one, handing over the
    /// fling velocity when it was a vertical drag. Releases of other
    /// pointers leave the gesture running.
    pub fn end(&mut self, pointer: PointerId) -> GestureResponse {
        if self.state.active && self.state.pointer != Some(pointer) {
            return GestureResponse::Ignored;
        }
        self.release()
    }

    /// Platform cancellation ends the gesture like a release, whichever
    /// pointer it concerns.
    pub fn cancel(&mut self) -> GestureResponse {
        self.release()
    }

    fn release(&mut self) -> GestureResponse {
        let fling_velocity = (self.state.active
            && self.state.locked_axis == Some(Axis::Vertical))
        .then_some(self.state.smoothed_velocity);
        self.state = GestureState::default();
        GestureResponse::Release { fling_velocity }
    }

    fn try_lock(&mut self, sample: &PointerSample) -> Option<Axis> {
        let dx = (sample.x - self.state.start_x).abs();
        let dy = (sample.y - self.state.start_y).abs();
        let dead_zone = self.cfg.dead_zone_px;
        if dx <= dead_zone && dy <= dead_zone {
            return None;
        }

        let axis = if dy >= dx {
            Axis::Vertical
        } else {
            Axis::Horizontal
        };
        log::debug!(
            "Gesture locked to {:?} (dx={:.1}, dy={:.1})",
            axis,
            dx,
            dy
        );
        self.state.locked_axis = Some(axis);
        Some(axis)
    }

    fn track_vertical(&mut self, sample: &PointerSample) -> GestureResponse {
        let state = &mut self.state;
        let dy = sample.y - state.last_y;
        let elapsed_ms = state
            .last_sample_at
            .map(|last| {
                sample.at.saturating_duration_since(last).as_secs_f32() * 1000.0
            })
            .unwrap_or(0.0);
        let dt = elapsed_ms.max(self.cfg.min_sample_interval_ms);

        let retain = self.cfg.velocity_retain;
        state.smoothed_velocity =
            state.smoothed_velocity * retain + (dy / dt) * (1.0 - retain);
        state.last_y = sample.y;
        state.last_sample_at = Some(sample.at);

        GestureResponse::Scroll {
            delta: -dy,
            prevent_default: true,
        }
    }
}
