use std::time::Instant;

use tampopo_config::MomentumConfig;

use crate::infra::frame::{FrameHandle, FrameScheduler};
use crate::infra::viewport::ScrollViewport;

/// Smallest position change that counts as movement.
const MOVEMENT_EPSILON_PX: f32 = 1e-3;

/// Why a glide came to rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Velocity decayed under the threshold.
    Settled,
    /// The viewport refused to move; a scroll bound was reached.
    BoundReached,
}

/// Result of delivering a frame to the integrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MomentumStep {
    /// The frame was not the one the integrator is waiting for.
    Stale,
    /// Scrolled to `offset`; another frame has been requested.
    Continued { offset: f32, velocity: f32 },
    /// The glide ended on this frame, resting at `offset`.
    Stopped { offset: f32, reason: StopReason },
}

impl MomentumStep {
    pub fn offset(&self) -> Option<f32> {
        match self {
            MomentumStep::Stale => None,
            MomentumStep::Continued { offset, .. }
            | MomentumStep::Stopped { offset, .. } => Some(*offset),
        }
    }
}

/// Frame-driven glide after a fling.
///
/// Velocity is in px/ms, positive meaning the finger was moving down (content
/// scrolls towards the top). Friction is calibrated per reference frame and
/// scaled to the real frame interval, so the glide decays at the same rate on
/// 60 Hz and 120 Hz displays.
#[derive(Debug, Default, Clone)]
pub struct MomentumIntegrator {
    cfg: MomentumConfig,
    /// Frame the running glide waits for; `None` when idle
    frame: Option<FrameHandle>,
    velocity: f32,
    last_step_at: Option<Instant>,
}

impl MomentumIntegrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with_config(cfg: MomentumConfig) -> Self {
        Self {
            cfg,
            ..Default::default()
        }
    }

    pub fn is_running(&self) -> bool {
        self.frame.is_some()
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Whether `handle` is the frame this integrator is waiting for.
    pub fn owns(&self, handle: FrameHandle) -> bool {
        self.frame == Some(handle)
    }

    /// Starts a glide at `initial_velocity`, replacing any running one.
    ///
    /// Returns `false` when the velocity is too small to glide; nothing is
    /// scheduled and the viewport is left alone in that case.
    pub fn start<S>(
        &mut self,
        initial_velocity: f32,
        now: Instant,
        scheduler: &mut S,
    ) -> bool
    where
        S: FrameScheduler + ?Sized,
    {
        self.stop(scheduler);

        if !initial_velocity.is_finite()
            || initial_velocity.abs() < self.cfg.min_velocity_px_per_ms
        {
            return false;
        }

        self.velocity = initial_velocity;
        self.last_step_at = Some(now);
        self.frame = Some(scheduler.request_frame());
        log::debug!("Momentum started at {:.3} px/ms", initial_velocity);
        true
    }

    /// Cancels the glide. Safe to call at any time, any number of times.
    pub fn stop<S>(&mut self, scheduler: &mut S)
    where
        S: FrameScheduler + ?Sized,
    {
        if let Some(handle) = self.frame.take() {
            scheduler.cancel_frame(handle);
            log::debug!("Momentum stopped at {:.3} px/ms", self.velocity);
        }
        self.velocity = 0.0;
        self.last_step_at = None;
    }

    /// Advances the glide by one frame.
    pub fn on_frame<V, S>(
        &mut self,
        handle: FrameHandle,
        now: Instant,
        viewport: &mut V,
        scheduler: &mut S,
    ) -> MomentumStep
    where
        V: ScrollViewport + ?Sized,
        S: FrameScheduler + ?Sized,
    {
        if !self.owns(handle) {
            return MomentumStep::Stale;
        }
        // The delivered frame is consumed either way.
        self.frame = None;

        let last = self.last_step_at.unwrap_or(now);
        let elapsed_ms =
            now.saturating_duration_since(last).as_secs_f32() * 1000.0;
        let dt = elapsed_ms.max(self.cfg.min_frame_interval_ms);
        self.last_step_at = Some(now);

        let max_step = self.cfg.max_step_px;
        let step = (self.velocity * dt).clamp(-max_step, max_step);

        let before = viewport.scroll_top();
        viewport.set_scroll_top(before - step);
        let after = viewport.scroll_top();

        if (after - before).abs() < MOVEMENT_EPSILON_PX {
            return self.finish(after, StopReason::BoundReached);
        }

        self.velocity *= self
            .cfg
            .friction_per_frame
            .powf(dt / self.cfg.reference_frame_ms);

        if self.velocity.abs() < self.cfg.min_velocity_px_per_ms {
            return self.finish(after, StopReason::Settled);
        }

        self.frame = Some(scheduler.request_frame());
        log::trace!(
            "Momentum step {:.2}px over {:.2}ms -> offset {:.1}",
            step,
            dt,
            after
        );
        MomentumStep::Continued {
            offset: after,
            velocity: self.velocity,
        }
    }

    fn finish(&mut self, offset: f32, reason: StopReason) -> MomentumStep {
        log::debug!("Momentum ended ({:?}) at offset {:.1}", reason, offset);
        self.velocity = 0.0;
        self.last_step_at = None;
        MomentumStep::Stopped { offset, reason }
    }
}
