use std::time::Instant;

use tampopo_config::InteractionConfig;

use super::messages::InteractionOutcome;
use crate::domains::ui::gesture::{
    GestureRecognizer, GestureResponse, InteractiveTarget, PointerSample,
};
use crate::domains::ui::momentum::{
    MomentumIntegrator, MomentumStep, StopReason,
};
use crate::domains::ui::scroll_effects::{ScrollEffectMapper, ScrollEffects};
use crate::infra::frame::{FrameHandle, FrameScheduler};
use crate::infra::viewport::ScrollViewport;

/// Drives one scroll surface: touch drags, the glide after a fling and the
/// header effects that follow the offset.
///
/// The controller owns no platform resources. The viewport and the frame
/// scheduler are passed in on every call.
#[derive(Debug, Default, Clone)]
pub struct InteractionController {
    gesture: GestureRecognizer,
    momentum: MomentumIntegrator,
    effects: ScrollEffectMapper,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with_config(cfg: &InteractionConfig) -> Self {
        Self {
            gesture: GestureRecognizer::new_with_config(cfg.gesture),
            momentum: MomentumIntegrator::new_with_config(cfg.momentum),
            effects: ScrollEffectMapper::new_with_config(cfg.effects),
        }
    }

    pub fn gesture(&self) -> &GestureRecognizer {
        &self.gesture
    }

    pub fn momentum(&self) -> &MomentumIntegrator {
        &self.momentum
    }

    pub fn effects(&self) -> &ScrollEffectMapper {
        &self.effects
    }

    /// Last committed header effects.
    pub fn current_effects(&self) -> ScrollEffects {
        self.effects.current()
    }

    pub fn pointer_down<T, S>(
        &mut self,
        sample: PointerSample,
        target: &T,
        scheduler: &mut S,
    ) -> InteractionOutcome
    where
        T: InteractiveTarget + ?Sized,
        S: FrameScheduler + ?Sized,
    {
        if self.gesture.begin(sample, target) == GestureResponse::Started {
            // A finger on the surface catches the glide.
            self.momentum.stop(scheduler);
        }
        InteractionOutcome::none()
    }

    pub fn pointer_move<V, S>(
        &mut self,
        sample: PointerSample,
        viewport: &mut V,
        scheduler: &mut S,
    ) -> InteractionOutcome
    where
        V: ScrollViewport + ?Sized,
        S: FrameScheduler + ?Sized,
    {
        match self.gesture.update(sample) {
            GestureResponse::Scroll {
                delta,
                prevent_default,
            } => {
                let target = viewport.scroll_top() + delta;
                viewport.set_scroll_top(target);
                self.effects.on_scroll(viewport.scroll_top(), scheduler);
                InteractionOutcome {
                    prevent_default,
                    ..InteractionOutcome::none()
                }
            }
            _ => InteractionOutcome::none(),
        }
    }

    /// Release; a vertical gesture continues as a glide. Lifting a pointer
    /// other than the tracked one changes nothing.
    pub fn pointer_up<S>(
        &mut self,
        sample: PointerSample,
        scheduler: &mut S,
    ) -> InteractionOutcome
    where
        S: FrameScheduler + ?Sized,
    {
        let response = self.gesture.end(sample.pointer);
        self.hand_off(response, sample.at, scheduler)
    }

    pub fn pointer_cancel<S>(
        &mut self,
        now: Instant,
        scheduler: &mut S,
    ) -> InteractionOutcome
    where
        S: FrameScheduler + ?Sized,
    {
        let response = self.gesture.cancel();
        self.hand_off(response, now, scheduler)
    }

    pub fn native_scroll<V, S>(
        &mut self,
        viewport: &V,
        scheduler: &mut S,
    ) -> InteractionOutcome
    where
        V: ScrollViewport + ?Sized,
        S: FrameScheduler + ?Sized,
    {
        self.effects.on_scroll(viewport.scroll_top(), scheduler);
        InteractionOutcome::none()
    }

    /// Routes a delivered frame to whichever component requested it.
    /// Frames nobody is waiting for are dropped.
    pub fn frame<V, S>(
        &mut self,
        handle: FrameHandle,
        now: Instant,
        viewport: &mut V,
        scheduler: &mut S,
    ) -> InteractionOutcome
    where
        V: ScrollViewport + ?Sized,
        S: FrameScheduler + ?Sized,
    {
        if self.momentum.owns(handle) {
            let step = self.momentum.on_frame(handle, now, viewport, scheduler);
            match step {
                MomentumStep::Continued { offset, .. }
                | MomentumStep::Stopped {
                    offset,
                    reason: StopReason::Settled,
                } => self.effects.on_scroll(offset, scheduler),
                _ => {}
            }
            return InteractionOutcome {
                momentum: Some(step),
                ..InteractionOutcome::none()
            };
        }

        InteractionOutcome {
            effects: self.effects.on_frame(handle),
            ..InteractionOutcome::none()
        }
    }

    /// Starts a glide without a preceding drag, replacing any running one.
    pub fn fling<S>(
        &mut self,
        velocity: f32,
        now: Instant,
        scheduler: &mut S,
    ) -> bool
    where
        S: FrameScheduler + ?Sized,
    {
        self.momentum.start(velocity, now, scheduler)
    }

    /// Cancels every outstanding frame request, e.g. when the surface goes
    /// away.
    pub fn shutdown<S>(&mut self, scheduler: &mut S)
    where
        S: FrameScheduler + ?Sized,
    {
        self.momentum.stop(scheduler);
        self.effects.cancel(scheduler);
        self.gesture.cancel();
    }

    fn hand_off<S>(
        &mut self,
        response: GestureResponse,
        now: Instant,
        scheduler: &mut S,
    ) -> InteractionOutcome
    where
        S: FrameScheduler + ?Sized,
    {
        let glide_started = match response {
            GestureResponse::Release {
                fling_velocity: Some(velocity),
            } => self.momentum.start(velocity, now, scheduler),
            _ => false,
        };
        InteractionOutcome {
            glide_started,
            ..InteractionOutcome::none()
        }
    }
}
