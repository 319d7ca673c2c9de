use std::time::{Duration, Instant};

use tampopo_client::domains::ui::gesture::{
    PointerId, PointerSample, TargetRole,
};
use tampopo_client::domains::ui::interaction::{
    InteractionController, InteractionMessage, InteractionOutcome, update,
};
use tampopo_client::domains::ui::momentum::{MomentumStep, StopReason};
use tampopo_client::infra::{
    ManualFrameScheduler, ScrollViewport, SimulatedViewport,
};
use tampopo_config::InteractionConfig;

const FINGER: PointerId = PointerId(7);
const THUMB: PointerId = PointerId(8);

struct Harness {
    t0: Instant,
    controller: InteractionController,
    viewport: SimulatedViewport,
    scheduler: ManualFrameScheduler,
}

impl Harness {
    fn new(scroll_top: f32) -> Self {
        Self {
            t0: Instant::now(),
            controller: InteractionController::new_with_config(
                &InteractionConfig::default(),
            ),
            viewport: SimulatedViewport::new(20_000.0, 800.0)
                .with_scroll_top(scroll_top),
            scheduler: ManualFrameScheduler::new(),
        }
    }

    fn at(&self, ms: u64) -> Instant {
        self.t0 + Duration::from_millis(ms)
    }

    fn sample(&self, ms: u64, x: f32, y: f32) -> PointerSample {
        PointerSample::new(FINGER, x, y, self.at(ms))
    }

    fn send(&mut self, message: InteractionMessage) -> InteractionOutcome {
        update(
            &mut self.controller,
            message,
            &mut self.viewport,
            &mut self.scheduler,
        )
    }

    fn down(&mut self, ms: u64, x: f32, y: f32) -> InteractionOutcome {
        let sample = self.sample(ms, x, y);
        self.send(InteractionMessage::PointerDown {
            sample,
            target: TargetRole::Content,
        })
    }

    fn drag(&mut self, ms: u64, x: f32, y: f32) -> InteractionOutcome {
        let sample = self.sample(ms, x, y);
        self.send(InteractionMessage::PointerMove(sample))
    }

    fn up(&mut self, ms: u64) -> InteractionOutcome {
        let sample = self.sample(ms, 0.0, 0.0);
        self.send(InteractionMessage::PointerUp(sample))
    }

    /// Delivers every pending frame at `ms`.
    fn frame(&mut self, ms: u64) -> Vec<InteractionOutcome> {
        let now = self.at(ms);
        self.scheduler
            .take_due()
            .into_iter()
            .map(|handle| self.send(InteractionMessage::Frame(handle, now)))
            .collect()
    }

    /// Steps 16 ms frames until nothing is pending.
    fn run_to_rest(&mut self, mut ms: u64) -> Vec<MomentumStep> {
        let mut steps = Vec::new();
        while self.scheduler.has_pending() {
            ms += 16;
            steps.extend(self.frame(ms).into_iter().filter_map(|o| o.momentum));
            assert!(steps.len() < 2_000, "glide never settled");
        }
        steps
    }
}

#[test]
fn small_moves_never_lock_or_scroll() {
    let mut h = Harness::new(500.0);
    h.down(0, 100.0, 300.0);
    for (ms, dx, dy) in [(16, 3.0, -4.0), (32, -5.0, 6.0), (48, 6.0, -6.0)] {
        let outcome = h.drag(ms, 100.0 + dx, 300.0 + dy);
        assert!(!outcome.prevent_default);
    }
    assert_eq!(h.viewport.scroll_top(), 500.0);

    let outcome = h.up(60);
    assert!(!outcome.glide_started);
    assert!(!h.scheduler.has_pending());
}

#[test]
fn vertical_lock_survives_horizontal_moves() {
    let mut h = Harness::new(500.0);
    h.down(0, 100.0, 300.0);
    h.drag(16, 100.0, 280.0);
    assert_eq!(h.viewport.scroll_top(), 520.0);

    // Mostly sideways, still scrolls by the vertical component only.
    let outcome = h.drag(32, 180.0, 270.0);
    assert!(outcome.prevent_default);
    assert_eq!(h.viewport.scroll_top(), 530.0);
}

#[test]
fn horizontal_swipe_is_left_alone() {
    let mut h = Harness::new(500.0);
    h.down(0, 100.0, 300.0);
    let outcome = h.drag(16, 140.0, 310.0);
    assert!(!outcome.prevent_default);
    h.drag(32, 200.0, 400.0);

    assert_eq!(h.viewport.scroll_top(), 500.0);
    assert!(!h.up(40).glide_started);
}

#[test]
fn fling_glides_decays_and_commits_effects() {
    let mut h = Harness::new(0.0);
    h.down(0, 100.0, 700.0);
    for (i, y) in [640.0, 580.0, 520.0, 460.0].into_iter().enumerate() {
        h.drag(16 * (i as u64 + 1), 100.0, y);
    }
    let released_at = h.viewport.scroll_top();
    assert_eq!(released_at, 240.0);

    assert!(h.up(70).glide_started);
    let steps = h.run_to_rest(70);

    assert!(matches!(
        steps.last(),
        Some(MomentumStep::Stopped {
            reason: StopReason::Settled,
            ..
        })
    ));
    assert!(h.viewport.scroll_top() > released_at);
    assert!(!h.controller.momentum().is_running());
    assert_eq!(h.controller.momentum().velocity(), 0.0);

    let effects = h.controller.current_effects();
    assert_eq!(effects.stroke, 1.0);
    assert_eq!(effects.hero_opacity(), 0.0);
}

#[test]
fn touching_the_surface_catches_the_glide() {
    let mut h = Harness::new(5_000.0);
    assert!(h.controller.fling(-2.0, h.t0, &mut h.scheduler));
    h.frame(16);
    let caught_at = h.viewport.scroll_top();
    assert!(caught_at > 5_000.0);

    h.down(20, 100.0, 300.0);
    assert!(!h.controller.momentum().is_running());

    // Whatever the host still delivers must not move the content.
    let outcomes = h.frame(32);
    assert!(outcomes.iter().all(|o| o.momentum.is_none()));
    assert_eq!(h.viewport.scroll_top(), caught_at);
}

#[test]
fn stale_frames_are_ignored() {
    let mut h = Harness::new(5_000.0);
    h.controller.fling(1.0, h.t0, &mut h.scheduler);
    let stale = h.scheduler.pending()[0];
    h.controller.fling(1.0, h.t0, &mut h.scheduler);
    assert!(!h.scheduler.is_pending(stale));

    let now = h.at(16);
    let outcome = h.send(InteractionMessage::Frame(stale, now));
    assert_eq!(outcome, InteractionOutcome::default());
    assert_eq!(h.viewport.scroll_top(), 5_000.0);
}

#[test]
fn zero_velocity_release_changes_nothing() {
    let mut h = Harness::new(300.0);
    assert!(!h.controller.fling(0.0, h.t0, &mut h.scheduler));
    assert!(!h.scheduler.has_pending());
    assert_eq!(h.viewport.scroll_top(), 300.0);
}

#[test]
fn glide_stops_at_the_top() {
    let mut h = Harness::new(40.0);
    h.controller.fling(3.0, h.t0, &mut h.scheduler);
    let steps = h.run_to_rest(0);

    assert_eq!(
        steps.last(),
        Some(&MomentumStep::Stopped {
            offset: 0.0,
            reason: StopReason::BoundReached
        })
    );
    assert_eq!(h.viewport.scroll_top(), 0.0);
}

#[test]
fn native_scroll_commits_on_the_next_frame() {
    let mut h = Harness::new(0.0);
    h.viewport.set_scroll_top(6.0);
    h.send(InteractionMessage::NativeScroll);
    h.viewport.set_scroll_top(12.0);
    h.send(InteractionMessage::NativeScroll);
    assert_eq!(h.scheduler.pending().len(), 1);

    let outcomes = h.frame(16);
    let committed: Vec<_> = outcomes.iter().filter_map(|o| o.effects).collect();
    assert_eq!(committed.len(), 1);
    assert_eq!(committed[0].stroke, 1.0);
    assert_eq!(committed[0].background_fade, 0.5);
}

#[test]
fn cancel_hands_off_like_release() {
    let mut h = Harness::new(1_000.0);
    h.down(0, 100.0, 300.0);
    h.drag(16, 100.0, 200.0);
    let outcome = h.send(InteractionMessage::PointerCancel(h.at(20)));
    assert!(outcome.glide_started);
    assert!(h.controller.momentum().is_running());
    assert!(!h.controller.gesture().is_active());
}

#[test]
fn second_finger_lifting_keeps_the_drag() {
    let mut h = Harness::new(0.0);
    h.down(0, 100.0, 700.0);
    h.drag(16, 100.0, 650.0);
    assert_eq!(h.viewport.scroll_top(), 50.0);

    let thumb_down = PointerSample::new(THUMB, 200.0, 500.0, h.at(20));
    h.send(InteractionMessage::PointerDown {
        sample: thumb_down,
        target: TargetRole::Content,
    });
    let thumb_up = PointerSample::new(THUMB, 200.0, 500.0, h.at(24));
    let outcome = h.send(InteractionMessage::PointerUp(thumb_up));

    assert!(!outcome.glide_started);
    assert!(!h.controller.momentum().is_running());
    assert!(h.controller.gesture().is_active());

    let outcome = h.drag(32, 100.0, 600.0);
    assert!(outcome.prevent_default);
    assert_eq!(h.viewport.scroll_top(), 100.0);
    assert!(h.up(40).glide_started);
}
