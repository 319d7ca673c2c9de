use std::time::Instant;

use crate::domains::ui::gesture::{PointerSample, TargetRole};
use crate::domains::ui::momentum::MomentumStep;
use crate::domains::ui::scroll_effects::ScrollEffects;
use crate::infra::frame::FrameHandle;

/// Input events for the scroll surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionMessage<T = TargetRole> {
    /// A pointer went down on `target`
    PointerDown { sample: PointerSample, target: T },
    PointerMove(PointerSample),
    PointerUp(PointerSample),
    /// The platform cancelled the touch sequence
    PointerCancel(Instant),
    /// The container scrolled by other means (wheel, keyboard, scrollbar)
    NativeScroll,
    /// A requested frame is being delivered
    Frame(FrameHandle, Instant),
}

/// What happened while handling one message.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionOutcome {
    /// The host must suppress the platform's default handling of the event
    pub prevent_default: bool,
    /// Effects committed on this frame, to be applied to the header
    pub effects: Option<ScrollEffects>,
    /// Momentum progress when the frame belonged to a glide
    pub momentum: Option<MomentumStep>,
    /// A release started a glide
    pub glide_started: bool,
}

impl InteractionOutcome {
    pub fn none() -> Self {
        Self::default()
    }
}
