use std::time::Instant;

/// Identifies one touch point for the lifetime of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

/// One pointer position report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub pointer: PointerId,
    pub x: f32,
    pub y: f32,
    pub at: Instant,
}

impl PointerSample {
    pub fn new(pointer: PointerId, x: f32, y: f32, at: Instant) -> Self {
        Self { pointer, x, y, at }
    }
}

/// Axis a gesture committed to once it left the dead zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// Recognizer state as seen from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Tracking(Option<Axis>),
}

/// What the host should do with the event it just fed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureResponse {
    /// Nothing to do; the event was not part of a tracked gesture.
    Ignored,
    /// A gesture started tracking.
    Started,
    /// Tracking, still inside the dead zone.
    Pending,
    /// Vertical drag: scroll by `delta` (added to the scroll offset).
    Scroll { delta: f32, prevent_default: bool },
    /// Horizontal drag: leave the event to the platform.
    Passthrough,
    /// The gesture ended. A vertical gesture hands over its velocity.
    Release { fling_velocity: Option<f32> },
}

impl GestureResponse {
    pub fn prevents_default(&self) -> bool {
        matches!(
            self,
            GestureResponse::Scroll {
                prevent_default: true,
                ..
            }
        )
    }
}
