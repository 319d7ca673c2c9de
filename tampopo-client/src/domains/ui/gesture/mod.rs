//! Touch gesture recognition for kinetic scrolling
//!
//! A gesture starts when a pointer goes down on non-interactive content.
//! Until the pointer leaves a small dead zone nothing happens; then the
//! gesture locks to one axis for the rest of its life. Vertical gestures
//! drive the scroll offset directly and track a smoothed velocity that is
//! handed to momentum on release. Horizontal gestures are left to the
//! platform.

pub mod messages;
pub mod recognizer;
pub mod target;

pub use messages::{
    Axis, GesturePhase, GestureResponse, PointerId, PointerSample,
};
pub use recognizer::{GestureRecognizer, GestureState};
pub use target::{InteractiveTarget, TargetRole};
