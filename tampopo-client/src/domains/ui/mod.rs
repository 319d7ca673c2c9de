//! UI domain
//!
//! Touch-driven scrolling of the main content column and the header effects
//! tied to its offset.

pub mod gesture;
pub mod interaction;
pub mod momentum;
pub mod scroll_effects;

pub use gesture::{GestureRecognizer, InteractiveTarget, TargetRole};
pub use interaction::{
    InteractionController, InteractionMessage, InteractionOutcome,
};
pub use momentum::{MomentumIntegrator, MomentumStep};
pub use scroll_effects::{ScrollEffectMapper, ScrollEffects};
