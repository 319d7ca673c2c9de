//! Scroll-linked header effects
//!
//! The header stroke fades in over the first few pixels of scroll and the
//! hero backdrop fades out a little later. Values are committed on the next
//! frame so a burst of scroll events costs one recomputation.

pub mod mapper;

pub use mapper::{ScrollEffectMapper, ScrollEffects, compute_effects, ramp};
