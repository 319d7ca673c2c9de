//! Host integration seams: frame scheduling and the scroll container.

pub mod frame;
pub mod viewport;

pub use frame::{FrameHandle, FrameScheduler, ManualFrameScheduler};
pub use viewport::{ScrollViewport, SimulatedViewport};
