pub mod integrator;

pub use integrator::{MomentumIntegrator, MomentumStep, StopReason};
