//! Scroll surface interaction: touch drags, momentum and header effects
//! wired together behind one message-driven controller.

pub mod controller;
pub mod messages;
pub mod update;

pub use controller::InteractionController;
pub use messages::{InteractionMessage, InteractionOutcome};
pub use update::update;
