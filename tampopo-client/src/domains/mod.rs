//! Domain modules for the Tampopo client
//!
//! Each domain owns its state and exposes message-driven updates; the host
//! UI feeds events in and renders what comes back.

pub mod search;
pub mod ui;
