//! Tampopo client library
//!
//! Interaction engine behind the Tampopo film and recipe browser: kinetic
//! touch scrolling with axis locking and momentum, scroll-linked header
//! effects, and categorized accent-insensitive title search.
//!
//! Notes
//! - The engine is single-threaded and host-driven. Display frames and the
//!   scroll container are reached through the traits in [`infra`].
//! - The `tampopo` binary in `src/main.rs` exercises the library from the
//!   command line.

pub mod domains;
pub mod infra;
