//! Terminal input module.
//!
//! Intentionally independent of any UI framework: it maps `crossterm` key
//! events into [`crate::types::InputAction`] and nothing else. The event loop
//! in the binary decides when to poll and how to apply the actions.

pub mod map;

pub use blockdrop_types as types;

pub use map::{handle_key_event, should_quit, should_restart};
