//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget toolkits and instead renders into a simple
//! screen buffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Provide a rendering pipeline that feels closer to a game renderer
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod game_view;
pub mod renderer;
pub mod screen;

pub use blockdrop_core as core;
pub use blockdrop_types as types;

pub use game_view::{FrameOptions, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen::{Glyph, Rgb, Screen, Style};
