//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds all the game rules and state transitions. It has **zero
//! dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is exercised through plain function calls
//! - **Portable**: Can run in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: Immutable cell matrix with masked stamp/clear/rotate operations
//! - [`piece`]: The five falling shapes and their random factory
//! - [`collision`]: Move classification (open, blocked, or ceiling)
//! - [`projection`]: Where a piece would rest if dropped straight down
//! - [`state`]: The immutable [`GameState`] aggregate
//! - [`events`]: The transition functions that advance a game
//! - [`scoring`]: Line-clear detection, the score table, and gravity speed-up
//! - [`rng`]: Seeded LCG behind piece selection
//!
//! # Game Rules
//!
//! - **Board**: 20 rows by 10 columns
//! - **Pieces**: square, straight, tee, ell, and skew, in random palette colors
//! - **Rotation**: quarter-turn clockwise in place, refused if it does not fit
//! - **Ghost piece**: always shows where the current piece will land
//! - **Scoring**: 40 / 100 / 300 / 1200 for 1-4 rows cleared at once
//! - **Gravity**: starts at 700ms per row and speeds up 5% per cleared row
//!
//! # Example
//!
//! ```
//! use blockdrop_core::{events, GameState, Transition};
//! use blockdrop_types::InputAction;
//!
//! let game = GameState::new(12345);
//! match events::apply(&game, InputAction::HardDrop) {
//!     Transition::Advanced { state, .. } => assert_eq!(state.piece_position().row, 0),
//!     other => panic!("unexpected transition: {:?}", other),
//! }
//! ```

pub mod collision;
pub mod events;
pub mod grid;
pub mod piece;
pub mod projection;
pub mod rng;
pub mod scoring;
pub mod state;

pub use blockdrop_types as types;

// Re-export commonly used types for convenience
pub use collision::{can_move, classify, Collision};
pub use events::{Rejection, Transition};
pub use grid::Grid;
pub use piece::{shape_grid, spawn_col, ShapeKind};
pub use projection::project_row;
pub use rng::SimpleRng;
pub use scoring::{line_points, next_fall_interval_ms, LineClear};
pub use state::GameState;
