//! Shared data types and constants.
//!
//! Pure data structures with no external dependencies, usable from the core
//! logic, input mapping, and terminal rendering alike.
//!
//! Coordinates are `(row, col)`: row grows downward, col grows rightward.
//! The board is 10 columns by 20 rows.

use std::ops::Add;

/// Board dimensions.
pub const BOARD_ROWS: usize = 20;
pub const BOARD_COLS: usize = 10;

/// Fall-tick interval at game start, in milliseconds.
pub const INITIAL_FALL_INTERVAL_MS: u32 = 700;

/// The fall interval never drops below this.
pub const MIN_FALL_INTERVAL_MS: u32 = 120;

/// Each cleared row shaves this percentage off the current fall interval.
pub const SPEED_INCREASE_PERCENT_PER_ROW: u32 = 5;

/// Points per line clear, indexed by number of rows cleared at once
/// (single, double, triple, tetris).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// State of a single board or piece cell.
///
/// Any variant other than `Empty` and `Projection` is a color tag; color
/// tags are interchangeable for collision purposes and only matter for
/// rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Empty,
    /// Ghost-piece preview marker. Never collides and never counts toward
    /// a completed row.
    Projection,
    Red,
    Green,
    LightGreen,
    Pink,
    Orange,
    Yellow,
    Purple,
}

/// The fixed color palette pieces draw from.
pub const PIECE_PALETTE: [CellState; 7] = [
    CellState::Red,
    CellState::Green,
    CellState::LightGreen,
    CellState::Pink,
    CellState::Orange,
    CellState::Yellow,
    CellState::Purple,
];

impl CellState {
    pub fn is_empty(self) -> bool {
        self == CellState::Empty
    }

    /// Whether this cell blocks movement and counts toward a full row.
    pub fn is_occupied(self) -> bool {
        !matches!(self, CellState::Empty | CellState::Projection)
    }
}

/// An integer `(row, col)` coordinate or delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The gravity delta: one row straight down.
    pub const DOWN: Position = Position::new(1, 0);
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.row + rhs.row, self.col + rhs.col)
    }
}

/// Direction of a horizontal shift input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftDirection {
    Left,
    Right,
}

impl ShiftDirection {
    /// Position delta for a one-column shift in this direction.
    pub fn delta(self) -> Position {
        match self {
            ShiftDirection::Left => Position::new(0, -1),
            ShiftDirection::Right => Position::new(0, 1),
        }
    }
}

/// Discrete player inputs consumed by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    ShiftLeft,
    ShiftRight,
    RotateClockwise,
    HardDrop,
    Pause,
}
