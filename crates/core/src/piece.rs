//! Piece factory - the five canonical falling shapes.
//!
//! A piece is just a small [`Grid`] whose occupied cells carry one color tag.
//! Shape and color are chosen independently per invocation, so two pieces of
//! the same shape may differ in color.

use blockdrop_types::{CellState, Position, PIECE_PALETTE};

use crate::grid::Grid;
use crate::rng::SimpleRng;

/// The five canonical shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// 2x2 block.
    Square,
    /// 4x1 vertical bar.
    Straight,
    /// 2x3 T shape.
    Tee,
    /// 3x2 L shape.
    Ell,
    /// 2x3 S-like skew.
    Skew,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Square,
        ShapeKind::Straight,
        ShapeKind::Tee,
        ShapeKind::Ell,
        ShapeKind::Skew,
    ];
}

/// Build the grid for `kind` with its occupied cells set to `color`.
pub fn shape_grid(kind: ShapeKind, color: CellState) -> Grid {
    match kind {
        ShapeKind::Square => Grid::filled(2, 2, color),
        ShapeKind::Straight => Grid::filled(4, 1, color),
        ShapeKind::Tee => from_offsets(2, 3, &[(0, 1), (1, 0), (1, 1), (1, 2)], color),
        ShapeKind::Ell => from_offsets(3, 2, &[(0, 0), (1, 0), (2, 0), (2, 1)], color),
        ShapeKind::Skew => from_offsets(2, 3, &[(0, 1), (0, 2), (1, 0), (1, 1)], color),
    }
}

fn from_offsets(rows: usize, cols: usize, offsets: &[(i32, i32)], color: CellState) -> Grid {
    let mut grid = Grid::new(rows, cols);
    for &(row, col) in offsets {
        grid.set(Position::new(row, col), color);
    }
    grid
}

/// Pick a uniformly random color from the palette.
pub fn random_color(rng: &mut SimpleRng) -> CellState {
    rng.choose(&PIECE_PALETTE)
}

/// Produce a random piece: shape uniform over the five kinds, color uniform
/// over the palette, independently.
pub fn random(rng: &mut SimpleRng) -> Grid {
    let kind = rng.choose(&ShapeKind::ALL);
    shape_grid(kind, random_color(rng))
}

/// Horizontally-centered spawn column for a piece of the given width.
pub fn spawn_col(board_cols: usize, piece_cols: usize) -> i32 {
    (board_cols / 2) as i32 - (piece_cols / 2) as i32
}
