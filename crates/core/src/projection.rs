//! Projection calculator - where a piece would rest if dropped straight down.
//!
//! Drives both the ghost piece shown to the player and the hard-drop landing
//! row.

use blockdrop_types::Position;

use crate::collision::can_move;
use crate::grid::Grid;

/// The final resting row reachable by moving `piece` straight down from
/// `position` without collision. Terminates because the board is finite and
/// the floor always blocks.
pub fn project_row(board: &Grid, piece: &Grid, position: Position) -> i32 {
    let mut resting = position;
    while can_move(Position::DOWN, board, piece, resting) {
        resting.row += 1;
    }
    resting.row
}
