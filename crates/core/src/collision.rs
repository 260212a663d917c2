//! Collision detector - pure classification of a piece move against a board.
//!
//! The active piece and its ghost are always stamped into the board for
//! rendering, so a naive overlap test would find the piece colliding with
//! itself. [`classify`] therefore derives a background board by clearing the
//! piece's own footprint first.

use blockdrop_types::Position;

use crate::grid::Grid;

/// Result of simulating a piece move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// The move lands entirely on empty (or projection) cells in bounds.
    None,
    /// The move runs into a wall, the floor, or locked cells.
    Blocked,
    /// A cell collision while the piece is still on its spawn row: the
    /// terminal game-over condition.
    Ceiling,
}

/// Classify moving `piece` from `position` by `delta` against `board`.
///
/// `piece` is assumed to be stamped on `board` at `position`; its own
/// footprint is cleared before the overlap scan.
pub fn classify(board: &Grid, piece: &Grid, position: Position, delta: Position) -> Collision {
    let background = board.clear_mask(piece, position);
    let simulated = position + delta;

    // Walls.
    if simulated.col < 0 || simulated.col + piece.cols() as i32 > background.cols() as i32 {
        return Collision::Blocked;
    }
    // Floor.
    if simulated.row + piece.rows() as i32 > background.rows() as i32 {
        return Collision::Blocked;
    }

    let mut collided = false;
    for (cell, state) in piece.iter() {
        if !state.is_occupied() {
            continue;
        }
        if background.get(cell + simulated).is_occupied() {
            collided = true;
        }
    }

    if collided && position.row == 0 {
        Collision::Ceiling
    } else if collided {
        Collision::Blocked
    } else {
        Collision::None
    }
}

/// Whether the move is allowed, i.e. classifies as [`Collision::None`].
pub fn can_move(delta: Position, board: &Grid, piece: &Grid, position: Position) -> bool {
    classify(board, piece, position, delta) == Collision::None
}

/// Whether a piece that is *not yet stamped* on the board would land out of
/// bounds or on occupied cells at `position`. Used where [`classify`] does
/// not apply because there is no prior footprint to clear: the spawn-time
/// game-over check and the rotation fit check.
pub fn placement_blocked(board: &Grid, piece: &Grid, position: Position) -> bool {
    if position.col < 0
        || position.col + piece.cols() as i32 > board.cols() as i32
        || position.row < 0
        || position.row + piece.rows() as i32 > board.rows() as i32
    {
        return true;
    }
    piece
        .iter()
        .any(|(cell, state)| state.is_occupied() && board.get(cell + position).is_occupied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockdrop_types::CellState;

    fn board_with_piece(piece: &Grid, position: Position) -> Grid {
        Grid::new(20, 10).insert(piece, position)
    }

    #[test]
    fn open_space_is_no_collision() {
        let piece = Grid::filled(2, 2, CellState::Red);
        let position = Position::new(5, 4);
        let board = board_with_piece(&piece, position);

        assert_eq!(
            classify(&board, &piece, position, Position::DOWN),
            Collision::None
        );
    }

    #[test]
    fn left_wall_blocks() {
        let piece = Grid::filled(2, 2, CellState::Red);
        let position = Position::new(5, 0);
        let board = board_with_piece(&piece, position);

        assert_eq!(
            classify(&board, &piece, position, Position::new(0, -1)),
            Collision::Blocked
        );
    }

    #[test]
    fn right_wall_blocks() {
        let piece = Grid::filled(2, 2, CellState::Red);
        let position = Position::new(5, 8);
        let board = board_with_piece(&piece, position);

        assert_eq!(
            classify(&board, &piece, position, Position::new(0, 1)),
            Collision::Blocked
        );
    }

    #[test]
    fn floor_blocks() {
        let piece = Grid::filled(2, 2, CellState::Red);
        let position = Position::new(18, 4);
        let board = board_with_piece(&piece, position);

        assert_eq!(
            classify(&board, &piece, position, Position::DOWN),
            Collision::Blocked
        );
    }

    #[test]
    fn locked_cells_block() {
        let piece = Grid::filled(2, 2, CellState::Red);
        let position = Position::new(10, 4);
        let mut board = board_with_piece(&piece, position);
        board.set(Position::new(12, 4), CellState::Green);

        assert_eq!(
            classify(&board, &piece, position, Position::DOWN),
            Collision::Blocked
        );
    }

    #[test]
    fn own_footprint_does_not_collide() {
        let piece = Grid::filled(2, 2, CellState::Red);
        let position = Position::new(10, 4);
        let board = board_with_piece(&piece, position);

        // Overlapping deltas only intersect the piece's own stamped cells.
        assert_eq!(
            classify(&board, &piece, position, Position::new(0, 1)),
            Collision::None
        );
    }

    #[test]
    fn projection_cells_do_not_collide() {
        let piece = Grid::filled(2, 2, CellState::Red);
        let position = Position::new(10, 4);
        let mut board = board_with_piece(&piece, position);
        board.set(Position::new(12, 4), CellState::Projection);
        board.set(Position::new(12, 5), CellState::Projection);

        assert_eq!(
            classify(&board, &piece, position, Position::DOWN),
            Collision::None
        );
    }

    #[test]
    fn cell_collision_on_spawn_row_is_ceiling() {
        let piece = Grid::filled(2, 2, CellState::Red);
        let position = Position::new(0, 4);
        let mut board = board_with_piece(&piece, position);
        board.set(Position::new(2, 4), CellState::Green);

        assert_eq!(
            classify(&board, &piece, position, Position::DOWN),
            Collision::Ceiling
        );
    }

    #[test]
    fn wall_hit_on_spawn_row_is_not_ceiling() {
        let piece = Grid::filled(2, 2, CellState::Red);
        let position = Position::new(0, 0);
        let board = board_with_piece(&piece, position);

        assert_eq!(
            classify(&board, &piece, position, Position::new(0, -1)),
            Collision::Blocked
        );
    }

    #[test]
    fn can_move_mirrors_classify() {
        let piece = Grid::filled(2, 2, CellState::Red);
        let position = Position::new(5, 4);
        let board = board_with_piece(&piece, position);

        assert!(can_move(Position::DOWN, &board, &piece, position));
        assert!(!can_move(Position::new(0, -5), &board, &piece, position));
    }

    #[test]
    fn placement_blocked_detects_overlap_without_footprint_clearing() {
        let piece = Grid::filled(2, 2, CellState::Red);
        let mut board = Grid::new(20, 10);
        assert!(!placement_blocked(&board, &piece, Position::new(0, 4)));

        board.set(Position::new(1, 5), CellState::Green);
        assert!(placement_blocked(&board, &piece, Position::new(0, 4)));
    }

    #[test]
    fn placement_blocked_rejects_out_of_bounds() {
        let piece = Grid::filled(1, 4, CellState::Red);
        let board = Grid::new(20, 10);
        assert!(placement_blocked(&board, &piece, Position::new(5, 7)));
        assert!(!placement_blocked(&board, &piece, Position::new(5, 6)));
    }
}
