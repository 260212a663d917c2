//! Event handlers - the only entry points that advance a game.
//!
//! Every handler takes a [`GameState`] by reference and returns a
//! [`Transition`]; rejected inputs leave the caller holding the old state
//! unchanged. The canonical move sequence is always the same: pick the piece
//! and its ghost up off the board, change position or shape, restamp the
//! ghost, restamp the piece.

use blockdrop_types::{InputAction, Position, ShiftDirection};

use crate::collision::{can_move, classify, placement_blocked, Collision};
use crate::scoring::{completed_rows_in_span, line_points, next_fall_interval_ms, LineClear};
use crate::state::{GameState, Placement};

/// Outcome of applying one event to a game state.
#[derive(Debug, Clone)]
pub enum Transition {
    /// The game advanced; `cleared` reports a line clear when the event
    /// locked a piece that completed rows.
    Advanced {
        state: GameState,
        cleared: Option<LineClear>,
    },
    /// The event was refused; the previous state still stands.
    Rejected(Rejection),
    /// A freshly spawned piece had nowhere to go. The game is finished.
    GameOver { final_score: u32 },
}

/// Why an event was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// A lateral shift hit a wall or locked cells.
    Shift(ShiftDirection),
    /// The rotated piece would not fit at the current position.
    Rotation,
    /// Gameplay events are ignored while paused.
    Paused,
}

/// Dispatch a player input to its handler.
pub fn apply(state: &GameState, action: InputAction) -> Transition {
    match action {
        InputAction::ShiftLeft => on_shift_input(state, ShiftDirection::Left),
        InputAction::ShiftRight => on_shift_input(state, ShiftDirection::Right),
        InputAction::RotateClockwise => on_rotate_input(state),
        InputAction::HardDrop => on_hard_drop_input(state),
        InputAction::Pause => on_pause_input(state),
    }
}

/// Gravity tick: move the piece one row down, or lock it where it stands.
pub fn on_fall_tick(state: &GameState) -> Transition {
    if state.paused() {
        return Transition::Rejected(Rejection::Paused);
    }
    match classify(
        state.board(),
        state.piece(),
        state.piece_position(),
        Position::DOWN,
    ) {
        Collision::None => {
            let next = state
                .clear_piece_and_projection()
                .with_piece_delta(Position::DOWN)
                .update_projection()
                .place_piece(Placement::InPlace);
            Transition::Advanced {
                state: next,
                cleared: None,
            }
        }
        Collision::Ceiling => Transition::GameOver {
            final_score: state.score(),
        },
        Collision::Blocked => lock_and_respawn(state, Placement::InPlace),
    }
}

/// Shift the piece one column left or right.
pub fn on_shift_input(state: &GameState, direction: ShiftDirection) -> Transition {
    if state.paused() {
        return Transition::Rejected(Rejection::Paused);
    }
    let delta = direction.delta();
    if !can_move(delta, state.board(), state.piece(), state.piece_position()) {
        return Transition::Rejected(Rejection::Shift(direction));
    }
    let next = state
        .clear_piece_and_projection()
        .with_piece_delta(delta)
        .update_projection()
        .place_piece(Placement::InPlace);
    Transition::Advanced {
        state: next,
        cleared: None,
    }
}

/// Rotate the piece a quarter-turn clockwise in place. No kicks: if the
/// rotated bounding box or cells do not fit, the rotation is refused.
pub fn on_rotate_input(state: &GameState) -> Transition {
    if state.paused() {
        return Transition::Rejected(Rejection::Paused);
    }
    let rotated = state.piece().rotate_clockwise();
    // Check the rotated shape against the board with the current piece
    // lifted off: the old footprint must not block its own rotation, but
    // locked cells under the new footprint must.
    let lifted = state.clear_piece_and_projection();
    if placement_blocked(lifted.board(), &rotated, state.piece_position()) {
        return Transition::Rejected(Rejection::Rotation);
    }
    let next = lifted
        .with_piece(rotated)
        .update_projection()
        .place_piece(Placement::InPlace);
    Transition::Advanced {
        state: next,
        cleared: None,
    }
}

/// Teleport the piece to its ghost position and lock it there immediately.
pub fn on_hard_drop_input(state: &GameState) -> Transition {
    if state.paused() {
        return Transition::Rejected(Rejection::Paused);
    }
    lock_and_respawn(state, Placement::IntoProjection)
}

/// Toggle pause. Always accepted, including while paused.
pub fn on_pause_input(state: &GameState) -> Transition {
    Transition::Advanced {
        state: state.toggle_paused(),
        cleared: None,
    }
}

/// Lock the active piece at `placement`, clear completed rows, score them,
/// and spawn the next piece.
///
/// The line scan covers the locked piece's full bounding-box row range, and
/// collapse is applied row by row in ascending order (collapsing a row only
/// shifts rows above it, so later rows in the list keep their indices). The
/// ghost for the new piece is computed against the post-collapse board.
fn lock_and_respawn(state: &GameState, placement: Placement) -> Transition {
    let lock_row = match placement {
        Placement::InPlace => state.piece_position().row,
        Placement::IntoProjection => state.projection_position().row,
    };
    let span = state.piece().rows();

    let locked = state.clear_piece_and_projection().place_piece(placement);

    let rows = completed_rows_in_span(locked.board(), lock_row, span);
    let mut next = locked;
    for &row in rows.iter() {
        next = next.with_board(next.board().clear_row_and_collapse(row));
    }

    let cleared = if rows.is_empty() {
        None
    } else {
        let points = line_points(rows.len());
        next = next
            .add_score(points)
            .with_fall_interval_ms(next_fall_interval_ms(
                next.fall_interval_ms(),
                rows.len() as u32,
            ));
        Some(LineClear {
            count: rows.len() as u8,
            points,
        })
    };

    let respawned = next.refresh_piece();
    if placement_blocked(
        respawned.board(),
        respawned.piece(),
        respawned.piece_position(),
    ) {
        return Transition::GameOver {
            final_score: respawned.score(),
        };
    }

    let next = respawned
        .update_projection()
        .place_piece(Placement::InPlace);
    Transition::Advanced {
        state: next,
        cleared,
    }
}
