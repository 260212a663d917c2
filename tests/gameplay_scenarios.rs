//! End-to-end gameplay scenarios driven through the public event handlers.

use tui_blockdrop::core::{events, shape_grid, GameState, Grid, Rejection, ShapeKind, Transition};
use tui_blockdrop::types::{CellState, InputAction, Position, ShiftDirection};

const START_INTERVAL: u32 = 700;

fn advanced(transition: Transition) -> GameState {
    match transition {
        Transition::Advanced { state, .. } => state,
        other => panic!("expected Advanced, got {:?}", other),
    }
}

fn game(board: Grid, piece: Grid, position: Position) -> GameState {
    GameState::from_parts(board, piece, position, START_INTERVAL, 0, 42)
}

#[test]
fn vertical_bar_hard_drops_to_the_floor_without_clearing() {
    let piece = shape_grid(ShapeKind::Straight, CellState::Red);
    let state = game(Grid::new(20, 10), piece, Position::new(0, 4));

    match events::on_hard_drop_input(&state) {
        Transition::Advanced { state, cleared } => {
            assert!(cleared.is_none());
            assert_eq!(state.score(), 0);
            assert_eq!(state.fall_interval_ms(), START_INTERVAL);
            for row in 16..20 {
                assert!(state.board().get(Position::new(row, 4)).is_occupied());
            }
        }
        other => panic!("expected Advanced, got {:?}", other),
    }
}

#[test]
fn single_line_clear_scores_forty_and_collapses() {
    let mut board = Grid::new(20, 10);
    for col in 0..8 {
        board.set(Position::new(19, col), CellState::Green);
    }
    let piece = shape_grid(ShapeKind::Square, CellState::Red);
    let state = game(board, piece, Position::new(0, 8));

    match events::on_hard_drop_input(&state) {
        Transition::Advanced { state, cleared } => {
            let cleared = cleared.unwrap();
            assert_eq!((cleared.count, cleared.points), (1, 40));
            assert!(!cleared.is_tetris());
            assert_eq!(state.score(), 40);
            assert_eq!(state.fall_interval_ms(), 665);

            // Row 19 collapsed; the square's top half slid down into it.
            assert!(state.board().get(Position::new(19, 8)).is_occupied());
            assert!(state.board().get(Position::new(19, 9)).is_occupied());
            assert!(!state.board().get(Position::new(19, 0)).is_occupied());
            assert!(!state.board().get(Position::new(18, 8)).is_occupied());
        }
        other => panic!("expected Advanced, got {:?}", other),
    }
}

#[test]
fn four_line_clear_is_a_tetris() {
    let mut board = Grid::new(20, 10);
    for row in 16..20 {
        for col in 0..9 {
            board.set(Position::new(row, col), CellState::Green);
        }
    }
    let piece = shape_grid(ShapeKind::Straight, CellState::Red);
    let state = game(board, piece, Position::new(0, 9));

    match events::on_hard_drop_input(&state) {
        Transition::Advanced { state, cleared } => {
            let cleared = cleared.unwrap();
            assert_eq!((cleared.count, cleared.points), (4, 1200));
            assert!(cleared.is_tetris());
            assert_eq!(state.score(), 1200);
            // 5% off per row: 700 -> 560.
            assert_eq!(state.fall_interval_ms(), 560);
            // The whole stack is gone.
            for row in 16..20 {
                for col in 0..10 {
                    assert!(!state.board().get(Position::new(row, col)).is_occupied());
                }
            }
        }
        other => panic!("expected Advanced, got {:?}", other),
    }
}

#[test]
fn rotation_updates_bounding_box_and_ghost() {
    let piece = shape_grid(ShapeKind::Straight, CellState::Red);
    let state = game(Grid::new(20, 10), piece, Position::new(5, 4));
    assert_eq!(state.projection_position().row, 16);

    let next = advanced(events::on_rotate_input(&state));
    assert_eq!((next.piece().rows(), next.piece().cols()), (1, 4));
    // A 1-row piece rests on the floor row.
    assert_eq!(next.projection_position().row, 19);
}

#[test]
fn rotation_against_the_wall_is_refused() {
    let piece = shape_grid(ShapeKind::Straight, CellState::Red);
    let state = game(Grid::new(20, 10), piece, Position::new(5, 8));

    match events::on_rotate_input(&state) {
        Transition::Rejected(Rejection::Rotation) => {}
        other => panic!("expected rotation rejection, got {:?}", other),
    }
}

#[test]
fn shift_off_the_board_is_refused_and_state_stands() {
    let piece = shape_grid(ShapeKind::Tee, CellState::Purple);
    let state = game(Grid::new(20, 10), piece, Position::new(3, 0));
    let before = state.board().clone();

    match events::on_shift_input(&state, ShiftDirection::Left) {
        Transition::Rejected(Rejection::Shift(ShiftDirection::Left)) => {}
        other => panic!("expected shift rejection, got {:?}", other),
    }
    assert_eq!(state.board(), &before);
}

#[test]
fn score_never_decreases_over_a_full_game() {
    let mut state = GameState::new(2024);
    let mut last_score = 0;

    // Drive a few hundred ticks with a fixed input pattern; whatever happens,
    // the score must be monotonic.
    for i in 0..400 {
        let transition = if i % 7 == 3 {
            events::apply(&state, InputAction::ShiftLeft)
        } else if i % 11 == 5 {
            events::apply(&state, InputAction::RotateClockwise)
        } else {
            events::on_fall_tick(&state)
        };
        match transition {
            Transition::Advanced { state: next, .. } => {
                assert!(next.score() >= last_score);
                last_score = next.score();
                state = next;
            }
            Transition::Rejected(_) => {}
            Transition::GameOver { final_score } => {
                assert!(final_score >= last_score);
                return;
            }
        }
    }
}

#[test]
fn topping_out_reports_the_final_score() {
    let mut board = Grid::new(20, 10);
    for row in 2..20 {
        for col in 0..10 {
            board.set(Position::new(row, col), CellState::Green);
        }
    }
    let piece = shape_grid(ShapeKind::Square, CellState::Red);
    let state = GameState::from_parts(board, piece, Position::new(0, 4), START_INTERVAL, 990, 7);

    match events::on_fall_tick(&state) {
        Transition::GameOver { final_score } => assert_eq!(final_score, 990),
        other => panic!("expected GameOver, got {:?}", other),
    }
}

#[test]
fn pause_blocks_gameplay_until_resumed() {
    let state = GameState::new(31);
    let paused = advanced(events::apply(&state, InputAction::Pause));

    match events::on_fall_tick(&paused) {
        Transition::Rejected(Rejection::Paused) => {}
        other => panic!("expected paused rejection, got {:?}", other),
    }

    let resumed = advanced(events::apply(&paused, InputAction::Pause));
    let ticked = advanced(events::on_fall_tick(&resumed));
    assert_eq!(ticked.piece_position().row, state.piece_position().row + 1);
}

#[test]
fn identical_seeds_replay_identical_games() {
    let mut a = GameState::new(555);
    let mut b = GameState::new(555);

    for _ in 0..100 {
        match (events::on_fall_tick(&a), events::on_fall_tick(&b)) {
            (
                Transition::Advanced { state: na, .. },
                Transition::Advanced { state: nb, .. },
            ) => {
                assert_eq!(na.board(), nb.board());
                a = na;
                b = nb;
            }
            (Transition::GameOver { final_score: fa }, Transition::GameOver { final_score: fb }) => {
                assert_eq!(fa, fb);
                return;
            }
            (other_a, other_b) => panic!("diverged: {:?} vs {:?}", other_a, other_b),
        }
    }
}
