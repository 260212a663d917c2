//! Line-clear detection and scoring rules.
//!
//! Scores follow the classic fixed table: single 40, double 100, triple 300,
//! tetris 1200. Each cleared row also speeds up gravity by a fixed percentage
//! of the current fall interval, clamped at a minimum.

use arrayvec::ArrayVec;
use blockdrop_types::{LINE_SCORES, MIN_FALL_INTERVAL_MS, SPEED_INCREASE_PERCENT_PER_ROW};

use crate::grid::Grid;

/// Outcome of a line clear after a lock, reported to collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClear {
    /// Rows cleared by this lock, in `[1, 4]`.
    pub count: u8,
    /// Points awarded for this clear.
    pub points: u32,
}

impl LineClear {
    /// The maximal 4-line clear, flagged for distinct external feedback.
    pub fn is_tetris(self) -> bool {
        self.count == 4
    }
}

/// Points for clearing `count` rows at once.
///
/// # Panics
///
/// Panics if `count > 4`; a single piece spans at most 4 rows.
pub fn line_points(count: usize) -> u32 {
    assert!(count <= 4, "a lock can clear at most 4 rows, got {}", count);
    LINE_SCORES[count]
}

/// Next fall interval after clearing `rows_cleared` rows: the current
/// interval reduced by the per-row percentage times the row count, floored
/// at the configured minimum. Monotonically non-increasing.
pub fn next_fall_interval_ms(current: u32, rows_cleared: u32) -> u32 {
    let reduction = current * SPEED_INCREASE_PERCENT_PER_ROW * rows_cleared / 100;
    current.saturating_sub(reduction).max(MIN_FALL_INTERVAL_MS)
}

/// Collect the fully-occupied rows within `[start, start + span)`, clamped to
/// the board. Rows are collected before any collapse is applied so that
/// removal never invalidates the scan (at most 4 rows fit a piece span).
pub fn completed_rows_in_span(board: &Grid, start: i32, span: usize) -> ArrayVec<usize, 4> {
    let mut completed = ArrayVec::new();
    let first = start.max(0) as usize;
    let end = (start + span as i32).min(board.rows() as i32).max(0) as usize;

    for row in first..end {
        if board.is_row_occupied(row) {
            completed.push(row);
        }
    }
    completed
}
