//! Grid module - the rectangular cell matrix underlying boards and pieces.
//!
//! The 20x10 board and every piece bounding box are the same type. Cells are
//! stored in a flat row-major `Vec` for cache locality. Masked operations
//! (`insert`, `clear_mask`) treat another grid as a stamp: only its non-empty
//! cells take effect.
//!
//! Out-of-bounds access and mismatched mask dimensions are caller defects and
//! panic; they are never a recoverable game condition.

use blockdrop_types::{CellState, Position};

/// A rectangular matrix of [`CellState`], fixed size at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major: index = row * cols + col.
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a grid filled with [`CellState::Empty`].
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, CellState::Empty)
    }

    /// Create a grid with every cell set to `fill`.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is zero.
    pub fn filled(rows: usize, cols: usize, fill: CellState) -> Self {
        assert!(rows > 0, "grid needs at least one row");
        assert!(cols > 0, "grid needs at least one column");
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn index(&self, position: Position) -> usize {
        assert!(
            position.row >= 0 && (position.row as usize) < self.rows,
            "row {} out of bounds for {} rows",
            position.row,
            self.rows
        );
        assert!(
            position.col >= 0 && (position.col as usize) < self.cols,
            "col {} out of bounds for {} cols",
            position.col,
            self.cols
        );
        (position.row as usize) * self.cols + (position.col as usize)
    }

    /// Read the cell at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is outside `[0, rows) x [0, cols)`.
    pub fn get(&self, position: Position) -> CellState {
        self.cells[self.index(position)]
    }

    /// Write the cell at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is outside `[0, rows) x [0, cols)`.
    pub fn set(&mut self, position: Position, state: CellState) {
        let idx = self.index(position);
        self.cells[idx] = state;
    }

    /// Stamp every non-empty cell of `mask` into a copy of `self`, offset by
    /// `offset`, overwriting whatever was there.
    ///
    /// # Panics
    ///
    /// Panics if `mask` extends past the bounds of `self` at `offset`.
    pub fn insert(&self, mask: &Grid, offset: Position) -> Grid {
        let mut result = self.clone();
        for (position, state) in mask.iter() {
            if state.is_empty() {
                continue;
            }
            result.set(position + offset, state);
        }
        result
    }

    /// Reset to [`CellState::Empty`] every cell of `self` covered by a
    /// non-empty cell of `mask` at `offset`. This "picks up" a stamped piece
    /// or ghost so it cannot collide with its own prior footprint.
    ///
    /// # Panics
    ///
    /// Panics if `mask` extends past the bounds of `self` at `offset`.
    pub fn clear_mask(&self, mask: &Grid, offset: Position) -> Grid {
        let mut result = self.clone();
        for (position, state) in mask.iter() {
            if state.is_empty() {
                continue;
            }
            result.set(position + offset, CellState::Empty);
        }
        result
    }

    /// Remove `row` entirely, shift every row above it down by one, and
    /// insert a fresh empty row at index 0. Total row count is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows`.
    pub fn clear_row_and_collapse(&self, row: usize) -> Grid {
        assert!(row < self.rows, "row {} out of bounds for {} rows", row, self.rows);

        let mut result = self.clone();
        for shifted in (1..=row).rev() {
            let src = (shifted - 1) * self.cols;
            let dst = shifted * self.cols;
            result.cells.copy_within(src..src + self.cols, dst);
        }
        for cell in &mut result.cells[..self.cols] {
            *cell = CellState::Empty;
        }
        result
    }

    /// Rotate a quarter turn clockwise. The result has transposed dimensions;
    /// cell `(r, c)` maps to `(c, rows - 1 - r)`. Four successive rotations
    /// reproduce the original grid.
    pub fn rotate_clockwise(&self) -> Grid {
        let mut result = Grid::new(self.cols, self.rows);
        for (position, state) in self.iter() {
            let rotated = Position::new(position.col, self.rows as i32 - 1 - position.row);
            result.set(rotated, state);
        }
        result
    }

    /// Rotate a quarter turn counter-clockwise; the inverse of
    /// [`Grid::rotate_clockwise`]. Cell `(r, c)` maps to `(cols - 1 - c, r)`.
    pub fn rotate_counter_clockwise(&self) -> Grid {
        let mut result = Grid::new(self.cols, self.rows);
        for (position, state) in self.iter() {
            let rotated = Position::new(self.cols as i32 - 1 - position.col, position.row);
            result.set(rotated, state);
        }
        result
    }

    /// Produce a new grid by applying `f` to every cell.
    pub fn transform(&self, mut f: impl FnMut(Position, CellState) -> CellState) -> Grid {
        let mut result = self.clone();
        for (position, state) in self.iter() {
            result.set(position, f(position, state));
        }
        result
    }

    /// Iterate all cells in row-major order as `(Position, CellState)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        self.cells.iter().enumerate().map(move |(idx, &state)| {
            let position = Position::new((idx / self.cols) as i32, (idx % self.cols) as i32);
            (position, state)
        })
    }

    /// Whether every cell in `row` is occupied (not empty, not projection).
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows`.
    pub fn is_row_occupied(&self, row: usize) -> bool {
        assert!(row < self.rows, "row {} out of bounds for {} rows", row, self.rows);
        let start = row * self.cols;
        self.cells[start..start + self.cols]
            .iter()
            .all(|cell| cell.is_occupied())
    }
}
