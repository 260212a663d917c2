//! GameView: maps a `core::GameState` into a screen buffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The game state already carries everything the view needs: the active
//! piece and its ghost are stamped into the board, so rendering is a single
//! pass over the board cells plus chrome (border, side panel, overlays).

use crate::core::GameState;
use crate::screen::{Glyph, Rgb, Screen, Style};
use crate::types::{CellState, BOARD_COLS, BOARD_ROWS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Per-frame presentation flags that live outside the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameOptions {
    /// Show the game-over overlay instead of the pause overlay.
    pub game_over: bool,
    /// Horizontal jolt in terminal columns, used when a shift is refused.
    pub shake_cols: i16,
}

/// A lightweight terminal view for the falling-block game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2, cell_h: 1 }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into an existing screen buffer.
    ///
    /// Callers can reuse a screen across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        state: &GameState,
        frame: FrameOptions,
        viewport: Viewport,
        screen: &mut Screen,
    ) {
        screen.resize(viewport.width, viewport.height);
        screen.clear(Glyph::default());

        let board_px_w = (BOARD_COLS as u16) * self.cell_w;
        let board_px_h = (BOARD_ROWS as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let centered_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_x = if frame.shake_cols < 0 {
            centered_x.saturating_sub(frame.shake_cols.unsigned_abs())
        } else {
            centered_x.saturating_add(frame.shake_cols as u16)
        };
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = Style {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(30, 30, 40),
            dim: false,
        };
        let border = Style {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            dim: false,
        };

        // Background for the play area.
        screen.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);

        // Border.
        self.draw_border(screen, start_x, start_y, frame_w, frame_h, border);

        // Board cells: locked pieces, the active piece, and its ghost are all
        // present in the state's board.
        for (position, cell) in state.cells() {
            let x = position.col as u16;
            let y = position.row as u16;
            match cell {
                CellState::Empty => self.draw_empty_cell(screen, start_x, start_y, x, y),
                CellState::Projection => self.draw_ghost_cell(screen, start_x, start_y, x, y),
                colored => {
                    self.draw_piece_cell(screen, start_x, start_y, x, y, cell_color(colored))
                }
            }
        }

        // Side panel (score/speed/keys).
        self.draw_side_panel(screen, state, viewport, start_x, start_y, frame_w);

        // Overlays.
        if frame.game_over {
            self.draw_overlay_text(screen, start_x, start_y, frame_w, frame_h, "GAME OVER");
            self.draw_overlay_line(
                screen,
                start_x,
                start_y,
                frame_w,
                frame_h / 2 + 2,
                "r: restart  q: quit",
            );
        } else if state.paused() {
            self.draw_overlay_text(screen, start_x, start_y, frame_w, frame_h, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new screen.
    pub fn render(&self, state: &GameState, frame: FrameOptions, viewport: Viewport) -> Screen {
        let mut screen = Screen::new(viewport.width, viewport.height);
        self.render_into(state, frame, viewport, &mut screen);
        screen
    }

    fn draw_border(&self, screen: &mut Screen, x: u16, y: u16, w: u16, h: u16, style: Style) {
        if w < 2 || h < 2 {
            return;
        }

        screen.put_char(x, y, '┌', style);
        screen.put_char(x + w - 1, y, '┐', style);
        screen.put_char(x, y + h - 1, '└', style);
        screen.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            screen.put_char(x + dx, y, '─', style);
            screen.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            screen.put_char(x, y + dy, '│', style);
            screen.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, screen: &mut Screen, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = Style {
            fg: Rgb::new(90, 90, 100),
            bg: Rgb::new(30, 30, 40),
            dim: true,
        };
        self.fill_cell_rect(screen, start_x, start_y, x, y, '·', style);
    }

    fn draw_ghost_cell(&self, screen: &mut Screen, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = Style {
            fg: Rgb::new(140, 140, 140),
            bg: Rgb::new(30, 30, 40),
            dim: true,
        };
        self.fill_cell_rect(screen, start_x, start_y, x, y, '░', style);
    }

    fn draw_piece_cell(
        &self,
        screen: &mut Screen,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        fg: Rgb,
    ) {
        let style = Style {
            fg,
            bg: Rgb::new(30, 30, 40),
            dim: false,
        };
        self.fill_cell_rect(screen, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        screen: &mut Screen,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: Style,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        screen.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        screen: &mut Screen,
        state: &GameState,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = Style {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            dim: false,
        };
        let value = Style {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            dim: false,
        };
        let hint = Style { dim: true, ..value };

        let mut y = start_y;
        screen.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        screen.put_str(panel_x, y, &state.score().to_string(), value);
        y = y.saturating_add(2);

        screen.put_str(panel_x, y, "SPEED", label);
        y = y.saturating_add(1);
        screen.put_str(
            panel_x,
            y,
            &format!("{}ms", state.fall_interval_ms()),
            value,
        );
        y = y.saturating_add(2);

        screen.put_str(panel_x, y, "KEYS", label);
        y = y.saturating_add(1);
        for line in [
            "← → move",
            "↑ rotate",
            "↓/space drop",
            "p pause",
            "q quit",
        ] {
            if y >= viewport.height {
                break;
            }
            screen.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        screen: &mut Screen,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        self.draw_overlay_line(screen, start_x, start_y, frame_w, frame_h / 2, text);
    }

    fn draw_overlay_line(
        &self,
        screen: &mut Screen,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        dy: u16,
        text: &str,
    ) {
        let y = start_y.saturating_add(dy);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = Style {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            dim: false,
        };
        screen.put_str(x, y, text, style);
    }
}

fn cell_color(cell: CellState) -> Rgb {
    match cell {
        CellState::Red => Rgb::new(220, 80, 80),
        CellState::Green => Rgb::new(100, 220, 120),
        CellState::LightGreen => Rgb::new(150, 240, 150),
        CellState::Pink => Rgb::new(240, 130, 180),
        CellState::Orange => Rgb::new(255, 165, 0),
        CellState::Yellow => Rgb::new(240, 220, 80),
        CellState::Purple => Rgb::new(200, 120, 220),
        // Never drawn through this path.
        CellState::Empty | CellState::Projection => Rgb::new(30, 30, 40),
    }
}
