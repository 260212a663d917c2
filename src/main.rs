//! Terminal blockdrop runner (default binary).
//!
//! This is the primary gameplay entrypoint. It uses crossterm for input and
//! a custom screen-buffer renderer driving the pure game core: keyboard
//! events and gravity ticks both funnel through the transition functions in
//! `blockdrop_core::events`.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_blockdrop::core::{events, GameState, Rejection, Transition};
use tui_blockdrop::input::{handle_key_event, should_quit, should_restart};
use tui_blockdrop::term::{FrameOptions, GameView, Screen, TerminalRenderer, Viewport};
use tui_blockdrop::types::{InputAction, ShiftDirection};

/// How long the board jolts sideways after a refused shift.
const SHAKE_DURATION: Duration = Duration::from_millis(80);

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let view = GameView::default();
    let mut screen = Screen::new(0, 0);

    let mut state = GameState::new(seed_from_clock());
    let mut game_over = false;
    let mut last_fall = Instant::now();
    let mut shake: Option<(Instant, i16)> = None;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let shake_cols = match shake {
            Some((until, cols)) if Instant::now() < until => cols,
            _ => {
                shake = None;
                0
            }
        };
        let frame = FrameOptions {
            game_over,
            shake_cols,
        };
        view.render_into(&state, frame, Viewport::new(w, h), &mut screen);
        term.draw_swap(&mut screen)?;

        // Input with timeout until the next gravity tick.
        let fall_interval = Duration::from_millis(state.fall_interval_ms() as u64);
        let timeout = fall_interval
            .checked_sub(last_fall.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }

                    if game_over {
                        if should_restart(key) {
                            // Continue the random sequence rather than replay it.
                            state = GameState::new(state.rng_state());
                            game_over = false;
                            last_fall = Instant::now();
                        }
                        continue;
                    }

                    if let Some(action) = handle_key_event(key) {
                        match events::apply(&state, action) {
                            Transition::Advanced { state: next, .. } => {
                                // A hard drop locks immediately; give the new
                                // piece a full interval before it falls.
                                if action == InputAction::HardDrop {
                                    last_fall = Instant::now();
                                }
                                state = next;
                            }
                            Transition::Rejected(Rejection::Shift(direction)) => {
                                let cols = match direction {
                                    ShiftDirection::Left => -1,
                                    ShiftDirection::Right => 1,
                                };
                                shake = Some((Instant::now() + SHAKE_DURATION, cols));
                            }
                            Transition::Rejected(_) => {}
                            Transition::GameOver { .. } => {
                                game_over = true;
                            }
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity tick.
        if !game_over && last_fall.elapsed() >= fall_interval {
            last_fall = Instant::now();
            match events::on_fall_tick(&state) {
                Transition::Advanced { state: next, .. } => state = next,
                // Paused: the piece holds position until resume.
                Transition::Rejected(_) => {}
                Transition::GameOver { .. } => {
                    game_over = true;
                }
            }
        }
    }
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
