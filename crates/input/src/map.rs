//! Key mapping from terminal events to game actions.

use crate::types::InputAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<InputAction> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(InputAction::ShiftLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(InputAction::ShiftRight)
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(InputAction::RotateClockwise),

        // Drop
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S')
        | KeyCode::Char(' ') => Some(InputAction::HardDrop),

        KeyCode::Char('p') | KeyCode::Char('P') => Some(InputAction::Pause),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key should restart after a game over.
pub fn should_restart(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
}
