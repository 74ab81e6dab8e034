//! Input handling - convert key events to commands

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use cave_core::action::{Command, Direction};

/// Convert a key event to a game command.
///
/// Letters follow the console bindings (`W/A/S/D`, `E`, `I`, `Q`, any case);
/// arrow keys also move and Esc or Ctrl+C quits.
pub fn key_to_command(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up => Some(Command::Move(Direction::Up)),
        KeyCode::Down => Some(Command::Move(Direction::Down)),
        KeyCode::Left => Some(Command::Move(Direction::Left)),
        KeyCode::Right => Some(Command::Move(Direction::Right)),
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char(c) => Command::from_key(c),
        _ => None,
    }
}
