//! Keyboard mapping.

use crossterm::event::KeyCode;
use solo_tictactoe::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor one cell.
    Cursor(KeyCode),
    /// Activate the cell under the cursor.
    ActivateCursor,
    /// Activate a cell directly (keys 1-9).
    Activate(Position),
    /// Play again.
    Reset,
    /// Leave the game.
    Quit,
}

/// Maps a key to a command. Unbound keys map to `None`.
pub fn command_for(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Some(Command::Cursor(key)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::ActivateCursor),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            Position::from_label_or_number(&c.to_string()).map(Command::Activate)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Moves the cursor with the arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };

    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
        assert_eq!(move_cursor(Position::MiddleRight, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_digit_keys_map_to_cells() {
        assert_eq!(command_for(KeyCode::Char('1')), Some(Command::Activate(Position::TopLeft)));
        assert_eq!(command_for(KeyCode::Char('9')), Some(Command::Activate(Position::BottomRight)));
        assert_eq!(command_for(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(command_for(KeyCode::Char('q')), Some(Command::Quit));
        assert_eq!(command_for(KeyCode::Char('r')), Some(Command::Reset));
        assert_eq!(command_for(KeyCode::Enter), Some(Command::ActivateCursor));
        assert_eq!(command_for(KeyCode::Tab), None);
    }
}
