//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// Direction a navigation key points in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards row 2.
    Down,
    /// Towards column 0.
    Left,
    /// Towards column 2.
    Right,
}

impl Direction {
    /// Arrow keys and vi-style `hjkl`.
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::Up | KeyCode::Char('k') => Some(Self::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Self::Down),
            KeyCode::Left | KeyCode::Char('h') => Some(Self::Left),
            KeyCode::Right | KeyCode::Char('l') => Some(Self::Right),
            _ => None,
        }
    }
}

/// Moves the board cursor one square, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Moves a list selection one row, stopping at the ends.
pub fn move_selection(selected: usize, len: usize, direction: Direction) -> usize {
    match direction {
        Direction::Up => selected.saturating_sub(1),
        Direction::Down => (selected + 1).min(len.saturating_sub(1)),
        Direction::Left | Direction::Right => selected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Down), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::BottomCenter, Direction::Right), Position::BottomRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::MiddleRight, Direction::Right), Position::MiddleRight);
    }

    #[test]
    fn test_selection_clamps() {
        assert_eq!(move_selection(0, 3, Direction::Up), 0);
        assert_eq!(move_selection(2, 3, Direction::Down), 2);
        assert_eq!(move_selection(1, 3, Direction::Down), 2);
        assert_eq!(move_selection(0, 0, Direction::Down), 0);
    }

    #[test]
    fn test_vi_keys() {
        assert_eq!(Direction::from_key(KeyCode::Char('j')), Some(Direction::Down));
        assert_eq!(Direction::from_key(KeyCode::Char('x')), None);
    }
}
