//! Draw detection logic for tic-tac-toe.

use super::win::{Verdict, evaluate};
use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no completed line.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && evaluate(board) == Verdict::NoWin
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    fn board_from(marks: &str) -> Board {
        let mut board = Board::new();
        for (pos, c) in Position::ALL.into_iter().zip(marks.chars()) {
            match c {
                'X' => board.set(pos, Square::Occupied(Player::X)),
                'O' => board.set(pos, Square::Occupied(Player::O)),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(&board_from("....X....")));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        assert!(is_draw(&board_from("XOXOXXOXO")));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // Full board, but X holds the main diagonal
        let board = board_from("XOOOXXOXX");
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
