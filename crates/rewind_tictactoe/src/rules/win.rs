//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in evaluation order.
///
/// When a board completes several lines at once the first one listed here
/// is reported.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Outcome of evaluating a single board.
///
/// Draw and in-progress are not verdicts: they follow from [`Verdict::NoWin`]
/// plus whether the board is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// `player` holds all three squares of `line`.
    Win {
        /// The winning player.
        player: Player,
        /// The completed line.
        line: [Position; 3],
    },
    /// No line is complete.
    NoWin,
}

impl Verdict {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Verdict::Win { player, .. } => Some(*player),
            Verdict::NoWin => None,
        }
    }

    /// Returns the completed line if there is one.
    pub fn line(&self) -> Option<[Position; 3]> {
        match self {
            Verdict::Win { line, .. } => Some(*line),
            Verdict::NoWin => None,
        }
    }
}

/// Evaluates `board` against the fixed winning lines.
#[instrument]
pub fn evaluate(board: &Board) -> Verdict {
    for line @ [a, b, c] in LINES {
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Verdict::Win { player, line };
        }
    }

    Verdict::NoWin
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    evaluate(board).winner()
}
