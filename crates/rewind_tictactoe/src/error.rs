//! Errors reported by game transitions.

use crate::Position;

/// Reason a play was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a square (must be 0-8).
    #[display("Position {_0} is out of bounds (must be 0-8)")]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(Position),

    /// The current board already has a winner.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Reason a history navigation was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// The requested move is past the end of the history.
    #[display("Move #{requested} is out of range (history has {len} entries)")]
    OutOfRange {
        /// Requested move index.
        requested: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

impl std::error::Error for HistoryError {}
