//! Board snapshots and the branching move history.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{Board, Location};

/// A board as it stood after a move.
///
/// The initial snapshot has no location; every later one records the
/// square that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub(crate) board: Board,
    pub(crate) location: Option<Location>,
}

impl Snapshot {
    /// The empty starting board.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            location: None,
        }
    }

    /// A board produced by playing at `location`.
    pub fn after_move(board: Board, location: Location) -> Self {
        Self {
            board,
            location: Some(location),
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Where the move that produced this board was played.
    pub fn location(&self) -> Option<Location> {
        self.location
    }
}

/// Ordered snapshots, index 0 being the empty board.
///
/// Never empty. Appending after an earlier snapshot discards every
/// snapshot past it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    pub(crate) snapshots: Vec<Snapshot>,
}

impl History {
    /// A history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
        }
    }

    /// Number of snapshots (always at least one).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot at `index`.
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// All snapshots in play order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Iterates snapshots in play order.
    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    /// Keeps snapshots `0..=parent`, then appends `snapshot`.
    ///
    /// Returns the index of the appended snapshot.
    #[instrument(skip(self, snapshot), fields(len = self.snapshots.len()))]
    pub(crate) fn branch_from(&mut self, parent: usize, snapshot: Snapshot) -> usize {
        let discarded = self.snapshots.len().saturating_sub(parent + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future moves");
        }
        self.snapshots.truncate(parent + 1);
        self.snapshots.push(snapshot);
        self.snapshots.len() - 1
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    fn snapshot_with(pos: Position, player: Player) -> Snapshot {
        let mut board = Board::new();
        board.set(pos, Square::Occupied(player));
        Snapshot::after_move(board, pos.location())
    }

    #[test]
    fn test_new_history_holds_empty_board() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
        assert_eq!(history.get(0), Some(&Snapshot::initial()));
        assert_eq!(history.get(0).and_then(Snapshot::location), None);
    }

    #[test]
    fn test_branch_from_end_appends() {
        let mut history = History::new();
        let idx = history.branch_from(0, snapshot_with(Position::Center, Player::X));
        assert_eq!(idx, 1);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_branch_from_middle_discards_future() {
        let mut history = History::new();
        history.branch_from(0, snapshot_with(Position::Center, Player::X));
        history.branch_from(1, snapshot_with(Position::TopLeft, Player::O));
        history.branch_from(2, snapshot_with(Position::TopRight, Player::X));
        assert_eq!(history.len(), 4);

        let replacement = snapshot_with(Position::BottomLeft, Player::X);
        let idx = history.branch_from(0, replacement);
        assert_eq!(idx, 1);
        assert_eq!(history.len(), 2);
        assert_eq!(history.get(1), Some(&replacement));
    }
}
