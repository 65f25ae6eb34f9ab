//! Read-only view of a game for front-ends.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{Board, Game, Location, Position};

/// Order in which the move list is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Caption for the control that switches away from this order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort Descending",
            Self::Descending => "Sort Ascending",
        }
    }

    /// True for [`SortOrder::Ascending`].
    pub fn is_ascending(self) -> bool {
        self == Self::Ascending
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct MoveEntry {
    /// Text shown for the row.
    pub label: String,
    /// History index the row jumps to.
    pub index: usize,
    /// Whether this row is the current move.
    pub is_current: bool,
}

/// Everything a front-end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    /// The displayed board.
    pub board: Board,
    /// Status line, e.g. `Next player: O`.
    pub status: String,
    /// Squares of the winning line, empty unless the board is won.
    pub winning_line: Vec<Position>,
    /// Move list in presentation order.
    pub move_list: Vec<MoveEntry>,
    /// Whether `move_list` runs from game start to latest move.
    pub sort_ascending: bool,
}

/// Label for history row `index`.
pub fn move_label(index: usize, location: Option<Location>, is_current: bool) -> String {
    match (is_current, index, location) {
        (true, _, _) => format!("You are at move #{index}"),
        (false, 0, _) => "Go to game start".to_string(),
        (false, _, Some(location)) => format!("Go to move #{index} {location}"),
        (false, _, None) => format!("Go to move #{index}"),
    }
}

impl Game {
    /// Builds the move list in the current sort order.
    #[instrument(skip(self))]
    pub fn move_list(&self) -> Vec<MoveEntry> {
        let mut entries: Vec<MoveEntry> = self
            .history()
            .iter()
            .enumerate()
            .map(|(index, snapshot)| {
                let is_current = index == self.current_move();
                MoveEntry::new(
                    move_label(index, snapshot.location(), is_current),
                    index,
                    is_current,
                )
            })
            .collect();

        if !self.sort_order().is_ascending() {
            entries.reverse();
        }
        entries
    }

    /// Snapshot of everything a front-end renders.
    #[instrument(skip(self), fields(current_move = self.current_move()))]
    pub fn projection(&self) -> Projection {
        Projection {
            board: *self.current_board(),
            status: self.current_status().to_string(),
            winning_line: self.verdict().line().map(Vec::from).unwrap_or_default(),
            move_list: self.move_list(),
            sort_ascending: self.sort_order().is_ascending(),
        }
    }
}
