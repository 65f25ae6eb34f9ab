//! Game session: history, current move pointer and transitions.

use tracing::{debug, info, instrument};

use crate::invariants::{GameInvariants, InvariantSet};
use crate::rules::{Verdict, evaluate, is_full};
use crate::{
    Board, GameStatus, History, HistoryError, Location, MoveError, Player, Position, Snapshot,
    SortOrder, Square,
};

/// Tic-tac-toe game with time travel.
///
/// The game keeps every board it has produced. [`Game::jump_to`] moves
/// the current-move pointer without touching the history; the next legal
/// [`Game::play`] discards whatever lay beyond the pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) history: History,
    pub(crate) current_move: usize,
    pub(crate) sort_order: SortOrder,
}

impl Game {
    /// Creates a new game with the move list in ascending order.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::Ascending)
    }

    /// Creates a new game with the given move-list order.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: History::new(),
            current_move: 0,
            sort_order,
        }
    }

    /// Replays `positions` from an empty board, rejecting the first illegal one.
    #[instrument(skip(positions))]
    pub fn replay(positions: &[usize]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &pos in positions {
            game.try_play(pos)?;
        }
        Ok(game)
    }

    /// Every snapshot produced so far.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// The displayed snapshot.
    pub fn current_snapshot(&self) -> &Snapshot {
        &self.history.snapshots()[self.current_move]
    }

    /// The displayed board.
    pub fn current_board(&self) -> &Board {
        self.current_snapshot().board()
    }

    /// Player who moves next from the current snapshot.
    pub fn next_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Current move-list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Evaluator verdict on the displayed board.
    pub fn verdict(&self) -> Verdict {
        evaluate(self.current_board())
    }

    /// Win, draw, or the next player, for the displayed board.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn current_status(&self) -> GameStatus {
        let board = self.current_board();
        match evaluate(board) {
            Verdict::Win { player, .. } => GameStatus::Won(player),
            Verdict::NoWin if is_full(board) => GameStatus::Draw,
            Verdict::NoWin => GameStatus::InProgress {
                next: self.next_player(),
            },
        }
    }

    /// Places the next player's mark at `index`, reporting why it could not.
    ///
    /// On success the history is cut back to the current move before the
    /// new board is appended, and the current move advances to it.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn try_play(&mut self, index: usize) -> Result<Location, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        let board = self.current_board();

        if evaluate(board) != Verdict::NoWin {
            return Err(MoveError::GameOver);
        }
        if !board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.next_player();
        let mut next = *board;
        next.set(pos, Square::Occupied(player));
        let location = pos.location();

        self.current_move = self
            .history
            .branch_from(self.current_move, Snapshot::after_move(next, location));
        info!(%player, %pos, current_move = self.current_move, "Move played");

        debug_assert!(
            GameInvariants::check_all(&*self).is_ok(),
            "history invariants violated after play"
        );
        Ok(location)
    }

    /// Places the next player's mark at `index`.
    ///
    /// Illegal plays (occupied square, decided game, bad index) leave the
    /// game untouched.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) {
        if let Err(e) = self.try_play(index) {
            debug!(index, error = %e, "Ignoring illegal play");
        }
    }

    /// Makes snapshot `move_index` the current one.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), HistoryError> {
        if move_index >= self.history.len() {
            return Err(HistoryError::OutOfRange {
                requested: move_index,
                len: self.history.len(),
            });
        }
        debug!(from = self.current_move, to = move_index, "Jumping");
        self.current_move = move_index;
        Ok(())
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggle();
        debug!(sort_order = ?self.sort_order, "Sort order toggled");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_starts_with_x() {
        let game = Game::new();
        assert_eq!(game.current_move(), 0);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.next_player(), Player::X);
        assert_eq!(
            game.current_status(),
            GameStatus::InProgress { next: Player::X }
        );
    }

    #[test]
    fn test_play_alternates_marks() {
        let mut game = Game::new();
        game.play(4);
        game.play(0);
        assert_eq!(
            game.current_board().get(Position::Center),
            Square::Occupied(Player::X)
        );
        assert_eq!(
            game.current_board().get(Position::TopLeft),
            Square::Occupied(Player::O)
        );
        assert_eq!(game.next_player(), Player::X);
    }

    #[test]
    fn test_try_play_reports_rejections() {
        let mut game = Game::new();
        assert_eq!(game.try_play(9), Err(MoveError::OutOfBounds(9)));
        assert_eq!(game.try_play(4), Ok(Location::new(1, 1)));
        assert_eq!(
            game.try_play(4),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_try_play_after_win_is_game_over() {
        let mut game = Game::replay(&[0, 4, 1, 5, 2]).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(game.try_play(8), Err(MoveError::GameOver));
    }

    #[test]
    fn test_jump_to_out_of_range() {
        let mut game = Game::new();
        game.play(0);
        assert_eq!(
            game.jump_to(2),
            Err(HistoryError::OutOfRange {
                requested: 2,
                len: 2
            })
        );
        assert_eq!(game.current_move(), 1);
    }

    #[test]
    fn test_toggle_sort_order_leaves_history_alone() {
        let mut game = Game::replay(&[0, 4]).unwrap_or_else(|e| panic!("{e}"));
        let before = game.history().clone();
        game.toggle_sort_order();
        assert_eq!(game.sort_order(), SortOrder::Descending);
        assert_eq!(game.history(), &before);
        assert_eq!(game.current_move(), 2);
        game.toggle_sort_order();
        assert_eq!(game.sort_order(), SortOrder::Ascending);
    }
}
