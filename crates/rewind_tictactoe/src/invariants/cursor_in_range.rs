//! Cursor invariant: the current move names an existing snapshot.

use super::Invariant;
use crate::Game;

/// Invariant: history is non-empty and the current move indexes into it.
pub struct CursorInRangeInvariant;

impl Invariant<Game> for CursorInRangeInvariant {
    fn holds(game: &Game) -> bool {
        !game.history().is_empty() && game.current_move() < game.history().len()
    }

    fn description() -> &'static str {
        "Current move indexes an existing snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(CursorInRangeInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_past_the_end_violates() {
        let mut game = Game::new();
        game.play(0);
        game.current_move = 2;
        assert!(!CursorInRangeInvariant::holds(&game));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut game = Game::new();
        game.history.snapshots.clear();
        assert!(!CursorInRangeInvariant::holds(&game));
    }
}
