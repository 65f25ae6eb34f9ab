//! Alternating turn invariant: X fills even steps, O fills odd ones.

use super::{Invariant, all_steps, changed_squares};
use crate::{Game, Player};

/// Invariant: the square filled by step `i` holds the mark of
/// [`Player::for_move`]`(i)`.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        all_steps(game, |i, prev, next| {
            changed_squares(prev, next)
                .iter()
                .all(|pos| next.get(*pos).player() == Some(Player::for_move(i)))
        })
    }

    fn description() -> &'static str {
        "Players alternate, starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    #[test]
    fn test_played_game_holds() {
        let game = Game::replay(&[4, 0, 8, 2]).unwrap_or_else(|e| panic!("{e}"));
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_mark_violates() {
        let mut game = Game::replay(&[4, 0]).unwrap_or_else(|e| panic!("{e}"));
        game.history.snapshots[2]
            .board
            .set(Position::TopLeft, Square::Occupied(Player::X));
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
