//! History consistency invariant: recorded locations match the boards.

use super::{Invariant, changed_squares};
use crate::Game;

/// Invariant: snapshot 0 has no location and every later snapshot
/// records the square its move filled.
///
/// Also implies snapshot `k` has exactly `k` occupied squares once
/// [`MonotonicBoardInvariant`](super::MonotonicBoardInvariant) holds.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let snapshots = game.history().snapshots();
        let Some(first) = snapshots.first() else {
            return false;
        };

        first.location().is_none()
            && snapshots.windows(2).all(|pair| {
                let changed = changed_squares(pair[0].board(), pair[1].board());
                match (changed.as_slice(), pair[1].location()) {
                    ([pos], Some(location)) => pos.location() == location,
                    _ => false,
                }
            })
            && snapshots
                .iter()
                .enumerate()
                .all(|(k, s)| s.board().occupied() == k)
    }

    fn description() -> &'static str {
        "Recorded move locations match the squares each move filled"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Location;

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_after_branching_holds() {
        let mut game = Game::replay(&[0, 1, 2]).unwrap_or_else(|e| panic!("{e}"));
        game.jump_to(1).unwrap_or_else(|e| panic!("{e}"));
        game.play(2);
        assert!(HistoryConsistentInvariant::holds(&game));
        assert_eq!(game.history().len(), 3);
    }

    #[test]
    fn test_wrong_location_violates() {
        let mut game = Game::replay(&[0, 4]).unwrap_or_else(|e| panic!("{e}"));
        game.history.snapshots[2].location = Some(Location::new(2, 2));
        assert!(!HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_located_start_violates() {
        let mut game = Game::new();
        game.history.snapshots[0].location = Some(Location::new(0, 0));
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
