//! Monotonic board invariant: each move fills exactly one empty square.

use super::{Invariant, all_steps, changed_squares};
use crate::{Game, Square};

/// Invariant: consecutive snapshots differ by one square going from
/// empty to occupied, and the first snapshot is the empty board.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let starts_empty = game
            .history()
            .get(0)
            .is_some_and(|s| s.board().occupied() == 0);

        starts_empty
            && all_steps(game, |_, prev, next| {
                match changed_squares(prev, next).as_slice() {
                    [pos] => prev.get(*pos) == Square::Empty && next.get(*pos) != Square::Empty,
                    _ => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each move fills exactly one previously empty square"
    }
}
