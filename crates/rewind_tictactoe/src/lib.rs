//! Pure tic-tac-toe logic with move history and time travel.
//!
//! A [`Game`] keeps every board it has produced. Players alternate
//! placing marks with [`Game::play`]; [`Game::jump_to`] revisits an
//! earlier board, and the next play from there discards the abandoned
//! future. Front-ends draw from [`Game::projection`].
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! for pos in [0, 4, 1, 5, 2] {
//!     game.play(pos);
//! }
//! assert_eq!(game.current_status(), GameStatus::Won(Player::X));
//! assert_eq!(game.projection().status, "Winner: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod history;
pub mod invariants;
mod position;
mod projection;
pub mod rules;
mod types;

pub use error::{HistoryError, MoveError};
pub use game::Game;
pub use history::{History, Snapshot};
pub use position::Position;
pub use projection::{MoveEntry, Projection, SortOrder, move_label};
pub use rules::{Verdict, evaluate};
pub use types::{Board, GameStatus, Location, Player, Square};
