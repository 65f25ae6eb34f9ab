//! Rewind Games library - tic-tac-toe front-ends
//!
//! Game rules live in the `rewind_tictactoe` crate; this crate wires them
//! to the outside world.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with defaults
//! - **Logging**: tracing subscriber setup (file for the TUI, stderr otherwise)
//! - **Replay**: apply a script of moves and print the resulting view
//! - **TUI**: interactive ratatui front-end with time travel
//!
//! # Example
//!
//! ```
//! use rewind_games::{ReplayScript, render_text};
//! use rewind_tictactoe::SortOrder;
//!
//! # fn example() -> anyhow::Result<()> {
//! let moves = ["0", "4", "1", "5", "2"].map(String::from);
//! let game = ReplayScript::parse(&moves, None, SortOrder::Ascending)?.run()?;
//! assert!(render_text(&game.projection()).contains("Winner: X"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
pub mod logging;
mod replay;
pub mod tui;

pub use cli::{Cli, Command, OutputFormat};
pub use config::{AppConfig, ConfigError};
pub use replay::{ReplayScript, render, render_text};
