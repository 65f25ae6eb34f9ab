//! Command-line interface for rewind_games.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Rewind Games - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind_games")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used when it is missing)
    #[arg(short, long, default_value = "rewind_games.toml", global = true)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `tui`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Tui,

    /// Apply a list of moves and print the resulting view
    Replay {
        /// Comma-separated squares, as indices (0-8) or labels (top-left, center, ...)
        #[arg(short, long, value_delimiter = ',', num_args = 1..)]
        moves: Vec<String>,

        /// Jump to this move after replaying
        #[arg(short, long)]
        jump: Option<usize>,

        /// List moves latest first
        #[arg(long)]
        descending: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// How `replay` prints the view.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Board grid, status and move list
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let cli = Cli::parse_from(["rewind_games"]);
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from("rewind_games.toml"));
    }

    #[test]
    fn test_replay_arguments() {
        let cli = Cli::parse_from([
            "rewind_games",
            "replay",
            "--moves",
            "0,center,8",
            "--jump",
            "1",
            "--descending",
            "--format",
            "json",
        ]);
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: vec!["0".into(), "center".into(), "8".into()],
                jump: Some(1),
                descending: true,
                format: OutputFormat::Json,
            })
        );
    }

    #[test]
    fn test_config_flag_after_subcommand() {
        let cli = Cli::parse_from(["rewind_games", "tui", "--config", "alt.toml"]);
        assert_eq!(cli.command, Some(Command::Tui));
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
    }
}
