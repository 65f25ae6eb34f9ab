//! Rewind Games - Unified CLI
//!
//! Tic-tac-toe with move history and time travel.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use rewind_games::{AppConfig, Cli, Command, OutputFormat, ReplayScript, logging, render, tui};
use rewind_tictactoe::SortOrder;
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => tui::run_tui(&config),
        Command::Replay {
            moves,
            jump,
            descending,
            format,
        } => run_replay(&config, &moves, jump, descending, format),
    }
}

/// Replays a script of moves and prints the resulting view to stdout.
#[instrument(skip(config, moves))]
fn run_replay(
    config: &AppConfig,
    moves: &[String],
    jump: Option<usize>,
    descending: bool,
    format: OutputFormat,
) -> Result<()> {
    logging::init_stderr_logging(config);

    let sort = if descending {
        SortOrder::Descending
    } else {
        *config.sort()
    };
    info!(moves = moves.len(), ?sort, "Replaying moves");

    let game = ReplayScript::parse(moves, jump, sort)?.run()?;
    println!("{}", render(&game.projection(), format)?);
    Ok(())
}
