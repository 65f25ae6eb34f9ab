//! Non-interactive replay: apply a script of moves and print the view.

use anyhow::{Context, Result, anyhow};
use rewind_tictactoe::{Game, Position, Projection, SortOrder};
use tracing::{info, instrument};

use crate::cli::OutputFormat;

/// A parsed `replay` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayScript {
    /// Squares to play, in order.
    pub moves: Vec<Position>,
    /// Move to jump to once every square is played.
    pub jump: Option<usize>,
    /// Move-list order for the printed view.
    pub sort: SortOrder,
}

impl ReplayScript {
    /// Parses square names or indices into a script.
    #[instrument(skip(moves))]
    pub fn parse(moves: &[String], jump: Option<usize>, sort: SortOrder) -> Result<Self> {
        let moves = moves
            .iter()
            .map(|m| {
                Position::from_label_or_number(m)
                    .ok_or_else(|| anyhow!("Unknown square '{}' (use 0-8 or a label like top-left)", m))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { moves, jump, sort })
    }

    /// Plays the script, failing on the first rejected move or jump.
    #[instrument(skip(self), fields(moves = self.moves.len()))]
    pub fn run(&self) -> Result<Game> {
        let mut game = Game::with_sort_order(self.sort);
        for (i, pos) in self.moves.iter().enumerate() {
            game.try_play(pos.to_index())
                .with_context(|| format!("Move {} ({}) was rejected", i + 1, pos))?;
        }
        if let Some(jump) = self.jump {
            game.jump_to(jump).context("Jump failed")?;
        }
        info!(
            history = game.history().len(),
            current_move = game.current_move(),
            "Replay finished"
        );
        Ok(game)
    }
}

/// Renders a projection in the requested format.
pub fn render(projection: &Projection, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(projection).context("Failed to serialize view")
        }
        OutputFormat::Text => Ok(render_text(projection)),
    }
}

/// Board grid, status line, then the move list with `>` on the current move.
pub fn render_text(projection: &Projection) -> String {
    let mut out = projection.board.display();
    out.push_str("\n\n");
    out.push_str(&projection.status);
    out.push('\n');
    if !projection.winning_line.is_empty() {
        let line: Vec<&str> = projection.winning_line.iter().map(|p| p.label()).collect();
        out.push_str(&format!("Winning line: {}\n", line.join(", ")));
    }
    out.push('\n');
    for entry in &projection.move_list {
        let marker = if entry.is_current { '>' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, entry.label));
    }
    out
}
