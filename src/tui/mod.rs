//! Terminal UI for Rewind Games.

mod app;
mod input;
mod ui;

pub use app::{App, AppAction, Focus};

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io::{self, Write};
use tracing::{error, info, instrument, warn};

use crate::AppConfig;

/// Runs the interactive game until the player quits.
#[instrument(skip(config))]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    crate::logging::init_file_logging(config)?;
    info!("Starting Rewind Games TUI");

    let _guard = TerminalGuard::enter(io::stdout())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let app = App::new(*config.sort());
    let res = run_app(&mut terminal, app);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Raw mode and the alternate screen, undone on drop.
///
/// Dropping restores the terminal on every exit path, including a failed
/// setup step and a panic in the game loop.
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { out };
        execute!(guard.out, EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(self.out, LeaveAlternateScreen, Show) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
    }
}

/// Draws, waits for a key, applies it; repeats until [`AppAction::Quit`].
#[instrument(skip_all)]
fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Skip key release events (crossterm fires both press and release on some platforms).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if app.handle_key(key) == AppAction::Quit {
                info!(
                    moves = app.game().history().len() - 1,
                    status = %app.game().current_status(),
                    "User quit"
                );
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    const LEAVE_ALTERNATE_SCREEN: &str = "\x1b[?1049l";
    const SHOW_CURSOR: &str = "\x1b[?25h";

    #[test]
    fn test_guard_restores_screen_on_drop() {
        let mut out = Vec::new();
        drop(TerminalGuard { out: &mut out });
        let written = String::from_utf8_lossy(&out);
        assert!(written.contains(LEAVE_ALTERNATE_SCREEN));
        assert!(written.contains(SHOW_CURSOR));
    }

    #[test]
    fn test_guard_restores_screen_on_panic() {
        let mut out = Vec::new();
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _guard = TerminalGuard { out: &mut out };
            panic!("game loop crashed");
        }));
        assert!(result.is_err());
        assert!(String::from_utf8_lossy(&out).contains(LEAVE_ALTERNATE_SCREEN));
    }
}
