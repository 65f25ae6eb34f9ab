//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use rewind_tictactoe::{Game, Position, SortOrder};
use tracing::{debug, instrument, warn};

use super::input::{Direction, move_cursor, move_selection};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor.
    #[default]
    Board,
    /// Arrows move the move-list selection.
    History,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    game: Game,
    cursor: Position,
    focus: Focus,
    /// Row of the move list in display order, not a history index.
    selected_row: usize,
}

impl App {
    /// Creates a new application.
    #[instrument]
    pub fn new(sort: SortOrder) -> Self {
        Self {
            game: Game::with_sort_order(sort),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_row: 0,
        }
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                self.select_current();
            }
            KeyCode::Char('s') => {
                self.game.toggle_sort_order();
                self.select_current();
            }
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(pos) = c
                    .to_digit(10)
                    .and_then(|d| Position::from_index(d as usize - 1))
                {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.play(self.cursor),
                Focus::History => self.jump_to_selected(),
            },
            code => {
                if let Some(direction) = Direction::from_key(code) {
                    self.navigate(direction);
                }
            }
        }
        AppAction::Continue
    }

    fn navigate(&mut self, direction: Direction) {
        match self.focus {
            Focus::Board => self.cursor = move_cursor(self.cursor, direction),
            Focus::History => {
                let len = self.game.history().len();
                self.selected_row = move_selection(self.selected_row, len, direction);
            }
        }
    }

    fn play(&mut self, pos: Position) {
        self.game.play(pos.to_index());
        self.select_current();
    }

    fn jump_to_selected(&mut self) {
        let Some(entry) = self.game.move_list().into_iter().nth(self.selected_row) else {
            return;
        };
        if let Err(e) = self.game.jump_to(entry.index) {
            warn!(error = %e, "Jump rejected");
        }
    }

    /// Points the move-list selection at the current move.
    fn select_current(&mut self) {
        if let Some(row) = self.game.move_list().iter().position(|e| e.is_current) {
            debug!(row, "Selecting current move");
            self.selected_row = row;
        }
    }
}
