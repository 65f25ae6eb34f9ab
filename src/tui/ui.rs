//! Stateless UI rendering for the game screen.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_tictactoe::{Player, Position, Projection, Square};

use super::app::{App, Focus};

const CELL_WIDTH: u16 = 7;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = 5;

/// Renders the whole screen for the current application state.
pub fn draw(frame: &mut Frame, app: &App) {
    let projection = app.game().projection();

    let [title, body, status, help] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(BOARD_HEIGHT + 2),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let title_text = Paragraph::new("Rewind Games - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .centered();
    frame.render_widget(title_text, title);

    let [board_area, history_area] =
        Layout::horizontal([Constraint::Length(BOARD_WIDTH + 4), Constraint::Min(20)])
            .areas(body);
    draw_board(frame, board_area, app, &projection);
    draw_history(frame, history_area, app, &projection);

    let status_text = Paragraph::new(projection.status.as_str())
        .style(Style::default().fg(Color::Yellow))
        .centered()
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, status);

    let help_text = Paragraph::new(
        "arrows/hjkl move  enter play/jump  1-9 play  tab focus  s sort  q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .centered();
    frame.render_widget(help_text, help);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, projection: &Projection) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Board")
        .border_style(focus_style(*app.focus() == Focus::Board));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, projection, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, projection: &Projection, row: usize) {
    let cols = Layout::horizontal([
        Constraint::Length(CELL_WIDTH),
        Constraint::Length(1),
        Constraint::Length(CELL_WIDTH),
        Constraint::Length(1),
        Constraint::Length(CELL_WIDTH),
    ])
    .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], app, projection, pos);
        }
        if col < 2 {
            let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, projection: &Projection, pos: Position) {
    let square = projection.board.get(pos);

    let (symbol, base_style) = match square {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if pos == *app.cursor() && *app.focus() == Focus::Board {
        base_style.bg(Color::White).fg(Color::Black)
    } else if projection.winning_line.contains(&pos) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {symbol} "), style))).centered();
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let line = "─".repeat(BOARD_WIDTH as usize);
    let sep = Paragraph::new(line).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App, projection: &Projection) {
    let sort_label = app.game().sort_order().toggle_label();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Moves [s: {sort_label}]"))
        .border_style(focus_style(*app.focus() == Focus::History));

    // The current move is plain text in the list, every other row a jump target.
    let items: Vec<ListItem> = projection
        .move_list
        .iter()
        .map(|entry| {
            let style = if entry.is_current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            ListItem::new(Line::from(Span::styled(entry.label.clone(), style)))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_symbol("> ")
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if *app.focus() == Focus::History {
        state.select(Some(*app.selected_row()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [vert] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(vert);
    rect
}
