//! Stateless UI rendering for the game view.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::app::App;
use super::input::Focus;
use crate::config::HighlightColor;
use crate::games::tictactoe::{GamePhase, Player, Square};
use crate::view::{CellView, DRAWN_NOTICE};

/// Key legend shown at the bottom of the screen.
pub const HELP: &str = "1-9/Enter: move  Tab: focus  o: order  q: quit";

/// Draws one frame of the app.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(11),   // Board and info
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(23), Constraint::Min(20)])
        .split(chunks[1]);

    draw_board(frame, columns[0], app);
    draw_info(frame, columns[1], app);

    let help = Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[2]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let border_style = focus_style(app.focus() == Focus::Board);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("Board");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3); 3])
        .split(inner);

    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(7); 3])
            .split(*row_area);
        for (cell, cell_area) in app.view().row(row).iter().zip(cols.iter()) {
            draw_cell(frame, *cell_area, cell, app);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, app: &App) {
    let mut style = match cell.square() {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => {
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
        }
        Square::Occupied(Player::O) => {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        }
    };
    if *cell.winning() {
        style = style.bg(highlight_color(app.highlight())).fg(Color::Black);
    }

    let mut block_style = Style::default().fg(Color::DarkGray);
    if app.focus() == Focus::Board && *cell.position() == app.board_cursor() {
        block_style = block_style.fg(Color::White).add_modifier(Modifier::BOLD);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(cell.label(), style)))
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(block_style));
    frame.render_widget(paragraph, area);
}

fn draw_info(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.view();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status
            Constraint::Length(1), // Phase
            Constraint::Length(1), // Order button
            Constraint::Min(3),    // Moves
        ])
        .split(area);

    let status = Paragraph::new(view.status().as_str())
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    frame.render_widget(status, chunks[0]);

    let phase_text = match view.phase() {
        GamePhase::Drawn => DRAWN_NOTICE,
        GamePhase::Won(_) | GamePhase::InProgress => "",
    };
    frame.render_widget(
        Paragraph::new(phase_text).style(Style::default().fg(Color::Magenta)),
        chunks[1],
    );

    let button = Paragraph::new(format!("[o] {}", view.order_button()));
    frame.render_widget(button, chunks[2]);

    let items: Vec<ListItem> = view
        .moves()
        .iter()
        .enumerate()
        .map(|(number, entry)| {
            let weight = if *entry.emphasized() {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(
                format!("{}. {}", number + 1, entry.label()),
                weight,
            )))
        })
        .collect();

    let focused = app.focus() == Focus::Moves;
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_style(focused))
                .title("Moves"),
        )
        .highlight_style(if focused {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        })
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.selected()));
    frame.render_stateful_widget(list, chunks[3], &mut state);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Terminal colour for a configured highlight.
pub fn highlight_color(color: HighlightColor) -> Color {
    match color {
        HighlightColor::Yellow => Color::Yellow,
        HighlightColor::Green => Color::Green,
        HighlightColor::Cyan => Color::Cyan,
        HighlightColor::Magenta => Color::Magenta,
    }
}
