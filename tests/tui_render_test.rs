//! Tests for painting the game view into a terminal buffer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};
use timetravel_tictactoe::{App, Focus, GameState, HighlightColor, UiEvent, draw};

fn paint(app: &App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_new_game_frame() {
    let app = App::default();
    let screen = text(&paint(&app));
    assert!(screen.contains("Next player: X"));
    assert!(screen.contains("Go to game start"));
    assert!(screen.contains("Show Moves in Descending Order"));
}

#[test]
fn test_winning_cells_are_highlighted() {
    let app = App::new(
        GameState::replay(&[0, 1, 4, 2, 8]).unwrap(),
        HighlightColor::Green,
    );
    let buffer = paint(&app);
    assert!(text(&buffer).contains("Winner: X"));

    let highlighted_marks = buffer
        .content()
        .iter()
        .filter(|cell| cell.bg == Color::Green && cell.symbol() == "X")
        .count();
    assert_eq!(highlighted_marks, 3);
}

#[test]
fn test_keys_drive_the_frame() {
    let mut app = App::default();
    app.handle_key(KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE));
    app.handle_key(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE));
    app.handle_key(KeyEvent::new(KeyCode::Char('o'), KeyModifiers::NONE));

    let screen = text(&paint(&app));
    assert!(screen.contains("Next player: X"));
    assert!(screen.contains("Go to move #2: O at position (0,0)"));
    assert!(screen.contains("Show Moves in Ascending Order"));

    let newest = screen.find("Go to move #2").unwrap();
    let oldest = screen.find("Go to game start").unwrap();
    assert!(newest < oldest);
}

#[test]
fn test_tab_switches_focus() {
    let mut app = App::default();
    assert_eq!(app.focus(), Focus::Board);
    app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
    assert_eq!(app.focus(), Focus::Moves);
}

#[test]
fn test_rejected_event_leaves_app_usable() {
    let mut app = App::default();
    app.dispatch(UiEvent::HistoryEntryActivated(7));
    assert_eq!(app.game().history().len(), 1);
    assert!(text(&paint(&app)).contains("Next player: X"));
}
