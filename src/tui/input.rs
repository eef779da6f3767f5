//! Keyboard mapping for the terminal front end.

use crate::games::tictactoe::Position;
use crate::view::UiEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which widget receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The move list.
    Moves,
}

impl Focus {
    /// Switches between board and move list.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward an event to the game.
    Dispatch(UiEvent),
    /// Move the board cursor.
    MoveCursor(KeyCode),
    /// Select the previous move list entry.
    SelectPrevious,
    /// Select the next move list entry.
    SelectNext,
    /// Activate whatever has focus.
    Activate,
    /// Switch focus.
    SwitchFocus,
    /// Leave the game.
    Quit,
    /// Key has no binding.
    Ignore,
}

/// Maps a key press to an action given the current focus.
pub fn key_action(key: KeyEvent, focus: Focus) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('o') => KeyAction::Dispatch(UiEvent::ToggleOrderActivated),
        KeyCode::Tab | KeyCode::BackTab => KeyAction::SwitchFocus,
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Activate,
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| KeyAction::Dispatch(UiEvent::CellActivated(digit as usize - 1)))
            .unwrap_or(KeyAction::Ignore),
        KeyCode::Up if focus == Focus::Moves => KeyAction::SelectPrevious,
        KeyCode::Down if focus == Focus::Moves => KeyAction::SelectNext,
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right)
            if focus == Focus::Board =>
        {
            KeyAction::MoveCursor(code)
        }
        _ => KeyAction::Ignore,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, column) = (cursor.row(), cursor.column());
    let (row, column) = match key {
        KeyCode::Right => (row, (column + 1).min(2)),
        KeyCode::Left => (row, column.saturating_sub(1)),
        KeyCode::Down => ((row + 1).min(2), column),
        KeyCode::Up => (row.saturating_sub(1), column),
        _ => (row, column),
    };
    Position::from_row_column(row, column).unwrap_or(cursor)
}
