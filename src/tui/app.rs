//! Application state for the terminal front end.

use super::input::{Focus, KeyAction, key_action, move_cursor};
use crate::config::HighlightColor;
use crate::games::tictactoe::{GameState, Position};
use crate::view::{Dispatcher, GameView, UiEvent};
use crossterm::event::KeyEvent;
use tracing::{debug, instrument, warn};

/// Main application state.
///
/// Wraps the [`Dispatcher`] with the bits of state that only matter to the
/// terminal: focus, the board cursor, and the move list selection.
#[derive(Debug)]
pub struct App {
    dispatcher: Dispatcher,
    focus: Focus,
    board_cursor: Position,
    selected: usize,
    highlight: HighlightColor,
    should_quit: bool,
}

impl App {
    /// Creates a new application around `game`.
    #[instrument(skip(game))]
    pub fn new(game: GameState, highlight: HighlightColor) -> Self {
        let dispatcher = Dispatcher::new(game);
        let selected = dispatcher.view().emphasized_index().unwrap_or(0);
        Self {
            dispatcher,
            focus: Focus::Board,
            board_cursor: Position::Center,
            selected,
            highlight,
            should_quit: false,
        }
    }

    /// Current display tree.
    pub fn view(&self) -> &GameView {
        self.dispatcher.view()
    }

    /// The game being played.
    pub fn game(&self) -> &GameState {
        self.dispatcher.game()
    }

    /// Widget receiving navigation keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Cell under the board cursor.
    pub fn board_cursor(&self) -> Position {
        self.board_cursor
    }

    /// Display index of the selected move list entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Winning line highlight colour.
    pub fn highlight(&self) -> HighlightColor {
        self.highlight
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = key_action(key, self.focus);
        debug!(?action, "Key mapped");

        match action {
            KeyAction::Dispatch(event) => self.dispatch(event),
            KeyAction::MoveCursor(code) => {
                self.board_cursor = move_cursor(self.board_cursor, code);
            }
            KeyAction::SelectPrevious => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyAction::SelectNext => {
                let last = self.view().moves().len().saturating_sub(1);
                self.selected = (self.selected + 1).min(last);
            }
            KeyAction::Activate => match self.focus {
                Focus::Board => {
                    self.dispatch(UiEvent::CellActivated(self.board_cursor.to_index()));
                }
                Focus::Moves => {
                    if let Some(step) = self.view().moves().get(self.selected).map(|e| *e.step()) {
                        self.dispatch(UiEvent::HistoryEntryActivated(step));
                    }
                }
            },
            KeyAction::SwitchFocus => self.focus = self.focus.toggle(),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Ignore => {}
        }
    }

    /// Forwards `event` to the game and resyncs the list selection with the
    /// emphasized entry.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, event: UiEvent) {
        if let Err(e) = self.dispatcher.dispatch(event) {
            warn!(error = %e, "Event rejected");
            return;
        }
        if let Some(index) = self.view().emphasized_index() {
            self.selected = index;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(GameState::new(), HighlightColor::default())
    }
}
