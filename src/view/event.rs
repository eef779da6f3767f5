//! Interaction events and the mutate-then-render dispatcher.

use super::render::render;
use super::tree::GameView;
use crate::games::tictactoe::{GameError, GameState, MoveOutcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// An interaction produced by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UiEvent {
    /// A board cell (index 0-8) was activated.
    CellActivated(usize),
    /// A move list entry was activated; carries the history step, not the
    /// display position.
    HistoryEntryActivated(usize),
    /// The order toggle was activated.
    ToggleOrderActivated,
}

/// Owns the single [`GameState`] and the last rendered view.
///
/// Each event is applied to the game and the view is rebuilt before
/// [`dispatch`](Self::dispatch) returns, so no two events interleave.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    game: GameState,
    view: GameView,
}

impl Dispatcher {
    /// Wraps `game` and renders its first frame.
    #[instrument(skip(game))]
    pub fn new(game: GameState) -> Self {
        let view = render(&game);
        Self { game, view }
    }

    /// The game being driven.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// The most recently rendered view.
    pub fn view(&self) -> &GameView {
        &self.view
    }

    /// Applies `event` and re-renders.
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] for an index that does not exist in the current
    /// game; the game and view are unchanged in that case.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, event: UiEvent) -> Result<&GameView, GameError> {
        match event {
            UiEvent::CellActivated(index) => match self.game.activate_index(index) {
                Ok(MoveOutcome::Ignored(reason)) => debug!(%reason, "Activation ignored"),
                Ok(MoveOutcome::Placed(_)) => {}
                Err(e) => {
                    warn!(error = %e, "Rejected cell activation");
                    return Err(e);
                }
            },
            UiEvent::HistoryEntryActivated(step) => {
                if let Err(e) = self.game.jump_to(step) {
                    warn!(error = %e, "Rejected history jump");
                    return Err(e);
                }
            }
            UiEvent::ToggleOrderActivated => self.game.toggle_move_order(),
        }

        self.view = render(&self.game);
        Ok(&self.view)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(GameState::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_re_renders() {
        let mut dispatcher = Dispatcher::default();
        let view = dispatcher.dispatch(UiEvent::CellActivated(4)).unwrap();
        assert_eq!(view.status(), "Next player: O");
        assert_eq!(view.moves().len(), 2);
    }

    #[test]
    fn test_rejected_event_keeps_view() {
        let mut dispatcher = Dispatcher::default();
        let before = dispatcher.view().clone();
        assert!(dispatcher.dispatch(UiEvent::HistoryEntryActivated(3)).is_err());
        assert!(dispatcher.dispatch(UiEvent::CellActivated(11)).is_err());
        assert_eq!(dispatcher.view(), &before);
    }
}
