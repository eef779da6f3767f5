//! Headless replay of a move list into a single view.

use super::event::{Dispatcher, UiEvent};
use super::tree::GameView;
use crate::config::Settings;
use crate::games::tictactoe::{GameError, GameState, Position};
use tracing::{debug, instrument};

/// Plays `moves` from a fresh game, optionally jumps to `jump`, and returns
/// the resulting view.
///
/// The move list starts newest first when either the settings or
/// `descending` ask for it. Moves on occupied cells or a decided board are
/// skipped as they would be in play.
///
/// # Errors
///
/// Returns [`GameError::StepOutOfRange`] if `jump` is past the end of the
/// replayed history.
#[instrument(skip(settings))]
pub fn replay_view(
    settings: &Settings,
    moves: &[Position],
    jump: Option<usize>,
    descending: bool,
) -> Result<GameView, GameError> {
    let ascending = *settings.moves_ascending() && !descending;
    let mut dispatcher = Dispatcher::new(GameState::with_move_order(ascending));
    for cell in moves {
        dispatcher.dispatch(UiEvent::CellActivated(cell.to_index()))?;
    }
    if let Some(step) = jump {
        dispatcher.dispatch(UiEvent::HistoryEntryActivated(step))?;
    }

    let view = dispatcher.view().clone();
    debug!(status = %view.status(), "Replayed view");
    Ok(view)
}
