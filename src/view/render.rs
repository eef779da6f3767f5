//! Pure projection of a game into its display tree.

use super::tree::{CellView, GAME_START, GameView, MoveEntry, SHOW_ASCENDING, SHOW_DESCENDING};
use crate::games::tictactoe::{GameState, Position, Snapshot};
use tracing::instrument;

/// Projects `game` into a [`GameView`].
///
/// The whole tree is rebuilt on every call; nothing is cached between frames.
#[instrument(
    level = "debug",
    skip(game),
    fields(cursor = game.cursor(), len = game.history().len())
)]
pub fn render(game: &GameState) -> GameView {
    let board = *game.current().board();
    let winning_line = game.winning_line();

    let cells = Position::ALL.map(|position| {
        let winning = winning_line.is_some_and(|line| line.contains(&position));
        CellView::new(position, board.get(position), winning)
    });

    let status = match winning_line {
        Some([first, _, _]) => format!("Winner: {}", board.get(first).label()),
        None => format!("Next player: {}", game.next_player()),
    };

    let mut moves: Vec<MoveEntry> = game
        .history()
        .iter()
        .enumerate()
        .map(|(step, snapshot)| {
            MoveEntry::new(step, entry_label(step, snapshot), step == game.cursor())
        })
        .collect();
    if !game.move_order_ascending() {
        moves.reverse();
    }

    let order_button = if game.move_order_ascending() {
        SHOW_DESCENDING
    } else {
        SHOW_ASCENDING
    };

    GameView::new(cells, status, game.phase(), order_button.to_string(), moves)
}

fn entry_label(step: usize, snapshot: &Snapshot) -> String {
    match snapshot.last_move() {
        Some(record) if step > 0 => format!("Go to move #{}: {}", step, record),
        _ => GAME_START.to_string(),
    }
}
