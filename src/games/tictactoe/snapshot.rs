//! Immutable board snapshots stored in the game history.

use super::{Board, MoveRecord, Player, Position};
use derive_getters::Getters;

/// A board together with the move that produced it.
///
/// The initial snapshot has an empty board and no move. Snapshots are only
/// built by [`Snapshot::successor`], so the recorded move always matches the
/// board.
///
/// ```compile_fail
/// fn from_json<T: serde::de::DeserializeOwned>() {}
/// from_json::<timetravel_tictactoe::Snapshot>();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Snapshot {
    /// The board after the move.
    board: Board,
    /// The move that produced this board.
    last_move: Option<MoveRecord>,
}

impl Snapshot {
    /// The game-start snapshot.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Snapshot that follows this one when `player` marks `position`.
    pub fn successor(&self, player: Player, position: Position) -> Self {
        Self {
            board: self.board.with_mark(position, player),
            last_move: Some(MoveRecord::new(player, position)),
        }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}
