//! Game state with move history and time travel.
//!
//! [`GameState`] owns every mutation: placing a mark, jumping to an earlier
//! snapshot, and flipping the move-list display order. Placing a mark after a
//! jump discards the snapshots past the cursor before appending, so history
//! behaves like undo with overwriting redo rather than an append-only log.

use super::action::{IgnoreReason, MoveOutcome, MoveRecord};
use super::error::GameError;
use super::phases::GamePhase;
use super::rules::{Triple, detect_winner};
use super::snapshot::Snapshot;
use super::{Player, Position};
use tracing::{debug, info, instrument};

/// Full game: history of snapshots, the displayed cursor, and the display
/// order preference.
///
/// History is never empty, starts at the empty board, and the cursor always
/// indexes into it. The only way to build a game is through moves, so there
/// is no deserialization path that could break that:
///
/// ```compile_fail
/// fn from_json<T: serde::de::DeserializeOwned>() {}
/// from_json::<timetravel_tictactoe::GameState>();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: Vec<Snapshot>,
    cursor: usize,
    move_order_ascending: bool,
}

impl GameState {
    /// Creates a new game with a single empty snapshot.
    #[instrument]
    pub fn new() -> Self {
        Self::with_move_order(true)
    }

    /// Creates a new game with the given initial move-list order.
    #[instrument]
    pub fn with_move_order(ascending: bool) -> Self {
        Self {
            history: vec![Snapshot::initial()],
            cursor: 0,
            move_order_ascending: ascending,
        }
    }

    /// Builds a game by activating the given cell indices in order.
    ///
    /// Ignored activations are skipped, exactly as they would be in play.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CellOutOfRange`] on the first index above 8.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<Self, GameError> {
        let mut game = Self::new();
        for &index in indices {
            game.activate_index(index)?;
        }
        Ok(game)
    }

    /// All snapshots, oldest first.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The displayed snapshot.
    pub fn current(&self) -> &Snapshot {
        &self.history[self.cursor]
    }

    /// Player whose turn it is at the cursor.
    pub fn next_player(&self) -> Player {
        Player::for_move_count(self.cursor)
    }

    /// Whether the move list is shown oldest first.
    pub fn move_order_ascending(&self) -> bool {
        self.move_order_ascending
    }

    /// Winning line on the displayed board, if any.
    pub fn winning_line(&self) -> Option<Triple> {
        detect_winner(self.current().board())
    }

    /// Winner on the displayed board, if any.
    pub fn winner(&self) -> Option<Player> {
        self.phase().winner()
    }

    /// Phase of the displayed snapshot.
    pub fn phase(&self) -> GamePhase {
        GamePhase::of(self.current().board())
    }

    /// Marks `position` for the player to move.
    ///
    /// Ignored when the displayed board already has a winner or the cell is
    /// taken. Otherwise history past the cursor is dropped, the new snapshot
    /// is appended, and the cursor moves to it.
    #[instrument(skip(self), fields(cursor = self.cursor, player = %self.next_player()))]
    pub fn activate_cell(&mut self, position: Position) -> MoveOutcome {
        let current = *self.current();

        if let Some(winner) = self.winner() {
            debug!(%winner, "Board already decided, ignoring activation");
            return MoveOutcome::Ignored(IgnoreReason::AlreadyWon(winner));
        }
        if !current.board().is_empty(position) {
            debug!("Square occupied, ignoring activation");
            return MoveOutcome::Ignored(IgnoreReason::SquareOccupied(position));
        }

        let player = self.next_player();
        let discarded = self.history.len() - (self.cursor + 1);
        self.history.truncate(self.cursor + 1);

        self.history.push(current.successor(player, position));
        self.cursor = self.history.len() - 1;

        let record = MoveRecord::new(player, position);
        info!(
            step = self.cursor,
            discarded,
            mv = %record,
            "Move placed"
        );
        MoveOutcome::Placed(record)
    }

    /// Marks the cell at a raw board index.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CellOutOfRange`] if `index > 8`; the game is left
    /// untouched.
    #[instrument(skip(self))]
    pub fn activate_index(&mut self, index: usize) -> Result<MoveOutcome, GameError> {
        let position = Position::from_index(index).ok_or(GameError::CellOutOfRange { index })?;
        Ok(self.activate_cell(position))
    }

    /// Moves the cursor to `step` without touching history.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::StepOutOfRange`] if `step` is not a history index.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        if step >= self.history.len() {
            return Err(GameError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.cursor = step;
        debug!(next_player = %self.next_player(), "Cursor moved");
        Ok(())
    }

    /// Flips the move-list display order.
    #[instrument(skip(self))]
    pub fn toggle_move_order(&mut self) {
        self.move_order_ascending = !self.move_order_ascending;
        debug!(ascending = self.move_order_ascending, "Move order toggled");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
