//! Move descriptions and the result of activating a cell.
//!
//! A [`MoveRecord`] is the domain event stored alongside each board
//! snapshot. [`MoveOutcome`] tells the caller whether an activation was
//! applied or quietly ignored; ignoring is a rule of the game, not an error.

use super::{Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Description of a move: who played, and where.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, derive_new::new,
)]
pub struct MoveRecord {
    /// The player who moved.
    player: Player,
    /// The marked cell.
    position: Position,
}

impl MoveRecord {
    /// Row of the marked cell (index div 3).
    pub fn row(&self) -> usize {
        self.position.row()
    }

    /// Column of the marked cell (index mod 3).
    pub fn column(&self) -> usize {
        self.position.column()
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at position ({},{})", self.player, self.row(), self.column())
    }
}

/// Why a cell activation left the game unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoreReason {
    /// The displayed board already has a winner.
    #[display("game already won by {}", _0)]
    AlreadyWon(Player),
    /// The target cell is occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),
}

/// Result of activating a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// A new snapshot was appended.
    Placed(MoveRecord),
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// True if the activation appended a snapshot.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed(_))
    }
}
