//! Errors raised when an index from outside the game is out of range.

use derive_more::{Display, Error};

/// An index crossed into the game that does not name a cell or snapshot.
///
/// Occupied cells and decided boards are not errors; those activations are
/// reported as [`MoveOutcome::Ignored`](super::MoveOutcome::Ignored).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Cell index outside 0..=8.
    #[display("Cell index {} is out of range (must be 0-8)", index)]
    CellOutOfRange {
        /// The rejected index.
        index: usize,
    },
    /// History step at or past the end of the history.
    #[display("History step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// The rejected step.
        step: usize,
        /// Number of snapshots in the history.
        len: usize,
    },
}
