//! Game phase of a single board snapshot.

use super::rules::{detect_winner, is_full};
use super::{Board, Player};
use serde::{Deserialize, Serialize};

/// Phase of the game as seen from one snapshot.
///
/// `Won` and `Drawn` only block new moves from that snapshot; jumping back
/// to an earlier snapshot returns the displayed game to `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Moves can still be made.
    InProgress,
    /// A player completed a line.
    Won(Player),
    /// The board is full with no line.
    Drawn,
}

impl GamePhase {
    /// Evaluates the phase of `board`.
    pub fn of(board: &Board) -> Self {
        if let Some([first, _, _]) = detect_winner(board)
            && let Some(player) = board.get(first).player()
        {
            return GamePhase::Won(player);
        }
        if is_full(board) {
            GamePhase::Drawn
        } else {
            GamePhase::InProgress
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GamePhase::Won(player) => Some(*player),
            _ => None,
        }
    }

    /// True once no move can be appended from this snapshot.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::InProgress)
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GamePhase::InProgress => write!(f, "In progress"),
            GamePhase::Won(player) => write!(f, "Player {} wins", player),
            GamePhase::Drawn => write!(f, "Draw"),
        }
    }
}
