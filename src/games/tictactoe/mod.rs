//! Tic-tac-toe with a navigable move history.

mod action;
mod error;
mod game;
mod phases;
mod position;
pub mod rules;
mod snapshot;
mod types;

pub use action::{IgnoreReason, MoveOutcome, MoveRecord};
pub use error::GameError;
pub use game::GameState;
pub use phases::GamePhase;
pub use position::Position;
pub use rules::{LINES, Triple, check_winner, detect_winner, is_draw, is_full};
pub use snapshot::Snapshot;
pub use types::{Board, Player, Square};
