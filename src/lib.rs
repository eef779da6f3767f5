//! Timetravel Tic-Tac-Toe - tic-tac-toe with a navigable move history
//!
//! Every move appends an immutable board snapshot; any earlier snapshot can
//! be revisited, and playing from it discards the later ones.
//!
//! # Architecture
//!
//! - **Games**: board, win detection, and the [`GameState`] controller
//! - **View**: pure projection of a [`GameState`] into a [`GameView`], plus
//!   the [`Dispatcher`] that applies [`UiEvent`]s and re-renders
//! - **TUI**: ratatui/crossterm front end that paints the view
//! - **Config**: TOML [`Settings`]
//!
//! # Example
//!
//! ```
//! use timetravel_tictactoe::{Dispatcher, GameState, UiEvent};
//!
//! let mut dispatcher = Dispatcher::new(GameState::new());
//! for cell in [0, 1, 4, 2, 8] {
//!     dispatcher.dispatch(UiEvent::CellActivated(cell)).unwrap();
//! }
//! assert_eq!(dispatcher.view().status(), "Winner: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod tui;
mod view;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, HighlightColor, Settings};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, GameError, GamePhase, GameState, IgnoreReason, LINES, MoveOutcome, MoveRecord,
    Player, Position, Snapshot, Square, Triple, check_winner, detect_winner, is_draw, is_full,
};

// Crate-level exports - View composition
pub use view::{
    CellView, DRAWN_NOTICE, Dispatcher, GAME_START, GameView, MoveEntry, SHOW_ASCENDING,
    SHOW_DESCENDING, UiEvent, render, replay_view,
};

// Crate-level exports - Terminal front end
pub use tui::{App, Focus, HELP, KeyAction, draw, highlight_color, key_action, move_cursor, run_tui};
