//! Display tree produced from a [`GameState`](crate::GameState).
//!
//! These types carry everything a front end needs to paint one frame and
//! nothing it could use to mutate the game.

use crate::games::tictactoe::{GamePhase, Position, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Label on the order toggle while the list is ascending.
pub const SHOW_DESCENDING: &str = "Show Moves in Descending Order";
/// Label on the order toggle while the list is descending.
pub const SHOW_ASCENDING: &str = "Show Moves in Ascending Order";
/// Label of the history entry for the initial snapshot.
pub const GAME_START: &str = "Go to game start";
/// Notice shown under the status line when the board is full with no winner.
pub const DRAWN_NOTICE: &str = "Draw: the board is full";

/// One board cell as displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct CellView {
    /// Cell position; activating it forwards this index.
    position: Position,
    /// Current content.
    square: Square,
    /// Member of the winning line.
    winning: bool,
}

impl CellView {
    /// Text shown in the cell.
    pub fn label(&self) -> &'static str {
        self.square.label()
    }
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct MoveEntry {
    /// History index this entry jumps to, independent of display order.
    step: usize,
    /// Button text.
    label: String,
    /// Rendered bold: the entry under the cursor.
    emphasized: bool,
}

/// Everything shown for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameView {
    /// Nine cells, row-major.
    cells: [CellView; 9],
    /// Status line.
    status: String,
    /// Phase of the displayed snapshot.
    phase: GamePhase,
    /// Label of the order toggle button.
    order_button: String,
    /// Move list in display order.
    moves: Vec<MoveEntry>,
}

impl GameView {
    pub(crate) fn new(
        cells: [CellView; 9],
        status: String,
        phase: GamePhase,
        order_button: String,
        moves: Vec<MoveEntry>,
    ) -> Self {
        Self {
            cells,
            status,
            phase,
            order_button,
            moves,
        }
    }

    /// Cells of one board row.
    pub fn row(&self, row: usize) -> &[CellView] {
        &self.cells[row * 3..row * 3 + 3]
    }

    /// Display index of the emphasized entry.
    pub fn emphasized_index(&self) -> Option<usize> {
        self.moves.iter().position(|entry| entry.emphasized)
    }

    /// Renders the board and status as plain text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for row in 0..3 {
            let line: Vec<String> = self
                .row(row)
                .iter()
                .map(|cell| {
                    let mark = if cell.label().is_empty() { "." } else { cell.label() };
                    if cell.winning {
                        format!("[{}]", mark)
                    } else {
                        format!(" {} ", mark)
                    }
                })
                .collect();
            out.push_str(&line.join("|"));
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&self.status);
        out.push('\n');
        if self.phase == GamePhase::Drawn {
            out.push_str(DRAWN_NOTICE);
            out.push('\n');
        }
        out.push('\n');
        for (number, entry) in self.moves.iter().enumerate() {
            let marker = if entry.emphasized { '*' } else { ' ' };
            out.push_str(&format!("{}{}. {}\n", marker, number + 1, entry.label));
        }
        out
    }
}
