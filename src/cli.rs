//! Command-line interface for timetravel_tictactoe.

use clap::{Parser, Subcommand};
use timetravel_tictactoe::Position;

/// Timetravel Tic-Tac-Toe - tic-tac-toe with move history navigation
#[derive(Parser, Debug)]
#[command(name = "timetravel_tictactoe")]
#[command(about = "Tic-tac-toe with a navigable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file
    #[arg(short, long, global = true, default_value = timetravel_tictactoe::DEFAULT_CONFIG_FILE)]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Start with the move list newest first
        #[arg(long)]
        descending: bool,
    },

    /// Replay a move list and print the resulting view
    Render {
        /// Cells in play order, comma-separated: indices 0-8 or labels like "center"
        #[arg(short, long, value_delimiter = ',', value_parser = parse_position)]
        moves: Vec<Position>,

        /// History step to display after replaying
        #[arg(short, long)]
        jump: Option<usize>,

        /// List moves newest first
        #[arg(long)]
        descending: bool,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Parses a cell given as an index (0-8) or a position label.
fn parse_position(s: &str) -> Result<Position, String> {
    Position::from_label_or_number(s)
        .ok_or_else(|| format!("'{}' is not a cell (use 0-8 or a label like 'top-left')", s))
}
