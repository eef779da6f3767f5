//! Timetravel Tic-Tac-Toe - Unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use timetravel_tictactoe::{Position, Settings, replay_view, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load settings from {}", cli.config.display()))?;

    match cli.command {
        Command::Play { descending } => {
            let settings = if descending {
                settings.with_moves_ascending(false)
            } else {
                settings
            };
            run_tui(&settings)
        }
        Command::Render {
            moves,
            jump,
            descending,
            json,
        } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
                )
                .with_writer(std::io::stderr)
                .init();
            run_render(&settings, &moves, jump, descending, json)
        }
    }
}

/// Replays `moves` and prints the final view.
#[instrument(skip(settings))]
fn run_render(
    settings: &Settings,
    moves: &[Position],
    jump: Option<usize>,
    descending: bool,
    json: bool,
) -> Result<()> {
    info!(moves = moves.len(), "Replaying moves");

    let view = replay_view(settings, moves, jump, descending)
        .with_context(|| format!("Failed to replay {} moves", moves.len()))?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&view).context("Failed to serialize view")?
        );
    } else {
        print!("{}", view.to_text());
    }
    Ok(())
}
