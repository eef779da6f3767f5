//! Terminal front end: paints the game view and turns key presses into
//! game events.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Focus, KeyAction, key_action, move_cursor};
pub use ui::{HELP, draw, highlight_color};

use crate::config::Settings;
use crate::games::tictactoe::GameState;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
///
/// Logs go to the settings' log file so they never interleave with the
/// terminal drawing.
pub fn run_tui(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting terminal game");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let game = GameState::with_move_order(*settings.moves_ascending());
    let mut app = App::new(game, *settings.winning_highlight());
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(moves = app.game().history().len() - 1, "Terminal game finished");
    res
}

/// Draw, wait for a key, apply it; repeat until quit.
///
/// Every key is fully handled before the next frame is drawn.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Skip key release events (crossterm fires both press and release on some platforms).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            app.handle_key(key);
            if app.should_quit() {
                info!("User quit");
                return Ok(());
            }
        }
    }
}
