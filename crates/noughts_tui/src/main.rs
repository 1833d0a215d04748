//! noughts: terminal tic-tac-toe with an unbeatable opponent.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tokio::time::{Duration, Instant, sleep};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use noughts_tui::app::{App, KeyOutcome};
use noughts_tui::cli::Cli;
use noughts_tui::controller::Controller;
use noughts_tui::store::FileStore;
use noughts_tui::ui;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    info!("Starting noughts TUI");

    if cli.fresh && let Err(e) = std::fs::remove_file(&cli.state_path) {
        debug!(error = %e, "No snapshot to discard");
    }

    let store = FileStore::new(cli.state_path.clone());
    let controller = Controller::new(store, Duration::from_millis(cli.reply_delay_ms));
    let app = App::new(controller);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Drives the event loop: draw, poll input, fire the deferred reply.
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Poll for input with a short timeout so the deferred reply stays
        // responsive.
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if app.handle_key(key) == KeyOutcome::Quit {
                info!("Quitting");
                return Ok(());
            }
        }

        app.controller_mut().poll_deferred(Instant::now());
        sleep(Duration::from_millis(10)).await;
    }
}

/// Initializes tracing, routing output to the log file when one is given so
/// log lines never corrupt the alternate screen.
fn init_tracing(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    match &cli.log_file {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }
    Ok(())
}
