//! Command-line interface for the noughts TUI.

use clap::Parser;
use std::path::PathBuf;

/// Terminal tic-tac-toe against a minimax opponent, with session persistence.
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Terminal tic-tac-toe against an unbeatable opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path of the session snapshot file.
    #[arg(long, default_value = "noughts_session.json")]
    pub state_path: PathBuf,

    /// Milliseconds to wait before the automated reply is applied.
    #[arg(long, default_value_t = 300)]
    pub reply_delay_ms: u64,

    /// Discard any saved snapshot and start a fresh session.
    #[arg(long)]
    pub fresh: bool,

    /// Write logs to this file instead of stderr (keeps the TUI clean).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
