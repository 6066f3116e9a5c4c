//! user-admin-tui binary entry point.
//!
//! Sets up file logging and the async runtime, initializes the terminal in raw
//! mode, runs the TUI event loop, and restores the terminal state on exit.
//!
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use user_admin_tui::api::UsersClient;
use user_admin_tui::app::{self, AppState, tasks::Dispatcher};
use user_admin_tui::config::Cli;

/// Initialize a Crossterm-backed `ratatui` terminal in raw mode.
fn init_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Send `tracing` output to `path`; `RUST_LOG` overrides the `info` default.
fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_path())?;

    let client = UsersClient::new(&cli.base_url)?;
    info!(base_url = client.base_url(), "starting");
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("start async runtime")?;
    let (dispatcher, mut events) = Dispatcher::new(client, runtime.handle().clone());
    let mut app = AppState::new(cli.keymap(), cli.dark_theme(), !cli.light);

    let mut terminal = init_terminal().context("init terminal")?;

    let res = app::run(&mut terminal, &mut app, &dispatcher, &mut events);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();
    runtime.shutdown_background();

    if let Err(err) = res {
        error!(error = %err, "application error");
        eprintln!("application error: {err}");
    }
    Ok(())
}
