//! `Teamboard` — terminal team-status dashboard.
//!
//! Launches the TUI over the seed team. Configuration via CLI flags,
//! environment variables, or config file
//! (`~/.config/teamboard/config.toml`).
//!
//! ```bash
//! # Lead dashboard
//! cargo run --bin teamboard
//!
//! # Start on a member's dashboard
//! cargo run --bin teamboard -- --role member --member 3
//!
//! # Print the store as JSON and exit
//! cargo run --bin teamboard -- --dump
//! ```

use std::io;
use std::path::Path;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_appender::non_blocking::WorkerGuard;

use teamboard::app::App;
use teamboard::config::{CliArgs, DashboardConfig};
use teamboard::ui;
use teamboard_core::clock::SystemClock;
use teamboard_core::seed;
use teamboard_core::session::Session;
use teamboard_core::store::Store;

fn main() -> io::Result<()> {
    let cli = CliArgs::parse();

    // Load and resolve configuration (CLI args > env > config file > defaults).
    let config = match DashboardConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: failed to load configuration: {e}");
            DashboardConfig::default()
        }
    };

    let store = Store::new(
        seed::roster(),
        Session::new(config.initial_role, config.initial_member.clone()),
        SystemClock,
    );

    if cli.dump {
        let json = serde_json::to_string_pretty(&store.snapshot()).map_err(io::Error::other)?;
        println!("{json}");
        return Ok(());
    }

    // Initialize logging before terminal setup (logs go to file, not stdout).
    let _log_guard = init_logging(&cli.log_level, cli.log_file.as_deref());

    tracing::info!(role = %config.initial_role, member = %config.initial_member, "teamboard starting");

    // Set up terminal.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(store)
        .with_progress_step(config.progress_step)
        .with_max_task_title_len(config.max_task_title_len)
        .with_formats(config.date_format.clone(), config.timestamp_format.clone());

    let result = run_app(&mut terminal, app, &config);

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("teamboard exiting");
    result
}

/// Initialize file-based logging.
///
/// Logs are written to a file (never stdout, since ratatui owns the terminal).
/// Returns a [`WorkerGuard`] that must be held until shutdown to ensure all
/// buffered log entries are flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join("teamboard.log");
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}

/// Main application loop: draw, poll for a key, apply it.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App<SystemClock>,
    config: &DashboardConfig,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(config.poll_timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key_event(key);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
