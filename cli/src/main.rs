//! formnav CLI - binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`formnav_config`] (form definition) and [`formnav_tui`]
//! (rendering and input), providing RAII-based terminal management with
//! guaranteed cleanup.
//!
//! ```text
//! main() -> load config -> TerminalSession::new() -> run_app() -> App + TUI
//! ```
//!
//! # Event Loop
//!
//! Single-threaded and synchronous:
//!
//! 1. Render frame
//! 2. Wait up to one frame for input
//! 3. Drain input queue (non-blocking via [`formnav_tui::handle_events`])
//! 4. Check for quit

use anyhow::{Context, Result};
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::{
    env,
    fs::{self, File, OpenOptions},
    io::{Stdout, stdout},
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use formnav_config::FormnavConfig;
use formnav_tui::{App, draw, handle_events};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // Without a log file, stay silent rather than drawing over the TUI.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new().create(true).append(true).open(&candidate) {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: next to the config file, e.g. ~/.formnav/logs/formnav.log
    if let Some(config_path) = FormnavConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("formnav.log"));
    }

    candidates.push(PathBuf::from(".formnav").join("logs").join("formnav.log"));

    candidates
}

fn load_config() -> Result<FormnavConfig> {
    if let Some(path) = env::args_os().nth(1).map(PathBuf::from) {
        return FormnavConfig::load_from(&path)
            .with_context(|| format!("loading form from {}", path.display()));
    }
    Ok(FormnavConfig::load()?.unwrap_or_default())
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Enables raw mode and the alternate screen; both are restored on drop so
/// the terminal stays usable after panics or early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        match Terminal::new(CrosstermBackend::new(out)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen);
                Err(err.into())
            }
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn main() -> Result<()> {
    init_tracing();

    let config = load_config()?;
    let mut app = App::new(config.form_or_demo(), config.app.ui_options());

    {
        let mut session = TerminalSession::new()?;
        run_app(&mut session.terminal, &mut app)?;
    }

    let progress = app.state().progress();
    if app.state().is_at_summary() {
        println!("{}: all {} sections complete.", app.form().title(), progress.total);
    } else {
        println!(
            "{}: {} of {} sections complete.",
            app.form().title(),
            progress.completed,
            progress.total
        );
    }
    Ok(())
}

const FRAME_DURATION: Duration = Duration::from_millis(16);

fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|frame| draw(frame, app))?;

        if event::poll(FRAME_DURATION)? && handle_events(app)? {
            tracing::info!(
                active = ?app.state().active_section_id(),
                visited_summary = app.state().has_visited_summary(),
                "Quitting"
            );
            return Ok(());
        }
    }
}
