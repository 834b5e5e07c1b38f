#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::io::{self, stdout};

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use thrustr_triage::config::TriageConfig;
use thrustr_triage::logging;
use thrustr_triage::storage::{EmergencyFile, RecordStore};
use thrustr_triage::triage::TriageService;
use thrustr_triage::tui::{App, AppError, TerminalBell};

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = TriageConfig::load().map_err(AppError::from)?;
    let store = RecordStore::new().map_err(AppError::from)?;
    logging::init(&config, &store.log_path()).map_err(AppError::from)?;
    tracing::info!(target: "thrustr::console", "starting triage console");

    let service = TriageService::new(&config)
        .with_haptics(Box::new(TerminalBell::stdout()))
        .with_emergency_hook(Box::new(EmergencyFile::new(store)));

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(service);
    let result = app.run(&mut terminal);

    let restore_result = restore_terminal();
    match result {
        Err(e) => Err(e.into()),
        Ok(()) => restore_result.map_err(Into::into),
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn restore_terminal() -> Result<(), io::Error> {
    let raw_result = disable_raw_mode();
    let screen_result = execute!(stdout(), LeaveAlternateScreen);
    raw_result.and(screen_result)
}
