use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use chrono::Utc;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal};

use crate::storage::{StorageError, default_export_path, export_file_name, export_records};
use crate::triage::{Alert, ErrorRecord, Report, Severity, Strings, TriageEvent, TriageService};

use super::action::Action;
use super::error::AppError;
use super::screens::{ConsoleState, ConsoleView, HelpState, draw_console, draw_help};
use super::widgets::StatusBarContext;

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Inject failures and answer alerts.
    Console,
    /// Show keybinding help.
    Help,
}

/// Triage state as last reported through [`TriageEvent`]s.
#[derive(Debug, Clone, Default)]
pub struct Observed {
    history_len: usize,
    current: Option<Arc<ErrorRecord>>,
}

impl Observed {
    fn apply(&mut self, event: &TriageEvent) {
        match event {
            TriageEvent::HistoryChanged { len } => self.history_len = *len,
            TriageEvent::PresentationChanged { current } => self.current = current.clone(),
        }
    }

    pub fn history_len(&self) -> usize {
        self.history_len
    }

    pub fn current(&self) -> Option<&Arc<ErrorRecord>> {
        self.current.as_ref()
    }
}

/// Top-level application state.
pub struct App {
    screen: Screen,
    service: TriageService,
    strings: Strings,
    console: ConsoleState,
    help: HelpState,
    observed: Rc<RefCell<Observed>>,
    export_dir: Option<PathBuf>,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` on the [`Screen::Console`] screen, observing `service`.
    pub fn new(mut service: TriageService) -> Self {
        let observed = Rc::new(RefCell::new(Observed {
            history_len: service.history().len(),
            current: service.current_error().cloned(),
        }));
        let sink = Rc::clone(&observed);
        service.subscribe(move |event| sink.borrow_mut().apply(event));

        Self {
            screen: Screen::Console,
            service,
            strings: Strings::english(),
            console: ConsoleState::new(),
            help: HelpState::new(),
            observed,
            export_dir: None,
            should_quit: false,
        }
    }

    /// Writes exports into `dir` instead of the home directory.
    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = Some(dir.into());
        self
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the current screen.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        match self.screen {
            Screen::Console => {
                let recent = self
                    .service
                    .recent_errors(self.service.history().capacity());
                let view = ConsoleView {
                    status: self.status_context(),
                    recent: &recent,
                    alert: self.alert().zip(self.showing_severity()),
                };
                draw_console(&self.console, &view, frame, area);
            }
            Screen::Help => draw_help(&self.help, frame, area),
        }
    }

    /// Handles a key event: screen-specific keys first, then applies the action.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let action = match self.screen {
            Screen::Console => {
                let alert = self.alert();
                self.console.handle_key(key, alert.as_ref())
            }
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => {
                if screen == Screen::Help {
                    self.help.reset();
                }
                self.screen = screen;
            }
            Action::SelectSample(sample) => self.console.set_sample(sample),
            Action::Report(severity) => {
                self.console.clear_message();
                self.service.handle(self.console.sample().report(severity));
            }
            Action::Dismiss => self.service.dismiss_current_error(),
            Action::Retry => self.service.retry_last_action(),
            Action::ClearHistory => {
                self.service.clear_history();
                self.console.set_info("History cleared".to_string());
            }
            Action::ExportHistory => self.export_history(),
            Action::Quit => self.should_quit = true,
        }
    }

    fn export_path(&self) -> Result<PathBuf, StorageError> {
        let now = Utc::now();
        match &self.export_dir {
            Some(dir) => Ok(dir.join(export_file_name(now))),
            None => default_export_path(now),
        }
    }

    // Export failures are themselves reported to triage.
    fn export_history(&mut self) {
        let records = self.service.recent_errors(usize::MAX);
        let result = self
            .export_path()
            .and_then(|path| export_records(&records, &path).map(|n| (n, path)));
        match result {
            Ok((n, path)) => self
                .console
                .set_info(format!("Exported {n} errors to {}", path.display())),
            Err(StorageError::EmptyExport) => {
                self.console.set_info("Nothing to export".to_string());
            }
            Err(e) => {
                self.console.set_error(format!("Export failed: {e}"));
                self.service
                    .handle(Report::new(e, "HistoryExport").user_action("Exporting error history"));
            }
        }
    }

    fn status_context(&self) -> StatusBarContext {
        let observed = self.observed.borrow();
        StatusBarContext {
            sample: self.console.sample().label().to_string(),
            history_len: observed.history_len(),
            capacity: self.service.history().capacity(),
            showing: observed.current().map(|r| r.severity()),
        }
    }

    /// Builds the alert for the observed current error, if one is showing.
    pub fn alert(&self) -> Option<Alert> {
        self.observed
            .borrow()
            .current()
            .map(|record| Alert::for_record(record, &self.strings))
    }

    fn showing_severity(&self) -> Option<Severity> {
        self.observed.borrow().current().map(|r| r.severity())
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the triage service.
    pub fn service(&self) -> &TriageService {
        &self.service
    }

    /// Returns the console screen state.
    pub fn console(&self) -> &ConsoleState {
        &self.console
    }

    /// Returns the state observed through triage events.
    pub fn observed(&self) -> Observed {
        self.observed.borrow().clone()
    }
}
