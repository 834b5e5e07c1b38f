//! Console screen — inject failures, watch the history, answer alerts.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::triage::{Alert, ErrorRecord, Severity};
use crate::tui::action::Action;
use crate::tui::app::Screen;
use crate::tui::sample::Sample;
use crate::tui::widgets::{StatusBarContext, draw_alert, draw_status_bar, severity_color};

/// Outcome line shown above the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleMessage {
    Info(String),
    Error(String),
}

/// State for the console screen.
#[derive(Debug, Clone, Default)]
pub struct ConsoleState {
    sample: Sample,
    message: Option<ConsoleMessage>,
}

/// Everything the console draws besides its own state.
#[derive(Debug, Clone)]
pub struct ConsoleView<'a> {
    pub status: StatusBarContext,
    pub recent: &'a [Arc<ErrorRecord>],
    pub alert: Option<(Alert, Severity)>,
}

impl ConsoleState {
    /// Creates a console with the first sample selected and no message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    ///
    /// While `alert` is visible, Enter and Esc dismiss it and `r` retries when
    /// the alert offers a retry; severity keys still report new failures.
    pub fn handle_key(&mut self, key: KeyEvent, alert: Option<&Alert>) -> Action {
        if let Some(alert) = alert {
            match key.code {
                KeyCode::Enter | KeyCode::Esc => return Action::Dismiss,
                KeyCode::Char('r') if alert.offers_retry => return Action::Retry,
                _ => {}
            }
        }

        match key.code {
            KeyCode::Char('l') => Action::Report(Severity::Low),
            KeyCode::Char('m') => Action::Report(Severity::Medium),
            KeyCode::Char('h') => Action::Report(Severity::High),
            KeyCode::Char('c') => Action::Report(Severity::Critical),
            KeyCode::Char('x') => Action::ClearHistory,
            KeyCode::Char('e') => Action::ExportHistory,
            KeyCode::Char('?') => Action::Navigate(Screen::Help),
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char(c) => Sample::from_key(c).map_or(Action::None, Action::SelectSample),
            _ => Action::None,
        }
    }

    /// Returns the selected sample.
    pub fn sample(&self) -> Sample {
        self.sample
    }

    pub fn set_sample(&mut self, sample: Sample) {
        self.sample = sample;
    }

    /// Returns the current outcome message, if any.
    pub fn message(&self) -> Option<&ConsoleMessage> {
        self.message.as_ref()
    }

    pub fn set_info(&mut self, msg: String) {
        self.message = Some(ConsoleMessage::Info(msg));
    }

    pub fn set_error(&mut self, msg: String) {
        self.message = Some(ConsoleMessage::Error(msg));
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }
}

fn record_row(record: &ErrorRecord) -> Row<'static> {
    Row::new(vec![
        record.timestamp().format("%H:%M:%S").to_string(),
        record.severity().label().to_string(),
        record.kind().category().name().to_string(),
        record.source().to_string(),
        record.description(),
    ])
    .style(Style::default().fg(severity_color(record.severity())))
}

/// Renders the console screen.
#[mutants::skip]
pub fn draw_console(state: &ConsoleState, view: &ConsoleView<'_>, frame: &mut Frame, area: Rect) {
    let [status_area, content_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    draw_status_bar(&view.status, frame, status_area);

    let block = Block::default()
        .title(" Error History ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(content_area);
    frame.render_widget(block, content_area);

    let [table_area, message_area, footer_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    if view.recent.is_empty() {
        let lines = vec![
            Line::from(""),
            Line::from("No errors reported."),
            Line::from("Pick a failure with 1-5, then report it with l/m/h/c."),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            table_area,
        );
    } else {
        let header = Row::new(vec!["Time", "Severity", "Category", "Source", "Description"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1);
        let rows: Vec<Row> = view.recent.iter().map(|r| record_row(r)).collect();
        let widths = [
            Constraint::Length(9),
            Constraint::Length(9),
            Constraint::Length(16),
            Constraint::Length(14),
            Constraint::Min(10),
        ];
        frame.render_widget(Table::new(rows, widths).header(header), table_area);
    }

    if let Some(message) = state.message() {
        let (text, color) = match message {
            ConsoleMessage::Info(msg) => (msg.as_str(), Color::Green),
            ConsoleMessage::Error(msg) => (msg.as_str(), Color::Red),
        };
        frame.render_widget(
            Paragraph::new(text).style(Style::default().fg(color)),
            message_area,
        );
    }

    let footer = Paragraph::new("1-5: failure  l/m/h/c: report  x: clear  e: export  ?: help  q: quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);

    if let Some((alert, severity)) = &view.alert {
        draw_alert(alert, *severity, frame, area);
    }
}
