//! Help screen — scrollable keybinding reference.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::action::Action;
use crate::tui::app::Screen;

static REPORT_KEYS: &[(&str, &str)] = &[
    ("1", "database failure (SQLite)"),
    ("2", "network failure"),
    ("3", "HealthKit sync failure"),
    ("4", "data corruption"),
    ("5", "unclassified failure"),
    ("l / m / h / c", "report at low / medium / high / critical"),
];

static ALERT_KEYS: &[(&str, &str)] = &[
    ("Enter / Esc", "dismiss alert"),
    ("r", "retry (high and critical only)"),
];

static HISTORY_KEYS: &[(&str, &str)] = &[
    ("x", "clear history"),
    ("e", "export history to ~/thrustr-errors-*.jsonl"),
    ("?", "help"),
    ("q / Esc", "quit"),
];

static HELP_KEYS: &[(&str, &str)] = &[("↑/↓", "scroll"), ("q / Esc", "back")];

/// State for the help screen.
#[derive(Debug, Clone, Default)]
pub struct HelpState {
    scroll: u16,
}

impl HelpState {
    /// Creates a new [`HelpState`] with scroll position at the top.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current scroll offset.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Resets the scroll position to the top.
    pub fn reset(&mut self) {
        self.scroll = 0;
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                Action::None
            }
            KeyCode::Char('q') | KeyCode::Esc => Action::Navigate(Screen::Console),
            _ => Action::None,
        }
    }
}

fn build_section(title: &'static str, keys: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Yellow);
    let dim_style = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(title, header_style)),
    ];
    for (key, desc) in keys {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<20}"), key_style),
            Span::styled(*desc, dim_style),
        ]));
    }
    lines
}

fn help_content() -> Vec<Line<'static>> {
    let mut lines = build_section("Report", REPORT_KEYS);
    lines.extend(build_section("Alert", ALERT_KEYS));
    lines.extend(build_section("History", HISTORY_KEYS));
    lines.extend(build_section("Help", HELP_KEYS));
    lines
}

/// Renders the help screen.
#[mutants::skip]
pub fn draw_help(state: &HelpState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let content_lines = help_content();
    let total = content_lines.len() as u16;
    let height = content_area.height;
    let capped_scroll = state.scroll().min(total.saturating_sub(height));

    let paragraph = Paragraph::new(content_lines).scroll((capped_scroll, 0));
    frame.render_widget(paragraph, content_area);

    let footer =
        Paragraph::new("↑/↓: scroll  q/Esc: back").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    mod handle_key {
        use super::*;

        #[test]
        fn up_at_zero_saturates() {
            let mut state = HelpState::new();
            assert_eq!(state.handle_key(press(KeyCode::Up)), Action::None);
            assert_eq!(state.scroll(), 0);
        }

        #[test]
        fn down_then_up() {
            let mut state = HelpState::new();
            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Up));
            assert_eq!(state.scroll(), 1);
        }

        #[test]
        fn q_and_esc_return_to_console() {
            let mut state = HelpState::new();
            assert_eq!(
                state.handle_key(press(KeyCode::Char('q'))),
                Action::Navigate(Screen::Console)
            );
            assert_eq!(
                state.handle_key(press(KeyCode::Esc)),
                Action::Navigate(Screen::Console)
            );
        }

        #[test]
        fn unknown_key_returns_none() {
            let mut state = HelpState::new();
            assert_eq!(state.handle_key(press(KeyCode::Char('z'))), Action::None);
        }
    }

    #[test]
    fn reset_sets_scroll_to_zero() {
        let mut state = HelpState::new();
        state.handle_key(press(KeyCode::Down));
        state.reset();
        assert_eq!(state.scroll(), 0);
    }

    #[test]
    fn content_lists_every_section() {
        let text: Vec<String> = help_content().iter().map(|l| l.to_string()).collect();
        for title in ["Report", "Alert", "History", "Help"] {
            assert!(text.iter().any(|l| l == title), "missing section {title}");
        }
    }
}
