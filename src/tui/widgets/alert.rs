//! Alert popup widget — the visible current error.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::status_bar::severity_color;
use crate::triage::{Alert, Severity};

/// Footer hint listing the actions an alert offers.
pub fn alert_actions(alert: &Alert) -> &'static str {
    if alert.offers_retry {
        "Enter: OK  r: retry"
    } else {
        "Enter: OK"
    }
}

// Centers a box of `width` percent and `height` rows inside `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Renders `alert` as a centered popup over `area`.
#[mutants::skip]
pub fn draw_alert(alert: &Alert, severity: Severity, frame: &mut Frame, area: Rect) {
    let color = severity_color(severity);
    let popup = centered(area, 60, 9);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" {} ", alert.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let [body_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let mut lines = vec![Line::from(Span::styled(
        alert.message.clone(),
        Style::default().fg(Color::White),
    ))];
    if let Some(hint) = &alert.recovery_hint {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            hint.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), body_area);

    let footer = Paragraph::new(alert_actions(alert)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
