//! Status bar widget — one-line triage summary.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::triage::Severity;

/// Data passed to the status bar widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Label of the failure sample the severity keys will report.
    pub sample: String,
    /// Records currently in history.
    pub history_len: usize,
    /// History capacity.
    pub capacity: usize,
    /// Severity of the visible alert, if any.
    pub showing: Option<Severity>,
}

/// Color used for a severity throughout the console.
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Low => Color::Gray,
        Severity::Medium => Color::Yellow,
        Severity::High => Color::LightRed,
        Severity::Critical => Color::Red,
    }
}

/// Renders a one-line status bar.
///
/// Display format (left-aligned, Cyan):
/// - Idle:    `[Database] 3/50 errors  idle`
/// - Showing: `[Network] 4/50 errors  HIGH` (severity in its own color)
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);

    let mut spans = vec![
        Span::styled(format!("[{}] ", ctx.sample), cyan),
        Span::styled(format!("{}/{} errors", ctx.history_len, ctx.capacity), cyan),
        Span::styled("  ", cyan),
    ];

    match ctx.showing {
        Some(severity) => spans.push(Span::styled(
            severity.label(),
            Style::default().fg(severity_color(severity)),
        )),
        None => spans.push(Span::styled("idle", Style::default().fg(Color::DarkGray))),
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
