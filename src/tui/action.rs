//! Actions returned by screen event handlers.

use crate::triage::Severity;

use super::app::Screen;
use super::sample::Sample;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to drive the triage service and navigate
/// between screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// Choose which failure the severity keys report.
    SelectSample(Sample),
    /// Report the selected sample at the given severity.
    Report(Severity),
    /// Dismiss the visible alert.
    Dismiss,
    /// Retry from the visible alert.
    Retry,
    /// Empty the error history.
    ClearHistory,
    /// Export the error history to a JSONL file.
    ExportHistory,
    /// Quit the application.
    Quit,
}
