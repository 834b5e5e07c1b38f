use std::fmt;

use serde::{Deserialize, Serialize};

/// Urgency tier of a reported failure, ordered from least to most urgent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Logged only; never surfaces to the user.
    Low,
    /// Shows an alert.
    #[default]
    Medium,
    /// Shows an alert and triggers a haptic cue.
    High,
    /// Shows an alert, triggers a haptic cue, and runs the emergency sequence.
    Critical,
}

/// What the dispatcher does for a given [`Severity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    LogOnly,
    Alert,
    AlertWithHaptic,
    Emergency,
}

/// Haptic pattern handed to the haptics collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticPattern {
    Warning,
    Error,
}

static ALL_SEVERITIES: &[Severity] = &[
    Severity::Low,
    Severity::Medium,
    Severity::High,
    Severity::Critical,
];

impl Severity {
    /// Glyph written at the start of the first log line for a record.
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Low => "ℹ️",
            Severity::Medium => "⚠️",
            Severity::High => "❌",
            Severity::Critical => "🚨",
        }
    }

    /// Upper-case label used in log lines and the status bar.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }

    /// The dispatcher response for this severity.
    pub fn response(self) -> Response {
        match self {
            Severity::Low => Response::LogOnly,
            Severity::Medium => Response::Alert,
            Severity::High => Response::AlertWithHaptic,
            Severity::Critical => Response::Emergency,
        }
    }

    /// Returns `true` if a visible alert for this severity offers a retry action.
    pub fn offers_retry(self) -> bool {
        self >= Severity::High
    }

    /// Haptic pattern for this severity, or `None` when no cue is due.
    pub fn haptic_pattern(self) -> Option<HapticPattern> {
        match self {
            Severity::Low | Severity::Medium => None,
            Severity::High => Some(HapticPattern::Warning),
            Severity::Critical => Some(HapticPattern::Error),
        }
    }

    /// Returns all severities from lowest to highest.
    pub fn all() -> &'static [Severity] {
        ALL_SEVERITIES
    }
}

#[mutants::skip]
impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
