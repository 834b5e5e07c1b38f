//! Seams the triage service reports into without implementing.

use std::collections::HashMap;

use super::error::CollaboratorError;
use super::record::ErrorRecord;
use super::severity::HapticPattern;

/// Fire-and-forget haptic feedback.
pub trait Haptics {
    /// Plays the failure cue for `pattern`.
    fn failure_cue(&mut self, pattern: HapticPattern) -> Result<(), CollaboratorError>;
}

/// Haptics for platforms without a haptic engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn failure_cue(&mut self, _pattern: HapticPattern) -> Result<(), CollaboratorError> {
        Ok(())
    }
}

/// Escalation step run after the emergency dump of a critical record.
///
/// Future measures such as backing up state or resetting preferences belong
/// here.
pub trait EmergencyHook {
    fn on_critical(&mut self, record: &ErrorRecord) -> Result<(), CollaboratorError>;
}

/// Resolves human-readable strings by symbolic key.
pub trait Localizer {
    /// Returns the string for `key`, or `None` if the table has no entry.
    fn lookup(&self, key: &str) -> Option<String>;

    /// Returns the string for `key`, falling back to the key itself.
    fn text(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_else(|| key.to_string())
    }
}

static ENGLISH: &[(&str, &str)] = &[
    ("error.database.title", "Database Error"),
    (
        "error.database.recovery",
        "Restart the app. If the problem persists, contact support.",
    ),
    ("error.network.title", "Connection Problem"),
    (
        "error.network.recovery",
        "Check your internet connection and try again.",
    ),
    ("error.health_sync.title", "HealthKit Sync Failed"),
    (
        "error.health_sync.recovery",
        "Check Health access for Thrustr in Settings.",
    ),
    ("error.data_corruption.title", "Data Problem"),
    (
        "error.data_corruption.recovery",
        "Some data may be inconsistent. Restart the app to reload it.",
    ),
    ("error.unknown.title", "Unexpected Error"),
    ("alert.dismiss", "OK"),
    ("alert.retry", "Retry"),
];

/// In-memory string table.
#[derive(Debug, Clone)]
pub struct Strings {
    table: HashMap<String, String>,
}

impl Default for Strings {
    fn default() -> Self {
        Self::english()
    }
}

impl Strings {
    /// The bundled English table.
    pub fn english() -> Self {
        Self {
            table: ENGLISH
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// An empty table; every lookup misses.
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Adds or replaces one entry.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.table.insert(key.into(), value.into());
        self
    }
}

impl Localizer for Strings {
    fn lookup(&self, key: &str) -> Option<String> {
        self.table.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::ErrorCategory;

    #[test]
    fn english_has_a_title_for_every_category() {
        let strings = Strings::english();
        for category in ErrorCategory::all() {
            let key = format!("error.{}.title", category.name());
            assert!(strings.lookup(&key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn unknown_has_no_recovery_hint() {
        assert!(Strings::english().lookup("error.unknown.recovery").is_none());
    }

    #[test]
    fn text_falls_back_to_key() {
        assert_eq!(Strings::empty().text("alert.retry"), "alert.retry");
    }

    #[test]
    fn with_overrides_entry() {
        let strings = Strings::english().with("alert.retry", "Tekrar Dene");
        assert_eq!(strings.text("alert.retry"), "Tekrar Dene");
    }

    #[test]
    fn no_haptics_succeeds() {
        assert!(NoHaptics.failure_cue(HapticPattern::Error).is_ok());
    }
}
