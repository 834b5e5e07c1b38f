use super::collaborators::Localizer;
use super::record::ErrorRecord;

/// Content a presentation layer shows for the current error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    /// Recovery hint, absent when the string table has none for the category.
    pub recovery_hint: Option<String>,
    /// Whether a retry action is offered alongside dismiss.
    pub offers_retry: bool,
}

impl Alert {
    /// Builds the alert for `record`, resolving labels through `strings`.
    pub fn for_record(record: &ErrorRecord, strings: &dyn Localizer) -> Self {
        let category = record.kind().category().name();
        Self {
            title: strings.text(&format!("error.{category}.title")),
            message: record.description(),
            recovery_hint: strings.lookup(&format!("error.{category}.recovery")),
            offers_retry: record.severity().offers_retry(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Arc;

    use chrono::Utc;

    use super::*;
    use crate::triage::{ErrorKind, Severity, Strings};

    fn make_record(kind: ErrorKind, severity: Severity) -> ErrorRecord {
        ErrorRecord::new(kind, severity, "Test", Utc::now(), None, None)
    }

    #[test]
    fn network_alert_has_title_and_hint() {
        let record = make_record(
            ErrorKind::Network(Arc::new(io::Error::other("network down"))),
            Severity::Medium,
        );
        let alert = Alert::for_record(&record, &Strings::english());
        assert_eq!(alert.title, "Connection Problem");
        assert_eq!(alert.message, "network down");
        assert_eq!(
            alert.recovery_hint.as_deref(),
            Some("Check your internet connection and try again.")
        );
        assert!(!alert.offers_retry);
    }

    #[test]
    fn unknown_alert_has_no_hint() {
        let record = make_record(
            ErrorKind::Unknown(Arc::new(io::Error::other("odd"))),
            Severity::Medium,
        );
        let alert = Alert::for_record(&record, &Strings::english());
        assert_eq!(alert.title, "Unexpected Error");
        assert!(alert.recovery_hint.is_none());
    }

    #[test]
    fn high_offers_retry() {
        let record = make_record(ErrorKind::DataCorruption("x".into()), Severity::High);
        assert!(Alert::for_record(&record, &Strings::english()).offers_retry);
    }

    #[test]
    fn missing_title_falls_back_to_key() {
        let record = make_record(ErrorKind::DataCorruption("x".into()), Severity::Critical);
        let alert = Alert::for_record(&record, &Strings::empty());
        assert_eq!(alert.title, "error.data_corruption.title");
        assert!(alert.recovery_hint.is_none());
    }
}
