use std::sync::LazyLock;

use regex::Regex;

use super::kind::{Cause, ErrorKind};

// Case-sensitive substring markers, checked in priority order.
static DATABASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"SQLite|database|Database|CoreData|SwiftData").expect("valid hardcoded regex")
});

static NETWORK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"network|Network|internet|Internet|offline|timed out")
        .expect("valid hardcoded regex")
});

static HEALTH_SYNC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"HealthKit|health data|Health data").expect("valid hardcoded regex")
});

/// Classifies a raw failure by the markers in its description.
///
/// Database markers win over network markers, which win over health-sync
/// markers; anything else is [`ErrorKind::Unknown`]. This is best-effort: a
/// failure whose text mentions another subsystem lands in that bucket.
/// [`ErrorKind::DataCorruption`] is never produced here.
pub fn classify(cause: Cause) -> ErrorKind {
    let description = cause.to_string();
    if DATABASE_RE.is_match(&description) {
        ErrorKind::Database(cause)
    } else if NETWORK_RE.is_match(&description) {
        ErrorKind::Network(cause)
    } else if HEALTH_SYNC_RE.is_match(&description) {
        ErrorKind::HealthSync(cause)
    } else {
        ErrorKind::Unknown(cause)
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Arc;

    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::triage::ErrorCategory;

    fn classify_text(msg: &str) -> ErrorCategory {
        classify(Arc::new(io::Error::other(msg.to_string()))).category()
    }

    #[test]
    fn sqlite_is_database() {
        assert_eq!(
            classify_text("SQLite error 19: constraint failed"),
            ErrorCategory::Database
        );
    }

    #[test]
    fn swiftdata_is_database() {
        assert_eq!(
            classify_text("SwiftData save failed"),
            ErrorCategory::Database
        );
    }

    #[test]
    fn network_is_network() {
        assert_eq!(
            classify_text("The network connection was lost."),
            ErrorCategory::Network
        );
    }

    #[test]
    fn offline_is_network() {
        assert_eq!(
            classify_text("The Internet connection appears to be offline."),
            ErrorCategory::Network
        );
    }

    #[test]
    fn healthkit_is_health_sync() {
        assert_eq!(
            classify_text("HealthKit authorization denied"),
            ErrorCategory::HealthSync
        );
    }

    #[test]
    fn no_marker_is_unknown() {
        assert_eq!(classify_text("something odd happened"), ErrorCategory::Unknown);
    }

    #[test]
    fn empty_description_is_unknown() {
        assert_eq!(classify_text(""), ErrorCategory::Unknown);
    }

    #[test]
    fn markers_are_case_sensitive() {
        assert_eq!(classify_text("sqlite busy"), ErrorCategory::Unknown);
        assert_eq!(classify_text("healthkit denied"), ErrorCategory::Unknown);
    }

    #[test]
    fn database_wins_over_network() {
        assert_eq!(
            classify_text("network failure while opening SQLite store"),
            ErrorCategory::Database
        );
    }

    #[test]
    fn network_wins_over_health_sync() {
        assert_eq!(
            classify_text("HealthKit upload failed: network unreachable"),
            ErrorCategory::Network
        );
    }

    #[test]
    fn classification_keeps_cause() {
        let kind = classify(Arc::new(io::Error::other("SQLite locked")));
        assert_eq!(kind.description(), "SQLite locked");
        assert!(kind.cause().is_some());
    }

    #[quickcheck]
    fn never_data_corruption(s: String) -> bool {
        classify_text(&s) != ErrorCategory::DataCorruption
    }

    #[quickcheck]
    fn sqlite_anywhere_is_database(prefix: String, suffix: String) -> bool {
        classify_text(&format!("{prefix}SQLite{suffix}")) == ErrorCategory::Database
    }
}
