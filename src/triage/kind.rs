use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// The opaque underlying failure a caller reports.
pub type Cause = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Closed taxonomy a reported failure is classified into.
///
/// Every kind keeps the original [`Cause`] except [`ErrorKind::DataCorruption`],
/// which is only ever constructed by a caller that already knows the failure
/// is a corruption event and has nothing but a description to offer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ErrorKind {
    #[error("database error: {0}")]
    Database(#[source] Cause),

    #[error("network error: {0}")]
    Network(#[source] Cause),

    #[error("health sync error: {0}")]
    HealthSync(#[source] Cause),

    #[error("data corruption: {0}")]
    DataCorruption(String),

    #[error("unknown error: {0}")]
    Unknown(#[source] Cause),
}

/// Payload-free discriminant of [`ErrorKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    Database,
    Network,
    HealthSync,
    DataCorruption,
    Unknown,
}

static ALL_CATEGORIES: &[ErrorCategory] = &[
    ErrorCategory::Database,
    ErrorCategory::Network,
    ErrorCategory::HealthSync,
    ErrorCategory::DataCorruption,
    ErrorCategory::Unknown,
];

impl ErrorKind {
    /// Returns the category of this kind.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorKind::Database(_) => ErrorCategory::Database,
            ErrorKind::Network(_) => ErrorCategory::Network,
            ErrorKind::HealthSync(_) => ErrorCategory::HealthSync,
            ErrorKind::DataCorruption(_) => ErrorCategory::DataCorruption,
            ErrorKind::Unknown(_) => ErrorCategory::Unknown,
        }
    }

    /// Human-readable description of the underlying failure.
    ///
    /// This is the cause's `Display` text, or the corruption detail.
    pub fn description(&self) -> String {
        match self {
            ErrorKind::DataCorruption(detail) => detail.clone(),
            ErrorKind::Database(cause)
            | ErrorKind::Network(cause)
            | ErrorKind::HealthSync(cause)
            | ErrorKind::Unknown(cause) => cause.to_string(),
        }
    }

    /// Returns the underlying cause, if this kind carries one.
    pub fn cause(&self) -> Option<&Cause> {
        match self {
            ErrorKind::DataCorruption(_) => None,
            ErrorKind::Database(cause)
            | ErrorKind::Network(cause)
            | ErrorKind::HealthSync(cause)
            | ErrorKind::Unknown(cause) => Some(cause),
        }
    }
}

impl ErrorCategory {
    /// Snake-case name, used for string-table keys and exports.
    pub fn name(self) -> &'static str {
        match self {
            ErrorCategory::Database => "database",
            ErrorCategory::Network => "network",
            ErrorCategory::HealthSync => "health_sync",
            ErrorCategory::DataCorruption => "data_corruption",
            ErrorCategory::Unknown => "unknown",
        }
    }

    /// Returns all categories in classification priority order.
    pub fn all() -> &'static [ErrorCategory] {
        ALL_CATEGORIES
    }
}

#[mutants::skip]
impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::io;

    use super::*;

    fn cause(msg: &str) -> Cause {
        Arc::new(io::Error::other(msg.to_string()))
    }

    #[test]
    fn category_matches_variant() {
        assert_eq!(
            ErrorKind::Database(cause("x")).category(),
            ErrorCategory::Database
        );
        assert_eq!(
            ErrorKind::Network(cause("x")).category(),
            ErrorCategory::Network
        );
        assert_eq!(
            ErrorKind::HealthSync(cause("x")).category(),
            ErrorCategory::HealthSync
        );
        assert_eq!(
            ErrorKind::DataCorruption("x".into()).category(),
            ErrorCategory::DataCorruption
        );
        assert_eq!(
            ErrorKind::Unknown(cause("x")).category(),
            ErrorCategory::Unknown
        );
    }

    #[test]
    fn description_is_cause_text() {
        let kind = ErrorKind::Network(cause("request timed out"));
        assert_eq!(kind.description(), "request timed out");
    }

    #[test]
    fn description_of_corruption_is_detail() {
        let kind = ErrorKind::DataCorruption("workout has no sets".into());
        assert_eq!(kind.description(), "workout has no sets");
    }

    #[test]
    fn display_prefixes_category() {
        let kind = ErrorKind::Database(cause("disk full"));
        assert_eq!(kind.to_string(), "database error: disk full");
    }

    #[test]
    fn source_is_cause() {
        let kind = ErrorKind::HealthSync(cause("not authorized"));
        let source = kind.source().expect("health sync keeps its cause");
        assert_eq!(source.to_string(), "not authorized");
    }

    #[test]
    fn corruption_has_no_cause() {
        let kind = ErrorKind::DataCorruption("bad".into());
        assert!(kind.cause().is_none());
        assert!(kind.source().is_none());
    }

    #[test]
    fn category_names() {
        let names: Vec<_> = ErrorCategory::all().iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            [
                "database",
                "network",
                "health_sync",
                "data_corruption",
                "unknown"
            ]
        );
    }

    #[test]
    fn category_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ErrorCategory::HealthSync).unwrap(),
            "\"health_sync\""
        );
    }
}
