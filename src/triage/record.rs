use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::kind::{Cause, ErrorKind};
use super::severity::Severity;

/// Free-form context attached to a report: string keys to arbitrary values.
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// Immutable snapshot of one reported failure.
///
/// Created when a report is handled and never mutated afterwards. Shared as
/// `Arc<ErrorRecord>` between the history and the current-error slot.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    kind: ErrorKind,
    severity: Severity,
    source: String,
    timestamp: DateTime<Utc>,
    user_action: Option<String>,
    metadata: Option<Metadata>,
}

impl ErrorRecord {
    /// Creates a record with an explicit timestamp.
    pub fn new(
        kind: ErrorKind,
        severity: Severity,
        source: impl Into<String>,
        timestamp: DateTime<Utc>,
        user_action: Option<String>,
        metadata: Option<Metadata>,
    ) -> Self {
        Self {
            kind,
            severity,
            source: source.into(),
            timestamp,
            user_action,
            metadata,
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Identifier of the subsystem that reported the failure.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn user_action(&self) -> Option<&str> {
        self.user_action.as_deref()
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    /// Shorthand for `self.kind().description()`.
    pub fn description(&self) -> String {
        self.kind.description()
    }
}

/// What a caller hands to [`TriageService::handle`](super::TriageService::handle).
#[derive(Debug, Clone)]
pub(crate) enum Failure {
    /// A raw failure, classified on handling.
    Raw(Cause),
    /// A failure the caller already knows is data corruption.
    Corruption(String),
}

/// One failure report, built with defaults and adjusted through chained setters.
///
/// Severity defaults to [`Severity::Medium`]; user action and metadata
/// default to absent.
#[derive(Debug, Clone)]
pub struct Report {
    pub(crate) failure: Failure,
    pub(crate) source: String,
    pub(crate) severity: Severity,
    pub(crate) user_action: Option<String>,
    pub(crate) metadata: Option<Metadata>,
}

impl Report {
    /// Reports a raw failure from `source`.
    pub fn new<E>(error: E, source: impl Into<String>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::from_cause(Arc::new(error), source)
    }

    /// Reports an already shared cause from `source`.
    pub fn from_cause(cause: Cause, source: impl Into<String>) -> Self {
        Self::with_failure(Failure::Raw(cause), source.into())
    }

    /// Reports a data-corruption event described by `detail`.
    pub fn corruption(detail: impl Into<String>, source: impl Into<String>) -> Self {
        Self::with_failure(Failure::Corruption(detail.into()), source.into())
    }

    fn with_failure(failure: Failure, source: String) -> Self {
        Self {
            failure,
            source,
            severity: Severity::default(),
            user_action: None,
            metadata: None,
        }
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Labels what the user was doing when the failure happened.
    pub fn user_action(mut self, action: impl Into<String>) -> Self {
        self.user_action = Some(action.into());
        self
    }

    /// Adds one metadata entry, replacing any previous value for `key`.
    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata
            .get_or_insert_with(Metadata::new)
            .insert(key.into(), value.into());
        self
    }
}

// Renders metadata as a compact JSON object with sorted keys.
fn metadata_json(metadata: &Metadata) -> String {
    let object: serde_json::Map<String, serde_json::Value> = metadata
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    serde_json::Value::Object(object).to_string()
}

/// Log lines written for a handled record.
///
/// The first line always carries glyph, severity, source and description; a
/// user-action line and a metadata line follow only when present.
pub fn log_lines(record: &ErrorRecord) -> Vec<String> {
    let severity = record.severity();
    let mut lines = vec![format!(
        "{} [{}] {}: {}",
        severity.glyph(),
        severity.label(),
        record.source(),
        record.description()
    )];
    if let Some(action) = record.user_action() {
        lines.push(format!("  user action: {action}"));
    }
    if let Some(metadata) = record.metadata() {
        lines.push(format!("  metadata: {}", metadata_json(metadata)));
    }
    lines
}

/// Multi-line detail dump written for critical records.
pub fn emergency_lines(record: &ErrorRecord) -> Vec<String> {
    vec![
        "🚨 CRITICAL ERROR 🚨".to_string(),
        format!("  source: {}", record.source()),
        format!("  category: {}", record.kind().category()),
        format!("  timestamp: {}", record.timestamp().to_rfc3339()),
        format!("  description: {}", record.description()),
        format!("  user action: {}", record.user_action().unwrap_or("none")),
        format!(
            "  metadata: {}",
            record
                .metadata()
                .map(metadata_json)
                .unwrap_or_else(|| "none".to_string())
        ),
        "  end of critical error report".to_string(),
    ]
}
