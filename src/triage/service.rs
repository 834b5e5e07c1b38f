use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info, warn};

use super::classify::classify;
use super::collaborators::{EmergencyHook, Haptics, NoHaptics};
use super::events::{Subscribers, SubscriptionId, TriageEvent};
use super::history::History;
use super::kind::ErrorKind;
use super::presentation::Presentation;
use super::record::{ErrorRecord, Failure, Report, emergency_lines, log_lines};
use super::severity::{Response, Severity};
use crate::config::TriageConfig;

const TARGET: &str = "thrustr::triage";

/// Terminal sink for failures reported anywhere in the app.
///
/// Owned by one place on the UI context and handed out by `&mut`; every
/// operation is synchronous and none of them fail. Collaborator faults are
/// logged and swallowed.
pub struct TriageService {
    history: History,
    presentation: Presentation,
    recent_limit: usize,
    haptics: Box<dyn Haptics>,
    emergency_hook: Option<Box<dyn EmergencyHook>>,
    subscribers: Subscribers,
}

impl Default for TriageService {
    fn default() -> Self {
        Self::new(&TriageConfig::default())
    }
}

impl TriageService {
    /// Creates a service with no haptics and no emergency hook.
    pub fn new(config: &TriageConfig) -> Self {
        Self {
            history: History::with_capacity(config.history_capacity),
            presentation: Presentation::default(),
            recent_limit: config.recent_limit,
            haptics: Box::new(NoHaptics),
            emergency_hook: None,
            subscribers: Subscribers::default(),
        }
    }

    pub fn with_haptics(mut self, haptics: Box<dyn Haptics>) -> Self {
        self.haptics = haptics;
        self
    }

    pub fn with_emergency_hook(mut self, hook: Box<dyn EmergencyHook>) -> Self {
        self.emergency_hook = Some(hook);
        self
    }

    /// Classifies, logs, records and dispatches one failure report.
    pub fn handle(&mut self, report: Report) {
        let Report {
            failure,
            source,
            severity,
            user_action,
            metadata,
        } = report;

        let kind = match failure {
            Failure::Raw(cause) => classify(cause),
            Failure::Corruption(detail) => ErrorKind::DataCorruption(detail),
        };
        let record = Arc::new(ErrorRecord::new(
            kind,
            severity,
            source,
            Utc::now(),
            user_action,
            metadata,
        ));

        write_log(&record);

        self.history.push(Arc::clone(&record));
        self.subscribers.emit(&TriageEvent::HistoryChanged {
            len: self.history.len(),
        });

        self.dispatch(record);
    }

    fn dispatch(&mut self, record: Arc<ErrorRecord>) {
        match record.severity().response() {
            Response::LogOnly => {}
            Response::Alert => self.show(record),
            Response::AlertWithHaptic => {
                self.show(Arc::clone(&record));
                self.haptic_cue(record.severity());
            }
            Response::Emergency => {
                self.show(Arc::clone(&record));
                self.haptic_cue(record.severity());
                self.escalate(&record);
            }
        }
    }

    fn show(&mut self, record: Arc<ErrorRecord>) {
        self.presentation.show(Arc::clone(&record));
        self.subscribers.emit(&TriageEvent::PresentationChanged {
            current: Some(record),
        });
    }

    fn haptic_cue(&mut self, severity: Severity) {
        let Some(pattern) = severity.haptic_pattern() else {
            return;
        };
        if let Err(e) = self.haptics.failure_cue(pattern) {
            warn!(target: TARGET, "haptic cue failed: {e}");
        }
    }

    fn escalate(&mut self, record: &ErrorRecord) {
        for line in emergency_lines(record) {
            error!(target: TARGET, "{line}");
        }
        if let Some(hook) = self.emergency_hook.as_mut()
            && let Err(e) = hook.on_critical(record)
        {
            warn!(target: TARGET, "emergency hook failed: {e}");
        }
    }

    /// Hides the current alert. A no-op when nothing is showing.
    pub fn dismiss_current_error(&mut self) {
        if self.presentation.dismiss() {
            self.subscribers
                .emit(&TriageEvent::PresentationChanged { current: None });
        }
    }

    /// Dismisses the current alert.
    ///
    /// No retryable operation is tracked, so nothing is re-invoked.
    pub fn retry_last_action(&mut self) {
        debug!(target: TARGET, "retry requested; no retry hook registered, dismissing");
        self.dismiss_current_error();
    }

    /// Empties the history. The current alert, if any, stays visible.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.subscribers
            .emit(&TriageEvent::HistoryChanged { len: 0 });
    }

    /// Returns up to `limit` records, newest first.
    pub fn recent_errors(&self, limit: usize) -> Vec<Arc<ErrorRecord>> {
        self.history.recent(limit)
    }

    /// Returns up to the configured number of recent records, newest first.
    pub fn recent_errors_default(&self) -> Vec<Arc<ErrorRecord>> {
        self.recent_errors(self.recent_limit)
    }

    pub fn current_error(&self) -> Option<&Arc<ErrorRecord>> {
        self.presentation.current()
    }

    pub fn is_alert_visible(&self) -> bool {
        self.presentation.is_alert_visible()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Registers a listener for state changes.
    pub fn subscribe(&mut self, listener: impl FnMut(&TriageEvent) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}

impl std::fmt::Debug for TriageService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriageService")
            .field("history", &self.history.len())
            .field("presentation", &self.presentation)
            .field("subscribers", &self.subscribers)
            .finish_non_exhaustive()
    }
}

// Writes the record's log lines at the level matching its severity.
fn write_log(record: &ErrorRecord) {
    for line in log_lines(record) {
        match record.severity() {
            Severity::Low => info!(target: TARGET, "{line}"),
            Severity::Medium => warn!(target: TARGET, "{line}"),
            Severity::High | Severity::Critical => error!(target: TARGET, "{line}"),
        }
    }
}
