use std::sync::Arc;

use super::record::ErrorRecord;

/// The single current-error slot a presentation layer binds against.
///
/// `Showing` is the only state with a visible alert, so a visible alert
/// always has a current error.
#[derive(Debug, Clone, Default)]
pub enum Presentation {
    #[default]
    Idle,
    Showing(Arc<ErrorRecord>),
}

impl Presentation {
    /// Shows `record`, replacing whatever was showing.
    pub fn show(&mut self, record: Arc<ErrorRecord>) {
        *self = Presentation::Showing(record);
    }

    /// Returns to `Idle`. Returns `true` if an alert was showing.
    pub fn dismiss(&mut self) -> bool {
        matches!(std::mem::take(self), Presentation::Showing(_))
    }

    pub fn current(&self) -> Option<&Arc<ErrorRecord>> {
        match self {
            Presentation::Idle => None,
            Presentation::Showing(record) => Some(record),
        }
    }

    pub fn is_alert_visible(&self) -> bool {
        matches!(self, Presentation::Showing(_))
    }
}
