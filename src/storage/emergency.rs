use super::manager::RecordStore;
use crate::triage::{CollaboratorError, EmergencyHook, ErrorRecord};

/// Emergency hook that persists every critical record to the emergency file.
#[derive(Debug, Clone)]
pub struct EmergencyFile {
    store: RecordStore,
}

impl EmergencyFile {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }
}

impl EmergencyHook for EmergencyFile {
    fn on_critical(&mut self, record: &ErrorRecord) -> Result<(), CollaboratorError> {
        self.store
            .append_emergency(record)
            .map_err(|e| CollaboratorError::Storage(e.to_string()))
    }
}
