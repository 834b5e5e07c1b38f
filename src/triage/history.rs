use std::collections::VecDeque;
use std::sync::Arc;

use super::record::ErrorRecord;

/// Maximum number of records kept unless configured otherwise.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Bounded, newest-first log of handled records.
///
/// Pushing past the capacity evicts the oldest record. The history lives in
/// memory only.
#[derive(Debug, Clone)]
pub struct History {
    records: VecDeque<Arc<ErrorRecord>>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Creates an empty history with [`DEFAULT_HISTORY_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Creates an empty history holding at most `capacity` records (at least one).
    ///
    /// Storage grows on demand past [`DEFAULT_HISTORY_CAPACITY`].
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY) + 1),
            capacity,
        }
    }

    /// Prepends a record, evicting the oldest when over capacity.
    pub fn push(&mut self, record: Arc<ErrorRecord>) {
        self.records.push_front(record);
        self.records.truncate(self.capacity);
    }

    /// Returns up to `limit` records, newest first.
    pub fn recent(&self, limit: usize) -> Vec<Arc<ErrorRecord>> {
        self.records.iter().take(limit).cloned().collect()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<ErrorRecord>> {
        self.records.iter()
    }
}
