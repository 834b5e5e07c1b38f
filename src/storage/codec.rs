use bytes::BytesMut;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio_util::codec::Encoder;

use super::error::StorageError;
use crate::triage::{ErrorCategory, ErrorRecord, Metadata, Severity};

/// Serializable form of an [`ErrorRecord`].
///
/// The opaque cause is reduced to its description; everything else is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub category: ErrorCategory,
    pub description: String,
    pub severity: Severity,
    pub source: String,
    pub timestamp: DateTime<Utc>,
    pub user_action: Option<String>,
    pub metadata: Option<Metadata>,
}

impl StoredRecord {
    pub fn from_record(record: &ErrorRecord) -> Self {
        Self {
            category: record.kind().category(),
            description: record.description(),
            severity: record.severity(),
            source: record.source().to_string(),
            timestamp: record.timestamp(),
            user_action: record.user_action().map(str::to_string),
            metadata: record.metadata().cloned(),
        }
    }
}

/// Encodes records as JSON Lines: one object per record, newline-terminated.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecordEncoder;

impl Encoder<&ErrorRecord> for RecordEncoder {
    type Error = StorageError;

    fn encode(&mut self, record: &ErrorRecord, dst: &mut BytesMut) -> Result<(), StorageError> {
        let line = serde_json::to_vec(&StoredRecord::from_record(record))?;
        dst.reserve(line.len() + 1);
        dst.extend_from_slice(&line);
        dst.extend_from_slice(b"\n");
        Ok(())
    }
}

/// Encodes `records` in order into a single JSON Lines buffer.
pub fn encode_records<'a>(
    records: impl IntoIterator<Item = &'a ErrorRecord>,
) -> Result<BytesMut, StorageError> {
    let mut encoder = RecordEncoder;
    let mut buf = BytesMut::new();
    for record in records {
        encoder.encode(record, &mut buf)?;
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Arc;

    use chrono::TimeZone;
    use serde_json::json;

    use super::*;
    use crate::triage::ErrorKind;

    fn make_record(detail: &str) -> ErrorRecord {
        let mut metadata = Metadata::new();
        metadata.insert("set".into(), json!(2));
        ErrorRecord::new(
            ErrorKind::Network(Arc::new(io::Error::other(detail.to_string()))),
            Severity::High,
            "CardioSync",
            Utc.with_ymd_and_hms(2026, 2, 16, 12, 0, 0).unwrap(),
            Some("Uploading run".into()),
            Some(metadata),
        )
    }

    #[test]
    fn encodes_one_line_per_record() {
        let mut buf = BytesMut::new();
        RecordEncoder.encode(&make_record("a"), &mut buf).unwrap();
        RecordEncoder.encode(&make_record("b"), &mut buf).unwrap();
        let text = String::from_utf8(buf.to_vec()).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn line_contains_all_fields() {
        let buf = encode_records([&make_record("network down")]).unwrap();
        let value: serde_json::Value = serde_json::from_slice(buf.trim_ascii_end()).unwrap();
        assert_eq!(
            value,
            json!({
                "category": "network",
                "description": "network down",
                "severity": "high",
                "source": "CardioSync",
                "timestamp": "2026-02-16T12:00:00Z",
                "user_action": "Uploading run",
                "metadata": {"set": 2},
            })
        );
    }

    #[test]
    fn stored_record_decodes_back() {
        let record = make_record("network down");
        let buf = encode_records([&record]).unwrap();
        let stored: StoredRecord = serde_json::from_slice(buf.trim_ascii_end()).unwrap();
        assert_eq!(stored, StoredRecord::from_record(&record));
    }

    #[test]
    fn empty_input_is_empty_buffer() {
        assert!(encode_records(std::iter::empty()).unwrap().is_empty());
    }
}
