use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::codec::encode_records;
use super::error::StorageError;
use crate::triage::ErrorRecord;

/// Writes `records` (newest first) to `path` as JSON Lines.
///
/// Returns the number of records written, or [`StorageError::EmptyExport`]
/// when there is nothing to write.
pub fn export_records(records: &[Arc<ErrorRecord>], path: &Path) -> Result<usize, StorageError> {
    if records.is_empty() {
        return Err(StorageError::EmptyExport);
    }
    let buf = encode_records(records.iter().map(Arc::as_ref))?;
    fs::write(path, &buf)?;
    Ok(records.len())
}

/// File name for a history snapshot taken at `now`:
/// `thrustr-errors-{YYYYMMDD}-{HHMMSS}.jsonl`.
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("thrustr-errors-{}.jsonl", now.format("%Y%m%d-%H%M%S"))
}

/// Returns the default export path (in the home directory) for a snapshot
/// taken at `now`.
///
/// Returns `StorageError::NoHomeDir` if the home directory cannot be
/// determined.
pub fn default_export_path(now: DateTime<Utc>) -> Result<PathBuf, StorageError> {
    let home = dirs::home_dir().ok_or(StorageError::NoHomeDir)?;
    Ok(home.join(export_file_name(now)))
}

#[cfg(test)]
mod tests {
    use std::io;

    use chrono::TimeZone;
    use tempfile::tempdir;

    use super::*;
    use crate::storage::load_records;
    use crate::triage::{ErrorKind, Severity};

    fn make_record(detail: &str) -> Arc<ErrorRecord> {
        Arc::new(ErrorRecord::new(
            ErrorKind::Unknown(Arc::new(io::Error::other(detail.to_string()))),
            Severity::Medium,
            "Settings",
            Utc::now(),
            None,
            None,
        ))
    }

    #[test]
    fn export_writes_all_records_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("export.jsonl");
        let records = vec![make_record("newest"), make_record("oldest")];

        assert_eq!(export_records(&records, &path).unwrap(), 2);

        let loaded = load_records(&path).unwrap();
        assert_eq!(loaded[0].description, "newest");
        assert_eq!(loaded[1].description, "oldest");
    }

    #[test]
    fn export_empty_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("export.jsonl");
        assert!(matches!(
            export_records(&[], &path),
            Err(StorageError::EmptyExport)
        ));
        assert!(!path.exists());
    }

    #[test]
    fn file_name_format() {
        let now = Utc.with_ymd_and_hms(2026, 2, 16, 9, 5, 7).unwrap();
        assert_eq!(export_file_name(now), "thrustr-errors-20260216-090507.jsonl");
    }

    #[test]
    fn default_path_uses_file_name() {
        let now = Utc.with_ymd_and_hms(2026, 2, 16, 9, 5, 7).unwrap();
        let path = default_export_path(now).unwrap();
        let filename = path.file_name().unwrap().to_str().unwrap();
        assert_eq!(filename, "thrustr-errors-20260216-090507.jsonl");
    }

    #[test]
    fn default_path_is_in_home_directory() {
        let path = default_export_path(Utc::now()).unwrap();
        let home = dirs::home_dir().unwrap();
        assert_eq!(path.parent().unwrap(), home);
    }
}
