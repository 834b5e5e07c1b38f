use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::codec::{StoredRecord, encode_records};
use super::error::StorageError;
use crate::triage::ErrorRecord;

const EMERGENCY_FILE: &str = "emergency.jsonl";
const LOG_FILE: &str = "triage.log";

/// Manages the on-disk files kept next to the in-memory history.
///
/// Critical records are appended to `emergency.jsonl`; each line is one
/// [`StoredRecord`]. The history itself is never persisted here.
#[derive(Debug, Clone)]
pub struct RecordStore {
    base_path: PathBuf,
}

impl RecordStore {
    /// Creates a store using the XDG data directory.
    ///
    /// The directory (`~/.local/share/thrustr/`) is created if it does not
    /// already exist.
    pub fn new() -> Result<Self, StorageError> {
        let data_dir = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
        Self::with_path(data_dir.join("thrustr"))
    }

    /// Creates a store rooted at the given path.
    pub fn with_path(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let base_path = path.into();
        fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    /// Path of the emergency record file.
    pub fn emergency_path(&self) -> PathBuf {
        self.base_path.join(EMERGENCY_FILE)
    }

    /// Path the console writes its `tracing` output to.
    pub fn log_path(&self) -> PathBuf {
        self.base_path.join(LOG_FILE)
    }

    /// Appends a critical record to the emergency file, creating it if needed.
    pub fn append_emergency(&self, record: &ErrorRecord) -> Result<(), StorageError> {
        let buf = encode_records([record])?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.emergency_path())?;
        file.write_all(&buf)?;
        Ok(())
    }

    /// Loads every record previously appended to the emergency file.
    ///
    /// A missing file yields an empty list.
    pub fn load_emergency(&self) -> Result<Vec<StoredRecord>, StorageError> {
        let path = self.emergency_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        load_records(&path)
    }
}

/// Loads a JSON Lines file of [`StoredRecord`]s, skipping blank lines.
pub fn load_records(path: &Path) -> Result<Vec<StoredRecord>, StorageError> {
    let reader = BufReader::new(fs::File::open(path)?);
    reader
        .lines()
        .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
        .map(|line| {
            let line = line?;
            serde_json::from_str(&line).map_err(StorageError::Json)
        })
        .collect()
}
