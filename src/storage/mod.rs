//! Record persistence (JSONL) for critical records and history exports.
//!
//! Only critical records are written automatically, one JSON object per line
//! appended to `emergency.jsonl`. The rolling history stays in memory and
//! reaches disk only through an explicit export.

mod codec;
mod emergency;
mod error;
mod export;
mod manager;

pub use codec::{RecordEncoder, StoredRecord, encode_records};
pub use emergency::EmergencyFile;
pub use error::StorageError;
pub use export::{default_export_path, export_file_name, export_records};
pub use manager::{RecordStore, load_records};
