/// Errors that can occur while persisting or exporting records.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// An I/O error occurred while reading or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON serialization or deserialization error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The platform does not provide a data directory.
    #[error("could not determine XDG data directory")]
    NoDataDir,

    /// The platform does not provide a home directory.
    #[error("could not determine home directory")]
    NoHomeDir,

    /// An export was requested for an empty history.
    #[error("no errors to export")]
    EmptyExport,
}
