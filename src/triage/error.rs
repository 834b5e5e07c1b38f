/// Failures reported by triage collaborators (haptics, emergency hooks).
///
/// The service logs and swallows these; they never reach a caller of
/// [`TriageService::handle`](super::TriageService::handle).
#[derive(Debug, thiserror::Error)]
pub enum CollaboratorError {
    /// An I/O error occurred while talking to a device or file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisting a record failed.
    #[error("storage error: {0}")]
    Storage(String),

    /// The collaborator is not available on this platform.
    #[error("unavailable: {0}")]
    Unavailable(String),
}
