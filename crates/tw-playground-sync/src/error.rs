use thiserror::Error;

/// Errors that can occur while syncing snapshots
#[derive(Debug, Error)]
pub enum SyncError {
    /// The payload is missing fields or has the wrong shape
    #[error("Invalid sync request: {0}")]
    InvalidRequest(String),

    /// No snapshot is stored under the identifier
    #[error("Snapshot not found: {0}")]
    NotFound(String),

    /// Reading or writing the store failed
    #[error("Snapshot storage failed: {0}")]
    Storage(#[from] std::io::Error),

    /// A snapshot could not be encoded or decoded
    #[error("Snapshot encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl SyncError {
    /// Whether the caller sent bad input (as opposed to a server-side failure)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }
}
