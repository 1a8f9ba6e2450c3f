use std::path::PathBuf;

/// Errors from collection storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The document text is not a JSON array of the expected records.
    #[error("cannot decode collection: {0}")]
    Decode(#[source] serde_json::Error),

    /// The records could not be serialized.
    #[error("cannot encode collection: {0}")]
    Encode(#[source] serde_json::Error),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The temporary file could not be renamed over the target document.
    #[error("cannot replace {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Storage backend is read-only or otherwise unavailable.
    #[error("collection is read-only")]
    ReadOnly,
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
