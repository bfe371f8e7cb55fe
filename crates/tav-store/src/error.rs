//! Error types for the record store.

use std::path::PathBuf;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while reading or writing records.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A filesystem operation failed.
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        /// The file or directory involved.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// A record could not be encoded or decoded.
    #[error("malformed record {}: {source}", .path.display())]
    Json {
        /// The record file.
        path: PathBuf,
        /// The underlying error.
        source: serde_json::Error,
    },

    /// No stored character matches the given ID or prefix.
    #[error("no character matches \"{0}\"")]
    NotFound(String),

    /// More than one stored character matches the given prefix.
    #[error("\"{prefix}\" matches {count} characters, use more of the ID")]
    Ambiguous {
        /// The prefix that was looked up.
        prefix: String,
        /// How many records matched.
        count: usize,
    },
}
