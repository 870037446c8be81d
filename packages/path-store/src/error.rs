//! Error types for the path store.

use thiserror::Error;

/// Errors from the fallible parts of the store (snapshots).
///
/// Core store operations are total and never return these.
#[derive(Debug, Error)]
pub enum Error {
    /// A snapshot listed the same path more than once.
    #[error("duplicate path in snapshot: {path}")]
    DuplicatePath { path: String },

    /// JSON conversion failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for path store operations.
pub type Result<T> = std::result::Result<T, Error>;
