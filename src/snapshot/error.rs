//! Snapshot error types.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while encoding or decoding a snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// JSON encoding or decoding failed
    #[error("JSON snapshot error: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary encoding or decoding failed
    #[error("Binary snapshot error: {0}")]
    Binary(#[from] bincode::Error),

    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The same receipt appears more than once
    #[error("Duplicate receipt {0} in snapshot")]
    DuplicateReceipt(Uuid),
}
