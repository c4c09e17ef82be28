//! Error types
//!
//! Drawing values never fails. Errors only surface at the boundaries where
//! external data enters a generator: restoring a snapshot, parsing an
//! algorithm name, and reading configs or checkpoints.

use crate::algorithms::Algorithm;
use thiserror::Error;

/// Errors produced at the construction/restore boundary
#[derive(Debug, Error)]
pub enum PrngError {
    /// Snapshot does not have the shape the target algorithm expects
    #[error("Invalid state for {algorithm}: {reason}")]
    InvalidState { algorithm: Algorithm, reason: String },

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Checkpoint checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("Unsupported checkpoint version: {0}")]
    UnsupportedCheckpointVersion(u32),
}

impl PrngError {
    pub(crate) fn invalid_state(algorithm: Algorithm, reason: impl Into<String>) -> Self {
        PrngError::InvalidState {
            algorithm,
            reason: reason.into(),
        }
    }
}
