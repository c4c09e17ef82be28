//! Checkpoint - Save/Load Generator State
//!
//! Wraps a [`StateSnapshot`] in a JSON envelope with a SHA-256 checksum so a
//! stored stream position can be resumed later and tampering or truncation
//! is caught on load.
//!
//! # Critical Invariants
//!
//! - **Exact resumption**: a loaded checkpoint continues the stream exactly
//! - **Integrity**: the checksum covers the canonical JSON of the state
//! - **Tag agreement**: envelope algorithm and snapshot tag must match

use crate::algorithms::Algorithm;
use crate::error::PrngError;
use crate::prng::Prng;
use crate::snapshot::StateSnapshot;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub const CHECKPOINT_VERSION: u32 = 1;

/// Serialized generator position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub version: u32,

    pub algorithm: Algorithm,

    pub state: StateSnapshot,

    /// SHA256 of the canonical JSON of `state`
    pub checksum: String,
}

impl Checkpoint {
    pub fn new(state: StateSnapshot) -> Result<Self, PrngError> {
        let checksum = compute_state_hash(&state)?;
        Ok(Self {
            version: CHECKPOINT_VERSION,
            algorithm: state.algorithm(),
            state,
            checksum,
        })
    }

    /// Check version, tag agreement and checksum
    pub fn validate(&self) -> Result<(), PrngError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(PrngError::UnsupportedCheckpointVersion(self.version));
        }
        if self.state.algorithm() != self.algorithm {
            return Err(PrngError::invalid_state(
                self.algorithm,
                format!("checkpoint state belongs to {}", self.state.algorithm()),
            ));
        }
        let actual = compute_state_hash(&self.state)?;
        if actual != self.checksum {
            return Err(PrngError::ChecksumMismatch {
                expected: self.checksum.clone(),
                actual,
            });
        }
        Ok(())
    }
}

/// Compute deterministic SHA256 hash of a snapshot
///
/// Goes through `serde_json::Value`, whose maps keep keys sorted, so the
/// hash does not depend on field declaration order.
pub fn compute_state_hash(state: &StateSnapshot) -> Result<String, PrngError> {
    let value = serde_json::to_value(state)?;
    let json = serde_json::to_string(&value)?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

impl Prng {
    /// Serialize the current position as a checksummed JSON checkpoint
    pub fn save_checkpoint(&self) -> Result<String, PrngError> {
        let checkpoint = Checkpoint::new(self.state())?;
        let json = serde_json::to_string(&checkpoint)?;
        tracing::debug!(
            algorithm = %checkpoint.algorithm,
            checksum = %checkpoint.checksum,
            "checkpoint saved"
        );
        Ok(json)
    }

    /// Resume from a checkpoint produced by [`Prng::save_checkpoint`]
    pub fn load_checkpoint(json: &str) -> Result<Self, PrngError> {
        let checkpoint: Checkpoint = serde_json::from_str(json)?;
        checkpoint.validate()?;
        tracing::debug!(
            algorithm = %checkpoint.algorithm,
            checksum = %checkpoint.checksum,
            "checkpoint loaded"
        );
        Prng::from_snapshot(&checkpoint.state)
    }
}
