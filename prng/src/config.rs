//! Generator configuration
//!
//! A [`PrngConfig`] is the serializable recipe for a generator: which
//! algorithm, and either a seed or a snapshot to resume from.
//!
//! ```json
//! { "algorithm": "xoshiro128plusplus", "seed": "run-42" }
//! { "algorithm": "pcg32", "seed": 12345 }
//! { "algorithm": "xor128", "state": { "algorithm": "xor128", "x": 1, "y": 2, "z": 3, "w": 4 } }
//! ```

use crate::algorithms::Algorithm;
use crate::error::PrngError;
use crate::prng::Prng;
use crate::seed::SeedInput;
use crate::snapshot::StateSnapshot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrngConfig {
    pub algorithm: Algorithm,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<SeedInput>,

    /// Takes precedence over `seed`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<StateSnapshot>,
}

impl PrngConfig {
    pub fn seeded(algorithm: Algorithm, seed: impl Into<SeedInput>) -> Self {
        Self {
            algorithm,
            seed: Some(seed.into()),
            state: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, PrngError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, PrngError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Prng {
    /// Build the generator a config describes
    pub fn from_config(config: &PrngConfig) -> Result<Self, PrngError> {
        Prng::make(config.algorithm, config.seed.clone(), config.state.as_ref())
    }
}
