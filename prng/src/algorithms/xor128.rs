//! xor128 random number generator
//!
//! Marsaglia's four-word xorshift. Fast and simple, though it fails some
//! linearity tests in BigCrush.
//!
//! # Algorithm
//!
//! 128 bits of state in four 32-bit words. Each step shifts the window one
//! word to the left and computes the new last word from the old first and
//! last words with an xor-shift cascade.
//!
//! # Seeding
//!
//! FNV-1a32 + SplitMix32 expansion into four non-zero words, then 64
//! discarded steps.

use super::{reject_all_zero, wrong_variant, Algorithm, RawWord, StateMachine};
use crate::error::PrngError;
use crate::seed::{non_zero_vector32, SeedInput};
use crate::snapshot::StateSnapshot;

/// xor128 state
///
/// # Example
/// ```
/// use seeded_prng_core_rs::algorithms::{StateMachine, Xor128};
/// use seeded_prng_core_rs::SeedInput;
///
/// let mut rng = Xor128::from_seed(&SeedInput::from("seed"));
/// let word = rng.next_u32();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xor128 {
    x: u32,
    y: u32,
    z: u32,
    w: u32,
}

impl Xor128 {
    /// Generate next 32-bit word
    pub fn next_u32(&mut self) -> u32 {
        let t = self.x ^ (self.x << 11);
        self.x = self.y;
        self.y = self.z;
        self.z = self.w;
        self.w ^= (self.w >> 19) ^ t ^ (t >> 8);
        self.w
    }
}

impl StateMachine for Xor128 {
    const ALGORITHM: Algorithm = Algorithm::Xor128;
    const DISCARD_ROUNDS: usize = 64;

    fn from_seed(seed: &SeedInput) -> Self {
        let s = non_zero_vector32(seed, 4);
        let mut rng = Self {
            x: s[0],
            y: s[1],
            z: s[2],
            w: s[3],
        };
        rng.discard(Self::DISCARD_ROUNDS);
        rng
    }

    fn advance(&mut self) -> RawWord {
        RawWord::U32(self.next_u32())
    }

    fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::Xor128 {
            x: self.x,
            y: self.y,
            z: self.z,
            w: self.w,
        }
    }

    fn restore(snapshot: &StateSnapshot) -> Result<Self, PrngError> {
        match *snapshot {
            StateSnapshot::Xor128 { x, y, z, w } => {
                reject_all_zero(Self::ALGORITHM, &[x, y, z, w])?;
                Ok(Self { x, y, z, w })
            }
            ref other => Err(wrong_variant(Self::ALGORITHM, other)),
        }
    }
}
