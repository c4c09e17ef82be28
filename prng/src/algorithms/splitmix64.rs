//! SplitMix64 random number generator
//!
//! Steele, Lea and Flood's 64-bit SplitMix. One 64-bit word of state with a
//! golden-ratio increment; every output is a full 64-bit word.

use super::{wrong_variant, Algorithm, RawWord, StateMachine};
use crate::error::PrngError;
use crate::seed::{mix64, SeedInput};
use crate::snapshot::StateSnapshot;

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitMix64 {
    s: u64,
}

impl SplitMix64 {
    pub fn next_u64(&mut self) -> u64 {
        self.s = self.s.wrapping_add(GOLDEN_GAMMA);
        mix64(self.s)
    }
}

impl StateMachine for SplitMix64 {
    const ALGORITHM: Algorithm = Algorithm::SplitMix64;
    const DISCARD_ROUNDS: usize = 0;

    fn from_seed(seed: &SeedInput) -> Self {
        Self { s: seed.hash64() }
    }

    fn advance(&mut self) -> RawWord {
        RawWord::U64(self.next_u64())
    }

    fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::SplitMix64 { s: self.s }
    }

    fn restore(snapshot: &StateSnapshot) -> Result<Self, PrngError> {
        match *snapshot {
            StateSnapshot::SplitMix64 { s } => Ok(Self { s }),
            ref other => Err(wrong_variant(Self::ALGORITHM, other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_sequence_from_zero() {
        let mut rng = SplitMix64 { s: 0 };
        assert_eq!(rng.next_u64(), 0xe220_a839_7b1d_cdaf);
        assert_eq!(rng.next_u64(), 0x6e78_9e6a_a1b9_65f4);
    }

    #[test]
    fn test_state_wraps() {
        let mut rng = SplitMix64 { s: u64::MAX };
        rng.next_u64();
        assert_eq!(rng.s, GOLDEN_GAMMA - 1);
    }
}
