//! SplitMix32 random number generator
//!
//! The 32-bit SplitMix stream used by the seed expander, exposed as a
//! generator in its own right.

use super::{wrong_variant, Algorithm, RawWord, StateMachine};
use crate::error::PrngError;
use crate::seed::{mix32, SeedInput};
use crate::snapshot::StateSnapshot;

const GOLDEN_GAMMA: u32 = 0x9e37_79b9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitMix32 {
    s: u32,
}

impl SplitMix32 {
    pub fn next_u32(&mut self) -> u32 {
        self.s = self.s.wrapping_add(GOLDEN_GAMMA);
        mix32(self.s)
    }
}

impl StateMachine for SplitMix32 {
    const ALGORITHM: Algorithm = Algorithm::SplitMix32;
    const DISCARD_ROUNDS: usize = 0;

    fn from_seed(seed: &SeedInput) -> Self {
        Self { s: seed.hash32() }
    }

    fn advance(&mut self) -> RawWord {
        RawWord::U32(self.next_u32())
    }

    fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::SplitMix32 { s: self.s }
    }

    fn restore(snapshot: &StateSnapshot) -> Result<Self, PrngError> {
        match *snapshot {
            StateSnapshot::SplitMix32 { s } => Ok(Self { s }),
            ref other => Err(wrong_variant(Self::ALGORITHM, other)),
        }
    }
}
