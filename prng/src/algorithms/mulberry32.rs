//! Mulberry32 random number generator
//!
//! Tommy Ettinger's single-word generator: a Weyl counter run through a
//! multiply-xorshift output mix. 32 bits of state, so the period is 2^32.

use super::{wrong_variant, Algorithm, RawWord, StateMachine};
use crate::error::PrngError;
use crate::seed::SeedInput;
use crate::snapshot::StateSnapshot;

const INCREMENT: u32 = 0x6d2b_79f5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    s: u32,
}

impl Mulberry32 {
    pub fn next_u32(&mut self) -> u32 {
        self.s = self.s.wrapping_add(INCREMENT);
        let mut t = self.s;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }
}

impl StateMachine for Mulberry32 {
    const ALGORITHM: Algorithm = Algorithm::Mulberry32;
    const DISCARD_ROUNDS: usize = 0;

    fn from_seed(seed: &SeedInput) -> Self {
        Self { s: seed.hash32() }
    }

    fn advance(&mut self) -> RawWord {
        RawWord::U32(self.next_u32())
    }

    fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::Mulberry32 { s: self.s }
    }

    fn restore(snapshot: &StateSnapshot) -> Result<Self, PrngError> {
        match *snapshot {
            StateSnapshot::Mulberry32 { s } => Ok(Self { s }),
            ref other => Err(wrong_variant(Self::ALGORITHM, other)),
        }
    }
}
