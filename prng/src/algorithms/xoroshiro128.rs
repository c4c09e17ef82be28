//! xoroshiro128+ and xoroshiro128**
//!
//! Blackman and Vigna's two-word 64-bit generators (rotation constants
//! 24/16/37). Both emit full 64-bit words, so the façade scales their top
//! 53 bits directly instead of composing two draws.
//!
//! # Seeding
//!
//! FNV-1a64 + SplitMix64 into two non-zero words, then 8 discarded steps.

use super::{reject_all_zero, wrong_variant, Algorithm, RawWord, StateMachine};
use crate::error::PrngError;
use crate::seed::{non_zero_vector64, SeedInput};
use crate::snapshot::StateSnapshot;

const WARM_UP: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Engine {
    s0: u64,
    s1: u64,
}

impl Engine {
    fn from_seed(seed: &SeedInput) -> Self {
        let s = non_zero_vector64(seed, 2);
        Self { s0: s[0], s1: s[1] }
    }

    fn restore(algorithm: Algorithm, s0: u64, s1: u64) -> Result<Self, PrngError> {
        reject_all_zero(algorithm, &[s0, s1])?;
        Ok(Self { s0, s1 })
    }

    #[inline]
    fn advance(&mut self) {
        let s1 = self.s1 ^ self.s0;
        self.s0 = self.s0.rotate_left(24) ^ s1 ^ (s1 << 16);
        self.s1 = s1.rotate_left(37);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoroshiro128Plus {
    engine: Engine,
}

impl Xoroshiro128Plus {
    pub fn next_u64(&mut self) -> u64 {
        let result = self.engine.s0.wrapping_add(self.engine.s1);
        self.engine.advance();
        result
    }
}

impl StateMachine for Xoroshiro128Plus {
    const ALGORITHM: Algorithm = Algorithm::Xoroshiro128Plus;
    const DISCARD_ROUNDS: usize = WARM_UP;

    fn from_seed(seed: &SeedInput) -> Self {
        let mut rng = Self {
            engine: Engine::from_seed(seed),
        };
        rng.discard(Self::DISCARD_ROUNDS);
        rng
    }

    fn advance(&mut self) -> RawWord {
        RawWord::U64(self.next_u64())
    }

    fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::Xoroshiro128Plus {
            s0: self.engine.s0,
            s1: self.engine.s1,
        }
    }

    fn restore(snapshot: &StateSnapshot) -> Result<Self, PrngError> {
        match *snapshot {
            StateSnapshot::Xoroshiro128Plus { s0, s1 } => Ok(Self {
                engine: Engine::restore(Self::ALGORITHM, s0, s1)?,
            }),
            ref other => Err(wrong_variant(Self::ALGORITHM, other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoroshiro128StarStar {
    engine: Engine,
}

impl Xoroshiro128StarStar {
    pub fn next_u64(&mut self) -> u64 {
        let result = self
            .engine
            .s0
            .wrapping_mul(5)
            .rotate_left(7)
            .wrapping_mul(9);
        self.engine.advance();
        result
    }
}

impl StateMachine for Xoroshiro128StarStar {
    const ALGORITHM: Algorithm = Algorithm::Xoroshiro128StarStar;
    const DISCARD_ROUNDS: usize = WARM_UP;

    fn from_seed(seed: &SeedInput) -> Self {
        let mut rng = Self {
            engine: Engine::from_seed(seed),
        };
        rng.discard(Self::DISCARD_ROUNDS);
        rng
    }

    fn advance(&mut self) -> RawWord {
        RawWord::U64(self.next_u64())
    }

    fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::Xoroshiro128StarStar {
            s0: self.engine.s0,
            s1: self.engine.s1,
        }
    }

    fn restore(snapshot: &StateSnapshot) -> Result<Self, PrngError> {
        match *snapshot {
            StateSnapshot::Xoroshiro128StarStar { s0, s1 } => Ok(Self {
                engine: Engine::restore(Self::ALGORITHM, s0, s1)?,
            }),
            ref other => Err(wrong_variant(Self::ALGORITHM, other)),
        }
    }
}
