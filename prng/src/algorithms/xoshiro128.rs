//! xoshiro128+ and xoshiro128++
//!
//! Blackman and Vigna's 128-bit xor/shift/rotate generators. Both share one
//! linear engine over four 32-bit words and differ only in the output
//! scrambler:
//!
//! - `+`:  `s0 + s3`
//! - `++`: `rotl(s0 + s3, 7) + s0`
//!
//! Reference: <https://prng.di.unimi.it/>

use super::{reject_all_zero, wrong_variant, Algorithm, RawWord, StateMachine};
use crate::error::PrngError;
use crate::seed::{expand32_from_64, remap_all_zero, SeedInput};
use crate::snapshot::StateSnapshot;

/// Shared xoshiro128 linear engine
#[derive(Debug, Clone, PartialEq, Eq)]
struct Engine {
    s: [u32; 4],
}

impl Engine {
    fn from_seed(seed: &SeedInput) -> Self {
        let mut s = [0u32; 4];
        s.copy_from_slice(&expand32_from_64(seed, 4));
        remap_all_zero(&mut s);
        Self { s }
    }

    fn restore(algorithm: Algorithm, s: [u32; 4]) -> Result<Self, PrngError> {
        reject_all_zero(algorithm, &s)?;
        Ok(Self { s })
    }

    #[inline]
    fn advance(&mut self) {
        let s = &mut self.s;
        let t = s[1] << 9;
        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];
        s[2] ^= t;
        s[3] = s[3].rotate_left(11);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoshiro128Plus {
    engine: Engine,
}

impl Xoshiro128Plus {
    pub fn next_u32(&mut self) -> u32 {
        let s = &self.engine.s;
        let result = s[0].wrapping_add(s[3]);
        self.engine.advance();
        result
    }
}

impl StateMachine for Xoshiro128Plus {
    const ALGORITHM: Algorithm = Algorithm::Xoshiro128Plus;
    const DISCARD_ROUNDS: usize = 0;

    fn from_seed(seed: &SeedInput) -> Self {
        Self {
            engine: Engine::from_seed(seed),
        }
    }

    fn advance(&mut self) -> RawWord {
        RawWord::U32(self.next_u32())
    }

    fn snapshot(&self) -> StateSnapshot {
        let [s0, s1, s2, s3] = self.engine.s;
        StateSnapshot::Xoshiro128Plus { s0, s1, s2, s3 }
    }

    fn restore(snapshot: &StateSnapshot) -> Result<Self, PrngError> {
        match *snapshot {
            StateSnapshot::Xoshiro128Plus { s0, s1, s2, s3 } => Ok(Self {
                engine: Engine::restore(Self::ALGORITHM, [s0, s1, s2, s3])?,
            }),
            ref other => Err(wrong_variant(Self::ALGORITHM, other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoshiro128PlusPlus {
    engine: Engine,
}

impl Xoshiro128PlusPlus {
    pub fn next_u32(&mut self) -> u32 {
        let s = &self.engine.s;
        let result = s[0].wrapping_add(s[3]).rotate_left(7).wrapping_add(s[0]);
        self.engine.advance();
        result
    }
}

impl StateMachine for Xoshiro128PlusPlus {
    const ALGORITHM: Algorithm = Algorithm::Xoshiro128PlusPlus;
    const DISCARD_ROUNDS: usize = 16;

    fn from_seed(seed: &SeedInput) -> Self {
        let mut rng = Self {
            engine: Engine::from_seed(seed),
        };
        rng.discard(Self::DISCARD_ROUNDS);
        rng
    }

    fn advance(&mut self) -> RawWord {
        RawWord::U32(self.next_u32())
    }

    fn snapshot(&self) -> StateSnapshot {
        let [s0, s1, s2, s3] = self.engine.s;
        StateSnapshot::Xoshiro128PlusPlus { s0, s1, s2, s3 }
    }

    fn restore(snapshot: &StateSnapshot) -> Result<Self, PrngError> {
        match *snapshot {
            StateSnapshot::Xoshiro128PlusPlus { s0, s1, s2, s3 } => Ok(Self {
                engine: Engine::restore(Self::ALGORITHM, [s0, s1, s2, s3])?,
            }),
            ref other => Err(wrong_variant(Self::ALGORITHM, other)),
        }
    }
}
