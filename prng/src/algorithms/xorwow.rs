//! xorwow random number generator
//!
//! Marsaglia's five-word xorshift plus a Weyl counter added to the output.
//! Reference: <https://en.wikipedia.org/wiki/Xorshift#xorwow>

use super::{wrong_variant, Algorithm, RawWord, StateMachine};
use crate::error::PrngError;
use crate::seed::{non_zero_vector32, SeedInput};
use crate::snapshot::StateSnapshot;

const WEYL: u32 = 362_437;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorWow {
    x: u32,
    y: u32,
    z: u32,
    w: u32,
    v: u32,
    d: u32,
}

impl XorWow {
    pub fn next_u32(&mut self) -> u32 {
        let t = self.x ^ (self.x >> 2);
        self.x = self.y;
        self.y = self.z;
        self.z = self.w;
        self.w = self.v;
        self.v = self.v ^ (self.v << 4) ^ (t ^ (t << 1));
        self.d = self.d.wrapping_add(WEYL);
        self.d.wrapping_add(self.v)
    }
}

impl StateMachine for XorWow {
    const ALGORITHM: Algorithm = Algorithm::XorWow;
    const DISCARD_ROUNDS: usize = 64;

    fn from_seed(seed: &SeedInput) -> Self {
        let s = non_zero_vector32(seed, 5);
        let mut rng = Self {
            x: s[0],
            y: s[1],
            z: s[2],
            w: s[3],
            v: s[4],
            d: WEYL,
        };
        rng.discard(Self::DISCARD_ROUNDS);
        rng
    }

    fn advance(&mut self) -> RawWord {
        RawWord::U32(self.next_u32())
    }

    fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::XorWow {
            x: self.x,
            y: self.y,
            z: self.z,
            w: self.w,
            v: self.v,
            d: self.d,
        }
    }

    fn restore(snapshot: &StateSnapshot) -> Result<Self, PrngError> {
        match *snapshot {
            StateSnapshot::XorWow { x, y, z, w, v, d } => Ok(Self { x, y, z, w, v, d }),
            ref other => Err(wrong_variant(Self::ALGORITHM, other)),
        }
    }
}
