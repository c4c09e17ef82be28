//! SFC32 random number generator
//!
//! Chris Doty-Humphrey's Small Fast Chaotic generator. Three chaotic words
//! plus a counter `d`, which rules out short cycles without needing a
//! non-zero seed.

use super::{wrong_variant, Algorithm, RawWord, StateMachine};
use crate::error::PrngError;
use crate::seed::{expand32, SeedInput};
use crate::snapshot::StateSnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sfc32 {
    a: u32,
    b: u32,
    c: u32,
    d: u32,
}

impl Sfc32 {
    pub fn next_u32(&mut self) -> u32 {
        let t = self.a.wrapping_add(self.b).wrapping_add(self.d);
        self.d = self.d.wrapping_add(1);
        self.a = self.b ^ (self.b >> 9);
        self.b = self.c.wrapping_add(self.c << 3);
        self.c = self.c.rotate_left(21).wrapping_add(t);
        t
    }
}

impl StateMachine for Sfc32 {
    const ALGORITHM: Algorithm = Algorithm::Sfc32;
    const DISCARD_ROUNDS: usize = 12;

    fn from_seed(seed: &SeedInput) -> Self {
        let v = expand32(seed, 4);
        let mut rng = Self {
            a: v[0],
            b: v[1],
            c: v[2],
            d: v[3],
        };
        rng.discard(Self::DISCARD_ROUNDS);
        rng
    }

    fn advance(&mut self) -> RawWord {
        RawWord::U32(self.next_u32())
    }

    fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::Sfc32 {
            a: self.a,
            b: self.b,
            c: self.c,
            d: self.d,
        }
    }

    fn restore(snapshot: &StateSnapshot) -> Result<Self, PrngError> {
        match *snapshot {
            StateSnapshot::Sfc32 { a, b, c, d } => Ok(Self { a, b, c, d }),
            ref other => Err(wrong_variant(Self::ALGORITHM, other)),
        }
    }
}
