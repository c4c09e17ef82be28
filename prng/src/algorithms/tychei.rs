//! Tyche-i random number generator
//!
//! Neves and Araujo's inverted Tyche: four 32-bit words mixed with
//! add-rotate-xor steps. Output is the `a` word.
//!
//! # Seeding
//!
//! Integer seeds preload `a` with the seed divided by 2^32 (truncated) and
//! `b` with its low 32 bits. Then each seed char code is xored into `b`
//! followed by one step, with 20 extra steps after the last code.

use super::{reject_all_zero, wrong_variant, Algorithm, RawWord, StateMachine};
use crate::error::PrngError;
use crate::seed::SeedInput;
use crate::snapshot::StateSnapshot;

const C_INIT: u32 = 2_654_435_769;
const D_INIT: u32 = 1_367_130_551;
const EXTRA_ROUNDS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tychei {
    a: u32,
    b: u32,
    c: u32,
    d: u32,
}

impl Tychei {
    pub fn next_u32(&mut self) -> u32 {
        self.b = self.b.rotate_left(25) ^ self.c;
        self.c = self.c.wrapping_sub(self.d);
        self.d = self.d.rotate_left(24) ^ self.a;
        self.a = self.a.wrapping_sub(self.b);
        self.b = self.b.rotate_left(20) ^ self.c;
        self.c = self.c.wrapping_sub(self.d);
        // Mixes `c` into `d`, not `d` itself
        self.d = (self.d << 16) ^ (self.c >> 16) ^ self.a;
        self.a = self.a.wrapping_sub(self.b);
        self.a
    }
}

impl StateMachine for Tychei {
    const ALGORITHM: Algorithm = Algorithm::Tychei;
    const DISCARD_ROUNDS: usize = EXTRA_ROUNDS;

    fn from_seed(seed: &SeedInput) -> Self {
        let mut rng = Self {
            a: 0,
            b: 0,
            c: C_INIT,
            d: D_INIT,
        };
        if let SeedInput::Integer(value) = *seed {
            rng.a = (value / 0x1_0000_0000) as u32;
            rng.b = value as u32;
        }

        let codes = seed.char_codes();
        for k in 0..codes.len() + EXTRA_ROUNDS {
            rng.b ^= codes.get(k).copied().unwrap_or(0);
            rng.next_u32();
        }
        rng
    }

    fn warm_up_steps(seed: &SeedInput) -> usize {
        seed.char_codes().len() + EXTRA_ROUNDS
    }

    fn advance(&mut self) -> RawWord {
        RawWord::U32(self.next_u32())
    }

    fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::Tychei {
            a: self.a,
            b: self.b,
            c: self.c,
            d: self.d,
        }
    }

    fn restore(snapshot: &StateSnapshot) -> Result<Self, PrngError> {
        match *snapshot {
            StateSnapshot::Tychei { a, b, c, d } => {
                reject_all_zero(Self::ALGORITHM, &[a, b, c, d])?;
                Ok(Self { a, b, c, d })
            }
            ref other => Err(wrong_variant(Self::ALGORITHM, other)),
        }
    }
}
