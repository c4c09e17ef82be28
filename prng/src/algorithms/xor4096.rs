//! xor4096 random number generator
//!
//! Richard Brent's xorgens: a 4096-bit xorshift over a 128-word ring,
//! combined with a Weyl sequence so the output never gets stuck.
//!
//! # Seeding
//!
//! Integer seeds in `[-2^31, 2^32)` load their 32-bit pattern directly into
//! the mixer. Every other seed, wider integers included, folds its char codes
//! (plus a trailing NUL) into the mixer, which runs for at least 128 words.
//! The filled table then gets 512 rounds of diffusion before the first
//! output.

use super::{wrong_variant, Algorithm, RawWord, StateMachine};
use crate::error::PrngError;
use crate::seed::SeedInput;
use crate::snapshot::StateSnapshot;

const WORDS: usize = 128;
const MASK: usize = WORDS - 1;
const WEYL: u32 = 0x61c8_8647;
const DIFFUSION_ROUNDS: usize = 4 * WORDS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xor4096 {
    w: u32,
    x: [u32; WORDS],
    i: usize,
}

impl Xor4096 {
    pub fn next_u32(&mut self) -> u32 {
        self.w = self.w.wrapping_add(WEYL);
        let v = self.step_table();
        v.wrapping_add(self.w ^ (self.w >> 16))
    }

    fn step_table(&mut self) -> u32 {
        let mut v = self.x[(self.i + 34) & MASK];
        self.i = (self.i + 1) & MASK;
        let mut t = self.x[self.i];
        v ^= v << 13;
        t ^= t << 17;
        v ^= v >> 15;
        t ^= t >> 12;
        self.x[self.i] = v ^ t;
        v ^ t
    }
}

/// 32-bit pattern of an integer seed that fits in either signedness
fn seed_word(value: i64) -> Option<u32> {
    u32::try_from(value)
        .ok()
        .or_else(|| i32::try_from(value).ok().map(|v| v as u32))
}

impl StateMachine for Xor4096 {
    const ALGORITHM: Algorithm = Algorithm::Xor4096;
    const DISCARD_ROUNDS: usize = DIFFUSION_ROUNDS;

    fn from_seed(seed: &SeedInput) -> Self {
        let word = match seed {
            SeedInput::Integer(value) => seed_word(*value),
            _ => None,
        };
        let (mut v, codes) = match word {
            Some(word) => (word, Vec::new()),
            None => {
                let mut codes = seed.char_codes();
                codes.push(0);
                (0, codes)
            }
        };
        let limit = WORDS.max(codes.len()) as isize;

        let mut x = [0u32; WORDS];
        let mut w = 0u32;
        for j in -32..limit {
            if !codes.is_empty() {
                v ^= codes[(j + 32) as usize % codes.len()];
            }
            if j == 0 {
                w = v;
            }
            v ^= v << 10;
            v ^= v >> 15;
            v ^= v << 4;
            v ^= v >> 13;
            if j >= 0 {
                w = w.wrapping_add(WEYL);
                let slot = j as usize & MASK;
                x[slot] ^= v.wrapping_add(w);
            }
        }
        crate::seed::remap_all_zero(&mut x);

        let mut rng = Self { w, x, i: MASK };
        for _ in 0..DIFFUSION_ROUNDS {
            rng.step_table();
        }
        rng
    }

    fn advance(&mut self) -> RawWord {
        RawWord::U32(self.next_u32())
    }

    fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::Xor4096 {
            w: self.w,
            x: self.x.to_vec(),
            i: self.i as u32,
        }
    }

    fn restore(snapshot: &StateSnapshot) -> Result<Self, PrngError> {
        let StateSnapshot::Xor4096 { w, x, i } = snapshot else {
            return Err(wrong_variant(Self::ALGORITHM, snapshot));
        };
        let x: [u32; WORDS] = x.as_slice().try_into().map_err(|_| {
            PrngError::invalid_state(
                Self::ALGORITHM,
                format!("X must hold {} words, got {}", WORDS, x.len()),
            )
        })?;
        let i = *i as usize;
        if i >= WORDS {
            return Err(PrngError::invalid_state(
                Self::ALGORITHM,
                format!("cursor {} out of range", i),
            ));
        }
        Ok(Self { w: *w, x, i })
    }
}
