//! xorshift7 random number generator
//!
//! Panneton and L'Ecuyer's eight-word xorshift with seven xor-shift terms.
//! The state is a ring of eight 32-bit words and a cursor.

use super::{reject_all_zero, wrong_variant, Algorithm, RawWord, StateMachine};
use crate::error::PrngError;
use crate::seed::{non_zero_vector32, SeedInput};
use crate::snapshot::StateSnapshot;

const WORDS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShift7 {
    x: [u32; WORDS],
    i: usize,
}

impl XorShift7 {
    pub fn next_u32(&mut self) -> u32 {
        let x = &mut self.x;
        let i = self.i;

        let mut t = x[i];
        t ^= t >> 7;
        let mut v = t ^ (t << 24);
        t = x[(i + 1) & 7];
        v ^= t ^ (t >> 10);
        t = x[(i + 3) & 7];
        v ^= t ^ (t >> 3);
        t = x[(i + 4) & 7];
        v ^= t ^ (t << 7);
        t = x[(i + 7) & 7];
        t ^= t << 13;
        v ^= t ^ (t << 9);

        x[i] = v;
        self.i = (i + 1) & 7;
        v
    }
}

impl StateMachine for XorShift7 {
    const ALGORITHM: Algorithm = Algorithm::XorShift7;
    const DISCARD_ROUNDS: usize = 256;

    fn from_seed(seed: &SeedInput) -> Self {
        let mut x = [0u32; WORDS];
        x.copy_from_slice(&non_zero_vector32(seed, WORDS));
        let mut rng = Self { x, i: 0 };
        rng.discard(Self::DISCARD_ROUNDS);
        rng
    }

    fn advance(&mut self) -> RawWord {
        RawWord::U32(self.next_u32())
    }

    fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::XorShift7 {
            x: self.x.to_vec(),
            i: self.i as u32,
        }
    }

    fn restore(snapshot: &StateSnapshot) -> Result<Self, PrngError> {
        let StateSnapshot::XorShift7 { x, i } = snapshot else {
            return Err(wrong_variant(Self::ALGORITHM, snapshot));
        };
        let x: [u32; WORDS] = x.as_slice().try_into().map_err(|_| {
            PrngError::invalid_state(
                Self::ALGORITHM,
                format!("x must hold {} words, got {}", WORDS, x.len()),
            )
        })?;
        reject_all_zero(Self::ALGORITHM, &x)?;
        let i = *i as usize;
        if i >= WORDS {
            return Err(PrngError::invalid_state(
                Self::ALGORITHM,
                format!("cursor {} out of range", i),
            ));
        }
        Ok(Self { x, i })
    }
}
