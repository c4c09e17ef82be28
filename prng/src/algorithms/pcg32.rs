//! PCG32 random number generator
//!
//! O'Neill's permuted congruential generator, XSH-RR variant: a 64-bit LCG
//! whose output is an xorshift of the state rotated by its top 5 bits.
//!
//! # Seeding
//!
//! The FNV-1a64 hash of the seed is both the initial state and the stream
//! selector (`inc = (h << 1) | 1`). Two priming steps run around adding the
//! hash, as in the reference `pcg32_srandom`.
//!
//! The output permutation is applied to the state after the LCG step.

use super::{wrong_variant, Algorithm, RawWord, StateMachine};
use crate::error::PrngError;
use crate::seed::SeedInput;
use crate::snapshot::StateSnapshot;

const MULTIPLIER: u64 = 6_364_136_223_846_793_005;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pcg32 {
    s: u64,
    inc: u64,
}

impl Pcg32 {
    pub fn next_u32(&mut self) -> u32 {
        self.s = self.s.wrapping_mul(MULTIPLIER).wrapping_add(self.inc);
        let xorshifted = (((self.s >> 18) ^ self.s) >> 27) as u32;
        let rot = (self.s >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl StateMachine for Pcg32 {
    const ALGORITHM: Algorithm = Algorithm::Pcg32;
    const DISCARD_ROUNDS: usize = 2;

    fn from_seed(seed: &SeedInput) -> Self {
        let h = seed.hash64();
        let mut rng = Self {
            s: 0,
            inc: (h << 1) | 1,
        };
        rng.next_u32();
        rng.s = rng.s.wrapping_add(h);
        rng.next_u32();
        rng
    }

    fn advance(&mut self) -> RawWord {
        RawWord::U32(self.next_u32())
    }

    fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::Pcg32 {
            s: self.s,
            inc: self.inc,
        }
    }

    fn restore(snapshot: &StateSnapshot) -> Result<Self, PrngError> {
        match *snapshot {
            StateSnapshot::Pcg32 { s, inc } if inc & 1 == 1 => Ok(Self { s, inc }),
            StateSnapshot::Pcg32 { inc, .. } => Err(PrngError::invalid_state(
                Self::ALGORITHM,
                format!("increment {} must be odd", inc),
            )),
            ref other => Err(wrong_variant(Self::ALGORITHM, other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_is_odd() {
        for seed in ["", "a", "seed"] {
            let rng = Pcg32::from_seed(&SeedInput::from(seed));
            assert_eq!(rng.inc & 1, 1);
        }
    }

    #[test]
    fn test_rotation_uses_top_bits() {
        // State lands on 1 << 59 after the step: rot = 1, xorshifted = 1 << 14
        let mut rng = Pcg32 { s: 0, inc: 1 << 59 };
        let xorshifted = (((1u64 << 59) >> 18 ^ (1u64 << 59)) >> 27) as u32;
        assert_eq!(rng.next_u32(), xorshifted.rotate_right(1));
    }

    #[test]
    fn test_restore_rejects_even_increment() {
        let snapshot = StateSnapshot::Pcg32 { s: 1, inc: 2 };
        assert!(Pcg32::restore(&snapshot).is_err());
    }
}
