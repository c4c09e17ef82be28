//! Alea random number generator
//!
//! Johannes Baagøe's multiply-with-carry over three fractional lags. The
//! state words are doubles in [0, 1) and the carry is a small integer, so
//! each step already yields a fraction rather than a machine word.
//!
//! # Seeding
//!
//! No warm-up rounds: the `mash` seed mixer does the decorrelation. Three
//! mashes of a single space give the starting lags, then each lag has one
//! mash of the seed's char codes subtracted (wrapping back into [0, 1)).

use super::{wrong_variant, Algorithm, RawWord, StateMachine};
use crate::composer::to_int32;
use crate::error::PrngError;
use crate::seed::{Mash, SeedInput};
use crate::snapshot::StateSnapshot;

const MULTIPLIER: f64 = 2_091_639.0;
const TWO_POW_NEG_32: f64 = 2.328_306_436_538_696_3e-10;
const TWO_POW_NEG_53: f64 = 1.110_223_024_625_156_5e-16;
const TWO_POW_21: f64 = 2_097_152.0;
const SPACE: u32 = 0x20;

#[derive(Debug, Clone, PartialEq)]
pub struct Alea {
    c: u32,
    s0: f64,
    s1: f64,
    s2: f64,
}

impl Alea {
    /// Next fraction in [0, 1), 32 bits of precision
    pub fn next_fraction(&mut self) -> f64 {
        let t = MULTIPLIER * self.s0 + f64::from(self.c) * TWO_POW_NEG_32;
        self.c = t as u32;
        self.s0 = self.s1;
        self.s1 = self.s2;
        self.s2 = t - f64::from(self.c);
        self.s2
    }

    /// Alea's own 53-bit double: a second draw fills the low 21 bits
    pub fn next_double(&mut self) -> f64 {
        let high = self.next_fraction();
        let low = self.next_fraction();
        high + f64::from(to_int32(low * TWO_POW_21)) * TWO_POW_NEG_53
    }
}

fn lag_from_mash(start: f64, mashed: f64) -> f64 {
    let lag = start - mashed;
    if lag < 0.0 {
        lag + 1.0
    } else {
        lag
    }
}

impl StateMachine for Alea {
    const ALGORITHM: Algorithm = Algorithm::Alea;
    const DISCARD_ROUNDS: usize = 0;

    fn from_seed(seed: &SeedInput) -> Self {
        let mut mash = Mash::new();
        let s0 = mash.mash(&[SPACE]);
        let s1 = mash.mash(&[SPACE]);
        let s2 = mash.mash(&[SPACE]);

        let codes = seed.char_codes();
        let s0 = lag_from_mash(s0, mash.mash(&codes));
        let s1 = lag_from_mash(s1, mash.mash(&codes));
        let s2 = lag_from_mash(s2, mash.mash(&codes));

        Self { c: 1, s0, s1, s2 }
    }

    fn advance(&mut self) -> RawWord {
        RawWord::Fraction(self.next_fraction())
    }

    fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::Alea {
            c: self.c,
            s0: self.s0,
            s1: self.s1,
            s2: self.s2,
        }
    }

    fn restore(snapshot: &StateSnapshot) -> Result<Self, PrngError> {
        let StateSnapshot::Alea { c, s0, s1, s2 } = *snapshot else {
            return Err(wrong_variant(Self::ALGORITHM, snapshot));
        };
        if [s0, s1, s2].iter().any(|s| !(0.0..1.0).contains(s)) {
            return Err(PrngError::invalid_state(
                Self::ALGORITHM,
                "lags must lie in [0, 1)",
            ));
        }
        // Zero carry and zero lags only ever produce zero
        if c == 0 && [s0, s1, s2].iter().all(|&s| s == 0.0) {
            return Err(PrngError::invalid_state(
                Self::ALGORITHM,
                "state must not be all zero",
            ));
        }
        Ok(Self { c, s0, s1, s2 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carry_stays_small() {
        let mut rng = Alea::from_seed(&SeedInput::from("seed"));
        for _ in 0..10_000 {
            rng.next_fraction();
            assert!(rng.c < 2_091_640);
        }
    }

    #[test]
    fn test_double_refines_first_draw() {
        let mut a = Alea::from_seed(&SeedInput::from("seed"));
        let mut b = a.clone();
        let double = a.next_double();
        let single = b.next_fraction();
        assert!(double >= single);
        assert!(double - single < 2.5e-10);
    }

    #[test]
    fn test_restore_rejects_non_finite_lag() {
        let snapshot = StateSnapshot::Alea {
            c: 1,
            s0: f64::NAN,
            s1: 0.5,
            s2: 0.5,
        };
        assert!(Alea::restore(&snapshot).is_err());
    }
}
