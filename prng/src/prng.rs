//! Uniform PRNG façade
//!
//! [`Prng`] wraps one generator and derives the standard outputs from its
//! raw steps:
//!
//! | Operation | Result |
//! |---|---|
//! | [`Prng::next_f64`] / [`Prng::quick`] | raw output scaled by its native width, in [0, 1) |
//! | [`Prng::double`] | [0, 1) with 53 bits of precision |
//! | [`Prng::int32`] | low 32 bits of the raw output as a signed integer |
//! | [`Prng::state`] | deep-copied [`StateSnapshot`], no advance |
//!
//! `double` takes the best path the algorithm offers: 64-bit generators
//! scale one word, ARC4 and Alea use their own constructions, and every
//! 32-bit generator goes through [`compose_double`].
//!
//! # Determinism
//!
//! Same algorithm + same seed → same sequence from every operation. A
//! generator restored from `state()` continues exactly where the original
//! was when the snapshot was taken.

use crate::algorithms::{Algorithm, GeneratorState, RawWord};
use crate::composer::{compose_double, u64_to_unit};
use crate::error::PrngError;
use crate::seed::SeedInput;
use crate::snapshot::StateSnapshot;

/// A seeded generator with the uniform calling interface
///
/// # Example
/// ```
/// use seeded_prng_core_rs::{Algorithm, Prng};
///
/// let mut rng = Prng::new(Algorithm::Sfc32, "seed");
/// let value = rng.next_f64();
/// assert!((0.0..1.0).contains(&value));
///
/// // Resume elsewhere from a snapshot
/// let snapshot = rng.state();
/// let mut resumed = Prng::from_snapshot(&snapshot).unwrap();
/// assert_eq!(rng.int32(), resumed.int32());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Prng {
    state: GeneratorState,
}

impl Prng {
    /// Seed a new generator, warm-up rounds included
    pub fn new(algorithm: Algorithm, seed: impl Into<SeedInput>) -> Self {
        Self {
            state: GeneratorState::from_seed(algorithm, &seed.into()),
        }
    }

    /// Construct from an optional seed and an optional snapshot
    ///
    /// A snapshot wins over the seed: seeding and warm-up are skipped and the
    /// generator starts from the snapshot's exact state. With neither, the
    /// seed defaults to the wall clock.
    ///
    /// # Errors
    /// `InvalidState` if the snapshot belongs to another algorithm or has the
    /// wrong shape.
    pub fn make(
        algorithm: Algorithm,
        seed: Option<SeedInput>,
        snapshot: Option<&StateSnapshot>,
    ) -> Result<Self, PrngError> {
        match snapshot {
            Some(snapshot) => {
                if snapshot.algorithm() != algorithm {
                    return Err(PrngError::invalid_state(
                        algorithm,
                        format!("snapshot belongs to {}", snapshot.algorithm()),
                    ));
                }
                Self::from_snapshot(snapshot)
            }
            None => Ok(Self::new(
                algorithm,
                seed.unwrap_or_else(SeedInput::from_clock),
            )),
        }
    }

    /// Resume from a snapshot; the algorithm comes from the snapshot's tag
    pub fn from_snapshot(snapshot: &StateSnapshot) -> Result<Self, PrngError> {
        Ok(Self {
            state: GeneratorState::restore(snapshot)?,
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.state.algorithm()
    }

    /// Primary draw in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        self.state.advance().to_unit()
    }

    /// Same as [`Prng::next_f64`]
    pub fn quick(&mut self) -> f64 {
        self.next_f64()
    }

    /// Draw in [0, 1) with a full 53-bit mantissa
    pub fn double(&mut self) -> f64 {
        match &mut self.state {
            GeneratorState::Arc4(g) => g.next_fraction(),
            GeneratorState::Alea(g) => g.next_double(),
            state => match state.advance() {
                RawWord::U64(word) => u64_to_unit(word),
                first => {
                    let mut pending = Some(first.low_u32());
                    compose_double(|| {
                        pending
                            .take()
                            .unwrap_or_else(|| state.advance().low_u32())
                    })
                }
            },
        }
    }

    /// Signed 32-bit draw in [-2^31, 2^31 - 1]
    pub fn int32(&mut self) -> i32 {
        self.state.advance().low_u32() as i32
    }

    /// Deep copy of the current state; does not advance
    pub fn state(&self) -> StateSnapshot {
        self.state.snapshot()
    }

    /// Replace the current state with a snapshot of the same algorithm
    ///
    /// # Errors
    /// `InvalidState` if the snapshot has the wrong algorithm or shape; the
    /// generator is left untouched.
    pub fn restore(&mut self, snapshot: &StateSnapshot) -> Result<(), PrngError> {
        let algorithm = self.algorithm();
        if snapshot.algorithm() != algorithm {
            return Err(PrngError::invalid_state(
                algorithm,
                format!("snapshot belongs to {}", snapshot.algorithm()),
            ));
        }
        self.state = GeneratorState::restore(snapshot)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_aliases_primary() {
        for algorithm in Algorithm::ALL {
            let mut a = Prng::new(algorithm, "seed");
            let mut b = Prng::new(algorithm, "seed");
            for _ in 0..20 {
                assert_eq!(a.quick(), b.next_f64(), "{}", algorithm);
            }
        }
    }

    #[test]
    fn test_state_does_not_advance() {
        let mut a = Prng::new(Algorithm::Xor128, "seed");
        let mut b = Prng::new(Algorithm::Xor128, "seed");
        let _ = a.state();
        let _ = a.state();
        assert_eq!(a.next_f64(), b.next_f64());
    }

    #[test]
    fn test_int32_matches_primary_word() {
        let mut a = Prng::new(Algorithm::Pcg32, "seed");
        let mut b = Prng::new(Algorithm::Pcg32, "seed");
        let unit = a.next_f64();
        let signed = b.int32();
        assert_eq!(signed as u32, (unit * 4_294_967_296.0) as u32);
    }

    #[test]
    fn test_double_on_32_bit_generator_uses_two_words() {
        let mut a = Prng::new(Algorithm::Jsf32, "seed");
        let mut b = Prng::new(Algorithm::Jsf32, "seed");
        a.double();
        b.next_f64();
        b.next_f64();
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_double_on_64_bit_generator_uses_one_word() {
        let mut a = Prng::new(Algorithm::SplitMix64, "seed");
        let mut b = Prng::new(Algorithm::SplitMix64, "seed");
        assert_eq!(a.double(), b.next_f64());
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_make_prefers_snapshot() {
        let mut original = Prng::new(Algorithm::Sfc32, "seed");
        original.next_f64();
        let snapshot = original.state();

        let mut made = Prng::make(
            Algorithm::Sfc32,
            Some(SeedInput::from("other")),
            Some(&snapshot),
        )
        .unwrap();
        assert_eq!(made.next_f64(), original.next_f64());
    }

    #[test]
    fn test_make_rejects_foreign_snapshot() {
        let snapshot = Prng::new(Algorithm::Jsf32, "seed").state();
        let err = Prng::make(Algorithm::Sfc32, None, Some(&snapshot)).unwrap_err();
        assert!(matches!(
            err,
            PrngError::InvalidState {
                algorithm: Algorithm::Sfc32,
                ..
            }
        ));
    }

    #[test]
    fn test_make_without_seed_uses_clock() {
        let rng = Prng::make(Algorithm::Mulberry32, None, None).unwrap();
        assert_eq!(rng.algorithm(), Algorithm::Mulberry32);
    }

    #[test]
    fn test_failed_restore_leaves_state() {
        let mut rng = Prng::new(Algorithm::XorShift7, "seed");
        let before = rng.state();
        let bad = StateSnapshot::XorShift7 {
            x: vec![1, 2],
            i: 0,
        };
        assert!(rng.restore(&bad).is_err());
        assert_eq!(rng.state(), before);
    }
}
