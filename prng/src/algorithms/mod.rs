//! Generator state machines
//!
//! Each algorithm lives in its own module as a plain state record with an
//! inherent step function. [`GeneratorState`] closes the set into one tagged
//! enum so the façade can dispatch without trait objects.
//!
//! # Raw output
//!
//! Algorithms differ in what one step produces:
//! - most emit a 32-bit word
//! - SplitMix64 and the xoroshiro128 pair emit a 64-bit word
//! - Alea emits a fraction in [0, 1)
//!
//! [`RawWord`] carries whichever it is so the façade can derive the standard
//! outputs from it.

pub mod alea;
pub mod arc4;
pub mod jsf32;
pub mod mulberry32;
pub mod pcg32;
pub mod sfc32;
pub mod splitmix32;
pub mod splitmix64;
pub mod tychei;
pub mod xor128;
pub mod xor4096;
pub mod xoroshiro128;
pub mod xorshift7;
pub mod xorwow;
pub mod xoshiro128;

use crate::composer::{to_uint32, u32_to_unit, u64_to_unit};
use crate::error::PrngError;
use crate::seed::SeedInput;
use crate::snapshot::StateSnapshot;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use alea::Alea;
pub use arc4::Arc4;
pub use jsf32::Jsf32;
pub use mulberry32::Mulberry32;
pub use pcg32::Pcg32;
pub use sfc32::Sfc32;
pub use splitmix32::SplitMix32;
pub use splitmix64::SplitMix64;
pub use tychei::Tychei;
pub use xor128::Xor128;
pub use xor4096::Xor4096;
pub use xoroshiro128::{Xoroshiro128Plus, Xoroshiro128StarStar};
pub use xorshift7::XorShift7;
pub use xorwow::XorWow;
pub use xoshiro128::{Xoshiro128Plus, Xoshiro128PlusPlus};

/// Algorithm identifier
///
/// Serializes as the lower-case name used in configs and snapshot tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "alea")]
    Alea,
    #[serde(rename = "arc4")]
    Arc4,
    #[serde(rename = "tychei")]
    Tychei,
    #[serde(rename = "xor128")]
    Xor128,
    #[serde(rename = "xor4096")]
    Xor4096,
    #[serde(rename = "xorshift7")]
    XorShift7,
    #[serde(rename = "xorwow")]
    XorWow,
    #[serde(rename = "pcg32")]
    Pcg32,
    #[serde(rename = "mulberry32")]
    Mulberry32,
    #[serde(rename = "splitmix32")]
    SplitMix32,
    #[serde(rename = "splitmix64")]
    SplitMix64,
    #[serde(rename = "xoshiro128plus")]
    Xoshiro128Plus,
    #[serde(rename = "xoshiro128plusplus")]
    Xoshiro128PlusPlus,
    #[serde(rename = "xoroshiro128plus")]
    Xoroshiro128Plus,
    #[serde(rename = "xoroshiro128starstar")]
    Xoroshiro128StarStar,
    #[serde(rename = "sfc32")]
    Sfc32,
    #[serde(rename = "jsf32")]
    Jsf32,
}

impl Algorithm {
    /// Every supported algorithm
    pub const ALL: [Algorithm; 17] = [
        Algorithm::Alea,
        Algorithm::Arc4,
        Algorithm::Tychei,
        Algorithm::Xor128,
        Algorithm::Xor4096,
        Algorithm::XorShift7,
        Algorithm::XorWow,
        Algorithm::Pcg32,
        Algorithm::Mulberry32,
        Algorithm::SplitMix32,
        Algorithm::SplitMix64,
        Algorithm::Xoshiro128Plus,
        Algorithm::Xoshiro128PlusPlus,
        Algorithm::Xoroshiro128Plus,
        Algorithm::Xoroshiro128StarStar,
        Algorithm::Sfc32,
        Algorithm::Jsf32,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Alea => "alea",
            Algorithm::Arc4 => "arc4",
            Algorithm::Tychei => "tychei",
            Algorithm::Xor128 => "xor128",
            Algorithm::Xor4096 => "xor4096",
            Algorithm::XorShift7 => "xorshift7",
            Algorithm::XorWow => "xorwow",
            Algorithm::Pcg32 => "pcg32",
            Algorithm::Mulberry32 => "mulberry32",
            Algorithm::SplitMix32 => "splitmix32",
            Algorithm::SplitMix64 => "splitmix64",
            Algorithm::Xoshiro128Plus => "xoshiro128plus",
            Algorithm::Xoshiro128PlusPlus => "xoshiro128plusplus",
            Algorithm::Xoroshiro128Plus => "xoroshiro128plus",
            Algorithm::Xoroshiro128StarStar => "xoroshiro128starstar",
            Algorithm::Sfc32 => "sfc32",
            Algorithm::Jsf32 => "jsf32",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = PrngError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PrngError::UnknownAlgorithm(s.to_string()))
    }
}

/// Output of a single state transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawWord {
    /// Fraction already in [0, 1)
    Fraction(f64),
    U32(u32),
    U64(u64),
}

impl RawWord {
    /// Scale into [0, 1) by the native width
    pub fn to_unit(self) -> f64 {
        match self {
            RawWord::Fraction(f) => f,
            RawWord::U32(w) => u32_to_unit(w),
            RawWord::U64(w) => u64_to_unit(w),
        }
    }

    /// Low 32 bits of the word; fractions are scaled by 2^32 first
    pub fn low_u32(self) -> u32 {
        match self {
            RawWord::Fraction(f) => to_uint32(f * 4_294_967_296.0),
            RawWord::U32(w) => w,
            RawWord::U64(w) => w as u32,
        }
    }
}

/// Shared contract of every generator
pub trait StateMachine: Sized {
    const ALGORITHM: Algorithm;

    /// Warm-up steps run at seed time before the first visible draw
    ///
    /// Counted in the generator's own step unit: ARC4 drops keystream bytes
    /// and xor4096 runs table diffusion steps, neither of which is a full
    /// [`StateMachine::advance`].
    const DISCARD_ROUNDS: usize;

    /// Seed-derived construction, warm-up included
    fn from_seed(seed: &SeedInput) -> Self;

    /// One state transition
    fn advance(&mut self) -> RawWord;

    /// Deep copy of the current state
    fn snapshot(&self) -> StateSnapshot;

    /// Rebuild from a snapshot, rejecting the wrong shape
    fn restore(snapshot: &StateSnapshot) -> Result<Self, PrngError>;

    /// Warm-up steps actually run for `seed`
    fn warm_up_steps(_seed: &SeedInput) -> usize {
        Self::DISCARD_ROUNDS
    }

    fn discard(&mut self, rounds: usize) {
        for _ in 0..rounds {
            self.advance();
        }
    }
}

/// Reject a word vector that is all zero
///
/// For the xorshift-style and Tyche-style transitions all zero is a fixed
/// point: every later word is zero too.
pub(crate) fn reject_all_zero<T>(algorithm: Algorithm, words: &[T]) -> Result<(), PrngError>
where
    T: Copy + Default + PartialEq,
{
    if words.iter().all(|&w| w == T::default()) {
        return Err(PrngError::invalid_state(
            algorithm,
            "state must not be all zero",
        ));
    }
    Ok(())
}

pub(crate) fn wrong_variant(expected: Algorithm, found: &StateSnapshot) -> PrngError {
    PrngError::invalid_state(
        expected,
        format!("snapshot belongs to {}", found.algorithm()),
    )
}

/// Live state of one generator, tagged by algorithm
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorState {
    Alea(Alea),
    Arc4(Arc4),
    Tychei(Tychei),
    Xor128(Xor128),
    Xor4096(Xor4096),
    XorShift7(XorShift7),
    XorWow(XorWow),
    Pcg32(Pcg32),
    Mulberry32(Mulberry32),
    SplitMix32(SplitMix32),
    SplitMix64(SplitMix64),
    Xoshiro128Plus(Xoshiro128Plus),
    Xoshiro128PlusPlus(Xoshiro128PlusPlus),
    Xoroshiro128Plus(Xoroshiro128Plus),
    Xoroshiro128StarStar(Xoroshiro128StarStar),
    Sfc32(Sfc32),
    Jsf32(Jsf32),
}

fn seeded<G: StateMachine>(
    seed: &SeedInput,
    wrap: fn(G) -> GeneratorState,
) -> (GeneratorState, usize) {
    (wrap(G::from_seed(seed)), G::warm_up_steps(seed))
}

impl GeneratorState {
    /// Seed a fresh generator of the given algorithm
    pub fn from_seed(algorithm: Algorithm, seed: &SeedInput) -> Self {
        let (state, rounds) = match algorithm {
            Algorithm::Alea => seeded(seed, GeneratorState::Alea),
            Algorithm::Arc4 => seeded(seed, GeneratorState::Arc4),
            Algorithm::Tychei => seeded(seed, GeneratorState::Tychei),
            Algorithm::Xor128 => seeded(seed, GeneratorState::Xor128),
            Algorithm::Xor4096 => seeded(seed, GeneratorState::Xor4096),
            Algorithm::XorShift7 => seeded(seed, GeneratorState::XorShift7),
            Algorithm::XorWow => seeded(seed, GeneratorState::XorWow),
            Algorithm::Pcg32 => seeded(seed, GeneratorState::Pcg32),
            Algorithm::Mulberry32 => seeded(seed, GeneratorState::Mulberry32),
            Algorithm::SplitMix32 => seeded(seed, GeneratorState::SplitMix32),
            Algorithm::SplitMix64 => seeded(seed, GeneratorState::SplitMix64),
            Algorithm::Xoshiro128Plus => seeded(seed, GeneratorState::Xoshiro128Plus),
            Algorithm::Xoshiro128PlusPlus => seeded(seed, GeneratorState::Xoshiro128PlusPlus),
            Algorithm::Xoroshiro128Plus => seeded(seed, GeneratorState::Xoroshiro128Plus),
            Algorithm::Xoroshiro128StarStar => seeded(seed, GeneratorState::Xoroshiro128StarStar),
            Algorithm::Sfc32 => seeded(seed, GeneratorState::Sfc32),
            Algorithm::Jsf32 => seeded(seed, GeneratorState::Jsf32),
        };
        tracing::debug!(
            algorithm = %algorithm,
            seed_kind = seed.kind(),
            warm_up_steps = rounds,
            "generator seeded"
        );
        state
    }

    /// Rebuild a generator from a snapshot, skipping seeding entirely
    pub fn restore(snapshot: &StateSnapshot) -> Result<Self, PrngError> {
        let algorithm = snapshot.algorithm();
        let state = match algorithm {
            Algorithm::Alea => GeneratorState::Alea(Alea::restore(snapshot)?),
            Algorithm::Arc4 => GeneratorState::Arc4(Arc4::restore(snapshot)?),
            Algorithm::Tychei => GeneratorState::Tychei(Tychei::restore(snapshot)?),
            Algorithm::Xor128 => GeneratorState::Xor128(Xor128::restore(snapshot)?),
            Algorithm::Xor4096 => GeneratorState::Xor4096(Xor4096::restore(snapshot)?),
            Algorithm::XorShift7 => GeneratorState::XorShift7(XorShift7::restore(snapshot)?),
            Algorithm::XorWow => GeneratorState::XorWow(XorWow::restore(snapshot)?),
            Algorithm::Pcg32 => GeneratorState::Pcg32(Pcg32::restore(snapshot)?),
            Algorithm::Mulberry32 => GeneratorState::Mulberry32(Mulberry32::restore(snapshot)?),
            Algorithm::SplitMix32 => GeneratorState::SplitMix32(SplitMix32::restore(snapshot)?),
            Algorithm::SplitMix64 => GeneratorState::SplitMix64(SplitMix64::restore(snapshot)?),
            Algorithm::Xoshiro128Plus => GeneratorState::Xoshiro128Plus(Xoshiro128Plus::restore(snapshot)?),
            Algorithm::Xoshiro128PlusPlus => GeneratorState::Xoshiro128PlusPlus(Xoshiro128PlusPlus::restore(snapshot)?),
            Algorithm::Xoroshiro128Plus => GeneratorState::Xoroshiro128Plus(Xoroshiro128Plus::restore(snapshot)?),
            Algorithm::Xoroshiro128StarStar => GeneratorState::Xoroshiro128StarStar(Xoroshiro128StarStar::restore(snapshot)?),
            Algorithm::Sfc32 => GeneratorState::Sfc32(Sfc32::restore(snapshot)?),
            Algorithm::Jsf32 => GeneratorState::Jsf32(Jsf32::restore(snapshot)?),
        };
        tracing::debug!(algorithm = %algorithm, "generator restored from snapshot");
        Ok(state)
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            GeneratorState::Alea(_) => Algorithm::Alea,
            GeneratorState::Arc4(_) => Algorithm::Arc4,
            GeneratorState::Tychei(_) => Algorithm::Tychei,
            GeneratorState::Xor128(_) => Algorithm::Xor128,
            GeneratorState::Xor4096(_) => Algorithm::Xor4096,
            GeneratorState::XorShift7(_) => Algorithm::XorShift7,
            GeneratorState::XorWow(_) => Algorithm::XorWow,
            GeneratorState::Pcg32(_) => Algorithm::Pcg32,
            GeneratorState::Mulberry32(_) => Algorithm::Mulberry32,
            GeneratorState::SplitMix32(_) => Algorithm::SplitMix32,
            GeneratorState::SplitMix64(_) => Algorithm::SplitMix64,
            GeneratorState::Xoshiro128Plus(_) => Algorithm::Xoshiro128Plus,
            GeneratorState::Xoshiro128PlusPlus(_) => Algorithm::Xoshiro128PlusPlus,
            GeneratorState::Xoroshiro128Plus(_) => Algorithm::Xoroshiro128Plus,
            GeneratorState::Xoroshiro128StarStar(_) => Algorithm::Xoroshiro128StarStar,
            GeneratorState::Sfc32(_) => Algorithm::Sfc32,
            GeneratorState::Jsf32(_) => Algorithm::Jsf32,
        }
    }

    pub fn advance(&mut self) -> RawWord {
        match self {
            GeneratorState::Alea(g) => g.advance(),
            GeneratorState::Arc4(g) => g.advance(),
            GeneratorState::Tychei(g) => g.advance(),
            GeneratorState::Xor128(g) => g.advance(),
            GeneratorState::Xor4096(g) => g.advance(),
            GeneratorState::XorShift7(g) => g.advance(),
            GeneratorState::XorWow(g) => g.advance(),
            GeneratorState::Pcg32(g) => g.advance(),
            GeneratorState::Mulberry32(g) => g.advance(),
            GeneratorState::SplitMix32(g) => g.advance(),
            GeneratorState::SplitMix64(g) => g.advance(),
            GeneratorState::Xoshiro128Plus(g) => g.advance(),
            GeneratorState::Xoshiro128PlusPlus(g) => g.advance(),
            GeneratorState::Xoroshiro128Plus(g) => g.advance(),
            GeneratorState::Xoroshiro128StarStar(g) => g.advance(),
            GeneratorState::Sfc32(g) => g.advance(),
            GeneratorState::Jsf32(g) => g.advance(),
        }
    }

    pub fn snapshot(&self) -> StateSnapshot {
        match self {
            GeneratorState::Alea(g) => g.snapshot(),
            GeneratorState::Arc4(g) => g.snapshot(),
            GeneratorState::Tychei(g) => g.snapshot(),
            GeneratorState::Xor128(g) => g.snapshot(),
            GeneratorState::Xor4096(g) => g.snapshot(),
            GeneratorState::XorShift7(g) => g.snapshot(),
            GeneratorState::XorWow(g) => g.snapshot(),
            GeneratorState::Pcg32(g) => g.snapshot(),
            GeneratorState::Mulberry32(g) => g.snapshot(),
            GeneratorState::SplitMix32(g) => g.snapshot(),
            GeneratorState::SplitMix64(g) => g.snapshot(),
            GeneratorState::Xoshiro128Plus(g) => g.snapshot(),
            GeneratorState::Xoshiro128PlusPlus(g) => g.snapshot(),
            GeneratorState::Xoroshiro128Plus(g) => g.snapshot(),
            GeneratorState::Xoroshiro128StarStar(g) => g.snapshot(),
            GeneratorState::Sfc32(g) => g.snapshot(),
            GeneratorState::Jsf32(g) => g.snapshot(),
        }
    }
}
