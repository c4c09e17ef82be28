//! JSF32 random number generator
//!
//! Bob Jenkins' small fast generator, 32-bit three-rotate variant (27, 17).

use super::{reject_all_zero, wrong_variant, Algorithm, RawWord, StateMachine};
use crate::error::PrngError;
use crate::seed::{expand32, SeedInput};
use crate::snapshot::StateSnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jsf32 {
    a: u32,
    b: u32,
    c: u32,
    d: u32,
}

impl Jsf32 {
    pub fn next_u32(&mut self) -> u32 {
        let e = self.a.wrapping_sub(self.b.rotate_left(27));
        self.a = self.b ^ self.c.rotate_left(17);
        self.b = self.c.wrapping_add(self.d);
        self.c = self.d.wrapping_add(e);
        self.d = self.a.wrapping_add(e);
        self.d
    }
}

impl StateMachine for Jsf32 {
    const ALGORITHM: Algorithm = Algorithm::Jsf32;
    const DISCARD_ROUNDS: usize = 20;

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
        StateSnapshot::Jsf32 {
            a: self.a,
            b: self.b,
            c: self.c,
            d: self.d,
        }
    }

    fn restore(snapshot: &StateSnapshot) -> Result<Self, PrngError> {
        match *snapshot {
            StateSnapshot::Jsf32 { a, b, c, d } => {
                reject_all_zero(Self::ALGORITHM, &[a, b, c, d])?;
                Ok(Self { a, b, c, d })
            }
            ref other => Err(wrong_variant(Self::ALGORITHM, other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_formula() {
        let mut rng = Jsf32 {
            a: 10,
            b: 0,
            c: 0,
            d: 1,
        };
        // e = 10, a = 0, b = 1, c = 11, d = 10
        assert_eq!(rng.next_u32(), 10);
        assert_eq!((rng.a, rng.b, rng.c), (0, 1, 11));
    }
}
