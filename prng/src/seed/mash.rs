//! Alea's seed mixer
//!
//! `Mash` keeps a running float accumulator across calls, so the order of
//! calls matters: Alea mashes a single space three times before mashing the
//! seed itself three times.

use crate::composer::to_uint32;

const MASH_START: f64 = 4_022_871_197.0; // 0xefc8249d
const MASH_SCALE: f64 = 0.025_196_032_824_169_38;
const TWO_POW_32: f64 = 4_294_967_296.0;
const TWO_POW_NEG_32: f64 = 2.328_306_436_538_696_3e-10;

#[derive(Debug, Clone)]
pub struct Mash {
    n: f64,
}

impl Default for Mash {
    fn default() -> Self {
        Self::new()
    }
}

impl Mash {
    pub fn new() -> Self {
        Self { n: MASH_START }
    }

    /// Fold `codes` into the accumulator and return it as a fraction in [0, 1)
    pub fn mash(&mut self, codes: &[u32]) -> f64 {
        for &code in codes {
            self.n += f64::from(code);
            let mut h = MASH_SCALE * self.n;
            self.n = f64::from(to_uint32(h));
            h -= self.n;
            h *= self.n;
            self.n = f64::from(to_uint32(h));
            h -= self.n;
            self.n += h * TWO_POW_32;
        }
        f64::from(to_uint32(self.n)) * TWO_POW_NEG_32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mash_in_unit_interval() {
        let mut mash = Mash::new();
        for codes in [&[32u32][..], &[115, 101, 101, 100], &[]] {
            let v = mash.mash(codes);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_mash_carries_state_between_calls() {
        let mut mash = Mash::new();
        let first = mash.mash(&[32]);
        let second = mash.mash(&[32]);
        assert_ne!(first, second);
    }
}
