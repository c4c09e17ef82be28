//! ARC4 keystream generator
//!
//! RC4's permutation table repurposed as a non-cryptographic bit source.
//! Not suitable for anything security sensitive.
//!
//! # Seeding
//!
//! 1. Fold the seed's char codes into a key of at most 256 bytes
//!    (`smear ^= key[i] * 19; key[i] = smear + code`, cycling `i` over 256
//!    slots). An empty key schedules as `[0]`.
//! 2. Standard RC4 key scheduling over the table.
//! 3. Drop the first 256 keystream bytes (RC4-drop\[256\]).
//!
//! # Full-precision doubles
//!
//! [`Arc4::next_fraction`] builds a double with every mantissa bit filled
//! from the 8-bit keystream: start with a 48-bit numerator over 2^48, keep
//! appending bytes until the numerator reaches 2^52, then shift back under
//! 2^53 before adding the last byte.

use super::{wrong_variant, Algorithm, RawWord, StateMachine};
use crate::error::PrngError;
use crate::seed::SeedInput;
use crate::snapshot::StateSnapshot;

const WIDTH: usize = 256;
const DROP_BYTES: usize = 256;
const KEY_SMEAR: u32 = 19;
const PACKED_BYTES: usize = 8;

const START_DENOMINATOR: f64 = 281_474_976_710_656.0; // 2^48
const SIGNIFICANCE: u64 = 4_503_599_627_370_496; // 2^52
const OVERFLOW: u64 = 9_007_199_254_740_992; // 2^53

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arc4 {
    i: u8,
    j: u8,
    s: [u8; WIDTH],
}

impl Arc4 {
    /// Next keystream byte
    #[inline]
    fn next_byte(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        let t = self.s[self.i as usize];
        self.j = self.j.wrapping_add(t);
        self.s[self.i as usize] = self.s[self.j as usize];
        self.s[self.j as usize] = t;
        self.s[self.s[self.i as usize].wrapping_add(self.s[self.j as usize]) as usize]
    }

    /// The next `count` keystream bytes as one big-endian integer
    ///
    /// At most 8 bytes fit in the result; larger counts are clamped.
    pub(crate) fn keystream(&mut self, count: usize) -> u64 {
        (0..count.min(PACKED_BYTES)).fold(0u64, |r, _| (r << 8) | u64::from(self.next_byte()))
    }

    pub fn next_u32(&mut self) -> u32 {
        self.keystream(4) as u32
    }

    /// Next double in [0, 1) with all 53 mantissa bits drawn from the
    /// keystream
    pub fn next_fraction(&mut self) -> f64 {
        let mut n = self.keystream(6);
        let mut d = START_DENOMINATOR;
        let mut x = 0u64;

        while n < SIGNIFICANCE {
            n = (n + x) * 256;
            d *= 256.0;
            x = self.keystream(1);
        }
        // n is a multiple of 256 here, so halving stays exact
        while n >= OVERFLOW {
            n /= 2;
            d /= 2.0;
            x >>= 1;
        }
        (n + x) as f64 / d
    }

    fn skip(&mut self, bytes: usize) {
        for _ in 0..bytes {
            self.next_byte();
        }
    }
}

/// Fold seed char codes into an RC4 key
pub fn mix_key(codes: &[u32]) -> Vec<u8> {
    let mut key: Vec<u8> = Vec::with_capacity(codes.len().min(WIDTH));
    let mut smear = 0u32;
    for (j, &code) in codes.iter().enumerate() {
        let slot = j & (WIDTH - 1);
        let previous = key.get(slot).copied().unwrap_or(0);
        smear ^= u32::from(previous) * KEY_SMEAR;
        let byte = (smear.wrapping_add(code) & 0xff) as u8;
        if slot < key.len() {
            key[slot] = byte;
        } else {
            key.push(byte);
        }
    }
    key
}

impl StateMachine for Arc4 {
    const ALGORITHM: Algorithm = Algorithm::Arc4;
    const DISCARD_ROUNDS: usize = DROP_BYTES;

    fn from_seed(seed: &SeedInput) -> Self {
        let mut key = mix_key(&seed.char_codes());
        if key.is_empty() {
            key.push(0);
        }

        let mut s = [0u8; WIDTH];
        for (slot, value) in s.iter_mut().zip(0u8..=255) {
            *slot = value;
        }
        let mut j = 0u8;
        for i in 0..WIDTH {
            j = j.wrapping_add(key[i % key.len()]).wrapping_add(s[i]);
            s.swap(i, j as usize);
        }

        let mut rng = Self { i: 0, j: 0, s };
        rng.skip(DROP_BYTES);
        rng
    }

    fn advance(&mut self) -> RawWord {
        RawWord::U32(self.next_u32())
    }

    fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::Arc4 {
            i: self.i,
            j: self.j,
            s: self.s.to_vec(),
        }
    }

    fn restore(snapshot: &StateSnapshot) -> Result<Self, PrngError> {
        let StateSnapshot::Arc4 { i, j, s } = snapshot else {
            return Err(wrong_variant(Self::ALGORITHM, snapshot));
        };
        let table: [u8; WIDTH] = s.as_slice().try_into().map_err(|_| {
            PrngError::invalid_state(
                Self::ALGORITHM,
                format!("S must hold {} entries, got {}", WIDTH, s.len()),
            )
        })?;
        let mut seen = [false; WIDTH];
        for &entry in &table {
            if std::mem::replace(&mut seen[entry as usize], true) {
                return Err(PrngError::invalid_state(
                    Self::ALGORITHM,
                    format!("S repeats entry {}", entry),
                ));
            }
        }
        Ok(Self {
            i: *i,
            j: *j,
            s: table,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyed(key: &[u8]) -> Arc4 {
        let mut s = [0u8; WIDTH];
        for (slot, value) in s.iter_mut().zip(0u8..=255) {
            *slot = value;
        }
        let mut j = 0u8;
        for i in 0..WIDTH {
            j = j.wrapping_add(key[i % key.len()]).wrapping_add(s[i]);
            s.swap(i, j as usize);
        }
        Arc4 { i: 0, j: 0, s }
    }

    #[test]
    fn test_rc4_reference_keystream() {
        // RFC 6229 test vector, key 0x0102030405, offset 0
        let mut rng = keyed(&[1, 2, 3, 4, 5]);
        assert_eq!(rng.keystream(8), 0xb2396305f03dc027);
    }

    #[test]
    fn test_mix_key_short_seed() {
        // smear stays 0 on the first pass, so the key is the codes mod 256
        assert_eq!(mix_key(&[115, 101, 101, 100]), vec![115, 101, 101, 100]);
        assert!(mix_key(&[]).is_empty());
    }

    #[test]
    fn test_mix_key_cycles_after_256() {
        let codes = vec![1u32; 300];
        let key = mix_key(&codes);
        assert_eq!(key.len(), 256);
    }

    #[test]
    fn test_keystream_clamps_to_eight_bytes() {
        let mut a = Arc4::from_seed(&SeedInput::from("seed"));
        let mut b = a.clone();
        assert_eq!(a.keystream(12), b.keystream(8));
        assert_eq!(a, b);
    }

    #[test]
    fn test_keystream_is_big_endian() {
        let mut a = Arc4::from_seed(&SeedInput::from("seed"));
        let mut b = a.clone();
        let packed = a.keystream(2);
        let hi = b.keystream(1);
        let lo = b.keystream(1);
        assert_eq!(packed, (hi << 8) | lo);
    }

    #[test]
    fn test_fraction_extends_past_48_bits() {
        let mut a = Arc4::from_seed(&SeedInput::from("seed"));
        let mut b = a.clone();
        let fraction = a.next_fraction();
        let naive = b.keystream(6) as f64 / START_DENOMINATOR;
        assert!((0.0..1.0).contains(&fraction));
        assert_ne!(fraction, naive);
    }

    #[test]
    fn test_empty_seed_uses_zero_key() {
        let from_empty = Arc4::from_seed(&SeedInput::from(""));
        let mut expected = keyed(&[0]);
        expected.skip(DROP_BYTES);
        assert_eq!(from_empty, expected);
    }

    #[test]
    fn test_restore_rejects_non_permutation() {
        let snapshot = StateSnapshot::Arc4 {
            i: 0,
            j: 0,
            s: vec![0; WIDTH],
        };
        assert!(Arc4::restore(&snapshot).is_err());
    }

    #[test]
    fn test_restore_rejects_short_table() {
        let snapshot = StateSnapshot::Arc4 {
            i: 0,
            j: 0,
            s: (0..=254).collect(),
        };
        assert!(Arc4::restore(&snapshot).is_err());
    }
}
