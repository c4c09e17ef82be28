//! Word expansion
//!
//! Stretches one FNV-1a hash into as many state words as a generator needs,
//! using SplitMix32 or SplitMix64 as the mixing stream.

use super::SeedInput;

const GOLDEN_GAMMA_32: u32 = 0x9e37_79b9;
const GOLDEN_GAMMA_64: u64 = 0x9e37_79b9_7f4a_7c15;

/// SplitMix32 avalanche of an already-incremented counter
#[inline]
pub(crate) fn mix32(mut z: u32) -> u32 {
    z ^= z >> 16;
    z = z.wrapping_mul(0x85eb_ca6b);
    z ^= z >> 13;
    z = z.wrapping_mul(0xc2b2_ae35);
    z ^ (z >> 16)
}

/// SplitMix64 avalanche of an already-incremented counter
#[inline]
pub(crate) fn mix64(mut z: u64) -> u64 {
    z ^= z >> 30;
    z = z.wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z ^= z >> 27;
    z = z.wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Stream of 32-bit words from a SplitMix32 counter
#[derive(Debug, Clone)]
pub struct SplitMix32Stream {
    z: u32,
}

impl SplitMix32Stream {
    pub fn new(seed: u32) -> Self {
        Self { z: seed }
    }

    pub fn next_word(&mut self) -> u32 {
        self.z = self.z.wrapping_add(GOLDEN_GAMMA_32);
        mix32(self.z)
    }
}

/// Stream of 64-bit words from a SplitMix64 counter
#[derive(Debug, Clone)]
pub struct SplitMix64Stream {
    z: u64,
}

impl SplitMix64Stream {
    pub fn new(seed: u64) -> Self {
        Self { z: seed }
    }

    pub fn next_word(&mut self) -> u64 {
        self.z = self.z.wrapping_add(GOLDEN_GAMMA_64);
        mix64(self.z)
    }
}

/// `count` 32-bit words from FNV-1a32 + SplitMix32
pub fn expand32(seed: &SeedInput, count: usize) -> Vec<u32> {
    let mut stream = SplitMix32Stream::new(seed.hash32());
    (0..count).map(|_| stream.next_word()).collect()
}

/// `count` 32-bit words from FNV-1a64 + SplitMix64, keeping the low half of
/// each 64-bit word
pub fn expand32_from_64(seed: &SeedInput, count: usize) -> Vec<u32> {
    let mut stream = SplitMix64Stream::new(seed.hash64());
    (0..count).map(|_| stream.next_word() as u32).collect()
}

/// `count` 64-bit words from FNV-1a64 + SplitMix64
pub fn expand64(seed: &SeedInput, count: usize) -> Vec<u64> {
    let mut stream = SplitMix64Stream::new(seed.hash64());
    (0..count).map(|_| stream.next_word()).collect()
}

/// [`expand32`], remapped to `[1, 0, 0, ...]` if every word came out zero
pub fn non_zero_vector32(seed: &SeedInput, count: usize) -> Vec<u32> {
    let mut words = expand32(seed, count);
    remap_all_zero(&mut words);
    words
}

/// [`expand64`], remapped to `[1, 0, ...]` if every word came out zero
pub fn non_zero_vector64(seed: &SeedInput, count: usize) -> Vec<u64> {
    let mut words = expand64(seed, count);
    remap_all_zero(&mut words);
    words
}

/// The one remap rule for states whose all-zero value is a fixed point.
///
/// Returns true when the remap fired.
pub(crate) fn remap_all_zero<T>(words: &mut [T]) -> bool
where
    T: Copy + Default + PartialEq + From<u8>,
{
    let zero = T::default();
    if words.is_empty() || words.iter().any(|&w| w != zero) {
        return false;
    }
    tracing::trace!(len = words.len(), "all-zero seed state remapped");
    words[0] = T::from(1);
    true
}
