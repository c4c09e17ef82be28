//! Unit-interval conversions and the double-precision composer
//!
//! Most generators emit one 32-bit word per step, which only fills 32 bits
//! of an f64 mantissa. [`compose_double`] spends two words per value to
//! reach the full 53 bits.

const TWO_POW_21: f64 = 2_097_152.0;
const TWO_POW_32: f64 = 4_294_967_296.0;
const TWO_POW_53: f64 = 9_007_199_254_740_992.0;

/// Scale a 32-bit word into [0, 1)
#[inline]
pub fn u32_to_unit(word: u32) -> f64 {
    f64::from(word) / TWO_POW_32
}

/// Scale the top 53 bits of a 64-bit word into [0, 1)
#[inline]
pub fn u64_to_unit(word: u64) -> f64 {
    (word >> 11) as f64 / TWO_POW_53
}

/// Build a 53-bit double from two successive 32-bit draws
///
/// The upper 21 bits of the first draw form the integer part, the whole
/// second draw the fraction, and the sum is scaled by 2^-21. A pair that
/// lands on exactly zero is rejected and a fresh pair is drawn.
///
/// # Example
/// ```
/// use seeded_prng_core_rs::composer::compose_double;
///
/// let mut words = [0u32, 0, 0xffff_ffff, 0x8000_0000].into_iter();
/// let value = compose_double(|| words.next().unwrap_or(0));
/// assert!(value > 0.0 && value < 1.0);
/// ```
pub fn compose_double<F>(mut next_word: F) -> f64
where
    F: FnMut() -> u32,
{
    loop {
        let top = f64::from(next_word() >> 11);
        let bottom = u32_to_unit(next_word());
        let result = (top + bottom) / TWO_POW_21;
        if result != 0.0 {
            return result;
        }
        tracing::trace!("composed double was zero, drawing a new pair");
    }
}

/// ECMAScript `ToUint32`: truncate, then reduce modulo 2^32
pub(crate) fn to_uint32(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    value.trunc().rem_euclid(TWO_POW_32) as u32
}

/// ECMAScript `ToInt32`
pub(crate) fn to_int32(value: f64) -> i32 {
    to_uint32(value) as i32
}
