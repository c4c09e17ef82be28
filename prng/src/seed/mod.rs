//! Seed normalization
//!
//! Every generator starts from a [`SeedInput`]. This module turns that input
//! into the canonical byte sequence and the FNV-1a hashes the generators
//! expand into their state words.
//!
//! # Canonical bytes
//!
//! - Text: UTF-8 encoding
//! - Integer: 8 bytes, little-endian two's complement
//! - Bytes: identity
//!
//! # Char codes
//!
//! The older mixers (Alea's `mash`, the ARC4 key folding, Tyche-i and
//! xor4096) fold a sequence of character codes instead of bytes. Text yields
//! its UTF-16 code units, integers yield the ASCII digits of their decimal
//! form and byte buffers yield one code per byte.

mod expand;
mod mash;

pub use expand::{
    expand32, expand32_from_64, expand64, non_zero_vector32, non_zero_vector64, SplitMix32Stream,
    SplitMix64Stream,
};
pub(crate) use expand::{mix32, mix64, remap_all_zero};
pub use mash::Mash;

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

const FNV32_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV32_PRIME: u32 = 0x0100_0193;
const FNV64_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV64_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Seed supplied once at construction
///
/// Deserializes untagged: a JSON string is text, a JSON integer is an
/// integer seed and a JSON array is a byte buffer.
///
/// # Example
/// ```
/// use seeded_prng_core_rs::SeedInput;
///
/// let text = SeedInput::from("seed");
/// assert_eq!(text.canonical_bytes(), b"seed".to_vec());
///
/// let int = SeedInput::from(1i64);
/// assert_eq!(int.canonical_bytes(), vec![1, 0, 0, 0, 0, 0, 0, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedInput {
    Integer(i64),
    Text(String),
    Bytes(Vec<u8>),
}

impl SeedInput {
    /// Seed from the wall clock in milliseconds, used when a caller gives
    /// neither a seed nor a snapshot.
    pub fn from_clock() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or_default();
        SeedInput::Integer(millis)
    }

    /// Seed from 32-bit words, laid out little-endian
    pub fn from_words(words: &[u32]) -> Self {
        SeedInput::Bytes(words.iter().flat_map(|w| w.to_le_bytes()).collect())
    }

    /// Canonical byte encoding of this seed
    pub fn canonical_bytes(&self) -> Vec<u8> {
        match self {
            SeedInput::Integer(value) => value.to_le_bytes().to_vec(),
            SeedInput::Text(text) => text.as_bytes().to_vec(),
            SeedInput::Bytes(bytes) => bytes.clone(),
        }
    }

    /// Character codes folded by the char-code seeded generators
    pub fn char_codes(&self) -> Vec<u32> {
        match self {
            SeedInput::Integer(value) => value.to_string().bytes().map(u32::from).collect(),
            SeedInput::Text(text) => text.encode_utf16().map(u32::from).collect(),
            SeedInput::Bytes(bytes) => bytes.iter().copied().map(u32::from).collect(),
        }
    }

    /// FNV-1a 32-bit hash of the canonical bytes
    pub fn hash32(&self) -> u32 {
        fnv1a32(&self.canonical_bytes())
    }

    /// FNV-1a 64-bit hash of the canonical bytes
    pub fn hash64(&self) -> u64 {
        fnv1a64(&self.canonical_bytes())
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            SeedInput::Integer(_) => "integer",
            SeedInput::Text(_) => "text",
            SeedInput::Bytes(_) => "bytes",
        }
    }
}

impl From<&str> for SeedInput {
    fn from(value: &str) -> Self {
        SeedInput::Text(value.to_string())
    }
}

impl From<String> for SeedInput {
    fn from(value: String) -> Self {
        SeedInput::Text(value)
    }
}

impl From<i64> for SeedInput {
    fn from(value: i64) -> Self {
        SeedInput::Integer(value)
    }
}

impl From<i32> for SeedInput {
    fn from(value: i32) -> Self {
        SeedInput::Integer(i64::from(value))
    }
}

impl From<u32> for SeedInput {
    fn from(value: u32) -> Self {
        SeedInput::Integer(i64::from(value))
    }
}

/// Values above `i64::MAX` keep their bit pattern.
impl From<u64> for SeedInput {
    fn from(value: u64) -> Self {
        SeedInput::Integer(value as i64)
    }
}

impl From<Vec<u8>> for SeedInput {
    fn from(value: Vec<u8>) -> Self {
        SeedInput::Bytes(value)
    }
}

impl From<&[u8]> for SeedInput {
    fn from(value: &[u8]) -> Self {
        SeedInput::Bytes(value.to_vec())
    }
}

/// FNV-1a, 32-bit
///
/// # Example
/// ```
/// use seeded_prng_core_rs::seed::fnv1a32;
///
/// assert_eq!(fnv1a32(b""), 0x811c9dc5);
/// assert_eq!(fnv1a32(b"a"), 0xe40c292c);
/// ```
pub fn fnv1a32(data: &[u8]) -> u32 {
    data.iter().fold(FNV32_OFFSET_BASIS, |h, &byte| {
        (h ^ u32::from(byte)).wrapping_mul(FNV32_PRIME)
    })
}

/// FNV-1a, 64-bit
///
/// # Example
/// ```
/// use seeded_prng_core_rs::seed::fnv1a64;
///
/// assert_eq!(fnv1a64(b""), 0xcbf29ce484222325);
/// assert_eq!(fnv1a64(b"a"), 0xaf63dc4c8601ec8c);
/// ```
pub fn fnv1a64(data: &[u8]) -> u64 {
    data.iter().fold(FNV64_OFFSET_BASIS, |h, &byte| {
        (h ^ u64::from(byte)).wrapping_mul(FNV64_PRIME)
    })
}
