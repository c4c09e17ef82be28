//! State snapshots
//!
//! A [`StateSnapshot`] is a deep copy of one generator's internal state. It
//! owns its tables outright, so advancing the generator afterwards never
//! changes a snapshot already taken.
//!
//! Snapshots serialize as JSON objects tagged by `"algorithm"`, with the
//! field names of each algorithm's state table:
//!
//! ```text
//! {"algorithm":"xor128","x":1,"y":2,"z":3,"w":4}
//! {"algorithm":"arc4","i":0,"j":0,"S":[...256 bytes...]}
//! ```

use crate::algorithms::Algorithm;
use serde::{Deserialize, Serialize};

/// Deep copy of a generator's state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "algorithm")]
pub enum StateSnapshot {
    #[serde(rename = "alea")]
    Alea { c: u32, s0: f64, s1: f64, s2: f64 },

    #[serde(rename = "arc4")]
    Arc4 {
        i: u8,
        j: u8,
        #[serde(rename = "S")]
        s: Vec<u8>,
    },

    #[serde(rename = "tychei")]
    Tychei { a: u32, b: u32, c: u32, d: u32 },

    #[serde(rename = "xor128")]
    Xor128 { x: u32, y: u32, z: u32, w: u32 },

    #[serde(rename = "xor4096")]
    Xor4096 {
        w: u32,
        #[serde(rename = "X")]
        x: Vec<u32>,
        i: u32,
    },

    #[serde(rename = "xorshift7")]
    XorShift7 { x: Vec<u32>, i: u32 },

    #[serde(rename = "xorwow")]
    XorWow {
        x: u32,
        y: u32,
        z: u32,
        w: u32,
        v: u32,
        d: u32,
    },

    #[serde(rename = "pcg32")]
    Pcg32 { s: u64, inc: u64 },

    #[serde(rename = "mulberry32")]
    Mulberry32 { s: u32 },

    #[serde(rename = "splitmix32")]
    SplitMix32 { s: u32 },

    #[serde(rename = "splitmix64")]
    SplitMix64 { s: u64 },

    #[serde(rename = "xoshiro128plus")]
    Xoshiro128Plus { s0: u32, s1: u32, s2: u32, s3: u32 },

    #[serde(rename = "xoshiro128plusplus")]
    Xoshiro128PlusPlus { s0: u32, s1: u32, s2: u32, s3: u32 },

    #[serde(rename = "xoroshiro128plus")]
    Xoroshiro128Plus { s0: u64, s1: u64 },

    #[serde(rename = "xoroshiro128starstar")]
    Xoroshiro128StarStar { s0: u64, s1: u64 },

    #[serde(rename = "sfc32")]
    Sfc32 { a: u32, b: u32, c: u32, d: u32 },

    #[serde(rename = "jsf32")]
    Jsf32 { a: u32, b: u32, c: u32, d: u32 },
}

impl StateSnapshot {
    /// Algorithm this snapshot belongs to
    pub fn algorithm(&self) -> Algorithm {
        match self {
            StateSnapshot::Alea { .. } => Algorithm::Alea,
            StateSnapshot::Arc4 { .. } => Algorithm::Arc4,
            StateSnapshot::Tychei { .. } => Algorithm::Tychei,
            StateSnapshot::Xor128 { .. } => Algorithm::Xor128,
            StateSnapshot::Xor4096 { .. } => Algorithm::Xor4096,
            StateSnapshot::XorShift7 { .. } => Algorithm::XorShift7,
            StateSnapshot::XorWow { .. } => Algorithm::XorWow,
            StateSnapshot::Pcg32 { .. } => Algorithm::Pcg32,
            StateSnapshot::Mulberry32 { .. } => Algorithm::Mulberry32,
            StateSnapshot::SplitMix32 { .. } => Algorithm::SplitMix32,
            StateSnapshot::SplitMix64 { .. } => Algorithm::SplitMix64,
            StateSnapshot::Xoshiro128Plus { .. } => Algorithm::Xoshiro128Plus,
            StateSnapshot::Xoshiro128PlusPlus { .. } => Algorithm::Xoshiro128PlusPlus,
            StateSnapshot::Xoroshiro128Plus { .. } => Algorithm::Xoroshiro128Plus,
            StateSnapshot::Xoroshiro128StarStar { .. } => Algorithm::Xoroshiro128StarStar,
            StateSnapshot::Sfc32 { .. } => Algorithm::Sfc32,
            StateSnapshot::Jsf32 { .. } => Algorithm::Jsf32,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
