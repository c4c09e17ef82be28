//! Seeded PRNG Core - Rust Engine
//!
//! Deterministic, seedable pseudo-random generators behind one calling
//! interface.
//!
//! # Architecture
//!
//! - **seed**: Seed normalization (FNV-1a) and word expansion (SplitMix)
//! - **algorithms**: The 17 generator state machines
//! - **composer**: 53-bit doubles from 32-bit words
//! - **prng**: The uniform façade (`Prng`)
//! - **snapshot** / **checkpoint**: State capture and checksummed storage
//! - **config**: Serializable construction recipes
//!
//! # Critical Invariants
//!
//! 1. Same seed → same initial state → same output sequence
//! 2. Restoring a snapshot resumes the stream exactly
//! 3. Snapshots never share storage with a live generator
//! 4. None of these generators are cryptographically secure
//!
//! # Example
//! ```
//! use seeded_prng_core_rs::{Algorithm, Prng};
//!
//! let mut rng = Prng::new(Algorithm::Alea, "seed");
//! let a = rng.next_f64();
//! let b = rng.double();
//! let c = rng.int32();
//! assert!((0.0..1.0).contains(&a) && (0.0..1.0).contains(&b));
//! let _ = c;
//! ```

pub mod algorithms;
pub mod checkpoint;
pub mod composer;
pub mod config;
pub mod error;
pub mod prng;
pub mod seed;
pub mod snapshot;

pub use algorithms::{Algorithm, GeneratorState, RawWord, StateMachine};
pub use checkpoint::Checkpoint;
pub use config::PrngConfig;
pub use error::PrngError;
pub use prng::Prng;
pub use seed::SeedInput;
pub use snapshot::StateSnapshot;
