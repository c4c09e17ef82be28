//! Seed Normalization Tests
//!
//! FNV-1a hashing, SplitMix expansion and the all-zero remap rule.

use seeded_prng_core_rs::seed::{
    expand32, expand64, fnv1a32, fnv1a64, non_zero_vector32, non_zero_vector64, Mash,
    SplitMix32Stream,
};
use seeded_prng_core_rs::{Algorithm, Prng, SeedInput};

// ============================================================================
// Hashing
// ============================================================================

#[test]
fn test_fnv1a_published_vectors() {
    assert_eq!(fnv1a32(b""), 0x811c_9dc5);
    assert_eq!(fnv1a32(b"a"), 0xe40c_292c);
    assert_eq!(fnv1a32(b"foobar"), 0xbf9c_f968);
    assert_eq!(fnv1a64(b""), 0xcbf2_9ce4_8422_2325);
    assert_eq!(fnv1a64(b"a"), 0xaf63_dc4c_8601_ec8c);
    assert_eq!(fnv1a64(b"foobar"), 0x8594_4171_f739_67e8);
}

#[test]
fn test_seed_hash_uses_canonical_bytes() {
    assert_eq!(SeedInput::from("foobar").hash32(), 0xbf9c_f968);
    assert_eq!(
        SeedInput::from(b"foobar".to_vec()).hash64(),
        0x8594_4171_f739_67e8
    );
    assert_eq!(
        SeedInput::from(1i64).hash32(),
        fnv1a32(&[1, 0, 0, 0, 0, 0, 0, 0])
    );
}

#[test]
fn test_text_and_byte_seeds_hash_alike() {
    let text = SeedInput::from("same");
    let bytes = SeedInput::from(b"same".as_slice());
    assert_eq!(text.hash64(), bytes.hash64());
}

#[test]
fn test_integer_and_text_seeds_are_distinct() {
    assert_ne!(SeedInput::from(42i64).hash32(), SeedInput::from("42").hash32());
}

// ============================================================================
// Expansion
// ============================================================================

#[test]
fn test_expand32_follows_splitmix_stream() {
    let seed = SeedInput::from("expand");
    let mut stream = SplitMix32Stream::new(seed.hash32());
    let expected: Vec<u32> = (0..6).map(|_| stream.next_word()).collect();
    assert_eq!(expand32(&seed, 6), expected);
}

#[test]
fn test_expansion_prefix_is_stable() {
    let seed = SeedInput::from(9i64);
    let short = expand64(&seed, 2);
    let long = expand64(&seed, 5);
    assert_eq!(short[..], long[..2]);
}

#[test]
fn test_non_zero_vectors_never_all_zero() {
    for text in ["", "a", "seed", "another seed"] {
        let seed = SeedInput::from(text);
        assert!(non_zero_vector32(&seed, 4).iter().any(|&w| w != 0));
        assert!(non_zero_vector64(&seed, 2).iter().any(|&w| w != 0));
    }
}

// ============================================================================
// Char codes and mash
// ============================================================================

#[test]
fn test_char_codes_by_seed_kind() {
    assert_eq!(SeedInput::from("é€").char_codes(), vec![0xe9, 0x20ac]);
    assert_eq!(
        SeedInput::from(-12i64).char_codes(),
        vec![u32::from(b'-'), u32::from(b'1'), u32::from(b'2')]
    );
    assert_eq!(SeedInput::from(vec![7u8, 255]).char_codes(), vec![7, 255]);
}

#[test]
fn test_mash_output_in_unit_interval() {
    let mut mash = Mash::new();
    for codes in [&[][..], &[32][..], &[115, 101, 101, 100][..]] {
        let value = mash.mash(codes);
        assert!((0.0..1.0).contains(&value));
    }
}

#[test]
fn test_mash_carries_state_between_calls() {
    let mut mash = Mash::new();
    let first = mash.mash(&[32]);
    let second = mash.mash(&[32]);
    assert_ne!(first, second);
}

// ============================================================================
// Clock seed
// ============================================================================

#[test]
fn test_clock_seed_is_integer() {
    assert!(matches!(SeedInput::from_clock(), SeedInput::Integer(ms) if ms > 0));
}

#[test]
fn test_every_algorithm_accepts_every_seed_kind() {
    let seeds = [
        SeedInput::from(""),
        SeedInput::from("text"),
        SeedInput::from(0i64),
        SeedInput::from(i64::MIN),
        SeedInput::from(Vec::<u8>::new()),
        SeedInput::from_words(&[0, 0, 0, 0]),
    ];
    for algorithm in Algorithm::ALL {
        for seed in &seeds {
            let mut rng = Prng::new(algorithm, seed.clone());
            assert!((0.0..1.0).contains(&rng.next_f64()), "{}", algorithm);
        }
    }
}
