//! Snapshot Tests - State Capture and Exact Resumption
//!
//! Critical invariants tested:
//! - Resumption: a restored generator continues the original's stream
//! - Isolation: a snapshot never shares storage with the live generator
//! - Shape checks: a malformed snapshot is rejected, never half-applied

use seeded_prng_core_rs::{Algorithm, Prng, PrngError, SeedInput, StateSnapshot};

// ============================================================================
// Test Helpers
// ============================================================================

/// Draw `k`, snapshot, then compare `n` further draws from the original
/// and from a restored copy
fn assert_round_trip(algorithm: Algorithm, k: usize, n: usize) {
    let mut original = Prng::new(algorithm, "snapshot");
    for _ in 0..k {
        original.next_f64();
    }

    let snapshot = original.state();
    let mut restored = Prng::from_snapshot(&snapshot).unwrap();
    assert_eq!(restored.algorithm(), algorithm);

    for step in 0..n {
        assert_eq!(
            original.next_f64().to_bits(),
            restored.next_f64().to_bits(),
            "{} after k={} diverged at step {}",
            algorithm,
            k,
            step
        );
    }
}

// ============================================================================
// Round Trips
// ============================================================================

#[test]
fn test_round_trip_every_algorithm() {
    for algorithm in Algorithm::ALL {
        for k in [0, 5, 100] {
            for n in [1, 50] {
                assert_round_trip(algorithm, k, n);
            }
        }
    }
}

#[test]
fn test_round_trip_through_json() {
    for algorithm in Algorithm::ALL {
        let mut original = Prng::new(algorithm, 77i64);
        for _ in 0..13 {
            original.double();
        }

        let json = original.state().to_json().unwrap();
        let snapshot = StateSnapshot::from_json(&json).unwrap();
        let mut restored = Prng::from_snapshot(&snapshot).unwrap();

        for _ in 0..50 {
            assert_eq!(original.int32(), restored.int32(), "{}", algorithm);
            assert_eq!(
                original.double().to_bits(),
                restored.double().to_bits(),
                "{}",
                algorithm
            );
        }
    }
}

#[test]
fn test_restore_rewinds_in_place() {
    for algorithm in Algorithm::ALL {
        let mut rng = Prng::new(algorithm, "rewind");
        let mark = rng.state();
        let first: Vec<i32> = (0..20).map(|_| rng.int32()).collect();

        rng.restore(&mark).unwrap();
        let again: Vec<i32> = (0..20).map(|_| rng.int32()).collect();
        assert_eq!(first, again, "{}", algorithm);
    }
}

#[test]
fn test_make_with_snapshot_skips_warm_up() {
    let mut seeded = Prng::new(Algorithm::Xoshiro128PlusPlus, "warm");
    let snapshot = seeded.state();

    let mut made = Prng::make(Algorithm::Xoshiro128PlusPlus, None, Some(&snapshot)).unwrap();
    assert_eq!(made.next_f64(), seeded.next_f64());
}

// ============================================================================
// Isolation
// ============================================================================

#[test]
fn test_snapshot_is_detached_from_generator() {
    for algorithm in Algorithm::ALL {
        let mut rng = Prng::new(algorithm, "detached");
        let snapshot = rng.state();
        let copy = snapshot.clone();

        for _ in 0..10 {
            rng.next_f64();
        }
        assert_eq!(snapshot, copy, "{} snapshot moved with generator", algorithm);
    }
}

#[test]
fn test_mutating_snapshot_does_not_touch_generator() {
    let mut rng = Prng::new(Algorithm::Arc4, "detached");
    let before = rng.state();

    let mut snapshot = rng.state();
    if let StateSnapshot::Arc4 { s, .. } = &mut snapshot {
        s.swap(0, 1);
    }
    assert_eq!(rng.state(), before);
    rng.next_f64();
}

#[test]
fn test_two_restores_are_independent() {
    let snapshot = Prng::new(Algorithm::Xor4096, "fork").state();
    let mut a = Prng::from_snapshot(&snapshot).unwrap();
    let mut b = Prng::from_snapshot(&snapshot).unwrap();

    let a_values: Vec<i32> = (0..40).map(|_| a.int32()).collect();
    let b_values: Vec<i32> = (0..40).map(|_| b.int32()).collect();
    assert_eq!(a_values, b_values);
}

// ============================================================================
// Rejection
// ============================================================================

#[test]
fn test_restore_rejects_other_algorithm() {
    let mut rng = Prng::new(Algorithm::Sfc32, "wrong");
    let foreign = Prng::new(Algorithm::Jsf32, "wrong").state();
    let err = rng.restore(&foreign).unwrap_err();
    assert!(matches!(err, PrngError::InvalidState { .. }));
}

#[test]
fn test_rejects_short_tables() {
    let bad = [
        StateSnapshot::Arc4 {
            i: 0,
            j: 0,
            s: vec![0; 16],
        },
        StateSnapshot::Xor4096 {
            w: 1,
            x: vec![1; 127],
            i: 0,
        },
        StateSnapshot::XorShift7 {
            x: vec![1; 7],
            i: 0,
        },
    ];
    for snapshot in &bad {
        assert!(
            matches!(
                Prng::from_snapshot(snapshot),
                Err(PrngError::InvalidState { .. })
            ),
            "{:?} accepted",
            snapshot.algorithm()
        );
    }
}

#[test]
fn test_rejects_arc4_table_that_is_not_a_permutation() {
    let snapshot = StateSnapshot::Arc4 {
        i: 0,
        j: 0,
        s: vec![7; 256],
    };
    assert!(Prng::from_snapshot(&snapshot).is_err());
}

#[test]
fn test_rejects_out_of_range_cursor() {
    let snapshot = StateSnapshot::XorShift7 {
        x: vec![1; 8],
        i: 8,
    };
    assert!(Prng::from_snapshot(&snapshot).is_err());
}

#[test]
fn test_rejects_all_zero_fixed_points() {
    // Each of these transitions maps all-zero state to itself
    let zero = [
        StateSnapshot::Tychei {
            a: 0,
            b: 0,
            c: 0,
            d: 0,
        },
        StateSnapshot::Xor128 {
            x: 0,
            y: 0,
            z: 0,
            w: 0,
        },
        StateSnapshot::XorShift7 {
            x: vec![0; 8],
            i: 3,
        },
        StateSnapshot::Xoshiro128Plus {
            s0: 0,
            s1: 0,
            s2: 0,
            s3: 0,
        },
        StateSnapshot::Xoshiro128PlusPlus {
            s0: 0,
            s1: 0,
            s2: 0,
            s3: 0,
        },
        StateSnapshot::Xoroshiro128Plus { s0: 0, s1: 0 },
        StateSnapshot::Xoroshiro128StarStar { s0: 0, s1: 0 },
        StateSnapshot::Jsf32 {
            a: 0,
            b: 0,
            c: 0,
            d: 0,
        },
        StateSnapshot::Alea {
            c: 0,
            s0: 0.0,
            s1: 0.0,
            s2: 0.0,
        },
    ];

    for snapshot in &zero {
        let err = Prng::from_snapshot(snapshot).unwrap_err();
        assert!(
            matches!(err, PrngError::InvalidState { algorithm, .. } if algorithm == snapshot.algorithm()),
            "{} accepted an all-zero state",
            snapshot.algorithm()
        );

        let mut live = Prng::new(snapshot.algorithm(), "zero");
        let before = live.state();
        assert!(live.restore(snapshot).is_err());
        assert_eq!(live.state(), before);
    }
}

#[test]
fn test_single_nonzero_word_is_accepted() {
    let snapshot = StateSnapshot::Xor128 {
        x: 0,
        y: 0,
        z: 0,
        w: 1,
    };
    let mut rng = Prng::from_snapshot(&snapshot).unwrap();
    let value = rng.double();
    assert!(value > 0.0 && value < 1.0);
}

#[test]
fn test_counter_generators_accept_zero_state() {
    // A counter or Weyl term keeps these moving from zero
    let snapshots = [
        StateSnapshot::Sfc32 {
            a: 0,
            b: 0,
            c: 0,
            d: 0,
        },
        StateSnapshot::SplitMix32 { s: 0 },
        StateSnapshot::SplitMix64 { s: 0 },
        StateSnapshot::Mulberry32 { s: 0 },
    ];
    for snapshot in &snapshots {
        let mut rng = Prng::from_snapshot(snapshot).unwrap();
        assert!((0.0..1.0).contains(&rng.double()));
    }
}

#[test]
fn test_rejects_even_pcg_increment() {
    let snapshot = StateSnapshot::Pcg32 { s: 1, inc: 2 };
    assert!(Prng::from_snapshot(&snapshot).is_err());
}

#[test]
fn test_rejects_alea_lag_outside_unit_interval() {
    let snapshot = StateSnapshot::Alea {
        c: 1,
        s0: 0.5,
        s1: 1.5,
        s2: 0.25,
    };
    assert!(Prng::from_snapshot(&snapshot).is_err());
}

#[test]
fn test_json_with_wrong_fields_fails_to_parse() {
    let json = r#"{"algorithm":"xor128","x":1,"y":2}"#;
    assert!(StateSnapshot::from_json(json).is_err());
}

#[test]
fn test_seed_is_ignored_when_snapshot_given() {
    let snapshot = Prng::new(Algorithm::Tychei, "one").state();
    let mut a = Prng::make(Algorithm::Tychei, Some(SeedInput::from("two")), Some(&snapshot)).unwrap();
    let mut b = Prng::from_snapshot(&snapshot).unwrap();
    assert_eq!(a.int32(), b.int32());
}
