//! Validates the bit-exactness of the deterministic random source
//!
//! The fixture values pin the mulberry32 mixing algorithm: cross-platform
//! level reproducibility depends on these sequences never changing.

use gridworld::random::source::RandomSource;

/// First eight outputs for seed 12345 (the seed of level 1)
const SEED_12345_SEQUENCE: [f64; 8] = [
    0.979_728_267_760_947_3,
    0.306_752_264_499_664_3,
    0.484_205_421_525_985,
    0.817_934_412_509_203,
    0.509_428_369_347_006_1,
    0.347_471_860_470_250_25,
    0.073_757_541_831_582_78,
    0.766_396_467_341_110_1,
];

#[test]
fn test_seed_12345_sequence_is_bit_exact() {
    let mut source = RandomSource::new(12345);
    for (index, expected) in SEED_12345_SEQUENCE.iter().enumerate() {
        let value = source.next_f64();
        assert_eq!(
            value.to_bits(),
            expected.to_bits(),
            "draw {index} diverged: expected {expected}, got {value}"
        );
    }
}

#[test]
fn test_equal_seeds_produce_identical_sequences() {
    let mut first = RandomSource::new(0xDEAD_BEEF);
    let mut second = RandomSource::new(0xDEAD_BEEF);
    for _ in 0..1_000 {
        assert_eq!(first.next_f64().to_bits(), second.next_f64().to_bits());
    }
}

#[test]
fn test_distinct_seeds_diverge() {
    let mut first = RandomSource::new(12345);
    let mut second = RandomSource::new(54321);

    let expected = 0.460_393_829_736_858_6_f64;
    assert_eq!(second.next_f64().to_bits(), expected.to_bits());
    assert_ne!(
        first.next_f64().to_bits(),
        expected.to_bits(),
        "distinct seeds should not open with the same draw"
    );
}

#[test]
fn test_clone_restarts_nothing() {
    // Cloning copies the current state; both clones advance independently
    let mut source = RandomSource::new(99);
    let _ = source.next_f64();

    let mut fork = source.clone();
    assert_eq!(source.next_f64().to_bits(), fork.next_f64().to_bits());
}

#[test]
fn test_bounded_draws_cover_the_range() {
    let mut source = RandomSource::new(7);
    let mut seen = [false; 10];

    for _ in 0..1_000 {
        let index = source.next_bounded(10);
        if let Some(flag) = seen.get_mut(index) {
            *flag = true;
        }
    }

    assert!(seen.iter().all(|&hit| hit), "draws missed part of [0, 10)");
}
