//! Performance measurement for complete level generation

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use gridworld::algorithm::synthesis::Synthesizer;
use std::hint::black_box;

/// Measures time to generate 100 consecutive levels with the default configuration
fn bench_generate_100_levels(c: &mut Criterion) {
    c.bench_function("generate_100_levels", |b| {
        b.iter(|| {
            let synthesizer = Synthesizer::default();
            for level in 1..=100 {
                black_box(synthesizer.generate(level));
            }
        });
    });
}

criterion_group!(benches, bench_generate_100_levels);
criterion_main!(benches);
