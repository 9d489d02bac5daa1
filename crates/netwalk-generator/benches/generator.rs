//! Benchmarks for puzzle generation.
//!
//! Measures the complete generation process (tree growth plus scrambling) for
//! every [`GridPreset`], using fixed seeds for reproducibility.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use netwalk_generator::{GridPreset, PuzzleGenerator, PuzzleSeed};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_generator_presets(c: &mut Criterion) {
    for preset in GridPreset::ALL {
        let generator = PuzzleGenerator::from_preset(preset);
        for (i, seed) in SEEDS.into_iter().enumerate() {
            let seed = PuzzleSeed::from_str(seed).unwrap();
            c.bench_with_input(
                BenchmarkId::new(format!("generator_{preset}"), format!("seed_{i}")),
                &seed,
                |b, seed| {
                    b.iter_batched(
                        || hint::black_box(*seed),
                        |seed| generator.generate_with_seed(seed),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
}

fn bench_generator_large_grid(c: &mut Criterion) {
    let generator = PuzzleGenerator::new(64, 64).unwrap();
    let seed = PuzzleSeed::from_str(SEEDS[0]).unwrap();
    c.bench_function("generator_64x64", |b| {
        b.iter(|| generator.generate_with_seed(hint::black_box(seed)));
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(8));
    targets =
        bench_generator_presets,
        bench_generator_large_grid
);
criterion_main!(benches);
