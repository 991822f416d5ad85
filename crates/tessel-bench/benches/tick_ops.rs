//! Criterion benchmarks for whole ticks.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use tessel_bench::reference_profile;
use tessel_engine::SimulationGrid;
use tessel_rules::RuleKind;

/// Benchmark: one tick of each rule on a 100x100 torus.
fn bench_tick_10k(c: &mut Criterion) {
    for kind in RuleKind::ALL {
        let config = reference_profile(kind, 42);
        c.bench_function(&format!("tick_{kind}_10k"), |b| {
            b.iter_batched(
                || SimulationGrid::new(&config).unwrap(),
                |mut grid| black_box(grid.tick()),
                BatchSize::LargeInput,
            );
        });
    }
}

criterion_group!(benches, bench_tick_10k);
criterion_main!(benches);
