//! Benchmarks for generation stepping.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rhizome_sprout_automata::AutomatonEngine;
use rhizome_sprout_grid::{BoolGrid, Dimensions};

fn soup(size: usize) -> BoolGrid {
    let dims = Dimensions::new(size, size).unwrap();
    let mut state = 0x2545_f491_4f6c_dd1du64;
    BoolGrid::from_fn(dims, |_, _| {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state % 3 == 0
    })
}

fn bench_step(c: &mut Criterion) {
    let engine = AutomatonEngine::life();
    let mut group = c.benchmark_group("life_step");
    for size in [64, 256, 512] {
        let grid = soup(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
            b.iter(|| engine.step(black_box(grid)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
