//! Benchmarks for noise sampling.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rhizome_sprout_noise::{Fbm, Noise2D, Perlin2D};

fn bench_perlin(c: &mut Criterion) {
    let noise = Perlin2D::new();
    c.bench_function("perlin2d", |b| {
        b.iter(|| noise.sample(black_box(1.234), black_box(5.678)))
    });
}

fn bench_fbm(c: &mut Criterion) {
    let fbm4 = Fbm::new(Perlin2D::new()).octaves(4);
    c.bench_function("fbm_perlin2d_4oct", |b| {
        b.iter(|| fbm4.sample(black_box(1.234), black_box(5.678)))
    });

    let fbm8 = Fbm::new(Perlin2D::new()).octaves(8);
    c.bench_function("fbm_perlin2d_8oct", |b| {
        b.iter(|| fbm8.sample(black_box(1.234), black_box(5.678)))
    });
}

criterion_group!(benches, bench_perlin, bench_fbm);
criterion_main!(benches);
