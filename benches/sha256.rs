use sha256rand::hash::sha256;
use sha256rand::rng::expand_seed;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_sha256(c: &mut Criterion) {
    c.bench_function("sha256 64 bytes", |b| {
        b.iter(|| sha256(black_box(&[0u8; 64])))
    });

    c.bench_function("sha256 1 KiB", |b| {
        b.iter(|| sha256(black_box(&[0u8; 1024])))
    });
}

pub fn bench_expand_seed(c: &mut Criterion) {
    c.bench_function("expand_seed 1 KiB", |b| {
        b.iter(|| expand_seed(black_box(&[0u8; 32]), black_box(1024)))
    });
}

criterion_group!(benches, bench_sha256, bench_expand_seed);
criterion_main!(benches);
