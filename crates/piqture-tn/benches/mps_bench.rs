//! Benchmarks for MPS construction
//!
//! Run with: cargo bench -p piqture-tn

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use piqture_tn::Mps;

fn bench_mps(c: &mut Criterion) {
    let mut group = c.benchmark_group("mps");

    for side in &[2_u32, 4, 8] {
        group.bench_with_input(BenchmarkId::new("simple_real", side), side, |b, &n| {
            let mut mps = Mps::new((n, n)).unwrap();
            b.iter(|| black_box(mps.mps_simple(false).unwrap().num_ops()));
        });
        group.bench_with_input(BenchmarkId::new("general_complex", side), side, |b, &n| {
            let mut mps = Mps::new((n, n)).unwrap();
            b.iter(|| black_box(mps.mps_general(true).unwrap().num_ops()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mps);
criterion_main!(benches);
