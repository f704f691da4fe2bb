//! Benchmarks for image encoding construction
//!
//! Run with: cargo bench -p piqture-embed

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use piqture_embed::{Frqi, ImageDims, ImageEmbedding, Neqr, PixelValues, produce_sub_images};

fn gradient(side: u32) -> Vec<f64> {
    (0..side * side).map(|i| f64::from(i % 256)).collect()
}

/// Benchmark NEQR construction
fn bench_neqr(c: &mut Criterion) {
    let mut group = c.benchmark_group("neqr");

    for side in &[2_u32, 4, 8, 16] {
        group.bench_with_input(BenchmarkId::new("build", side), side, |b, &n| {
            let dims = ImageDims::new(n, n).unwrap();
            let mut neqr = Neqr::new(dims, gradient(n), 255).unwrap();
            b.iter(|| black_box(neqr.build_circuit().unwrap().num_ops()));
        });
    }

    group.finish();
}

/// Benchmark FRQI construction, concrete and symbolic
fn bench_frqi(c: &mut Criterion) {
    let mut group = c.benchmark_group("frqi");

    for side in &[2_u32, 4, 8, 16] {
        let dims = ImageDims::new(*side, *side).unwrap();

        group.bench_with_input(BenchmarkId::new("concrete", side), side, |b, &n| {
            let mut frqi = Frqi::new(dims, PixelValues::single(gradient(n))).unwrap();
            b.iter(|| black_box(frqi.build_circuit().unwrap().num_ops()));
        });

        group.bench_with_input(BenchmarkId::new("symbolic", side), side, |b, _| {
            let mut frqi = Frqi::new(dims, PixelValues::Symbolic).unwrap();
            b.iter(|| black_box(frqi.build_circuit().unwrap().num_ops()));
        });
    }

    group.finish();
}

/// Benchmark patch extraction
fn bench_sub_images(c: &mut Criterion) {
    c.bench_function("sub_images_28x28_3x3", |b| {
        let dims = ImageDims::new(28, 28).unwrap();
        let pixels = gradient(28);
        b.iter(|| produce_sub_images(dims, black_box(&pixels), (3, 3), 1).unwrap());
    });
}

criterion_group!(benches, bench_neqr, bench_frqi, bench_sub_images);
criterion_main!(benches);
