//! Criterion microbenches for the left-right planarity test (group "lr").
//!
//! - Planar inputs walk the whole forest: grids and stacked triangulations.
//! - Non-planar inputs stop at the first conflict: subdivided Kuratowski graphs
//!   padded with isolated nodes so the edge-count shortcut does not fire.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use planarity::api::*;

fn bench_planar(c: &mut Criterion) {
    let mut group = c.benchmark_group("lr");
    for side in [32usize, 128, 256] {
        let g = grid(side, side);
        group.throughput(Throughput::Elements(g.number_of_edges() as u64));
        group.bench_with_input(BenchmarkId::new("grid", side), &g, |b, g| {
            b.iter(|| assert!(is_planar(g)))
        });
    }
    for n in [1_000usize, 10_000, 100_000] {
        let g = stacked_triangulation(n, 17).expect("n >= 3");
        group.throughput(Throughput::Elements(g.number_of_edges() as u64));
        group.bench_with_input(BenchmarkId::new("triangulation", n), &g, |b, g| {
            b.iter(|| assert!(is_planar(g)))
        });
    }
    group.finish();
}

fn bench_non_planar(c: &mut Criterion) {
    let mut group = c.benchmark_group("lr");
    for rounds in [100usize, 10_000] {
        let k33 = subdivide(&complete_bipartite(3, 3), rounds, 3);
        let g = k33.disjoint_union(&Graph::new(k33.number_of_nodes()));
        group.throughput(Throughput::Elements(g.number_of_edges() as u64));
        group.bench_with_input(BenchmarkId::new("k33_subdivided", rounds), &g, |b, g| {
            b.iter(|| assert!(!is_planar(g)))
        });
    }
    let p = petersen();
    group.bench_function("petersen", |b| b.iter(|| assert!(!is_planar(&p))));
    group.finish();
}

fn bench_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("lr");
    let g = path(1_000_000);
    group.throughput(Throughput::Elements(g.number_of_edges() as u64));
    group.sample_size(10);
    group.bench_function("path_1e6", |b| b.iter(|| assert!(is_planar(&g))));
    group.finish();
}

criterion_group!(benches, bench_planar, bench_non_planar, bench_path);
criterion_main!(benches);
