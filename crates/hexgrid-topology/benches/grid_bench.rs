//! Benchmarks for Hexgrid Topology
//!
//! Measures performance of:
//! - Growing a grid hex by hex
//! - The local removal risk check
//! - Path search around a cut candidate
//! - Safe removal on a long ring

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hexgrid_topology::{removal_risk, Border, Borders, Grid};

/// A straight line of `len` hexes running along border 2: h{i} at (i, 0).
fn line(len: usize) -> Grid {
    let mut grid = Grid::new();
    grid.add_hex("h0", None).unwrap();
    for i in 1..len {
        let prev = format!("h{}", i - 1);
        grid.add_hex(&format!("h{}", i), Some((prev.as_str(), 2)))
            .unwrap();
    }
    grid
}

/// The line plus a return row at r = 2, joined at both ends into a loop.
///
/// Hexes in the middle of the top row have neighbors only at borders 2 and
/// 5, so removing one always needs the full search around the loop.
fn ring(len: usize) -> Grid {
    let mut grid = line(len);
    let last = format!("h{}", len - 1);
    grid.add_hex("down_end", Some((last.as_str(), 3))).unwrap();
    grid.add_hex(&format!("b{}", len - 1), Some(("down_end", 3))).unwrap();
    for i in (0..len - 1).rev() {
        let next = format!("b{}", i + 1);
        grid.add_hex(&format!("b{}", i), Some((next.as_str(), 5)))
            .unwrap();
    }
    grid.add_hex("down_start", Some(("h0", 3))).unwrap();
    grid
}

/// Benchmark grid growth
fn bench_grow(c: &mut Criterion) {
    let mut group = c.benchmark_group("grow_line");

    for &len in &[10usize, 100, 1000] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter(|| line(black_box(len)))
        });
    }
    group.finish();
}

/// Benchmark the O(6) risk classification
fn bench_removal_risk(c: &mut Criterion) {
    let separated: Borders = [(1, "a"), (3, "b"), (4, "c")]
        .into_iter()
        .map(|(i, n)| (Border::ALL[i], n))
        .collect();
    let surrounded: Borders = Border::ALL.into_iter().map(|b| (b, "n")).collect();

    c.bench_function("removal_risk/separated", |b| {
        b.iter(|| removal_risk(black_box(&separated)))
    });
    c.bench_function("removal_risk/surrounded", |b| {
        b.iter(|| removal_risk(black_box(&surrounded)))
    });
}

/// Benchmark path search, which walks the whole line when the cut is real
fn bench_exists_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("exists_path");

    for &len in &[10usize, 100, 1000] {
        let grid = ring(len);
        let last = format!("h{}", len - 1);
        group.bench_with_input(BenchmarkId::new("ring", len), &grid, |b, grid| {
            b.iter(|| grid.exists_path(black_box("h0"), black_box(&last), "h1").unwrap())
        });
    }
    group.finish();
}

/// Benchmark removal that needs the global search
fn bench_remove_with_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_hex");

    for &len in &[10usize, 100, 1000] {
        let grid = ring(len);
        group.bench_with_input(BenchmarkId::new("ring_middle", len), &grid, |b, grid| {
            b.iter_batched(
                || grid.clone(),
                |mut grid| grid.remove_hex(&format!("h{}", len / 2)),
                criterion::BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_grow,
    bench_removal_risk,
    bench_exists_path,
    bench_remove_with_search,
);
criterion_main!(benches);
