//! Criterion benchmarks for the scanline filler.
//! Regular polygons scale the row count; star polygons scale the edge count.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::Vector2;
use scanfill::raster::{fill, fill_with, Axis, FillCfg};
use scanfill::shapes::{draw_star_polygon, regular_polygon, ReplayToken, StarCfg, VertexCount};

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");
    for &radius in &[16.0f64, 64.0, 256.0] {
        let poly = regular_polygon(32, radius).unwrap();
        group.bench_with_input(
            BenchmarkId::new("regular32_radius", radius as u64),
            &poly,
            |b, poly| b.iter(|| fill(poly).unwrap()),
        );
    }
    for &n in &[8usize, 64, 512] {
        let cfg = StarCfg {
            vertex_count: VertexCount::Fixed(n),
            base_radius: 128.0,
            center: Vector2::new(128.0, 128.0),
            ..StarCfg::default()
        };
        let poly = draw_star_polygon(cfg, ReplayToken { seed: 44, index: 0 }).unwrap();
        group.bench_with_input(BenchmarkId::new("star_edges", n), &poly, |b, poly| {
            b.iter(|| fill(poly).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("star_edges_columns", n), &poly, |b, poly| {
            b.iter(|| fill_with(poly, FillCfg { axis: Axis::X }).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fill);
criterion_main!(benches);
