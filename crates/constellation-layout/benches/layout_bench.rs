//! Benchmarks for constellation layout
//!
//! Measures performance of:
//! - Full composition versus node count
//! - Even vs explicit slot resolution
//! - Rejection of invalid configurations

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use constellation_layout::{
    compose, slot_angle, Center, ConnectorCurve, ConstellationConfig, Node, Panel, Point, Ring,
    Size,
};

/// Rings of capacity 12 at growing radii, every slot filled.
fn dense_config(node_count: usize) -> (Vec<Ring>, Vec<Node>) {
    let per_ring = 12;
    let ring_count = node_count.div_ceil(per_ring);
    let rings: Vec<Ring> = (0..ring_count)
        .map(|i| Ring::even(40.0 + 20.0 * i as f64, per_ring).with_offset(i as f64 * 0.1))
        .collect();
    let nodes = (0..node_count)
        .map(|n| Node::new(format!("n{n}"), n / per_ring, n % per_ring))
        .collect();
    (rings, nodes)
}

/// Benchmark full composition at different scales
fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    let panel = Panel::authored(482.0, 300.0).resized(1280.0, 720.0);
    let center = Center::new(Point::new(250.0, 179.0));
    let curve = ConnectorCurve::from_opacities(&[0.3, 0.25, 0.2, 0.15, 0.1], 1.0)
        .expect("curve is non-increasing");

    for &count in &[7usize, 100, 1000, 10_000] {
        let (rings, nodes) = dense_config(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| compose(black_box(&panel), &center, &rings, &nodes, &curve))
        });
    }
    group.finish();
}

/// Benchmark the built-in preset across panel sizes
fn bench_preset(c: &mut Criterion) {
    let mut group = c.benchmark_group("preset");
    let config = ConstellationConfig::integration_preset();

    for &(w, h) in &[(482.0, 300.0), (241.0, 150.0), (1920.0, 1080.0)] {
        group.bench_with_input(
            BenchmarkId::new("render", format!("{w}x{h}")),
            &Size::new(w, h),
            |b, &size| b.iter(|| config.compose(Some(black_box(size)))),
        );
    }
    group.finish();
}

/// Benchmark slot angle lookup
fn bench_slot_angle(c: &mut Criterion) {
    let mut group = c.benchmark_group("slot_angle");
    let even = Ring::even(100.0, 64);
    let explicit = Ring::explicit(100.0, (0..64).map(|i| i as f64 * 0.1).collect::<Vec<_>>());

    group.bench_function("even", |b| b.iter(|| slot_angle(&even, black_box(37))));
    group.bench_function("explicit", |b| b.iter(|| slot_angle(&explicit, black_box(37))));
    group.finish();
}

/// Benchmark validation failure path
fn bench_rejection(c: &mut Criterion) {
    let mut group = c.benchmark_group("rejection");
    let (mut rings, nodes) = dense_config(1000);
    for ring in rings.iter_mut().step_by(3) {
        ring.radius = -1.0;
    }
    let panel = Panel::default();
    let center = Center::new(Point::new(250.0, 179.0));
    let curve = ConnectorCurve::from_opacities(&[0.2], 1.0).expect("curve is non-increasing");

    group.bench_function("1000_nodes", |b| {
        b.iter(|| compose(black_box(&panel), &center, &rings, &nodes, &curve).is_err())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_compose,
    bench_preset,
    bench_slot_angle,
    bench_rejection,
);

criterion_main!(benches);
