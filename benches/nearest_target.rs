use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nearest_sssp::graph::generators::generate_connected;
use nearest_sssp::{AdjacencyGraph, Dijkstra};

fn bench_nearest_target(c: &mut Criterion) {
    let engine = Dijkstra::new();
    let mut group = c.benchmark_group("nearest_target");

    for &size in &[1_000usize, 10_000] {
        let graph: AdjacencyGraph<usize, f64> = generate_connected(size, size * 2, 100, 42);
        let targets: Vec<usize> = (1..=5).map(|i| i * size / 6).collect();

        group.bench_with_input(BenchmarkId::new("full_table", size), &graph, |b, g| {
            b.iter(|| engine.find_nearest_target(g, black_box(&0), &targets))
        });
        group.bench_with_input(BenchmarkId::new("early_exit", size), &graph, |b, g| {
            b.iter(|| engine.find_path_to_nearest_target(g, black_box(&0), &targets))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_nearest_target);
criterion_main!(benches);
