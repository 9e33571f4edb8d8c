use std::time::{Duration, Instant};

use nearest_sssp::graph::generators::generate_connected;
use nearest_sssp::{AdjacencyGraph, Dijkstra, Graph};

type BenchGraph = AdjacencyGraph<usize, f64>;

// Time a closure, returning its duration
fn time<F: FnOnce() -> bool>(name: &str, f: F) -> Duration {
    let start = Instant::now();
    let ok = f();
    let duration = start.elapsed();
    println!("  - {:<28} {:>10.3} ms{}", name, duration.as_secs_f64() * 1000.0, if ok { "" } else { " (no target)" });
    duration
}

fn main() {
    env_logger::init();

    let graph_sizes = [1_000, 10_000, 50_000, 100_000, 200_000];
    // Extra random edges per vertex on top of the spanning chain
    let edge_factor = 2;

    println!("=====================================================");
    println!("Benchmark: full search vs early exit on nearest target");
    println!("Edge factor: {} extra edges per vertex", edge_factor);
    println!("=====================================================");

    let engine = Dijkstra::new();
    let no_skip = Dijkstra::new().with_stale_skip(false);
    let mut results = Vec::new();

    for &size in &graph_sizes {
        let graph: BenchGraph = generate_connected(size, size * edge_factor, 100, size as u64);
        let source = 0;
        // A handful of targets spread over the id range
        let targets: Vec<usize> = (1..=5).map(|i| i * size / 6).collect();

        println!(
            "\nGraph with {} vertices and {} directed edges",
            graph.node_count(),
            graph.edge_count()
        );

        let full = time("full table + filter", || {
            engine.find_nearest_target(&graph, &source, &targets).is_ok()
        });
        let early = time("early exit + path", || {
            engine.find_path_to_nearest_target(&graph, &source, &targets).is_ok()
        });
        let early_no_skip = time("early exit, no stale skip", || {
            no_skip.find_path_to_nearest_target(&graph, &source, &targets).is_ok()
        });

        results.push((size, full, early, early_no_skip));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<12} | {:<12} | {:<14} | {:<8}",
        "Vertices", "Full (ms)", "Early (ms)", "NoSkip (ms)", "Speedup"
    );
    println!("-----------------------------------------------------");

    for (size, full, early, early_no_skip) in &results {
        let speedup = full.as_secs_f64() / early.as_secs_f64();
        println!(
            "{:<10} | {:<12.2} | {:<12.2} | {:<14.2} | {:<8.2}",
            size,
            full.as_secs_f64() * 1000.0,
            early.as_secs_f64() * 1000.0,
            early_no_skip.as_secs_f64() * 1000.0,
            speedup
        );
    }
}
