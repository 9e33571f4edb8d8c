use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use nearest_sssp::graph::{fixtures, validate_weights};
use nearest_sssp::{
    AdjacencyGraph, DanglingNeighbors, Dijkstra, DistanceTable, Graph, NearestTarget,
};

/// Shortest path from a start node to the nearest of several targets
#[derive(Debug, Parser)]
#[command(name = "nearest", version, about)]
struct Cli {
    /// JSON graph file: {"A": {"B": 5.0}, ...}. Uses the built-in reference network if omitted
    #[arg(short, long)]
    graph: Option<PathBuf>,

    /// Start node
    #[arg(short, long, default_value = "A")]
    start: String,

    /// Comma-separated target nodes
    #[arg(short, long, value_delimiter = ',')]
    targets: Vec<String>,

    /// Print the full distance table instead of the nearest target
    #[arg(long)]
    all: bool,

    /// Reject edges pointing at nodes that are not keys of the graph
    #[arg(long)]
    strict: bool,
}

fn run(cli: Cli) -> nearest_sssp::Result<()> {
    let graph: AdjacencyGraph<String, f64> = match &cli.graph {
        Some(path) => AdjacencyGraph::from_json_file(path)?,
        None => fixtures::reference_network(),
    };
    validate_weights::<String, f64, AdjacencyGraph<String, f64>>(&graph)?;
    info!(
        "loaded graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let mut engine = Dijkstra::new();
    if cli.strict {
        engine = engine.with_dangling_policy(DanglingNeighbors::Reject);
    }

    if cli.all {
        let table: DistanceTable<String, f64> = engine.compute_all_distances(&graph, &cli.start)?;
        for (node, distance) in table.to_sorted_vec() {
            if distance.is_infinite() {
                println!("{:<12} unreachable", node);
            } else {
                println!("{:<12} {}", node, distance);
            }
        }
        return Ok(());
    }

    let targets = if cli.targets.is_empty() && cli.graph.is_none() {
        fixtures::reference_targets()
    } else {
        cli.targets
    };

    let found: NearestTarget<String, f64> =
        engine.find_path_to_nearest_target(&graph, &cli.start, &targets)?;
    println!("nearest target: {}", found.target);
    println!("distance:       {}", found.distance);
    println!("path:           {}", found.path.join(" -> "));
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
