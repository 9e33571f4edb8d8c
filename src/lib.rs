//! Nearest SSSP - shortest paths from one source to the nearest of several targets
//!
//! The engine runs Dijkstra's algorithm over an adjacency-mapping graph with
//! non-negative weights. Besides the full single-source distance table it can
//! stop as soon as every requested target is settled, and return the nearest
//! target together with the path to it.
//!
//! ```
//! use nearest_sssp::{graph::fixtures, Dijkstra};
//!
//! let graph = fixtures::diamond::<u32>();
//! let found = Dijkstra::new()
//!     .find_path_to_nearest_target(&graph, &"A".to_string(), &["D".to_string(), "C".to_string()])
//!     .unwrap();
//! assert_eq!(found.distance, 3);
//! assert_eq!(found.path, ["A", "B", "C"]);
//! ```

pub mod algorithm;
pub mod batch;
pub mod data_structures;
pub mod graph;
pub mod web;

pub use algorithm::{
    dijkstra::{DanglingNeighbors, Dijkstra},
    DistanceTable, NearestTarget, SearchStats, ShortestPathAlgorithm, ShortestPathTree,
};
/// Re-export main types for convenient use
pub use graph::{AdjacencyGraph, Graph, NodeId, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unknown start node: {0}")]
    UnknownStartNode(String),

    #[error("No target node is reachable from the start node")]
    NoTargetReachable,

    #[error("Malformed graph: node {node} has an edge to unknown node {neighbor}")]
    MalformedGraph { node: String, neighbor: String },

    #[error("Negative edge weight: from {from} to {to}")]
    NegativeWeight { from: String, to: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
