pub mod dijkstra;
pub mod traits;

pub use dijkstra::{DanglingNeighbors, Dijkstra};
pub use traits::{
    DistanceTable, NearestTarget, SearchStats, ShortestPathAlgorithm, ShortestPathTree,
};
