pub mod adjacency;
pub mod fixtures;
pub mod generators;
pub mod traits;
pub mod validate;

pub use adjacency::AdjacencyGraph;
pub use traits::{Graph, NodeId, Weight};
pub use validate::{find_dangling, validate, validate_neighbors, validate_weights};
