//! Independent nearest-target queries from many start nodes over one graph

use rayon::prelude::*;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::traits::{DistanceTable, NearestTarget};
use crate::graph::{Graph, NodeId, Weight};
use crate::Result;

/// Runs [`Dijkstra::find_path_to_nearest_target`] once per start node in parallel
///
/// The graph is only read. Results come back in the order of `starts`, and a
/// failing start does not affect the others.
pub fn nearest_from_each<N, W, G>(
    engine: &Dijkstra,
    graph: &G,
    starts: &[N],
    targets: &[N],
) -> Vec<Result<NearestTarget<N, W>>>
where
    N: NodeId + Send + Sync,
    W: Weight + Send + Sync,
    G: Graph<N, W> + Sync,
{
    starts
        .par_iter()
        .map(|start| engine.find_path_to_nearest_target(graph, start, targets))
        .collect()
}

/// Full distance tables from many start nodes, in the order of `starts`
pub fn distances_from_each<N, W, G>(
    engine: &Dijkstra,
    graph: &G,
    starts: &[N],
) -> Vec<Result<DistanceTable<N, W>>>
where
    N: NodeId + Send + Sync,
    W: Weight + Send + Sync,
    G: Graph<N, W> + Sync,
{
    starts
        .par_iter()
        .map(|start| engine.compute_all_distances(graph, start))
        .collect()
}
