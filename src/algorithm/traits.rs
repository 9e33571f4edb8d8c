use std::collections::{HashMap, HashSet};

use log::warn;

use crate::graph::{Graph, NodeId, Weight};
use crate::Result;

/// Best-known distance from the source to every node the search knows about
///
/// Unreachable nodes hold [`Weight::infinity`].
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable<N, W>
where
    N: NodeId,
    W: Weight,
{
    distances: HashMap<N, W>,
}

impl<N, W> DistanceTable<N, W>
where
    N: NodeId,
    W: Weight,
{
    pub(crate) fn from_map(distances: HashMap<N, W>) -> Self {
        DistanceTable { distances }
    }

    /// Raw table entry, infinity included; `None` for nodes the search never saw
    pub fn get(&self, node: &N) -> Option<W> {
        self.distances.get(node).copied()
    }

    /// Finite shortest distance to a node, or `None` if it is unreachable
    pub fn distance(&self, node: &N) -> Option<W> {
        self.get(node).filter(|d| !d.is_infinite())
    }

    pub fn is_reachable(&self, node: &N) -> bool {
        self.distance(node).is_some()
    }

    /// Number of entries, unreachable nodes included
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&N, W)> + '_ {
        self.distances.iter().map(|(node, d)| (node, *d))
    }

    /// Iterates over reachable nodes and their distances
    pub fn reachable(&self) -> impl Iterator<Item = (&N, W)> + '_ {
        self.iter().filter(|(_, d)| !d.is_infinite())
    }

    /// Entries sorted by node
    pub fn to_sorted_vec(&self) -> Vec<(N, W)> {
        let mut entries: Vec<(N, W)> = self.iter().map(|(n, d)| (n.clone(), d)).collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    pub fn into_inner(self) -> HashMap<N, W> {
        self.distances
    }
}

/// Shortest path tree rooted at a source node
#[derive(Debug, Clone)]
pub struct ShortestPathTree<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Distances from source to each known node
    pub distances: DistanceTable<N, W>,

    /// Node each reached node was last relaxed from
    pub predecessors: HashMap<N, N>,

    /// Source node
    pub source: N,
}

impl<N, W> ShortestPathTree<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Path from the source to `target`, or `None` if the target is unreachable
    pub fn path_to(&self, target: &N) -> Option<Vec<N>> {
        if !self.distances.is_reachable(target) {
            return None;
        }
        reconstruct_path(&self.predecessors, &self.source, target)
    }
}

/// Counters collected during a single search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Entries popped from the frontier, stale ones included
    pub pops: usize,
    /// Popped entries skipped because a shorter distance was already known
    pub stale_skipped: usize,
    /// Successful relaxations (each one pushes onto the frontier)
    pub relaxations: usize,
}

/// Nearest reachable target with its distance and the path to it
#[derive(Debug, Clone, PartialEq)]
pub struct NearestTarget<N, W>
where
    N: NodeId,
    W: Weight,
{
    pub target: N,
    pub distance: W,
    /// Nodes from the start to `target`, both inclusive
    pub path: Vec<N>,
    pub stats: SearchStats,
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    /// Compute shortest paths from a source node to all other nodes
    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathTree<N, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of nodes
    fn get_path(&self, tree: &ShortestPathTree<N, W>, target: &N) -> Option<Vec<N>> {
        tree.path_to(target)
    }
}

/// Walks predecessors from `target` back to `source` and returns the path in forward order
///
/// Returns `None` if the chain is broken or loops before reaching `source`.
pub(crate) fn reconstruct_path<N: NodeId>(
    predecessors: &HashMap<N, N>,
    source: &N,
    target: &N,
) -> Option<Vec<N>> {
    let mut path = vec![target.clone()];
    let mut visited = HashSet::new();
    let mut current = target;

    while current != source {
        if !visited.insert(current) {
            warn!("cycle in predecessor chain at node {}", current);
            return None;
        }
        current = predecessors.get(current)?;
        path.push(current.clone());
    }

    path.reverse();
    Some(path)
}
