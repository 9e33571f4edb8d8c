use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use log::{debug, trace, warn};

use crate::algorithm::traits::{
    reconstruct_path, DistanceTable, NearestTarget, SearchStats, ShortestPathAlgorithm,
    ShortestPathTree,
};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::{validate_neighbors, Graph, NodeId, Weight};
use crate::{Error, Result};

/// How the search treats an edge whose neighbor has no adjacency entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DanglingNeighbors {
    /// The neighbor is reachable but has no outgoing edges
    #[default]
    Tolerate,
    /// The call fails with [`Error::MalformedGraph`] before searching
    Reject,
}

/// Classic Dijkstra's algorithm with early exit on a set of targets
///
/// The engine only holds configuration; every call builds its own distance,
/// predecessor and frontier state, so one instance can serve concurrent
/// queries over a shared graph.
#[derive(Debug, Clone)]
pub struct Dijkstra {
    dangling: DanglingNeighbors,
    skip_stale: bool,
}

/// Tables left behind by one run of the main loop
struct SearchState<N, W> {
    distances: HashMap<N, W>,
    predecessors: HashMap<N, N>,
    reached: HashMap<N, W>,
    stats: SearchStats,
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            dangling: DanglingNeighbors::Tolerate,
            skip_stale: true,
        }
    }

    /// Set the policy for neighbors that are missing from the graph's key set
    pub fn with_dangling_policy(mut self, policy: DanglingNeighbors) -> Self {
        self.dangling = policy;
        self
    }

    /// Enable or disable skipping of superseded frontier entries
    ///
    /// Results are the same either way; disabling only costs extra relaxation work.
    pub fn with_stale_skip(mut self, skip: bool) -> Self {
        self.skip_stale = skip;
        self
    }

    pub fn dangling_policy(&self) -> DanglingNeighbors {
        self.dangling
    }

    /// Shortest distance from `start` to every node
    ///
    /// Unreachable nodes hold [`Weight::infinity`].
    pub fn compute_all_distances<N, W, G>(&self, graph: &G, start: &N) -> Result<DistanceTable<N, W>>
    where
        N: NodeId,
        W: Weight,
        G: Graph<N, W>,
    {
        let state = self.search(graph, start, None)?;
        Ok(DistanceTable::from_map(state.distances))
    }

    /// Nearest reachable target and its distance, computed from the full distance table
    ///
    /// Equally near targets are resolved in favour of the smallest node.
    pub fn find_nearest_target<N, W, G>(&self, graph: &G, start: &N, targets: &[N]) -> Result<(N, W)>
    where
        N: NodeId,
        W: Weight,
        G: Graph<N, W>,
    {
        let table = self.compute_all_distances(graph, start)?;
        let targets: HashSet<&N> = targets.iter().collect();
        let reached = table
            .reachable()
            .filter(|(node, _)| targets.contains(node));

        nearest(reached).ok_or(Error::NoTargetReachable)
    }

    /// Nearest reachable target, its distance, and the path to it in a single pass
    ///
    /// The search stops as soon as every target has been settled.
    pub fn find_path_to_nearest_target<N, W, G>(
        &self,
        graph: &G,
        start: &N,
        targets: &[N],
    ) -> Result<NearestTarget<N, W>>
    where
        N: NodeId,
        W: Weight,
        G: Graph<N, W>,
    {
        let targets: HashSet<N> = targets.iter().cloned().collect();
        if !graph.has_node(start) {
            return Err(Error::UnknownStartNode(start.to_string()));
        }
        if targets.is_empty() {
            return Err(Error::NoTargetReachable);
        }

        let state = self.search(graph, start, Some(&targets))?;
        let (target, distance) = nearest(state.reached.iter().map(|(node, d)| (node, *d)))
            .ok_or(Error::NoTargetReachable)?;

        let path = match reconstruct_path(&state.predecessors, start, &target) {
            Some(path) if path.first() == Some(start) => path,
            _ => {
                warn!("no valid predecessor chain from {} to {}", start, target);
                return Err(Error::NoTargetReachable);
            }
        };

        Ok(NearestTarget {
            target,
            distance,
            path,
            stats: state.stats,
        })
    }

    /// Runs the relaxation loop, stopping early once all `targets` are settled
    fn search<N, W, G>(
        &self,
        graph: &G,
        start: &N,
        targets: Option<&HashSet<N>>,
    ) -> Result<SearchState<N, W>>
    where
        N: NodeId,
        W: Weight,
        G: Graph<N, W>,
    {
        if !graph.has_node(start) {
            return Err(Error::UnknownStartNode(start.to_string()));
        }
        if self.dangling == DanglingNeighbors::Reject {
            validate_neighbors::<N, W, G>(graph)?;
        }

        let mut distances: HashMap<N, W> = graph
            .nodes()
            .map(|node| (node.clone(), W::infinity()))
            .collect();
        let mut predecessors: HashMap<N, N> = HashMap::new();
        let mut reached: HashMap<N, W> = HashMap::new();
        let mut stats = SearchStats::default();

        distances.insert(start.clone(), W::zero());

        let mut queue = BinaryHeapWrapper::new();
        queue.push(start.clone(), W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            stats.pops += 1;

            // If we've already found a shorter path to u, skip
            if self.skip_stale {
                let best = distances.get(&u).copied().unwrap_or_else(W::infinity);
                if best < dist_u {
                    stats.stale_skipped += 1;
                    continue;
                }
            }

            // The first pop of a node carries its final distance
            if let Some(targets) = targets {
                if targets.contains(&u) && !reached.contains_key(&u) {
                    trace!("settled target {} at {:?}", u, dist_u);
                    reached.insert(u.clone(), dist_u);
                    if reached.len() == targets.len() {
                        break;
                    }
                }
            }

            for (v, weight) in graph.neighbors(&u) {
                let new_dist = dist_u.accumulate(weight);
                let current = distances.get(v).copied().unwrap_or_else(W::infinity);

                if new_dist < current {
                    distances.insert(v.clone(), new_dist);
                    predecessors.insert(v.clone(), u.clone());
                    queue.push(v.clone(), new_dist);
                    stats.relaxations += 1;
                }
            }
        }

        debug!(
            "search from {}: {} pops ({} stale), {} relaxations, {} targets settled, {} left in frontier",
            start,
            stats.pops,
            stats.stale_skipped,
            stats.relaxations,
            reached.len(),
            queue.len()
        );

        Ok(SearchState {
            distances,
            predecessors,
            reached,
            stats,
        })
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Dijkstra
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathTree<N, W>> {
        let state = self.search(graph, source, None)?;
        Ok(ShortestPathTree {
            distances: DistanceTable::from_map(state.distances),
            predecessors: state.predecessors,
            source: source.clone(),
        })
    }
}

/// Smallest distance, ties broken by the smallest node
fn nearest<'a, N, W, I>(candidates: I) -> Option<(N, W)>
where
    N: NodeId + 'a,
    W: Weight,
    I: Iterator<Item = (&'a N, W)>,
{
    candidates
        .min_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        })
        .map(|(node, d)| (node.clone(), d))
}
