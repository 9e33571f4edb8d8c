//! Small named graphs used by the harnesses, tests and benchmarks

use crate::graph::adjacency::AdjacencyGraph;
use crate::graph::traits::Weight;

fn build<W>(edges: &[(&str, &str, u8)]) -> AdjacencyGraph<String, W>
where
    W: Weight + From<u8>,
{
    AdjacencyGraph::undirected(
        edges
            .iter()
            .map(|&(a, b, weight)| (a.to_string(), b.to_string(), W::from(weight))),
    )
}

/// Four nodes where the direct edge is never the shortest route
///
/// `A-B 1, A-C 4, B-C 2, B-D 5, C-D 1`
pub fn diamond<W>() -> AdjacencyGraph<String, W>
where
    W: Weight + From<u8>,
{
    build(&[
        ("A", "B", 1),
        ("A", "C", 4),
        ("B", "C", 2),
        ("B", "D", 5),
        ("C", "D", 1),
    ])
}

/// Eleven-node road network: a small mesh around `B`/`E` and a chain `H-I-J-K`
pub fn reference_network<W>() -> AdjacencyGraph<String, W>
where
    W: Weight + From<u8>,
{
    build(&[
        ("A", "B", 5),
        ("B", "C", 3),
        ("B", "D", 4),
        ("B", "E", 6),
        ("C", "E", 2),
        ("D", "F", 4),
        ("E", "F", 3),
        ("E", "G", 7),
        ("E", "H", 5),
        ("H", "I", 4),
        ("I", "J", 6),
        ("J", "K", 5),
    ])
}

/// Default targets for [`reference_network`]
pub fn reference_targets() -> Vec<String> {
    ["G", "H", "I", "J", "K"].iter().map(|s| s.to_string()).collect()
}
