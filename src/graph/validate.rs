use crate::graph::traits::{Graph, NodeId, Weight};
use crate::{Error, Result};

/// Collects the nodes of a graph in a stable order
fn sorted_nodes<N, W, G>(graph: &G) -> Vec<&N>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    let mut nodes: Vec<&N> = graph.nodes().collect();
    nodes.sort();
    nodes
}

/// Fails with [`Error::NegativeWeight`] on the first negative edge, in node order
pub fn validate_weights<N, W, G>(graph: &G) -> Result<()>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    for node in sorted_nodes::<N, W, G>(graph) {
        let mut edges: Vec<(&N, W)> = graph.neighbors(node).collect();
        edges.sort_by(|a, b| a.0.cmp(b.0));
        if let Some((neighbor, _)) = edges.into_iter().find(|(_, weight)| *weight < W::zero()) {
            return Err(Error::NegativeWeight {
                from: node.to_string(),
                to: neighbor.to_string(),
            });
        }
    }
    Ok(())
}

/// Returns the first edge, in node order, that points at a node without an adjacency entry
pub fn find_dangling<'g, N, W, G>(graph: &'g G) -> Option<(&'g N, &'g N)>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    sorted_nodes::<N, W, G>(graph).into_iter().find_map(|node| {
        graph
            .neighbors(node)
            .map(|(neighbor, _)| neighbor)
            .filter(|neighbor| !graph.has_node(neighbor))
            .min()
            .map(|neighbor| (node, neighbor))
    })
}

/// Fails with [`Error::MalformedGraph`] if any edge points at an unknown node
pub fn validate_neighbors<N, W, G>(graph: &G) -> Result<()>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    match find_dangling::<N, W, G>(graph) {
        Some((node, neighbor)) => Err(Error::MalformedGraph {
            node: node.to_string(),
            neighbor: neighbor.to_string(),
        }),
        None => Ok(()),
    }
}

/// Checks that all weights are non-negative and all neighbors are known nodes
pub fn validate<N, W, G>(graph: &G) -> Result<()>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    validate_weights::<N, W, G>(graph)?;
    validate_neighbors::<N, W, G>(graph)
}
