use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::adjacency::AdjacencyGraph;
use crate::graph::traits::Weight;

/// Generates a connected undirected graph on nodes `0..n`
///
/// A random spanning chain guarantees connectivity; `extra_edges` further
/// edges are placed uniformly at random. Weights are drawn from `1..=max_weight`.
/// The same seed always yields the same graph.
pub fn generate_connected<W>(
    n: usize,
    extra_edges: usize,
    max_weight: u32,
    seed: u64,
) -> AdjacencyGraph<usize, W>
where
    W: Weight + From<u32>,
{
    assert!(n > 0, "n must be positive");
    assert!(max_weight > 0, "max_weight must be positive");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(n + extra_edges);

    // Attach every vertex to some earlier one
    for v in 1..n {
        let u = rng.gen_range(0..v);
        edges.push((u, v, W::from(rng.gen_range(1..=max_weight))));
    }

    for _ in 0..extra_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops
        if u != v {
            edges.push((u, v, W::from(rng.gen_range(1..=max_weight))));
        }
    }

    AdjacencyGraph::undirected(edges).with_node(0)
}

/// Generates a `width` x `height` grid with unit-weight 4-neighbour edges
///
/// Node `y * width + x` sits at column `x`, row `y`.
pub fn generate_grid<W>(width: usize, height: usize) -> AdjacencyGraph<usize, W>
where
    W: Weight + From<u32>,
{
    let mut edges = Vec::new();
    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                edges.push((vertex, vertex + 1, W::from(1u32)));
            }
            if y + 1 < height {
                edges.push((vertex, vertex + width, W::from(1u32)));
            }
        }
    }

    let mut graph = AdjacencyGraph::undirected(edges);
    if width * height == 1 {
        graph = graph.with_node(0);
    }
    graph
}
