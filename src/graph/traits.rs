use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use num_traits::Zero;
use ordered_float::OrderedFloat;

/// Identifier of a node in a graph
///
/// Ordering is used to break ties deterministically between equally distant
/// nodes, both in the frontier and when choosing the nearest target.
pub trait NodeId: Clone + Eq + Hash + Ord + Debug + Display {}

impl<T> NodeId for T where T: Clone + Eq + Hash + Ord + Debug + Display {}

/// Numeric edge weight
///
/// Weights are expected to be non-negative. The search never checks this;
/// use [`crate::graph::validate`] on untrusted input.
pub trait Weight: Copy + Debug + PartialOrd + Zero {
    /// Sentinel larger than any achievable path length
    fn infinity() -> Self;

    /// Extends a path length by one edge weight
    fn accumulate(self, edge: Self) -> Self;

    /// Returns true if this value is the unreachable sentinel
    fn is_infinite(&self) -> bool {
        *self >= Self::infinity()
    }
}

// Integer sums saturate at MAX, which is also the sentinel, so an overflowing
// path never compares as shorter than an existing one.
macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn infinity() -> Self {
                    <$t>::MAX
                }

                fn accumulate(self, edge: Self) -> Self {
                    self.saturating_add(edge)
                }
            }
        )*
    };
}

macro_rules! float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn infinity() -> Self {
                    <$t>::INFINITY
                }

                fn accumulate(self, edge: Self) -> Self {
                    self + edge
                }
            }

            impl Weight for OrderedFloat<$t> {
                fn infinity() -> Self {
                    OrderedFloat(<$t>::INFINITY)
                }

                fn accumulate(self, edge: Self) -> Self {
                    self + edge
                }
            }
        )*
    };
}

integer_weight!(u32, u64, usize, i32, i64);
float_weight!(f32, f64);

/// Trait representing a weighted graph stored as adjacency mappings
///
/// Edges are directed at this level: an edge `a -> b` says nothing about
/// `b -> a`. Undirected graphs simply store both directions.
pub trait Graph<N, W>: Debug
where
    N: NodeId,
    W: Weight,
{
    /// Returns the number of nodes that have an adjacency entry
    fn node_count(&self) -> usize;

    /// Returns the number of directed edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns true if the node has an adjacency entry
    fn has_node(&self, node: &N) -> bool;

    /// Returns an iterator over all nodes with an adjacency entry
    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_>;

    /// Returns an iterator over the outgoing edges of a node
    ///
    /// Nodes without an adjacency entry have no outgoing edges.
    fn neighbors(&self, node: &N) -> Box<dyn Iterator<Item = (&N, W)> + '_>;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: &N, to: &N) -> Option<W>;

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, from: &N, to: &N) -> bool {
        self.edge_weight(from, to).is_some()
    }
}

impl<N, W> Graph<N, W> for HashMap<N, HashMap<N, W>>
where
    N: NodeId,
    W: Weight,
{
    fn node_count(&self) -> usize {
        self.len()
    }

    fn edge_count(&self) -> usize {
        self.values().map(|edges| edges.len()).sum()
    }

    fn has_node(&self, node: &N) -> bool {
        self.contains_key(node)
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        Box::new(self.keys())
    }

    fn neighbors(&self, node: &N) -> Box<dyn Iterator<Item = (&N, W)> + '_> {
        match self.get(node) {
            Some(edges) => Box::new(edges.iter().map(|(neighbor, weight)| (neighbor, *weight))),
            None => Box::new(std::iter::empty()),
        }
    }

    fn edge_weight(&self, from: &N, to: &N) -> Option<W> {
        self.get(from).and_then(|edges| edges.get(to)).copied()
    }
}
