use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::graph::traits::{Graph, NodeId, Weight};
use crate::Result;

/// A graph stored as ordered adjacency mappings: node -> (neighbor -> weight)
///
/// Serializes to and from the same nested-object shape, e.g.
/// `{"A": {"B": 5}, "B": {"A": 5}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjacencyGraph<N, W>
where
    N: Ord,
{
    adjacency: BTreeMap<N, BTreeMap<N, W>>,
}

impl<N, W> AdjacencyGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyGraph {
            adjacency: BTreeMap::new(),
        }
    }

    /// Builds a graph from directed `(from, to, weight)` triples
    ///
    /// Both endpoints get an adjacency entry. A repeated edge keeps the last weight.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N, W)>,
    {
        let mut adjacency: BTreeMap<N, BTreeMap<N, W>> = BTreeMap::new();
        for (from, to, weight) in edges {
            adjacency.entry(to.clone()).or_default();
            adjacency.entry(from).or_default().insert(to, weight);
        }
        AdjacencyGraph { adjacency }
    }

    /// Builds a graph where every `(a, b, weight)` pair is stored in both directions
    pub fn undirected<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N, W)>,
    {
        Self::from_edges(
            edges
                .into_iter()
                .flat_map(|(a, b, weight)| [(a.clone(), b.clone(), weight), (b, a, weight)]),
        )
    }

    /// Returns the graph with an extra isolated node
    pub fn with_node(mut self, node: N) -> Self {
        self.adjacency.entry(node).or_default();
        self
    }

    /// Returns the adjacency mapping of a single node
    pub fn adjacency_of(&self, node: &N) -> Option<&BTreeMap<N, W>> {
        self.adjacency.get(node)
    }
}

impl<N, W> AdjacencyGraph<N, W>
where
    N: NodeId + DeserializeOwned,
    W: Weight + DeserializeOwned,
{
    /// Reads a graph from JSON in nested-object form
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads a graph from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }
}

impl<N, W> FromIterator<(N, N, W)> for AdjacencyGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn from_iter<I: IntoIterator<Item = (N, N, W)>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

impl<N, W> From<HashMap<N, HashMap<N, W>>> for AdjacencyGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn from(map: HashMap<N, HashMap<N, W>>) -> Self {
        let adjacency = map
            .into_iter()
            .map(|(node, edges)| (node, edges.into_iter().collect()))
            .collect();
        AdjacencyGraph { adjacency }
    }
}

impl<N, W> Graph<N, W> for AdjacencyGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    fn has_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        Box::new(self.adjacency.keys())
    }

    fn neighbors(&self, node: &N) -> Box<dyn Iterator<Item = (&N, W)> + '_> {
        match self.adjacency.get(node) {
            Some(edges) => Box::new(edges.iter().map(|(neighbor, weight)| (neighbor, *weight))),
            None => Box::new(std::iter::empty()),
        }
    }

    fn edge_weight(&self, from: &N, to: &N) -> Option<W> {
        self.adjacency.get(from).and_then(|edges| edges.get(to)).copied()
    }
}
