use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Heap entry ordered by priority, then by vertex
///
/// Priorities only need `PartialOrd`; incomparable priorities (NaN) fall back
/// to the vertex ordering so the heap stays consistent.
#[derive(Debug, Clone)]
struct Entry<V, P> {
    priority: P,
    vertex: V,
}

impl<V, P> PartialEq for Entry<V, P>
where
    V: Ord,
    P: PartialOrd,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V, P> Eq for Entry<V, P>
where
    V: Ord,
    P: PartialOrd,
{
}

impl<V, P> PartialOrd for Entry<V, P>
where
    V: Ord,
    P: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, P> Ord for Entry<V, P>
where
    V: Ord,
    P: PartialOrd,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .partial_cmp(&other.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// A min-priority queue over `BinaryHeap` for shortest path frontiers
///
/// The queue may hold several entries for the same vertex; callers decide
/// which ones are stale. Equal priorities pop in ascending vertex order.
#[derive(Debug)]
pub struct BinaryHeapWrapper<V, P>
where
    V: Clone + Ord + Debug,
    P: PartialOrd + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<Entry<V, P>>>,
}

impl<V, P> BinaryHeapWrapper<V, P>
where
    V: Clone + Ord + Debug,
    P: PartialOrd + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        BinaryHeapWrapper {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries in the priority queue, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a vertex with the given priority
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse(Entry { priority, vertex }));
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap
            .pop()
            .map(|Reverse(Entry { priority, vertex })| (vertex, priority))
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<(&V, P)> {
        self.heap
            .peek()
            .map(|Reverse(entry)| (&entry.vertex, entry.priority))
    }
}

impl<V, P> Default for BinaryHeapWrapper<V, P>
where
    V: Clone + Ord + Debug,
    P: PartialOrd + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
