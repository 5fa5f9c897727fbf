use std::{fmt::Debug, hash::Hash};

use ahash::RandomState;
use indexmap::IndexMap;

use super::{DirectedGraph, Endpoints, Graph};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeIndex(pub usize);

impl std::fmt::Display for EdgeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for EdgeIndex {
    fn from(x: usize) -> Self {
        EdgeIndex(x)
    }
}

/// An edge as seen while expanding `head`.
///
/// Undirected edges are reported once from each end; both reports carry the
/// same [`EdgeIndex`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Arc<V> {
    pub id: EdgeIndex,
    pub head: V,
    pub tail: V,
}

impl<V: Clone> Endpoints<V> for Arc<V> {
    fn head(&self) -> V {
        self.head.clone()
    }

    fn tail(&self) -> V {
        self.tail.clone()
    }
}

/// Insertion-ordered adjacency lists.
///
/// Vertices come out of [`Graph::vertices`] in the order they were first
/// added, and the edges of a vertex in the order they were added.
#[derive(Clone, Debug)]
pub struct AdjacencyGraph<V> {
    directed: bool,
    n_edges: usize,
    adjacency: IndexMap<V, Vec<(EdgeIndex, V)>, RandomState>,
}

impl<V: Clone + Eq + Hash + Debug> AdjacencyGraph<V> {
    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    fn new(directed: bool) -> Self {
        AdjacencyGraph {
            directed,
            n_edges: 0,
            adjacency: IndexMap::default(),
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn edge_count(&self) -> usize {
        self.n_edges
    }

    /// Adds `vertex` if it is not present yet. Returns `true` if it was added.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, Vec::new());
        true
    }

    /// Adds an edge from `from` to `to`, adding either vertex if needed.
    ///
    /// Parallel edges and self-loops are kept as given.
    pub fn add_edge(&mut self, from: V, to: V) -> EdgeIndex {
        let id = EdgeIndex(self.n_edges);
        self.n_edges += 1;

        self.adjacency
            .entry(from.clone())
            .or_default()
            .push((id, to.clone()));
        if !self.directed && from != to {
            self.adjacency.entry(to).or_default().push((id, from));
        } else {
            self.add_vertex(to);
        }
        id
    }

    /// Builds a directed graph from `(from, to)` pairs.
    pub fn from_edges(edges: impl IntoIterator<Item = (V, V)>) -> Self {
        let mut graph = Self::directed();
        for (from, to) in edges {
            graph.add_edge(from, to);
        }
        graph
    }

    pub fn neighbors(&self, vertex: &V) -> impl Iterator<Item = &V> + '_ {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flat_map(|adj| adj.iter().map(|(_, w)| w))
    }
}

impl<V: Clone + Eq + Hash + Debug> Graph for AdjacencyGraph<V> {
    type Vertex = V;
    type Edge = Arc<V>;

    fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.adjacency.keys().cloned()
    }

    fn edges(&self, vertex: &V) -> impl Iterator<Item = Arc<V>> + '_ {
        let head = vertex.clone();
        self.adjacency
            .get(vertex)
            .into_iter()
            .flat_map(move |adj| {
                let head = head.clone();
                adj.iter().map(move |(id, tail)| Arc {
                    id: *id,
                    head: head.clone(),
                    tail: tail.clone(),
                })
            })
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }
}

impl<V: Clone + Eq + Hash + Debug> DirectedGraph for AdjacencyGraph<V> {
    fn outbound(&self, vertex: &V) -> impl Iterator<Item = V> + '_ {
        self.neighbors(vertex).cloned()
    }
}
