//! # Graph Query Contract
//!
//! The visit engines and the SCC finder never look at how a graph is stored.
//! They only ask three read-only questions of it:
//!
//! - which vertices exist ([`Graph::vertices`]),
//! - which edges leave a given vertex ([`Graph::edges`]),
//! - which vertices are directly reachable from a given vertex
//!   ([`DirectedGraph::outbound`], directed graphs only).
//!
//! Every sequence must be finite and come out in the same order for the whole
//! duration of one call. Mutating the graph while a visit is running is not
//! supported.
//!
//! [`AdjacencyGraph`] is a small insertion-ordered store implementing the
//! contract, enough to build fixtures or to drive the algorithms on data that
//! has no graph type of its own.

use std::{fmt::Debug, hash::Hash};

pub mod adjacency;
pub use adjacency::{AdjacencyGraph, Arc, EdgeIndex};

pub mod dot;
pub use dot::DotError;

/// The two ends of an edge as seen from the vertex whose edge list produced it.
///
/// `head` is the vertex being expanded and `tail` is the vertex the edge leads
/// to. For undirected storage the same underlying edge is reported from both
/// sides, with the ends swapped.
pub trait Endpoints<V> {
    fn head(&self) -> V;

    fn tail(&self) -> V;
}

impl<V: Clone> Endpoints<V> for (V, V) {
    fn head(&self) -> V {
        self.0.clone()
    }

    fn tail(&self) -> V {
        self.1.clone()
    }
}

/// Read-only access to a graph, directed or not.
pub trait Graph {
    /// Only identity matters: vertices are compared and hashed, never inspected.
    type Vertex: Clone + Eq + Hash + Debug;
    type Edge: Endpoints<Self::Vertex>;

    /// All vertices, in a stable order.
    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_;

    /// The edges departing `vertex`, in a stable order.
    fn edges(&self, vertex: &Self::Vertex) -> impl Iterator<Item = Self::Edge> + '_;

    /// Whether `vertex` belongs to this graph.
    ///
    /// The provided implementation scans [`Graph::vertices`]; storage with an
    /// index should override it.
    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool {
        self.vertices().any(|v| &v == vertex)
    }

    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }
}

/// A graph whose edges have a direction.
pub trait DirectedGraph: Graph {
    /// Vertices reachable from `vertex` through exactly one edge.
    fn outbound(&self, vertex: &Self::Vertex) -> impl Iterator<Item = Self::Vertex> + '_ {
        self.edges(vertex).map(|e| e.tail())
    }
}

impl<G: Graph> Graph for &G {
    type Vertex = G::Vertex;
    type Edge = G::Edge;

    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_ {
        (**self).vertices()
    }

    fn edges(&self, vertex: &Self::Vertex) -> impl Iterator<Item = Self::Edge> + '_ {
        (**self).edges(vertex)
    }

    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool {
        (**self).contains_vertex(vertex)
    }

    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }
}

impl<G: DirectedGraph> DirectedGraph for &G {
    fn outbound(&self, vertex: &Self::Vertex) -> impl Iterator<Item = Self::Vertex> + '_ {
        (**self).outbound(vertex)
    }
}
