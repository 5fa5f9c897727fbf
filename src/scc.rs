//! # Strongly Connected Components
//!
//! A strongly connected component is a maximal set of vertices in which every
//! vertex can reach every other one. The components of a directed graph
//! partition its vertices; collapsing each component to a single node leaves a
//! directed acyclic graph, the condensation.
//!
//! [`strongly_connected_components`] runs Tarjan's algorithm in a single
//! depth-first pass and returns the components in a topological order of the
//! condensation: if some vertex of component `i` has an edge into component
//! `j != i`, then `i < j`.
//!
//! The depth-first descent keeps its own call stack, so arbitrarily long paths
//! do not exhaust the thread's stack.

use std::hash::Hash;

use ahash::RandomState;
use indexmap::IndexSet;

use crate::graph::DirectedGraph;

mod tarjan;

/// The components of a graph, in topological order of its condensation.
///
/// Within a component, vertices are listed in the order the search first
/// reached them.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "V: serde::Serialize + Eq + Hash",
        deserialize = "V: serde::Deserialize<'de> + Eq + Hash"
    ))
)]
pub struct Components<V> {
    components: Vec<IndexSet<V, RandomState>>,
}

impl<V: Eq + Hash> Components<V> {
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Total number of vertices over all components.
    pub fn vertex_count(&self) -> usize {
        self.components.iter().map(IndexSet::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndexSet<V, RandomState>> + '_ {
        self.components.iter()
    }

    /// Position of the component holding `vertex`.
    pub fn component_of(&self, vertex: &V) -> Option<usize> {
        self.components.iter().position(|c| c.contains(vertex))
    }

    /// Components with more than one vertex.
    pub fn nontrivial(&self) -> impl Iterator<Item = &IndexSet<V, RandomState>> + '_ {
        self.components.iter().filter(|c| c.len() > 1)
    }

    pub fn into_vec(self) -> Vec<IndexSet<V, RandomState>> {
        self.components
    }
}

/// Two partitions are equal when they list the same components in the same
/// order; the order of vertices inside a component does not matter.
impl<V: Eq + Hash> PartialEq for Components<V> {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}

impl<V: Eq + Hash> Eq for Components<V> {}

impl<V> std::ops::Index<usize> for Components<V> {
    type Output = IndexSet<V, RandomState>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

impl<V> IntoIterator for Components<V> {
    type Item = IndexSet<V, RandomState>;
    type IntoIter = std::vec::IntoIter<IndexSet<V, RandomState>>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.into_iter()
    }
}

/// Partitions the vertices of `graph` into strongly connected components.
///
/// Every vertex listed by [`crate::graph::Graph::vertices`] lands in exactly one
/// component. A vertex that lies on no cycle forms a component of its own.
pub fn strongly_connected_components<G: DirectedGraph>(graph: &G) -> Components<G::Vertex> {
    let mut components = tarjan::TarjanState::new(graph).run();
    components.reverse();
    Components { components }
}

/// Whether `graph` has a directed cycle: a component with at least two vertices
/// or a vertex with an edge to itself.
pub fn has_cycle<G: DirectedGraph>(graph: &G) -> bool {
    strongly_connected_components(graph).iter().any(|c| match c.len() {
        1 => c
            .iter()
            .any(|v| graph.outbound(v).any(|w| &w == v)),
        n => n > 1,
    })
}

/// Same as [`has_cycle`].
pub fn has_strongly_connected_component<G: DirectedGraph>(graph: &G) -> bool {
    has_cycle(graph)
}

#[cfg(test)]
mod tests;
