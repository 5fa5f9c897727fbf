//! Ready-made [`VisitHandler`]s.

use crate::graph::{Endpoints, Graph};

use super::VisitHandler;

/// Collects vertices as they are finished.
///
/// A vertex is finished once all its edges have been examined, so the result is
/// the set of vertices the visit fully expanded, in finishing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TouchedVertices<V> {
    touched: Vec<V>,
}

impl<V> TouchedVertices<V> {
    pub fn new() -> Self {
        TouchedVertices {
            touched: Vec::new(),
        }
    }
}

impl<V> Default for TouchedVertices<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G, V> VisitHandler<G> for TouchedVertices<V>
where
    G: Graph<Vertex = V> + ?Sized,
    V: Clone,
{
    type Output = Vec<V>;

    fn finish_vertex(&mut self, vertex: &V) -> bool {
        self.touched.push(vertex.clone());
        false
    }

    fn on_completed(&mut self) -> Vec<V> {
        std::mem::take(&mut self.touched)
    }
}

/// Records vertices in the order they are discovered, optionally halting once
/// `limit` vertices have been seen. A limit of zero halts before the source is
/// discovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryOrder<V> {
    order: Vec<V>,
    limit: Option<usize>,
}

impl<V> DiscoveryOrder<V> {
    pub fn new() -> Self {
        DiscoveryOrder {
            order: Vec::new(),
            limit: None,
        }
    }

    pub fn with_limit(limit: usize) -> Self {
        DiscoveryOrder {
            order: Vec::new(),
            limit: Some(limit),
        }
    }
}

impl<V> Default for DiscoveryOrder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G, V> VisitHandler<G> for DiscoveryOrder<V>
where
    G: Graph<Vertex = V> + ?Sized,
    V: Clone,
{
    type Output = Vec<V>;

    fn discover_graph(&mut self, _graph: &G) -> bool {
        self.limit == Some(0)
    }

    fn discover_vertex(&mut self, vertex: &V) -> bool {
        self.order.push(vertex.clone());
        self.limit.is_some_and(|limit| self.order.len() >= limit)
    }

    fn on_completed(&mut self) -> Vec<V> {
        std::mem::take(&mut self.order)
    }
}

/// One hook invocation, as recorded by [`VisitLog`]. Edges are logged by their
/// `(head, tail)` ends.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisitEvent<V> {
    DiscoverGraph,
    DiscoverVertex(V),
    DiscoverEdge(V, V),
    FinishEdge(V, V),
    FinishVertex(V),
    FinishGraph,
}

/// Records every hook invocation in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitLog<V> {
    events: Vec<VisitEvent<V>>,
}

impl<V> VisitLog<V> {
    pub fn new() -> Self {
        VisitLog { events: Vec::new() }
    }
}

impl<V> Default for VisitLog<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G, V> VisitHandler<G> for VisitLog<V>
where
    G: Graph<Vertex = V> + ?Sized,
    V: Clone,
{
    type Output = Vec<VisitEvent<V>>;

    fn discover_graph(&mut self, _graph: &G) -> bool {
        self.events.push(VisitEvent::DiscoverGraph);
        false
    }

    fn discover_vertex(&mut self, vertex: &V) -> bool {
        self.events.push(VisitEvent::DiscoverVertex(vertex.clone()));
        false
    }

    fn discover_edge(&mut self, edge: &G::Edge) -> bool {
        self.events
            .push(VisitEvent::DiscoverEdge(edge.head(), edge.tail()));
        false
    }

    fn finish_edge(&mut self, edge: &G::Edge) -> bool {
        self.events.push(VisitEvent::FinishEdge(edge.head(), edge.tail()));
        false
    }

    fn finish_vertex(&mut self, vertex: &V) -> bool {
        self.events.push(VisitEvent::FinishVertex(vertex.clone()));
        false
    }

    fn finish_graph(&mut self, _graph: &G) -> bool {
        self.events.push(VisitEvent::FinishGraph);
        false
    }

    fn on_completed(&mut self) -> Vec<VisitEvent<V>> {
        std::mem::take(&mut self.events)
    }
}
