//! # Breadth-First and Depth-First Visits
//!
//! Both strategies expand every vertex reachable from a source exactly once and
//! report what they do to a [`VisitHandler`]. The handler observes the visit
//! through its hooks and can stop it early by returning `true` from any of them.
//!
//! ## Hook order
//!
//! For one call the engine invokes, in order:
//!
//! 1. [`VisitHandler::discover_graph`]
//! 2. for each vertex `v` taken off the frontier:
//!    - [`VisitHandler::discover_vertex`]`(v)`
//!    - for each edge `e` of `v` whose far end `w` was not seen before:
//!      [`VisitHandler::discover_edge`]`(e)`, `w` enters the frontier,
//!      [`VisitHandler::finish_edge`]`(e)`
//!    - [`VisitHandler::finish_vertex`]`(v)`
//! 3. [`VisitHandler::finish_graph`]
//! 4. [`VisitHandler::on_completed`], whose value is returned to the caller
//!
//! The frontier is a FIFO queue for [`breadth_first_search`] and a LIFO stack for
//! [`depth_first_search`]. A vertex enters the frontier at most once.
//!
//! ## Halting
//!
//! As soon as a hook returns `true` no further vertex or edge hook fires, not even
//! `finish_vertex` for the vertex being expanded. `finish_graph` and
//! `on_completed` still run exactly once so the handler can finalize its result.
//!
//! ## Example
//!
//! ```rust
//! use graphvisit::graph::AdjacencyGraph;
//! use graphvisit::visit::{breadth_first_search_with, handlers::DiscoveryOrder};
//!
//! let graph = AdjacencyGraph::from_edges([("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")]);
//! let order = breadth_first_search_with(&graph, &"a", &mut DiscoveryOrder::new()).unwrap();
//! assert_eq!(order, vec!["a", "b", "c", "d"]);
//! ```

use thiserror::Error;

use crate::graph::Graph;

mod engine;

pub mod breadth_first;
pub use breadth_first::{breadth_first_search, breadth_first_search_with};

pub mod depth_first;
pub use depth_first::{depth_first_search, depth_first_search_with};

pub mod handlers;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VisitError {
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

/// Observer of a visit.
///
/// Every boolean hook answers the question "should the visit stop now?". The
/// provided implementations never stop, so a handler overrides only the hooks it
/// cares about.
///
/// Hooks run synchronously on the caller's thread. A hook that panics unwinds
/// through the engine unchanged. Handlers that need to report a failure can
/// record it, return `true` and hand it back through [`VisitHandler::Output`].
pub trait VisitHandler<G: Graph + ?Sized> {
    type Output;

    fn discover_graph(&mut self, _graph: &G) -> bool {
        false
    }

    fn discover_vertex(&mut self, _vertex: &G::Vertex) -> bool {
        false
    }

    fn discover_edge(&mut self, _edge: &G::Edge) -> bool {
        false
    }

    fn finish_edge(&mut self, _edge: &G::Edge) -> bool {
        false
    }

    fn finish_vertex(&mut self, _vertex: &G::Vertex) -> bool {
        false
    }

    fn finish_graph(&mut self, _graph: &G) -> bool {
        false
    }

    /// Called once, after the visit exhausted the graph or was halted.
    fn on_completed(&mut self) -> Self::Output;
}

/// Handler that observes nothing and never halts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopHandler;

impl<G: Graph + ?Sized> VisitHandler<G> for NoopHandler {
    type Output = ();

    fn on_completed(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
}

/// Runs the visit selected by `strategy`.
pub fn visit<G, H>(
    graph: &G,
    source: &G::Vertex,
    strategy: Strategy,
    handler: &mut H,
) -> Result<H::Output, VisitError>
where
    G: Graph,
    H: VisitHandler<G>,
{
    match strategy {
        Strategy::BreadthFirst => breadth_first_search_with(graph, source, handler),
        Strategy::DepthFirst => depth_first_search_with(graph, source, handler),
    }
}
