//! # graphvisit
//!
//! Graph visits and strongly connected components over any graph that can
//! answer a few read-only questions about itself.
//!
//! - [`graph`]: the query contract ([`graph::Graph`], [`graph::DirectedGraph`])
//!   and a small insertion-ordered [`graph::AdjacencyGraph`], loadable from DOT.
//! - [`visit`]: breadth-first and depth-first visits reporting to a
//!   [`visit::VisitHandler`], which may stop the visit early and produces the
//!   call's result.
//! - [`scc`]: Tarjan's strongly connected components and cycle detection.
//! - [`connectivity`]: connected components built on top of the visits.
//!
//! All state lives for the duration of a single call; nothing is shared
//! between calls, so independent graphs can be processed from different
//! threads freely.

pub mod connectivity;
pub mod graph;
pub mod scc;
pub mod visit;

pub use scc::{has_cycle, strongly_connected_components, Components};
pub use visit::{
    breadth_first_search, breadth_first_search_with, depth_first_search,
    depth_first_search_with, NoopHandler, Strategy, VisitError, VisitHandler,
};
