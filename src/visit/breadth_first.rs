use std::collections::VecDeque;

use super::{engine, NoopHandler, Strategy, VisitError, VisitHandler};
use crate::graph::Graph;

/// Visits every vertex reachable from `source` in breadth-first order.
///
/// Vertices are discovered in non-decreasing edge-count distance from
/// `source`: all vertices at distance `k` come before any at distance `k + 1`.
pub fn breadth_first_search<G: Graph>(graph: &G, source: &G::Vertex) -> Result<(), VisitError> {
    breadth_first_search_with(graph, source, &mut NoopHandler)
}

/// Like [`breadth_first_search`], reporting to `handler` and returning its
/// [`VisitHandler::on_completed`] value.
///
/// # Errors
///
/// [`VisitError::InvalidArgument`] if `source` is not a vertex of `graph`. No
/// hook has been called in that case.
pub fn breadth_first_search_with<G, H>(
    graph: &G,
    source: &G::Vertex,
    handler: &mut H,
) -> Result<H::Output, VisitError>
where
    G: Graph,
    H: VisitHandler<G>,
{
    engine::run::<G, H, VecDeque<G::Vertex>>(graph, source, handler, Strategy::BreadthFirst)
}
