use super::{engine, NoopHandler, Strategy, VisitError, VisitHandler};
use crate::graph::Graph;

/// Visits every vertex reachable from `source` depth-first, with an explicit stack.
///
/// The visit always descends along the most recently pushed branch. A vertex is
/// pushed when it is first seen, so siblings already on the stack keep their
/// place and the order differs from a recursive pre-order.
pub fn depth_first_search<G: Graph>(graph: &G, source: &G::Vertex) -> Result<(), VisitError> {
    depth_first_search_with(graph, source, &mut NoopHandler)
}

/// Like [`depth_first_search`], reporting to `handler` and returning its
/// [`VisitHandler::on_completed`] value.
///
/// # Errors
///
/// [`VisitError::InvalidArgument`] if `source` is not a vertex of `graph`.
pub fn depth_first_search_with<G, H>(
    graph: &G,
    source: &G::Vertex,
    handler: &mut H,
) -> Result<H::Output, VisitError>
where
    G: Graph,
    H: VisitHandler<G>,
{
    engine::run::<G, H, Vec<G::Vertex>>(graph, source, handler, Strategy::DepthFirst)
}
