//! The frontier-driven loop shared by both visit strategies.

use std::collections::VecDeque;

use ahash::{HashSet, HashSetExt};
use tracing::{debug, trace};

use super::{Strategy, VisitError, VisitHandler};
use crate::graph::{Endpoints, Graph};

/// Work list of discovered but not yet expanded vertices.
pub(super) trait Frontier<V> {
    fn with_source(source: V) -> Self;

    fn put(&mut self, vertex: V);

    fn take(&mut self) -> Option<V>;
}

/// First in, first out.
impl<V> Frontier<V> for VecDeque<V> {
    fn with_source(source: V) -> Self {
        VecDeque::from([source])
    }

    fn put(&mut self, vertex: V) {
        self.push_back(vertex);
    }

    fn take(&mut self) -> Option<V> {
        self.pop_front()
    }
}

/// Last in, first out.
impl<V> Frontier<V> for Vec<V> {
    fn with_source(source: V) -> Self {
        vec![source]
    }

    fn put(&mut self, vertex: V) {
        self.push(vertex);
    }

    fn take(&mut self) -> Option<V> {
        self.pop()
    }
}

struct Progress {
    expanded: usize,
    halted: bool,
}

pub(super) fn run<G, H, F>(
    graph: &G,
    source: &G::Vertex,
    handler: &mut H,
    strategy: Strategy,
) -> Result<H::Output, VisitError>
where
    G: Graph,
    H: VisitHandler<G>,
    F: Frontier<G::Vertex>,
{
    if !graph.contains_vertex(source) {
        return Err(VisitError::InvalidArgument {
            reason: format!("source {source:?} is not a vertex of the graph"),
        });
    }

    debug!(?strategy, ?source, "starting visit");
    let progress = expand::<G, H, F>(graph, source, handler);
    handler.finish_graph(graph);
    debug!(
        ?strategy,
        expanded = progress.expanded,
        halted = progress.halted,
        "visit finished"
    );

    Ok(handler.on_completed())
}

fn expand<G, H, F>(graph: &G, source: &G::Vertex, handler: &mut H) -> Progress
where
    G: Graph,
    H: VisitHandler<G>,
    F: Frontier<G::Vertex>,
{
    let mut progress = Progress {
        expanded: 0,
        halted: true,
    };

    if handler.discover_graph(graph) {
        return progress;
    }

    let mut frontier = F::with_source(source.clone());
    let mut visited = HashSet::new();
    visited.insert(source.clone());

    while let Some(vertex) = frontier.take() {
        trace!(?vertex, "expanding");
        progress.expanded += 1;
        if handler.discover_vertex(&vertex) {
            return progress;
        }

        for edge in graph.edges(&vertex) {
            let next = edge.tail();
            if !visited.insert(next.clone()) {
                continue;
            }
            if handler.discover_edge(&edge) {
                return progress;
            }
            frontier.put(next);
            if handler.finish_edge(&edge) {
                return progress;
            }
        }

        if handler.finish_vertex(&vertex) {
            return progress;
        }
    }

    progress.halted = false;
    progress
}
