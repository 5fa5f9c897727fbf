//! Connected components by repeated breadth-first visits.
//!
//! Each visit starts from the first vertex, in [`Graph::vertices`] order, that
//! no earlier visit has touched, and collects everything it reaches with a
//! [`TouchedVertices`] handler. On an undirected graph this yields the connected
//! components. On a directed graph a later seed may reach vertices an earlier
//! visit already took; those stay with the earlier component, so the result is
//! still a partition but depends on the vertex order.

use ahash::{HashSet, HashSetExt};
use tracing::{debug, warn};

use crate::{
    graph::Graph,
    visit::{breadth_first_search_with, handlers::TouchedVertices, VisitHandler},
};

/// [`TouchedVertices`] that leaves out vertices claimed by an earlier component.
struct Unclaimed<'a, V> {
    claimed: &'a HashSet<V>,
    touched: TouchedVertices<V>,
}

impl<G, V> VisitHandler<G> for Unclaimed<'_, V>
where
    G: Graph<Vertex = V>,
    V: Clone + Eq + std::hash::Hash,
{
    type Output = Vec<V>;

    fn finish_vertex(&mut self, vertex: &V) -> bool {
        if !self.claimed.contains(vertex) {
            <TouchedVertices<V> as VisitHandler<G>>::finish_vertex(&mut self.touched, vertex);
        }
        false
    }

    fn on_completed(&mut self) -> Vec<V> {
        <TouchedVertices<V> as VisitHandler<G>>::on_completed(&mut self.touched)
    }
}

/// Partitions the vertices of `graph` into connected components, in the order
/// of their first vertex.
pub fn connected_components<G: Graph>(graph: &G) -> Vec<Vec<G::Vertex>> {
    let mut claimed = HashSet::new();
    let mut components = Vec::new();

    for seed in graph.vertices() {
        if claimed.contains(&seed) {
            continue;
        }
        let visited = breadth_first_search_with(
            graph,
            &seed,
            &mut Unclaimed {
                claimed: &claimed,
                touched: TouchedVertices::new(),
            },
        );
        let component = match visited {
            Ok(component) => component,
            Err(err) => {
                warn!(?seed, %err, "seed listed by vertices() was rejected, leaving it out");
                continue;
            }
        };
        claimed.extend(component.iter().cloned());
        components.push(component);
    }

    debug!(components = components.len(), "connected components found");
    components
}

/// Whether every vertex can be reached from the first one. The empty graph is
/// connected.
pub fn is_connected<G: Graph>(graph: &G) -> bool {
    connected_components(graph).len() <= 1
}

#[cfg(test)]
mod test {
    use super::{connected_components, is_connected};
    use crate::{
        dot,
        graph::{AdjacencyGraph, Arc, Graph},
    };

    /// Lists every vertex but refuses `hidden` as a visit source.
    struct Inconsistent {
        graph: AdjacencyGraph<u8>,
        hidden: u8,
    }

    impl Graph for Inconsistent {
        type Vertex = u8;
        type Edge = Arc<u8>;

        fn vertices(&self) -> impl Iterator<Item = u8> + '_ {
            self.graph.vertices()
        }

        fn edges(&self, vertex: &u8) -> impl Iterator<Item = Arc<u8>> + '_ {
            self.graph.edges(vertex)
        }

        fn contains_vertex(&self, vertex: &u8) -> bool {
            *vertex != self.hidden && self.graph.contains_vertex(vertex)
        }
    }

    #[test]
    fn undirected_components() {
        let graph =
            AdjacencyGraph::from_dot("graph { a -- b; c -- d; d -- e; f }").unwrap();

        let components = connected_components(&graph);

        assert_eq!(
            components,
            vec![vec!["a", "b"], vec!["c", "d", "e"], vec!["f"]]
        );
        assert!(!is_connected(&graph));
    }

    #[test]
    fn directed_seeds_do_not_steal_claimed_vertices() {
        let graph = dot!(digraph { a -> b; c -> b; c -> d }).unwrap();

        let components = connected_components(&graph);

        assert_eq!(components, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn single_component_and_empty_graph_are_connected() {
        let cycle = AdjacencyGraph::from_edges([(1, 2), (2, 3), (3, 1)]);
        let empty: AdjacencyGraph<u8> = AdjacencyGraph::undirected();

        assert!(is_connected(&cycle));
        assert!(is_connected(&empty));
    }

    #[test]
    fn rejected_seed_is_left_out() {
        let mut graph = AdjacencyGraph::undirected();
        graph.add_edge(1, 2);
        graph.add_vertex(3);
        graph.add_edge(4, 5);

        let components = connected_components(&Inconsistent { graph, hidden: 3 });

        assert_eq!(components, vec![vec![1, 2], vec![4, 5]]);
    }
}
