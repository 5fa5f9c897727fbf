use ahash::{HashSet, HashSetExt};
use itertools::Itertools;
use proptest::prelude::*;

use super::{has_cycle, has_strongly_connected_component, strongly_connected_components};
use crate::{
    dot,
    graph::{AdjacencyGraph, Graph},
};

/// Components as sorted vertex lists, keeping the component order.
fn sorted<V: Ord + Clone + Eq + std::hash::Hash>(components: super::Components<V>) -> Vec<Vec<V>> {
    components
        .into_iter()
        .map(|c| c.into_iter().sorted().collect())
        .collect()
}

#[test]
fn three_cycle_is_one_component() {
    let graph = dot!(digraph { a -> b; b -> c; c -> a }).unwrap();

    let components = strongly_connected_components(&graph);

    assert_eq!(sorted(components), vec![vec!["a", "b", "c"]]);
    assert!(has_cycle(&graph));
}

#[test]
fn path_is_all_singletons_in_topological_order() {
    let graph = dot!(digraph { a -> b; b -> c }).unwrap();

    let components = strongly_connected_components(&graph);

    assert_eq!(sorted(components), vec![vec!["a"], vec!["b"], vec!["c"]]);
    assert!(!has_cycle(&graph));
    assert!(!has_strongly_connected_component(&graph));
}

#[test]
fn self_loop_is_a_cycle_but_stays_a_singleton() {
    let graph = dot!(digraph { a -> b; b -> b }).unwrap();

    let components = strongly_connected_components(&graph);

    assert_eq!(components.len(), 2);
    assert!(components.nontrivial().next().is_none());
    assert!(has_cycle(&graph));
}

#[test]
fn condensation_order_and_membership() {
    let graph = dot!(
        digraph {
            a -> b; b -> a;
            b -> c;
            c -> d; d -> e; e -> c;
            e -> f;
            g -> c;
            h
        }
    )
    .unwrap();

    let components = strongly_connected_components(&graph);

    assert_eq!(components.vertex_count(), graph.vertex_count());
    let of = |name: &str| components.component_of(&name.to_string()).unwrap();
    assert_eq!(of("a"), of("b"));
    assert_eq!(of("c"), of("d"));
    assert_eq!(of("c"), of("e"));
    assert!(of("a") < of("c"));
    assert!(of("g") < of("c"));
    assert!(of("c") < of("f"));
    assert_eq!(components[of("h")].len(), 1);
    assert_eq!(components.nontrivial().count(), 2);
    assert_eq!(components.component_of(&"z".to_string()), None);
}

#[test]
fn component_lists_vertices_in_discovery_order() {
    let graph = dot!(digraph { a -> c; c -> b; b -> a }).unwrap();

    let components = strongly_connected_components(&graph).into_vec();

    assert_eq!(components.len(), 1);
    insta::assert_snapshot!(components[0].iter().join(" "), @"a c b");
}

#[test]
fn empty_graph_has_no_components() {
    let graph: AdjacencyGraph<u32> = AdjacencyGraph::directed();

    let components = strongly_connected_components(&graph);

    assert!(components.is_empty());
    assert!(!has_cycle(&graph));
}

#[test]
fn calls_are_independent() {
    let graph = dot!(digraph { a -> b; b -> a; c }).unwrap();

    let first = strongly_connected_components(&graph);
    let second = strongly_connected_components(&graph);

    assert_eq!(first, second);
}

#[test]
fn long_cycle_does_not_recurse() {
    let n = 300_000u32;
    let graph = AdjacencyGraph::from_edges((0..n).map(|i| (i, (i + 1) % n)));

    let components = strongly_connected_components(&graph);

    assert_eq!(components.len(), 1);
    assert_eq!(components[0].len(), n as usize);
}

#[test]
fn long_chain_is_topologically_ordered() {
    let n = 100_000u32;
    let graph = AdjacencyGraph::from_edges((0..n).map(|i| (i, i + 1)));

    let components = strongly_connected_components(&graph);

    assert_eq!(components.len(), n as usize + 1);
    assert!(components
        .iter()
        .map(|c| c[0])
        .tuple_windows()
        .all(|(x, y)| x < y));
}

/// All vertices reachable from `source`, itself included.
fn reach(graph: &AdjacencyGraph<u8>, source: u8) -> HashSet<u8> {
    let mut seen = HashSet::new();
    let mut todo = vec![source];
    while let Some(x) = todo.pop() {
        if seen.insert(x) {
            todo.extend(graph.neighbors(&x).copied());
        }
    }
    seen
}

proptest! {
    #[test]
    fn components_partition_and_are_maximal(
        edges in prop::collection::vec((0u8..10, 0u8..10), 0..40),
    ) {
        let graph = AdjacencyGraph::from_edges(edges);
        let components = strongly_connected_components(&graph);

        let mut seen = HashSet::new();
        for c in components.iter() {
            prop_assert!(!c.is_empty());
            for v in c {
                prop_assert!(seen.insert(*v));
            }
        }
        let all: HashSet<u8> = graph.vertices().collect();
        prop_assert_eq!(&seen, &all);

        // Same component iff mutually reachable.
        for x in graph.vertices() {
            let from_x = reach(&graph, x);
            for y in graph.vertices() {
                let mutual = from_x.contains(&y) && reach(&graph, y).contains(&x);
                prop_assert_eq!(
                    components.component_of(&x) == components.component_of(&y),
                    mutual
                );
            }
        }

        // Edges between components point forward.
        for x in graph.vertices() {
            for y in graph.neighbors(&x) {
                prop_assert!(components.component_of(&x) <= components.component_of(y));
            }
        }

        let cyclic = graph
            .vertices()
            .any(|x| graph.neighbors(&x).any(|y| reach(&graph, *y).contains(&x)));
        prop_assert_eq!(has_cycle(&graph), cyclic);
    }
}
