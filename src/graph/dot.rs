//! Loading an [`AdjacencyGraph`] from the [DOT language](https://graphviz.org/doc/info/lang.html).
//!
//! Only the shape of the graph is read: `digraph` gives a directed graph,
//! `graph` an undirected one, and attributes are ignored. Vertices are named by
//! their DOT ids and added in sorted order, edges sorted by `(from, to)`, so the
//! resulting iteration order does not depend on the parser's internal maps.

use std::{collections::BTreeSet, path::Path};

use dot_parser::ast::{GraphFromFileError, PestError};
use itertools::Itertools;
use thiserror::Error;

use super::AdjacencyGraph;

#[derive(Debug, Error)]
pub enum DotError<'a> {
    #[error("{0}")]
    Parse(PestError),
    #[error("{0}")]
    File(GraphFromFileError<'a>),
}

impl<'a> From<GraphFromFileError<'a>> for DotError<'a> {
    fn from(e: GraphFromFileError<'a>) -> Self {
        DotError::File(e)
    }
}

impl From<PestError> for DotError<'_> {
    fn from(e: PestError) -> Self {
        DotError::Parse(e)
    }
}

impl AdjacencyGraph<String> {
    #[allow(clippy::result_large_err)]
    pub fn from_dot<'a, Str: AsRef<str>>(s: Str) -> Result<Self, DotError<'a>> {
        let ast_graph = dot_parser::ast::Graph::try_from(s.as_ref())?;
        let can_graph = dot_parser::canonical::Graph::from(
            ast_graph.filter_map(&|a| Some((a.0.to_string(), a.1.to_string()))),
        );
        Ok(Self::from(can_graph))
    }

    #[allow(clippy::result_large_err)]
    pub fn from_dot_file<'a, P: AsRef<Path>>(p: P) -> Result<Self, DotError<'a>> {
        let ast_graph = dot_parser::ast::Graph::from_file(p)?;
        let can_graph = dot_parser::canonical::Graph::from(ast_graph);
        Ok(Self::from(can_graph))
    }
}

impl From<dot_parser::canonical::Graph<(String, String)>> for AdjacencyGraph<String> {
    fn from(value: dot_parser::canonical::Graph<(String, String)>) -> Self {
        let mut graph = if value.is_digraph {
            AdjacencyGraph::directed()
        } else {
            AdjacencyGraph::undirected()
        };

        let edges: Vec<(String, String)> = value
            .edges
            .set
            .into_iter()
            .map(|e| (e.from, e.to))
            .sorted()
            .collect();

        let ids: BTreeSet<String> = value
            .nodes
            .set
            .into_iter()
            .map(|(id, _)| id)
            .chain(edges.iter().flat_map(|(f, t)| [f.clone(), t.clone()]))
            .collect();

        for id in ids {
            graph.add_vertex(id);
        }
        for (from, to) in edges {
            graph.add_edge(from, to);
        }
        graph
    }
}

/// Builds an [`AdjacencyGraph<String>`] from inline DOT.
///
/// ```rust,ignore
/// let g = dot!(digraph { a -> b; b -> c }).unwrap();
/// ```
#[macro_export]
macro_rules! dot {
    ($($t:tt)*) => {
        $crate::graph::AdjacencyGraph::from_dot(stringify!($($t)*))
    };
}
