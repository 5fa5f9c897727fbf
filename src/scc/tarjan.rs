//! Tarjan's algorithm with an explicit call stack.
//!
//! Vertices are interned into dense slots on first contact so the per-vertex
//! bookkeeping lives in plain vectors and the on-stack test is a bit lookup.

use ahash::{HashMap, HashMapExt, RandomState};
use bitvec::vec::BitVec;
use indexmap::IndexSet;
use tracing::{debug, trace};

use crate::graph::DirectedGraph;

/// Discovery index and low-link of one vertex. `index` is `None` until the
/// search reaches the vertex.
#[derive(Debug, Clone, Copy, Default)]
struct VertexMeta {
    index: Option<usize>,
    lowlink: usize,
}

/// A suspended `strong_connect(slot)` call: the successors of `slot` and how
/// many of them have been examined.
struct Frame {
    slot: usize,
    successors: Vec<usize>,
    cursor: usize,
}

pub(super) struct TarjanState<'g, G: DirectedGraph> {
    graph: &'g G,
    slots: HashMap<G::Vertex, usize>,
    vertices: Vec<G::Vertex>,
    meta: Vec<VertexMeta>,
    on_stack: BitVec,
    stack: Vec<usize>,
    counter: usize,
    components: Vec<IndexSet<G::Vertex, RandomState>>,
}

impl<'g, G: DirectedGraph> TarjanState<'g, G> {
    pub(super) fn new(graph: &'g G) -> Self {
        TarjanState {
            graph,
            slots: HashMap::new(),
            vertices: Vec::new(),
            meta: Vec::new(),
            on_stack: BitVec::new(),
            stack: Vec::new(),
            counter: 0,
            components: Vec::new(),
        }
    }

    /// Runs the search from every vertex not reached yet. Components come out in
    /// the order they are completed, sinks of the condensation first.
    pub(super) fn run(mut self) -> Vec<IndexSet<G::Vertex, RandomState>> {
        let graph = self.graph;
        debug!(vertices = graph.vertex_count(), "computing strongly connected components");

        for vertex in graph.vertices() {
            let slot = self.slot_of(vertex);
            if self.meta[slot].index.is_none() {
                self.strong_connect(slot);
            }
        }

        debug!(
            components = self.components.len(),
            nontrivial = self.components.iter().filter(|c| c.len() > 1).count(),
            "strongly connected components found"
        );
        self.components
    }

    fn slot_of(&mut self, vertex: G::Vertex) -> usize {
        if let Some(&slot) = self.slots.get(&vertex) {
            return slot;
        }
        let slot = self.vertices.len();
        self.slots.insert(vertex.clone(), slot);
        self.vertices.push(vertex);
        self.meta.push(VertexMeta::default());
        self.on_stack.push(false);
        slot
    }

    /// Assigns the next discovery index to `slot`, puts it on the stack and
    /// opens its frame.
    fn enter(&mut self, slot: usize) -> Frame {
        self.meta[slot] = VertexMeta {
            index: Some(self.counter),
            lowlink: self.counter,
        };
        self.counter += 1;
        self.stack.push(slot);
        self.on_stack.set(slot, true);

        let vertex = self.vertices[slot].clone();
        let outbound: Vec<G::Vertex> = self.graph.outbound(&vertex).collect();
        let successors = outbound.into_iter().map(|w| self.slot_of(w)).collect();

        Frame {
            slot,
            successors,
            cursor: 0,
        }
    }

    fn strong_connect(&mut self, root: usize) {
        let mut calls = vec![self.enter(root)];

        while let Some(frame) = calls.last_mut() {
            let v = frame.slot;

            if let Some(&w) = frame.successors.get(frame.cursor) {
                frame.cursor += 1;
                match self.meta[w].index {
                    None => {
                        let callee = self.enter(w);
                        calls.push(callee);
                    }
                    Some(w_index) if self.on_stack[w] => {
                        self.meta[v].lowlink = self.meta[v].lowlink.min(w_index);
                    }
                    // Already assigned to a closed component.
                    Some(_) => {}
                }
                continue;
            }

            calls.pop();
            if Some(self.meta[v].lowlink) == self.meta[v].index {
                self.emit(v);
            }
            if let Some(caller) = calls.last() {
                let u = caller.slot;
                self.meta[u].lowlink = self.meta[u].lowlink.min(self.meta[v].lowlink);
            }
        }
    }

    /// Pops the component rooted at `root` off the stack.
    fn emit(&mut self, root: usize) {
        let mut component = IndexSet::default();
        while let Some(w) = self.stack.pop() {
            self.on_stack.set(w, false);
            component.insert(self.vertices[w].clone());
            if w == root {
                break;
            }
        }
        component.reverse();
        trace!(root = ?self.vertices[root], size = component.len(), "component closed");
        self.components.push(component);
    }
}
