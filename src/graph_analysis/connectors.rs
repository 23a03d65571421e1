//! Connector (articulation point) detection.
//!
//! A depth-first search over every component assigns discovery numbers and
//! low-links; a non-root `u` with a tree child `v` is a connector when
//! `low[v] >= disc[u]`, and a root is one when it has two or more tree
//! children. Two fix-up passes follow the search:
//!
//! 1. people with fewer than two friends are dropped;
//! 2. for every person with exactly one friend, that friend is added when it
//!    is missing (removing it strands the leaf).
//!
//! The second pass runs after the first, so both ends of a detached pair
//! `a-b` come back as connectors. Discovery numbers increase monotonically
//! across the whole call and the per-vertex arrays are allocated once per
//! call.

use tracing::debug;

use crate::graph::Graph;

/// Names of everyone whose removal splits a friend group in two, plus both
/// people of every detached pair, in person index order.
pub fn connectors(graph: &Graph) -> Vec<String> {
    let mut state = DfsState::new(graph.len());
    for root in 0..graph.len() {
        if !state.visited[root] {
            explore(graph, root, &mut state);
        }
    }

    // leaves and loners never split anything
    let mut is_connector = state.is_cut;
    for idx in 0..graph.len() {
        if is_connector[idx] && graph.degree(idx) < 2 {
            debug!(person = graph.name(idx), "dropped low-degree connector");
            is_connector[idx] = false;
        }
    }

    // a leaf's only friend is what holds the leaf on
    for leaf in 0..graph.len() {
        if let &[friend] = graph.friends(leaf) {
            if !is_connector[friend] {
                debug!(
                    person = graph.name(friend),
                    leaf = graph.name(leaf),
                    "added bridge-leaf connector"
                );
                is_connector[friend] = true;
            }
        }
    }

    let names: Vec<String> = (0..graph.len())
        .filter(|&idx| is_connector[idx])
        .map(|idx| graph.name(idx).to_string())
        .collect();
    debug!(connectors = names.len(), people = graph.len(), "found connectors");
    names
}

/// Per-call search bookkeeping, indexed by person.
struct DfsState {
    visited: Vec<bool>,
    disc: Vec<usize>,
    low: Vec<usize>,
    clock: usize,
    is_cut: Vec<bool>,
}

impl DfsState {
    fn new(n: usize) -> Self {
        Self {
            visited: vec![false; n],
            disc: vec![0; n],
            low: vec![0; n],
            clock: 0,
            is_cut: vec![false; n],
        }
    }

    fn discover(&mut self, idx: usize) {
        self.clock += 1;
        self.visited[idx] = true;
        self.disc[idx] = self.clock;
        self.low[idx] = self.clock;
    }

    fn mark(&mut self, idx: usize) {
        self.is_cut[idx] = true;
    }
}

/// A vertex on the explicit search stack and how far through its friends we are.
struct Frame {
    vertex: usize,
    parent: Option<usize>,
    cursor: usize,
}

fn explore(graph: &Graph, root: usize, state: &mut DfsState) {
    state.discover(root);
    let mut stack = vec![Frame {
        vertex: root,
        parent: None,
        cursor: 0,
    }];
    let mut root_children = 0;

    while let Some(frame) = stack.last_mut() {
        let (u, parent) = (frame.vertex, frame.parent);
        let next = graph.friends(u).get(frame.cursor).copied();
        frame.cursor += 1; // resume here when we come back to u

        match next {
            Some(v) if !state.visited[v] => {
                // tree edge: descend into v
                if u == root {
                    root_children += 1;
                }
                state.discover(v);
                stack.push(Frame {
                    vertex: v,
                    parent: Some(u),
                    cursor: 0,
                });
            }
            Some(v) => {
                // back edge; the tree edge to the parent does not count
                if parent != Some(v) {
                    state.low[u] = state.low[u].min(state.disc[v]);
                }
            }
            None => {
                // u is finished; hand its low-link up to the parent
                stack.pop();
                if let Some(p) = parent {
                    state.low[p] = state.low[p].min(state.low[u]);
                    // nothing under u reaches above p, so p cuts u off
                    if p != root && state.low[u] >= state.disc[p] {
                        state.mark(p);
                    }
                }
            }
        }
    }

    if root_children > 1 {
        state.mark(root); // root splits its own subtrees apart
    }
}
