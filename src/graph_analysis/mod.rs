//! Structural queries over a [`Graph`](crate::graph::Graph).
//!
//! Each query owns its traversal state for the duration of the call and
//! never mutates the graph, so repeated calls give equal results.

mod chain;
mod cliques;
mod connectors;

pub use chain::shortest_chain;
pub use cliques::cliques;
pub use connectors::connectors;
