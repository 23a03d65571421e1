//! Friendship graph queries: shortest chains between people, same-school
//! friend circles, and the connectors holding the graph together.

pub mod data_cleaning;
pub mod error;
pub mod graph;
pub mod graph_analysis;

pub use data_cleaning::{load_friends_file, parse_friends};
pub use error::{GraphError, Result};
pub use graph::{Graph, GraphBuilder, Person};
pub use graph_analysis::{cliques, connectors, shortest_chain};
