//! label-graph — an in-memory graph of uniquely labeled nodes.
//!
//! Supports directed and undirected graphs with weighted edges, basic
//! structural queries, breadth-first and depth-first traversal, and a
//! backtracking path search. Nodes are identified by label alone.

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{find_path, traverse, Graph, GraphBuilder, TraversalOrder};
pub use types::{Edge, GraphError, GraphResult, Node, DEFAULT_WEIGHT};
