//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod label_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use label_graph::Graph;
pub use traversal::{find_path, traverse, TraversalOrder};
