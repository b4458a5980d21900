//! Error types for the label-graph library.

use thiserror::Error;

/// All errors that can occur in the label-graph library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// An operation referenced a label that is not in the graph.
    #[error("Node {0:?} not found")]
    NodeNotFound(String),

    /// No edge matches the (source, target, weight) triple.
    #[error("Edge {from:?} -> {to:?} with weight {weight} not found")]
    EdgeNotFound {
        from: String,
        to: String,
        weight: f64,
    },

    /// A node with this label already exists.
    #[error("Duplicate node {0:?}")]
    DuplicateNode(String),

    /// An edge with the same (source, target, weight) triple already exists.
    #[error("Duplicate edge {from:?} -> {to:?} with weight {weight}")]
    DuplicateEdge {
        from: String,
        to: String,
        weight: f64,
    },

    /// Weight is NaN and could never be matched again.
    #[error("Invalid edge weight: {0}")]
    InvalidWeight(f64),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
