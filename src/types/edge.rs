//! The edge value type.

use std::fmt;

use super::DEFAULT_WEIGHT;

/// A weighted connection from one labeled node to another.
///
/// Returned by [`Graph::edges`](crate::Graph::edges) as a snapshot; the graph
/// itself stores only `(target, weight)` under the source's label.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Label of the node the edge leaves.
    pub source: String,
    /// Label of the node the edge enters.
    pub target: String,
    /// Edge weight. Unweighted edges carry [`DEFAULT_WEIGHT`].
    pub weight: f64,
}

impl Edge {
    /// Create a new edge.
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    /// Create an edge with the default weight.
    pub fn unweighted(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(source, target, DEFAULT_WEIGHT)
    }

    /// True if this edge's weight differs from the default.
    pub fn is_weighted(&self) -> bool {
        self.weight != DEFAULT_WEIGHT
    }

    /// True if source and target are the same label.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.target, self.weight)
    }
}
