//! The node value type returned by graph queries.

use std::fmt;

/// A labeled vertex, as seen from outside the graph.
///
/// Nodes are plain values: two nodes are equal when their labels are equal.
/// Holding a `Node` does not keep anything alive in the graph, and the graph
/// never hands out references into its own storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node {
    label: String,
}

impl Node {
    /// Create a node with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// The node's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Consume the node, returning its label.
    pub fn into_label(self) -> String {
        self.label
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl AsRef<str> for Node {
    fn as_ref(&self) -> &str {
        &self.label
    }
}

impl From<&str> for Node {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Node {
    fn from(label: String) -> Self {
        Self { label }
    }
}

impl PartialEq<str> for Node {
    fn eq(&self, other: &str) -> bool {
        self.label == other
    }
}

impl PartialEq<&str> for Node {
    fn eq(&self, other: &&str) -> bool {
        self.label == *other
    }
}
