//! Fluent API for building Graph instances.

use indexmap::IndexSet;

use crate::types::{Edge, GraphResult, DEFAULT_WEIGHT};

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Declarations are replayed through the graph's own mutation operations by
/// [`build`](Self::build), so duplicates and invalid weights surface there.
/// Edge endpoints that were never declared with [`node`](Self::node) are
/// added implicitly, in the order they first appear.
pub struct GraphBuilder {
    directed: bool,
    nodes: Vec<String>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Create a new builder for a directed graph.
    pub fn new() -> Self {
        Self::directed()
    }

    /// Create a new builder for a directed graph.
    pub fn directed() -> Self {
        Self {
            directed: true,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Create a new builder for an undirected graph.
    pub fn undirected() -> Self {
        Self {
            directed: false,
            ..Self::directed()
        }
    }

    /// Declare a node.
    pub fn node(mut self, label: impl Into<String>) -> Self {
        self.nodes.push(label.into());
        self
    }

    /// Declare several nodes.
    pub fn nodes<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nodes.extend(labels.into_iter().map(Into::into));
        self
    }

    /// Declare a weighted edge.
    pub fn edge(mut self, n1: impl Into<String>, n2: impl Into<String>, weight: f64) -> Self {
        self.edges.push(Edge::new(n1, n2, weight));
        self
    }

    /// Declare an edge with the default weight.
    pub fn unweighted_edge(self, n1: impl Into<String>, n2: impl Into<String>) -> Self {
        self.edge(n1, n2, DEFAULT_WEIGHT)
    }

    /// Build the final Graph.
    pub fn build(self) -> GraphResult<Graph> {
        let mut graph = Graph::new(self.directed);

        for label in self.nodes {
            graph.add_node(label)?;
        }

        // Endpoints not declared explicitly, in first-appearance order.
        let implicit: IndexSet<&str> = self
            .edges
            .iter()
            .flat_map(|e| [e.source.as_str(), e.target.as_str()])
            .filter(|label| !graph.contains_node(label))
            .collect();
        for label in implicit {
            graph.add_node(label)?;
        }

        for edge in &self.edges {
            graph.add_edge(&edge.source, &edge.target, edge.weight)?;
        }

        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
