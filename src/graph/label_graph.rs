//! Core graph structure — labeled nodes, each owning its outgoing edge list.

use indexmap::IndexMap;
use log::debug;

use crate::types::{Edge, GraphError, GraphResult, Node, DEFAULT_WEIGHT};

/// One stored edge record, kept in the source node's list.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OutEdge {
    pub(crate) target: String,
    pub(crate) weight: f64,
}

impl OutEdge {
    fn matches(&self, target: &str, weight: f64) -> bool {
        self.target == target && self.weight == weight
    }
}

/// A mutable graph of uniquely labeled nodes joined by weighted edges.
///
/// Undirected graphs store every edge twice, once under each endpoint, and
/// keep the two halves in step on every mutation.
#[derive(Debug, Clone)]
pub struct Graph {
    /// Label -> outgoing edges, in node insertion order.
    adjacency: IndexMap<String, Vec<OutEdge>>,
    /// Fixed at construction.
    directed: bool,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            adjacency: IndexMap::new(),
            directed,
        }
    }

    /// Create a new empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Create a new empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Number of nodes.
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of logical edges. Each undirected edge is counted once.
    pub fn num_edges(&self) -> usize {
        let stored: usize = self.adjacency.values().map(Vec::len).sum();
        if self.directed {
            stored
        } else {
            stored / 2
        }
    }

    /// True if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// True if any stored edge has a weight other than 1.
    pub fn is_weighted(&self) -> bool {
        self.adjacency
            .values()
            .flatten()
            .any(|e| e.weight != DEFAULT_WEIGHT)
    }

    pub fn contains_node(&self, label: &str) -> bool {
        self.adjacency.contains_key(label)
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.adjacency.keys().map(|label| Node::new(label.as_str()))
    }

    /// Every stored edge record, grouped by source in node order.
    ///
    /// Undirected graphs yield both halves of each edge.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter().flat_map(|(source, list)| {
            list.iter()
                .map(move |e| Edge::new(source.as_str(), e.target.as_str(), e.weight))
        })
    }

    /// Add a node with no edges.
    pub fn add_node(&mut self, label: impl Into<String>) -> GraphResult<()> {
        let label = label.into();
        if self.adjacency.contains_key(&label) {
            return Err(GraphError::DuplicateNode(label));
        }
        debug!("add_node {:?}", label);
        self.adjacency.insert(label, Vec::new());
        Ok(())
    }

    /// Remove a node and every edge that leaves or enters it.
    pub fn remove_node(&mut self, label: &str) -> GraphResult<()> {
        let outgoing = self
            .adjacency
            .shift_remove(label)
            .ok_or_else(|| GraphError::NodeNotFound(label.to_string()))?;

        let mut incoming = 0usize;
        for list in self.adjacency.values_mut() {
            let before = list.len();
            list.retain(|e| e.target != label);
            incoming += before - list.len();
        }

        debug!(
            "remove_node {:?} ({} outgoing, {} incoming records dropped)",
            label,
            outgoing.len(),
            incoming
        );
        Ok(())
    }

    /// Add an edge from `n1` to `n2`; undirected graphs also store `n2 -> n1`.
    ///
    /// An undirected self-loop stores a mirrored pair under the one node, so
    /// it appears twice among that node's adjacent nodes and counts as one
    /// logical edge.
    pub fn add_edge(&mut self, n1: &str, n2: &str, weight: f64) -> GraphResult<()> {
        if weight.is_nan() {
            return Err(GraphError::InvalidWeight(weight));
        }
        let list = self
            .adjacency
            .get(n1)
            .ok_or_else(|| GraphError::NodeNotFound(n1.to_string()))?;
        if !self.adjacency.contains_key(n2) {
            return Err(GraphError::NodeNotFound(n2.to_string()));
        }
        if list.iter().any(|e| e.matches(n2, weight)) {
            return Err(GraphError::DuplicateEdge {
                from: n1.to_string(),
                to: n2.to_string(),
                weight,
            });
        }

        self.push_record(n1, n2, weight);
        if !self.directed {
            self.push_record(n2, n1, weight);
        }
        debug!("add_edge {:?} -> {:?} ({})", n1, n2, weight);
        Ok(())
    }

    /// Add an edge with the default weight.
    pub fn add_unweighted_edge(&mut self, n1: &str, n2: &str) -> GraphResult<()> {
        self.add_edge(n1, n2, DEFAULT_WEIGHT)
    }

    /// Remove the edge matching `(n1, n2, weight)`, and its mirror if undirected.
    ///
    /// A missing node is reported as a missing edge.
    pub fn remove_edge(&mut self, n1: &str, n2: &str, weight: f64) -> GraphResult<()> {
        if !self.take_record(n1, n2, weight) {
            return Err(GraphError::EdgeNotFound {
                from: n1.to_string(),
                to: n2.to_string(),
                weight,
            });
        }
        if !self.directed {
            self.take_record(n2, n1, weight);
        }
        debug!("remove_edge {:?} -> {:?} ({})", n1, n2, weight);
        Ok(())
    }

    /// Remove an edge carrying the default weight.
    pub fn remove_unweighted_edge(&mut self, n1: &str, n2: &str) -> GraphResult<()> {
        self.remove_edge(n1, n2, DEFAULT_WEIGHT)
    }

    /// True if any edge, of any weight, leads from `n1` to `n2`.
    pub fn has_edge(&self, n1: &str, n2: &str) -> GraphResult<bool> {
        Ok(self.out_edges(n1)?.iter().any(|e| e.target == n2))
    }

    /// Targets of every outgoing edge of `label`, in insertion order.
    ///
    /// A target reached by several weighted edges is listed once per edge.
    pub fn get_adjacent_nodes(&self, label: &str) -> GraphResult<Vec<Node>> {
        Ok(self
            .out_edges(label)?
            .iter()
            .map(|e| Node::new(e.target.as_str()))
            .collect())
    }

    /// Weights of every edge from `n1` to `n2`, in insertion order.
    pub fn edge_weights(&self, n1: &str, n2: &str) -> GraphResult<Vec<f64>> {
        Ok(self
            .out_edges(n1)?
            .iter()
            .filter(|e| e.target == n2)
            .map(|e| e.weight)
            .collect())
    }

    /// Number of stored edge records leaving `label`.
    pub fn out_degree(&self, label: &str) -> GraphResult<usize> {
        Ok(self.out_edges(label)?.len())
    }

    /// Number of stored edge records entering `label`.
    pub fn in_degree(&self, label: &str) -> GraphResult<usize> {
        if !self.contains_node(label) {
            return Err(GraphError::NodeNotFound(label.to_string()));
        }
        Ok(self
            .adjacency
            .values()
            .flatten()
            .filter(|e| e.target == label)
            .count())
    }

    /// Edges incident to `label`: in + out for directed graphs, the edge
    /// list length for undirected ones.
    pub fn degree(&self, label: &str) -> GraphResult<usize> {
        let out = self.out_degree(label)?;
        if self.directed {
            Ok(out + self.in_degree(label)?)
        } else {
            Ok(out)
        }
    }

    /// The stored edge list of `label`.
    pub(crate) fn out_edges(&self, label: &str) -> GraphResult<&[OutEdge]> {
        self.adjacency
            .get(label)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::NodeNotFound(label.to_string()))
    }

    fn push_record(&mut self, source: &str, target: &str, weight: f64) {
        if let Some(list) = self.adjacency.get_mut(source) {
            list.push(OutEdge {
                target: target.to_string(),
                weight,
            });
        }
    }

    /// Remove the first record matching `(target, weight)` from `source`'s list.
    fn take_record(&mut self, source: &str, target: &str, weight: f64) -> bool {
        let Some(list) = self.adjacency.get_mut(source) else {
            return false;
        };
        match list.iter().position(|e| e.matches(target, weight)) {
            Some(pos) => {
                list.remove(pos);
                true
            }
            None => false,
        }
    }
}
