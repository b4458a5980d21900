//! Graph traversal algorithms (BFS, DFS, path search).

use std::collections::{HashSet, VecDeque};

use log::trace;

use crate::types::{GraphError, GraphResult, Node};

use super::label_graph::OutEdge;
use super::Graph;

/// Discipline for the pending-node worklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// First-in-first-out: visit level by level.
    BreadthFirst,
    /// Last-in-first-out: follow the most recently discovered node first.
    DepthFirst,
}

/// Visit every node reachable from `source`, each exactly once.
///
/// Successors are discovered in edge-list order. A node enters the worklist
/// when first discovered and never again, whether it is still pending or
/// already visited.
pub fn traverse(graph: &Graph, source: &str, order: TraversalOrder) -> GraphResult<Vec<Node>> {
    if !graph.contains_node(source) {
        return Err(GraphError::NodeNotFound(source.to_string()));
    }

    let mut discovered: HashSet<&str> = HashSet::new();
    let mut pending: VecDeque<&str> = VecDeque::new();
    let mut visited: Vec<Node> = Vec::new();

    discovered.insert(source);
    pending.push_back(source);

    loop {
        let next = match order {
            TraversalOrder::BreadthFirst => pending.pop_front(),
            TraversalOrder::DepthFirst => pending.pop_back(),
        };
        let Some(current) = next else {
            break;
        };
        visited.push(Node::new(current));

        for edge in graph.out_edges(current)? {
            let target = edge.target.as_str();
            if discovered.insert(target) {
                pending.push_back(target);
            }
        }
    }

    trace!(
        "{:?} from {:?} visited {} nodes",
        order,
        source,
        visited.len()
    );
    Ok(visited)
}

/// Depth-first search for one path from `from` to `to`, backtracking on
/// dead ends. The result is not necessarily the shortest path.
///
/// Each label is expanded at most once per call: a label that was already
/// backtracked out of cannot reach `to` through any label not on the path.
pub fn find_path(graph: &Graph, from: &str, to: &str) -> GraphResult<Option<Vec<Node>>> {
    for label in [from, to] {
        if !graph.contains_node(label) {
            return Err(GraphError::NodeNotFound(label.to_string()));
        }
    }

    let mut search = PathSearch::default();
    let found = search.run(graph, from, to)?;
    trace!(
        "find_path {:?} -> {:?}: {}",
        from,
        to,
        if found { "found" } else { "unreachable" }
    );
    Ok(found.then(|| {
        search
            .frames
            .into_iter()
            .map(|frame| Node::new(frame.label))
            .collect()
    }))
}

/// One label on the current path and the next of its edges to try.
struct Frame<'a> {
    label: &'a str,
    edges: &'a [OutEdge],
    next: usize,
}

/// Per-call accumulator for [`find_path`]. The frame stack is the path.
#[derive(Default)]
struct PathSearch<'a> {
    frames: Vec<Frame<'a>>,
    expanded: HashSet<&'a str>,
}

impl<'a> PathSearch<'a> {
    fn enter(&mut self, graph: &'a Graph, label: &'a str) -> GraphResult<()> {
        let edges = graph.out_edges(label)?;
        self.expanded.insert(label);
        self.frames.push(Frame {
            label,
            edges,
            next: 0,
        });
        Ok(())
    }

    /// Advance the top frame through its successors in edge-list order,
    /// entering each one not yet expanded. A frame with no edges left is a
    /// dead end and is popped.
    fn run(&mut self, graph: &'a Graph, start: &'a str, goal: &str) -> GraphResult<bool> {
        self.enter(graph, start)?;
        if start == goal {
            return Ok(true);
        }

        while let Some(frame) = self.frames.last_mut() {
            let edges: &'a [OutEdge] = frame.edges;
            let Some(edge) = edges.get(frame.next) else {
                self.frames.pop();
                continue;
            };
            frame.next += 1;

            let next = edge.target.as_str();
            if self.expanded.contains(next) {
                continue;
            }
            self.enter(graph, next)?;
            if next == goal {
                return Ok(true);
            }
        }

        Ok(false)
    }
}

impl Graph {
    /// Breadth-first visit order from `source`.
    pub fn bfs(&self, source: &str) -> GraphResult<Vec<Node>> {
        traverse(self, source, TraversalOrder::BreadthFirst)
    }

    /// Depth-first visit order from `source`.
    pub fn dfs(&self, source: &str) -> GraphResult<Vec<Node>> {
        traverse(self, source, TraversalOrder::DepthFirst)
    }

    /// One path from `n1` to `n2` following outgoing edges, or `None` if
    /// `n2` is unreachable. The path starts with `n1` and ends with `n2`.
    pub fn get_path(&self, n1: &str, n2: &str) -> GraphResult<Option<Vec<Node>>> {
        find_path(self, n1, n2)
    }
}

