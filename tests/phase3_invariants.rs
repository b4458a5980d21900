//! Phase 3 tests: structural invariants over random mutation sequences.

use std::collections::HashSet;

use label_graph::graph::Graph;
use label_graph::types::error::GraphError;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    AddNode(u8),
    RemoveNode(u8),
    AddEdge(u8, u8, u8),
    RemoveEdge(u8, u8, u8),
}

/// Small label and weight spaces so operations collide often.
fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        (0u8..6).prop_map(Operation::AddNode),
        (0u8..6).prop_map(Operation::RemoveNode),
        (0u8..6, 0u8..6, 1u8..4).prop_map(|(a, b, w)| Operation::AddEdge(a, b, w)),
        (0u8..6, 0u8..6, 1u8..4).prop_map(|(a, b, w)| Operation::RemoveEdge(a, b, w)),
    ]
}

fn label(id: u8) -> String {
    format!("n{}", id)
}

/// Sorted (source, target, weight) records, with weights as integers.
fn records(graph: &Graph) -> Vec<(String, String, i64)> {
    let mut out: Vec<_> = graph
        .edges()
        .map(|e| (e.source, e.target, e.weight as i64))
        .collect();
    out.sort();
    out
}

/// Apply one operation, returning whether it succeeded. A failed operation
/// must leave the graph exactly as it was.
fn apply(graph: &mut Graph, op: &Operation) -> bool {
    let before_nodes: Vec<_> = graph.nodes().collect();
    let before_edges = records(graph);

    let result = match op {
        Operation::AddNode(a) => graph.add_node(label(*a)),
        Operation::RemoveNode(a) => graph.remove_node(&label(*a)),
        Operation::AddEdge(a, b, w) => graph.add_edge(&label(*a), &label(*b), f64::from(*w)),
        Operation::RemoveEdge(a, b, w) => graph.remove_edge(&label(*a), &label(*b), f64::from(*w)),
    };

    match result {
        Ok(()) => true,
        Err(err) => {
            assert!(
                matches!(
                    (op, &err),
                    (Operation::AddNode(_), GraphError::DuplicateNode(_))
                        | (Operation::RemoveNode(_), GraphError::NodeNotFound(_))
                        | (
                            Operation::AddEdge(..),
                            GraphError::NodeNotFound(_) | GraphError::DuplicateEdge { .. }
                        )
                        | (Operation::RemoveEdge(..), GraphError::EdgeNotFound { .. })
                ),
                "unexpected {:?} for {:?}",
                err,
                op
            );
            assert_eq!(graph.nodes().collect::<Vec<_>>(), before_nodes);
            assert_eq!(records(graph), before_edges);
            false
        }
    }
}

fn check_invariants(graph: &Graph, expected_vertices: usize) {
    assert_eq!(graph.num_vertices(), expected_vertices);

    let labels: HashSet<String> = graph.nodes().map(|n| n.into_label()).collect();
    assert_eq!(labels.len(), graph.num_vertices(), "labels must be unique");

    let edges = records(graph);
    for (source, target, _) in &edges {
        assert!(labels.contains(source), "dangling source {}", source);
        assert!(labels.contains(target), "dangling target {}", target);
    }

    if graph.is_directed() {
        assert_eq!(graph.num_edges(), edges.len());
    } else {
        // Every record has its mirror, so the record multiset is symmetric.
        let mut mirrored: Vec<_> = edges
            .iter()
            .map(|(s, t, w)| (t.clone(), s.clone(), *w))
            .collect();
        mirrored.sort();
        assert_eq!(mirrored, edges);
        assert_eq!(edges.len() % 2, 0);
        assert_eq!(graph.num_edges(), edges.len() / 2);
    }
}

fn run(directed: bool, ops: &[Operation]) {
    let mut graph = Graph::new(directed);
    let mut expected_vertices = 0usize;

    for op in ops {
        let ok = apply(&mut graph, op);
        match op {
            Operation::AddNode(_) if ok => expected_vertices += 1,
            Operation::RemoveNode(_) if ok => expected_vertices -= 1,
            _ => {}
        }
        check_invariants(&graph, expected_vertices);
    }

    // Traversals from every node visit each reachable label exactly once.
    let labels: Vec<String> = graph.nodes().map(|n| n.into_label()).collect();
    for source in &labels {
        for visited in [graph.bfs(source).unwrap(), graph.dfs(source).unwrap()] {
            let unique: HashSet<_> = visited.iter().collect();
            assert_eq!(unique.len(), visited.len());
            assert_eq!(visited[0].label(), source.as_str());
        }
        for target in &labels {
            if let Some(path) = graph.get_path(source, target).unwrap() {
                assert_eq!(path.first().map(|n| n.label()), Some(source.as_str()));
                assert_eq!(path.last().map(|n| n.label()), Some(target.as_str()));
                for pair in path.windows(2) {
                    assert!(graph.has_edge(pair[0].label(), pair[1].label()).unwrap());
                }
            }
        }
    }
}

/// Plain recursive backtracking over `get_adjacent_nodes`: try successors
/// in order, skipping only labels already on the current path.
fn simple_path_search(graph: &Graph, current: &str, goal: &str, path: &mut Vec<String>) -> bool {
    path.push(current.to_string());
    if current == goal {
        return true;
    }
    for next in graph.get_adjacent_nodes(current).unwrap() {
        if !path.iter().any(|l| l == next.label())
            && simple_path_search(graph, next.label(), goal, path)
        {
            return true;
        }
    }
    path.pop();
    false
}

fn check_paths_match_simple_search(graph: &Graph) -> Result<(), TestCaseError> {
    let labels: Vec<String> = graph.nodes().map(|n| n.into_label()).collect();
    for source in &labels {
        for target in &labels {
            let mut path = Vec::new();
            let expected = simple_path_search(graph, source, target, &mut path).then_some(path);
            let actual = graph
                .get_path(source, target)
                .unwrap()
                .map(|path| path.into_iter().map(|n| n.into_label()).collect::<Vec<_>>());
            prop_assert_eq!(actual, expected, "path {} -> {}", source, target);
        }
    }
    Ok(())
}

/// Random edge sets over 7 labels, small weights so parallel edges occur.
fn edge_list() -> impl Strategy<Value = Vec<(u8, u8, u8)>> {
    proptest::collection::vec((0u8..7, 0u8..7, 1u8..3), 0..25)
}

fn graph_from(directed: bool, edges: &[(u8, u8, u8)]) -> Graph {
    let mut graph = Graph::new(directed);
    for id in 0..7 {
        graph.add_node(label(id)).unwrap();
    }
    for (a, b, w) in edges {
        // Duplicates are rejected and skipped.
        let _ = graph.add_edge(&label(*a), &label(*b), f64::from(*w));
    }
    graph
}

proptest! {
    #[test]
    fn test_directed_path_matches_simple_search(edges in edge_list()) {
        check_paths_match_simple_search(&graph_from(true, &edges))?;
    }

    #[test]
    fn test_undirected_path_matches_simple_search(edges in edge_list()) {
        check_paths_match_simple_search(&graph_from(false, &edges))?;
    }

    #[test]
    fn test_directed_invariants(ops in proptest::collection::vec(operation(), 1..80)) {
        run(true, &ops);
    }

    #[test]
    fn test_undirected_invariants(ops in proptest::collection::vec(operation(), 1..80)) {
        run(false, &ops);
    }

    #[test]
    fn test_path_agrees_with_bfs(ops in proptest::collection::vec(operation(), 1..60)) {
        let mut graph = Graph::directed();
        for op in &ops {
            apply(&mut graph, op);
        }
        let labels: Vec<String> = graph.nodes().map(|n| n.into_label()).collect();
        for source in &labels {
            let reachable: HashSet<String> = graph
                .bfs(source)
                .unwrap()
                .into_iter()
                .map(|n| n.into_label())
                .collect();
            for target in &labels {
                let found = graph.get_path(source, target).unwrap().is_some();
                prop_assert_eq!(found, reachable.contains(target));
            }
        }
    }
}
