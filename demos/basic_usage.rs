//! Build a small graph, mutate it, and run the traversals.

use label_graph::*;

fn main() -> GraphResult<()> {
    env_logger::init();

    // Build a directed graph
    let mut graph = GraphBuilder::directed()
        .nodes(["home", "work", "gym", "shop"])
        .edge("home", "work", 12.0)
        .edge("home", "gym", 3.0)
        .edge("gym", "shop", 1.0)
        .unweighted_edge("shop", "home")
        .build()?;

    println!(
        "Graph created with {} nodes and {} edges (weighted: {})",
        graph.num_vertices(),
        graph.num_edges(),
        graph.is_weighted()
    );

    let bfs: Vec<String> = graph.bfs("home")?.iter().map(Node::to_string).collect();
    let dfs: Vec<String> = graph.dfs("home")?.iter().map(Node::to_string).collect();
    println!("BFS from home: {}", bfs.join(", "));
    println!("DFS from home: {}", dfs.join(", "));

    match graph.get_path("work", "shop")? {
        Some(path) => println!("Path work -> shop: {:?}", path),
        None => println!("No path from work to shop"),
    }

    // Errors are values; nothing is printed until we choose to
    if let Err(e) = graph.add_edge("home", "work", 12.0) {
        println!("Rejected: {}", e);
    }

    graph.remove_node("gym")?;
    println!(
        "After removing gym: {} nodes, {} edges, home -> {:?}",
        graph.num_vertices(),
        graph.num_edges(),
        graph.get_adjacent_nodes("home")?
    );

    Ok(())
}
