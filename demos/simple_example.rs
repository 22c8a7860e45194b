use dijkstra_sssp::graph::{Graph, MutableGraph};
use dijkstra_sssp::{dijkstra_path, report, run, validate, WeightedGraph};

fn main() -> dijkstra_sssp::Result<()> {
    env_logger::init();

    // The five-vertex undirected graph from the classic textbook figure
    let mut graph: WeightedGraph<&str> = WeightedGraph::undirected();
    for (u, v, w) in [
        ("1", "2", 2.0),
        ("1", "3", 10.0),
        ("1", "4", 8.0),
        ("2", "5", 4.0),
        ("3", "4", 3.0),
        ("4", "5", 1.0),
    ] {
        graph.add_edge(u, v, w);
    }

    println!("--- Testing on a simple graph ---");
    println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

    if let Some(reason) = validate(&graph).reason() {
        println!("Warning: {}", reason);
    }

    let result = run(&graph, &"1")?;
    println!("\n{}", report::render(&graph, &result, None)?);

    // Step by step: one query, then the full report for that target
    let (path, distance) = dijkstra_path(&graph, &"1", &"5")?;
    match path {
        Some(path) => println!("\nShortest path 1 -> 5: {:?} (distance {})", path, distance),
        None => println!("\nNo path from 1 to 5"),
    }
    println!("\n{}", report::render(&graph, &result, Some(&"5"))?);

    Ok(())
}
