//! Plain-text reports of a shortest path run.

use chrono::Local;
use log::info;
use std::fs;
use std::path::Path;

use crate::algorithm::ShortestPathResult;
use crate::graph::{EdgeWeight, Graph, VertexId, WeightedGraph};
use crate::Result;

const RULE_WIDTH: usize = 50;

fn join_path<V: VertexId>(path: &[V]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Renders graph information followed by either the path to `target` with a
/// step-by-step breakdown, or every vertex's distance and path when no target
/// is given.
pub fn render<V, W>(
    graph: &WeightedGraph<V, W>,
    result: &ShortestPathResult<V, W>,
    target: Option<&V>,
) -> Result<String>
where
    V: VertexId,
    W: EdgeWeight,
{
    let start = &result.source;
    let stats = graph.stats();
    let mut lines = vec![
        "=".repeat(RULE_WIDTH),
        "Dijkstra's Shortest Path Algorithm".to_string(),
        "=".repeat(RULE_WIDTH),
        String::new(),
        "Graph Information:".to_string(),
        format!("  Vertices: {}", stats.vertex_count),
        format!("  Edges: {}", stats.edge_count),
        format!(
            "  Type: {}",
            if stats.directed { "Directed" } else { "Undirected" }
        ),
        format!("  Total weight: {}", stats.total_weight),
        format!("  Average weight: {:.2}", stats.average_weight),
    ];

    if stats.has_negative_edge {
        lines.push(String::new());
        lines.push("WARNING: Graph contains negative edges!".to_string());
        lines.push("Dijkstra may not produce correct results.".to_string());
    }

    lines.push(String::new());
    lines.push(format!("Start vertex: {}", start));
    lines.push(String::new());

    match target {
        Some(end) if !graph.has_vertex(end) => {
            lines.push(format!("Error: End vertex '{}' not found!", end));
        }
        Some(end) => match result.path_to(end)? {
            Some(path) if result.is_reachable(end) => {
                lines.push(format!("Shortest path from {} to {}:", start, end));
                lines.push(format!("Path: {}", join_path(&path)));
                if let Some(distance) = result.distance(end) {
                    lines.push(format!("Total distance: {}", distance));
                }

                lines.push(String::new());
                lines.push("Path details:".to_string());
                let mut total = W::zero();
                for step in path.windows(2) {
                    let (u, v) = (&step[0], &step[1]);
                    if let Some(weight) = graph.edge_weight(u, v) {
                        total = total + weight;
                        lines.push(format!("  {} → {}: {} (total: {})", u, v, weight, total));
                    }
                }
            }
            _ => lines.push(format!("No path exists from {} to {}", start, end)),
        },
        None => {
            lines.push("Shortest distances from start:".to_string());
            lines.push("-".repeat(40));

            for vertex in graph.vertices() {
                match result.distance(vertex) {
                    Some(distance) if distance < W::infinity() => {
                        lines.push(format!("{} → {}: {}", start, vertex, distance));
                        if vertex != start {
                            if let Some(path) = result.path_to(vertex)? {
                                lines.push(format!("   Path: {}", join_path(&path)));
                            }
                        }
                    }
                    _ => lines.push(format!("{} → {}: No path", start, vertex)),
                }
            }
        }
    }

    Ok(lines.join("\n"))
}

/// Writes the full distance listing to `path`, stamped with the local time
pub fn save<V, W, P>(path: P, graph: &WeightedGraph<V, W>, result: &ShortestPathResult<V, W>) -> Result<()>
where
    V: VertexId,
    W: EdgeWeight,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let contents = format!(
        "Dijkstra's Shortest Path Algorithm Results\n{}\nGenerated: {}\n\n{}\n",
        "=".repeat(RULE_WIDTH),
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        render(graph, result, None)?
    );

    fs::write(path, contents)?;
    info!("Results saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::run;
    use crate::graph::MutableGraph;

    fn image_graph() -> WeightedGraph<&'static str> {
        let mut graph = WeightedGraph::undirected();
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
        graph
    }

    #[test]
    fn test_render_path_to_target() {
        let graph = image_graph();
        let result = run(&graph, &"1").unwrap();
        let text = render(&graph, &result, Some(&"5")).unwrap();

        assert!(text.contains("  Vertices: 5"));
        assert!(text.contains("  Edges: 6"));
        assert!(text.contains("  Type: Undirected"));
        assert!(text.contains("  Average weight: 4.67"));
        assert!(text.contains("Path: 1 -> 2 -> 5"));
        assert!(text.contains("Total distance: 6"));
        assert!(text.contains("  1 → 2: 2 (total: 2)"));
        assert!(text.contains("  2 → 5: 4 (total: 6)"));
        assert!(!text.contains("WARNING"));
    }

    #[test]
    fn test_render_all_distances() {
        let mut graph = image_graph();
        graph.add_vertex("9");
        let result = run(&graph, &"1").unwrap();
        let text = render(&graph, &result, None).unwrap();

        assert!(text.contains("1 → 3: 10\n   Path: 1 -> 3"));
        assert!(text.contains("1 → 4: 7\n   Path: 1 -> 2 -> 5 -> 4"));
        assert!(text.contains("1 → 9: No path"));
    }

    #[test]
    fn test_render_unreachable_and_unknown_targets() {
        let mut graph: WeightedGraph<&str> = WeightedGraph::directed();
        graph.add_edge("A", "B", -1.0);
        let result = run(&graph, &"B").unwrap();

        let text = render(&graph, &result, Some(&"A")).unwrap();
        assert!(text.contains("No path exists from B to A"));
        assert!(text.contains("WARNING: Graph contains negative edges!"));

        let text = render(&graph, &result, Some(&"Q")).unwrap();
        assert!(text.contains("Error: End vertex 'Q' not found!"));
    }

    #[test]
    fn test_save_writes_listing() {
        let graph = image_graph();
        let result = run(&graph, &"1").unwrap();
        let path = std::env::temp_dir().join(format!("dijkstra_sssp_report_{}.txt", std::process::id()));

        save(&path, &graph, &result).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert!(contents.starts_with("Dijkstra's Shortest Path Algorithm Results"));
        assert!(contents.contains("Generated: "));
        assert!(contents.contains("1 → 5: 6"));
    }
}
