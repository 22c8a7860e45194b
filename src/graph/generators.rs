use crate::graph::{MutableGraph, WeightedGraph};
use rand::prelude::*;

/// Generates a random graph with `n` vertices labelled `0..n` and roughly
/// `m` edges with integral weights in `1..=max_weight`.
///
/// The generator is seeded so benchmarks and tests are reproducible.
pub fn generate_random(
    n: usize,
    m: usize,
    directed: bool,
    max_weight: u32,
    seed: u64,
) -> WeightedGraph<usize, f64> {
    assert!(max_weight > 0, "max_weight must be positive");

    let mut graph = WeightedGraph::new(directed);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_vertex(v);
    }
    if n < 2 {
        return graph;
    }

    for _ in 0..m {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops
        if u != v {
            let weight = rng.gen_range(1..=max_weight) as f64;
            graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a `width` x `height` grid with 4-connectivity and unit weights.
/// Vertex `(x, y)` is labelled `y * width + x`.
pub fn generate_grid(width: usize, height: usize) -> WeightedGraph<usize, f64> {
    let mut graph = WeightedGraph::undirected();

    for y in 0..height {
        for x in 0..width {
            let current = y * width + x;
            graph.add_vertex(current);

            if x + 1 < width {
                graph.add_edge(current, current + 1, 1.0);
            }
            if y + 1 < height {
                graph.add_edge(current, current + width, 1.0);
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn test_random_graph_is_reproducible() {
        let a = generate_random(20, 60, true, 10, 42);
        let b = generate_random(20, 60, true, 10, 42);

        assert_eq!(a.vertex_count(), 20);
        assert_eq!(a.edges(), b.edges());
        assert!(a.edges().iter().all(|e| e.weight >= 1.0 && e.weight <= 10.0));
    }

    #[test]
    fn test_grid_shape() {
        let grid = generate_grid(3, 2);

        assert_eq!(grid.vertex_count(), 6);
        // 2 horizontal edges per row, 3 vertical edges
        assert_eq!(grid.edge_count(), 7);
        assert_eq!(grid.neighbors(&4).len(), 3);
    }
}
