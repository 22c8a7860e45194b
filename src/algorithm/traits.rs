use std::collections::HashMap;

use crate::algorithm::path::reconstruct_path;
use crate::graph::{EdgeWeight, Graph, VertexId};
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<V, W>
where
    V: VertexId,
    W: EdgeWeight,
{
    /// Source vertex
    pub source: V,

    /// Distance from the source to every vertex; `W::infinity()` when unreachable
    pub distances: HashMap<V, W>,

    /// Predecessor of every vertex in the shortest path tree; `None` for the
    /// source and for unreached vertices
    pub predecessors: HashMap<V, Option<V>>,
}

impl<V, W> ShortestPathResult<V, W>
where
    V: VertexId,
    W: EdgeWeight,
{
    /// Distance to `vertex`, or `None` if the vertex is not part of the graph
    pub fn distance(&self, vertex: &V) -> Option<W> {
        self.distances.get(vertex).copied()
    }

    /// Immediate predecessor of `vertex` on its shortest path
    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        self.predecessors.get(vertex).and_then(Option::as_ref)
    }

    /// True when `vertex` has a finite distance from the source. Unknown
    /// vertices are never reachable.
    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex)
            .is_some_and(|distance| distance < W::infinity())
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances
            .values()
            .filter(|distance| **distance < W::infinity())
            .count()
    }

    /// Shortest path from the source to `target`, `None` when unreachable
    pub fn path_to(&self, target: &V) -> Result<Option<Vec<V>>> {
        reconstruct_path(&self.predecessors, &self.source, target)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<V, W, G>
where
    V: VertexId,
    W: EdgeWeight,
    G: Graph<V, W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<V, W>, target: &V) -> Result<Option<Vec<V>>> {
        result.path_to(target)
    }
}
