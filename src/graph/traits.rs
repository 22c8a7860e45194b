use num_traits::Float;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Identifier of a vertex.
///
/// Any comparable, hashable value works; strings and integers are the usual
/// choices. Ordering is only used for deterministic enumeration.
pub trait VertexId: Clone + Eq + Hash + Ord + Debug + Display {}

impl<T> VertexId for T where T: Clone + Eq + Hash + Ord + Debug + Display {}

/// Numeric edge weight. Distances use the same type, with `infinity()`
/// standing for "unreachable".
pub trait EdgeWeight: Float + Debug + Display + Default {}

impl<T> EdgeWeight for T where T: Float + Debug + Display + Default {}

/// Trait representing a weighted graph as seen by the shortest path engine
pub trait Graph<V, W>: Debug
where
    V: VertexId,
    W: EdgeWeight,
{
    /// Returns true for directed graphs
    fn is_directed(&self) -> bool;

    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns true if the vertex is a member of the vertex set
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Returns the outgoing `(neighbor, weight)` pairs of a vertex.
    /// Unknown vertices and vertices without outgoing edges yield an empty slice.
    fn neighbors(&self, vertex: &V) -> &[(V, W)];

    /// Returns an iterator over every vertex, in no particular order
    fn vertex_iter(&self) -> Box<dyn Iterator<Item = &V> + '_>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: VertexId,
    W: EdgeWeight,
{
    /// Adds an isolated vertex. Returns false if it was already present.
    fn add_vertex(&mut self, vertex: V) -> bool;

    /// Adds an edge, inserting both endpoints if needed. Undirected graphs
    /// also store the mirrored entry.
    fn add_edge(&mut self, from: V, to: V, weight: W);
}
