use crate::graph::traits::{EdgeWeight, Graph, MutableGraph, VertexId};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A single weighted edge as reported by [`WeightedGraph::edges`]
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<V, W> {
    pub from: V,
    pub to: V,
    pub weight: W,
}

impl<V: fmt::Display, W: fmt::Display> fmt::Display for Edge<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.weight)
    }
}

/// Aggregate statistics about a graph
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStats<W> {
    pub vertex_count: usize,
    /// Number of edges, counting each undirected endpoint pair once
    pub edge_count: usize,
    pub directed: bool,
    pub total_weight: W,
    /// Mean edge weight, zero for a graph without edges
    pub average_weight: W,
    pub has_negative_edge: bool,
}

/// A weighted graph stored as adjacency lists.
///
/// Edges are directional in storage. An undirected graph stores the mirrored
/// entry at insertion time, so traversal never has to special-case it.
#[derive(Debug, Clone)]
pub struct WeightedGraph<V, W = f64>
where
    V: VertexId,
    W: EdgeWeight,
{
    /// Fixed at construction
    directed: bool,

    /// Every vertex referenced by an edge or added explicitly
    vertices: HashSet<V>,

    /// Outgoing edges for each vertex: vertex -> [(neighbor, weight)], in insertion order
    adjacency: HashMap<V, Vec<(V, W)>>,
}

impl<V, W> WeightedGraph<V, W>
where
    V: VertexId,
    W: EdgeWeight,
{
    /// Creates a new empty graph
    pub fn new(directed: bool) -> Self {
        WeightedGraph {
            directed,
            vertices: HashSet::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Creates a new empty directed graph
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Creates a new empty undirected graph
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Returns all vertices sorted by their natural order
    pub fn vertices(&self) -> Vec<&V> {
        let mut vertices: Vec<&V> = self.vertices.iter().collect();
        vertices.sort();
        vertices
    }

    /// Returns every stored edge once.
    ///
    /// For undirected graphs each endpoint pair is emitted exactly once, keyed
    /// by its canonical (sorted) order. The first stored entry for a pair wins,
    /// so parallel undirected edges and the mirrored entries created by
    /// `add_edge` are not reported again.
    pub fn edges(&self) -> Vec<Edge<V, W>> {
        let mut edges = Vec::new();
        let mut seen: HashSet<(&V, &V)> = HashSet::new();

        for from in self.vertices() {
            let Some(list) = self.adjacency.get(from) else {
                continue;
            };

            for (to, weight) in list {
                if !self.directed {
                    let key = if from <= to { (from, to) } else { (to, from) };
                    if !seen.insert(key) {
                        continue;
                    }
                }

                edges.push(Edge {
                    from: from.clone(),
                    to: to.clone(),
                    weight: *weight,
                });
            }
        }

        edges
    }

    /// Returns the number of edges, counting each undirected edge once
    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Gets the weight of the cheapest stored edge from `from` to `to`
    pub fn edge_weight(&self, from: &V, to: &V) -> Option<W> {
        self.neighbors(from)
            .iter()
            .filter(|(target, _)| target == to)
            .map(|(_, weight)| *weight)
            .reduce(W::min)
    }

    /// Returns true if any stored edge weight is negative
    pub fn has_negative_edge(&self) -> bool {
        self.adjacency
            .values()
            .flatten()
            .any(|(_, weight)| *weight < W::zero())
    }

    /// Collects basic statistics about the graph
    pub fn stats(&self) -> GraphStats<W> {
        let edges = self.edges();
        let total_weight = edges
            .iter()
            .fold(W::zero(), |total, edge| total + edge.weight);
        let average_weight = if edges.is_empty() {
            W::zero()
        } else {
            W::from(edges.len()).map_or(W::zero(), |count| total_weight / count)
        };

        GraphStats {
            vertex_count: self.vertices.len(),
            edge_count: edges.len(),
            directed: self.directed,
            total_weight,
            average_weight,
            has_negative_edge: self.has_negative_edge(),
        }
    }

    /// Rebuilds the path from `source` to `target` out of a predecessor map.
    /// See [`crate::algorithm::path::reconstruct_path`].
    pub fn reconstruct_path(
        &self,
        predecessors: &HashMap<V, Option<V>>,
        source: &V,
        target: &V,
    ) -> crate::Result<Option<Vec<V>>> {
        crate::algorithm::path::reconstruct_path(predecessors, source, target)
    }
}

impl<V, W> Default for WeightedGraph<V, W>
where
    V: VertexId,
    W: EdgeWeight,
{
    fn default() -> Self {
        Self::undirected()
    }
}

impl<V, W> Graph<V, W> for WeightedGraph<V, W>
where
    V: VertexId,
    W: EdgeWeight,
{
    fn is_directed(&self) -> bool {
        self.directed
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    fn neighbors(&self, vertex: &V) -> &[(V, W)] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn vertex_iter(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.vertices.iter())
    }
}

impl<V, W> MutableGraph<V, W> for WeightedGraph<V, W>
where
    V: VertexId,
    W: EdgeWeight,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        self.vertices.insert(vertex)
    }

    fn add_edge(&mut self, from: V, to: V, weight: W) {
        self.vertices.insert(from.clone());
        self.vertices.insert(to.clone());

        if !self.directed {
            self.adjacency
                .entry(to.clone())
                .or_default()
                .push((from.clone(), weight));
        }
        self.adjacency.entry(from).or_default().push((to, weight));
    }
}
