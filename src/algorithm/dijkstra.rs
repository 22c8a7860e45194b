use log::{debug, trace, warn};
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinQueue;
use crate::graph::{Edge, EdgeWeight, Graph, VertexId};
use crate::{Error, Result};

/// Outcome of [`validate`]. Advisory only: [`run`] accepts any graph.
#[derive(Debug, Clone, PartialEq)]
pub enum Validation<V, W> {
    Valid,
    /// The first edge found with a negative weight
    NegativeEdge(Edge<V, W>),
}

impl<V, W> Validation<V, W>
where
    V: VertexId,
    W: EdgeWeight,
{
    pub fn is_ok(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    /// Human readable reason when the graph is not suitable
    pub fn reason(&self) -> Option<String> {
        match self {
            Validation::Valid => None,
            Validation::NegativeEdge(edge) => Some(format!(
                "Negative edge found: {} -> {} with weight {}",
                edge.from, edge.to, edge.weight
            )),
        }
    }

    /// Turns the advisory into an error for callers that refuse negative edges
    pub fn into_result(self) -> Result<()> {
        match self {
            Validation::Valid => Ok(()),
            Validation::NegativeEdge(edge) => Err(Error::NegativeEdge {
                from: edge.from.to_string(),
                to: edge.to.to_string(),
                weight: edge.weight.to_string(),
            }),
        }
    }
}

/// Checks that the graph is suitable for Dijkstra's algorithm.
///
/// Vertices are scanned in sorted order so the reported edge is deterministic.
pub fn validate<V, W, G>(graph: &G) -> Validation<V, W>
where
    V: VertexId,
    W: EdgeWeight,
    G: Graph<V, W> + ?Sized,
{
    let mut vertices: Vec<&V> = graph.vertex_iter().collect();
    vertices.sort();

    for from in vertices {
        for (to, weight) in graph.neighbors(from) {
            if *weight < W::zero() {
                warn!("Negative edge {} -> {} ({}): distances may be wrong", from, to, weight);
                return Validation::NegativeEdge(Edge {
                    from: from.clone(),
                    to: to.clone(),
                    weight: *weight,
                });
            }
        }
    }

    Validation::Valid
}

/// Computes shortest distances and predecessors from `source`.
///
/// Stale queue entries are skipped through the finalized set rather than
/// removed. Relaxation only overwrites on strict improvement, so the first
/// vertex to reach a minimum stays the predecessor.
pub fn run<V, W, G>(graph: &G, source: &V) -> Result<ShortestPathResult<V, W>>
where
    V: VertexId,
    W: EdgeWeight,
    G: Graph<V, W> + ?Sized,
{
    let n = graph.vertex_count();
    let mut distances: HashMap<V, W> = HashMap::with_capacity(n);
    let mut predecessors: HashMap<V, Option<V>> = HashMap::with_capacity(n);

    if n == 0 {
        debug!("Empty graph, nothing to compute from {}", source);
        return Ok(ShortestPathResult {
            source: source.clone(),
            distances,
            predecessors,
        });
    }

    if !graph.has_vertex(source) {
        return Err(Error::UnknownSource(source.to_string()));
    }

    for vertex in graph.vertex_iter() {
        distances.insert(vertex.clone(), W::infinity());
        predecessors.insert(vertex.clone(), None);
    }
    distances.insert(source.clone(), W::zero());

    let mut finalized: HashSet<V> = HashSet::with_capacity(n);
    let mut queue = MinQueue::new();
    queue.push(source.clone(), W::zero());

    while let Some((u, dist_u)) = queue.pop() {
        // Stale entry
        if finalized.contains(&u) {
            continue;
        }
        finalized.insert(u.clone());

        // Everything left is unreachable
        if dist_u == W::infinity() {
            break;
        }
        trace!("Finalized {} at distance {}", u, dist_u);

        for (v, weight) in graph.neighbors(&u) {
            if finalized.contains(v) {
                continue;
            }

            let candidate = dist_u + *weight;
            let current = distances.get(v).copied().unwrap_or_else(W::infinity);
            if candidate < current {
                trace!("Relaxed {} -> {}: {} -> {}", u, v, current, candidate);
                distances.insert(v.clone(), candidate);
                predecessors.insert(v.clone(), Some(u.clone()));
                queue.push(v.clone(), candidate);
            }
        }
    }

    debug!(
        "Dijkstra from {}: reached {} of {} vertices",
        source,
        finalized.len(),
        n
    );

    Ok(ShortestPathResult {
        source: source.clone(),
        distances,
        predecessors,
    })
}

/// Shortest path and distance from `source` to `target`.
///
/// An unreachable (or unknown) target yields `(None, W::infinity())`.
pub fn dijkstra_path<V, W, G>(graph: &G, source: &V, target: &V) -> Result<(Option<Vec<V>>, W)>
where
    V: VertexId,
    W: EdgeWeight,
    G: Graph<V, W> + ?Sized,
{
    let result = run(graph, source)?;

    let distance = result.distance(target).unwrap_or_else(W::infinity);
    if distance == W::infinity() {
        return Ok((None, W::infinity()));
    }

    let path = result.path_to(target)?;
    Ok((path, distance))
}

/// Runs [`run`] independently from each source over the same read-only graph,
/// in parallel. Results come back in the order of `sources`.
pub fn run_from_sources<V, W, G>(graph: &G, sources: &[V]) -> Vec<Result<ShortestPathResult<V, W>>>
where
    V: VertexId + Send + Sync,
    W: EdgeWeight + Send + Sync,
    G: Graph<V, W> + Sync,
{
    sources.par_iter().map(|source| run(graph, source)).collect()
}

/// Classic Dijkstra's algorithm implementation
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for Dijkstra
where
    V: VertexId,
    W: EdgeWeight,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>> {
        run(graph, source)
    }
}
