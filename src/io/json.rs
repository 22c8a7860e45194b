use serde::{Deserialize, Serialize};
use std::fmt;

use crate::graph::{Graph, MutableGraph, VertexId, WeightedGraph};
use crate::Result;

/// A vertex label as written in JSON files: either a string or an integer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VertexLabel {
    Integer(i64),
    Text(String),
}

impl fmt::Display for VertexLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexLabel::Integer(value) => write!(f, "{}", value),
            VertexLabel::Text(value) => f.write_str(value),
        }
    }
}

/// One edge of a JSON graph document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: VertexLabel,
    pub to: VertexLabel,
    pub weight: f64,
}

/// JSON representation of a graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub directed: bool,
    /// Every vertex, isolated ones included. Optional on load, where edges
    /// add their endpoints anyway
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertices: Option<Vec<VertexLabel>>,
    pub edges: Vec<EdgeRecord>,
}

impl GraphDocument {
    /// Builds the graph described by this document
    pub fn into_graph(self) -> WeightedGraph<String> {
        let mut graph = WeightedGraph::new(self.directed);
        for label in self.vertices.into_iter().flatten() {
            graph.add_vertex(label.to_string());
        }
        for edge in self.edges {
            graph.add_edge(edge.from.to_string(), edge.to.to_string(), edge.weight);
        }
        graph
    }

    /// Captures a graph, listing vertices in sorted order
    pub fn from_graph<V: VertexId>(graph: &WeightedGraph<V>) -> Self {
        let label = |vertex: &V| VertexLabel::Text(vertex.to_string());

        GraphDocument {
            directed: graph.is_directed(),
            vertices: Some(graph.vertices().into_iter().map(label).collect()),
            edges: graph
                .edges()
                .into_iter()
                .map(|edge| EdgeRecord {
                    from: label(&edge.from),
                    to: label(&edge.to),
                    weight: edge.weight,
                })
                .collect(),
        }
    }
}

/// Parses a JSON graph document
pub fn parse_json(content: &str) -> Result<WeightedGraph<String>> {
    let document: GraphDocument = serde_json::from_str(content)?;
    Ok(document.into_graph())
}

/// Serializes a graph as a pretty-printed JSON document
pub fn export_json<V: VertexId>(graph: &WeightedGraph<V>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&GraphDocument::from_graph(graph))?)
}
