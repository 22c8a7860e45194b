//! Loading graphs from files.
//!
//! Two formats are understood:
//!
//! * an edge list, one `origin destination weight` triple per line, with an
//!   optional leading `directed`/`undirected` line and `#` comments
//! * a JSON document `{"directed": bool, "edges": [{"from", "to", "weight"}]}`

pub mod edge_list;
pub mod json;

use log::debug;
use std::fs;
use std::path::Path;

use crate::graph::WeightedGraph;
use crate::Result;

pub use edge_list::parse_edge_list;
pub use json::{export_json, parse_json, EdgeRecord, GraphDocument, VertexLabel};

/// Parses graph text, choosing the format from its content: JSON when it
/// starts with `{`, an edge list otherwise.
pub fn parse_graph(content: &str) -> Result<WeightedGraph<String>> {
    if content.trim_start().starts_with('{') {
        parse_json(content)
    } else {
        parse_edge_list(content)
    }
}

/// Reads and parses a graph file
pub fn load_graph_from_file<P: AsRef<Path>>(path: P) -> Result<WeightedGraph<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let graph = parse_graph(&content)?;

    let stats = graph.stats();
    debug!(
        "Loaded {} ({} vertices, {} edges, directed: {})",
        path.display(),
        stats.vertex_count,
        stats.edge_count,
        stats.directed
    );

    Ok(graph)
}
