//! Dijkstra SSSP - Single-Source Shortest Paths over weighted graphs
//!
//! This library implements Dijkstra's label-setting algorithm over a generic
//! weighted graph (directed or undirected) and reconstructs concrete shortest
//! paths from the resulting predecessor map.
//!
//! Edge weights must be non-negative for the distances to be correct. Graphs
//! with negative edges are accepted but [`algorithm::validate`] reports them.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod io;
pub mod report;

pub use algorithm::{
    dijkstra::{dijkstra_path, run, run_from_sources, validate, Dijkstra, Validation},
    path::reconstruct_path,
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{Edge, GraphStats, WeightedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unknown source vertex: {0}")]
    UnknownSource(String),

    #[error("Predecessor map inconsistent with source {expected} (tracing back from {target})")]
    InconsistentPredecessors { expected: String, target: String },

    #[error("Negative edge found: {from} -> {to} with weight {weight}")]
    NegativeEdge {
        from: String,
        to: String,
        weight: String,
    },

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
