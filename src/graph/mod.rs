pub mod generators;
pub mod traits;
pub mod weighted;

pub use traits::{EdgeWeight, Graph, MutableGraph, VertexId};
pub use weighted::{Edge, GraphStats, WeightedGraph};
