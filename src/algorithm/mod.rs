pub mod dijkstra;
pub mod path;
pub mod traits;

pub use dijkstra::{dijkstra_path, run, run_from_sources, validate, Dijkstra, Validation};
pub use path::reconstruct_path;
pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
