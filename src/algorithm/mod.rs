pub mod traits;
pub mod dijkstra;
pub mod route;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
