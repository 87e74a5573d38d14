pub mod traits;
pub mod detour;
pub mod generators;

pub use traits::{Graph, Weight};
pub use detour::{Detour, DetourGraph, DetourSpec, Edge};
