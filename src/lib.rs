//! Detour SSSP - minimum-cost escape routes with one-shot teleporting detours
//!
//! Finds the cheapest route from a start node to any of several exit nodes in a
//! directed graph with non-negative weights. Some nodes offer a detour: paying a
//! fixed extra cost there relocates the traveler to a designated target node, from
//! which the journey to an exit continues.
//!
//! The answer is assembled from two Dijkstra runs over an indexed binary heap: one
//! forward from the start, one backward from a synthetic sink wired to every exit.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod scenario;

/// Re-export main types for convenient use
pub use algorithm::{
    dijkstra::Dijkstra,
    route::{DetourHop, Route, RouteComposer},
    ShortestPathAlgorithm, ShortestPathResult,
};
pub use config::RouteConfig;
pub use data_structures::IndexedMinHeap;
pub use graph::{DetourGraph, DetourSpec, Edge, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Node {node} referenced outside the node range 0..{count}")]
    InvalidNodeReference { node: usize, count: usize },

    #[error("Declared vertex count {declared} is below the {required} the edges need")]
    InvalidVertexCount { declared: usize, required: usize },

    #[error("Negative edge weight on edge from {from} to {to}")]
    NegativeWeight { from: usize, to: usize },

    #[error("Negative detour cost at node {0}")]
    NegativeDetourCost(usize),

    #[error("At least one exit node is required")]
    NoExits,

    #[error("Heap is full (capacity {0})")]
    HeapCapacity(usize),

    #[error("Node {0} has no entry in the heap")]
    HeapEntryMissing(usize),

    #[error("Distance to vertex {0} does not fit the weight type")]
    WeightOverflow(usize),

    #[error("Predecessor chain broken at vertex {0}")]
    BrokenPath(usize),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Malformed scenario: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
