use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::algorithm::route::{Route, RouteComposer};
use crate::config::RouteConfig;
use crate::graph::{DetourGraph, DetourSpec, Edge};
use crate::Result;

/// A complete escape query as stored in a JSON file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub edges: Vec<Edge<u64>>,
    #[serde(default)]
    pub detours: Vec<DetourSpec<u64>>,
    /// Declared node count; derived from the edges when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertices: Option<usize>,
    pub start: usize,
    pub exits: Vec<usize>,
    #[serde(default)]
    pub config: RouteConfig,
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn build_graph(&self) -> Result<DetourGraph<u64>> {
        match self.vertices {
            Some(n) => DetourGraph::with_vertex_count(n, &self.edges, &self.detours),
            None => DetourGraph::new(&self.edges, &self.detours),
        }
    }

    /// Builds the graph and runs the query with this scenario's configuration
    pub fn solve(&self) -> Result<Option<Route<u64>>> {
        let graph = self.build_graph()?;
        RouteComposer::new()
            .with_config(self.config)
            .find_route(&graph, self.start, &self.exits)
    }
}
