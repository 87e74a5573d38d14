use log::debug;
use serde::{Deserialize, Serialize};

use crate::graph::traits::{Graph, Weight};
use crate::{Error, Result};

/// A directed, weighted edge as supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<W> {
    pub from: usize,
    pub to: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(from: usize, to: usize, weight: W) -> Self {
        Edge { from, to, weight }
    }
}

impl<W> From<(usize, usize, W)> for Edge<W> {
    fn from((from, to, weight): (usize, usize, W)) -> Self {
        Edge::new(from, to, weight)
    }
}

/// Caller-facing description of a detour node: paying `cost` at `node`
/// relocates the traveler to `target`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetourSpec<W> {
    pub node: usize,
    pub cost: W,
    pub target: usize,
}

impl<W> DetourSpec<W> {
    pub fn new(node: usize, cost: W, target: usize) -> Self {
        DetourSpec { node, cost, target }
    }
}

impl<W> From<(usize, W, usize)> for DetourSpec<W> {
    fn from((node, cost, target): (usize, W, usize)) -> Self {
        DetourSpec::new(node, cost, target)
    }
}

/// Detour attributes attached to a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detour<W> {
    /// Extra cost paid at the node
    pub cost: W,
    /// Node the traveler is relocated to
    pub target: usize,
}

/// Directed graph over dense node ids `0..n` with optional detour attributes
/// per node.
///
/// The graph carries structure only. Distances, visit flags and predecessors
/// belong to a single shortest-path run and are never stored here.
#[derive(Debug, Clone)]
pub struct DetourGraph<W>
where
    W: Weight,
{
    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,

    /// Detour attributes for each vertex
    detours: Vec<Option<Detour<W>>>,

    edge_count: usize,

    /// Synthetic sink id when this graph was produced by `reverse`
    sink: Option<usize>,
}

impl<W> DetourGraph<W>
where
    W: Weight,
{
    /// Builds a graph sized to the largest endpoint referenced by `edges`.
    ///
    /// Detour nodes and targets must fall inside that range.
    pub fn new(edges: &[Edge<W>], detours: &[DetourSpec<W>]) -> Result<Self> {
        Self::build(required_vertices(edges), edges, detours)
    }

    /// Builds a graph over an explicitly declared node range, which may
    /// include nodes no edge touches.
    pub fn with_vertex_count(
        vertices: usize,
        edges: &[Edge<W>],
        detours: &[DetourSpec<W>],
    ) -> Result<Self> {
        let required = required_vertices(edges);
        if vertices < required {
            return Err(Error::InvalidVertexCount {
                declared: vertices,
                required,
            });
        }
        Self::build(vertices, edges, detours)
    }

    fn build(vertices: usize, edges: &[Edge<W>], detours: &[DetourSpec<W>]) -> Result<Self> {
        let mut outgoing_edges = vec![Vec::new(); vertices];
        for edge in edges {
            if edge.weight < W::zero() {
                return Err(Error::NegativeWeight {
                    from: edge.from,
                    to: edge.to,
                });
            }
            outgoing_edges[edge.from].push((edge.to, edge.weight));
        }

        let mut node_detours = vec![None; vertices];
        for spec in detours {
            for node in [spec.node, spec.target] {
                if node >= vertices {
                    return Err(Error::InvalidNodeReference {
                        node,
                        count: vertices,
                    });
                }
            }
            if spec.cost < W::zero() {
                return Err(Error::NegativeDetourCost(spec.node));
            }
            // A repeated descriptor for the same node replaces the earlier one
            node_detours[spec.node] = Some(Detour {
                cost: spec.cost,
                target: spec.target,
            });
        }

        debug!(
            "built graph with {} vertices, {} edges, {} detour descriptors",
            vertices,
            edges.len(),
            detours.len()
        );

        Ok(DetourGraph {
            outgoing_edges,
            detours: node_detours,
            edge_count: edges.len(),
            sink: None,
        })
    }

    /// Returns the detour offered at `node`, if any
    pub fn detour(&self, node: usize) -> Option<Detour<W>> {
        self.detours.get(node).copied().flatten()
    }

    /// Iterates over every node that offers a detour, in id order
    pub fn detour_nodes(&self) -> impl Iterator<Item = (usize, Detour<W>)> + '_ {
        self.detours
            .iter()
            .enumerate()
            .filter_map(|(node, detour)| detour.map(|d| (node, d)))
    }

    /// Iterates over all edges, grouped by source vertex
    pub fn edges(&self) -> impl Iterator<Item = Edge<W>> + '_ {
        self.outgoing_edges
            .iter()
            .enumerate()
            .flat_map(|(from, edges)| {
                edges
                    .iter()
                    .map(move |&(to, weight)| Edge::new(from, to, weight))
            })
    }

    /// Synthetic sink id if this graph is a reversed view
    pub fn sink(&self) -> Option<usize> {
        self.sink
    }

    /// Copy of this graph in which `terminals` have no outgoing edges, so a
    /// traversal that arrives at one of them stops there. Detours are kept.
    pub fn with_terminals(&self, terminals: &[usize]) -> Result<Self> {
        let vertices = self.vertex_count();
        let mut truncated = self.clone();
        for &node in terminals {
            if node >= vertices {
                return Err(Error::InvalidNodeReference {
                    node,
                    count: vertices,
                });
            }
            truncated.edge_count -= truncated.outgoing_edges[node].len();
            truncated.outgoing_edges[node].clear();
        }
        Ok(truncated)
    }

    /// Produces a new graph with every edge flipped plus one synthetic sink
    /// (id = `vertex_count()`) holding a zero-weight edge to each exit.
    ///
    /// A shortest-path run from the sink over the result yields, for every
    /// node, the distance to its nearest exit in this graph. Detour
    /// attributes are not carried over.
    pub fn reverse(&self, exits: &[usize]) -> Result<Self> {
        let vertices = self.vertex_count();
        if let Some(&node) = exits.iter().find(|&&exit| exit >= vertices) {
            return Err(Error::InvalidNodeReference {
                node,
                count: vertices,
            });
        }

        let sink = vertices;
        let mut outgoing_edges = vec![Vec::new(); vertices + 1];
        for (from, edges) in self.outgoing_edges.iter().enumerate() {
            for &(to, weight) in edges {
                outgoing_edges[to].push((from, weight));
            }
        }

        let mut wired = vec![false; vertices];
        for &exit in exits {
            if !std::mem::replace(&mut wired[exit], true) {
                outgoing_edges[sink].push((exit, W::zero()));
            }
        }

        let edge_count = self.edge_count + outgoing_edges[sink].len();
        debug!("reversed graph: sink {} wired to {} exits", sink, outgoing_edges[sink].len());

        Ok(DetourGraph {
            outgoing_edges,
            detours: vec![None; vertices + 1],
            edge_count,
            sink: Some(sink),
        })
    }
}

impl<W> Graph<W> for DetourGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(vertex) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }
}

fn required_vertices<W>(edges: &[Edge<W>]) -> usize {
    edges
        .iter()
        .map(|edge| edge.from.max(edge.to) + 1)
        .max()
        .unwrap_or(0)
}
