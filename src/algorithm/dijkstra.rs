use log::debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::IndexedMinHeap;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Heap key: every reached distance orders before "not reached yet"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Tentative<W> {
    Reached(W),
    Unreached,
}

impl<W: Copy> From<Option<W>> for Tentative<W> {
    fn from(distance: Option<W>) -> Self {
        distance.map_or(Tentative::Unreached, Tentative::Reached)
    }
}

/// Working state of one node during a single run
#[derive(Debug, Clone, Copy)]
struct NodeState<W> {
    distance: Option<W>,
    visited: bool,
    discovered: bool,
    predecessor: Option<usize>,
    /// Some relaxation into this node produced an unrepresentable distance
    overflowed: bool,
}

impl<W> Default for NodeState<W> {
    fn default() -> Self {
        NodeState {
            distance: None,
            visited: false,
            discovered: false,
            predecessor: None,
            overflowed: false,
        }
    }
}

/// Classic Dijkstra's algorithm over an indexed binary heap.
///
/// Every vertex is seeded into the heap up front and keys are lowered in
/// place, so each vertex is extracted exactly once. All per-node state is
/// allocated fresh for each call.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();
        let mut nodes: Vec<NodeState<W>> = vec![NodeState::default(); n];
        nodes[source].distance = Some(W::zero());

        let mut queue = IndexedMinHeap::new(n);
        for (vertex, state) in nodes.iter().enumerate() {
            queue.insert(Tentative::from(state.distance), vertex)?;
        }
        // The source must surface first even though others were inserted around it
        queue.update(Tentative::Reached(W::zero()), source)?;

        let mut settled = 0usize;
        while let Some((_, u)) = queue.extract_min() {
            nodes[u].visited = true;
            nodes[u].discovered = true;

            // Everything left in the heap is unreachable
            let Some(dist_u) = nodes[u].distance else {
                continue;
            };
            settled += 1;

            for (v, weight) in graph.outgoing_edges(u) {
                let target = &mut nodes[v];
                // Any representable distance beats one that overflows
                let Some(new_dist) = dist_u.checked_sum(weight) else {
                    target.overflowed = true;
                    continue;
                };

                if !target.discovered {
                    target.discovered = true;
                } else if target.visited || target.distance.map_or(false, |d| d <= new_dist) {
                    continue;
                }

                target.distance = Some(new_dist);
                target.predecessor = Some(u);
                queue.update(Tentative::Reached(new_dist), v)?;
            }
        }

        debug!("dijkstra from {}: settled {} of {} vertices", source, settled, n);

        if let Some(vertex) = nodes.iter().position(|s| s.overflowed && s.distance.is_none()) {
            return Err(Error::WeightOverflow(vertex));
        }

        Ok(ShortestPathResult {
            distances: nodes.iter().map(|state| state.distance).collect(),
            predecessors: nodes.iter().map(|state| state.predecessor).collect(),
            source,
        })
    }
}
