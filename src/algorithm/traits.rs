use log::warn;

use crate::graph::{Graph, Weight};
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Distances from source to each vertex, `None` when unreachable
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    /// Final distance to `vertex`, `None` when unreachable or out of range
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Walks predecessor pointers from `vertex` back to the source.
    ///
    /// The returned chain starts at `vertex` and ends at the source. Returns
    /// `None` if `vertex` is unreachable or the chain is broken.
    pub fn chain_from(&self, vertex: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(vertex) {
            return None;
        }

        let mut chain = vec![vertex];
        let mut current = vertex;
        while current != self.source {
            match self.predecessors[current] {
                Some(pred) => current = pred,
                None => {
                    warn!("broken predecessor chain at vertex {}", current);
                    return None;
                }
            }
            chain.push(current);

            // A chain longer than the graph means the pointers loop
            if chain.len() > self.predecessors.len() {
                warn!("predecessor chain from {} exceeds graph size", vertex);
                return None;
            }
        }

        Some(chain)
    }

    /// Shortest path from the source to `vertex`, in travel order
    pub fn path_to(&self, vertex: usize) -> Option<Vec<usize>> {
        let mut path = self.chain_from(vertex)?;
        path.reverse();
        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        result.path_to(target)
    }
}
