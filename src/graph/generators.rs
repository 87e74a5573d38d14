use rand::prelude::*;
use rand::rngs::StdRng;

use crate::graph::detour::{DetourSpec, Edge};

/// Random escape network: edges, detour descriptors and the node count they span
#[derive(Debug, Clone)]
pub struct RandomNetwork {
    pub vertices: usize,
    pub edges: Vec<Edge<u64>>,
    pub detours: Vec<DetourSpec<u64>>,
}

/// Generates a seeded random network with `n` vertices, `m` edges and up to
/// `detours` detour nodes. Weights and detour costs are drawn from `0..=max_weight`.
///
/// The same seed always yields the same network.
pub fn random_network(
    n: usize,
    m: usize,
    detours: usize,
    max_weight: u64,
    seed: u64,
) -> RandomNetwork {
    assert!(n > 0, "n must be positive");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(m);
    for _ in 0..m {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        edges.push(Edge::new(u, v, rng.gen_range(0..=max_weight)));
    }

    let mut nodes: Vec<usize> = (0..n).collect();
    nodes.shuffle(&mut rng);
    let detours = nodes
        .into_iter()
        .take(detours.min(n))
        .map(|node| DetourSpec::new(node, rng.gen_range(0..=max_weight), rng.gen_range(0..n)))
        .collect();

    RandomNetwork {
        vertices: n,
        edges,
        detours,
    }
}

/// Generates a `width` x `height` grid where each cell links to its right and
/// lower neighbours with unit weight
pub fn grid_network(width: usize, height: usize) -> Vec<Edge<u64>> {
    let index = |x: usize, y: usize| -> usize { y * width + x };
    let mut edges = Vec::new();
    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                edges.push(Edge::new(index(x, y), index(x + 1, y), 1));
            }
            if y + 1 < height {
                edges.push(Edge::new(index(x, y), index(x, y + 1), 1));
            }
        }
    }
    edges
}
