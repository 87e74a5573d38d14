use log::{debug, trace};

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::config::RouteConfig;
use crate::graph::{Detour, DetourGraph, Graph, Weight};
use crate::{Error, Result};

/// The detour taken along a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetourHop<W> {
    /// Detour node where the extra cost is paid
    pub node: usize,
    /// Node the traveler is relocated to
    pub target: usize,
    /// Extra cost paid at `node`
    pub cost: W,
    /// Position of `node` in the route path; `target` sits right after it
    pub index: usize,
}

/// A minimum-cost route from the start to an exit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<W> {
    pub cost: W,
    /// Visited nodes in travel order, from the start to an exit
    pub path: Vec<usize>,
    /// The detour hop, if the route uses one
    pub detour: Option<DetourHop<W>>,
}

impl<W> Route<W>
where
    W: Weight,
{
    /// First node of the path
    pub fn start(&self) -> Option<usize> {
        self.path.first().copied()
    }

    /// Last node of the path
    pub fn exit(&self) -> Option<usize> {
        self.path.last().copied()
    }

    /// Cost of every step along the path, in travel order. The step at the
    /// detour hop carries the detour cost.
    ///
    /// Returns `None` if a step is neither an edge nor the detour the node offers.
    pub fn leg_costs(&self, graph: &DetourGraph<W>) -> Option<Vec<W>> {
        self.path
            .windows(2)
            .enumerate()
            .map(|(i, step)| {
                let (from, to) = (step[0], step[1]);
                match self.detour {
                    Some(hop) if hop.index == i => {
                        let offered = graph.detour(from)?;
                        (offered.target == to && offered.cost == hop.cost).then_some(offered.cost)
                    }
                    _ => graph.get_edge_weight(from, to),
                }
            })
            .collect()
    }

    /// Recomputes the route cost from `graph`: edge weights between
    /// consecutive nodes plus the detour cost at the hop.
    pub fn recompute_cost(&self, graph: &DetourGraph<W>) -> Option<W> {
        self.leg_costs(graph)?
            .into_iter()
            .try_fold(W::zero(), |total, leg| total.checked_sum(leg))
    }

    /// Checks the route against `graph` and the query it answers: it starts
    /// at `start`, ends at an exit, places the detour hop where it claims,
    /// and its steps add up to `cost`.
    pub fn verify(&self, graph: &DetourGraph<W>, start: usize, exits: &[usize]) -> bool {
        let ends_ok = self.start() == Some(start)
            && self.exit().map_or(false, |exit| exits.contains(&exit));
        let hop_ok = self.detour.map_or(true, |hop| {
            self.path.get(hop.index) == Some(&hop.node)
                && self.path.get(hop.index + 1) == Some(&hop.target)
        });
        ends_ok && hop_ok && self.recompute_cost(graph) == Some(self.cost)
    }
}

/// A way of reaching an exit, before its path is reconstructed
#[derive(Debug, Clone, Copy)]
enum Candidate<W> {
    Direct { exit: usize },
    Detour { node: usize, detour: Detour<W> },
}

/// Finds the cheapest escape route using one forward and one backward
/// shortest-path run.
///
/// The forward run gives the cost of reaching every node from the start. The
/// backward run, over the reversed graph from a synthetic sink wired to all
/// exits, gives every node's cost to its nearest exit. A detour at `x` to
/// `t` then costs `forward(x) + detour_cost(x) + backward(t)`.
#[derive(Debug, Default)]
pub struct RouteComposer<A = Dijkstra> {
    algorithm: A,
    config: RouteConfig,
}

impl RouteComposer<Dijkstra> {
    /// Creates a composer backed by Dijkstra with the default configuration
    pub fn new() -> Self {
        Self::with_algorithm(Dijkstra::new())
    }
}

impl<A> RouteComposer<A> {
    /// Creates a composer backed by a specific shortest-path algorithm
    pub fn with_algorithm(algorithm: A) -> Self {
        RouteComposer {
            algorithm,
            config: RouteConfig::default(),
        }
    }

    pub fn with_config(mut self, config: RouteConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    /// Finds a minimum-cost route from `start` to any node in `exits`.
    ///
    /// Returns `Ok(None)` when no exit can be reached. Ties between equally
    /// cheap candidates go to the first one found: direct routes in exit
    /// order, then detours in node order.
    pub fn find_route<W>(
        &self,
        graph: &DetourGraph<W>,
        start: usize,
        exits: &[usize],
    ) -> Result<Option<Route<W>>>
    where
        W: Weight,
        A: ShortestPathAlgorithm<W, DetourGraph<W>>,
    {
        if exits.is_empty() {
            return Err(Error::NoExits);
        }
        let n = graph.vertex_count();
        if let Some(&bad) = std::iter::once(&start).chain(exits).find(|&&v| v >= n) {
            return Err(Error::InvalidVertex(bad));
        }

        // Arriving at an exit ends the journey unless detours may leave from exits
        let forward = if self.config.detour_from_exits {
            self.algorithm.compute_shortest_paths(graph, start)?
        } else {
            let truncated = graph.with_terminals(exits)?;
            self.algorithm.compute_shortest_paths(&truncated, start)?
        };
        let reversed = graph.reverse(exits)?;
        // `reverse` appends the sink right after the existing vertices
        let sink = n;
        let backward = self.algorithm.compute_shortest_paths(&reversed, sink)?;
        debug!(
            "{}: forward and backward runs done for start {} and {} exits",
            self.algorithm.name(),
            start,
            exits.len()
        );

        let mut is_exit = vec![false; n];
        for &exit in exits {
            is_exit[exit] = true;
        }

        let Some((cost, winner)) = self.select(graph, &forward, &backward, exits, &is_exit)? else {
            debug!("no route from {} to any exit", start);
            return Ok(None);
        };

        let route = match winner {
            Candidate::Direct { exit } => Route {
                cost,
                path: forward.path_to(exit).ok_or(Error::BrokenPath(exit))?,
                detour: None,
            },
            Candidate::Detour { node, detour } => {
                let mut path = forward.path_to(node).ok_or(Error::BrokenPath(node))?;
                let index = path.len() - 1;

                // The backward chain runs target -> ... -> exit -> sink
                let mut tail = backward
                    .chain_from(detour.target)
                    .ok_or(Error::BrokenPath(detour.target))?;
                tail.pop();
                path.extend(tail);

                Route {
                    cost,
                    path,
                    detour: Some(DetourHop {
                        node,
                        target: detour.target,
                        cost: detour.cost,
                        index,
                    }),
                }
            }
        };

        debug!("route found: cost {:?}, {} nodes", route.cost, route.path.len());
        Ok(Some(route))
    }

    /// Picks the cheapest candidate.
    ///
    /// A detour whose total overflows the weight type loses to any
    /// representable candidate; it is only an error when nothing else is left.
    fn select<W>(
        &self,
        graph: &DetourGraph<W>,
        forward: &ShortestPathResult<W>,
        backward: &ShortestPathResult<W>,
        exits: &[usize],
        is_exit: &[bool],
    ) -> Result<Option<(W, Candidate<W>)>>
    where
        W: Weight,
    {
        let mut overflowed = None;
        let mut best: Option<(W, Candidate<W>)> = None;
        let mut consider = |cost: W, candidate: Candidate<W>| {
            trace!("candidate {:?} costs {:?}", candidate, cost);
            if best.map_or(true, |(best_cost, _)| cost < best_cost) {
                best = Some((cost, candidate));
            }
        };

        if self.config.allow_direct {
            for &exit in exits {
                if let Some(cost) = forward.distance(exit) {
                    consider(cost, Candidate::Direct { exit });
                }
            }
        }

        for (node, detour) in graph.detour_nodes() {
            if is_exit[node] && !self.config.detour_from_exits {
                continue;
            }
            let to_node = forward.distance(node);
            let to_exit = backward.distance(detour.target);
            let (Some(to_node), Some(to_exit)) = (to_node, to_exit) else {
                continue;
            };
            match to_node.checked_sum(detour.cost).and_then(|c| c.checked_sum(to_exit)) {
                Some(cost) => consider(cost, Candidate::Detour { node, detour }),
                None => overflowed = overflowed.or(Some(node)),
            }
        }

        match (best, overflowed) {
            (None, Some(node)) => Err(Error::WeightOverflow(node)),
            (best, _) => Ok(best),
        }
    }
}
