use crate::graph::{GraphError, WeightedGraph};
use crate::metaheuristic::aco::{Aco, Params, PheromoneTable, Route, Supervisor};
use crate::rng::{child_seed, rng64};

use oorandom::Rand64;
use std::io::{Stderr, Write};

/// One trip to route: where a lorry starts and where it has to go.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest<IndexType> {
    pub start: IndexType,
    pub goal: IndexType,
}

impl<IndexType> RouteRequest<IndexType> {
    pub fn new(start: IndexType, goal: IndexType) -> Self {
        RouteRequest { start, goal }
    }
}

/// Routes an ordered list of requests against one graph and one shared
/// pheromone table.
///
/// Requests run strictly in input order and the table is reused across
/// them, so every request walks into the trails its predecessors left
/// behind. Reordering the input changes the reinforcement later requests
/// observe; the result list always matches the input order.
pub struct Fleet<'a, G: WeightedGraph> {
    graph: &'a G,
    pheromones: PheromoneTable<G::IndexType>,
    params: Params,
    rng: Rand64,
}

impl<'a, G> Fleet<'a, G>
where
    G: WeightedGraph,
{
    pub fn new(graph: &'a G, params: Params) -> Self {
        let rng = rng64(params.seed);
        Fleet {
            graph,
            pheromones: PheromoneTable::new(),
            params,
            rng,
        }
    }

    /// The reinforcement state accumulated by the requests routed so far.
    pub fn pheromones(&self) -> &PheromoneTable<G::IndexType> {
        &self.pheromones
    }

    /// Routes every request in order, reporting colony stats to stderr.
    #[allow(clippy::type_complexity)]
    pub fn route_all(
        &mut self,
        requests: &[RouteRequest<G::IndexType>],
    ) -> Vec<Result<Option<Route<G::IndexType>>, GraphError<G::IndexType>>> {
        self.route_all_with(requests, |_| Supervisor::<Stderr>::default())
    }

    /// Routes every request in order, with a caller-supplied supervisor per
    /// request. A request whose nodes are unknown yields an error in its
    /// slot; the remaining requests still run.
    #[allow(clippy::type_complexity)]
    pub fn route_all_with<W, F>(
        &mut self,
        requests: &[RouteRequest<G::IndexType>],
        mut make_supervisor: F,
    ) -> Vec<Result<Option<Route<G::IndexType>>, GraphError<G::IndexType>>>
    where
        W: Write,
        F: FnMut(usize) -> Supervisor<W>,
    {
        requests
            .iter()
            .enumerate()
            .map(|(index, request)| {
                let params = self.params.with_seed(child_seed(&mut self.rng));
                let colony = Aco::new(
                    self.graph,
                    &mut self.pheromones,
                    request.start.clone(),
                    request.goal.clone(),
                    params,
                    make_supervisor(index),
                )?;
                Ok(colony.run())
            })
            .collect()
    }
}
