mod ant;
mod message;
mod params;
mod pheromone;
mod supervisor;

pub use ant::{Ant, AntWalk, WalkOutcome};
pub use message::Message;
pub use params::Params;
pub use pheromone::{PheromoneTable, DEFAULT_INTENSITY};
pub use supervisor::Supervisor;

use crate::graph::{GraphError, WeightedGraph};
use crate::metaheuristic::Solution;
use crate::rng::{child_seed, rng64};
use crate::util::Max;

use decorum::R64;
use num_traits::identities::Zero;
use oorandom::Rand64;
use std::io::Write;

/// A found connection between a request's start and goal node, together
/// with its total travelled distance.
#[derive(Debug, Clone, PartialEq)]
pub struct Route<IndexType> {
    pub solution: Solution<IndexType>,
    pub length: R64,
}

/// One colony run: a population of ants repeatedly walking from start
/// towards goal over a shared pheromone table, keeping the cheapest
/// completed walk seen so far.
pub struct Aco<'a, G: WeightedGraph, W: Write> {
    graph: &'a G,
    pheromones: &'a mut PheromoneTable<G::IndexType>,
    start: G::IndexType,
    goal: G::IndexType,
    params: Params,
    best_solution: Option<Solution<G::IndexType>>,
    best_length: R64,
    iteration: usize,
    pub supervisor: Supervisor<W>,
    rng: Rand64,
}

impl<'a, G, W> Aco<'a, G, W>
where
    G: WeightedGraph,
    W: Write,
{
    /// Sets up a colony for one request. Start and goal are validated here,
    /// before any iteration runs; an unknown node fails only this request.
    pub fn new(
        graph: &'a G,
        pheromones: &'a mut PheromoneTable<G::IndexType>,
        start: G::IndexType,
        goal: G::IndexType,
        params: Params,
        supervisor: Supervisor<W>,
    ) -> Result<Self, GraphError<G::IndexType>> {
        if !graph.has_node(&start) {
            return Err(GraphError::MissingNode(start));
        }
        if !graph.has_node(&goal) {
            return Err(GraphError::MissingNode(goal));
        }

        let rng = rng64(params.seed);
        Ok(Aco {
            graph,
            pheromones,
            start,
            goal,
            params,
            best_solution: None,
            best_length: Max::max(),
            iteration: 0,
            supervisor,
            rng,
        })
    }

    /// The cheapest completed walk found so far.
    pub fn best(&self) -> Option<(&Solution<G::IndexType>, R64)> {
        self.best_solution
            .as_ref()
            .map(|solution| (solution, self.best_length))
    }

    /// Runs one round: every ant walks to completion and lays its trail,
    /// then the shared table evaporates once. Returns the new best solution
    /// if this round improved on it.
    pub fn single_iteration(&mut self) -> Option<&Solution<G::IndexType>> {
        let mut improved = false;
        for _ in 0..self.params.ant_count {
            let (sender, id) = self.supervisor.new_ant();
            let seed = child_seed(&mut self.rng);
            let ant = Ant::new(
                self.graph,
                &*self.pheromones,
                self.start.clone(),
                self.goal.clone(),
                self.params.alpha,
                self.params.beta,
                seed,
                sender,
                id,
                self.iteration,
            );

            let walk = ant.walk();
            if walk.arrived() && walk.length < self.best_length {
                self.best_solution = Some(walk.solution.clone());
                self.best_length = walk.length;
                improved = true;
            }
            walk.deposit(&mut *self.pheromones, self.params.q);
        }

        self.pheromones.evaporate(self.params.rho);
        self.supervisor.aggregate_receive(self.iteration);
        self.iteration += 1;

        if improved {
            self.best_solution.as_ref()
        } else {
            None
        }
    }

    /// Runs the configured number of iterations and returns the best route
    /// found, or None if no ant ever reached the goal.
    pub fn run(mut self) -> Option<Route<G::IndexType>> {
        // A request already standing at its goal is answered without
        // touching the ants or the shared table.
        if self.start == self.goal {
            return Some(Route {
                solution: Solution::from_nodes(vec![self.start.clone()]),
                length: R64::zero(),
            });
        }

        for _ in 0..self.params.iterations {
            self.single_iteration();
        }

        let best_length = self.best_length;
        self.best_solution.map(|solution| Route {
            solution,
            length: best_length,
        })
    }
}
