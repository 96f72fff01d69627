use crate::graph::WeightedGraph;
use crate::metaheuristic::aco::{Message, PheromoneTable};
use crate::metaheuristic::Solution;
use crate::rng::rng64;

use decorum::{Real, R64};
use num_traits::identities::{One, Zero};
use oorandom::Rand64;
use std::collections::BTreeSet;
use std::sync::mpsc::Sender;
use std::time::Instant;

/// How a walk ended: at the goal node, or unable to make further progress
/// (dead end, length bound, or an unmatched roulette draw).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOutcome {
    Arrived,
    Stuck,
}

/// One stochastic walker. Created fresh for every iteration, walked to
/// completion once and discarded after its trail has been laid.
pub struct Ant<'a, G: WeightedGraph> {
    graph: &'a G,
    pheromones: &'a PheromoneTable<G::IndexType>,
    start: G::IndexType,
    goal: G::IndexType,
    alpha: f64,
    beta: f64,
    rng_seed: u128,
    sender: Sender<Message>,
    id: usize,
    iteration: usize,
}

/// The finished walk of a single ant.
#[derive(Debug, Clone)]
pub struct AntWalk<IndexType> {
    pub solution: Solution<IndexType>,
    pub length: R64,
    pub outcome: WalkOutcome,
}

impl<IndexType> AntWalk<IndexType>
where
    IndexType: Clone + Ord,
{
    pub fn arrived(&self) -> bool {
        self.outcome == WalkOutcome::Arrived
    }

    /// Lays q / length pheromone on every edge of the walk.
    ///
    /// A walk of length zero never took an edge and deposits nothing; this
    /// is the guard that keeps a division by zero out of the shared table.
    pub fn deposit(&self, pheromones: &mut PheromoneTable<IndexType>, q: f64) {
        if self.length == R64::zero() {
            return;
        }

        let amount = R64::from_inner(q) / self.length;
        for (from, to) in self.solution.iter_edges() {
            pheromones.deposit(from, to, amount);
        }
    }
}

impl<'a, G> Ant<'a, G>
where
    G: WeightedGraph,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        graph: &'a G,
        pheromones: &'a PheromoneTable<G::IndexType>,
        start: G::IndexType,
        goal: G::IndexType,
        alpha: f64,
        beta: f64,
        rng_seed: u128,
        sender: Sender<Message>,
        id: usize,
        iteration: usize,
    ) -> Self {
        Ant {
            graph,
            pheromones,
            start,
            goal,
            alpha,
            beta,
            rng_seed,
            sender,
            id,
            iteration,
        }
    }

    /// Walks from start towards the goal until arrival, a dead end, or the
    /// length bound of one node visit per graph node.
    pub fn walk(self) -> AntWalk<G::IndexType> {
        let start_time = Instant::now();
        let mut rng = rng64(self.rng_seed);
        let mut solution = Solution::new();
        solution.push_node(self.start.clone());
        let mut visited: BTreeSet<G::IndexType> = BTreeSet::new();
        visited.insert(self.start.clone());
        let mut current = self.start.clone();
        let mut length = R64::zero();
        let order = self.graph.order();

        let outcome = loop {
            if current == self.goal {
                break WalkOutcome::Arrived;
            }
            if solution.len() >= order {
                break WalkOutcome::Stuck;
            }

            match self.choose_next(&current, &visited, &mut rng) {
                Some((next, weight)) => {
                    solution.push_node(next.clone());
                    visited.insert(next.clone());
                    length = length + weight;
                    current = next;
                }
                None => break WalkOutcome::Stuck,
            }
        };

        // TODO: log errors from sending here
        let _res = self.sender.send(Message::new(
            self.id,
            self.iteration,
            solution.len() - 1,
            start_time.elapsed(),
            length.into_inner(),
            outcome == WalkOutcome::Arrived,
        ));

        AntWalk {
            solution,
            length,
            outcome,
        }
    }

    /// Picks the next hop among the unvisited neighbors of `from` by
    /// roulette-wheel over pheromone^alpha * (1/distance)^beta scores.
    /// Returns None if no unvisited neighbor remains or the draw went
    /// unmatched, in both cases the ant stays where it is.
    fn choose_next(
        &self,
        from: &G::IndexType,
        visited: &BTreeSet<G::IndexType>,
        rng: &mut Rand64,
    ) -> Option<(G::IndexType, R64)> {
        let mut candidates: Vec<(G::IndexType, R64, R64)> = self
            .graph
            .iter_neighbors(from)
            .ok()?
            .filter(|(id, _)| !visited.contains(id))
            .map(|(id, weight)| {
                let score = self.attractiveness(from, &id, weight);
                (id, weight, score)
            })
            .collect();

        if candidates.is_empty() {
            return None;
        }

        let scores: Vec<R64> = candidates.iter().map(|(_, _, score)| *score).collect();
        let index = roulette(&scores, rng.rand_float())?;
        let (id, weight, _) = candidates.swap_remove(index);
        Some((id, weight))
    }

    fn attractiveness(&self, from: &G::IndexType, to: &G::IndexType, weight: R64) -> R64 {
        let pheromone = self.pheromones.intensity(from, to);
        R64::powf(pheromone, R64::from_inner(self.alpha))
            * R64::powf(R64::one() / weight, R64::from_inner(self.beta))
    }
}

/// Roulette-wheel selection: scales the uniform draw from [0, 1) by the
/// score total and returns the first candidate whose cumulative score
/// meets it. Returns None when floating-point rounding keeps the running
/// sum below the scaled draw for every candidate.
fn roulette(scores: &[R64], draw: f64) -> Option<usize> {
    let total = scores.iter().fold(R64::zero(), |acc, &score| acc + score);
    let target = R64::from_inner(draw) * total;

    let mut cumulative = R64::zero();
    for (index, &score) in scores.iter().enumerate() {
        cumulative = cumulative + score;
        if cumulative >= target {
            return Some(index);
        }
    }

    None
}
