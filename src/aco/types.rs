//! Core trait and value types for the ACO engine.

use std::fmt::Debug;
use std::hash::Hash;

/// Defines a path-construction problem for Ant Colony Optimization.
///
/// The engine never inspects states; it only hashes them to key
/// pheromone on directed edges `(from, to)`.
///
/// # Contract
///
/// - [`successors`](AcoProblem::successors) must return at least one
///   candidate for every non-goal state. When nothing is left to visit,
///   the problem returns the forced transition that closes the path.
/// - Edge costs must be non-negative.
///
/// # Examples
///
/// ```ignore
/// impl AcoProblem for Tsp {
///     type State = TspState;
///
///     fn node_count(&self) -> usize { self.cities.len() }
///     fn start_state(&self, node: usize) -> TspState { TspState::start(node) }
///     fn successors(&self, s: &TspState) -> Vec<(TspState, f64)> { ... }
///     fn is_goal(&self, s: &TspState) -> bool { ... }
/// }
/// ```
pub trait AcoProblem: Send + Sync {
    /// The construction state type.
    type State: Clone + Eq + Hash + Debug + Send + Sync;

    /// Number of nodes; ants start on a node drawn uniformly from `0..node_count`.
    fn node_count(&self) -> usize;

    /// The state an ant starting on `node` begins its walk in.
    fn start_state(&self, node: usize) -> Self::State;

    /// Candidate transitions `(next_state, edge_cost)` from `state`.
    fn successors(&self, state: &Self::State) -> Vec<(Self::State, f64)>;

    /// Whether `state` completes a path.
    fn is_goal(&self, state: &Self::State) -> bool;
}

/// One constructed path and its total cost.
///
/// `path.len()` is the number of transitions plus one.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail<S> {
    /// Visited states in order, starting with the start state.
    pub path: Vec<S>,
    /// Sum of the edge costs traversed.
    pub cost: f64,
}

impl<S> Trail<S> {
    /// An empty trail with infinite cost, worse than any real trail.
    pub fn unbounded() -> Self {
        Self {
            path: Vec::new(),
            cost: f64::INFINITY,
        }
    }

    /// Iterates over consecutive `(from, to)` edges of the path.
    pub fn edges(&self) -> impl Iterator<Item = (&S, &S)> {
        self.path.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Number of transitions; 0 for an empty or single-state path.
    pub fn transitions(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Whether the path holds no states at all.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// Observer for colony progress.
///
/// Purely observational: nothing it does influences the search. All
/// methods default to no-ops.
pub trait HistorySink<S> {
    /// Called once per ant per iteration when
    /// [`AcoConfig::log_ant_trails`](super::AcoConfig::log_ant_trails) is set.
    fn on_ant_trail(&mut self, _cost: f64) {}

    /// Called once per iteration with the iteration-best cost.
    fn on_iteration_best(&mut self, _cost: f64) {}

    /// Called whenever the run's best solution improves.
    fn on_history(&mut self, _path: &[S], _cost: f64) {}
}

/// Sink that ignores every event.
impl<S> HistorySink<S> for () {}

/// Sink that records every event in memory.
#[derive(Debug, Clone)]
pub struct History<S> {
    /// Every reported ant trail cost, in order.
    pub ant_costs: Vec<f64>,
    /// Iteration-best cost of every iteration.
    pub iteration_best: Vec<f64>,
    /// Successive improvements of the best solution.
    pub improvements: Vec<Trail<S>>,
}

impl<S> Default for History<S> {
    fn default() -> Self {
        Self {
            ant_costs: Vec::new(),
            iteration_best: Vec::new(),
            improvements: Vec::new(),
        }
    }
}

impl<S> History<S> {
    pub fn new() -> Self {
        Self::default()
    }

}

impl<S: Clone> HistorySink<S> for History<S> {
    fn on_ant_trail(&mut self, cost: f64) {
        self.ant_costs.push(cost);
    }

    fn on_iteration_best(&mut self, cost: f64) {
        self.iteration_best.push(cost);
    }

    fn on_history(&mut self, path: &[S], cost: f64) {
        self.improvements.push(Trail {
            path: path.to_vec(),
            cost,
        });
    }
}
