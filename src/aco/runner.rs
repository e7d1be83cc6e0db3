//! Colony driver: the iteration loop.
//!
//! Each iteration:
//!
//! 1. Draw a random start node and an RNG seed for every ant
//! 2. Build every ant's trail against the current pheromone map
//! 3. Pick the iteration-best trail; if it beats the run's best, adopt it
//!    (Max-Min also recomputes its pheromone band)
//! 4. Evaporate and deposit
//!
//! The run stops after the configured number of iterations; there is
//! no convergence-based early exit.

use super::bounds::PheromoneBounds;
use super::config::{AcoConfig, Variant};
use super::construct::construct_trail;
use super::pheromone::PheromoneMap;
use super::types::{AcoProblem, HistorySink, Trail};
use super::update::PheromoneUpdater;
use crate::error::{AcoError, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, info, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of an Ant Colony run.
#[derive(Debug, Clone)]
pub struct AcoResult<S> {
    /// States of the best trail found.
    pub best_path: Vec<S>,

    /// Cost of the best trail.
    pub best_cost: f64,

    /// Iterations executed.
    pub iterations: usize,

    /// Iteration (1-based) in which the best trail was found.
    pub best_iteration: usize,

    /// Best cost after each iteration. Non-increasing.
    pub cost_history: Vec<f64>,

    /// Iteration-best cost of each iteration.
    pub iteration_best_history: Vec<f64>,

    /// Final pheromone band (Max-Min only).
    pub bounds: Option<PheromoneBounds>,
}

/// An ant colony bound to one configuration.
///
/// Owns the pheromone map, the best trail and (for Max-Min) the
/// pheromone band. All three are reset at the start of every `solve`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use u_aco::aco::{AcoConfig, AntColony, Variant};
/// use u_aco::tsp::Tsp;
///
/// let tsp = Tsp::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
/// let config = AcoConfig::default()
///     .with_variant(Variant::MaxMin)
///     .with_rho(0.02)
///     .with_iterations(50);
///
/// let mut colony = AntColony::new(config).unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let result = colony.solve(&tsp, &mut rng).unwrap();
/// assert!((result.best_cost - 4.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct AntColony<S> {
    config: AcoConfig,
    updater: PheromoneUpdater,
    pheromones: PheromoneMap<S>,
    bounds: Option<PheromoneBounds>,
    best: Trail<S>,
}

impl<S> AntColony<S>
where
    S: Clone + Eq + Hash + Debug + Send + Sync,
{
    /// Creates a colony after validating `config`.
    pub fn new(config: AcoConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            updater: PheromoneUpdater::new(&config),
            pheromones: PheromoneMap::new(config.initial_pheromone()),
            bounds: initial_bounds(&config),
            best: Trail::unbounded(),
            config,
        })
    }

    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    /// The pheromone map as left by the last update.
    pub fn pheromones(&self) -> &PheromoneMap<S> {
        &self.pheromones
    }

    /// Current pheromone band (Max-Min only).
    pub fn bounds(&self) -> Option<&PheromoneBounds> {
        self.bounds.as_ref()
    }

    /// Best trail of the current or last run.
    pub fn best(&self) -> &Trail<S> {
        &self.best
    }

    /// Runs the colony on `problem`.
    pub fn solve<P, R>(&mut self, problem: &P, rng: &mut R) -> Result<AcoResult<S>>
    where
        P: AcoProblem<State = S>,
        R: Rng,
    {
        self.solve_with_sink(problem, rng, &mut ())
    }

    /// Runs the colony, reporting progress to `sink`.
    ///
    /// # Errors
    ///
    /// - [`AcoError::DegenerateInstance`] if the problem has fewer than two nodes
    /// - [`AcoError::DegenerateCost`] if an ant finishes a zero-cost trail
    /// - [`AcoError::ContractViolation`] if the problem breaks its contract
    pub fn solve_with_sink<P, R, H>(
        &mut self,
        problem: &P,
        rng: &mut R,
        sink: &mut H,
    ) -> Result<AcoResult<S>>
    where
        P: AcoProblem<State = S>,
        R: Rng,
        H: HistorySink<S> + ?Sized,
    {
        let nodes = problem.node_count();
        if nodes < 2 {
            return Err(AcoError::DegenerateInstance { node_count: nodes });
        }

        self.pheromones.reset();
        self.bounds = initial_bounds(&self.config);
        self.best = Trail::unbounded();

        let ants = self.config.ant_count(nodes);
        let iterations = self.config.iterations;
        let mut best_iteration = 0usize;
        let mut cost_history = Vec::with_capacity(iterations);
        let mut iteration_best_history = Vec::with_capacity(iterations);

        info!(
            event = "solve_start",
            variant = ?self.config.variant,
            nodes,
            ants,
            iterations,
        );

        for iteration in 1..=iterations {
            // All randomness is drawn up front so trails do not depend on
            // whether ants are built serially or in parallel.
            let plans: Vec<(S, u64)> = (0..ants)
                .map(|_| {
                    let node = rng.random_range(0..nodes);
                    (problem.start_state(node), rng.random::<u64>())
                })
                .collect();

            let trails = build_trails(
                problem,
                plans,
                &self.pheromones,
                self.config.alpha,
                self.config.beta,
                self.config.parallel,
            )?;

            let mut iteration_best = 0;
            for (i, trail) in trails.iter().enumerate() {
                if trail.cost <= 0.0 {
                    return Err(AcoError::DegenerateCost);
                }
                if self.config.log_ant_trails {
                    sink.on_ant_trail(trail.cost);
                }
                if trail.cost < trails[iteration_best].cost {
                    iteration_best = i;
                }
            }

            let iteration_best = &trails[iteration_best];
            sink.on_iteration_best(iteration_best.cost);
            iteration_best_history.push(iteration_best.cost);

            if iteration_best.cost < self.best.cost {
                self.best = iteration_best.clone();
                best_iteration = iteration;

                if self.config.variant == Variant::MaxMin {
                    let bounds = PheromoneBounds::from_trail(
                        &self.best,
                        self.config.rho,
                        self.config.q,
                        self.config.p_best,
                    );
                    debug!(
                        event = "bounds_update",
                        iteration,
                        min = bounds.min,
                        max = bounds.max,
                    );
                    self.bounds = Some(bounds);
                }

                debug!(event = "new_best", iteration, cost = self.best.cost);
                sink.on_history(&self.best.path, self.best.cost);
            }

            let depositors = self.updater.update(
                &mut self.pheromones,
                &trails,
                &self.best,
                self.bounds.as_ref(),
            );

            trace!(
                event = "iteration_end",
                iteration,
                iteration_best = iteration_best.cost,
                best = self.best.cost,
                depositors,
                edges = self.pheromones.len(),
            );

            cost_history.push(self.best.cost);
        }

        info!(
            event = "solve_end",
            best_cost = self.best.cost,
            best_iteration,
            edges = self.pheromones.len(),
        );

        Ok(AcoResult {
            best_path: self.best.path.clone(),
            best_cost: self.best.cost,
            iterations,
            best_iteration,
            cost_history,
            iteration_best_history,
            bounds: self.bounds,
        })
    }
}

/// Executes one Ant Colony run with an RNG seeded from the config.
///
/// # Usage
///
/// ```ignore
/// let config = AcoConfig::preset(Variant::RankBased).with_seed(42);
/// let result = AcoRunner::run(&tsp, &config)?;
/// println!("best tour: {}", result.best_cost);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the colony described by `config` on `problem`.
    pub fn run<P: AcoProblem>(problem: &P, config: &AcoConfig) -> Result<AcoResult<P::State>> {
        Self::run_with_sink(problem, config, &mut ())
    }

    /// Runs the colony, reporting progress to `sink`.
    pub fn run_with_sink<P, H>(
        problem: &P,
        config: &AcoConfig,
        sink: &mut H,
    ) -> Result<AcoResult<P::State>>
    where
        P: AcoProblem,
        H: HistorySink<P::State> + ?Sized,
    {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::seed_from_u64(rand::random()),
        };
        let mut colony = AntColony::new(config.clone())?;
        colony.solve_with_sink(problem, &mut rng, sink)
    }
}

fn initial_bounds(config: &AcoConfig) -> Option<PheromoneBounds> {
    config
        .variant
        .is_bounded()
        .then(|| PheromoneBounds::unbounded(config.infinity))
}

fn walk_ant<P: AcoProblem>(
    problem: &P,
    (start, seed): (P::State, u64),
    pheromones: &PheromoneMap<P::State>,
    alpha: f64,
    beta: f64,
) -> Result<Trail<P::State>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    construct_trail(problem, start, pheromones, alpha, beta, &mut rng)
}

#[cfg(feature = "parallel")]
fn build_trails<P: AcoProblem>(
    problem: &P,
    plans: Vec<(P::State, u64)>,
    pheromones: &PheromoneMap<P::State>,
    alpha: f64,
    beta: f64,
    parallel: bool,
) -> Result<Vec<Trail<P::State>>> {
    if parallel {
        plans
            .into_par_iter()
            .map(|plan| walk_ant(problem, plan, pheromones, alpha, beta))
            .collect()
    } else {
        plans
            .into_iter()
            .map(|plan| walk_ant(problem, plan, pheromones, alpha, beta))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn build_trails<P: AcoProblem>(
    problem: &P,
    plans: Vec<(P::State, u64)>,
    pheromones: &PheromoneMap<P::State>,
    alpha: f64,
    beta: f64,
    _parallel: bool,
) -> Result<Vec<Trail<P::State>>> {
    plans
        .into_iter()
        .map(|plan| walk_ant(problem, plan, pheromones, alpha, beta))
        .collect()
}
