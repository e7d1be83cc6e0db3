//! Ant Colony Optimization (ACO).
//!
//! A population-based metaheuristic: in every iteration a colony of
//! ants each walk the problem graph, choosing transitions with
//! probability proportional to `pheromone^alpha * (1 / cost)^beta`.
//! Afterwards pheromone evaporates and the variant's deposit rule
//! reinforces the edges of good trails.
//!
//! # Key Types
//!
//! - [`AcoProblem`]: problem contract (start states, successors, goal)
//! - [`AcoConfig`] / [`Variant`]: parameters and reinforcement strategy
//! - [`AntColony`]: the colony driver; owns pheromones and the best trail
//! - [`AcoRunner`]: one-call entry point seeded from the config
//! - [`PheromoneMap`], [`PheromoneUpdater`], [`PheromoneBounds`]: the
//!   reinforcement model, usable on their own
//! - [`HistorySink`] / [`History`]: optional progress observers
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents", *IEEE Trans. SMC-B* 26(1), 29-41.
//! - Stützle & Hoos (2000), "MAX-MIN Ant System", *FGCS* 16(8), 889-914.
//! - Bullnheimer, Hartl & Strauss (1999), "A New Rank Based Version of
//!   the Ant System", *CEJOR* 7(1), 25-38.

mod bounds;
mod config;
mod construct;
mod pheromone;
mod runner;
mod types;
mod update;

pub use bounds::PheromoneBounds;
pub use config::{AcoConfig, Variant, INITIAL_PHEROMONE};
pub use construct::{construct_trail, desirability};
pub use pheromone::PheromoneMap;
pub use runner::{AcoResult, AcoRunner, AntColony};
pub use types::{AcoProblem, History, HistorySink, Trail};
pub use update::{deposit_amount, PheromoneUpdater};
