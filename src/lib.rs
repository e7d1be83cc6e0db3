//! Domain-agnostic Ant Colony Optimization.
//!
//! Solves path-construction problems by repeated probabilistic graph
//! walks reinforced through a shared pheromone signal:
//!
//! - **Ant System**: every ant deposits pheromone on its trail.
//! - **Elitist Ant System**: the best-so-far trail deposits an extra bonus.
//! - **Max-Min Ant System**: only the best-so-far trail deposits, and all
//!   pheromone values are kept inside a dynamically derived band.
//! - **Rank-based Ant System**: only the top-ranked trails of each
//!   iteration deposit, weighted by rank.
//!
//! # Architecture
//!
//! The [`aco`] module holds the engine. It depends on the problem only
//! through the [`aco::AcoProblem`] trait. The [`tsp`] module ships a
//! reference Traveling Salesman model and an exact brute-force solver
//! used as an oracle.

pub mod aco;
pub mod error;
pub mod tsp;

pub use error::{AcoError, Result};
