//! Pheromone update: evaporation followed by variant-specific deposit.

use super::bounds::PheromoneBounds;
use super::config::{AcoConfig, Variant};
use super::pheromone::PheromoneMap;
use super::types::Trail;
use std::hash::Hash;

/// Pheromone laid on each edge of a trail with total cost `cost`.
///
/// Cheaper trails deposit more: `q / cost`.
#[inline]
pub fn deposit_amount(q: f64, cost: f64) -> f64 {
    q / cost
}

/// Applies one iteration's pheromone update for a fixed [`Variant`].
///
/// The updater is the only writer of the pheromone map; it runs after
/// every ant of the iteration has finished.
#[derive(Debug, Clone, Copy)]
pub struct PheromoneUpdater {
    variant: Variant,
    rho: f64,
    q: f64,
    elitist: usize,
}

impl PheromoneUpdater {
    pub fn new(config: &AcoConfig) -> Self {
        Self {
            variant: config.variant,
            rho: config.rho,
            q: config.q,
            elitist: config.elitist,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Evaporates, then deposits.
    ///
    /// `best` is the run's best trail, already including this iteration.
    /// `bounds` is the Max-Min band; when present every mutation is
    /// clamped into it. Returns the number of trails that deposited.
    pub fn update<S: Clone + Eq + Hash>(
        &self,
        pheromones: &mut PheromoneMap<S>,
        trails: &[Trail<S>],
        best: &Trail<S>,
        bounds: Option<&PheromoneBounds>,
    ) -> usize {
        self.evaporate(pheromones, bounds);
        self.deposit(pheromones, trails, best, bounds)
    }

    /// Multiplies every stored value by `1 - rho`, then clamps if bounded.
    pub fn evaporate<S: Clone + Eq + Hash>(
        &self,
        pheromones: &mut PheromoneMap<S>,
        bounds: Option<&PheromoneBounds>,
    ) {
        pheromones.evaporate(self.rho);
        if let Some(b) = bounds {
            pheromones.clamp(b.min, b.max);
        }
    }

    /// Deposits pheromone according to the variant's rule.
    ///
    /// Returns the number of trails that deposited (the elitist bonus of
    /// the best trail is not counted separately).
    pub fn deposit<S: Clone + Eq + Hash>(
        &self,
        pheromones: &mut PheromoneMap<S>,
        trails: &[Trail<S>],
        best: &Trail<S>,
        bounds: Option<&PheromoneBounds>,
    ) -> usize {
        match self.variant {
            Variant::AntSystem => {
                for trail in trails {
                    self.lay(pheromones, trail, 1.0, bounds);
                }
                trails.len()
            }
            Variant::Elitist => {
                self.lay(pheromones, best, 1.0 + self.elitist as f64, bounds);
                for trail in trails {
                    self.lay(pheromones, trail, 1.0, bounds);
                }
                trails.len()
            }
            Variant::MaxMin => {
                self.lay(pheromones, best, 1.0, bounds);
                1
            }
            Variant::RankBased => {
                let ranked = rank_by_cost(trails);
                let depositors = self.elitist.min(ranked.len());
                for (rank, &idx) in ranked.iter().take(depositors).enumerate() {
                    let weight = (self.elitist - rank) as f64;
                    self.lay(pheromones, &trails[idx], weight, bounds);
                }
                depositors
            }
        }
    }

    /// Adds `weight * q / cost` to every edge of `trail`.
    fn lay<S: Clone + Eq + Hash>(
        &self,
        pheromones: &mut PheromoneMap<S>,
        trail: &Trail<S>,
        weight: f64,
        bounds: Option<&PheromoneBounds>,
    ) {
        if trail.path.len() < 2 {
            return;
        }
        let amount = weight * deposit_amount(self.q, trail.cost);
        for (from, to) in trail.edges() {
            pheromones.update(from, to, amount);
        }
        if let Some(b) = bounds {
            pheromones.clamp(b.min, b.max);
        }
    }
}

/// Indices of `trails` sorted by ascending cost (best first).
fn rank_by_cost<S>(trails: &[Trail<S>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..trails.len()).collect();
    order.sort_by(|&a, &b| {
        trails[a]
            .cost
            .partial_cmp(&trails[b].cost)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order
}
