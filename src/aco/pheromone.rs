//! Sparse pheromone storage keyed by directed edges.

use std::collections::HashMap;
use std::hash::Hash;

/// Pheromone intensity per directed edge `(from, to)`.
///
/// Logically defined on every edge: edges that were never written read
/// as the map's default. `(a, b)` and `(b, a)` are tracked independently.
/// Lookups never insert, so readers can share the map across threads.
#[derive(Debug, Clone)]
pub struct PheromoneMap<S> {
    values: HashMap<(S, S), f64>,
    default: f64,
    initial: f64,
}

impl<S: Clone + Eq + Hash> PheromoneMap<S> {
    /// Creates an empty map whose unseen edges read as `initial`.
    pub fn new(initial: f64) -> Self {
        Self {
            values: HashMap::new(),
            default: initial,
            initial,
        }
    }

    /// Pheromone on `from -> to`, or the default if never written.
    pub fn get(&self, from: &S, to: &S) -> f64 {
        self.values
            .get(&(from.clone(), to.clone()))
            .copied()
            .unwrap_or(self.default)
    }

    /// Adds `delta` to `from -> to`, starting from the default.
    pub fn update(&mut self, from: &S, to: &S, delta: f64) {
        let default = self.default;
        *self
            .values
            .entry((from.clone(), to.clone()))
            .or_insert(default) += delta;
    }

    /// Multiplies every stored value by `1 - rho`.
    ///
    /// Only edges that were written decay; the default is left alone.
    pub fn evaporate(&mut self, rho: f64) {
        let factor = 1.0 - rho;
        for value in self.values.values_mut() {
            *value *= factor;
        }
    }

    /// Clamps every stored value, and the default, into `[min, max]`.
    ///
    /// `min` must not exceed `max`.
    pub fn clamp(&mut self, min: f64, max: f64) {
        debug_assert!(min <= max, "clamp band is inverted: [{min}, {max}]");
        for value in self.values.values_mut() {
            *value = value.clamp(min, max);
        }
        self.default = self.default.clamp(min, max);
    }

    /// Restores the empty state with the original default.
    pub fn reset(&mut self) {
        self.values.clear();
        self.default = self.initial;
    }

    /// The value read for edges that were never written.
    pub fn default_value(&self) -> f64 {
        self.default
    }

    /// Number of stored edges.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over stored `((from, to), value)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&(S, S), &f64)> {
        self.values.iter()
    }
}
