//! Max-Min pheromone bounds.
//!
//! # Reference
//!
//! Stützle & Hoos (2000), "MAX-MIN Ant System", *Future Generation
//! Computer Systems* 16(8), 889-914.

use super::types::Trail;

/// Legal pheromone band `[min, max]` for the Max-Min variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PheromoneBounds {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl PheromoneBounds {
    /// The band before any trail is known: `[0, infinity]`.
    pub fn unbounded(infinity: f64) -> Self {
        Self {
            min: 0.0,
            max: infinity,
        }
    }

    /// Derives the band from the best trail found so far.
    ///
    /// ```text
    /// max   = 1 / (1 - rho) * q / cost
    /// root  = p_best ^ (1 / L)
    /// avg   = L / 2
    /// min   = max * (1 - root) / ((avg - 1) * root)
    /// ```
    ///
    /// where `L` is the number of states on the trail. At stagnation the
    /// best trail is then rebuilt with probability about `p_best`.
    ///
    /// `min` is 0 when `avg <= 1`, and never exceeds `max`.
    pub fn from_trail<S>(trail: &Trail<S>, rho: f64, q: f64, p_best: f64) -> Self {
        Self::derive(trail.cost, trail.path.len(), rho, q, p_best)
    }

    /// Same as [`from_trail`](Self::from_trail) from raw cost and path length.
    pub fn derive(cost: f64, path_len: usize, rho: f64, q: f64, p_best: f64) -> Self {
        let max = 1.0 / (1.0 - rho) * q / cost;

        let len = path_len as f64;
        let root = p_best.powf(1.0 / len);
        let avg = len / 2.0;

        let min = if avg > 1.0 {
            max * (1.0 - root) / ((avg - 1.0) * root)
        } else {
            0.0
        };

        Self {
            min: min.min(max),
            max,
        }
    }

    /// Whether `value` lies inside the band, with absolute tolerance `eps`.
    pub fn contains(&self, value: f64, eps: f64) -> bool {
        value >= self.min - eps && value <= self.max + eps
    }
}
