//! ACO configuration and variant selection.

use crate::error::{AcoError, Result};

/// Pheromone reinforcement strategy.
///
/// Fixed when the colony is built; the variants differ only in which
/// trails deposit pheromone and whether values are bounded.
///
/// # References
///
/// - AntSystem: Dorigo, Maniezzo & Colorni (1996)
/// - Elitist: Dorigo (1992), PhD thesis
/// - MaxMin: Stützle & Hoos (2000)
/// - RankBased: Bullnheimer, Hartl & Strauss (1999)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// Every ant deposits `Q / cost` on its trail.
    #[default]
    AntSystem,

    /// Every ant deposits; the best-so-far trail adds
    /// `Q / cost * (1 + elitist)` on top.
    Elitist,

    /// Only the best-so-far trail deposits; pheromone values are clamped
    /// to `[min, max]` derived from that trail.
    MaxMin,

    /// Only the `elitist` best trails of the iteration deposit, the trail
    /// at rank `r` scaled by `elitist - r`.
    RankBased,
}

impl Variant {
    /// Returns whether pheromone values are clamped to a band.
    pub fn is_bounded(self) -> bool {
        matches!(self, Variant::MaxMin)
    }
}

/// Configuration for the Ant Colony Optimization engine.
///
/// # Examples
///
/// ```
/// use u_aco::aco::{AcoConfig, Variant};
///
/// let config = AcoConfig::default()
///     .with_variant(Variant::RankBased)
///     .with_elitist(6)
///     .with_rho(0.1)
///     .with_iterations(200)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Reinforcement strategy.
    pub variant: Variant,

    /// Pheromone exponent. Higher values favor reinforced edges.
    pub alpha: f64,

    /// Heuristic exponent applied to inverse edge cost.
    pub beta: f64,

    /// Evaporation rate in (0, 1].
    pub rho: f64,

    /// Pheromone quantity deposited per trail, divided by trail cost.
    pub q: f64,

    /// Elitist weight (Elitist) or number of ranked depositors (RankBased).
    pub elitist: usize,

    /// Ants per iteration. 0 = one ant per node.
    pub ants: usize,

    /// Number of iterations. The only termination condition.
    pub iterations: usize,

    /// Initial pheromone ceiling for Max-Min, also its lazy default.
    pub infinity: f64,

    /// Target probability of reconstructing the best trail at stagnation
    /// (Max-Min bound derivation). Must lie in (0, 1).
    pub p_best: f64,

    /// Whether to construct the ants of an iteration in parallel.
    ///
    /// Requires the `parallel` feature; ignored otherwise. Results do
    /// not depend on this flag.
    pub parallel: bool,

    /// Whether to report every ant's trail cost to the history sink.
    pub log_ant_trails: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

/// Default pheromone on an unseen edge for the unbounded variants.
pub const INITIAL_PHEROMONE: f64 = 1e-6;

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            variant: Variant::AntSystem,
            alpha: 1.0,
            beta: 3.0,
            rho: 0.4,
            q: 1.0,
            elitist: 3,
            ants: 0,
            iterations: 100,
            infinity: 1e9,
            p_best: 0.05,
            parallel: false,
            log_ant_trails: false,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Returns a configuration tuned for the given variant.
    ///
    /// Max-Min evaporates slowly (`rho = 0.02`) under a lower ceiling;
    /// Rank-based ranks six ants with `rho = 0.1`.
    pub fn preset(variant: Variant) -> Self {
        let base = Self::default().with_variant(variant);
        match variant {
            Variant::AntSystem | Variant::Elitist => base,
            Variant::MaxMin => base.with_infinity(1e5).with_rho(0.02),
            Variant::RankBased => base.with_elitist(6).with_rho(0.1),
        }
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    pub fn with_q(mut self, q: f64) -> Self {
        self.q = q;
        self
    }

    pub fn with_elitist(mut self, elitist: usize) -> Self {
        self.elitist = elitist;
        self
    }

    pub fn with_ants(mut self, ants: usize) -> Self {
        self.ants = ants;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_infinity(mut self, infinity: f64) -> Self {
        self.infinity = infinity;
        self
    }

    pub fn with_p_best(mut self, p_best: f64) -> Self {
        self.p_best = p_best;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_log_ant_trails(mut self, log: bool) -> Self {
        self.log_ant_trails = log;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of ants used for a problem with `node_count` nodes.
    pub fn ant_count(&self, node_count: usize) -> usize {
        if self.ants == 0 {
            node_count
        } else {
            self.ants
        }
    }

    /// Pheromone returned for edges that were never written.
    pub fn initial_pheromone(&self) -> f64 {
        match self.variant {
            Variant::MaxMin => self.infinity,
            _ => INITIAL_PHEROMONE,
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| -> Result<()> { Err(AcoError::InvalidConfig(msg)) };

        if !(self.alpha >= 0.0 && self.alpha.is_finite()) {
            return invalid(format!("alpha must be finite and >= 0, got {}", self.alpha));
        }
        if !(self.beta >= 0.0 && self.beta.is_finite()) {
            return invalid(format!("beta must be finite and >= 0, got {}", self.beta));
        }
        if !(self.rho > 0.0 && self.rho <= 1.0) {
            return invalid(format!("rho must be in (0, 1], got {}", self.rho));
        }
        if !(self.q > 0.0 && self.q.is_finite()) {
            return invalid(format!("q must be finite and positive, got {}", self.q));
        }
        if self.iterations == 0 {
            return invalid("iterations must be at least 1".into());
        }
        match self.variant {
            Variant::Elitist | Variant::RankBased if self.elitist == 0 => {
                return invalid(format!("{:?} requires elitist >= 1", self.variant));
            }
            Variant::MaxMin => {
                if self.rho >= 1.0 {
                    return invalid("max-min requires rho < 1 to bound pheromone".into());
                }
                if !(self.infinity > 0.0 && self.infinity.is_finite()) {
                    return invalid(format!(
                        "infinity must be finite and positive, got {}",
                        self.infinity
                    ));
                }
                if !(self.p_best > 0.0 && self.p_best < 1.0) {
                    return invalid(format!("p_best must be in (0, 1), got {}", self.p_best));
                }
            }
            _ => {}
        }
        Ok(())
    }
}
