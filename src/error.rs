//! Error types for u-aco.

use thiserror::Error;

/// Errors that abort an Ant Colony run.
///
/// Every variant is fatal for the current `solve` call: the colony
/// returns the error instead of a partially updated best solution.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AcoError {
    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The problem model broke its contract (e.g. no successors while
    /// the goal is not reached, or a negative edge cost).
    #[error("problem contract violation: {0}")]
    ContractViolation(String),

    /// The instance has too few nodes to form a tour.
    #[error("degenerate instance: {node_count} node(s), at least 2 required")]
    DegenerateInstance {
        /// Number of nodes reported by the problem.
        node_count: usize,
    },

    /// A finished trail has zero total cost, so its deposit is undefined.
    #[error("degenerate trail: total cost is zero")]
    DegenerateCost,

    /// The problem instance itself could not be built.
    #[error("invalid instance: {0}")]
    InvalidInstance(String),
}

/// Result type alias for u-aco operations.
pub type Result<T> = std::result::Result<T, AcoError>;
