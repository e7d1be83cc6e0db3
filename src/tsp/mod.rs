//! Traveling Salesman reference problem.
//!
//! Cities in the plane with Euclidean distances. A construction state
//! is the set of visited cities (bitmask), the current city, and the
//! city the tour started from; the goal is to have visited every city
//! and be back at the start.
//!
//! - [`Tsp`]: the instance; implements [`AcoProblem`](crate::aco::AcoProblem)
//! - [`brute_force`]: exact solver by enumeration, for small instances

mod exact;
mod model;

pub use exact::brute_force;
pub use model::{City, Tsp, TspState, MAX_CITIES};
