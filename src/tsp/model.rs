//! TSP instance and its ACO state space.

use crate::aco::AcoProblem;
use crate::error::{AcoError, Result};

/// Largest instance representable by the `u64` visited mask.
pub const MAX_CITIES: usize = 64;

/// A named point in the plane.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
        }
    }
}

/// Construction state of one ant's tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TspState {
    /// Bit `i` is set once city `i` has been visited.
    pub visited: u64,
    /// City the ant stands on.
    pub current: usize,
    /// City the tour started from and must return to.
    pub origin: usize,
}

impl TspState {
    /// Tour start on `city`: only `city` visited.
    pub fn start(city: usize) -> Self {
        Self {
            visited: 1u64 << city,
            current: city,
            origin: city,
        }
    }

    /// The city the ant stands on.
    pub fn node(&self) -> usize {
        self.current
    }

    pub fn has_visited(&self, city: usize) -> bool {
        self.visited & (1u64 << city) != 0
    }
}

/// A Euclidean TSP instance with at most [`MAX_CITIES`] cities.
#[derive(Debug, Clone)]
pub struct Tsp {
    cities: Vec<City>,
    full_mask: u64,
}

impl Tsp {
    /// Builds an instance.
    ///
    /// # Errors
    ///
    /// [`AcoError::InvalidInstance`] if there are more than
    /// [`MAX_CITIES`] cities or a coordinate is not finite.
    pub fn new(cities: Vec<City>) -> Result<Self> {
        if cities.len() > MAX_CITIES {
            return Err(AcoError::InvalidInstance(format!(
                "{} cities exceed the maximum of {MAX_CITIES}",
                cities.len()
            )));
        }
        if let Some(city) = cities
            .iter()
            .find(|c| !c.x.is_finite() || !c.y.is_finite())
        {
            return Err(AcoError::InvalidInstance(format!(
                "city {} has non-finite coordinates ({}, {})",
                city.id, city.x, city.y
            )));
        }

        let full_mask = match cities.len() {
            0 => 0,
            n => u64::MAX >> (MAX_CITIES - n),
        };
        Ok(Self { cities, full_mask })
    }

    /// Builds an instance from coordinates; ids are `"1"`, `"2"`, ...
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self> {
        Self::new(
            coords
                .iter()
                .enumerate()
                .map(|(i, &(x, y))| City::new((i + 1).to_string(), x, y))
                .collect(),
        )
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Euclidean distance between cities `u` and `v`.
    pub fn dist(&self, u: usize, v: usize) -> f64 {
        let dx = self.cities[u].x - self.cities[v].x;
        let dy = self.cities[u].y - self.cities[v].y;
        dx.hypot(dy)
    }

    /// Total length of a city sequence, edge by edge.
    pub fn tour_cost(&self, tour: &[usize]) -> f64 {
        tour.windows(2).map(|w| self.dist(w[0], w[1])).sum()
    }

    /// City sequence of a constructed path.
    pub fn tour(path: &[TspState]) -> Vec<usize> {
        path.iter().map(TspState::node).collect()
    }
}

impl AcoProblem for Tsp {
    type State = TspState;

    fn node_count(&self) -> usize {
        self.cities.len()
    }

    fn start_state(&self, node: usize) -> TspState {
        TspState::start(node)
    }

    /// Every unvisited city; once all are visited, the single forced
    /// move back to the origin.
    fn successors(&self, state: &TspState) -> Vec<(TspState, f64)> {
        let next: Vec<(TspState, f64)> = (0..self.cities.len())
            .filter(|&city| !state.has_visited(city))
            .map(|city| {
                let to = TspState {
                    visited: state.visited | (1u64 << city),
                    current: city,
                    origin: state.origin,
                };
                (to, self.dist(state.current, city))
            })
            .collect();

        if !next.is_empty() {
            return next;
        }

        let home = TspState {
            current: state.origin,
            ..*state
        };
        vec![(home, self.dist(state.current, state.origin))]
    }

    fn is_goal(&self, state: &TspState) -> bool {
        state.visited == self.full_mask && state.current == state.origin
    }
}
