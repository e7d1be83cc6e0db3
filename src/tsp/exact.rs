//! Exact TSP by enumerating every tour through city 0.

use super::model::Tsp;
use itertools::Itertools;

/// Returns the shortest closed tour and its length.
///
/// The tour starts and ends at city 0. Enumerates `(n - 1)!`
/// permutations, so keep `n` small (about 10 or fewer).
/// Returns `None` for an empty instance.
pub fn brute_force(tsp: &Tsp) -> Option<(Vec<usize>, f64)> {
    let n = tsp.len();
    match n {
        0 => return None,
        1 => return Some((vec![0, 0], 0.0)),
        _ => {}
    }

    let mut best: Option<(Vec<usize>, f64)> = None;
    for perm in (1..n).permutations(n - 1) {
        let mut cost = 0.0;
        let mut from = 0;
        for &to in &perm {
            cost += tsp.dist(from, to);
            from = to;
        }
        cost += tsp.dist(from, 0);

        if best.as_ref().is_none_or(|(_, c)| cost < *c) {
            let tour = std::iter::once(0)
                .chain(perm)
                .chain(std::iter::once(0))
                .collect();
            best = Some((tour, cost));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_instance() {
        let tsp = Tsp::from_coords(&[]).unwrap();
        assert!(brute_force(&tsp).is_none());
    }

    #[test]
    fn test_single_city() {
        let tsp = Tsp::from_coords(&[(2.0, 3.0)]).unwrap();
        let (tour, cost) = brute_force(&tsp).unwrap();
        assert_eq!(tour, vec![0, 0]);
        assert_eq!(cost, 0.0);
    }

    #[test]
    fn test_square_perimeter() {
        let tsp = Tsp::from_coords(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)]).unwrap();
        let (tour, cost) = brute_force(&tsp).unwrap();
        assert!((cost - 4.0).abs() < 1e-12);
        assert_eq!(tour.len(), 5);
        assert!((tsp.tour_cost(&tour) - cost).abs() < 1e-12);
    }

    #[test]
    fn test_collinear_cities() {
        // Optimal tour on a line walks out and back: 2 * span.
        let tsp = Tsp::from_coords(&[(0.0, 0.0), (3.0, 0.0), (1.0, 0.0), (2.0, 0.0)]).unwrap();
        let (_, cost) = brute_force(&tsp).unwrap();
        assert!((cost - 6.0).abs() < 1e-12);
    }
}
