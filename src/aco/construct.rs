//! Solution construction: one ant's weighted random walk.
//!
//! From the current state the ant weighs every candidate transition by
//!
//! ```text
//! tau(current, next)^alpha * (1 / cost)^beta
//! ```
//!
//! and samples the next state proportionally to those weights, until the
//! problem reports a goal state. The walk only reads the pheromone map,
//! so ants of one iteration can be built concurrently.

use super::pheromone::PheromoneMap;
use super::types::{AcoProblem, Trail};
use crate::error::{AcoError, Result};
use rand::Rng;

/// Walks one ant from `start` to a goal state.
///
/// # Errors
///
/// Returns [`AcoError::ContractViolation`] if a non-goal state has no
/// successors or an edge cost is negative or NaN.
pub fn construct_trail<P, R>(
    problem: &P,
    start: P::State,
    pheromones: &PheromoneMap<P::State>,
    alpha: f64,
    beta: f64,
    rng: &mut R,
) -> Result<Trail<P::State>>
where
    P: AcoProblem,
    R: Rng,
{
    let mut current = start.clone();
    let mut path = vec![start];
    let mut cost = 0.0;
    let mut weights = Vec::new();

    while !problem.is_goal(&current) {
        let mut successors = problem.successors(&current);
        if successors.is_empty() {
            return Err(AcoError::ContractViolation(format!(
                "no successors from non-goal state {current:?} after {} step(s)",
                path.len() - 1
            )));
        }

        weights.clear();
        for (next, edge_cost) in &successors {
            if edge_cost.is_nan() || *edge_cost < 0.0 {
                return Err(AcoError::ContractViolation(format!(
                    "edge {current:?} -> {next:?} has invalid cost {edge_cost}"
                )));
            }
            weights.push(desirability(
                pheromones.get(&current, next),
                *edge_cost,
                alpha,
                beta,
            ));
        }

        let choice = weighted_choice(&weights, rng);
        let (next, edge_cost) = successors.swap_remove(choice);
        cost += edge_cost;
        current = next.clone();
        path.push(next);
    }

    Ok(Trail { path, cost })
}

/// Transition weight `tau^alpha * (1 / cost)^beta`.
///
/// A zero-cost edge is infinitely desirable whenever `beta > 0`.
pub fn desirability(pheromone: f64, cost: f64, alpha: f64, beta: f64) -> f64 {
    let heuristic = if cost == 0.0 {
        if beta > 0.0 {
            f64::INFINITY
        } else {
            1.0
        }
    } else {
        (1.0 / cost).powf(beta)
    };
    let weight = pheromone.powf(alpha) * heuristic;
    if weight.is_nan() {
        0.0
    } else {
        weight
    }
}

/// Samples an index with probability proportional to `weights`.
///
/// Infinite weights win: the choice is uniform among them. If every
/// weight is zero the choice is uniform over all indices.
fn weighted_choice<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    let n = weights.len();
    if n == 1 {
        return 0;
    }

    let infinite: Vec<usize> = (0..n).filter(|&i| weights[i].is_infinite()).collect();
    if !infinite.is_empty() {
        return infinite[rng.random_range(0..infinite.len())];
    }

    let mut total: f64 = weights.iter().sum();
    let mut scale = 1.0;
    if total.is_infinite() {
        // Finite weights whose sum overflows: rescale by the largest.
        scale = weights.iter().cloned().fold(0.0, f64::max);
        total = weights.iter().map(|w| w / scale).sum();
    }
    if total <= 0.0 {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w / scale;
        if cumulative > threshold {
            return i;
        }
    }

    n - 1 // floating-point fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// A line 0 -> 1 -> ... -> len with a cheap and an expensive edge per step.
    struct Ladder {
        len: u32,
    }

    impl AcoProblem for Ladder {
        // (position, took_cheap_edge)
        type State = (u32, bool);

        fn node_count(&self) -> usize {
            self.len as usize + 1
        }

        fn start_state(&self, _node: usize) -> (u32, bool) {
            (0, true)
        }

        fn successors(&self, s: &(u32, bool)) -> Vec<((u32, bool), f64)> {
            vec![((s.0 + 1, true), 1.0), ((s.0 + 1, false), 2.0)]
        }

        fn is_goal(&self, s: &(u32, bool)) -> bool {
            s.0 == self.len
        }
    }

    struct DeadEnd;

    impl AcoProblem for DeadEnd {
        type State = u8;

        fn node_count(&self) -> usize {
            2
        }

        fn start_state(&self, _node: usize) -> u8 {
            0
        }

        fn successors(&self, s: &u8) -> Vec<(u8, f64)> {
            if *s == 0 {
                vec![(1, 1.0)]
            } else {
                Vec::new()
            }
        }

        fn is_goal(&self, s: &u8) -> bool {
            *s == 9
        }
    }

    /// One edge 0 -> 1 with a caller-chosen cost.
    struct SingleEdge {
        cost: f64,
    }

    impl AcoProblem for SingleEdge {
        type State = u8;

        fn node_count(&self) -> usize {
            2
        }

        fn start_state(&self, _node: usize) -> u8 {
            0
        }

        fn successors(&self, _s: &u8) -> Vec<(u8, f64)> {
            vec![(1, self.cost)]
        }

        fn is_goal(&self, s: &u8) -> bool {
            *s == 1
        }
    }

    #[test]
    fn test_trail_shape_and_cost() {
        let problem = Ladder { len: 5 };
        let map = PheromoneMap::new(1.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let trail = construct_trail(&problem, (0, true), &map, 1.0, 2.0, &mut rng)
            .expect("ladder always has successors");

        assert_eq!(trail.path.len(), 6);
        assert_eq!(trail.path[0], (0, true));
        let expected: f64 = trail.path[1..]
            .iter()
            .map(|&(_, cheap)| if cheap { 1.0 } else { 2.0 })
            .sum();
        assert!((trail.cost - expected).abs() < 1e-12);
    }

    #[test]
    fn test_goal_start_yields_single_state_trail() {
        let problem = Ladder { len: 0 };
        let map = PheromoneMap::new(1.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let trail = construct_trail(&problem, (0, true), &map, 1.0, 1.0, &mut rng).unwrap();
        assert_eq!(trail.path, vec![(0, true)]);
        assert_eq!(trail.cost, 0.0);
    }

    #[test]
    fn test_empty_successors_is_contract_violation() {
        let map = PheromoneMap::new(1.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = construct_trail(&DeadEnd, 0, &map, 1.0, 1.0, &mut rng);
        assert!(matches!(err, Err(AcoError::ContractViolation(_))));
    }

    #[test]
    fn test_negative_edge_cost_is_contract_violation() {
        let map = PheromoneMap::new(1.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = construct_trail(&SingleEdge { cost: -1.0 }, 0, &map, 1.0, 1.0, &mut rng);
        match err {
            Err(AcoError::ContractViolation(msg)) => assert!(msg.contains("-1")),
            other => panic!("expected contract violation, got {other:?}"),
        }
    }

    #[test]
    fn test_nan_edge_cost_is_contract_violation() {
        let map = PheromoneMap::new(1.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = construct_trail(&SingleEdge { cost: f64::NAN }, 0, &map, 1.0, 1.0, &mut rng);
        match err {
            Err(AcoError::ContractViolation(msg)) => assert!(msg.contains("NaN")),
            other => panic!("expected contract violation, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_edge_cost_is_accepted() {
        let map = PheromoneMap::new(1.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let trail = construct_trail(&SingleEdge { cost: 0.0 }, 0, &map, 1.0, 1.0, &mut rng)
            .expect("zero cost is a valid edge");
        assert_eq!(trail.path, vec![0, 1]);
        assert_eq!(trail.cost, 0.0);
    }

    #[test]
    fn test_heuristic_bias_toward_cheap_edges() {
        let problem = Ladder { len: 200 };
        let map = PheromoneMap::new(1.0);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        // beta = 3: cheap edge weight 1, expensive 1/8 => ~89% cheap.
        let trail = construct_trail(&problem, (0, true), &map, 1.0, 3.0, &mut rng).unwrap();
        let cheap = trail.path[1..].iter().filter(|s| s.1).count();
        assert!(cheap > 150, "expected strong bias to cheap edges, got {cheap}/200");
    }

    #[test]
    fn test_pheromone_bias_overrides_heuristic() {
        let problem = Ladder { len: 100 };
        let mut map = PheromoneMap::new(1e-6);
        for i in 0..100 {
            map.update(&(i, true), &(i + 1, false), 10.0);
            map.update(&(i, false), &(i + 1, false), 10.0);
        }
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let trail = construct_trail(&problem, (0, true), &map, 1.0, 1.0, &mut rng).unwrap();
        let expensive = trail.path[1..].iter().filter(|s| !s.1).count();
        assert!(expensive > 95, "reinforced edges should dominate, got {expensive}/100");
    }

    #[test]
    fn test_desirability_kernel() {
        assert!((desirability(2.0, 0.5, 1.0, 1.0) - 4.0).abs() < 1e-12);
        assert!((desirability(4.0, 2.0, 0.5, 2.0) - 0.5).abs() < 1e-12);
        assert!(desirability(1.0, 0.0, 1.0, 2.0).is_infinite());
        assert!((desirability(1.0, 0.0, 1.0, 0.0) - 1.0).abs() < 1e-12);
        assert_eq!(desirability(0.0, 0.0, 1.0, 1.0), 0.0);
    }

    #[test]
    fn test_weighted_choice_prefers_infinite() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..50 {
            let i = weighted_choice(&[1.0, f64::INFINITY, 5.0], &mut rng);
            assert_eq!(i, 1);
        }
    }

    #[test]
    fn test_weighted_choice_all_zero_is_uniform() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut seen = [false; 3];
        for _ in 0..200 {
            seen[weighted_choice(&[0.0, 0.0, 0.0], &mut rng)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_weighted_choice_never_picks_zero_weight() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..500 {
            assert_ne!(weighted_choice(&[0.0, 1.0, 0.0, 2.0], &mut rng) % 2, 0);
        }
    }

    #[test]
    fn test_weighted_choice_handles_overflowing_sum() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let weights = [f64::MAX, f64::MAX, 0.0];
        for _ in 0..100 {
            assert!(weighted_choice(&weights, &mut rng) < 2);
        }
    }
}
