//! # Fitness Evaluation
//!
//! This module defines the fitness of a candidate path and the objective under
//! which it is evaluated. Fitness is the total cost of the consecutive hops in
//! a path; lower is better. A path containing any unreachable hop is
//! [`Fitness::Infeasible`], which orders strictly worse than every feasible
//! fitness. Infeasibility is a value, not an error: it flows through selection
//! and breeding like any other fitness.
//!
//! The objective is a per-run configuration choice, never toggled implicitly:
//! an open path sums only the hops from start to end, while a closed tour adds
//! the cost of returning from the end location back to the start.

use std::cmp::Ordering;

use crate::graph::CostMatrix;

/// The tour objective under which a path is scored.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Objective {
    /// Sum the hops from the start location to the end location.
    #[default]
    OpenPath,
    /// Additionally add the cost of the edge from the end location back to the
    /// start location.
    ClosedTour,
}

/// The fitness of a genome. Lower is better.
///
/// `Feasible` carries the summed path cost. `Infeasible` marks a path with at
/// least one unreachable hop and compares strictly greater than any feasible
/// fitness, so feasible genomes always outrank infeasible ones.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fitness {
    /// Total path cost. Always finite and non-negative.
    Feasible(f64),
    /// At least one consecutive pair in the path is unreachable.
    Infeasible,
}

impl Fitness {
    /// Returns `true` if the fitness is feasible.
    pub fn is_feasible(&self) -> bool {
        matches!(self, Fitness::Feasible(_))
    }

    /// Returns the path cost for a feasible fitness, or `None`.
    pub fn cost(&self) -> Option<f64> {
        match self {
            Fitness::Feasible(cost) => Some(*cost),
            Fitness::Infeasible => None,
        }
    }

    /// Returns the path cost, substituting `penalty` for an infeasible
    /// fitness. Used when summing population scores.
    pub fn cost_or(&self, penalty: f64) -> f64 {
        match self {
            Fitness::Feasible(cost) => *cost,
            Fitness::Infeasible => penalty,
        }
    }
}

impl Eq for Fitness {}

impl Ord for Fitness {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            // Costs are validated finite at matrix construction, so the
            // fallback never fires in practice.
            (Fitness::Feasible(a), Fitness::Feasible(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (Fitness::Feasible(_), Fitness::Infeasible) => Ordering::Less,
            (Fitness::Infeasible, Fitness::Feasible(_)) => Ordering::Greater,
            (Fitness::Infeasible, Fitness::Infeasible) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Fitness {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Scores a path against a cost matrix under the given objective.
///
/// Sums the cost of each consecutive pair in order. Returns
/// `Fitness::Infeasible` as soon as any hop is unreachable. Evaluation is
/// deterministic: scoring the same path twice yields identical values.
pub fn evaluate(path: &[usize], matrix: &CostMatrix, objective: Objective) -> Fitness {
    let mut total = 0.0;

    for hop in path.windows(2) {
        match matrix.cost(hop[0], hop[1]) {
            Some(cost) => total += cost,
            None => return Fitness::Infeasible,
        }
    }

    if objective == Objective::ClosedTour && path.len() > 1 {
        let first = path[0];
        let last = path[path.len() - 1];
        match matrix.cost(last, first) {
            Some(cost) => total += cost,
            None => return Fitness::Infeasible,
        }
    }

    Fitness::Feasible(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> CostMatrix {
        CostMatrix::builder(["A", "B", "C"])
            .symmetric_edge("A", "B", 5.0)
            .symmetric_edge("B", "C", 7.0)
            .edge("C", "A", 4.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_open_path_sums_hops() {
        let fitness = evaluate(&[0, 1, 2], &matrix(), Objective::OpenPath);
        assert_eq!(fitness, Fitness::Feasible(12.0));
    }

    #[test]
    fn test_closed_tour_adds_return_edge() {
        let fitness = evaluate(&[0, 1, 2], &matrix(), Objective::ClosedTour);
        assert_eq!(fitness, Fitness::Feasible(16.0));
    }

    #[test]
    fn test_unreachable_hop_is_infeasible() {
        // A -> C is not an edge.
        let fitness = evaluate(&[0, 2, 1], &matrix(), Objective::OpenPath);
        assert_eq!(fitness, Fitness::Infeasible);
    }

    #[test]
    fn test_closed_tour_with_unreachable_return_edge() {
        // Directed matrix: A -> B exists, the return hop B -> A does not.
        let matrix = CostMatrix::builder(["A", "B"])
            .edge("A", "B", 3.0)
            .build()
            .unwrap();

        assert_eq!(evaluate(&[0, 1], &matrix, Objective::OpenPath), Fitness::Feasible(3.0));
        assert_eq!(evaluate(&[0, 1], &matrix, Objective::ClosedTour), Fitness::Infeasible);
    }

    #[test]
    fn test_infeasible_orders_worse_than_any_feasible() {
        assert!(Fitness::Feasible(1e12) < Fitness::Infeasible);
        assert!(Fitness::Infeasible > Fitness::Feasible(0.0));
        assert_eq!(Fitness::Infeasible.cmp(&Fitness::Infeasible), std::cmp::Ordering::Equal);
        assert!(Fitness::Feasible(3.0) < Fitness::Feasible(4.0));
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let matrix = matrix();
        let first = evaluate(&[0, 1, 2], &matrix, Objective::OpenPath);
        let second = evaluate(&[0, 1, 2], &matrix, Objective::OpenPath);
        assert_eq!(first, second);
    }

    #[test]
    fn test_cost_or_substitutes_penalty() {
        assert_eq!(Fitness::Feasible(4.0).cost_or(100.0), 4.0);
        assert_eq!(Fitness::Infeasible.cost_or(100.0), 100.0);
    }
}
