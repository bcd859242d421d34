//! # Swap Mutation
//!
//! Swap mutation perturbs a route by exchanging the genes at two interior
//! positions, `K` times per application. The fixed start and end slots are
//! never touched, so the permutation invariant is preserved by construction.
//! Each swap draws two distinct interior indices; when the draws coincide the
//! second index is shifted by one within the interior instead of silently
//! skipping the swap, so `K` swaps always produce `K` effective perturbations.
//!
//! Mutation never reuses a stale fitness value: the mutated route is scored
//! afresh and returned as a new genome.

use crate::fitness::Objective;
use crate::genome::Genome;
use crate::graph::CostMatrix;
use crate::rng::RandomNumberGenerator;

/// Swap mutation over the interior positions of a route.
#[derive(Debug, Clone, Copy)]
pub struct SwapMutation {
    swaps: usize,
}

impl SwapMutation {
    /// Creates a mutation operator performing `swaps` interior swaps per
    /// application.
    pub fn new(swaps: usize) -> Self {
        Self { swaps }
    }

    /// Returns the number of swaps performed per application.
    pub fn swaps(&self) -> usize {
        self.swaps
    }

    /// Produces a mutated copy of `genome` with freshly computed fitness.
    ///
    /// Routes with fewer than two interior positions have no distinct index
    /// pair to swap; they are returned unchanged.
    pub fn mutate(
        &self,
        genome: &Genome,
        matrix: &CostMatrix,
        objective: Objective,
        rng: &mut RandomNumberGenerator,
    ) -> Genome {
        let n = genome.path().len();
        if n < 4 {
            // interior smaller than two positions
            return genome.clone();
        }

        let interior = n - 2;
        let mut path = genome.path().to_vec();
        for _ in 0..self.swaps {
            let (a, b) = rng.distinct_pair(interior);
            path.swap(1 + a, 1 + b);
        }

        Genome::from_parts(path, matrix, objective)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::evaluate;

    fn matrix(n: usize) -> CostMatrix {
        let labels: Vec<String> = (0..n).map(|i| format!("L{}", i)).collect();
        let mut builder = CostMatrix::builder(labels.clone());
        for i in 0..n {
            for j in (i + 1)..n {
                builder = builder.symmetric_edge(&labels[i], &labels[j], (i + j) as f64);
            }
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_mutation_preserves_interior_multiset() {
        let matrix = matrix(8);
        let mut rng = RandomNumberGenerator::from_seed(11);
        let genome = Genome::new((0..8).collect(), &matrix, Objective::OpenPath).unwrap();

        let mutation = SwapMutation::new(3);
        for _ in 0..20 {
            let mutated = mutation.mutate(&genome, &matrix, Objective::OpenPath, &mut rng);

            assert_eq!(mutated.path()[0], 0);
            assert_eq!(mutated.path()[7], 7);

            let mut interior: Vec<usize> = mutated.path()[1..7].to_vec();
            interior.sort_unstable();
            assert_eq!(interior, vec![1, 2, 3, 4, 5, 6]);
        }
    }

    #[test]
    fn test_mutation_recomputes_fitness() {
        let matrix = matrix(8);
        let mut rng = RandomNumberGenerator::from_seed(5);
        let genome = Genome::new((0..8).collect(), &matrix, Objective::OpenPath).unwrap();

        let mutation = SwapMutation::new(2);
        let mutated = mutation.mutate(&genome, &matrix, Objective::OpenPath, &mut rng);

        assert_eq!(
            mutated.fitness(),
            evaluate(mutated.path(), &matrix, Objective::OpenPath)
        );
    }

    #[test]
    fn test_single_swap_changes_exactly_two_positions() {
        let matrix = matrix(10);
        let mut rng = RandomNumberGenerator::from_seed(23);
        let genome = Genome::new((0..10).collect(), &matrix, Objective::OpenPath).unwrap();

        let mutation = SwapMutation::new(1);
        let mutated = mutation.mutate(&genome, &matrix, Objective::OpenPath, &mut rng);

        let changed = genome
            .path()
            .iter()
            .zip(mutated.path())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(changed, 2);
    }

    #[test]
    fn test_tiny_interior_is_left_unchanged() {
        let matrix = matrix(3);
        let mut rng = RandomNumberGenerator::from_seed(1);
        let genome = Genome::new(vec![0, 1, 2], &matrix, Objective::OpenPath).unwrap();

        let mutation = SwapMutation::new(4);
        let mutated = mutation.mutate(&genome, &matrix, Objective::OpenPath, &mut rng);

        assert_eq!(mutated.path(), genome.path());
    }

    #[test]
    fn test_zero_swaps_is_identity() {
        let matrix = matrix(6);
        let mut rng = RandomNumberGenerator::from_seed(2);
        let genome = Genome::new((0..6).collect(), &matrix, Objective::OpenPath).unwrap();

        let mutation = SwapMutation::new(0);
        let mutated = mutation.mutate(&genome, &matrix, Objective::OpenPath, &mut rng);

        assert_eq!(mutated.path(), genome.path());
        assert_eq!(mutated.fitness(), genome.fitness());
    }
}
