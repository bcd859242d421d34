//! # Selection
//!
//! Selection strategies choose the genomes retained for breeding. The
//! optimizer uses elitist ranking: sort the population ascending by fitness
//! (lower is better) and keep the top slice. Selection is deterministic given
//! the population; all randomness lives in initialization, crossover, and
//! mutation.
//!
//! ## Example
//!
//! ```rust
//! use routega::fitness::Objective;
//! use routega::genome::Genome;
//! use routega::graph::CostMatrix;
//! use routega::selection::{ElitistSelection, SelectionStrategy};
//!
//! let matrix = CostMatrix::builder(["A", "B", "C", "D"])
//!     .symmetric_edge("A", "B", 1.0)
//!     .symmetric_edge("B", "C", 1.0)
//!     .symmetric_edge("C", "D", 1.0)
//!     .symmetric_edge("A", "C", 9.0)
//!     .symmetric_edge("B", "D", 9.0)
//!     .build()
//!     .unwrap();
//!
//! let population = vec![
//!     Genome::new(vec![0, 2, 1, 3], &matrix, Objective::OpenPath).unwrap(),
//!     Genome::new(vec![0, 1, 2, 3], &matrix, Objective::OpenPath).unwrap(),
//! ];
//!
//! let elite = ElitistSelection.select(&population, 1).unwrap();
//! assert_eq!(elite[0].path(), &[0, 1, 2, 3]);
//! ```

use std::fmt::Debug;

use crate::error::{GeneticError, Result};
use crate::genome::Genome;

/// Trait for strategies that choose the genomes retained for breeding.
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects `num_to_select` genomes from the population.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty or smaller than
    /// `num_to_select`.
    fn select(&self, population: &[Genome], num_to_select: usize) -> Result<Vec<Genome>>;
}

/// Elitist ranking selection: the `num_to_select` lowest-fitness genomes, in
/// ascending fitness order.
///
/// The sort is stable, so genomes with equal fitness keep their original
/// population order. Every selected genome is a member of the input
/// population.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct ElitistSelection;

impl SelectionStrategy for ElitistSelection {
    fn select(&self, population: &[Genome], num_to_select: usize) -> Result<Vec<Genome>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }
        if num_to_select > population.len() {
            return Err(GeneticError::Selection(format!(
                "cannot select {} genomes from a population of {}",
                num_to_select,
                population.len()
            )));
        }

        let mut ranked: Vec<Genome> = population.to_vec();
        ranked.sort_by(|a, b| a.fitness().cmp(&b.fitness()));
        ranked.truncate(num_to_select);

        Ok(ranked)
    }
}
