//! # Ordered Crossover (OX)
//!
//! Ordered crossover combines two parent routes into a child that preserves
//! the permutation invariant. A contiguous window of interior positions is
//! copied verbatim from the first parent; the remaining interior positions are
//! filled left to right with the second parent's genes in their original
//! order, skipping genes the child already carries. The fixed start and end
//! locations never move.
//!
//! The window is fixed per run: it is chosen once (explicitly in the options,
//! or derived from the genome length) and every crossover in the run uses the
//! same window. Re-randomizing the window per call would give a different
//! exploration behavior, so the policy is not mixed.

use crate::error::{GeneticError, Result};
use crate::fitness::Objective;
use crate::genome::Genome;
use crate::graph::CostMatrix;

/// Ordered crossover over a fixed window of interior positions.
///
/// The window `[start, end)` addresses genome positions and lies strictly
/// within the interior: `1 <= start <= end <= genome_len - 1`. An empty window
/// (`start == end`) yields the second parent's interior order; a window
/// spanning the full interior yields the first parent.
#[derive(Debug, Clone, Copy)]
pub struct OrderedCrossover {
    window_start: usize,
    window_end: usize,
    genome_len: usize,
}

impl OrderedCrossover {
    /// Creates a crossover operator with an explicit window.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the window does not satisfy
    /// `1 <= start <= end <= genome_len - 1`.
    pub fn new(window_start: usize, window_end: usize, genome_len: usize) -> Result<Self> {
        if genome_len < 2 {
            return Err(GeneticError::Configuration(format!(
                "genomes of length {} cannot carry both fixed endpoints",
                genome_len
            )));
        }
        if window_start < 1 || window_start > window_end || window_end > genome_len - 1 {
            return Err(GeneticError::Configuration(format!(
                "crossover window [{}, {}) must lie within the interior positions [1, {})",
                window_start,
                window_end,
                genome_len - 1
            )));
        }

        Ok(Self {
            window_start,
            window_end,
            genome_len,
        })
    }

    /// Creates a crossover operator whose window spans the middle half of the
    /// interior. Used when the options do not fix a window explicitly.
    pub fn spanning_middle(genome_len: usize) -> Result<Self> {
        if genome_len < 2 {
            return Err(GeneticError::Configuration(format!(
                "genomes of length {} cannot carry both fixed endpoints",
                genome_len
            )));
        }
        let interior = genome_len - 2;
        let window_start = 1 + interior / 4;
        let window_end = window_start + interior / 2;
        Self::new(window_start, window_end, genome_len)
    }

    /// Returns the window as `(start, end)` genome positions.
    pub fn window(&self) -> (usize, usize) {
        (self.window_start, self.window_end)
    }

    /// Produces one child from two parent genomes.
    ///
    /// The child copies the fixed endpoints, takes the first parent's genes at
    /// the window positions verbatim, and fills the remaining interior
    /// positions from the second parent. Validity of both parents guarantees
    /// validity of the child.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Breeding` if the parents disagree on length or
    /// endpoints.
    pub fn crossover(
        &self,
        parent_1: &Genome,
        parent_2: &Genome,
        matrix: &CostMatrix,
        objective: Objective,
    ) -> Result<Genome> {
        let p1 = parent_1.path();
        let p2 = parent_2.path();
        let n = self.genome_len;

        if p1.len() != n || p2.len() != n {
            return Err(GeneticError::Breeding(format!(
                "parents of length {} and {} do not match the configured genome length {}",
                p1.len(),
                p2.len(),
                n
            )));
        }
        if p1[0] != p2[0] || p1[n - 1] != p2[n - 1] {
            return Err(GeneticError::Breeding(
                "parents disagree on the fixed start/end locations".to_string(),
            ));
        }

        let mut child: Vec<Option<usize>> = vec![None; n];
        let mut carried = vec![false; matrix.len()];

        child[0] = Some(p1[0]);
        carried[p1[0]] = true;
        child[n - 1] = Some(p1[n - 1]);
        carried[p1[n - 1]] = true;

        for position in self.window_start..self.window_end {
            child[position] = Some(p1[position]);
            carried[p1[position]] = true;
        }

        // Fill the remaining interior positions, left to right, with parent
        // 2's genes in parent-2 order, skipping genes already carried.
        let mut fill = 1;
        for &gene in &p2[1..n - 1] {
            if carried[gene] {
                continue;
            }
            while child[fill].is_some() {
                fill += 1;
            }
            child[fill] = Some(gene);
            carried[gene] = true;
        }

        let path: Vec<usize> = child
            .into_iter()
            .map(|slot| {
                slot.ok_or_else(|| {
                    GeneticError::Breeding(
                        "crossover left an unfilled position; parents were not valid routes"
                            .to_string(),
                    )
                })
            })
            .collect::<Result<_>>()?;
        Ok(Genome::from_parts(path, matrix, objective))
    }
}
