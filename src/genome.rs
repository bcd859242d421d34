//! # Genome
//!
//! A genome is a candidate route: an ordered sequence of location indices that
//! visits every location exactly once, beginning at the fixed start location
//! and ending at the fixed end location. Its fitness is computed at
//! construction and cached; a genome is never re-ordered in place. Mutation
//! and crossover always produce new genomes with freshly computed fitness.
//!
//! ## Example
//!
//! ```rust
//! use routega::fitness::Objective;
//! use routega::genome::Genome;
//! use routega::graph::CostMatrix;
//! use routega::rng::RandomNumberGenerator;
//!
//! let matrix = CostMatrix::builder(["A", "B", "C", "D"])
//!     .symmetric_edge("A", "B", 5.0)
//!     .symmetric_edge("B", "C", 7.0)
//!     .symmetric_edge("C", "D", 12.0)
//!     .build()
//!     .unwrap();
//!
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let genome = Genome::random(&matrix, 0, 3, Objective::OpenPath, &mut rng);
//!
//! assert_eq!(genome.path().first(), Some(&0));
//! assert_eq!(genome.path().last(), Some(&3));
//! assert_eq!(genome.path().len(), matrix.len());
//! ```

use crate::error::{GeneticError, Result};
use crate::fitness::{evaluate, Fitness, Objective};
use crate::graph::CostMatrix;
use crate::rng::RandomNumberGenerator;

/// A candidate route with its cached fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct Genome {
    path: Vec<usize>,
    fitness: Fitness,
}

impl Genome {
    /// Creates a genome from an explicit path, validating the permutation
    /// invariant and computing its fitness.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the path length does not match
    /// the matrix, or the path is not a permutation of all locations.
    pub fn new(path: Vec<usize>, matrix: &CostMatrix, objective: Objective) -> Result<Self> {
        let n = matrix.len();
        if path.len() != n {
            return Err(GeneticError::Configuration(format!(
                "path visits {} locations but the matrix has {}",
                path.len(),
                n
            )));
        }

        let mut seen = vec![false; n];
        for &location in &path {
            if location >= n {
                return Err(GeneticError::Configuration(format!(
                    "path references location index {} outside the matrix",
                    location
                )));
            }
            if seen[location] {
                return Err(GeneticError::Configuration(format!(
                    "path visits location '{}' more than once",
                    matrix.label(location)
                )));
            }
            seen[location] = true;
        }

        Ok(Self::from_parts(path, matrix, objective))
    }

    /// Creates a genome from a path already known to satisfy the permutation
    /// invariant. The breeding operators uphold the invariant by construction.
    pub(crate) fn from_parts(path: Vec<usize>, matrix: &CostMatrix, objective: Objective) -> Self {
        let fitness = evaluate(&path, matrix, objective);
        Self { path, fitness }
    }

    /// Creates a genome with the fixed start and end locations and a uniformly
    /// random permutation of the remaining locations in between.
    pub fn random(
        matrix: &CostMatrix,
        start: usize,
        end: usize,
        objective: Objective,
        rng: &mut RandomNumberGenerator,
    ) -> Self {
        let mut interior: Vec<usize> = (0..matrix.len())
            .filter(|&location| location != start && location != end)
            .collect();
        rng.shuffle(&mut interior);

        let mut path = Vec::with_capacity(matrix.len());
        path.push(start);
        path.extend(interior);
        path.push(end);

        Self::from_parts(path, matrix, objective)
    }

    /// Returns the route as location indices into the matrix.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Returns the cached fitness.
    pub fn fitness(&self) -> Fitness {
        self.fitness
    }
}

/// Produces the initial population: `size` random genomes, each fixing `start`
/// first and `end` last. Genomes are not required to be distinct.
///
/// # Errors
///
/// Returns `GeneticError::Configuration` if the matrix has fewer than two
/// locations (no path with both fixed endpoints exists), an endpoint index is
/// out of bounds, or `start == end`. A tour returning to its origin is
/// expressed through [`Objective::ClosedTour`], not by repeating a location.
pub fn init_population(
    matrix: &CostMatrix,
    start: usize,
    end: usize,
    objective: Objective,
    size: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<Genome>> {
    let n = matrix.len();
    if n < 2 {
        return Err(GeneticError::Configuration(format!(
            "cannot form a path with fixed endpoints over {} location(s)",
            n
        )));
    }
    if start >= n || end >= n {
        return Err(GeneticError::Configuration(
            "start/end index outside the matrix".to_string(),
        ));
    }
    if start == end {
        return Err(GeneticError::Configuration(
            "start and end locations must be distinct".to_string(),
        ));
    }

    Ok((0..size)
        .map(|_| Genome::random(matrix, start, end, objective, rng))
        .collect())
}
