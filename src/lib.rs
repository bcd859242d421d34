//! # routega
//!
//! A genetic algorithm optimizer for fixed-endpoint permutation routing
//! problems: given a set of labelled locations, a pairwise cost matrix that
//! may contain unreachable pairs, and fixed start and end locations, search
//! for the cheapest route that visits every location exactly once.
//!
//! The search is a textbook generational loop: elitist selection, ordered
//! crossover (OX) over a fixed interior window, and swap mutation, with a
//! convergence threshold and a generation cap as stopping criteria. The loop
//! is single-threaded and synchronous, and all randomness flows through one
//! seedable generator, so seeded runs are reproducible.
//!
//! ## Example
//!
//! ```rust
//! use routega::{optimize, CostMatrix, EvolutionOptions};
//!
//! let matrix = CostMatrix::builder(["A", "B", "C", "D"])
//!     .symmetric_edge("A", "B", 5.0)
//!     .symmetric_edge("B", "C", 7.0)
//!     .symmetric_edge("C", "D", 12.0)
//!     .symmetric_edge("A", "C", 8.0)
//!     .symmetric_edge("B", "D", 6.0)
//!     .build()
//!     .unwrap();
//!
//! let options = EvolutionOptions::builder()
//!     .population_size(12)
//!     .elite_size(4)
//!     .max_generations(50)
//!     .rng_seed(42)
//!     .build();
//!
//! let report = optimize(matrix, "A", "D", &options).unwrap();
//! assert_eq!(report.path().first().map(String::as_str), Some("A"));
//! assert_eq!(report.path().last().map(String::as_str), Some("D"));
//! ```

pub mod breeding;
pub mod error;
pub mod evolution;
pub mod fitness;
pub mod genome;
pub mod graph;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use error::{GeneticError, Result};
pub use evolution::{EvolutionOptions, OptimizeReport, Optimizer};
pub use fitness::{Fitness, Objective};
pub use graph::CostMatrix;

/// Runs the genetic search over `matrix` from `start` to `end` with the given
/// options.
///
/// Convenience wrapper around [`Optimizer::run`] with elitist selection. The
/// report's path is a permutation of all locations beginning at `start` and
/// ending at `end`; its cost is the summed route cost, or
/// [`Fitness::Infeasible`] if no feasible route was ever found.
///
/// # Errors
///
/// Returns `GeneticError::Configuration` for invalid static parameters (see
/// [`Optimizer::run_with_rng`]). An unreachable route is reported through the
/// fitness value, never as an error.
pub fn optimize(
    matrix: CostMatrix,
    start: &str,
    end: &str,
    options: &EvolutionOptions,
) -> Result<OptimizeReport> {
    Optimizer::new(matrix).run(options, start, end)
}
