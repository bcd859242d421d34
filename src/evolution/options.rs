//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct carries every run parameter of the optimizer
//! as an explicit configuration record: population size, elite size, mutation
//! count, generation cap, convergence threshold, tour objective, crossover
//! window, and RNG seed. Nothing is read from hidden module-level state.
//!
//! ## Example
//!
//! ```rust
//! use routega::evolution::EvolutionOptions;
//! use routega::fitness::Objective;
//!
//! let options = EvolutionOptions::builder()
//!     .population_size(9)
//!     .elite_size(5)
//!     .max_generations(99)
//!     .objective(Objective::OpenPath)
//!     .rng_seed(42)
//!     .build();
//!
//! assert_eq!(options.get_population_size(), 9);
//! ```

use crate::error::{GeneticError, Result};
use crate::fitness::Objective;

/// Configuration options for an optimizer run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct EvolutionOptions {
    population_size: usize,
    elite_size: usize,
    mutation_count: usize,
    max_generations: usize,
    convergence_threshold: Option<f64>,
    objective: Objective,
    crossover_window: Option<(usize, usize)>,
    rng_seed: Option<u64>,
}

impl EvolutionOptions {
    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }

    /// Returns the population size P held constant across generations.
    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    /// Returns the elite size E retained by selection each generation.
    pub fn get_elite_size(&self) -> usize {
        self.elite_size
    }

    /// Returns the number of interior swaps applied per mutation.
    pub fn get_mutation_count(&self) -> usize {
        self.mutation_count
    }

    /// Returns the maximum number of generations.
    pub fn get_max_generations(&self) -> usize {
        self.max_generations
    }

    /// Returns the convergence threshold, if configured.
    ///
    /// The run terminates early once the population's summed score (with
    /// infeasible genomes counted at the matrix's infeasibility penalty)
    /// drops to or below this value. `None` disables early termination and
    /// leaves only the generation cap.
    pub fn get_convergence_threshold(&self) -> Option<f64> {
        self.convergence_threshold
    }

    /// Returns the tour objective, fixed for the whole run.
    pub fn get_objective(&self) -> Objective {
        self.objective
    }

    /// Returns the explicit crossover window, if configured.
    ///
    /// `None` lets the engine derive a window spanning the middle half of the
    /// interior. Either way the window is fixed for the whole run.
    pub fn get_crossover_window(&self) -> Option<(usize, usize)> {
        self.crossover_window
    }

    /// Returns the RNG seed, if configured. `None` seeds from system entropy.
    pub fn get_rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }

    /// Validates the static parameters.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `elite_size < 2` (crossover
    /// needs two distinct parents), `population_size <= elite_size`,
    /// `max_generations == 0`, or the convergence threshold is not finite.
    pub fn validate(&self) -> Result<()> {
        if self.elite_size < 2 {
            return Err(GeneticError::Configuration(format!(
                "elite size must be at least 2, got {}",
                self.elite_size
            )));
        }
        if self.population_size <= self.elite_size {
            return Err(GeneticError::Configuration(format!(
                "population size ({}) must exceed elite size ({})",
                self.population_size, self.elite_size
            )));
        }
        if self.max_generations == 0 {
            return Err(GeneticError::Configuration(
                "maximum generation count must be at least 1".to_string(),
            ));
        }
        if let Some(threshold) = self.convergence_threshold {
            if !threshold.is_finite() {
                return Err(GeneticError::Configuration(format!(
                    "convergence threshold must be finite, got {}",
                    threshold
                )));
            }
        }
        Ok(())
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            population_size: 20,
            elite_size: 5,
            mutation_count: 1,
            max_generations: 100,
            convergence_threshold: None,
            objective: Objective::OpenPath,
            crossover_window: None,
            rng_seed: None,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    population_size: Option<usize>,
    elite_size: Option<usize>,
    mutation_count: Option<usize>,
    max_generations: Option<usize>,
    convergence_threshold: Option<f64>,
    objective: Option<Objective>,
    crossover_window: Option<(usize, usize)>,
    rng_seed: Option<u64>,
}

impl EvolutionOptionsBuilder {
    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the elite size.
    pub fn elite_size(mut self, value: usize) -> Self {
        self.elite_size = Some(value);
        self
    }

    /// Sets the number of interior swaps per mutation.
    pub fn mutation_count(mut self, value: usize) -> Self {
        self.mutation_count = Some(value);
        self
    }

    /// Sets the maximum number of generations.
    pub fn max_generations(mut self, value: usize) -> Self {
        self.max_generations = Some(value);
        self
    }

    /// Sets the convergence threshold on the population's summed score.
    pub fn convergence_threshold(mut self, value: f64) -> Self {
        self.convergence_threshold = Some(value);
        self
    }

    /// Sets the tour objective.
    pub fn objective(mut self, value: Objective) -> Self {
        self.objective = Some(value);
        self
    }

    /// Sets an explicit crossover window `[start, end)` over genome positions.
    pub fn crossover_window(mut self, start: usize, end: usize) -> Self {
        self.crossover_window = Some((start, end));
        self
    }

    /// Sets the RNG seed for a reproducible run.
    pub fn rng_seed(mut self, value: u64) -> Self {
        self.rng_seed = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            elite_size: self.elite_size.unwrap_or(defaults.elite_size),
            mutation_count: self.mutation_count.unwrap_or(defaults.mutation_count),
            max_generations: self.max_generations.unwrap_or(defaults.max_generations),
            convergence_threshold: self.convergence_threshold,
            objective: self.objective.unwrap_or(defaults.objective),
            crossover_window: self.crossover_window,
            rng_seed: self.rng_seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let options = EvolutionOptions::default();
        assert!(options.validate().is_ok());
        assert_eq!(options.get_population_size(), 20);
        assert_eq!(options.get_elite_size(), 5);
        assert_eq!(options.get_objective(), Objective::OpenPath);
        assert!(options.get_convergence_threshold().is_none());
    }

    #[test]
    fn test_builder_overrides_fields() {
        let options = EvolutionOptions::builder()
            .population_size(9)
            .elite_size(5)
            .mutation_count(2)
            .max_generations(99)
            .convergence_threshold(500.0)
            .crossover_window(1, 5)
            .rng_seed(7)
            .build();

        assert_eq!(options.get_population_size(), 9);
        assert_eq!(options.get_elite_size(), 5);
        assert_eq!(options.get_mutation_count(), 2);
        assert_eq!(options.get_max_generations(), 99);
        assert_eq!(options.get_convergence_threshold(), Some(500.0));
        assert_eq!(options.get_crossover_window(), Some((1, 5)));
        assert_eq!(options.get_rng_seed(), Some(7));
    }

    #[test]
    fn test_small_elite_is_rejected() {
        let options = EvolutionOptions::builder().elite_size(1).build();
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_elite_not_below_population_is_rejected() {
        let options = EvolutionOptions::builder()
            .population_size(5)
            .elite_size(5)
            .build();
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_zero_generations_is_rejected() {
        let options = EvolutionOptions::builder().max_generations(0).build();
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_non_finite_threshold_is_rejected() {
        let options = EvolutionOptions::builder()
            .convergence_threshold(f64::INFINITY)
            .build();
        assert!(options.validate().is_err());
    }
}
