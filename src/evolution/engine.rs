//! # Optimizer Engine
//!
//! The generation loop. Each generation is a pure, in-memory transformation
//! of the previous population: score the population, select the elite, breed
//! offspring through crossover and mutation, and pass the elite itself through
//! mutation into the next population. The run terminates when the population's
//! summed score drops to or below the convergence threshold or the generation
//! cap is reached, whichever comes first, and reports the best genome seen in
//! any elite set.
//!
//! The loop is single-threaded and synchronous. It performs no I/O beyond
//! `tracing` events and owns the only mutable state (the population and the
//! best-so-far record). Infeasible genomes never abort the loop: they carry
//! `Fitness::Infeasible` and are outranked by every feasible genome.

use tracing::{debug, info};

use crate::breeding::{OrderedCrossover, SwapMutation};
use crate::error::{GeneticError, Result};
use crate::evolution::options::EvolutionOptions;
use crate::fitness::Fitness;
use crate::genome::{init_population, Genome};
use crate::graph::CostMatrix;
use crate::rng::RandomNumberGenerator;
use crate::selection::{ElitistSelection, SelectionStrategy};

/// The result of an optimizer run.
///
/// `cost` is `Fitness::Infeasible` only if no feasible route was ever seen in
/// any elite set, i.e. no feasible tour was found.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeReport {
    path: Vec<String>,
    cost: Fitness,
    generations: usize,
    final_score: f64,
    converged: bool,
}

impl OptimizeReport {
    /// Returns the best route found, as location labels from start to end.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Returns the fitness of the best route found.
    pub fn cost(&self) -> Fitness {
        self.cost
    }

    /// Returns the number of generations that ran.
    pub fn generations(&self) -> usize {
        self.generations
    }

    /// Returns the last population's summed score, with infeasible genomes
    /// counted at the infeasibility penalty.
    pub fn final_score(&self) -> f64 {
        self.final_score
    }

    /// Returns `true` if the run terminated through the convergence threshold
    /// rather than the generation cap.
    pub fn converged(&self) -> bool {
        self.converged
    }
}

/// Runs the genetic search over a cost matrix with a pluggable selection
/// strategy.
///
/// ## Example
///
/// ```rust
/// use routega::evolution::{EvolutionOptions, Optimizer};
/// use routega::graph::CostMatrix;
///
/// let matrix = CostMatrix::builder(["A", "B", "C", "D"])
///     .symmetric_edge("A", "B", 5.0)
///     .symmetric_edge("B", "C", 7.0)
///     .symmetric_edge("C", "D", 12.0)
///     .symmetric_edge("A", "C", 8.0)
///     .symmetric_edge("B", "D", 6.0)
///     .build()
///     .unwrap();
///
/// let options = EvolutionOptions::builder()
///     .population_size(12)
///     .elite_size(4)
///     .max_generations(50)
///     .rng_seed(42)
///     .build();
///
/// let report = Optimizer::new(matrix).run(&options, "A", "D").unwrap();
/// assert_eq!(report.path().first().map(String::as_str), Some("A"));
/// assert_eq!(report.path().last().map(String::as_str), Some("D"));
/// ```
#[derive(Debug, Clone)]
pub struct Optimizer<S = ElitistSelection> {
    matrix: CostMatrix,
    selection: S,
}

impl Optimizer<ElitistSelection> {
    /// Creates an optimizer over the given matrix with elitist selection.
    pub fn new(matrix: CostMatrix) -> Self {
        Self {
            matrix,
            selection: ElitistSelection,
        }
    }
}

impl<S> Optimizer<S>
where
    S: SelectionStrategy,
{
    /// Creates an optimizer with a custom selection strategy.
    pub fn with_selection(matrix: CostMatrix, selection: S) -> Self {
        Self { matrix, selection }
    }

    /// Returns the cost matrix the optimizer searches over.
    pub fn matrix(&self) -> &CostMatrix {
        &self.matrix
    }

    /// Runs the search from `start` to `end`, creating the RNG from the
    /// configured seed (or system entropy when no seed is set).
    pub fn run(
        &self,
        options: &EvolutionOptions,
        start: &str,
        end: &str,
    ) -> Result<OptimizeReport> {
        let mut rng = match options.get_rng_seed() {
            Some(seed) => RandomNumberGenerator::from_seed(seed),
            None => RandomNumberGenerator::new(),
        };
        self.run_with_rng(options, start, end, &mut rng)
    }

    /// Runs the search with an explicitly provided generator.
    ///
    /// All randomness (initialization, parent sampling, mutation indices) is
    /// drawn from `rng`, so supplying a seeded generator makes the run fully
    /// reproducible.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` for invalid static parameters:
    /// unknown start/end labels, fewer than two locations, elite size not
    /// smaller than population size, a zero generation cap, or a crossover
    /// window outside the interior. Infeasible routes are not errors.
    pub fn run_with_rng(
        &self,
        options: &EvolutionOptions,
        start: &str,
        end: &str,
        rng: &mut RandomNumberGenerator,
    ) -> Result<OptimizeReport> {
        options.validate()?;

        let n = self.matrix.len();
        let start_idx = self.matrix.index_of(start).ok_or_else(|| {
            GeneticError::Configuration(format!("start location '{}' is not in the matrix", start))
        })?;
        let end_idx = self.matrix.index_of(end).ok_or_else(|| {
            GeneticError::Configuration(format!("end location '{}' is not in the matrix", end))
        })?;

        let objective = options.get_objective();
        let crossover = match options.get_crossover_window() {
            Some((window_start, window_end)) => {
                OrderedCrossover::new(window_start, window_end, n)?
            }
            None => OrderedCrossover::spanning_middle(n)?,
        };
        let mutation = SwapMutation::new(options.get_mutation_count());
        let penalty = self.matrix.infeasibility_penalty();

        let population_size = options.get_population_size();
        let elite_size = options.get_elite_size();

        let mut population = init_population(
            &self.matrix,
            start_idx,
            end_idx,
            objective,
            population_size,
            rng,
        )?;

        let mut best: Option<Genome> = None;
        let mut generations = 0;
        let mut score = 0.0;
        let mut converged = false;

        for generation in 1..=options.get_max_generations() {
            generations = generation;
            score = population
                .iter()
                .map(|genome| genome.fitness().cost_or(penalty))
                .sum();

            let elite = self.selection.select(&population, elite_size)?;
            let elite_best = elite
                .iter()
                .min_by(|a, b| a.fitness().cmp(&b.fitness()))
                .cloned()
                .ok_or(GeneticError::EmptyPopulation)?;

            if best
                .as_ref()
                .map_or(true, |current| elite_best.fitness() < current.fitness())
            {
                best = Some(elite_best);
            }

            debug!(
                generation,
                score,
                best = ?best.as_ref().map(Genome::fitness),
                "generation scored"
            );

            if options
                .get_convergence_threshold()
                .map_or(false, |threshold| score <= threshold)
            {
                converged = true;
                break;
            }
            if generation == options.get_max_generations() {
                break;
            }

            // Offspring from random distinct elite parent pairs, then the
            // elite itself passed through mutation. Mutating the elite trades
            // elitism purity for continued exploration of the top genomes;
            // the pristine best is kept in the best-so-far record above.
            let mut next = Vec::with_capacity(population_size);
            for _ in 0..population_size - elite_size {
                let (first, second) = rng.distinct_pair(elite.len());
                let child =
                    crossover.crossover(&elite[first], &elite[second], &self.matrix, objective)?;
                next.push(mutation.mutate(&child, &self.matrix, objective, rng));
            }
            for parent in &elite {
                next.push(mutation.mutate(parent, &self.matrix, objective, rng));
            }

            population = next;
        }

        // max_generations >= 1, so at least one elite set was examined.
        let best = best.ok_or(GeneticError::EmptyPopulation)?;

        info!(
            generations,
            converged,
            cost = ?best.fitness(),
            "search terminated"
        );

        Ok(OptimizeReport {
            path: best
                .path()
                .iter()
                .map(|&location| self.matrix.label(location).to_string())
                .collect(),
            cost: best.fitness(),
            generations,
            final_score: score,
            converged,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::Objective;

    fn seven_node_matrix() -> CostMatrix {
        CostMatrix::builder(["A", "B", "C", "D", "E", "F", "H"])
            .symmetric_edge("A", "B", 5.0)
            .symmetric_edge("A", "C", 8.0)
            .symmetric_edge("B", "C", 7.0)
            .symmetric_edge("B", "D", 6.0)
            .symmetric_edge("B", "E", 10.0)
            .symmetric_edge("B", "H", 8.0)
            .symmetric_edge("C", "F", 12.0)
            .symmetric_edge("D", "H", 10.0)
            .symmetric_edge("E", "F", 9.0)
            .symmetric_edge("E", "H", 18.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_single_generation_reports_initial_elite_best() {
        let matrix = seven_node_matrix();
        let options = EvolutionOptions::builder()
            .population_size(9)
            .elite_size(5)
            .max_generations(1)
            .rng_seed(17)
            .build();

        let optimizer = Optimizer::new(matrix.clone());
        let report = optimizer.run(&options, "A", "H").unwrap();

        assert_eq!(report.generations(), 1);
        assert!(!report.converged());

        // The report must match the best of the initial elite set, which we
        // can reproduce with the same seed.
        let mut rng = RandomNumberGenerator::from_seed(17);
        let initial = init_population(&matrix, 0, 6, Objective::OpenPath, 9, &mut rng).unwrap();
        let best_initial = initial
            .iter()
            .map(Genome::fitness)
            .min()
            .unwrap();
        assert_eq!(report.cost(), best_initial);
    }

    #[test]
    fn test_generous_threshold_converges_immediately() {
        let matrix = seven_node_matrix();
        let threshold = 9.0 * matrix.infeasibility_penalty();
        let options = EvolutionOptions::builder()
            .population_size(9)
            .elite_size(5)
            .max_generations(99)
            .convergence_threshold(threshold)
            .rng_seed(3)
            .build();

        let report = Optimizer::new(matrix).run(&options, "A", "H").unwrap();

        assert_eq!(report.generations(), 1);
        assert!(report.converged());
        assert!(report.final_score() <= threshold);
    }

    #[test]
    fn test_unknown_labels_are_rejected() {
        let matrix = seven_node_matrix();
        let options = EvolutionOptions::default();
        let optimizer = Optimizer::new(matrix);

        assert!(matches!(
            optimizer.run(&options, "Z", "H"),
            Err(GeneticError::Configuration(_))
        ));
        assert!(matches!(
            optimizer.run(&options, "A", "Z"),
            Err(GeneticError::Configuration(_))
        ));
    }

    #[test]
    fn test_invalid_sizes_are_rejected_before_running() {
        let matrix = seven_node_matrix();
        let options = EvolutionOptions::builder()
            .population_size(5)
            .elite_size(5)
            .build();

        let result = Optimizer::new(matrix).run(&options, "A", "H");
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_explicit_crossover_window_is_honored() {
        let matrix = seven_node_matrix();
        let options = EvolutionOptions::builder()
            .population_size(9)
            .elite_size(5)
            .max_generations(10)
            .crossover_window(1, 5)
            .rng_seed(8)
            .build();

        let report = Optimizer::new(matrix).run(&options, "A", "H").unwrap();
        assert_eq!(report.path().len(), 7);
    }

    #[test]
    fn test_out_of_range_crossover_window_is_rejected() {
        let matrix = seven_node_matrix();
        let options = EvolutionOptions::builder()
            .population_size(9)
            .elite_size(5)
            .crossover_window(0, 9)
            .build();

        let result = Optimizer::new(matrix).run(&options, "A", "H");
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let matrix = seven_node_matrix();
        let options = EvolutionOptions::builder()
            .population_size(9)
            .elite_size(5)
            .max_generations(30)
            .rng_seed(99)
            .build();

        let first = Optimizer::new(matrix.clone()).run(&options, "A", "H").unwrap();
        let second = Optimizer::new(matrix).run(&options, "A", "H").unwrap();

        assert_eq!(first, second);
    }
}
