//! # Error Types
//!
//! This module defines the error types used across the optimizer. Invalid static
//! configuration (bad matrix dimensions, elite size not smaller than population
//! size, unknown start/end labels) is reported through these types before any
//! generation runs. An unreachable route is *not* an error: it is represented as
//! [`crate::fitness::Fitness::Infeasible`] and flows through selection and
//! breeding like any other fitness value.
//!
//! ## Examples
//!
//! ```rust
//! use routega::error::{GeneticError, Result};
//!
//! fn check_sizes(population: usize, elite: usize) -> Result<()> {
//!     if elite >= population {
//!         return Err(GeneticError::Configuration(format!(
//!             "elite size ({}) must be smaller than population size ({})",
//!             elite, population
//!         )));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur while configuring or running the optimizer.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid static parameter is provided.
    ///
    /// Raised before any generation runs and never recovered.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a selection operation fails.
    #[error("Selection error: {0}")]
    Selection(String),

    /// Error that occurs when a breeding operation (crossover or mutation) fails.
    #[error("Breeding error: {0}")]
    Breeding(String),
}

/// A specialized Result type for optimizer operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `GeneticError`.
///
/// ## Examples
///
/// ```rust
/// use routega::error::Result;
///
/// fn may_fail() -> Result<i32> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, GeneticError>;
