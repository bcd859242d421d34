//! # Breeding Operators
//!
//! The operators that produce new genomes from existing ones: ordered
//! crossover over a fixed interior window, and swap mutation over the interior
//! positions. Both preserve the permutation invariant by construction and
//! always return genomes with freshly computed fitness.

pub mod crossover;
pub mod mutation;

pub use crossover::OrderedCrossover;
pub use mutation::SwapMutation;
