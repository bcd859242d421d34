pub mod engine;
pub mod options;

pub use engine::{OptimizeReport, Optimizer};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder};
