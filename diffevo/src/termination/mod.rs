//! The termination module contains logic which defines when the evolution should stop.

use crate::models::Population;
use crate::utils::{Float, compare_floats_refs};

/// A trait which specifies criteria when evolution should stop searching for improved solution.
pub trait TerminationStrategy: Send + Sync {
    /// Returns true if termination condition is met. Called once per completed generation with
    /// the amount of completed generations.
    fn should_stop(&self, generation: usize, population: &Population) -> bool;

    /// Returns a relative estimation till termination. Value is in the `[0, 1]` range.
    fn estimate(&self, generation: usize, population: &Population) -> Float;
}

mod max_generation;
pub use self::max_generation::MaxGeneration;

mod max_time;
pub use self::max_time::MaxTime;

mod target_cost;
pub use self::target_cost::TargetCost;

/// A termination which encapsulates multiple termination criteria and stops when any of them does.
pub struct CompositeTermination {
    terminations: Vec<Box<dyn TerminationStrategy>>,
}

impl CompositeTermination {
    /// Creates a new instance of `CompositeTermination`.
    pub fn new(terminations: Vec<Box<dyn TerminationStrategy>>) -> Self {
        Self { terminations }
    }
}

impl TerminationStrategy for CompositeTermination {
    fn should_stop(&self, generation: usize, population: &Population) -> bool {
        self.terminations.iter().any(|t| t.should_stop(generation, population))
    }

    fn estimate(&self, generation: usize, population: &Population) -> Float {
        self.terminations.iter().map(|t| t.estimate(generation, population)).max_by(compare_floats_refs).unwrap_or(0.)
    }
}
