#[cfg(test)]
#[path = "../../tests/unit/termination/max_generation_test.rs"]
mod max_generation_test;

use super::*;

/// A termination criteria which is in terminated state when maximum amount of generations is reached.
pub struct MaxGeneration {
    limit: usize,
}

impl MaxGeneration {
    /// Creates a new instance of `MaxGeneration`.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl TerminationStrategy for MaxGeneration {
    fn should_stop(&self, generation: usize, _: &Population) -> bool {
        generation >= self.limit
    }

    fn estimate(&self, generation: usize, _: &Population) -> Float {
        if self.limit == 0 { 1. } else { (generation as Float / self.limit as Float).min(1.) }
    }
}
