#[cfg(test)]
#[path = "../../tests/unit/termination/target_cost_test.rs"]
mod target_cost_test;

use super::*;

/// A termination criteria which is in terminated state when the best individual reaches target cost.
pub struct TargetCost {
    target: Float,
    minimize: bool,
}

impl TargetCost {
    /// Creates a new instance of `TargetCost`.
    pub fn new(target: Float, minimize: bool) -> Self {
        Self { target, minimize }
    }
}

impl TerminationStrategy for TargetCost {
    fn should_stop(&self, _: usize, population: &Population) -> bool {
        population
            .best(self.minimize)
            .and_then(|best| best.cost())
            .is_some_and(|cost| if self.minimize { cost <= self.target } else { cost >= self.target })
    }

    fn estimate(&self, generation: usize, population: &Population) -> Float {
        if self.should_stop(generation, population) { 1. } else { 0. }
    }
}
