use super::*;
use crate::utils::Timer;

/// A termination criteria which is in terminated state when max time elapsed since its creation.
pub struct MaxTime {
    start: Timer,
    limit_in_secs: Float,
}

impl MaxTime {
    /// Creates a new instance of `MaxTime`.
    pub fn new(limit_in_secs: Float) -> Self {
        Self { start: Timer::start(), limit_in_secs }
    }
}

impl TerminationStrategy for MaxTime {
    fn should_stop(&self, _: usize, _: &Population) -> bool {
        self.start.elapsed_secs_as_float() > self.limit_in_secs
    }

    fn estimate(&self, _: usize, _: &Population) -> Float {
        (self.start.elapsed_secs_as_float() / self.limit_in_secs).min(1.)
    }
}
