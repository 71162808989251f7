//! The evaluation module dispatches objective function evaluations of individuals to a pool
//! of worker threads.

use crate::utils::{Float, GenericResult};

mod queue;
pub use self::queue::EvaluationQueue;

mod pool;
pub use self::pool::WorkerPool;

/// An objective function which calculates a cost of the variables vector.
///
/// Implementations are called concurrently from multiple worker threads with different inputs,
/// so they should not keep mutable state between calls.
pub trait ObjectiveFunction: Send + Sync {
    /// Evaluates the cost of given variables.
    fn evaluate(&self, vars: &[Float]) -> GenericResult<Float>;

    /// Returns a human readable name of the function.
    fn name(&self) -> &str {
        "objective function"
    }
}

impl<F> ObjectiveFunction for F
where
    F: Fn(&[Float]) -> GenericResult<Float> + Send + Sync,
{
    fn evaluate(&self, vars: &[Float]) -> GenericResult<Float> {
        self(vars)
    }
}
