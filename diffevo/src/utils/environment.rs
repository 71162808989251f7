use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the engine.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific settings which influence algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random>,

    /// A default amount of evaluation workers.
    pub parallelism: usize,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(random: Arc<dyn Random>, parallelism: usize, logger: InfoLogger) -> Self {
        Self { random, parallelism, logger }
    }

    /// Creates an instance of `Environment` with repeatable random generation.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { random: Arc::new(DefaultRandom::new_repeatable(seed)), ..Self::default() }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(Arc::new(DefaultRandom::default()), get_cpus(), Arc::new(|msg: &str| println!("{msg}")))
    }
}

/// Returns amount of CPUs.
pub fn get_cpus() -> usize {
    num_cpus::get()
}
