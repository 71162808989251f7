//! A module which provides notifications about engine execution and simple logging.

#[cfg(test)]
#[path = "../tests/unit/telemetry_test.rs"]
mod telemetry_test;

use crate::models::{Individual, Population};
use crate::utils::{DeError, InfoLogger, Timer};

/// Receives notifications about engine execution. Notifications never influence control flow.
///
/// `on_individual_evaluated` and `on_evaluation_failed` are called from worker threads.
pub trait Listener: Send + Sync {
    /// Called once the initial population is evaluated.
    fn on_start(&self, _population: &Population) {}

    /// Called when a worker has evaluated an individual.
    fn on_individual_evaluated(&self, _individual: &Individual) {}

    /// Called when objective function failed to evaluate an individual.
    fn on_evaluation_failed(&self, _worker: usize, _index: usize, _message: &str) {}

    /// Called when a generation is complete.
    fn on_generation_complete(&self, _generation: usize, _population: &Population) {}

    /// Called when the run is complete.
    fn on_run_complete(&self, _best: &Individual) {}

    /// Called when the run is failed.
    fn on_error(&self, _error: &DeError) {}
}

/// A listener which ignores all notifications.
#[derive(Default)]
pub struct NullListener;

impl Listener for NullListener {}

/// Specifies a telemetry mode.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No telemetry at all.
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often best individual is logged.
        log_best: usize,
    },
}

/// A listener which writes information about execution into the log.
pub struct LoggingListener {
    logger: InfoLogger,
    log_best: usize,
    minimize: bool,
    time: Timer,
}

impl LoggingListener {
    /// Creates a new instance of `LoggingListener`.
    pub fn new(logger: InfoLogger, log_best: usize, minimize: bool) -> Self {
        Self { logger, log_best, minimize, time: Timer::start() }
    }

    fn log(&self, message: &str) {
        (self.logger)(format!("[{}s] {message}", self.time.elapsed_secs()).as_str())
    }

    fn log_best(&self, prefix: &str, population: &Population) {
        match population.best(self.minimize) {
            Some(best) => self.log(format!("{prefix}, best {best}").as_str()),
            None => self.log(format!("{prefix}, population is empty").as_str()),
        }
    }
}

impl Listener for LoggingListener {
    fn on_start(&self, population: &Population) {
        self.log_best(format!("evaluated initial population of {} individuals", population.size()).as_str(), population)
    }

    fn on_evaluation_failed(&self, worker: usize, index: usize, message: &str) {
        self.log(format!("worker {worker} failed to evaluate individual {index}: {message}").as_str())
    }

    fn on_generation_complete(&self, generation: usize, population: &Population) {
        if self.log_best > 0 && generation % self.log_best == 0 {
            self.log_best(format!("generation {generation} is completed").as_str(), population)
        }
    }

    fn on_run_complete(&self, best: &Individual) {
        self.log(format!("run is completed in {}ms, best {best}", self.time.elapsed_millis()).as_str())
    }

    fn on_error(&self, error: &DeError) {
        self.log(format!("run is failed: {error}").as_str())
    }
}
