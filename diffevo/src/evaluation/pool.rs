#[cfg(test)]
#[path = "../../tests/unit/evaluation/pool_test.rs"]
mod pool_test;

use super::*;
use crate::models::Individual;
use crate::telemetry::Listener;
use crate::utils::{DeError, DeResult, ThreadPool};
use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};

/// Evaluates batches of individuals using a fixed amount of worker threads.
///
/// Individuals are moved into the pool on submit and handed back, evaluated and in submit order,
/// once the whole batch is processed.
pub struct WorkerPool {
    shared: Arc<SharedState>,
    worker_count: usize,
    _threads: ThreadPool,
}

struct EvaluationTask {
    index: usize,
    individual: Individual,
}

struct SharedState {
    queue: EvaluationQueue<EvaluationTask>,
    batch: Mutex<BatchState>,
    batch_done: Condvar,
}

#[derive(Default)]
struct BatchState {
    expected: usize,
    completed: usize,
    results: Vec<Option<Individual>>,
    failure: Option<DeError>,
}

impl WorkerPool {
    /// Creates a new instance of `WorkerPool` and starts its workers.
    pub fn new(
        worker_count: usize,
        objective: Arc<dyn ObjectiveFunction>,
        listener: Arc<dyn Listener>,
    ) -> DeResult<Self> {
        if worker_count == 0 {
            return Err(DeError::Configuration("worker count must be at least 1".to_string()));
        }

        let threads = ThreadPool::new(worker_count, "de-worker")?;
        let shared = Arc::new(SharedState {
            queue: EvaluationQueue::default(),
            batch: Mutex::new(BatchState::default()),
            batch_done: Condvar::new(),
        });

        (0..worker_count).for_each(|worker_idx| {
            let shared = shared.clone();
            let objective = objective.clone();
            let listener = listener.clone();

            threads.spawn(move || run_worker(worker_idx, shared.as_ref(), objective.as_ref(), listener.as_ref()));
        });

        Ok(Self { shared, worker_count, _threads: threads })
    }

    /// Returns amount of workers.
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Enqueues the individual for evaluation without blocking. Returns its index in the current batch.
    pub fn submit(&self, individual: Individual) -> usize {
        let index = {
            let mut batch = self.shared.lock_batch();
            let index = batch.results.len();
            batch.results.push(None);
            batch.expected += 1;
            index
        };

        self.shared.queue.push(EvaluationTask { index, individual });

        index
    }

    /// Blocks until every submitted individual of the current batch is processed. Returns evaluated
    /// individuals in submit order or the failure of the batch.
    pub fn wait(&self) -> DeResult<Vec<Individual>> {
        let mut batch = self.shared.lock_batch();
        while batch.completed < batch.expected {
            batch = self.shared.batch_done.wait(batch).unwrap_or_else(PoisonError::into_inner);
        }

        let BatchState { results, failure, .. } = std::mem::take(&mut *batch);

        if let Some(failure) = failure {
            return Err(failure);
        }

        results
            .into_iter()
            .enumerate()
            .map(|(index, individual)| {
                individual.ok_or_else(|| DeError::Evaluation { index, message: "individual is lost".to_string() })
            })
            .collect()
    }

    /// Evaluates all given individuals and blocks until every one is processed.
    pub fn evaluate_all(&self, individuals: Vec<Individual>) -> DeResult<Vec<Individual>> {
        individuals.into_iter().for_each(|individual| {
            self.submit(individual);
        });

        self.wait()
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.shared.queue.close();
    }
}

impl SharedState {
    fn lock_batch(&self) -> MutexGuard<'_, BatchState> {
        self.batch.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn complete(&self, index: usize, result: Result<Individual, String>) {
        let mut batch = self.lock_batch();

        match result {
            Ok(individual) => batch.results[index] = Some(individual),
            Err(message) => {
                // keep the failure with the lowest index to report the same error regardless of scheduling
                let is_first = batch.failure.as_ref().is_none_or(|failure| match failure {
                    DeError::Evaluation { index: other, .. } => index < *other,
                    _ => false,
                });

                if is_first {
                    batch.failure = Some(DeError::Evaluation { index, message });
                }
            }
        }

        batch.completed += 1;
        if batch.completed >= batch.expected {
            self.batch_done.notify_all();
        }
    }
}

fn run_worker(worker_idx: usize, shared: &SharedState, objective: &dyn ObjectiveFunction, listener: &dyn Listener) {
    while let Some(EvaluationTask { index, mut individual }) = shared.queue.pop() {
        let result = catch_unwind(AssertUnwindSafe(|| objective.evaluate(individual.vars())))
            .unwrap_or_else(|payload| Err(get_panic_message(payload).into()));

        // NOTE a panic must not escape the worker loop, otherwise the batch never completes
        match result {
            Ok(cost) => {
                individual.set_cost(cost);
                match catch_unwind(AssertUnwindSafe(|| listener.on_individual_evaluated(&individual))) {
                    Ok(()) => shared.complete(index, Ok(individual)),
                    Err(payload) => shared.complete(index, Err(format!("listener: {}", get_panic_message(payload)))),
                }
            }
            Err(err) => {
                let message = format!("{}: {err}", objective.name());
                let _ = catch_unwind(AssertUnwindSafe(|| {
                    listener.on_evaluation_failed(worker_idx, index, message.as_str())
                }));
                shared.complete(index, Err(message));
            }
        }
    }
}

fn get_panic_message(payload: Box<dyn Any + Send>) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|msg| msg.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
