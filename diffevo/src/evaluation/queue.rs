#[cfg(test)]
#[path = "../../tests/unit/evaluation/queue_test.rs"]
mod queue_test;

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

/// A thread safe blocking FIFO queue: items are pushed by a single producer and each item is
/// delivered to exactly one of concurrent consumers.
pub struct EvaluationQueue<T> {
    state: Mutex<QueueState<T>>,
    available: Condvar,
}

struct QueueState<T> {
    items: VecDeque<T>,
    is_closed: bool,
}

impl<T> Default for EvaluationQueue<T> {
    fn default() -> Self {
        Self { state: Mutex::new(QueueState { items: VecDeque::default(), is_closed: false }), available: Condvar::new() }
    }
}

impl<T> EvaluationQueue<T> {
    /// Pushes an item without blocking. Returns false if the queue is closed.
    pub fn push(&self, item: T) -> bool {
        let mut state = self.lock();
        if state.is_closed {
            return false;
        }

        state.items.push_back(item);
        drop(state);
        self.available.notify_one();

        true
    }

    /// Pops an item blocking while the queue is empty. Returns `None` once the queue is closed
    /// and drained.
    pub fn pop(&self) -> Option<T> {
        let mut state = self.lock();

        loop {
            if let Some(item) = state.items.pop_front() {
                return Some(item);
            }

            if state.is_closed {
                return None;
            }

            state = self.available.wait(state).unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Pops an item if there is any, never blocks.
    pub fn try_pop(&self) -> Option<T> {
        self.lock().items.pop_front()
    }

    /// Closes the queue: consumers are woken up and receive remaining items, then `None`.
    pub fn close(&self) {
        self.lock().is_closed = true;
        self.available.notify_all();
    }

    /// Returns amount of items waiting in the queue.
    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    /// Returns true if there are no items waiting in the queue.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the queue is closed.
    pub fn is_closed(&self) -> bool {
        self.lock().is_closed
    }

    fn lock(&self) -> MutexGuard<'_, QueueState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
