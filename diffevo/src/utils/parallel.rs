use crate::utils::{GenericError, GenericResult};
use rayon::{ThreadPool as RayonThreadPool, ThreadPoolBuilder};

/// Represents a thread pool wrapper.
pub struct ThreadPool {
    inner: RayonThreadPool,
}

impl ThreadPool {
    /// Creates a new instance of `ThreadPool` with named threads.
    pub fn new(num_threads: usize, name_prefix: &str) -> GenericResult<Self> {
        let name_prefix = name_prefix.to_string();
        let inner = ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(move |idx| format!("{name_prefix}-{idx}"))
            .build()
            .map_err(|err| GenericError::from(format!("cannot build a thread pool: {err}")))?;

        Ok(Self { inner })
    }

    /// Spawns a detached, possibly long running, operation on the pool.
    pub fn spawn<OP>(&self, op: OP)
    where
        OP: FnOnce() + Send + 'static,
    {
        self.inner.spawn(op)
    }
}
