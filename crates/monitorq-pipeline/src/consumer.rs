use crate::Item;
use monitorq::BoundedQueue;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

/// A consumer worker: dequeues and processes items until the queue is
/// drained under shutdown.
///
/// The loop never looks at a run-flag. [`BoundedQueue::pop`] already folds
/// the stop condition into its wait predicate and returns `None` exactly
/// when shutdown has been signaled AND the buffer is empty, so the
/// `while let` exit is race-free by construction - there is no window in
/// which the worker can quit while a straggler item is still buffered.
pub struct Consumer {
    id: usize,
    queue: Arc<BoundedQueue<Item>>,
    /// Simulated per-item processing time. Demo pacing only.
    interval: Duration,
}

impl Consumer {
    pub fn new(id: usize, queue: Arc<BoundedQueue<Item>>, interval: Duration) -> Self {
        Self {
            id,
            queue,
            interval,
        }
    }

    /// Runs the consumption loop on the calling thread.
    ///
    /// Returns the number of items processed.
    pub fn run(&self) -> usize {
        info!(id = self.id, "consumer starting");

        let mut consumed = 0usize;

        while let Some(item) = self.queue.pop() {
            debug!(id = self.id, item = %item, queue_len = self.queue.len(), "processing");

            if !self.interval.is_zero() {
                thread::sleep(self.interval);
            }

            consumed += 1;
            debug!(id = self.id, item = %item, "finished");
        }

        info!(id = self.id, consumed, "consumer stopping");
        consumed
    }
}
