use crate::Item;
use monitorq::{BoundedQueue, PushError, ShutdownSignal};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

/// A producer worker: synthesizes items and enqueues them until told to
/// stop.
///
/// The loop gates on the shared [`ShutdownSignal`]. A producer that is
/// mid-`push` when the signal flips finishes that call: either the item
/// was accepted (and will be drained normally) or the queue's own shutdown
/// broadcast hands it back as [`PushError::ShuttingDown`], which also ends
/// the loop. Nothing is enqueued after that point.
pub struct Producer {
    id: usize,
    queue: Arc<BoundedQueue<Item>>,
    signal: ShutdownSignal,
    /// Pause between items. Demo throughput shaping only, not part of the
    /// synchronization contract.
    interval: Duration,
}

impl Producer {
    pub fn new(
        id: usize,
        queue: Arc<BoundedQueue<Item>>,
        signal: ShutdownSignal,
        interval: Duration,
    ) -> Self {
        Self {
            id,
            queue,
            signal,
            interval,
        }
    }

    /// Runs the production loop on the calling thread.
    ///
    /// Returns the number of items successfully enqueued.
    pub fn run(&self) -> usize {
        info!(id = self.id, "producer starting");

        let mut produced = 0usize;
        let mut seq = 0u64;

        while !self.signal.is_shutdown() {
            let item = Item::new(self.id, seq);
            seq += 1;

            match self.queue.push(item) {
                Ok(()) => {
                    produced += 1;
                    debug!(id = self.id, item = %item, queue_len = self.queue.len(), "produced");
                }
                Err(PushError::ShuttingDown(rejected)) => {
                    debug!(id = self.id, item = %rejected, "item rejected by shutdown");
                    break;
                }
            }

            if !self.interval.is_zero() {
                thread::sleep(self.interval);
            }
        }

        info!(id = self.id, produced, "producer stopping");
        produced
    }
}
