//! Shutdown utilities for graceful termination.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cloneable run-flag for signaling workers to stop.
///
/// Multiple clones of this handle observe the same flag - the first call to
/// [`shutdown`](Self::shutdown) wins, subsequent calls are no-ops. The flag
/// is monotonic: it transitions false → true exactly once and never resets.
///
/// The signal is intentionally decoupled from the queue. It gates worker
/// loops coarsely ("stop starting new units of work") and carries no
/// invariant relationship with the queue's contents, so reading it outside
/// the queue's lock is fine. Waking threads parked *inside* the queue is
/// the job of [`BoundedQueue::shutdown`](crate::BoundedQueue::shutdown);
/// a coordinator fires both in sequence.
///
/// # Example
///
/// ```
/// use monitorq::ShutdownSignal;
///
/// let signal = ShutdownSignal::new();
/// let observer = signal.clone();
///
/// assert!(!observer.is_shutdown());
/// signal.shutdown();
/// assert!(observer.is_shutdown());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShutdownSignal {
    stopping: Arc<AtomicBool>,
}

impl ShutdownSignal {
    /// Creates a new signal in the "running" state.
    pub fn new() -> Self {
        Self {
            stopping: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flips the flag to "stopping".
    ///
    /// Idempotent - calling it multiple times has no additional effect
    /// after the first call.
    #[inline]
    pub fn shutdown(&self) {
        self.stopping.store(true, Ordering::Release);
    }

    /// Returns `true` if shutdown has been requested.
    #[inline]
    pub fn is_shutdown(&self) -> bool {
        self.stopping.load(Ordering::Acquire)
    }
}
