use crate::invariants::{
    debug_assert_bounded_len, debug_assert_drained_on_none, debug_assert_shutdown_monotonic,
};
use crate::{Config, Metrics, PushError};
use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

// =============================================================================
// MONITOR PROTOCOL
// =============================================================================
//
// This queue is a classic monitor: one mutex owns ALL mutable state (the
// item buffer and the shutdown flag), and two condition variables partition
// the waiters by role:
//
// - `not_full`:  producers park here while `len == capacity && !shutdown`.
//                Woken by `pop` (one waiter) and `shutdown` (all waiters).
// - `not_empty`: consumers park here while `len == 0 && !shutdown`.
//                Woken by `push` (one waiter) and `shutdown` (all waiters).
//
// Splitting the conditions means a `push` never wakes another producer and a
// `pop` never wakes another consumer; each operation wakes exactly the role
// that can make progress from the state change it caused.
//
// ## Wait discipline
//
// Every wait loops on its predicate. Condition variables may wake
// spuriously, and between the wake and the lock reacquisition another
// thread may have consumed the state change, so a woken thread re-checks
// before acting.
//
// ## Shutdown
//
// `shutdown()` sets the flag under the lock and then notifies ALL waiters
// on BOTH conditions. Any number of producers and consumers may be parked;
// every one of them has to re-evaluate its exit predicate. From that point:
//
// - `push` stops blocking and returns the item back via
//   `PushError::ShuttingDown` instead of enqueuing it.
// - `pop` keeps draining whatever is buffered and returns `None` once the
//   queue is empty. That `None` is the consumer's termination signal.
//
// ## Lock poisoning
//
// Lock and wait results are unwrapped via `PoisonError::into_inner`: no
// operation mutates the buffer in more than one step while holding the
// lock, so a peer that panicked cannot have left torn state behind.
//
// =============================================================================

/// Bounded MPMC FIFO queue with cooperative shutdown.
///
/// Producers block in [`push`](Self::push) while the queue is full;
/// consumers block in [`pop`](Self::pop) while it is empty. Calling
/// [`shutdown`](Self::shutdown) wakes every parked thread: producers give
/// their item back as an error, consumers drain the remaining items and
/// then observe `None`.
///
/// The queue is shared by reference counting; clone an `Arc<BoundedQueue<T>>`
/// into each worker.
///
/// # Example
///
/// ```
/// use monitorq::{BoundedQueue, Config};
///
/// let queue = BoundedQueue::new(Config::new(3, false));
/// queue.push("a").unwrap();
/// queue.push("b").unwrap();
///
/// queue.shutdown();
/// assert!(queue.push("c").is_err()); // rejected, size unchanged
///
/// assert_eq!(queue.pop(), Some("a")); // drain continues after shutdown
/// assert_eq!(queue.pop(), Some("b"));
/// assert_eq!(queue.pop(), None);      // drained: terminate
/// ```
pub struct BoundedQueue<T> {
    /// All mutable state lives under this one lock.
    inner: Mutex<Inner<T>>,
    /// Producers wait here for space.
    not_full: Condvar,
    /// Consumers wait here for items.
    not_empty: Condvar,
    /// Thread-safe op counters (uses atomics internally).
    metrics: Metrics,
    config: Config,
}

/// State protected by the queue's mutex.
struct Inner<T> {
    items: VecDeque<T>,
    shutdown: bool,
}

impl<T> BoundedQueue<T> {
    /// Creates a new queue with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the configured capacity is zero.
    pub fn new(config: Config) -> Self {
        assert!(config.capacity > 0, "queue capacity must be non-zero");

        Self {
            inner: Mutex::new(Inner {
                items: VecDeque::with_capacity(config.capacity),
                shutdown: false,
            }),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
            metrics: Metrics::new(),
            config,
        }
    }

    // ---------------------------------------------------------------------
    // STATUS
    // ---------------------------------------------------------------------

    /// Returns the fixed capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Returns the current number of buffered items.
    ///
    /// Point-in-time snapshot: the value may be stale by the time the call
    /// returns. Use it for reporting and heuristics, not for control flow.
    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    /// Returns `true` if no items are buffered. Same snapshot semantics as
    /// [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.lock().items.is_empty()
    }

    /// Returns `true` if shutdown has been initiated.
    pub fn is_shutdown(&self) -> bool {
        self.lock().shutdown
    }

    // ---------------------------------------------------------------------
    // PRODUCER API
    // ---------------------------------------------------------------------

    /// Appends `item` at the tail, blocking while the queue is full.
    ///
    /// If [`shutdown`](Self::shutdown) fires while this call is parked (or
    /// has already fired), the item is handed back unmodified in
    /// [`PushError::ShuttingDown`] and the queue is left untouched. Rejecting
    /// loudly instead of dropping silently lets the caller decide what an
    /// in-flight item is worth during a drain.
    pub fn push(&self, item: T) -> Result<(), PushError<T>> {
        let mut inner = self.lock();
        while inner.items.len() >= self.config.capacity && !inner.shutdown {
            inner = self.wait_on(&self.not_full, inner);
        }

        if inner.shutdown {
            if self.config.enable_metrics {
                self.metrics.add_pushes_rejected(1);
            }
            return Err(PushError::ShuttingDown(item));
        }

        inner.items.push_back(item);

        // Bounded Length: the buffer never exceeds capacity
        debug_assert_bounded_len!(inner.items.len(), self.config.capacity);

        if self.config.enable_metrics {
            self.metrics.add_items_pushed(1);
        }

        drop(inner);
        self.not_empty.notify_one();
        Ok(())
    }

    // ---------------------------------------------------------------------
    // CONSUMER API
    // ---------------------------------------------------------------------

    /// Removes and returns the head item, blocking while the queue is empty.
    ///
    /// Returns `None` only when the queue is shut down AND drained. That is
    /// the designed termination signal for consumer loops:
    ///
    /// ```ignore
    /// while let Some(item) = queue.pop() {
    ///     process(item);
    /// }
    /// // shutdown observed, every buffered item was delivered
    /// ```
    pub fn pop(&self) -> Option<T> {
        let mut inner = self.lock();
        while inner.items.is_empty() && !inner.shutdown {
            inner = self.wait_on(&self.not_empty, inner);
        }

        match inner.items.pop_front() {
            Some(item) => {
                if self.config.enable_metrics {
                    self.metrics.add_items_popped(1);
                }
                drop(inner);
                self.not_full.notify_one();
                Some(item)
            }
            None => {
                // Drained Terminal: `None` is only ever returned when
                // shutdown is set and the buffer is empty
                debug_assert_drained_on_none!(inner.shutdown, inner.items.is_empty());
                None
            }
        }
    }

    /// Non-blocking probe: removes and returns the head item, or `None`
    /// immediately if the queue is empty.
    ///
    /// An empty result is not an error and says nothing about shutdown;
    /// callers polling with `try_pop` decide for themselves when to stop.
    pub fn try_pop(&self) -> Option<T> {
        let mut inner = self.lock();
        match inner.items.pop_front() {
            Some(item) => {
                if self.config.enable_metrics {
                    self.metrics.add_items_popped(1);
                }
                drop(inner);
                self.not_full.notify_one();
                Some(item)
            }
            None => {
                if self.config.enable_metrics {
                    self.metrics.add_try_pop_misses(1);
                }
                None
            }
        }
    }

    // ---------------------------------------------------------------------
    // LIFECYCLE
    // ---------------------------------------------------------------------

    /// Initiates shutdown: RUNNING → SHUTTING_DOWN.
    ///
    /// Sets the flag under the lock, then wakes ALL waiters on both
    /// conditions so every parked producer and consumer re-evaluates its
    /// exit predicate. Idempotent; the flag never resets.
    pub fn shutdown(&self) {
        let mut inner = self.lock();
        let was_shutdown = inner.shutdown;
        inner.shutdown = true;

        // Monotonic Shutdown: false -> true only, never back
        debug_assert_shutdown_monotonic!(was_shutdown, inner.shutdown);

        drop(inner);
        self.not_full.notify_all();
        self.not_empty.notify_all();
    }

    /// Get a snapshot of metrics if enabled.
    pub fn metrics(&self) -> crate::MetricsSnapshot {
        if self.config.enable_metrics {
            self.metrics.snapshot()
        } else {
            crate::MetricsSnapshot::default()
        }
    }

    // ---------------------------------------------------------------------
    // INTERNAL
    // ---------------------------------------------------------------------

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn wait_on<'a>(
        &self,
        condvar: &Condvar,
        guard: MutexGuard<'a, Inner<T>>,
    ) -> MutexGuard<'a, Inner<T>> {
        condvar.wait(guard).unwrap_or_else(PoisonError::into_inner)
    }
}
