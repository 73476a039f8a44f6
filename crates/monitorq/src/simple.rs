use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

/// Bounded FIFO queue with a single shared condition variable.
///
/// The minimal monitor: one mutex, one condvar that both roles wait on and
/// both operations signal. Correct, because every wait re-checks its
/// predicate after every wake, but wasteful under contention: a `push`
/// cannot target consumers specifically, so the single `notify_one` may
/// land on another producer that just re-checks and goes back to sleep.
///
/// There is deliberately no shutdown path. A blocked [`pop`](Self::pop)
/// has no way to learn that production has stopped for good, so it cannot
/// distinguish "temporarily empty" from "finished" and may park forever.
/// Workers that need to terminate should poll [`try_pop`](Self::try_pop)
/// against an external stop flag, or use [`BoundedQueue`](crate::BoundedQueue),
/// which folds the stop signal into the wait predicates.
pub struct SimpleQueue<T> {
    items: Mutex<VecDeque<T>>,
    /// Shared by producers (waiting for space) and consumers (waiting for
    /// items); every state change signals it once.
    state_changed: Condvar,
    capacity: usize,
}

impl<T> SimpleQueue<T> {
    /// Creates a queue holding at most `capacity` items.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "queue capacity must be non-zero");

        Self {
            items: Mutex::new(VecDeque::with_capacity(capacity)),
            state_changed: Condvar::new(),
            capacity,
        }
    }

    /// Returns the fixed capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the current number of buffered items (point-in-time snapshot).
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if no items are buffered (point-in-time snapshot).
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Appends `item` at the tail, blocking while the queue is full.
    pub fn push(&self, item: T) {
        let mut items = self.lock();
        while items.len() >= self.capacity {
            items = self.wait(items);
        }

        items.push_back(item);
        drop(items);
        self.state_changed.notify_one();
    }

    /// Removes and returns the head item, blocking while the queue is empty.
    ///
    /// Blocks indefinitely if no producer ever pushes again; see the type
    /// docs for why this variant cannot terminate on its own.
    pub fn pop(&self) -> T {
        let mut items = self.lock();
        loop {
            if let Some(item) = items.pop_front() {
                drop(items);
                self.state_changed.notify_one();
                return item;
            }
            items = self.wait(items);
        }
    }

    /// Non-blocking probe: removes and returns the head item, or `None`
    /// immediately if the queue is empty.
    pub fn try_pop(&self) -> Option<T> {
        let mut items = self.lock();
        let item = items.pop_front()?;
        drop(items);
        self.state_changed.notify_one();
        Some(item)
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<T>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn wait<'a>(&self, guard: MutexGuard<'a, VecDeque<T>>) -> MutexGuard<'a, VecDeque<T>> {
        self.state_changed
            .wait(guard)
            .unwrap_or_else(PoisonError::into_inner)
    }
}
