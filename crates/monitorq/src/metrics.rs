//! Optional operation counters for monitoring queue behavior.

use crossbeam_utils::CachePadded;
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe operation counters, collected when
/// [`Config::enable_metrics`](crate::Config::enable_metrics) is set.
///
/// The push/pop counters sit on their own cache lines: they are bumped by
/// opposite roles, often from different cores, and must not false-share.
/// The shutdown-path counters are cold and stay unpadded.
#[derive(Debug)]
pub struct Metrics {
    items_pushed: CachePadded<AtomicU64>,
    items_popped: CachePadded<AtomicU64>,
    pushes_rejected: AtomicU64,
    try_pop_misses: AtomicU64,
}

impl Metrics {
    pub(crate) fn new() -> Self {
        Self {
            items_pushed: CachePadded::new(AtomicU64::new(0)),
            items_popped: CachePadded::new(AtomicU64::new(0)),
            pushes_rejected: AtomicU64::new(0),
            try_pop_misses: AtomicU64::new(0),
        }
    }

    #[inline]
    pub(crate) fn add_items_pushed(&self, n: u64) {
        self.items_pushed.fetch_add(n, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn add_items_popped(&self, n: u64) {
        self.items_popped.fetch_add(n, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn add_pushes_rejected(&self, n: u64) {
        self.pushes_rejected.fetch_add(n, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn add_try_pop_misses(&self, n: u64) {
        self.try_pop_misses.fetch_add(n, Ordering::Relaxed);
    }

    /// Takes a coherent-enough snapshot of all counters.
    pub(crate) fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            items_pushed: self.items_pushed.load(Ordering::Relaxed),
            items_popped: self.items_popped.load(Ordering::Relaxed),
            pushes_rejected: self.pushes_rejected.load(Ordering::Relaxed),
            try_pop_misses: self.try_pop_misses.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the queue's counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Items successfully enqueued.
    pub items_pushed: u64,
    /// Items successfully dequeued (blocking and non-blocking).
    pub items_popped: u64,
    /// Pushes rejected because shutdown was already signaled.
    pub pushes_rejected: u64,
    /// `try_pop` calls that found the queue empty.
    pub try_pop_misses: u64,
}

impl MetricsSnapshot {
    /// Items still buffered according to this snapshot's counters.
    ///
    /// Derived from two relaxed loads, so it can disagree transiently with
    /// `len()`; use for reporting only.
    pub fn in_flight(&self) -> u64 {
        self.items_pushed.saturating_sub(self.items_popped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let metrics = Metrics::new();
        metrics.add_items_pushed(3);
        metrics.add_items_popped(2);
        metrics.add_pushes_rejected(1);
        metrics.add_try_pop_misses(4);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.items_pushed, 3);
        assert_eq!(snapshot.items_popped, 2);
        assert_eq!(snapshot.pushes_rejected, 1);
        assert_eq!(snapshot.try_pop_misses, 4);
        assert_eq!(snapshot.in_flight(), 1);
    }

    #[test]
    fn test_in_flight_saturates() {
        let snapshot = MetricsSnapshot {
            items_pushed: 1,
            items_popped: 2,
            ..MetricsSnapshot::default()
        };
        assert_eq!(snapshot.in_flight(), 0);
    }
}
