//! Loom-based concurrency tests for monitorq.
//!
//! Run with: `cargo test --features loom --test loom_tests --release`
//!
//! Loom exhaustively explores all possible thread interleavings to find
//! synchronization bugs that might only occur under specific scheduling.
//! Following the usual loom recipe, the monitor protocol is modeled in
//! isolation with loom's own `Mutex`/`Condvar` and a tiny capacity so the
//! state space stays tractable.

#![cfg(feature = "loom")]

use loom::sync::{Arc, Condvar, Mutex};
use loom::thread;
use std::collections::VecDeque;

/// Minimal replica of the dual-condvar + shutdown protocol.
struct LoomQueue {
    inner: Mutex<State>,
    not_full: Condvar,
    not_empty: Condvar,
    capacity: usize,
}

struct State {
    items: VecDeque<u64>,
    shutdown: bool,
}

impl LoomQueue {
    fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(State {
                items: VecDeque::new(),
                shutdown: false,
            }),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
            capacity,
        }
    }

    /// Returns `false` if the item was rejected because of shutdown.
    fn push(&self, value: u64) -> bool {
        let mut state = self.inner.lock().unwrap();
        while state.items.len() >= self.capacity && !state.shutdown {
            state = self.not_full.wait(state).unwrap();
        }
        if state.shutdown {
            return false;
        }
        state.items.push_back(value);
        drop(state);
        self.not_empty.notify_one();
        true
    }

    fn pop(&self) -> Option<u64> {
        let mut state = self.inner.lock().unwrap();
        while state.items.is_empty() && !state.shutdown {
            state = self.not_empty.wait(state).unwrap();
        }
        let item = state.items.pop_front();
        if item.is_some() {
            drop(state);
            self.not_full.notify_one();
        }
        item
    }

    fn shutdown(&self) {
        let mut state = self.inner.lock().unwrap();
        state.shutdown = true;
        drop(state);
        self.not_full.notify_all();
        self.not_empty.notify_all();
    }
}

/// SPSC through a capacity-1 queue: every interleaving must deliver both
/// items, in order, exactly once.
#[test]
fn loom_spsc_fifo_no_loss() {
    loom::model(|| {
        let queue = Arc::new(LoomQueue::new(1));
        let producer_queue = Arc::clone(&queue);

        let producer = thread::spawn(move || {
            assert!(producer_queue.push(1));
            assert!(producer_queue.push(2));
        });

        let first = queue.pop();
        let second = queue.pop();
        assert_eq!(first, Some(1));
        assert_eq!(second, Some(2));

        producer.join().unwrap();
    });
}

/// A consumer parked on an empty queue must be woken by shutdown and
/// observe the drained terminal, in every interleaving.
#[test]
fn loom_shutdown_wakes_parked_consumer() {
    loom::model(|| {
        let queue = Arc::new(LoomQueue::new(1));
        let consumer_queue = Arc::clone(&queue);

        let consumer = thread::spawn(move || consumer_queue.pop());

        queue.shutdown();

        assert_eq!(consumer.join().unwrap(), None);
    });
}

/// A producer parked on a full queue must be woken by shutdown and report
/// the rejection instead of enqueuing.
#[test]
fn loom_shutdown_unblocks_parked_producer() {
    loom::model(|| {
        let queue = Arc::new(LoomQueue::new(1));
        assert!(queue.push(1)); // fill the single slot

        let producer_queue = Arc::clone(&queue);
        let producer = thread::spawn(move || producer_queue.push(2));

        queue.shutdown();

        // Whether the producer reached the wait before or after the flag
        // flipped, the second item must have been rejected.
        assert!(!producer.join().unwrap());

        // The buffered item is still there to drain.
        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), None);
    });
}

/// Shutdown racing a push/pop pair: the item either made it in before the
/// flag (and must drain) or was rejected - never lost in between.
#[test]
fn loom_shutdown_races_push() {
    loom::model(|| {
        let queue = Arc::new(LoomQueue::new(1));
        let producer_queue = Arc::clone(&queue);

        let producer = thread::spawn(move || producer_queue.push(7));

        queue.shutdown();
        let accepted = producer.join().unwrap();
        let drained = queue.pop();

        if accepted {
            assert_eq!(drained, Some(7));
        } else {
            assert_eq!(drained, None);
        }
    });
}
