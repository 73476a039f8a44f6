//! Property-based tests for the queue's structural guarantees.
//!
//! Single-threaded op sequences checked against a plain `VecDeque`
//! reference model: whatever the model says the queue must say too.
//! Blocking paths are exercised by the integration and loom suites; here
//! every operation is chosen so it cannot park (push only with space,
//! try_pop instead of pop before shutdown).

use monitorq::{BoundedQueue, Config, PushError};
use proptest::prelude::*;
use std::collections::VecDeque;

// =============================================================================
// Bounded Length
// "0 ≤ len ≤ capacity after every operation"
// =============================================================================

proptest! {
    #[test]
    fn prop_len_never_exceeds_capacity(
        capacity in 1usize..32,
        ops in prop::collection::vec(prop::bool::ANY, 1..200),
    ) {
        let queue = BoundedQueue::new(Config::new(capacity, false));
        let mut next = 0u64;

        for is_push in ops {
            if is_push && queue.len() < capacity {
                queue.push(next).unwrap();
                next += 1;
            } else {
                let _ = queue.try_pop();
            }
            prop_assert!(queue.len() <= capacity,
                "len {} exceeded capacity {}", queue.len(), capacity);
        }
    }
}

// =============================================================================
// FIFO + exactly-once, checked against the reference model
// =============================================================================

proptest! {
    #[test]
    fn prop_matches_reference_model(
        capacity in 1usize..16,
        ops in prop::collection::vec(prop::bool::ANY, 1..300),
    ) {
        let queue = BoundedQueue::new(Config::new(capacity, false));
        let mut model: VecDeque<u64> = VecDeque::new();
        let mut next = 0u64;

        for is_push in ops {
            if is_push && model.len() < capacity {
                queue.push(next).unwrap();
                model.push_back(next);
                next += 1;
            } else {
                prop_assert_eq!(queue.try_pop(), model.pop_front());
            }
            prop_assert_eq!(queue.len(), model.len());
        }

        // Drain whatever is left; the orders must agree to the last item.
        while let Some(expected) = model.pop_front() {
            prop_assert_eq!(queue.try_pop(), Some(expected));
        }
        prop_assert_eq!(queue.try_pop(), None);
    }
}

// =============================================================================
// Shutdown: drain exactly what was buffered, reject everything new
// =============================================================================

proptest! {
    #[test]
    fn prop_shutdown_drains_in_order_then_none(
        capacity in 1usize..32,
        buffered in 0usize..32,
    ) {
        let buffered = buffered.min(capacity);
        let queue = BoundedQueue::new(Config::new(capacity, false));

        for i in 0..buffered as u64 {
            queue.push(i).unwrap();
        }
        queue.shutdown();

        for i in 0..buffered as u64 {
            prop_assert_eq!(queue.pop(), Some(i));
        }
        // Drained terminal: no blocking, no phantom items.
        prop_assert_eq!(queue.pop(), None);
        prop_assert_eq!(queue.try_pop(), None);
    }

    #[test]
    fn prop_rejected_push_leaves_len_unchanged(
        capacity in 1usize..32,
        buffered in 0usize..32,
        attempts in 1usize..8,
    ) {
        let buffered = buffered.min(capacity);
        let queue = BoundedQueue::new(Config::new(capacity, false));

        for i in 0..buffered as u64 {
            queue.push(i).unwrap();
        }
        queue.shutdown();

        for attempt in 0..attempts as u64 {
            let err = queue.push(1_000 + attempt).unwrap_err();
            // The exact item comes back, and nothing entered the buffer.
            prop_assert_eq!(err, PushError::ShuttingDown(1_000 + attempt));
            prop_assert_eq!(queue.len(), buffered);
        }
    }
}
