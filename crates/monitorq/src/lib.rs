//! monitorq - Bounded Producer/Consumer Queue on the Monitor Pattern
//!
//! A thread-safe, fixed-capacity FIFO coordinating any number of producer
//! and consumer threads, plus a cooperative shutdown protocol that lets all
//! of them terminate without losing or duplicating in-flight items.
//!
//! Two variants are provided:
//!
//! - [`BoundedQueue`] - the production variant: separate `not_full` /
//!   `not_empty` condition variables (producers and consumers never wake
//!   each other needlessly) and a shutdown flag folded into both wait
//!   predicates. `push` rejects new items once shutdown is signaled;
//!   `pop` drains the remainder and then returns `None`, which is the
//!   consumer's termination signal.
//! - [`SimpleQueue`] - the minimal single-condvar monitor, kept for
//!   illustration. It has no shutdown-aware wake, so a blocking `pop` can
//!   park forever once producers stop; see its docs before using it for
//!   anything but polling.
//!
//! # Example
//!
//! ```
//! use monitorq::{BoundedQueue, Config, ShutdownSignal};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let queue = Arc::new(BoundedQueue::new(Config::default()));
//! let signal = ShutdownSignal::new();
//!
//! let consumer = {
//!     let queue = Arc::clone(&queue);
//!     thread::spawn(move || {
//!         let mut consumed = 0;
//!         // `None` means shutdown was signaled and the queue is drained.
//!         while let Some(_item) = queue.pop() {
//!             consumed += 1;
//!         }
//!         consumed
//!     })
//! };
//!
//! for i in 0..5 {
//!     queue.push(i).unwrap();
//! }
//!
//! signal.shutdown(); // stop producers (none here) ...
//! queue.shutdown();  // ... and wake anything parked in the queue
//!
//! assert_eq!(consumer.join().unwrap(), 5);
//! ```

mod config;
mod error;
mod invariants;
mod metrics;
mod queue;
mod shutdown;
mod simple;

pub use config::{Config, DEEP_BUFFER_CONFIG, DEMO_CONFIG};
pub use error::PushError;
pub use metrics::{Metrics, MetricsSnapshot};
pub use queue::BoundedQueue;
pub use shutdown::ShutdownSignal;
pub use simple::SimpleQueue;
