//! Producer/Consumer Workers for monitorq
//!
//! This crate drives [`monitorq::BoundedQueue`] with real worker threads:
//! producers that synthesize items until a shared [`monitorq::ShutdownSignal`]
//! flips, consumers that process items until the queue reports the drained
//! terminal, and a [`Coordinator`] that owns the whole lifecycle - spawn,
//! observe, stop sequence, join, report.
//!
//! # Example
//!
//! ```
//! use monitorq_pipeline::{Coordinator, PipelineConfig};
//! use std::time::Duration;
//!
//! let config = PipelineConfig::default()
//!     .with_producers(2)
//!     .with_consumers(2)
//!     .with_run_for(Duration::from_millis(50))
//!     .with_produce_interval(Duration::ZERO)
//!     .with_consume_interval(Duration::ZERO);
//!
//! let report = Coordinator::new(config).run().unwrap();
//!
//! // Every accepted item was either processed or is still buffered.
//! assert_eq!(
//!     report.total_produced(),
//!     report.total_consumed() + report.final_len,
//! );
//! ```

mod config;
mod consumer;
mod coordinator;
mod item;
mod producer;

pub use config::PipelineConfig;
pub use consumer::Consumer;
pub use coordinator::{Coordinator, PipelineError, RunReport};
pub use item::Item;
pub use producer::Producer;
