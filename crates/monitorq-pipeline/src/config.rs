//! Configuration for pipeline runs.

use std::time::Duration;

/// Configuration for a [`Coordinator`](crate::Coordinator) run.
///
/// Worker counts, the observation window, and the pacing intervals are the
/// recognized knobs; everything else about a run is fixed. The intervals
/// shape demo throughput only - correctness never depends on them.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Number of producer threads (default: 1).
    pub producers: usize,
    /// Number of consumer threads (default: 1).
    pub consumers: usize,
    /// How long the coordinator lets the pipeline run before initiating
    /// shutdown (default: 5s).
    pub run_for: Duration,
    /// Base pause between produced items; scaled up per producer id so
    /// workers drift apart (default: 300ms).
    pub produce_interval: Duration,
    /// Base simulated processing time per item; scaled up per consumer id
    /// (default: 400ms).
    pub consume_interval: Duration,
    /// Queue configuration shared by all workers.
    pub queue: monitorq::Config,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            producers: 1,
            consumers: 1,
            run_for: Duration::from_secs(5),
            produce_interval: Duration::from_millis(300),
            consume_interval: Duration::from_millis(400),
            queue: monitorq::Config::default(),
        }
    }
}

impl PipelineConfig {
    /// The scaled demo: 3 producers racing 2 consumers for 8 seconds.
    pub fn scaled() -> Self {
        Self {
            producers: 3,
            consumers: 2,
            run_for: Duration::from_secs(8),
            ..Self::default()
        }
    }

    /// Sets the producer count.
    pub fn with_producers(mut self, producers: usize) -> Self {
        self.producers = producers;
        self
    }

    /// Sets the consumer count.
    pub fn with_consumers(mut self, consumers: usize) -> Self {
        self.consumers = consumers;
        self
    }

    /// Sets the observation window.
    pub fn with_run_for(mut self, run_for: Duration) -> Self {
        self.run_for = run_for;
        self
    }

    /// Sets the base production interval.
    pub fn with_produce_interval(mut self, interval: Duration) -> Self {
        self.produce_interval = interval;
        self
    }

    /// Sets the base consumption interval.
    pub fn with_consume_interval(mut self, interval: Duration) -> Self {
        self.consume_interval = interval;
        self
    }

    /// Sets the queue configuration.
    pub fn with_queue(mut self, queue: monitorq::Config) -> Self {
        self.queue = queue;
        self
    }
}
