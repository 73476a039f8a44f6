use crate::{Consumer, Item, PipelineConfig, Producer};
use monitorq::{BoundedQueue, MetricsSnapshot, ShutdownSignal};
use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Errors surfaced by a coordinator run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The OS refused to spawn a worker thread.
    #[error("failed to spawn {role} thread: {source}")]
    Spawn {
        role: &'static str,
        #[source]
        source: io::Error,
    },

    /// A worker thread panicked; its count is lost.
    #[error("{role} {id} panicked")]
    WorkerPanicked { role: &'static str, id: usize },
}

/// What a completed run looked like, one count per worker.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Items successfully enqueued, indexed by producer (id order).
    pub produced: Vec<usize>,
    /// Items processed, indexed by consumer (id order).
    pub consumed: Vec<usize>,
    /// Queue length after every worker joined. Zero whenever consumers
    /// drained to the terminal; reported rather than assumed.
    pub final_len: usize,
    /// Queue op counters (all zero unless metrics were enabled).
    pub metrics: MetricsSnapshot,
}

impl RunReport {
    /// Total items enqueued across all producers.
    pub fn total_produced(&self) -> usize {
        self.produced.iter().sum()
    }

    /// Total items processed across all consumers.
    pub fn total_consumed(&self) -> usize {
        self.consumed.iter().sum()
    }
}

/// Owns one pipeline run end to end.
///
/// The coordinator constructs the shared queue and shutdown signal, spawns
/// the configured workers, lets the system run for the observation window,
/// then executes the stop sequence:
///
/// 1. flip the [`ShutdownSignal`] - producers stop starting new items;
/// 2. [`BoundedQueue::shutdown`] - every thread parked inside the queue is
///    woken, pushes are rejected from here on, consumers drain the rest;
/// 3. join every worker thread.
///
/// No thread is ever detached: `run` does not return until every handle it
/// spawned has been joined, success or error.
pub struct Coordinator {
    config: PipelineConfig,
}

impl Coordinator {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Executes one full run and reports the outcome.
    pub fn run(&self) -> Result<RunReport, PipelineError> {
        let queue = Arc::new(BoundedQueue::new(self.config.queue));
        let signal = ShutdownSignal::new();

        info!(
            producers = self.config.producers,
            consumers = self.config.consumers,
            capacity = queue.capacity(),
            run_for_ms = self.config.run_for.as_millis() as u64,
            "starting pipeline"
        );

        // Consumers first: they park harmlessly on the empty queue until
        // the producers arrive.
        let mut consumer_handles = Vec::with_capacity(self.config.consumers);
        for id in 1..=self.config.consumers {
            let worker = Consumer::new(
                id,
                Arc::clone(&queue),
                scaled_interval(self.config.consume_interval, id),
            );
            match spawn_worker("consumer", id, move || worker.run()) {
                Ok(handle) => consumer_handles.push(handle),
                Err(err) => {
                    abort(&signal, &queue, Vec::new(), consumer_handles);
                    return Err(err);
                }
            }
        }

        let mut producer_handles = Vec::with_capacity(self.config.producers);
        for id in 1..=self.config.producers {
            let worker = Producer::new(
                id,
                Arc::clone(&queue),
                signal.clone(),
                scaled_interval(self.config.produce_interval, id),
            );
            match spawn_worker("producer", id, move || worker.run()) {
                Ok(handle) => producer_handles.push(handle),
                Err(err) => {
                    abort(&signal, &queue, producer_handles, consumer_handles);
                    return Err(err);
                }
            }
        }

        // Observation window.
        thread::sleep(self.config.run_for);

        info!("initiating shutdown");
        signal.shutdown();
        queue.shutdown();

        let produced = join_all(producer_handles, "producer")?;
        let consumed = join_all(consumer_handles, "consumer")?;

        let report = RunReport {
            produced,
            consumed,
            final_len: queue.len(),
            metrics: queue.metrics(),
        };

        info!(
            produced = report.total_produced(),
            consumed = report.total_consumed(),
            final_len = report.final_len,
            "pipeline complete"
        );

        Ok(report)
    }
}

/// Id-scaled pacing so same-role workers drift apart instead of convoying.
fn scaled_interval(base: Duration, id: usize) -> Duration {
    base + (base / 3) * id as u32
}

fn spawn_worker<F>(
    role: &'static str,
    id: usize,
    work: F,
) -> Result<JoinHandle<usize>, PipelineError>
where
    F: FnOnce() -> usize + Send + 'static,
{
    thread::Builder::new()
        .name(format!("{role}-{id}"))
        .spawn(work)
        .map_err(|source| PipelineError::Spawn { role, source })
}

fn join_all(
    handles: Vec<JoinHandle<usize>>,
    role: &'static str,
) -> Result<Vec<usize>, PipelineError> {
    handles
        .into_iter()
        .enumerate()
        .map(|(idx, handle)| {
            handle
                .join()
                .map_err(|_| PipelineError::WorkerPanicked { role, id: idx + 1 })
        })
        .collect()
}

/// Spawn-failure path: stop the world, then wait for whatever did start.
fn abort(
    signal: &ShutdownSignal,
    queue: &BoundedQueue<Item>,
    producers: Vec<JoinHandle<usize>>,
    consumers: Vec<JoinHandle<usize>>,
) {
    signal.shutdown();
    queue.shutdown();
    for handle in producers.into_iter().chain(consumers) {
        let _ = handle.join();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_config() -> PipelineConfig {
        PipelineConfig::default()
            .with_run_for(Duration::from_millis(50))
            .with_produce_interval(Duration::ZERO)
            .with_consume_interval(Duration::ZERO)
    }

    #[test]
    fn test_run_accounts_for_every_item() {
        let report = Coordinator::new(fast_config()).run().unwrap();

        assert_eq!(report.produced.len(), 1);
        assert_eq!(report.consumed.len(), 1);
        assert_eq!(
            report.total_produced(),
            report.total_consumed() + report.final_len
        );
    }

    #[test]
    fn test_scaled_run_terminates_and_drains() {
        let config = fast_config().with_producers(3).with_consumers(2);
        let report = Coordinator::new(config).run().unwrap();

        assert_eq!(report.produced.len(), 3);
        assert_eq!(report.consumed.len(), 2);
        // Consumers only exit on the drained terminal.
        assert_eq!(report.final_len, 0);
        assert_eq!(report.total_produced(), report.total_consumed());
    }

    #[test]
    fn test_metrics_flow_into_report() {
        let config = fast_config().with_queue(monitorq::Config::new(10, true));
        let report = Coordinator::new(config).run().unwrap();

        assert_eq!(report.metrics.items_pushed as usize, report.total_produced());
        assert_eq!(report.metrics.items_popped as usize, report.total_consumed());
    }

    #[test]
    fn test_scaled_interval_drifts_by_id() {
        let base = Duration::from_millis(300);
        assert_eq!(scaled_interval(base, 1), Duration::from_millis(400));
        assert_eq!(scaled_interval(base, 2), Duration::from_millis(500));
    }
}
