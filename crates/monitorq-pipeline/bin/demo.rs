//! Demonstration of the monitorq pipeline.
//!
//! Run with: `cargo run -p monitorq-pipeline --bin demo`

use monitorq::{BoundedQueue, Config, SimpleQueue};
use monitorq_pipeline::{Coordinator, PipelineConfig};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== monitorq Demo ===\n");

    demo_queue_contract();
    demo_single_pipeline()?;
    demo_scaled_pipeline()?;
    demo_single_signal_polling();

    println!("\n=== All demos completed successfully! ===");
    Ok(())
}

/// Demo 1: The queue contract, step by step
fn demo_queue_contract() {
    println!("--- Demo 1: Queue Contract ---");

    let queue = BoundedQueue::new(Config::new(3, false));

    queue.push("a").unwrap();
    queue.push("b").unwrap();
    println!("  Buffered 2 of 3 slots (len = {})", queue.len());

    queue.shutdown();
    println!("  Shutdown signaled");

    // New items are rejected loudly; the caller keeps the payload.
    match queue.push("c") {
        Ok(()) => unreachable!("push cannot succeed after shutdown"),
        Err(err) => println!("  push(\"c\") rejected: {} (len still {})", err, queue.len()),
    }

    // Buffered items drain in order, then the terminal None.
    println!("  pop() -> {:?}", queue.pop());
    println!("  pop() -> {:?}", queue.pop());
    println!("  pop() -> {:?} (drained: consumer would stop here)", queue.pop());

    println!("  ✓ Queue contract demo complete\n");
}

/// Demo 2: Single producer, single consumer
fn demo_single_pipeline() -> Result<(), Box<dyn std::error::Error>> {
    println!("--- Demo 2: Single Producer / Single Consumer ---");

    let config = PipelineConfig::default()
        .with_run_for(Duration::from_secs(2))
        .with_produce_interval(Duration::from_millis(100))
        .with_consume_interval(Duration::from_millis(150));

    let report = Coordinator::new(config).run()?;

    println!(
        "  Produced {} items, consumed {}, {} left in the buffer",
        report.total_produced(),
        report.total_consumed(),
        report.final_len
    );
    println!("  ✓ Single pipeline complete\n");
    Ok(())
}

/// Demo 3: Scaled pipeline with racing workers
fn demo_scaled_pipeline() -> Result<(), Box<dyn std::error::Error>> {
    println!("--- Demo 3: 3 Producers / 2 Consumers ---");

    let config = PipelineConfig::scaled()
        .with_run_for(Duration::from_secs(3))
        .with_produce_interval(Duration::from_millis(100))
        .with_consume_interval(Duration::from_millis(130))
        .with_queue(Config::new(10, true));

    let report = Coordinator::new(config).run()?;

    for (idx, count) in report.produced.iter().enumerate() {
        println!("  Producer {} enqueued {} items", idx + 1, count);
    }
    for (idx, count) in report.consumed.iter().enumerate() {
        println!("  Consumer {} processed {} items", idx + 1, count);
    }
    println!(
        "  Final buffer size: {} | pushed={} popped={} rejected={}",
        report.final_len,
        report.metrics.items_pushed,
        report.metrics.items_popped,
        report.metrics.pushes_rejected
    );
    println!("  ✓ Scaled pipeline complete\n");
    Ok(())
}

/// Demo 4: The single-signal variant, driven safely by polling
///
/// `SimpleQueue` has no shutdown-aware wake, so a blocking `pop` could
/// park forever once production ends. Polling `try_pop` for a known item
/// count sidesteps that; it also shows backpressure on the producer side
/// (capacity 5, twenty items).
fn demo_single_signal_polling() {
    println!("--- Demo 4: Single-Signal Variant (try_pop polling) ---");

    const ITEMS: u64 = 20;

    let queue = Arc::new(SimpleQueue::new(5));

    let producer = {
        let queue = Arc::clone(&queue);
        thread::spawn(move || {
            for i in 0..ITEMS {
                queue.push(i); // parks whenever all 5 slots are taken
            }
        })
    };

    let mut received = 0u64;
    let mut polls = 0u64;
    while received < ITEMS {
        polls += 1;
        match queue.try_pop() {
            Some(_) => received += 1,
            None => thread::sleep(Duration::from_millis(5)),
        }
    }

    producer.join().expect("producer panicked");
    println!("  Received {} items in {} polls through a 5-slot buffer", received, polls);
    println!("  ✓ Single-signal variant demo complete\n");
}
