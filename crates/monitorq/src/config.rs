/// Configuration for [`BoundedQueue`](crate::BoundedQueue).
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Maximum number of buffered items (default: 10)
    pub capacity: usize,
    /// Enable metrics collection (slight overhead)
    pub enable_metrics: bool,
}

impl Config {
    /// Creates a new configuration with custom settings.
    pub const fn new(capacity: usize, enable_metrics: bool) -> Self {
        Self {
            capacity,
            enable_metrics,
        }
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Enables or disables metrics collection.
    pub fn with_metrics(mut self, enable: bool) -> Self {
        self.enable_metrics = enable;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 10,
            enable_metrics: false,
        }
    }
}

/// Demo configuration: the 10-slot buffer the worked examples use.
pub const DEMO_CONFIG: Config = Config::new(10, false);

/// Deep-buffer configuration for throughput-oriented pipelines.
pub const DEEP_BUFFER_CONFIG: Config = Config::new(1024, false);
