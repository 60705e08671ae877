//! Tick metrics and logging setup.
//!
//! Provides structured logging and periodic health summaries of a running
//! network.

use crate::network::Network;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Health of a network right after a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub tick: u64,
    pub recovering: usize,
    pub mean_output: f64,
    pub min_weight: f64,
    pub max_weight: f64,
}

impl TickReport {
    #[must_use]
    pub fn capture(network: &Network) -> Self {
        let outputs = network.outputs();
        let mean_output = if outputs.is_empty() {
            0.0
        } else {
            outputs.iter().sum::<f64>() / outputs.len() as f64
        };
        let (min_weight, max_weight) = network.weight_bounds();

        Self {
            tick: network.tick(),
            recovering: network.recovering_count(),
            mean_output,
            min_weight,
            max_weight,
        }
    }
}

/// Metrics collector for one simulation run.
pub struct Metrics {
    tick_count: u64,
    log_interval: u64,
    peak_recovering: usize,
    last: Option<TickReport>,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl Metrics {
    /// `log_interval` of 0 disables periodic logging.
    #[must_use]
    pub fn new(log_interval: u64) -> Self {
        Self {
            tick_count: 0,
            log_interval,
            peak_recovering: 0,
            last: None,
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its duration.
    pub fn record_tick(&mut self, network: &Network, duration: Duration) -> TickReport {
        self.tick_count += 1;
        let report = TickReport::capture(network);
        self.peak_recovering = self.peak_recovering.max(report.recovering);
        self.last = Some(report);

        if self.log_interval > 0 && self.tick_count % self.log_interval == 0 {
            tracing::info!(
                tick = report.tick,
                recovering = report.recovering,
                mean_output = report.mean_output,
                min_weight = report.min_weight,
                max_weight = report.max_weight,
                duration_us = duration.as_micros() as u64,
                "Network tick"
            );
        }

        report
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Most recovering neurons seen in a single tick.
    #[must_use]
    pub fn peak_recovering(&self) -> usize {
        self.peak_recovering
    }

    #[must_use]
    pub fn last_report(&self) -> Option<TickReport> {
        self.last
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging.
///
/// `RUST_LOG` wins over `default_level`. Safe to call more than once.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .ok();
}
