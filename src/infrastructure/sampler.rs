//! Periodic Sampler
//!
//! Drives [`ApacheMonitor::gather_sample`] on a fixed interval until
//! shutdown. Cycles run one at a time; a slow cycle delays the next tick
//! instead of queueing extra ones.

use crate::application::ApacheMonitor;
use crate::infrastructure::shutdown::ShutdownController;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Counters over the lifetime of a sampling loop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SamplerStats {
    /// Cycles run
    pub cycles: u64,
    /// Samples emitted across all cycles
    pub samples: u64,
    /// Cycles that reported at least one error
    pub failed_cycles: u64,
}

/// Runs monitor cycles on an interval.
pub struct Sampler {
    monitor: Arc<ApacheMonitor>,
    interval: Duration,
}

impl Sampler {
    pub fn new(monitor: Arc<ApacheMonitor>, interval: Duration) -> Self {
        Self { monitor, interval }
    }

    /// Run cycles until `shutdown` fires. The first cycle runs immediately.
    pub async fn run(&self, shutdown: ShutdownController) -> SamplerStats {
        let mut stats = SamplerStats::default();
        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = shutdown.wait() => break,
                _ = interval.tick() => {
                    let report = self.monitor.gather_sample().await;

                    stats.cycles += 1;
                    stats.samples += report.emitted as u64;
                    if !report.is_clean() {
                        stats.failed_cycles += 1;
                    }

                    tracing::debug!(
                        "cycle {} finished: {} samples, {} errors",
                        stats.cycles,
                        report.emitted,
                        report.errors.len()
                    );
                }
            }
        }

        tracing::info!(
            "sampler stopped after {} cycles ({} failed)",
            stats.cycles,
            stats.failed_cycles
        );
        stats
    }

    /// Spawn the loop on the runtime.
    #[cfg_attr(coverage_nightly, coverage(off))]
    pub fn start(self, shutdown: ShutdownController) -> JoinHandle<SamplerStats> {
        tokio::spawn(async move { self.run(shutdown).await })
    }
}
