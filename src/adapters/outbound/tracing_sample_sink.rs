//! Tracing Sample Sink
//!
//! Implements SampleSink by writing structured tracing events, one per
//! sample. This is the sink the standalone runner uses.

use crate::domain::entities::Sample;
use crate::domain::ports::SampleSink;
use crate::domain::value_objects::ApacheMetric;

/// Name recorded in the `monitor` field of every event.
pub const MONITOR_NAME: &str = "apache_monitor";

/// Sink that logs samples as `info` events and errors as `error` events.
#[derive(Debug, Clone, Default)]
pub struct TracingSampleSink;

impl TracingSampleSink {
    pub fn new() -> Self {
        Self
    }

    /// Log the catalog of emitted metrics, one debug event each.
    pub fn log_catalog(&self) {
        for metric in ApacheMetric::ALL {
            tracing::debug!(
                monitor = MONITOR_NAME,
                metric = metric.name(),
                source = metric.source_field().key(),
                "{}",
                metric.description()
            );
        }
    }
}

impl SampleSink for TracingSampleSink {
    fn emit_value(&self, sample: &Sample) {
        match &sample.instance {
            Some(instance) => tracing::info!(
                monitor = MONITOR_NAME,
                metric = sample.metric_name(),
                value = sample.value,
                instance = %instance
            ),
            None => tracing::info!(
                monitor = MONITOR_NAME,
                metric = sample.metric_name(),
                value = sample.value
            ),
        }
    }

    fn log_error(&self, message: &str) {
        tracing::error!(monitor = MONITOR_NAME, "{}", message);
    }
}
