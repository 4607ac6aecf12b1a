//! Sample Sink Port
//!
//! The host's logging/metrics interface as seen by the monitor.

use crate::domain::entities::Sample;

/// Receiver for emitted samples and cycle errors.
///
/// Implemented by the host (or by the adapters in this crate). Calls must
/// not fail: the sink owns whatever happens to the data next.
pub trait SampleSink: Send + Sync {
    /// Emit one metric value.
    fn emit_value(&self, sample: &Sample);

    /// Report a cycle error as a single descriptive message.
    fn log_error(&self, message: &str);
}
