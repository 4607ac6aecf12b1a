//! Recording Sample Sink
//!
//! Implements SampleSink by keeping everything in memory.
//! Used by tests and by hosts that collect samples themselves.

use crate::domain::entities::Sample;
use crate::domain::ports::SampleSink;
use parking_lot::Mutex;

/// In-memory sink that records samples and error messages in order.
#[derive(Debug, Default)]
pub struct RecordingSampleSink {
    samples: Mutex<Vec<Sample>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingSampleSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All samples emitted so far.
    pub fn samples(&self) -> Vec<Sample> {
        self.samples.lock().clone()
    }

    /// `(metric name, value)` pairs, in emission order.
    pub fn values(&self) -> Vec<(String, i64)> {
        self.samples
            .lock()
            .iter()
            .map(|s| (s.metric_name().to_string(), s.value))
            .collect()
    }

    /// All error messages logged so far.
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().clone()
    }

    /// Drain recorded samples and errors.
    pub fn take(&self) -> (Vec<Sample>, Vec<String>) {
        (
            std::mem::take(&mut *self.samples.lock()),
            std::mem::take(&mut *self.errors.lock()),
        )
    }
}

impl SampleSink for RecordingSampleSink {
    fn emit_value(&self, sample: &Sample) {
        self.samples.lock().push(sample.clone());
    }

    fn log_error(&self, message: &str) {
        self.errors.lock().push(message.to_string());
    }
}
