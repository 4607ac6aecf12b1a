//! Sample Emitter Service
//!
//! Turns a parsed [`StatusRecord`] into metric samples on a [`SampleSink`].

use crate::domain::entities::{Sample, StatusRecord};
use crate::domain::error::MonitorError;
use crate::domain::ports::SampleSink;
use crate::domain::value_objects::ApacheMetric;

/// Outcome of one emission pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitReport {
    /// Number of samples handed to the sink
    pub emitted: usize,
    /// Errors reported to the sink, in order
    pub errors: Vec<MonitorError>,
}

impl EmitReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Emitter mapping status fields to [`ApacheMetric`]s.
pub struct SampleEmitter;

impl SampleEmitter {
    /// Emit every mapped field present in `record`.
    ///
    /// Absent fields are skipped. A value that does not parse as an
    /// integer is reported and not counted. If no mapped field was present
    /// at all, a single [`MonitorError::Format`] is reported.
    pub fn emit(record: &StatusRecord, instance: Option<&str>, sink: &dyn SampleSink) -> EmitReport {
        let mut report = EmitReport::default();
        let mut present = 0;

        for metric in ApacheMetric::ALL {
            let field = metric.source_field();
            let Some(raw) = record.get(field) else {
                continue;
            };
            present += 1;

            match raw.parse::<i64>() {
                Ok(value) => {
                    sink.emit_value(&Sample::new(metric, value, instance.map(str::to_string)));
                    report.emitted += 1;
                }
                Err(_) => {
                    let err = MonitorError::InvalidValue {
                        field,
                        value: raw.to_string(),
                    };
                    sink.log_error(&err.to_string());
                    report.errors.push(err);
                }
            }
        }

        if present == 0 {
            let err = MonitorError::Format;
            sink.log_error(&err.to_string());
            report.errors.push(err);
        }

        report
    }
}
