//! Monitor Service - Main application use case
//!
//! One poll cycle: fetch the status page, parse it, emit samples.
//! This is the entry point the host (or the standalone runner) calls.

use crate::adapters::outbound::HttpStatusSource;
use crate::config::MonitorConfig;
use crate::domain::entities::StatusRecord;
use crate::domain::error::{ConfigError, MonitorError};
use crate::domain::ports::{SampleSink, StatusSource};
use crate::domain::services::{EmitReport, SampleEmitter, StatusParser};
use std::sync::Arc;

/// Apache `mod_status` monitor.
///
/// Holds only read-only configuration; every call to
/// [`gather_sample`](Self::gather_sample) is an independent cycle:
/// 1. Fetches the status page (one attempt, bounded by timeouts)
/// 2. Parses the known fields
/// 3. Emits mapped samples to the sink
///
/// Every failure ends as one message on the sink. Nothing is returned as
/// an error to the caller.
pub struct ApacheMonitor {
    source: Arc<dyn StatusSource>,
    sink: Arc<dyn SampleSink>,
    instance: Option<String>,
}

impl ApacheMonitor {
    /// Create a monitor from explicit parts.
    pub fn new(
        source: Arc<dyn StatusSource>,
        sink: Arc<dyn SampleSink>,
        instance: Option<String>,
    ) -> Self {
        Self {
            source,
            sink,
            instance,
        }
    }

    /// Create a monitor that fetches over HTTP as configured.
    pub fn from_config(cfg: &MonitorConfig, sink: Arc<dyn SampleSink>) -> Result<Self, ConfigError> {
        cfg.validate()?;

        let source = HttpStatusSource::new(cfg.status_url.clone())
            .source_address(cfg.source_ip()?)
            .connect_timeout(cfg.connect_timeout())
            .timeout(cfg.request_timeout());

        Ok(Self::new(Arc::new(source), sink, cfg.id.clone()))
    }

    pub fn instance(&self) -> Option<&str> {
        self.instance.as_deref()
    }

    /// Fetch and parse the status page.
    ///
    /// Returns `None` after logging the failure to the sink.
    pub async fn get_status(&self) -> Option<StatusRecord> {
        match self.fetch_record().await {
            Ok(record) => Some(record),
            Err(e) => {
                self.report_failure(&e);
                None
            }
        }
    }

    /// Run one poll cycle.
    pub async fn gather_sample(&self) -> EmitReport {
        match self.fetch_record().await {
            Ok(record) => {
                tracing::debug!("parsed {} status fields", record.len());
                SampleEmitter::emit(&record, self.instance(), self.sink.as_ref())
            }
            Err(e) => {
                self.report_failure(&e);
                EmitReport {
                    emitted: 0,
                    errors: vec![e],
                }
            }
        }
    }

    async fn fetch_record(&self) -> Result<StatusRecord, MonitorError> {
        let body = self.source.fetch().await?;
        Ok(StatusParser::parse(&body))
    }

    fn report_failure(&self, e: &MonitorError) {
        tracing::debug!(
            "status fetch from {} failed ({}): {}",
            self.source.describe(),
            e.kind(),
            e
        );
        self.sink.log_error(&e.to_string());
    }
}
