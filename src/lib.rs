//! apache-monitor Library
//!
//! Polls the machine-readable `mod_status` page of an Apache HTTP server
//! and emits worker and connection metrics to a host-provided sink.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use adapters::outbound::{HttpStatusSource, RecordingSampleSink, TracingSampleSink};
pub use application::ApacheMonitor;
pub use config::{load_config, MonitorConfig};
pub use domain::entities::{Sample, StatusRecord};
pub use domain::error::{ConfigError, FetchError, MonitorError};
pub use domain::ports::{SampleSink, StatusSource};
pub use domain::services::{EmitReport, SampleEmitter, StatusParser};
pub use domain::value_objects::{ApacheMetric, StatusField};
