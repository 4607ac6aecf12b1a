//! Application Layer
//!
//! Use cases wiring the domain services to the ports.

pub mod monitor_service;

pub use monitor_service::ApacheMonitor;
