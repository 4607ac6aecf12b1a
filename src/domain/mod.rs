//! Domain Layer
//!
//! Status page vocabulary, per-cycle entities, ports and pure services.
//! Nothing in here performs I/O.

pub mod entities;
pub mod error;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{Sample, StatusRecord};
pub use error::{ConfigError, FetchError, MonitorError};
pub use value_objects::{ApacheMetric, StatusField};
