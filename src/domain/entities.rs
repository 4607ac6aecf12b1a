//! Domain Entities - Core business objects
//!
//! The per-cycle data the monitor works with. Nothing here outlives a
//! single poll.

use crate::domain::value_objects::{ApacheMetric, StatusField};
use serde::Serialize;
use std::collections::BTreeMap;

/// Values read from one fetch of the status page.
///
/// Values stay as the raw strings printed by the server; conversion to
/// numbers happens at emission time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusRecord {
    fields: BTreeMap<StatusField, String>,
}

impl StatusRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, replacing any earlier value for the same field.
    pub fn insert(&mut self, field: StatusField, value: impl Into<String>) {
        self.fields.insert(field, value.into());
    }

    pub fn get(&self, field: StatusField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// Look a value up by storage key (e.g. `busy_workers`).
    pub fn get_by_key(&self, key: &str) -> Option<&str> {
        StatusField::from_key(key).and_then(|f| self.get(f))
    }

    pub fn contains(&self, field: StatusField) -> bool {
        self.fields.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatusField, &str)> {
        self.fields.iter().map(|(f, v)| (*f, v.as_str()))
    }
}

impl<S: Into<String>> FromIterator<(StatusField, S)> for StatusRecord {
    fn from_iter<I: IntoIterator<Item = (StatusField, S)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (field, value) in iter {
            record.insert(field, value);
        }
        record
    }
}

/// A single metric value handed to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sample {
    pub metric: ApacheMetric,
    pub value: i64,
    /// Instance label from the monitor `id`, when configured
    pub instance: Option<String>,
}

impl Sample {
    pub fn new(metric: ApacheMetric, value: i64, instance: Option<String>) -> Self {
        Self {
            metric,
            value,
            instance,
        }
    }

    pub fn metric_name(&self) -> &'static str {
        self.metric.name()
    }
}
