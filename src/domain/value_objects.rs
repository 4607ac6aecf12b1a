//! Value Objects - Immutable domain primitives
//!
//! The fixed vocabulary of the monitor: the status page labels it
//! understands and the metric names it emits.

use serde::{Deserialize, Serialize};

/// A field recognised on the machine-readable (`?auto`) status page.
///
/// Each variant pairs the literal label printed by `mod_status` with the
/// key it is stored under in a [`StatusRecord`](crate::domain::entities::StatusRecord).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusField {
    TotalAccesses,
    TotalKbytesSent,
    Uptime,
    RequestPerSec,
    BytesPerSec,
    BytesPerReq,
    BusyWorkers,
    IdleWorkers,
    ConnectionsTotal,
    AsyncConnectionsWriting,
    AsyncConnectionsKeepAlive,
    AsyncConnectionsClosing,
}

impl StatusField {
    /// Every known field, in page order.
    pub const ALL: [StatusField; 12] = [
        Self::TotalAccesses,
        Self::TotalKbytesSent,
        Self::Uptime,
        Self::RequestPerSec,
        Self::BytesPerSec,
        Self::BytesPerReq,
        Self::BusyWorkers,
        Self::IdleWorkers,
        Self::ConnectionsTotal,
        Self::AsyncConnectionsWriting,
        Self::AsyncConnectionsKeepAlive,
        Self::AsyncConnectionsClosing,
    ];

    /// Literal line prefix on the status page (case-sensitive).
    pub fn label(&self) -> &'static str {
        match self {
            Self::TotalAccesses => "Total Accesses:",
            Self::TotalKbytesSent => "Total kBytes:",
            Self::Uptime => "Uptime:",
            Self::RequestPerSec => "ReqPerSec:",
            Self::BytesPerSec => "BytesPerSec:",
            Self::BytesPerReq => "BytesPerReq:",
            Self::BusyWorkers => "BusyWorkers:",
            Self::IdleWorkers => "IdleWorkers:",
            Self::ConnectionsTotal => "ConnsTotal:",
            Self::AsyncConnectionsWriting => "ConnsAsyncWriting:",
            Self::AsyncConnectionsKeepAlive => "ConnsAsyncKeepAlive:",
            Self::AsyncConnectionsClosing => "ConnsAsyncClosing:",
        }
    }

    /// Key the parsed value is stored under.
    pub fn key(&self) -> &'static str {
        match self {
            Self::TotalAccesses => "total_accesses",
            Self::TotalKbytesSent => "total_kbytes_sent",
            Self::Uptime => "uptime",
            Self::RequestPerSec => "request_per_sec",
            Self::BytesPerSec => "bytes_per_sec",
            Self::BytesPerReq => "bytes_per_req",
            Self::BusyWorkers => "busy_workers",
            Self::IdleWorkers => "idle_workers",
            Self::ConnectionsTotal => "connections_total",
            Self::AsyncConnectionsWriting => "async_connections_writing",
            Self::AsyncConnectionsKeepAlive => "async_connections_keep_alive",
            Self::AsyncConnectionsClosing => "async_connections_closing",
        }
    }

    /// Look a field up by its storage key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Match a status line against this field's label.
    ///
    /// Returns the remainder of the line after the label when it matches.
    pub fn strip_label<'a>(&self, line: &'a str) -> Option<&'a str> {
        line.strip_prefix(self.label())
    }
}

impl std::fmt::Display for StatusField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A metric emitted to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApacheMetric {
    WorkersActive,
    WorkersIdle,
    ConnectionsActive,
    ConnectionsWriting,
    ConnectionsIdle,
    ConnectionsClosing,
}

impl ApacheMetric {
    /// Every emitted metric, in emission order.
    pub const ALL: [ApacheMetric; 6] = [
        Self::WorkersActive,
        Self::WorkersIdle,
        Self::ConnectionsActive,
        Self::ConnectionsWriting,
        Self::ConnectionsIdle,
        Self::ConnectionsClosing,
    ];

    /// Metric name as seen by the host.
    pub fn name(&self) -> &'static str {
        match self {
            Self::WorkersActive => "apache.workers.active",
            Self::WorkersIdle => "apache.workers.idle",
            Self::ConnectionsActive => "apache.connections.active",
            Self::ConnectionsWriting => "apache.connections.writing",
            Self::ConnectionsIdle => "apache.connections.idle",
            Self::ConnectionsClosing => "apache.connections.closing",
        }
    }

    /// Status page field this metric is read from.
    pub fn source_field(&self) -> StatusField {
        match self {
            Self::WorkersActive => StatusField::BusyWorkers,
            Self::WorkersIdle => StatusField::IdleWorkers,
            Self::ConnectionsActive => StatusField::ConnectionsTotal,
            Self::ConnectionsWriting => StatusField::AsyncConnectionsWriting,
            Self::ConnectionsIdle => StatusField::AsyncConnectionsKeepAlive,
            Self::ConnectionsClosing => StatusField::AsyncConnectionsClosing,
        }
    }

    /// Human-readable description for metric catalogs.
    pub fn description(&self) -> &'static str {
        match self {
            Self::WorkersActive => {
                "How many workers are currently active. Each worker is a process handling an incoming request."
            }
            Self::WorkersIdle => {
                "How many of the workers are currently idle. Each worker is a process that can handle an incoming request."
            }
            Self::ConnectionsActive => {
                "The number of connections that are being handled asynchronously (not using workers) currently open on the server."
            }
            Self::ConnectionsWriting => {
                "The number of connections that are being handled asynchronously (not using workers) that are currently writing response data."
            }
            Self::ConnectionsIdle => {
                "The number of connections that are being handled asynchronously (not using workers) that are currently idle / sending keepalives."
            }
            Self::ConnectionsClosing => {
                "The number of connections that are being handled asynchronously (not using workers) that are currently closing."
            }
        }
    }

    /// Find the metric emitted for a status field, if any.
    pub fn for_field(field: StatusField) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.source_field() == field)
    }
}

impl std::fmt::Display for ApacheMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_field_labels_are_unique() {
        let labels: HashSet<_> = StatusField::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels.len(), StatusField::ALL.len());
    }

    #[test]
    fn test_field_from_key() {
        for field in StatusField::ALL {
            assert_eq!(StatusField::from_key(field.key()), Some(field));
        }
        assert_eq!(StatusField::from_key("scoreboard"), None);
    }

    #[test]
    fn test_strip_label() {
        let field = StatusField::BusyWorkers;
        assert_eq!(field.strip_label("BusyWorkers: 5"), Some(" 5"));
        assert_eq!(field.strip_label("busyworkers: 5"), None);
        assert_eq!(field.strip_label("IdleWorkers: 5"), None);
    }

    #[test]
    fn test_metric_mapping() {
        let tests = vec![
            (StatusField::BusyWorkers, "apache.workers.active"),
            (StatusField::IdleWorkers, "apache.workers.idle"),
            (StatusField::ConnectionsTotal, "apache.connections.active"),
            (StatusField::AsyncConnectionsWriting, "apache.connections.writing"),
            (StatusField::AsyncConnectionsKeepAlive, "apache.connections.idle"),
            (StatusField::AsyncConnectionsClosing, "apache.connections.closing"),
        ];

        for (field, name) in tests {
            let metric = ApacheMetric::for_field(field).unwrap();
            assert_eq!(metric.name(), name);
            assert_eq!(metric.source_field(), field);
        }
    }

    #[test]
    fn test_metric_descriptions() {
        let descriptions: HashSet<_> = ApacheMetric::ALL.iter().map(|m| m.description()).collect();

        assert_eq!(descriptions.len(), ApacheMetric::ALL.len());
        assert!(descriptions.iter().all(|d| !d.trim().is_empty()));
    }

    #[test]
    fn test_unmapped_fields() {
        assert_eq!(ApacheMetric::for_field(StatusField::TotalAccesses), None);
        assert_eq!(ApacheMetric::for_field(StatusField::Uptime), None);
        assert_eq!(ApacheMetric::for_field(StatusField::BytesPerReq), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(StatusField::IdleWorkers.to_string(), "idle_workers");
        assert_eq!(ApacheMetric::ConnectionsIdle.to_string(), "apache.connections.idle");
    }

    #[test]
    fn test_serde_key_names() {
        let json = serde_json::to_string(&StatusField::AsyncConnectionsKeepAlive).unwrap();
        assert_eq!(json, "\"async_connections_keep_alive\"");
    }
}
