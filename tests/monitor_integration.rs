//! End-to-end tests for poll cycles against a mock Apache server

use apache_monitor::{
    ApacheMonitor, ConfigError, FetchError, MonitorConfig, MonitorError, RecordingSampleSink,
};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const STATUS_PAGE: &str = "

Total Accesses: 1432
Total kBytes: 8842
Uptime: 7265
BusyWorkers: 2
IdleWorkers: 48
ConnsTotal: 4
ConnsAsyncWriting: 1
ConnsAsyncKeepAlive: 2
ConnsAsyncClosing: 1
";

const HTML_PAGE: &str = "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 3.2 Final//EN\">
<html><head>
<title>Apache Status</title>
</head><body>
<h1>Apache Server Status for localhost</h1>
</body></html>
";

async fn apache_server(template: ResponseTemplate) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/server-status/"))
        .respond_with(template)
        .mount(&mock_server)
        .await;

    mock_server
}

fn config_for(mock_server: &MockServer, id: Option<&str>) -> MonitorConfig {
    MonitorConfig {
        id: id.map(str::to_string),
        status_url: format!("{}/server-status/?auto", mock_server.uri()),
        connect_timeout_secs: 1,
        request_timeout_secs: 2,
        ..Default::default()
    }
}

fn monitor_for(cfg: &MonitorConfig) -> (ApacheMonitor, Arc<RecordingSampleSink>) {
    let sink = Arc::new(RecordingSampleSink::new());
    let monitor = ApacheMonitor::from_config(cfg, sink.clone()).unwrap();
    (monitor, sink)
}

/// Test a full cycle emits every mapped metric
#[tokio::test]
async fn test_cycle_emits_all_metrics() {
    let mock_server = apache_server(ResponseTemplate::new(200).set_body_string(STATUS_PAGE)).await;
    let (monitor, sink) = monitor_for(&config_for(&mock_server, None));

    let report = monitor.gather_sample().await;

    assert_eq!(report.emitted, 6);
    assert!(report.is_clean());
    assert_eq!(
        sink.values(),
        vec![
            ("apache.workers.active".to_string(), 2),
            ("apache.workers.idle".to_string(), 48),
            ("apache.connections.active".to_string(), 4),
            ("apache.connections.writing".to_string(), 1),
            ("apache.connections.idle".to_string(), 2),
            ("apache.connections.closing".to_string(), 1),
        ]
    );
    assert!(sink.errors().is_empty());
}

/// Test the instance label is attached to every sample
#[tokio::test]
async fn test_cycle_attaches_instance() {
    let mock_server = apache_server(ResponseTemplate::new(200).set_body_string(STATUS_PAGE)).await;
    let (monitor, sink) = monitor_for(&config_for(&mock_server, Some("frontend")));

    monitor.gather_sample().await;

    let samples = sink.samples();
    assert_eq!(samples.len(), 6);
    assert!(samples
        .iter()
        .all(|s| s.instance.as_deref() == Some("frontend")));
}

/// Test the HTML variant of the page produces a single format error
#[tokio::test]
async fn test_cycle_html_page_is_format_error() {
    let mock_server = apache_server(ResponseTemplate::new(200).set_body_string(HTML_PAGE)).await;
    let (monitor, sink) = monitor_for(&config_for(&mock_server, None));

    let report = monitor.gather_sample().await;

    assert_eq!(report.emitted, 0);
    assert_eq!(report.errors, vec![MonitorError::Format]);
    assert!(sink.samples().is_empty());

    let errors = sink.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("?auto"));
}

/// Test an HTTP failure produces a single error and no samples
#[tokio::test]
async fn test_cycle_forbidden() {
    let mock_server = apache_server(ResponseTemplate::new(403)).await;
    let (monitor, sink) = monitor_for(&config_for(&mock_server, None));

    let report = monitor.gather_sample().await;

    assert_eq!(report.errors, vec![MonitorError::Fetch(FetchError::Forbidden)]);
    assert!(sink.samples().is_empty());
    assert_eq!(sink.errors(), vec![FetchError::Forbidden.to_string()]);
}

/// Test a malformed URL is a config error on every cycle
#[tokio::test]
async fn test_cycle_malformed_url() {
    let cfg = MonitorConfig {
        status_url: "http://[::1".to_string(),
        ..Default::default()
    };
    let (monitor, sink) = monitor_for(&cfg);

    for _ in 0..2 {
        let report = monitor.gather_sample().await;
        assert!(matches!(
            report.errors.as_slice(),
            [MonitorError::Config(ConfigError::InvalidUrl { .. })]
        ));
    }

    assert_eq!(sink.errors().len(), 2);
    assert!(sink.samples().is_empty());
}

/// Test a server that recovers is picked up on the next cycle
#[tokio::test]
async fn test_cycles_recover_after_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/server-status/"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/server-status/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(STATUS_PAGE))
        .mount(&mock_server)
        .await;

    let (monitor, sink) = monitor_for(&config_for(&mock_server, None));

    let first = monitor.gather_sample().await;
    assert_eq!(
        first.errors,
        vec![MonitorError::Fetch(FetchError::ServerError { status: 503 })]
    );

    let second = monitor.gather_sample().await;
    assert_eq!(second.emitted, 6);
    assert_eq!(sink.samples().len(), 6);
    assert_eq!(sink.errors().len(), 1);
}

/// Test several monitor instances polling concurrently
#[tokio::test]
async fn test_concurrent_instances() {
    let server1 = apache_server(ResponseTemplate::new(200).set_body_string("BusyWorkers: 1\n")).await;
    let server2 = apache_server(ResponseTemplate::new(200).set_body_string("BusyWorkers: 2\n")).await;
    let server3 = apache_server(ResponseTemplate::new(200).set_body_string("BusyWorkers: 3\n")).await;

    let sink = Arc::new(RecordingSampleSink::new());
    let monitors: Vec<ApacheMonitor> = [(&server1, "a"), (&server2, "b"), (&server3, "c")]
        .into_iter()
        .map(|(server, id)| {
            ApacheMonitor::from_config(&config_for(server, Some(id)), sink.clone()).unwrap()
        })
        .collect();

    let futures: Vec<_> = monitors.iter().map(|m| m.gather_sample()).collect();
    let reports = futures::future::join_all(futures).await;

    assert!(reports.iter().all(|r| r.emitted == 1));

    let mut seen: Vec<(String, i64)> = sink
        .samples()
        .into_iter()
        .map(|s| (s.instance.unwrap(), s.value))
        .collect();
    seen.sort();
    assert_eq!(
        seen,
        vec![
            ("a".to_string(), 1),
            ("b".to_string(), 2),
            ("c".to_string(), 3),
        ]
    );
}
