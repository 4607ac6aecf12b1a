use crate::domain::error::ConfigError;
use serde::Deserialize;
use std::net::IpAddr;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_MODULE: &str = "apache_monitor";
pub const DEFAULT_STATUS_URL: &str = "http://localhost/server-status/?auto";
pub const DEFAULT_SOURCE_ADDRESS: &str = "127.0.0.1";

/// One monitor instance, as configured by the host.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Identifies this plugin in the host configuration
    pub module: String,
    /// Instance label attached to every sample
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default = "default_status_url")]
    pub status_url: String,
    /// Local IP outbound requests are bound to; empty disables binding
    #[serde(default = "default_source_address")]
    pub source_address: String,
    #[serde(default = "default_sample_interval_secs")]
    pub sample_interval_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub debug: bool,
}

fn default_status_url() -> String {
    DEFAULT_STATUS_URL.to_string()
}

fn default_source_address() -> String {
    DEFAULT_SOURCE_ADDRESS.to_string()
}

fn default_sample_interval_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    5
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            module: DEFAULT_MODULE.to_string(),
            id: None,
            status_url: default_status_url(),
            source_address: default_source_address(),
            sample_interval_secs: default_sample_interval_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            debug: false,
        }
    }
}

impl MonitorConfig {
    /// Parse a host monitor record, e.g.
    /// `{"module": "apache_monitor", "status_url": "http://localhost:80/server-status/?auto"}`.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read a host monitor record from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path.display(), e))?;
        Ok(Self::from_json(&raw)?)
    }

    /// Validate the configuration.
    ///
    /// The status URL is not checked here; it is validated on every fetch.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.module.trim().is_empty() {
            return Err(ConfigError::MissingModule);
        }
        self.source_ip()?;
        Ok(())
    }

    /// Parsed source address, or `None` when binding is disabled.
    pub fn source_ip(&self) -> Result<Option<IpAddr>, ConfigError> {
        let raw = self.source_address.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidSourceAddress(self.source_address.clone()))
    }

    pub fn sample_interval(&self) -> Duration {
        Duration::from_secs(self.sample_interval_secs.max(1))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs.max(1))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

/// Load configuration from the environment.
///
/// `APACHE_MONITOR_CONFIG` names a JSON monitor record; otherwise the
/// individual `APACHE_MONITOR_*` variables are read.
pub fn load_config() -> anyhow::Result<MonitorConfig> {
    load_config_from(|key| std::env::var(key).ok())
}

pub(crate) fn load_config_from<F>(var: F) -> anyhow::Result<MonitorConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let debug = var("DEBUG").is_some();

    if let Some(path) = var("APACHE_MONITOR_CONFIG") {
        let mut cfg = MonitorConfig::from_file(&path)?;
        cfg.debug = cfg.debug || debug;
        return Ok(cfg);
    }

    let module = var("APACHE_MONITOR_MODULE").unwrap_or_else(|| DEFAULT_MODULE.to_string());

    let id = var("APACHE_MONITOR_ID").filter(|v| !v.is_empty());

    let status_url =
        var("APACHE_MONITOR_STATUS_URL").unwrap_or_else(|| DEFAULT_STATUS_URL.to_string());

    let source_address = var("APACHE_MONITOR_SOURCE_ADDRESS")
        .unwrap_or_else(|| DEFAULT_SOURCE_ADDRESS.to_string());

    let sample_interval_secs = var("APACHE_MONITOR_SAMPLE_INTERVAL_SECS")
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(default_sample_interval_secs);

    let connect_timeout_secs = var("APACHE_MONITOR_CONNECT_TIMEOUT_SECS")
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(default_connect_timeout_secs);

    let request_timeout_secs = var("APACHE_MONITOR_REQUEST_TIMEOUT_SECS")
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(default_request_timeout_secs);

    let cfg = MonitorConfig {
        module,
        id,
        status_url,
        source_address,
        sample_interval_secs,
        connect_timeout_secs,
        request_timeout_secs,
        debug,
    };
    cfg.validate()?;

    Ok(cfg)
}
