//! HTTP Status Source
//!
//! Implements StatusSource with a reqwest client that can bind its
//! outbound connections to a fixed local address.

use crate::domain::error::{ConfigError, FetchError, MonitorError};
use crate::domain::ports::StatusSource;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::net::IpAddr;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("apache-monitor/", env!("CARGO_PKG_VERSION"));

/// Fetches the `mod_status` page over HTTP.
///
/// Many servers only serve the status page to localhost, so the local
/// end of the connection can be pinned with [`source_address`](Self::source_address).
/// A fresh client is built for every fetch; nothing is shared between cycles.
#[derive(Debug, Clone)]
pub struct HttpStatusSource {
    url: String,
    source_address: Option<IpAddr>,
    connect_timeout: Duration,
    timeout: Duration,
}

impl HttpStatusSource {
    /// Create a source for `url` with default timeouts and no source binding.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            source_address: None,
            connect_timeout: Duration::from_secs(5),
            timeout: Duration::from_secs(10),
        }
    }

    /// Bind outbound connections to this local address.
    pub fn source_address(mut self, addr: Option<IpAddr>) -> Self {
        self.source_address = addr;
        self
    }

    /// Deadline for establishing the TCP connection.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Deadline for the whole request, body included.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Parse and check the configured URL.
    pub fn validate_url(raw: &str) -> Result<Url, ConfigError> {
        let url = Url::parse(raw).map_err(|_| ConfigError::InvalidUrl {
            url: raw.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ConfigError::UnsupportedScheme {
                    url: raw.to_string(),
                    scheme: other.to_string(),
                })
            }
        }

        if url.host_str().is_none() {
            return Err(ConfigError::InvalidUrl {
                url: raw.to_string(),
            });
        }

        Ok(url)
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .local_address(self.source_address)
            .connect_timeout(self.connect_timeout)
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .no_proxy()
            .build()
            .map_err(|e| FetchError::OtherNetwork {
                reason: format!("failed to build HTTP client: {}", e),
            })
    }

    /// `host:port` of the URL, for error messages.
    fn address_of(url: &Url) -> String {
        let host = url.host_str().unwrap_or_default();
        match url.port_or_known_default() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        }
    }

    /// Map a non-success HTTP status to a fetch error.
    pub(crate) fn classify_status(status: StatusCode) -> FetchError {
        match status.as_u16() {
            404 => FetchError::NotFound,
            403 => FetchError::Forbidden,
            code @ 500..=599 => FetchError::ServerError { status: code },
            code => FetchError::OtherHttp { status: code },
        }
    }

    /// Map a transport failure to a fetch error.
    fn classify_transport(err: &reqwest::Error, address: &str) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout {
                address: address.to_string(),
            }
        } else if Self::is_connection_refused(err) {
            FetchError::ConnectionRefused {
                address: address.to_string(),
            }
        } else {
            FetchError::OtherNetwork {
                reason: err.to_string(),
            }
        }
    }

    fn is_connection_refused(err: &reqwest::Error) -> bool {
        let mut source: Option<&(dyn std::error::Error + 'static)> = Some(err);
        while let Some(e) = source {
            if let Some(io) = e.downcast_ref::<std::io::Error>() {
                if io.kind() == std::io::ErrorKind::ConnectionRefused {
                    return true;
                }
            }
            source = e.source();
        }
        false
    }
}

#[async_trait]
impl StatusSource for HttpStatusSource {
    async fn fetch(&self) -> Result<String, MonitorError> {
        let url = Self::validate_url(&self.url)?;
        let address = Self::address_of(&url);
        let client = self.build_client()?;

        tracing::debug!(
            "fetching status page {} (source address: {:?})",
            url,
            self.source_address
        );

        let resp = client
            .get(url)
            .send()
            .await
            .map_err(|e| Self::classify_transport(&e, &address))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Self::classify_status(status).into());
        }

        let body = resp
            .text()
            .await
            .map_err(|e| Self::classify_transport(&e, &address))?;

        Ok(body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
