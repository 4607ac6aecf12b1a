//! Monitor Errors
//!
//! Every failure a poll cycle can hit. Each variant renders as a single
//! message that tells the operator what to check.

use crate::domain::value_objects::StatusField;

/// Configuration problems. Fatal to the cycle, never to the host.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "The URL configured for requesting the status page appears to be invalid. \
         Please verify that the URL is correct in your monitor configuration. \
         The specified url: {url}"
    )]
    InvalidUrl { url: String },

    #[error(
        "The URL configured for requesting the status page must use http or https, got '{scheme}'. \
         The specified url: {url}"
    )]
    UnsupportedScheme { url: String, scheme: String },

    #[error("The configured source_address '{0}' is not a valid IP address.")]
    InvalidSourceAddress(String),

    #[error("module is required")]
    MissingModule,

    #[error("invalid monitor configuration: {0}")]
    Parse(String),
}

/// Classified failures of a status page fetch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error(
        "The URL used to request the status page appears to be incorrect. \
         Please verify the correct URL and update your apache_monitor configuration."
    )]
    NotFound,

    #[error(
        "The server is denying access to the URL specified for requesting the status page. \
         Please verify that permissions to access the status page are correctly configured in your \
         server configuration and that your apache_monitor configuration reflects the same \
         configuration requirements."
    )]
    Forbidden,

    #[error(
        "The server failed to fulfill the request to get the status page. \
         Please consult your server logs to determine the cause. HTTP error code: {status}"
    )]
    ServerError { status: u16 },

    #[error(
        "An HTTP error occurred attempting to retrieve the status. \
         Please consult your server logs to determine the cause. HTTP error code: {status}"
    )]
    OtherHttp { status: u16 },

    #[error(
        "The HTTP server does not appear to be running or cannot be reached. \
         Please check that it is running and is reachable at the address: {address}"
    )]
    ConnectionRefused { address: String },

    #[error(
        "Timed out waiting for the status page from {address}. \
         Make sure the server is running and not overloaded."
    )]
    Timeout { address: String },

    #[error(
        "There was an error attempting to reach the server. \
         Make sure the server is running and properly configured. The error reported is: {reason}"
    )]
    OtherNetwork { reason: String },
}

/// Top-level error for one poll cycle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MonitorError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(
        "Status page did not match expected format. \
         Check to make sure you included the \"?auto\" option in the status url"
    )]
    Format,

    #[error("Status page field {field} has non-integer value '{value}'")]
    InvalidValue { field: StatusField, value: String },
}

impl MonitorError {
    /// Short category name, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Fetch(_) => "fetch",
            Self::Format => "format",
            Self::InvalidValue { .. } => "invalid_value",
        }
    }
}
