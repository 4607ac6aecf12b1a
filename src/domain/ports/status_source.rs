//! Status Source Port
//!
//! Defines how the monitor obtains the raw status page.

use crate::domain::error::MonitorError;
use async_trait::async_trait;

/// Source of the raw `mod_status` page body.
///
/// This is an outbound port. One call is one attempt: implementations
/// must not retry, and must bound the call with their own timeouts.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch the page body, or a classified failure.
    async fn fetch(&self) -> Result<String, MonitorError>;

    /// Where the page is fetched from, for log context.
    fn describe(&self) -> String;
}
