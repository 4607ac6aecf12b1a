//! Status Parser Service
//!
//! Pure domain logic for reading the machine-readable `mod_status` page.
//! This service has NO external dependencies - it's pure Rust.

use crate::domain::entities::StatusRecord;
use crate::domain::value_objects::StatusField;

/// Parser for the `?auto` status page.
///
/// The page is a list of `Label: value` lines. Only the labels in
/// [`StatusField::ALL`] are read; anything else is ignored.
pub struct StatusParser;

impl StatusParser {
    /// Parse a page body into a [`StatusRecord`].
    ///
    /// Leading blank lines are skipped. Each remaining line is matched
    /// case-sensitively against the known labels; on a match the line is
    /// split on whitespace and the second token becomes the value. For the
    /// two-word labels (`Total Accesses:`, `Total kBytes:`) that token is
    /// the tail of the label itself. A label seen twice keeps its last value.
    ///
    /// # Example
    /// ```
    /// use apache_monitor::domain::services::StatusParser;
    /// use apache_monitor::domain::value_objects::StatusField;
    ///
    /// let record = StatusParser::parse("\nBusyWorkers: 5\nIdleWorkers: 3\n");
    /// assert_eq!(record.get(StatusField::BusyWorkers), Some("5"));
    /// assert_eq!(record.get(StatusField::IdleWorkers), Some("3"));
    /// ```
    pub fn parse(body: &str) -> StatusRecord {
        let mut record = StatusRecord::new();

        let lines = body.lines().skip_while(|line| line.trim().is_empty());

        for line in lines {
            for field in StatusField::ALL {
                if field.strip_label(line).is_none() {
                    continue;
                }

                match line.split_whitespace().nth(1) {
                    Some(value) => record.insert(field, value),
                    None => tracing::debug!("status line '{}' has no value, skipping", line),
                }
            }
        }

        record
    }
}
