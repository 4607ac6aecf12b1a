mod http_status_source;
mod recording_sample_sink;
mod tracing_sample_sink;

pub use http_status_source::HttpStatusSource;
pub use recording_sample_sink::RecordingSampleSink;
pub use tracing_sample_sink::{TracingSampleSink, MONITOR_NAME};
