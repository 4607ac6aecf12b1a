mod sample_sink;
mod status_source;

pub use sample_sink::SampleSink;
pub use status_source::StatusSource;
